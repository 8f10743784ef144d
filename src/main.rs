mod app;
mod config;
mod media;
mod runtime;
mod stations;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
