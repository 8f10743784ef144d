use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::Player;
use crate::media::RodioMedia;
use crate::stations::StationList;

mod event_loop;
mod input;
mod logging;
mod settings;

pub fn run() -> anyhow::Result<()> {
    let (settings, fallback) = settings::load_settings();

    if std::env::args().skip(1).any(|a| a == "--print-config") {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    if let Err(e) = logging::init(&settings.log) {
        eprintln!("airwave: logging disabled: {e:#}");
    }
    if let Some(msg) = fallback {
        warn!("{msg}");
    }

    // Validation already rejected an empty list; defaults cover the rest.
    let stations = StationList::new(settings.stations.0.clone()).unwrap_or_default();
    info!(stations = stations.len(), "starting");

    let media = RodioMedia::new(settings.audio.clone());
    let mut player = Player::mount(stations, media);
    player.set_volume(settings.audio.initial_volume);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    player.unmount();
    player.media().shutdown();
    info!("stopped");

    run_result
}
