use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::Player;
use crate::config;
use crate::media::MediaElement;
use crate::ui;

use super::input::{seek_target, volume_notch};

/// Whether the loop keeps going after handling an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main terminal event loop: pumps media events into the player, draws, and
/// turns key presses into player operations. Returns `Ok(())` on quit.
pub fn run<M: MediaElement>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player<M>,
) -> anyhow::Result<()> {
    loop {
        // Event callbacks run here, on the UI thread, between input handlers.
        player.pump_media_events();

        terminal.draw(|f| ui::draw(f, player, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, &settings.controls, player) == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Map one key press onto the player.
pub fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    controls: &config::ControlsSettings,
    player: &mut Player<M>,
) -> Flow {
    debug!(code = ?key.code, "key");
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_play(),
        KeyCode::Char('l') | KeyCode::Right => player.next_track(),
        KeyCode::Char('h') | KeyCode::Left => player.prev_track(),
        KeyCode::Char('L') => seek_by(player, controls.seek_seconds as i64),
        KeyCode::Char('H') => seek_by(player, -(controls.seek_seconds as i64)),
        KeyCode::Char('+') | KeyCode::Char('=') => nudge_volume(player, controls.volume_step, 1),
        KeyCode::Char('-') => nudge_volume(player, controls.volume_step, -1),
        KeyCode::Char('m') => player.toggle_mute(),
        _ => {}
    }
    Flow::Continue
}

fn seek_by<M: MediaElement>(player: &mut Player<M>, delta_secs: i64) {
    let t = player.transport();
    if let Some(target) = seek_target(t.current_time, t.duration, delta_secs) {
        player.seek(target);
    }
}

fn nudge_volume<M: MediaElement>(player: &mut Player<M>, step: f32, steps: i32) {
    let level = volume_notch(player.transport().volume, step, steps);
    player.set_volume(level);
}
