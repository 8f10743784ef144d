//! UI rendering helpers for the terminal user interface.
//!
//! This module draws the player with `ratatui`: station info, transport
//! buttons, seek bar and volume controls.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{Player, TransportState, format_time};
use crate::config::{ControlsSettings, TimeLabel, UiSettings};
use crate::media::MediaElement;

/// Render the controls help text, incorporating the configured steps.
fn controls_text(controls: &ControlsSettings) -> String {
    [
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next station".to_string(),
        format!("[H/L] seek -/+{}s", controls.seek_seconds),
        format!("[-/+] volume -/+{:.0}%", controls.volume_step * 100.0),
        "[m] mute".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Label shown right of the seek bar.
fn right_time_text(transport: &TransportState, label: TimeLabel) -> String {
    match label {
        TimeLabel::Total => format_time(transport.duration),
        TimeLabel::Remaining => format!("-{}", format_time(transport.remaining())),
    }
}

fn padded_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame` using the player state.
pub fn draw<M: MediaElement>(
    frame: &mut Frame,
    player: &Player<M>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" airwave ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_station(frame, player, chunks[1]);
    draw_buttons(frame, player, chunks[2]);
    draw_seek_bar(frame, player.transport(), ui_settings.right_time_label, chunks[3]);
    draw_volume(frame, player.transport(), chunks[4]);

    let footer = Paragraph::new(controls_text(controls_settings))
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);
}

fn draw_station<M: MediaElement>(frame: &mut Frame, player: &Player<M>, area: Rect) {
    let station = player.current_station();
    let position = format!(
        "station {}/{}",
        player.playback().current_index + 1,
        player.stations().len()
    );

    let lines = vec![
        Line::from(station.name.as_str()).bold(),
        Line::from(format!("cover: {}", station.cover_image)).dim(),
        Line::from(position).dim(),
    ];
    let info = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(padded_block(" now tuned "));
    frame.render_widget(info, area);
}

fn draw_buttons<M: MediaElement>(frame: &mut Frame, player: &Player<M>, area: Rect) {
    let (icon, state) = if player.playback().is_playing {
        ("||", "Playing")
    } else {
        ("|>", "Paused")
    };
    let buttons = Paragraph::new(format!("|<<    {icon}    >>|    {state}"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(buttons, area);
}

fn draw_seek_bar(frame: &mut Frame, transport: &TransportState, label: TimeLabel, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" position ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(1),
            Constraint::Length(8),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format_time(transport.current_time)).alignment(Alignment::Center),
        row[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
            .ratio(transport.progress_ratio())
            .label(""),
        row[1],
    );
    frame.render_widget(
        Paragraph::new(right_time_text(transport, label)).alignment(Alignment::Center),
        row[2],
    );
}

fn draw_volume(frame: &mut Frame, transport: &TransportState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" volume ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(inner);

    let indicator = if transport.shows_muted() { "[muted]" } else { "[vol]" };
    frame.render_widget(Paragraph::new(indicator), row[0]);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
            .ratio(f64::from(transport.volume.clamp(0.0, 1.0)))
            .label(format!("{:.0}%", transport.volume * 100.0)),
        row[1],
    );
}
