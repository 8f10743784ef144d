use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::stations::{Station, builtin_stations};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/airwave/config.toml` or `~/.config/airwave/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AIRWAVE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub stations: StationsSetting,
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// The station list, in tuning order. Written as `[[stations]]` tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StationsSetting(pub Vec<Station>);

impl Default for StationsSetting {
    fn default() -> Self {
        Self(builtin_stations())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, `0.0..=1.0`.
    pub initial_volume: f32,
    /// How often the playing position is reported to the UI (milliseconds).
    pub time_update_ms: u64,
    /// Bytes to buffer before a stream starts decoding.
    pub prefetch_bytes: u64,
    /// Size of the ring buffer kept for streams without a known length.
    /// Sources with a length are stored whole.
    pub buffer_bytes: u64,
    /// Give up connecting to a stream after this long (milliseconds).
    pub connect_timeout_ms: u64,
    /// How long quitting waits for the audio thread before leaving it behind
    /// (milliseconds).
    pub shutdown_timeout_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            time_update_ms: 250,
            prefetch_bytes: 64 * 1024,
            buffer_bytes: 1024 * 1024,
            connect_timeout_ms: 10_000,
            shutdown_timeout_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to seek when pressing `H` / `L`.
    pub seek_seconds: u64,
    /// Volume slider step for `+` / `-`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_seconds: 10,
            volume_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// What the label right of the seek bar shows.
    pub right_time_label: TimeLabel,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "airwave".to_string(),
            right_time_label: TimeLabel::Total,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeLabel {
    #[serde(alias = "duration")]
    Total,
    #[serde(alias = "left")]
    Remaining,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `info` or `airwave=debug`.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/airwave/airwave.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
