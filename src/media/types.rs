//! Commands and the element trait shared by the player and the audio thread.

use std::time::Duration;

use super::events::Subscription;

/// Commands sent from the UI thread to the audio thread.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCmd {
    /// Point the element at a new stream. Loading leaves it paused.
    SetSource(String),
    Play,
    Pause,
    /// Jump to an absolute position in the current source.
    SetCurrentTime(Duration),
    /// Linear volume in `0.0..=1.0`.
    SetVolume(f32),
    SetMuted(bool),
    /// Stop playback and exit the audio thread.
    Quit,
}

/// A media playback primitive.
///
/// Commands are fire-and-forget: nothing reports whether a play request or a
/// stream load actually succeeded. The only feedback are the two event
/// streams handed out by `on_time_update` and `on_metadata_loaded`.
pub trait MediaElement {
    fn set_source(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_current_time(&mut self, position: Duration);
    fn set_volume(&mut self, level: f32);
    fn set_muted(&mut self, muted: bool);

    /// Subscribe to playback position reports.
    fn on_time_update(&mut self) -> Subscription<Duration>;
    /// Subscribe to duration reports, sent once a source's metadata is known.
    fn on_metadata_loaded(&mut self) -> Subscription<Duration>;
}
