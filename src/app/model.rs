//! The player component: playback controller plus transport state.

use std::time::Duration;

use tracing::{debug, info};

use crate::media::{MediaElement, Subscription};
use crate::stations::{Station, StationList};

use super::transport::TransportState;

/// Which station is selected and whether the user asked for playback.
///
/// `is_playing` is intent, not confirmation: the media element never
/// acknowledges a play request, so this can disagree with what is audible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
}

/// The mounted radio player.
///
/// Owns both event subscriptions on its media element; dropping the player
/// releases them.
pub struct Player<M: MediaElement> {
    stations: StationList,
    media: M,
    playback: PlaybackState,
    transport: TransportState,
    // Mirror of the element's own mute flag, which `toggle_mute` flips
    // independently of `transport.is_muted`.
    element_muted: bool,
    time_updates: Option<Subscription<Duration>>,
    metadata_loaded: Option<Subscription<Duration>>,
}

impl<M: MediaElement> Player<M> {
    /// Mount the player: subscribe to media events and load the first station.
    pub fn mount(stations: StationList, mut media: M) -> Self {
        let time_updates = Some(media.on_time_update());
        let metadata_loaded = Some(media.on_metadata_loaded());

        let mut player = Self {
            stations,
            media,
            playback: PlaybackState::default(),
            transport: TransportState::default(),
            element_muted: false,
            time_updates,
            metadata_loaded,
        };
        player.load_current();
        player
    }

    pub fn stations(&self) -> &StationList {
        &self.stations
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn transport(&self) -> &TransportState {
        &self.transport
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn current_station(&self) -> &Station {
        self.stations.at(self.playback.current_index)
    }

    /// Pause when playing, play otherwise, and flip the play intent.
    pub fn toggle_play(&mut self) {
        if self.playback.is_playing {
            self.media.pause();
        } else {
            self.media.play();
        }
        self.playback.is_playing = !self.playback.is_playing;
    }

    pub fn next_track(&mut self) {
        let index = self.stations.next_index(self.playback.current_index);
        self.select(index);
    }

    pub fn prev_track(&mut self) {
        let index = self.stations.prev_index(self.playback.current_index);
        self.select(index);
    }

    /// Jump to `target`. Range checks belong to the input control.
    pub fn seek(&mut self, target: Duration) {
        self.media.set_current_time(target);
        self.transport.current_time = target;
    }

    pub fn set_volume(&mut self, level: f32) {
        self.media.set_volume(level);
        self.transport.volume = level;
        self.transport.is_muted = level == 0.0;
    }

    /// Flip mute without touching the numeric volume.
    pub fn toggle_mute(&mut self) {
        self.transport.is_muted = !self.transport.is_muted;
        self.element_muted = !self.element_muted;
        self.media.set_muted(self.element_muted);
    }

    /// Apply position and duration reports delivered since the last call.
    pub fn pump_media_events(&mut self) {
        if let Some(sub) = self.time_updates.as_ref() {
            if let Some(latest) = sub.pending().last() {
                self.transport.current_time = latest;
            }
        }
        if let Some(sub) = self.metadata_loaded.as_ref() {
            if let Some(latest) = sub.pending().last() {
                debug!(?latest, "metadata loaded");
                self.transport.duration = latest;
            }
        }
    }

    /// Release both media subscriptions. Also happens on drop.
    pub fn unmount(&mut self) {
        self.time_updates = None;
        self.metadata_loaded = None;
    }

    fn select(&mut self, index: usize) {
        if index == self.playback.current_index {
            return;
        }
        self.playback.current_index = index;
        self.load_current();
    }

    fn load_current(&mut self) {
        let station = self.current_station();
        info!(station = %station.name, "tuning");
        let url = station.stream_url.clone();
        self.media.set_source(&url);
        if self.playback.is_playing {
            self.media.play();
        }
    }
}
