use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::AudioSettings;

use super::events::{Listeners, Subscription};
use super::thread::spawn_media_thread;
use super::types::{MediaCmd, MediaElement};

/// Listener set shared between the UI thread (subscribing) and the audio
/// thread (emitting).
pub(super) type ListenersHandle = Arc<Mutex<Listeners<Duration>>>;

/// `MediaElement` backed by rodio on a dedicated audio thread.
pub struct RodioMedia {
    tx: Sender<MediaCmd>,
    time_update: ListenersHandle,
    metadata_loaded: ListenersHandle,
    join: Mutex<Option<JoinHandle<()>>>,
    exited: Receiver<()>,
    shutdown_timeout: Duration,
}

impl RodioMedia {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<MediaCmd>();
        let (exited_tx, exited) = mpsc::channel::<()>();
        let shutdown_timeout = Duration::from_millis(audio_settings.shutdown_timeout_ms);
        let time_update: ListenersHandle = Arc::new(Mutex::new(Listeners::default()));
        let metadata_loaded: ListenersHandle = Arc::new(Mutex::new(Listeners::default()));

        let audio_handle = spawn_media_thread(
            rx,
            time_update.clone(),
            metadata_loaded.clone(),
            audio_settings,
            exited_tx,
        );

        Self {
            tx,
            time_update,
            metadata_loaded,
            join: Mutex::new(Some(audio_handle)),
            exited,
            shutdown_timeout,
        }
    }

    fn send(&self, cmd: MediaCmd) {
        debug!(?cmd, "media command");
        // The audio thread may already be gone (e.g. no output device); commands
        // are fire-and-forget either way.
        let _ = self.tx.send(cmd);
    }

    /// Stop playback and wait for the audio thread to exit, for at most
    /// `audio.shutdown_timeout_ms`. A thread stuck opening a stream is left
    /// behind; the process exit takes it down.
    pub fn shutdown(&self) {
        self.send(MediaCmd::Quit);

        let handle = match self.join.lock() {
            Ok(mut j) => j.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(h) = handle {
            if !join_within(h, &self.exited, self.shutdown_timeout) {
                warn!(timeout = ?self.shutdown_timeout, "media thread did not stop in time, detaching");
            }
        }
    }
}

/// Join `handle` if its thread signals `exited` (by dropping the sender)
/// within `timeout`. Returns `false` and detaches the thread otherwise.
pub(super) fn join_within(handle: JoinHandle<()>, exited: &Receiver<()>, timeout: Duration) -> bool {
    match exited.recv_timeout(timeout) {
        Ok(()) | Err(RecvTimeoutError::Disconnected) => {
            let _ = handle.join();
            true
        }
        Err(RecvTimeoutError::Timeout) => false,
    }
}

fn subscribe(handle: &ListenersHandle) -> Subscription<Duration> {
    match handle.lock() {
        Ok(mut listeners) => listeners.subscribe(),
        Err(poisoned) => poisoned.into_inner().subscribe(),
    }
}

impl MediaElement for RodioMedia {
    fn set_source(&mut self, url: &str) {
        self.send(MediaCmd::SetSource(url.to_string()));
    }

    fn play(&mut self) {
        self.send(MediaCmd::Play);
    }

    fn pause(&mut self) {
        self.send(MediaCmd::Pause);
    }

    fn set_current_time(&mut self, position: Duration) {
        self.send(MediaCmd::SetCurrentTime(position));
    }

    fn set_volume(&mut self, level: f32) {
        self.send(MediaCmd::SetVolume(level));
    }

    fn set_muted(&mut self, muted: bool) {
        self.send(MediaCmd::SetMuted(muted));
    }

    fn on_time_update(&mut self) -> Subscription<Duration> {
        subscribe(&self.time_update)
    }

    fn on_metadata_loaded(&mut self) -> Subscription<Duration> {
        subscribe(&self.metadata_loaded)
    }
}
