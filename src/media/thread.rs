use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

use crate::config::AudioSettings;

use super::player::ListenersHandle;
use super::queue::coalesce;
use super::source::{StreamOptions, open_stream_sink};
use super::types::MediaCmd;

/// Spawn the audio thread. `exited` is dropped when the thread ends, however
/// it ends, which lets the owner wait for it with a deadline.
pub(super) fn spawn_media_thread(
    rx: Receiver<MediaCmd>,
    time_update: ListenersHandle,
    metadata_loaded: ListenersHandle,
    audio_settings: AudioSettings,
    exited: Sender<()>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _exited = exited;
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                error!("no audio output device: {e}");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        // The download task of the current stream runs on this runtime, so it
        // must outlive every sink built from it.
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("failed to start stream runtime: {e}");
                return;
            }
        };

        let mut element = Element {
            sink: None,
            runtime,
            stream,
            volume: 1.0,
            muted: false,
            playing: false,
            time_update,
            metadata_loaded,
            options: StreamOptions::from_settings(&audio_settings),
        };

        let tick = Duration::from_millis(audio_settings.time_update_ms.max(1));
        let mut last_tick = Instant::now();

        'run: loop {
            match rx.recv_timeout(tick) {
                Ok(first) => {
                    let mut batch = vec![first];
                    batch.extend(rx.try_iter());
                    for cmd in coalesce(batch) {
                        if cmd == MediaCmd::Quit {
                            element.stop();
                            break 'run;
                        }
                        element.apply(cmd);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    element.stop();
                    break;
                }
            }

            if last_tick.elapsed() >= tick {
                last_tick = Instant::now();
                element.report_position();
            }
        }

        debug!("media thread exiting");
    })
}

/// State owned by the audio thread: the output, the current source and the
/// element-level volume/mute flags that survive source changes.
struct Element {
    // Field order is drop order: the sink goes before the runtime feeding it.
    sink: Option<Sink>,
    runtime: Runtime,
    stream: OutputStream,
    volume: f32,
    muted: bool,
    playing: bool,
    time_update: ListenersHandle,
    metadata_loaded: ListenersHandle,
    options: StreamOptions,
}

impl Element {
    fn apply(&mut self, cmd: MediaCmd) {
        match cmd {
            MediaCmd::SetSource(url) => self.load(&url),
            MediaCmd::Play => {
                self.playing = true;
                match self.sink.as_ref() {
                    Some(sink) => sink.play(),
                    None => debug!("play requested without a loaded source"),
                }
            }
            MediaCmd::Pause => {
                self.playing = false;
                if let Some(sink) = self.sink.as_ref() {
                    sink.pause();
                }
            }
            MediaCmd::SetCurrentTime(position) => {
                let Some(sink) = self.sink.as_ref() else {
                    return;
                };
                match sink.try_seek(position) {
                    Ok(()) => emit(&self.time_update, position),
                    Err(e) => warn!("seek to {position:?} failed: {e}"),
                }
            }
            MediaCmd::SetVolume(level) => {
                self.volume = level.clamp(0.0, 1.0);
                self.apply_gain();
            }
            MediaCmd::SetMuted(muted) => {
                self.muted = muted;
                self.apply_gain();
            }
            MediaCmd::Quit => self.stop(),
        }
    }

    /// Replace the current source. Like a fresh media load, the new source
    /// starts paused; a following `Play` resumes it.
    fn load(&mut self, url: &str) {
        self.stop();
        report_load_started(&self.time_update, &self.metadata_loaded);
        info!(url, "loading stream");

        match open_stream_sink(&self.runtime, &self.stream, url, self.options) {
            Ok((sink, total)) => {
                self.sink = Some(sink);
                self.apply_gain();
                report_loaded(&self.metadata_loaded, total);
            }
            Err(e) => warn!("{e:#}"),
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.playing = false;
    }

    fn apply_gain(&self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(gain(self.volume, self.muted));
        }
    }

    fn report_position(&self) {
        if !self.playing {
            return;
        }
        if let Some(sink) = self.sink.as_ref() {
            emit(&self.time_update, sink.get_pos());
        }
    }
}

/// Output gain for the element's volume and mute flag. Muting silences
/// without forgetting the volume.
pub(super) fn gain(volume: f32, muted: bool) -> f32 {
    if muted { 0.0 } else { volume.clamp(0.0, 1.0) }
}

/// A new source starts from nothing: position and duration drop to zero
/// before the stream is opened, so a failed open leaves them there.
pub(super) fn report_load_started(time_update: &ListenersHandle, metadata_loaded: &ListenersHandle) {
    emit(time_update, Duration::ZERO);
    emit(metadata_loaded, Duration::ZERO);
}

/// The source opened; its duration is known, or zero for live streams.
pub(super) fn report_loaded(metadata_loaded: &ListenersHandle, total: Option<Duration>) {
    emit(metadata_loaded, total.unwrap_or(Duration::ZERO));
}

fn emit(listeners: &ListenersHandle, value: Duration) {
    if let Ok(mut l) = listeners.lock() {
        l.emit(value);
    }
}
