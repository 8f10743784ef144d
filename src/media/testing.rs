//! Recording `MediaElement` for component and runtime tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::events::{Listeners, Subscription};
use super::types::{MediaCmd, MediaElement};

/// Records every command and lets the test emit events afterwards.
#[derive(Clone, Default)]
pub(crate) struct FakeMedia {
    pub log: Rc<RefCell<Vec<MediaCmd>>>,
    pub time_update: Rc<RefCell<Listeners<Duration>>>,
    pub metadata_loaded: Rc<RefCell<Listeners<Duration>>>,
}

impl FakeMedia {
    pub fn take_log(&self) -> Vec<MediaCmd> {
        self.log.borrow_mut().drain(..).collect()
    }

    pub fn report_time(&self, secs: u64) {
        self.time_update.borrow_mut().emit(Duration::from_secs(secs));
    }

    pub fn report_duration(&self, secs: u64) {
        self.metadata_loaded.borrow_mut().emit(Duration::from_secs(secs));
    }
}

impl MediaElement for FakeMedia {
    fn set_source(&mut self, url: &str) {
        self.log.borrow_mut().push(MediaCmd::SetSource(url.to_string()));
    }
    fn play(&mut self) {
        self.log.borrow_mut().push(MediaCmd::Play);
    }
    fn pause(&mut self) {
        self.log.borrow_mut().push(MediaCmd::Pause);
    }
    fn set_current_time(&mut self, position: Duration) {
        self.log.borrow_mut().push(MediaCmd::SetCurrentTime(position));
    }
    fn set_volume(&mut self, level: f32) {
        self.log.borrow_mut().push(MediaCmd::SetVolume(level));
    }
    fn set_muted(&mut self, muted: bool) {
        self.log.borrow_mut().push(MediaCmd::SetMuted(muted));
    }
    fn on_time_update(&mut self) -> Subscription<Duration> {
        self.time_update.borrow_mut().subscribe()
    }
    fn on_metadata_loaded(&mut self) -> Subscription<Duration> {
        self.metadata_loaded.borrow_mut().subscribe()
    }
}
