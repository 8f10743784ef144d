//! Event subscriptions between the audio thread and the UI thread.
//!
//! A `Subscription` owns the receiving end of a channel. Dropping it releases
//! the subscription: the emitting side notices the closed channel on its next
//! `emit` and forgets the listener.

use std::sync::mpsc::{self, Receiver, Sender, TryIter};

/// RAII handle for one event subscription.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Drain events delivered since the last call without blocking.
    pub fn pending(&self) -> TryIter<'_, T> {
        self.rx.try_iter()
    }
}

/// The emitting side: a set of live subscribers for one event kind.
#[derive(Debug)]
pub struct Listeners<T> {
    senders: Vec<Sender<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            senders: Vec::new(),
        }
    }
}

impl<T: Clone> Listeners<T> {
    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        Subscription { rx }
    }

    /// Deliver `event` to every live subscriber, pruning released ones.
    pub fn emit(&mut self, event: T) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of subscribers seen alive at the last `emit`.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
