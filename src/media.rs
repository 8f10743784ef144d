//! Media playback primitive.
//!
//! `MediaElement` is the narrow command/event surface the player component
//! talks to. `RodioMedia` implements it on top of a dedicated audio thread
//! that streams HTTP sources into a rodio sink.

mod events;
mod player;
mod queue;
mod source;
mod thread;
mod types;

pub use events::Subscription;
pub use player::RodioMedia;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
