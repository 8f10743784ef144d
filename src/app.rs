//! Application module: the radio player component.
//!
//! `Player` combines the playback controller (which station, play intent)
//! with the transport state mirrored from the media element (position,
//! duration, volume, mute).

mod model;
mod transport;

pub use model::*;
pub use transport::*;
