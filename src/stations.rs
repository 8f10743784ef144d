//! Station registry: the fixed, ordered list of radio streams the player can
//! tune into.
//!
//! The registry is built once at startup (from configuration or the built-in
//! list) and only ever read afterwards.

mod builtin;
mod model;

pub use builtin::builtin_stations;
pub use model::*;
