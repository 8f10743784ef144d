//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the player (station list,
//! audio, controls, UI, logging) and helpers to load them from disk and the
//! environment.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
