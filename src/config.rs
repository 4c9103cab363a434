//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the player (where tracks live,
//! where the log goes, what the UI shows) and helpers to load them from disk.

mod load;
mod schema;

pub use schema::*;
