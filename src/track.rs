//! Karaoke track data model and its on-disk JSON format.
//!
//! `model` holds the in-memory representation (metadata plus timed lyric
//! lines), `store` reads and writes track files.

mod error;
mod model;
pub mod store;

pub use error::TrackError;
pub use model::*;
