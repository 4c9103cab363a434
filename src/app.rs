//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current scene, the
//! loaded track, the per-scene button tables and the menu selection.

mod model;

pub use model::*;
