//! Terminal karaoke player.
//!
//! [`track`] holds the karaoke track model and its JSON load/save routines;
//! the remaining modules make up the interactive player built on top of it.

pub mod app;
pub mod config;
pub mod library;
pub mod runtime;
pub mod track;
pub mod ui;
