//! Track library: discovers karaoke track files on disk for the menu.

mod model;
mod scan;

pub use model::TrackEntry;
pub use scan::scan;

#[cfg(test)]
mod tests;
