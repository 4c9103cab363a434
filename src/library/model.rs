use std::path::PathBuf;

/// A track file found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub path: PathBuf,
    /// `"Artist - Title"` when the file parses, else the file stem.
    pub display: String,
    /// Whether the file parsed during the scan.
    pub readable: bool,
}
