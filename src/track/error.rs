use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or writing a track file.
#[derive(Error, Debug)]
pub enum TrackError {
    /// The file could not be opened, read or written.
    #[error("could not open file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the track shape.
    #[error("invalid track file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TrackError {
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Path of the file the failed operation was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
