//! Reading and writing track files.
//!
//! Files are JSON documents shaped like [`Track`]. Loading rewrites
//! `metadata.audioFile` so it points next to the track file; saving writes the
//! in-memory value back as-is, so a load/save round trip persists the resolved
//! path.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Track, TrackError};

const INDENT: &[u8] = b"    ";

/// Load a track file. Either the whole track is returned or an error; nothing
/// is partially populated.
///
/// `metadata.audioFile` is prefixed with `path` exactly as given, so a relative
/// `path` yields an audio path relative to the current directory. Non-UTF-8
/// bytes in `path` are replaced with U+FFFD in that prefix.
pub fn load(path: impl AsRef<Path>) -> Result<Track, TrackError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| TrackError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut track: Track = serde_json::from_slice(&bytes).map_err(|source| TrackError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    // `audio_file` is a `String`, so a path that is not valid UTF-8 contributes
    // its lossy form (U+FFFD for bad bytes) to the prefix.
    track.metadata.audio_file =
        resolve_audio_path(&path.to_string_lossy(), &track.metadata.audio_file);
    Ok(track)
}

/// Write `track` to `path`, truncating any existing file.
pub fn save(track: &Track, path: impl AsRef<Path>) -> Result<(), TrackError> {
    let path = path.as_ref();
    let io_err = |source: io::Error| TrackError::Io {
        path: path.to_path_buf(),
        source,
    };

    let buf = to_pretty_json(track).map_err(io_err)?;
    fs::write(path, buf).map_err(io_err)
}

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_pretty_json(track: &Track) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    track.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Directory part of `track_path`: everything up to and including the last
/// `/` or `\`, or `""` when there is no separator.
pub fn track_dir(track_path: &str) -> &str {
    match track_path.rfind(['/', '\\']) {
        Some(idx) => &track_path[..=idx],
        None => "",
    }
}

/// Prefix `audio_file` with the directory of the track file that names it.
pub fn resolve_audio_path(track_path: &str, audio_file: &str) -> String {
    format!("{}{}", track_dir(track_path), audio_file)
}
