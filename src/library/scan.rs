use std::path::Path;

use walkdir::WalkDir;

use crate::config::TracksSettings;
use crate::track::store;

use super::model::TrackEntry;

fn is_track_file(path: &Path, settings: &TracksSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn entry_for(path: &Path) -> TrackEntry {
    match store::load(path) {
        Ok(track) => TrackEntry {
            path: path.to_path_buf(),
            display: track.display(),
            readable: true,
        },
        Err(e) => {
            tracing::debug!("skipping metadata for {}: {e}", path.display());
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            TrackEntry {
                path: path.to_path_buf(),
                display: stem,
                readable: false,
            }
        }
    }
}

/// Collect track files below `dir`, sorted case-insensitively by display name.
/// A missing directory yields an empty list.
pub fn scan(dir: &Path, settings: &TracksSettings) -> Vec<TrackEntry> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut entries: Vec<TrackEntry> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .filter(|e| is_track_file(e.path(), settings))
        .map(|e| entry_for(e.path()))
        .collect();

    entries.sort_by(|a, b| a.display.to_lowercase().cmp(&b.display.to_lowercase()));
    entries
}
