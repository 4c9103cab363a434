use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/karaoke/config.toml` or `~/.config/karaoke/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `KARAOKE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tracks: TracksSettings,
    pub log: LogSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracksSettings {
    /// Directory scanned for track files on startup.
    pub dir: PathBuf,
    /// Track opened by "Open" when the scan found nothing.
    pub default_track: PathBuf,
    /// File extensions to treat as track files (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for TracksSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("tracks"),
            default_track: PathBuf::from("tracks/test.json"),
            extensions: vec!["json".into()],
            recursive: true,
            follow_links: true,
            include_hidden: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file, opened in append mode.
    pub file: PathBuf,
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("log.txt"),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the track screen lists lyric lines under the metadata.
    pub show_lyrics: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Karaoke Client ~ ".to_string(),
            show_lyrics: true,
        }
    }
}
