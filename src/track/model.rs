//! In-memory karaoke track types.
//!
//! Field order in these structs is the key order used when a track is saved,
//! so keep it in sync with the file layout.

use serde::{Deserialize, Deserializer, Serialize};

/// A full karaoke song: metadata plus lyric lines in playback order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub metadata: Metadata,
    /// A missing `lyrics` key reads as no lines.
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub language: String,
    /// Audio file path. After `store::load` this is relative to the loader,
    /// not to the track file.
    pub audio_file: String,
}

/// One line of lyrics, starting at `start_time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    /// Opaque time offset; same unit as `Syllable::duration`.
    pub start_time: i64,
    pub text: LyricText,
    #[serde(default)]
    pub syllables: Vec<Syllable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricText {
    pub original: String,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pronunciation: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub meaning: Option<String>,
}

/// Smallest timed unit of a lyric line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllable {
    pub text: String,
    pub duration: i64,
    pub note_key: String,
}

/// Optional text field that, when the key is present, must hold a string.
/// A missing key is handled by `#[serde(default)]`; an explicit `null` is rejected.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl Track {
    /// Display string for lists: `"Artist - Title"`, or just the title when
    /// the artist is blank.
    pub fn display(&self) -> String {
        let title = self.metadata.title.trim();
        match self.metadata.artist.trim() {
            "" => title.to_string(),
            artist => format!("{artist} - {title}"),
        }
    }

    /// Total number of syllables across all lines.
    pub fn syllable_count(&self) -> usize {
        self.lyrics.iter().map(|l| l.syllables.len()).sum()
    }
}
