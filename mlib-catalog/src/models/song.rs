//! Song record and request payloads

use serde::{Deserialize, Serialize};

/// Persisted song record
///
/// Wire format uses `group` and `filePath`; `text` and `filePath` are
/// omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Store-assigned identity, immutable after creation
    pub id: i64,
    pub title: String,
    /// Performing artist or band
    pub group: String,
    /// Full lyrics; stanzas are separated by a blank line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        rename = "filePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_path: Option<String>,
}

/// Song ready for insertion (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub group: String,
    pub text: String,
    pub file_path: String,
}

impl NewSong {
    /// Attach the store-assigned id
    pub fn with_id(self, id: i64) -> Song {
        Song {
            id,
            title: self.title,
            group: self.group,
            text: Some(self.text),
            file_path: Some(self.file_path),
        }
    }
}

/// Body of `POST /song`
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSongRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub group: String,
}

/// Body of `PUT /song/:id`
///
/// Only fields present in the request are applied. Values are not validated,
/// so an empty string is a legal overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongPatch {
    pub group: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
}

impl SongPatch {
    /// Merge the supplied fields into `song`, leaving the rest untouched
    pub fn apply_to(self, song: &mut Song) {
        if let Some(group) = self.group {
            song.group = group;
        }
        if let Some(title) = self.title {
            song.title = title;
        }
        if let Some(text) = self.text {
            song.text = Some(text);
        }
        if let Some(file_path) = self.file_path {
            song.file_path = Some(file_path);
        }
    }
}
