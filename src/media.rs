// SPDX-License-Identifier: MPL-2.0
//! Domain data for the playback screen.

use serde::{Deserialize, Serialize};

/// Opaque identity of a playable item on the remote media service.
///
/// Required before any remote toggle action is permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: String,
}

impl MediaItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A video as known to the playback screen.
///
/// A missing [`MediaItem`] means the remote identity is not yet resolved;
/// remote toggles treat that as a precondition failure, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: Option<String>,
    pub media_item: Option<MediaItem>,
}

impl Video {
    /// A video whose remote identity is not yet resolved.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            media_item: None,
        }
    }

    pub fn with_media_item(id: impl Into<String>, item: MediaItem) -> Self {
        Self {
            id: id.into(),
            title: None,
            media_item: Some(item),
        }
    }
}

/// Like/dislike state reported by the remote service metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

/// Metadata for the current video, applied directly to the button states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaMetadata {
    pub like_status: LikeStatus,
    pub subscribed: bool,
}

/// A configurable subtitle rendering style.
///
/// Equality picks the currently-selected entry when the settings dialog's
/// selection list is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleStyle {
    pub id: u32,
    pub display_name: String,
}

impl SubtitleStyle {
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A subtitle track offered by the playback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleFormat {
    pub language: String,
    pub selected: bool,
}
