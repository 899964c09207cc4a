use serde::{Deserialize, Serialize};

/// One playlist entry. Immutable once loaded; list order is playback order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: Album,
    /// Resource handed to the media element when the track is loaded.
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    /// Cover art, if any.
    pub image: Option<String>,
}
