//! Playlist records loaded from the library feed.

use serde::{Deserialize, Serialize};

/// Full playlist record as stored in the library feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    /// Number of tracks; feeds may omit this for empty playlists.
    #[serde(default)]
    pub track_count: u32,
    /// Sortable creation timestamp text (ISO-8601 style). Compared as an
    /// opaque string; never parsed.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub public: bool,
}

/// Lightweight playlist projection used by GUI list paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub track_count: u32,
    pub created_at: String,
    pub image_url: Option<String>,
}

impl From<&Playlist> for PlaylistSummary {
    fn from(value: &Playlist) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            owner: value.owner.clone(),
            track_count: value.track_count,
            created_at: value.created_at.clone(),
            image_url: value.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let playlist: Playlist =
            serde_json::from_str(r#"{"id":"p1","title":"Road Trip"}"#).unwrap();
        assert_eq!(playlist.track_count, 0);
        assert_eq!(playlist.created_at, "");
        assert_eq!(playlist.description, "");
        assert!(playlist.image_url.is_none());
        assert!(!playlist.public);
    }

    #[test]
    fn summary_projects_list_fields() {
        let playlist: Playlist = serde_json::from_str(
            r#"{"id":"p2","title":"Focus","owner":"ada","track_count":42,
                "created_at":"2024-05-05T12:00:00Z","image_url":"cover.png"}"#,
        )
        .unwrap();
        let summary = PlaylistSummary::from(&playlist);
        assert_eq!(summary.id, "p2");
        assert_eq!(summary.title, "Focus");
        assert_eq!(summary.track_count, 42);
        assert_eq!(summary.created_at, "2024-05-05T12:00:00Z");
        assert_eq!(summary.image_url.as_deref(), Some("cover.png"));
    }
}
