//! Library feed loading and the built-in sample library.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::models::Playlist;

/// Load the playlist library from a JSON feed file.
///
/// # Errors
/// [`AppError::NotFound`] when the feed file does not exist, so callers can
/// fall back to [`sample_library`]; [`AppError::Serialization`] when the file
/// exists but does not parse; [`AppError::Io`] for other read failures.
pub fn load_library(path: &Path) -> Result<Vec<Playlist>, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound);
        }
        Err(err) => return Err(err.into()),
    };
    let playlists: Vec<Playlist> = serde_json::from_str(&raw)?;
    info!(
        "loaded {} playlists from {}",
        playlists.len(),
        path.display()
    );
    Ok(playlists)
}

/// Built-in library used when no feed file exists yet.
pub fn sample_library() -> Vec<Playlist> {
    let entries: &[(&str, &str, &str, u32, &str, bool)] = &[
        (
            "sample-road-trip",
            "Road Trip Anthems",
            "you",
            48,
            "2024-06-18T09:30:00Z",
            true,
        ),
        (
            "sample-deep-focus",
            "Deep Focus",
            "you",
            112,
            "2024-02-01T14:05:00Z",
            false,
        ),
        (
            "sample-workout",
            "Workout Mix",
            "alex",
            37,
            "2023-11-23T07:45:00Z",
            true,
        ),
        (
            "sample-sunday-jazz",
            "Sunday Morning Jazz",
            "you",
            64,
            "2023-07-09T10:00:00Z",
            false,
        ),
        (
            "sample-throwbacks",
            "2000s Throwbacks",
            "sam",
            95,
            "2024-04-12T19:20:00Z",
            true,
        ),
    ];
    let mut playlists: Vec<Playlist> = entries
        .iter()
        .map(|&(id, title, owner, track_count, created_at, public)| Playlist {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            owner: owner.to_string(),
            track_count,
            created_at: created_at.to_string(),
            image_url: None,
            public,
        })
        .collect();
    // One entry exercising the absent-field sentinels.
    playlists.push(Playlist {
        id: "sample-new".to_string(),
        title: "New Playlist".to_string(),
        description: String::new(),
        owner: String::new(),
        track_count: 0,
        created_at: String::new(),
        image_url: None,
        public: false,
    });
    playlists
}
