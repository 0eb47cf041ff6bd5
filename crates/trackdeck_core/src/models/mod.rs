//! Data models for the playlist library.

mod playlist;

pub use playlist::{Playlist, PlaylistSummary};
