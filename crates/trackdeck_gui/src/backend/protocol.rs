//! Protocol types for the GUI backend worker.

use trackdeck_core::PlaylistSummary;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Fetch a snapshot of the playlist library, capped by `limit`.
    ListPlaylists { limit: usize },
    /// Re-read the feed file from disk, then reply with a fresh snapshot.
    ReloadLibrary { limit: usize },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum CoreEvent {
    /// Response containing the current playlist list snapshot.
    PlaylistList { items: Vec<PlaylistSummary> },
    /// A backend failure occurred (feed unreadable, etc).
    Error { message: String },
}
