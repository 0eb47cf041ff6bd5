//! Shared constants used across Trackdeck crates.

use std::time::Duration;

/// Quiet interval the search filter waits for after the last keystroke.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default upper bound for playlist list replies sent to the GUI.
pub const DEFAULT_LIST_PLAYLISTS_LIMIT: usize = 512;

/// File name of the JSON library feed under the data directory.
pub const LIBRARY_FEED_FILE_NAME: &str = "library.json";

/// File name of the one-line theme preference under the config directory.
pub const THEME_PREF_FILE_NAME: &str = "theme";
