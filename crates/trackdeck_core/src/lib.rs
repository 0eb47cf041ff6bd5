//! Core domain library for Trackdeck (config, library engine, models).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Trackdeck crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Library feed loading and the built-in sample library.
pub mod feed;
/// Card filtering and sorting over a rendered playlist collection.
pub mod library;
/// Data models for the playlist library.
pub mod models;
/// Theme mode and preference persistence.
pub mod theme;

pub use config::Config;
pub use error::AppError;
pub use library::{sort_cards, CardSurface, SearchFilter, SortKey};
pub use models::{Playlist, PlaylistSummary};
pub use theme::ThemeMode;
