//! UI panel modules extracted from the main app update loop.

/// Central playlist card grid and empty state.
pub(super) mod card_grid;
/// Centered loading overlay.
pub(super) mod loading;
/// New-playlist dialog with required-field validation.
pub(super) mod new_playlist;
/// Top bar and left sidebar surfaces.
pub(super) mod sidebar;
/// Transient toast notifications.
pub(super) mod toasts;
