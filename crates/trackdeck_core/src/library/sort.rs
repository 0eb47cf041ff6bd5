//! Stable multi-key sorting of playlist cards.

use super::CardSurface;

/// Supported sort orderings for the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Title ascending, case-insensitive.
    Name,
    /// Track count descending.
    Tracks,
    /// Creation timestamp text descending (lexicographic, never parsed).
    Recent,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Tracks, SortKey::Recent];

    /// Parse a raw selector value. Unknown values yield `None`; callers are
    /// expected to log and leave the current order untouched.
    pub fn parse(raw: &str) -> Option<SortKey> {
        match raw {
            "name" => Some(SortKey::Name),
            "tracks" => Some(SortKey::Tracks),
            "recent" => Some(SortKey::Recent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Tracks => "tracks",
            SortKey::Recent => "recent",
        }
    }

    /// Human-readable label for selector widgets.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Tracks => "Most tracks",
            SortKey::Recent => "Recently created",
        }
    }
}

/// Reorder the surface by `key` in one shot.
///
/// Computes a stable permutation over current indices and delivers it with a
/// single [`CardSurface::apply_order`] call, so observers never see a
/// partially sorted collection. Ties keep their prior relative order, and
/// re-sorting with the same key is a fixed point.
pub fn sort_cards<S: CardSurface>(surface: &mut S, key: SortKey) {
    let count = surface.card_count();
    let mut order: Vec<usize> = (0..count).collect();
    match key {
        SortKey::Name => {
            let folded: Vec<String> = (0..count)
                .map(|i| surface.card_title(i).to_lowercase())
                .collect();
            order.sort_by(|&a, &b| folded[a].cmp(&folded[b]));
        }
        SortKey::Tracks => {
            let counts: Vec<u32> = (0..count).map(|i| surface.card_track_count(i)).collect();
            // Reversed comparison keeps descending order stable.
            order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
        }
        SortKey::Recent => {
            let stamps: Vec<&str> = (0..count).map(|i| surface.card_created_at(i)).collect();
            order.sort_by(|&a, &b| stamps[b].cmp(stamps[a]));
        }
    }
    surface.apply_order(&order);
}
