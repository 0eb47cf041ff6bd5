//! Card filtering and sorting over a rendered playlist collection.
//!
//! The collection itself is owned by the rendering layer; this module reaches
//! it only through [`CardSurface`]. Filtering and sorting never add or remove
//! cards: they flag per-card visibility, toggle the shared empty-state
//! indicator, and apply presentation-order permutations.

mod filter;
mod sort;

pub use filter::SearchFilter;
pub use sort::{sort_cards, SortKey};

/// Rendering-layer seam for a collection of playlist cards.
///
/// Indices are positions in the current collection, `0..card_count()`.
pub trait CardSurface {
    /// Number of cards currently in the collection.
    fn card_count(&self) -> usize;
    /// Display title of the card at `index`.
    fn card_title(&self, index: usize) -> &str;
    /// Track count of the card at `index`; 0 when the feed omitted it.
    fn card_track_count(&self, index: usize) -> u32;
    /// Raw creation timestamp text of the card at `index`; "" when absent.
    fn card_created_at(&self, index: usize) -> &str;
    /// Show or hide the card at `index` without removing it.
    fn set_card_visible(&mut self, index: usize, visible: bool);
    /// Show or hide the shared "no results" indicator.
    fn set_empty_state_visible(&mut self, visible: bool);
    /// Reorder the collection: `order` is a permutation of `0..card_count()`
    /// listing current indices in their new presentation order.
    fn apply_order(&mut self, order: &[usize]);
}
