//! Debounced search filtering over playlist cards.

use std::time::{Duration, Instant};

use super::CardSurface;
use crate::constants::DEFAULT_SEARCH_DEBOUNCE;

/// Trailing-edge debounce controller for the card search box.
///
/// Every keystroke replaces the single pending query and restarts the quiet
/// interval; [`SearchFilter::poll`] releases the latest query exactly once when
/// the interval has elapsed. The host polls each frame and passes its own
/// `Instant`, which keeps timing deterministic in tests.
#[derive(Debug)]
pub struct SearchFilter {
    quiet: Duration,
    pending: Option<PendingQuery>,
}

#[derive(Debug)]
struct PendingQuery {
    query: String,
    armed_at: Instant,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl SearchFilter {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a keystroke now. Replaces any pending query.
    pub fn note_input(&mut self, query: String) {
        self.note_input_at(query, Instant::now());
    }

    /// Record a keystroke at `now`. Replaces any pending query and restarts
    /// the quiet interval.
    pub fn note_input_at(&mut self, query: String, now: Instant) {
        self.pending = Some(PendingQuery {
            query,
            armed_at: now,
        });
    }

    /// Deadline at which the pending query becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|pending| pending.armed_at + self.quiet)
    }

    /// Release the pending query when its quiet interval has elapsed.
    ///
    /// # Returns
    /// `Some(query)` exactly once per settled burst of input, `None` while
    /// input is still settling or nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now.duration_since(pending.armed_at) >= self.quiet);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.query)
    }

    /// Apply `query` to the surface: a card stays visible iff its lowercased
    /// title contains the lowercased query (the empty query matches every
    /// card). Toggles the empty-state indicator iff no cards remain visible.
    ///
    /// # Returns
    /// The number of cards left visible.
    pub fn run_pass<S: CardSurface>(surface: &mut S, query: &str) -> usize {
        let needle = query.to_lowercase();
        let mut visible = 0usize;
        for index in 0..surface.card_count() {
            let matches = surface.card_title(index).to_lowercase().contains(&needle);
            surface.set_card_visible(index, matches);
            if matches {
                visible += 1;
            }
        }
        surface.set_empty_state_visible(visible == 0);
        visible
    }
}
