//! Rendered playlist cards and the grid that owns them.

use std::path::Path;

use trackdeck_core::{CardSurface, PlaylistSummary};

/// One rendered playlist card.
#[derive(Debug, Clone)]
pub(super) struct CardRow {
    pub summary: PlaylistSummary,
    pub visible: bool,
    pub artwork_failed: bool,
}

impl CardRow {
    pub(super) fn new(summary: PlaylistSummary) -> Self {
        // Artwork that cannot be read renders as the placeholder tile.
        let artwork_failed = match summary.image_url.as_deref() {
            Some(path) => !Path::new(path).exists(),
            None => true,
        };
        Self {
            summary,
            visible: true,
            artwork_failed,
        }
    }

    pub(super) fn use_artwork_fallback(&self) -> bool {
        self.artwork_failed
    }
}

/// The card collection plus the shared "no results" indicator.
#[derive(Debug, Default)]
pub(super) struct CardGrid {
    pub rows: Vec<CardRow>,
    pub empty_state_visible: bool,
}

impl CardGrid {
    /// Replace the collection with a fresh snapshot; all cards start visible.
    pub(super) fn reset(&mut self, summaries: Vec<PlaylistSummary>) {
        self.rows = summaries.into_iter().map(CardRow::new).collect();
        self.empty_state_visible = false;
    }

    pub(super) fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.visible).count()
    }
}

impl CardSurface for CardGrid {
    fn card_count(&self) -> usize {
        self.rows.len()
    }

    fn card_title(&self, index: usize) -> &str {
        &self.rows[index].summary.title
    }

    fn card_track_count(&self, index: usize) -> u32 {
        self.rows[index].summary.track_count
    }

    fn card_created_at(&self, index: usize) -> &str {
        &self.rows[index].summary.created_at
    }

    fn set_card_visible(&mut self, index: usize, visible: bool) {
        self.rows[index].visible = visible;
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        self.empty_state_visible = visible;
    }

    fn apply_order(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows.len());
        let mut slots: Vec<Option<CardRow>> = self.rows.drain(..).map(Some).collect();
        self.rows = order
            .iter()
            .filter_map(|&old| slots.get_mut(old).and_then(Option::take))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str, image_url: Option<&str>) -> PlaylistSummary {
        PlaylistSummary {
            id: id.to_string(),
            title: title.to_string(),
            owner: String::new(),
            track_count: 0,
            created_at: String::new(),
            image_url: image_url.map(ToString::to_string),
        }
    }

    #[test]
    fn apply_order_permutes_rows() {
        let mut grid = CardGrid::default();
        grid.reset(vec![
            summary("a", "First", None),
            summary("b", "Second", None),
            summary("c", "Third", None),
        ]);
        grid.apply_order(&[2, 0, 1]);
        let ids: Vec<&str> = grid.rows.iter().map(|r| r.summary.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_or_unreadable_artwork_uses_the_fallback() {
        let row = CardRow::new(summary("a", "No art", None));
        assert!(row.use_artwork_fallback());

        let row = CardRow::new(summary("b", "Gone", Some("/nonexistent/cover.png")));
        assert!(row.use_artwork_fallback());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"png").unwrap();
        let row = CardRow::new(summary("c", "Here", Some(path.to_str().unwrap())));
        assert!(!row.use_artwork_fallback());
    }

    #[test]
    fn reset_makes_every_card_visible_again() {
        let mut grid = CardGrid::default();
        grid.reset(vec![summary("a", "One", None)]);
        grid.set_card_visible(0, false);
        grid.set_empty_state_visible(true);

        grid.reset(vec![summary("a", "One", None), summary("b", "Two", None)]);
        assert_eq!(grid.visible_count(), 2);
        assert!(!grid.empty_state_visible);
    }
}
