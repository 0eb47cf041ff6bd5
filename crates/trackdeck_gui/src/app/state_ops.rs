//! State transitions driven by backend events and user input.

use super::TrackdeckApp;
use crate::backend::{CoreCmd, CoreEvent};
use std::time::Instant;
use tracing::warn;
use trackdeck_core::constants::DEFAULT_LIST_PLAYLISTS_LIMIT;
use trackdeck_core::{sort_cards, PlaylistSummary, SearchFilter, SortKey};

impl TrackdeckApp {
    pub(super) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::PlaylistList { items } => {
                self.loading = false;
                self.grid.reset(items);
                // Fresh snapshots keep the active sort and filter.
                if let Some(key) = self.sort_key {
                    sort_cards(&mut self.grid, key);
                }
                SearchFilter::run_pass(&mut self.grid, &self.active_query);
            }
            CoreEvent::Error { message } => {
                self.loading = false;
                self.set_status(message);
            }
        }
    }

    pub(super) fn request_refresh(&mut self) {
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists {
                limit: DEFAULT_LIST_PLAYLISTS_LIMIT,
            })
            .is_err()
        {
            self.set_status("List failed: backend unavailable.");
            return;
        }
        self.loading = true;
    }

    pub(super) fn request_reload(&mut self) {
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::ReloadLibrary {
                limit: DEFAULT_LIST_PLAYLISTS_LIMIT,
            })
            .is_err()
        {
            self.set_status("Reload failed: backend unavailable.");
            return;
        }
        self.loading = true;
    }

    /// Record a search box edit; the filter fires after the quiet interval.
    pub(super) fn on_search_changed(&mut self) {
        self.search_filter.note_input(self.search_query.clone());
    }

    /// Run the filtering pass when the debounced query comes due.
    pub(super) fn maybe_run_filter(&mut self, now: Instant) {
        if let Some(query) = self.search_filter.poll(now) {
            SearchFilter::run_pass(&mut self.grid, &query);
            self.active_query = query;
        }
    }

    /// Handle a sort selector change by raw value. Unknown values leave the
    /// current order untouched.
    pub(super) fn apply_sort_selection(&mut self, raw: &str) {
        match SortKey::parse(raw) {
            Some(key) => self.set_sort_key(key),
            None => warn!("ignoring unknown sort key {:?}", raw),
        }
    }

    pub(super) fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = Some(key);
        sort_cards(&mut self.grid, key);
    }

    pub(super) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.style_applied_for = None;
        if let Err(err) = trackdeck_core::theme::store_preference(&self.theme_pref_path, self.theme)
        {
            warn!("failed to persist theme preference: {}", err);
            self.set_status("Theme preference could not be saved.");
        }
    }

    /// Validate and submit the new-playlist form.
    ///
    /// # Returns
    /// `true` when the draft was accepted and the dialog should close.
    pub(super) fn submit_new_playlist(&mut self) -> bool {
        if self.new_playlist_title.trim().is_empty() {
            self.new_playlist_title_error = true;
            self.set_status("Please fill in all required fields.");
            return false;
        }

        self.draft_counter += 1;
        let summary = PlaylistSummary {
            id: format!("draft-{}", self.draft_counter),
            title: self.new_playlist_title.trim().to_string(),
            owner: "you".to_string(),
            track_count: 0,
            created_at: String::new(),
            image_url: None,
        };
        self.grid.rows.push(super::cards::CardRow::new(summary));
        if let Some(key) = self.sort_key {
            sort_cards(&mut self.grid, key);
        }
        SearchFilter::run_pass(&mut self.grid, &self.active_query);

        self.new_playlist_title.clear();
        self.new_playlist_description.clear();
        self.new_playlist_title_error = false;
        self.new_playlist_open = false;
        self.set_status("Playlist draft added.");
        true
    }
}
