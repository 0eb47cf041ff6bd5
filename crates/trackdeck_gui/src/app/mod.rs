//! Native egui app shell for the Trackdeck dashboard.

mod cards;
mod state_feedback;
mod state_ops;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle};
use cards::CardGrid;
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use style::*;
use trackdeck_core::{Config, SearchFilter, SortKey, ThemeMode};

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1080.0, 700.0];
#[doc = "Minimum enforced window size to keep the sidebar and grid usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [820.0, 560.0];
const FEEDBACK_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

/// Native egui application shell.
///
/// Owns the UI state and communicates with the background worker via channels
/// so the `update` loop never blocks on feed I/O.
pub(crate) struct TrackdeckApp {
    backend: BackendHandle,
    grid: CardGrid,
    search_query: String,
    search_filter: SearchFilter,
    active_query: String,
    sort_key: Option<SortKey>,
    theme: ThemeMode,
    theme_pref_path: PathBuf,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    loading: bool,
    new_playlist_open: bool,
    new_playlist_title: String,
    new_playlist_description: String,
    new_playlist_title_error: bool,
    draft_counter: u32,
    style_applied_for: Option<ThemeMode>,
    window_checked: bool,
}

impl TrackdeckApp {
    /// Construct a new app instance from the current environment config.
    ///
    /// Loads the persisted theme preference, spawns the backend worker thread,
    /// and kicks off the initial list request so the UI has data on first
    /// paint.
    pub(crate) fn new() -> Self {
        let config = Config::from_env();
        let theme = trackdeck_core::theme::load_preference(&config.theme_pref_path);
        let backend = spawn_backend(config.library_path.clone());

        let mut app = Self {
            backend,
            grid: CardGrid::default(),
            search_query: String::new(),
            search_filter: SearchFilter::new(config.search_debounce),
            active_query: String::new(),
            sort_key: None,
            theme,
            theme_pref_path: config.theme_pref_path,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            loading: false,
            new_playlist_open: false,
            new_playlist_title: String::new(),
            new_playlist_description: String::new(),
            new_playlist_title_error: false,
            draft_counter: 0,
            style_applied_for: None,
            window_checked: false,
        };
        app.request_refresh();
        app
    }
}

impl eframe::App for TrackdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        if !self.window_checked {
            let min_size = egui::vec2(MIN_WINDOW_SIZE[0], MIN_WINDOW_SIZE[1]);
            let current_size = ctx.input(|input| {
                input
                    .viewport()
                    .inner_rect
                    .map(|rect| rect.size())
                    .unwrap_or(min_size)
            });
            if current_size.x < min_size.x || current_size.y < min_size.y {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(min_size));
            }
            self.window_checked = true;
        }

        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }

        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }

        self.maybe_run_filter(now);

        self.render_top_bar(ctx);
        self.render_sidebar(ctx);
        self.render_card_grid(ctx);
        self.render_new_playlist_dialog(ctx);
        self.render_loading_overlay(ctx);
        self.render_toasts(ctx);

        if let Some(deadline) = self.search_filter.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.loading || self.status.is_some() || !self.toasts.is_empty() {
            ctx.request_repaint_after(FEEDBACK_REPAINT_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests;
