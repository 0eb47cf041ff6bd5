//! Integration-style app tests that exercise state, filter, and sort flows.

use super::cards::CardGrid;
use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver};
use tempfile::TempDir;
use trackdeck_core::PlaylistSummary;

struct TestHarness {
    _dir: TempDir,
    app: TrackdeckApp,
    cmd_rx: Receiver<CoreCmd>,
}

fn test_summary(id: &str, title: &str, track_count: u32, created_at: &str) -> PlaylistSummary {
    PlaylistSummary {
        id: id.to_string(),
        title: title.to_string(),
        owner: "you".to_string(),
        track_count,
        created_at: created_at.to_string(),
        image_url: None,
    }
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (_evt_tx, evt_rx) = unbounded();
    let dir = TempDir::new().expect("temp dir");

    let app = TrackdeckApp {
        backend: BackendHandle::from_test_channels(cmd_tx, evt_rx),
        grid: CardGrid::default(),
        search_query: String::new(),
        search_filter: SearchFilter::default(),
        active_query: String::new(),
        sort_key: None,
        theme: ThemeMode::Dark,
        theme_pref_path: dir.path().join("theme"),
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

    TestHarness {
        _dir: dir,
        app,
        cmd_rx,
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

fn visible_titles(app: &TrackdeckApp) -> Vec<&str> {
    app.grid
        .rows
        .iter()
        .filter(|row| row.visible)
        .map(|row| row.summary.title.as_str())
        .collect()
}

fn titles(app: &TrackdeckApp) -> Vec<&str> {
    app.grid
        .rows
        .iter()
        .map(|row| row.summary.title.as_str())
        .collect()
}
