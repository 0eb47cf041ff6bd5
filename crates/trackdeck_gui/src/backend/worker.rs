//! Background worker thread for library feed access.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use trackdeck_core::{
    config::env_flag_enabled,
    feed::{load_library, sample_library},
    AppError, Playlist, PlaylistSummary,
};
use tracing::{error, info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Build a handle around externally owned channels, for tests that drive
    /// the app state without a worker thread.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn send_error(evt_tx: &Sender<CoreEvent>, message: String) {
    let _ = evt_tx.send(CoreEvent::Error { message });
}

fn log_list_perf(enabled: bool, op: &str, elapsed_ms: f64, items: usize) {
    if !enabled {
        return;
    }
    info!(
        target: "trackdeck_gui::backend_perf",
        op = op,
        elapsed_ms = elapsed_ms,
        items = items,
        "backend list perf"
    );
}

fn load_or_fallback(path: &std::path::Path) -> Result<Vec<Playlist>, AppError> {
    match load_library(path) {
        Ok(playlists) => Ok(playlists),
        Err(AppError::NotFound) => {
            warn!(
                "no library feed at {}, starting with the sample library",
                path.display()
            );
            Ok(sample_library())
        }
        Err(err) => Err(err),
    }
}

fn snapshot(playlists: &[Playlist], limit: usize) -> Vec<PlaylistSummary> {
    playlists.iter().take(limit).map(PlaylistSummary::from).collect()
}

/// Spawn the backend worker thread that performs blocking feed I/O.
///
/// All I/O stays off the UI thread; the worker replies with [`CoreEvent`]
/// values that are polled each frame.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(library_path: PathBuf) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("trackdeck-backend".to_string())
        .spawn(move || {
            let perf_log_enabled = env_flag_enabled("TRACKDECK_BACKEND_PERF_LOG");
            let mut playlists = match load_or_fallback(&library_path) {
                Ok(playlists) => playlists,
                Err(err) => {
                    error!("backend feed load failed: {}", err);
                    send_error(&evt_tx, format!("Library load failed: {}", err));
                    Vec::new()
                }
            };
            for cmd in cmd_rx.iter() {
                match cmd {
                    CoreCmd::ListPlaylists { limit } => {
                        let started = Instant::now();
                        let items = snapshot(&playlists, limit);
                        log_list_perf(
                            perf_log_enabled,
                            "list",
                            started.elapsed().as_secs_f64() * 1000.0,
                            items.len(),
                        );
                        let _ = evt_tx.send(CoreEvent::PlaylistList { items });
                    }
                    CoreCmd::ReloadLibrary { limit } => {
                        let started = Instant::now();
                        match load_or_fallback(&library_path) {
                            Ok(fresh) => playlists = fresh,
                            Err(err) => {
                                // Keep the previous snapshot on a bad reload.
                                error!("backend feed reload failed: {}", err);
                                send_error(&evt_tx, format!("Library reload failed: {}", err));
                                continue;
                            }
                        }
                        let items = snapshot(&playlists, limit);
                        log_list_perf(
                            perf_log_enabled,
                            "reload",
                            started.elapsed().as_secs_f64() * 1000.0,
                            items.len(),
                        );
                        let _ = evt_tx.send(CoreEvent::PlaylistList { items });
                    }
                }
            }
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}
