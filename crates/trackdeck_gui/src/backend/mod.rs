//! Backend worker wiring for the desktop shell.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{CoreCmd, CoreEvent};
pub use worker::{spawn_backend, BackendHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use trackdeck_core::feed::sample_library;
    use trackdeck_core::Playlist;

    fn write_feed(dir: &TempDir, playlists: &[Playlist]) -> std::path::PathBuf {
        let path = dir.path().join("library.json");
        fs::write(&path, serde_json::to_string(playlists).expect("serialize feed"))
            .expect("write feed");
        path
    }

    fn recv_event(rx: &crossbeam_channel::Receiver<CoreEvent>) -> CoreEvent {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("expected backend event")
    }

    fn playlist(id: &str, title: &str, track_count: u32) -> Playlist {
        Playlist {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            owner: "you".to_string(),
            track_count,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            image_url: None,
            public: false,
        }
    }

    #[test]
    fn backend_lists_playlists_from_the_feed() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_feed(
            &dir,
            &[playlist("p1", "Road Trip", 12), playlist("p2", "Focus", 40)],
        );

        let backend = spawn_backend(path);
        backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists { limit: 10 })
            .expect("send list");

        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => {
                let ids: Vec<&str> = items.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["p1", "p2"]);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        drop(backend);
    }

    #[test]
    fn backend_caps_list_replies_at_the_limit() {
        let dir = TempDir::new().expect("temp dir");
        let feed: Vec<Playlist> = (0..8)
            .map(|i| playlist(&format!("p{}", i), &format!("List {}", i), i))
            .collect();
        let path = write_feed(&dir, &feed);

        let backend = spawn_backend(path);
        backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists { limit: 3 })
            .expect("send list");

        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => assert_eq!(items.len(), 3),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_serves_the_sample_library_when_no_feed_exists() {
        let dir = TempDir::new().expect("temp dir");
        let backend = spawn_backend(dir.path().join("absent.json"));
        backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists { limit: 100 })
            .expect("send list");

        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => {
                assert_eq!(items.len(), sample_library().len());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_reload_picks_up_feed_changes() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_feed(&dir, &[playlist("p1", "Original", 5)]);

        let backend = spawn_backend(path.clone());
        backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists { limit: 10 })
            .expect("send list");
        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => assert_eq!(items.len(), 1),
            other => panic!("unexpected event: {:?}", other),
        }

        fs::write(
            &path,
            serde_json::to_string(&[playlist("p1", "Original", 5), playlist("p2", "Added", 9)])
                .expect("serialize feed"),
        )
        .expect("rewrite feed");

        backend
            .cmd_tx
            .send(CoreCmd::ReloadLibrary { limit: 10 })
            .expect("send reload");
        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].title, "Added");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_reports_a_malformed_feed_and_keeps_the_old_snapshot() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_feed(&dir, &[playlist("p1", "Original", 5)]);

        let backend = spawn_backend(path.clone());
        fs::write(&path, "{not json").expect("corrupt feed");

        backend
            .cmd_tx
            .send(CoreCmd::ReloadLibrary { limit: 10 })
            .expect("send reload");
        match recv_event(&backend.evt_rx) {
            CoreEvent::Error { message } => {
                assert!(message.contains("reload failed"), "message: {}", message);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        backend
            .cmd_tx
            .send(CoreCmd::ListPlaylists { limit: 10 })
            .expect("send list");
        match recv_event(&backend.evt_rx) {
            CoreEvent::PlaylistList { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "Original");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
