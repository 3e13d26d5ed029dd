//! File system watcher that reloads the card database when its file changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use notify::{
    event::{CreateKind, ModifyKind},
    Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
};

use crate::services::card_store::CardStore;

/// Watches the card database file and swaps in a fresh snapshot on change.
pub struct CardDatabaseWatcher {
    watcher: Option<RecommendedWatcher>,
    stop_tx: Option<Sender<()>>,
}

impl CardDatabaseWatcher {
    pub fn new() -> Self {
        Self {
            watcher: None,
            stop_tx: None,
        }
    }

    /// Check if the watcher has been started.
    pub fn is_started(&self) -> bool {
        self.watcher.is_some()
    }

    /// Start watching the store's source file.
    pub fn start(&mut self, store: Arc<CardStore>) -> Result<(), String> {
        if self.watcher.is_some() {
            return Ok(());
        }

        let file = store
            .source()
            .map(Path::to_path_buf)
            .ok_or_else(|| "Card database has no source file".to_string())?;

        // Watch the directory: editors and deploy scripts often replace the file.
        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = tx.send(event);
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )
        .map_err(|e| format!("Failed to create watcher: {}", e))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| format!("Failed to watch {}: {}", dir.display(), e))?;

        tracing::info!("Watching {} for card database changes", file.display());

        self.watcher = Some(watcher);
        self.stop_tx = Some(stop_tx);

        thread::spawn(move || {
            Self::event_loop(rx, stop_rx, file, store);
        });

        Ok(())
    }

    /// Stop the watcher.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.watcher = None;
    }

    fn event_loop(rx: Receiver<Event>, stop_rx: Receiver<()>, file: PathBuf, store: Arc<CardStore>) {
        let file_name = file.file_name().map(|n| n.to_os_string());

        loop {
            if stop_rx.try_recv().is_ok() {
                break;
            }

            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(event) => {
                    if is_database_change(&event, file_name.as_deref()) {
                        // A failed reload is logged by the store and the old snapshot kept.
                        let _ = store.reload();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl Default for CardDatabaseWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CardDatabaseWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Whether an event is a write or replacement of the database file.
fn is_database_change(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(CreateKind::File)
            | EventKind::Create(CreateKind::Any)
            | EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Name(_))
            | EventKind::Modify(ModifyKind::Any)
    );

    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == file_name)
}
