use log::warn;
use notify::{Config, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

pub enum DirEvent {
    Changed(PathBuf),
}

/// Watches the worksheet directory so file completions can be rescanned
/// when files appear or disappear.
pub struct DirWatcher {
    watcher: notify::RecommendedWatcher,
}

impl DirWatcher {
    pub fn new(tx: mpsc::Sender<DirEvent>) -> notify::Result<Self> {
        let (sync_tx, sync_rx) = std::sync::mpsc::channel();

        let watcher = notify::RecommendedWatcher::new(sync_tx, Config::default())?;

        // bridge notify's std channel into tokio
        std::thread::spawn(move || {
            while let Ok(res) = sync_rx.recv() {
                match res {
                    Ok(event) => {
                        let notify::Event { kind, paths, .. } = event;
                        if !(kind.is_create() || kind.is_remove() || kind.is_modify()) {
                            continue;
                        }
                        for path in paths {
                            if tx.blocking_send(DirEvent::Changed(path)).is_err() {
                                return;
                            }
                        }
                    }
                    Err(e) => warn!("watch error: {:?}", e),
                }
            }
        });

        Ok(Self { watcher })
    }

    pub fn watch(&mut self, path: &Path) -> notify::Result<()> {
        self.watcher.watch(path, RecursiveMode::NonRecursive)
    }
}
