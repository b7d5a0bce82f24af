use crate::files::{self, FileTarget};
use crate::kind::CompletionKind;
use crate::store::SymbolStore;
use crate::symbols::{self, Declaration};
use ahash::AHashSet;
use log::{debug, error};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};

/// Raised after a background job changed the entries of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEvent {
    pub kind: CompletionKind,
}

#[derive(Debug)]
pub enum LoadRequest {
    Builtins,
    Symbols(String),
    Declared(Vec<Declaration>),
    ShareFiles {
        share_dir: Option<PathBuf>,
        demo_dir: Option<PathBuf>,
    },
    Scan {
        target: FileTarget,
        partial: String,
        base_dir: PathBuf,
    },
    /// Answered once everything queued before it has finished.
    Barrier(oneshot::Sender<()>),
}

impl LoadRequest {
    fn run(self, store: &SymbolStore) -> Vec<CompletionKind> {
        match self {
            LoadRequest::Builtins => symbols::load_builtins(store),
            LoadRequest::Symbols(xml) => symbols::ingest(store, &xml),
            LoadRequest::Declared(declarations) => symbols::register_all(store, &declarations),
            LoadRequest::ShareFiles {
                share_dir,
                demo_dir,
            } => files::load_share_files(store, share_dir.as_deref(), demo_dir.as_deref()),
            LoadRequest::Scan {
                target,
                partial,
                base_dir,
            } => {
                files::update(store, target, &partial, &base_dir);
                vec![target.kind()]
            }
            LoadRequest::Barrier(_) => Vec::new(),
        }
    }
}

/// Drops every scan that a later scan of the same target in the batch
/// supersedes. A barrier fences the batch: scans are only coalesced with
/// scans on the same side of it. Other requests keep their order.
fn coalesce(batch: Vec<LoadRequest>) -> Vec<LoadRequest> {
    let mut seen = AHashSet::new();
    let mut kept: Vec<LoadRequest> = batch
        .into_iter()
        .rev()
        .filter(|request| match request {
            LoadRequest::Scan { target, .. } => {
                let newest = seen.insert(*target);
                if !newest {
                    debug!("dropping superseded {:?} scan", target);
                }
                newest
            }
            LoadRequest::Barrier(_) => {
                seen.clear();
                true
            }
            _ => true,
        })
        .collect();
    kept.reverse();
    kept
}

/// One background lane. Jobs run one at a time on the blocking pool so the
/// interactive thread never waits on a table load or a directory walk.
pub struct LoaderDaemon {
    receiver: mpsc::UnboundedReceiver<LoadRequest>,
    store: Arc<SymbolStore>,
    events: broadcast::Sender<CompletionEvent>,
}

impl LoaderDaemon {
    pub fn new(
        receiver: mpsc::UnboundedReceiver<LoadRequest>,
        store: Arc<SymbolStore>,
        events: broadcast::Sender<CompletionEvent>,
    ) -> Self {
        Self {
            receiver,
            store,
            events,
        }
    }

    pub async fn run(self) {
        let LoaderDaemon {
            mut receiver,
            store,
            events,
        } = self;

        while let Some(request) = receiver.recv().await {
            let mut batch = vec![request];
            while let Ok(request) = receiver.try_recv() {
                batch.push(request);
            }

            for request in coalesce(batch) {
                handle(&store, &events, request).await;
            }
        }
        debug!("loader lane closed");
    }
}

async fn handle(
    store: &Arc<SymbolStore>,
    events: &broadcast::Sender<CompletionEvent>,
    request: LoadRequest,
) {
    if let LoadRequest::Barrier(done) = request {
        let _ = done.send(());
        return;
    }

    let store = Arc::clone(store);
    match tokio::task::spawn_blocking(move || request.run(&store)).await {
        Ok(changed) => {
            for kind in changed {
                // no subscribers is fine
                let _ = events.send(CompletionEvent { kind });
            }
        }
        Err(e) => error!("background loader failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(target: FileTarget, partial: &str) -> LoadRequest {
        LoadRequest::Scan {
            target,
            partial: partial.to_string(),
            base_dir: PathBuf::from("."),
        }
    }

    fn describe(request: &LoadRequest) -> String {
        match request {
            LoadRequest::Scan {
                target, partial, ..
            } => format!("{:?}:{}", target, partial),
            LoadRequest::Symbols(xml) => format!("xml:{}", xml),
            LoadRequest::Barrier(_) => "barrier".to_string(),
            _ => "other".to_string(),
        }
    }

    #[test]
    fn coalesce_keeps_newest_scan_per_target() {
        let batch = vec![
            scan(FileTarget::Load, "a"),
            LoadRequest::Symbols("1".into()),
            scan(FileTarget::Demo, "d"),
            scan(FileTarget::Load, "b"),
            LoadRequest::Symbols("2".into()),
        ];
        let kept: Vec<String> = coalesce(batch).iter().map(describe).collect();
        assert_eq!(kept, vec!["xml:1", "Demo:d", "Load:b", "xml:2"]);
    }

    #[test]
    fn barrier_fences_coalescing() {
        let (done_tx, _done_rx) = oneshot::channel();
        let batch = vec![
            scan(FileTarget::Load, "a"),
            LoadRequest::Barrier(done_tx),
            scan(FileTarget::Load, "b"),
            scan(FileTarget::Load, "c"),
        ];
        let kept: Vec<String> = coalesce(batch).iter().map(describe).collect();
        assert_eq!(kept, vec!["Load:a", "barrier", "Load:c"]);
    }

    #[tokio::test]
    async fn barrier_waits_for_scans_queued_before_it() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.mac"), "").unwrap();
        let store = Arc::new(SymbolStore::new());
        let (events_tx, _) = broadcast::channel(16);
        let (tx, rx) = mpsc::unbounded_channel();

        // queued before the lane starts, so all of it arrives as one batch
        let scan_dir = |partial: &str| LoadRequest::Scan {
            target: FileTarget::Load,
            partial: partial.to_string(),
            base_dir: tmp.path().to_path_buf(),
        };
        tx.send(scan_dir("")).unwrap();
        let (done_tx, done_rx) = oneshot::channel();
        tx.send(LoadRequest::Barrier(done_tx)).unwrap();
        tx.send(scan_dir("\"")).unwrap();
        tokio::spawn(LoaderDaemon::new(rx, Arc::clone(&store), events_tx).run());

        done_rx.await.unwrap();
        assert_eq!(store.entries(CompletionKind::LoadFile), vec!["\"a\""]);
    }

    #[test]
    fn share_load_reports_only_configured_kinds() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("draw.dem"), "").unwrap();
        let store = SymbolStore::new();

        let request = LoadRequest::ShareFiles {
            share_dir: None,
            demo_dir: None,
        };
        assert!(request.run(&store).is_empty());

        let request = LoadRequest::ShareFiles {
            share_dir: None,
            demo_dir: Some(tmp.path().to_path_buf()),
        };
        assert_eq!(request.run(&store), vec![CompletionKind::DemoFile]);
    }

    #[tokio::test]
    async fn lane_runs_jobs_and_reports_changes() {
        let store = Arc::new(SymbolStore::new());
        let (events_tx, mut events_rx) = broadcast::channel(16);
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(LoaderDaemon::new(rx, Arc::clone(&store), events_tx).run());

        tx.send(LoadRequest::Symbols(
            "<wxxml-symbols><function>foo</function></wxxml-symbols>".into(),
        ))
        .unwrap();
        let (done_tx, done_rx) = oneshot::channel();
        tx.send(LoadRequest::Barrier(done_tx)).unwrap();
        done_rx.await.unwrap();

        assert!(store.contains(CompletionKind::Command, "foo"));
        assert_eq!(
            events_rx.recv().await.unwrap(),
            CompletionEvent {
                kind: CompletionKind::Command
            }
        );
    }
}
