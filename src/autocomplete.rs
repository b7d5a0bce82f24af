use crate::config::Config;
use crate::daemon::{CompletionEvent, LoadRequest, LoaderDaemon};
use crate::files::FileTarget;
use crate::kind::CompletionKind;
use crate::query::QueryEngine;
use crate::store::SymbolStore;
use crate::symbols;
use crate::words::CodeCell;
use log::debug;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};

/// Completion lists for the worksheet.
///
/// Symbols come from the compiled tables, from what the engine declares
/// after loading a package, from file scans and from the words typed into
/// code cells. Loading happens on two background lanes (symbols and files);
/// queries are answered synchronously from a snapshot of the store and
/// never wait for I/O.
pub struct AutoComplete {
    config: Config,
    store: Arc<SymbolStore>,
    query: QueryEngine,
    symbols_tx: mpsc::UnboundedSender<LoadRequest>,
    files_tx: mpsc::UnboundedSender<LoadRequest>,
    events: broadcast::Sender<CompletionEvent>,
}

impl AutoComplete {
    /// Spawns the loader lanes; must be called from within a Tokio runtime.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(SymbolStore::new());
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        let (symbols_tx, symbols_rx) = mpsc::unbounded_channel();
        let (files_tx, files_rx) = mpsc::unbounded_channel();
        tokio::spawn(LoaderDaemon::new(symbols_rx, Arc::clone(&store), events.clone()).run());
        tokio::spawn(LoaderDaemon::new(files_rx, Arc::clone(&store), events.clone()).run());

        Self {
            config,
            store,
            query: QueryEngine::new(),
            symbols_tx,
            files_tx,
            events,
        }
    }

    fn send(lane: &mpsc::UnboundedSender<LoadRequest>, request: LoadRequest) {
        if lane.send(request).is_err() {
            debug!("loader lane is gone, request dropped");
        }
    }

    /// Everything known without the engine: the compiled tables and the
    /// files below the configured share and demo directories.
    pub fn load_symbols(&self) {
        self.load_builtin_symbols();
        Self::send(
            &self.files_tx,
            LoadRequest::ShareFiles {
                share_dir: self.config.share_dir.clone(),
                demo_dir: self.config.demo_dir.clone(),
            },
        );
    }

    pub fn load_builtin_symbols(&self) {
        Self::send(&self.symbols_tx, LoadRequest::Builtins);
    }

    /// Registers one symbol right away.
    pub fn add_symbol(&self, text: &str, kind: CompletionKind) -> bool {
        !symbols::register(&self.store, kind, text).is_empty()
    }

    /// Queues a symbol list the engine sent. Malformed lists are ignored.
    pub fn add_symbols(&self, xml: impl Into<String>) {
        Self::send(&self.symbols_tx, LoadRequest::Symbols(xml.into()));
    }

    pub fn add_symbols_document(&self, document: &roxmltree::Document) {
        let declarations = symbols::declarations(document);
        if !declarations.is_empty() {
            Self::send(&self.symbols_tx, LoadRequest::Declared(declarations));
        }
    }

    fn update_files(&self, target: FileTarget, partial: &str, base_dir: &Path) {
        Self::send(
            &self.files_tx,
            LoadRequest::Scan {
                target,
                partial: partial.to_string(),
                base_dir: base_dir.to_path_buf(),
            },
        );
    }

    pub fn update_load_files(&self, partial: &str, base_dir: impl AsRef<Path>) {
        self.update_files(FileTarget::Load, partial, base_dir.as_ref());
    }

    pub fn update_demo_files(&self, partial: &str, base_dir: impl AsRef<Path>) {
        self.update_files(FileTarget::Demo, partial, base_dir.as_ref());
    }

    pub fn update_general_files(&self, partial: &str, base_dir: impl AsRef<Path>) {
        self.update_files(FileTarget::General, partial, base_dir.as_ref());
    }

    pub fn add_worksheet_words<S: AsRef<str>>(&self, words: &[S]) {
        self.store.add_worksheet_words(words);
    }

    pub fn remove_worksheet_words<S: AsRef<str>>(&self, words: &[S]) {
        self.store.remove_worksheet_words(words);
    }

    pub fn clear_worksheet_words(&self) {
        self.store.clear_worksheet_words();
    }

    /// Forgets all worksheet words and counts those of `cells` afresh.
    pub fn rescan_worksheet(&self, cells: &[CodeCell]) {
        self.store.clear_worksheet_words();
        for cell in cells {
            self.store.add_worksheet_words(cell.words());
        }
    }

    pub fn clear_demo_files(&self) {
        self.store.replace_kind(CompletionKind::DemoFile, Vec::new());
        let _ = self.events.send(CompletionEvent {
            kind: CompletionKind::DemoFile,
        });
    }

    pub fn complete_symbol(&self, partial: &str, kind: CompletionKind) -> Vec<String> {
        self.query.complete(&self.store, partial, kind)
    }

    pub fn complete_with_worksheet_words(&self, partial: &str) -> Vec<String> {
        self.query.complete_with_worksheet_words(&self.store, partial)
    }

    pub fn fix_template(&self, template: &str) -> String {
        self.query.fix_template(template)
    }

    pub fn symbol_list(&self) -> Vec<String> {
        self.store.entries(CompletionKind::Command)
    }

    pub fn demo_files_list(&self) -> Vec<String> {
        self.store.entries(CompletionKind::DemoFile)
    }

    pub fn has_demo_file(&self, command: &str) -> bool {
        self.query.has_demo_file(&self.store, command)
    }

    pub fn entries(&self, kind: CompletionKind) -> Vec<String> {
        self.store.entries(kind)
    }

    pub fn worksheet_word_count(&self, word: &str) -> usize {
        self.store.worksheet_word_count(word)
    }

    /// Receives a [`CompletionEvent`] whenever a background job changed a
    /// list.
    pub fn subscribe(&self) -> broadcast::Receiver<CompletionEvent> {
        self.events.subscribe()
    }

    /// Resolves once both lanes have finished everything queued so far.
    pub async fn wait_idle(&self) {
        for lane in [&self.symbols_tx, &self.files_tx] {
            let (done_tx, done_rx) = oneshot::channel();
            if lane.send(LoadRequest::Barrier(done_tx)).is_ok() {
                let _ = done_rx.await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtins_load_in_background() {
        let ac = AutoComplete::new(Config::default());
        let mut events = ac.subscribe();
        ac.load_builtin_symbols();
        ac.wait_idle().await;

        assert!(ac
            .complete_symbol("integr", CompletionKind::Command)
            .contains(&"integrate".to_string()));
        assert!(ac
            .complete_symbol("integrate", CompletionKind::Template)
            .contains(&"integrate(<expr>,<var>)".to_string()));
        assert!(events.try_recv().is_ok());
    }

    #[tokio::test]
    async fn manual_symbol_is_immediate() {
        let ac = AutoComplete::new(Config::default());
        assert!(ac.add_symbol("myfun", CompletionKind::Command));
        assert!(!ac.add_symbol("myfun", CompletionKind::Command));
        assert_eq!(ac.symbol_list(), vec!["myfun"]);
    }

    #[tokio::test]
    async fn rescan_counts_words_of_all_cells() {
        let ac = AutoComplete::new(Config::default());
        ac.add_worksheet_words(&["stale"]);
        ac.rescan_worksheet(&[CodeCell::new("f(x) := x"), CodeCell::new("g(x)")]);
        assert_eq!(ac.worksheet_word_count("x"), 3);
        assert_eq!(ac.worksheet_word_count("stale"), 0);
    }

    #[tokio::test]
    async fn clearing_demo_files() {
        let ac = AutoComplete::new(Config::default());
        ac.add_symbol("\"cf\"", CompletionKind::DemoFile);
        assert!(ac.has_demo_file("cf"));
        ac.clear_demo_files();
        assert!(ac.demo_files_list().is_empty());
    }
}
