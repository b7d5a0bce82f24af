//! Autocompletion index for a computer-algebra worksheet.
//!
//! [`AutoComplete`] keeps the lists of completable names (commands,
//! templates, loadable and demo files, units, ...) and answers prefix
//! queries while background lanes keep filling them.

pub mod autocomplete;
pub mod builtins;
pub mod config;
pub mod daemon;
pub mod files;
pub mod kind;
pub mod query;
pub mod store;
pub mod symbols;
pub mod walker;
pub mod watcher;
pub mod words;

pub use autocomplete::AutoComplete;
pub use config::Config;
pub use daemon::CompletionEvent;
pub use kind::CompletionKind;
pub use query::QueryEngine;
pub use store::SymbolStore;
