use crate::kind::CompletionKind;
use crate::store::{EntryList, SymbolStore};
use crate::walker::{self, ScanProfile};
use log::info;
use std::path::{Path, PathBuf};

/// Which file list a scan refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileTarget {
    Load,
    Demo,
    General,
}

impl FileTarget {
    pub fn kind(self) -> CompletionKind {
        match self {
            FileTarget::Load => CompletionKind::LoadFile,
            FileTarget::Demo => CompletionKind::DemoFile,
            FileTarget::General => CompletionKind::GeneralFile,
        }
    }

    pub fn profile(self) -> ScanProfile {
        match self {
            FileTarget::Load => ScanProfile::LOAD_FILES,
            FileTarget::Demo => ScanProfile::DEMO_FILES,
            FileTarget::General => ScanProfile::GENERAL_FILES,
        }
    }
}

/// Where to look for what the user has typed so far: the directory to scan
/// and the prefix every entry keeps so it still matches the partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLocation {
    pub dir: PathBuf,
    pub prefix: String,
}

impl ScanLocation {
    pub fn resolve(partial: &str, base_dir: &Path) -> Self {
        let partial = partial.strip_prefix('"').unwrap_or(partial).replace('\\', "/");
        let prefix = match partial.rfind('/') {
            Some(pos) => partial[..=pos].to_string(),
            None => String::new(),
        };

        let dir = if let Some(rest) = prefix.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => base_dir.join(&prefix),
            }
        } else if Path::new(&prefix).is_absolute() {
            PathBuf::from(&prefix)
        } else {
            base_dir.join(&prefix)
        };

        Self { dir, prefix }
    }
}

/// Rebuilds the list of `target` from its baseline plus the directory named
/// by `partial`, then swaps it into the store.
pub fn update(store: &SymbolStore, target: FileTarget, partial: &str, base_dir: &Path) {
    let kind = target.kind();
    let location = ScanLocation::resolve(partial, base_dir);

    let mut files: EntryList = store.baseline(kind).into_iter().collect();
    let before = files.len();
    walker::scan_into(&location.dir, &location.prefix, &target.profile(), &mut files);
    info!(
        "found {} {} entries in {}",
        files.len() - before,
        kind,
        location.dir.display()
    );

    store.replace_kind(kind, files.into_vec());
}

/// Scans the engine's own directories once and keeps the result as the
/// baseline that every later rescan starts from. Returns the kinds that were
/// replaced; a kind without a configured directory is left alone.
pub fn load_share_files(
    store: &SymbolStore,
    share_dir: Option<&Path>,
    demo_dir: Option<&Path>,
) -> Vec<CompletionKind> {
    let demo_dir = demo_dir.or(share_dir);
    let mut replaced = Vec::new();
    for (kind, dir, profile) in [
        (CompletionKind::LoadFile, share_dir, ScanProfile::LOAD_FILES),
        (CompletionKind::DemoFile, demo_dir, ScanProfile::DEMO_FILES),
    ] {
        let Some(dir) = dir else { continue };
        let files = walker::scan(dir, "", &profile.recursive());
        info!("{} {} entries below {}", files.len(), kind, dir.display());
        store.set_baseline(kind, files.clone());
        store.replace_kind(kind, files);
        replaced.push(kind);
    }
    replaced
}
