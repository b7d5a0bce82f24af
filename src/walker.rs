use crate::store::EntryList;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Only the directory itself; subdirectories become `"name/"` entries.
    Shallow,
    /// Descend into subdirectories without listing them.
    Recursive,
}

/// What a directory scan collects and how it names what it finds.
#[derive(Debug, Clone, Copy)]
pub struct ScanProfile {
    /// Accepted extensions without the dot. Empty accepts every file.
    pub extensions: &'static [&'static str],
    pub depth: Depth,
    /// Keep the extension in the entry (`"foo.mac"` rather than `"foo"`).
    pub keep_extension: bool,
}

impl ScanProfile {
    pub const LOAD_FILES: ScanProfile = ScanProfile {
        extensions: &["mac", "lisp", "wxm"],
        depth: Depth::Shallow,
        keep_extension: false,
    };

    pub const DEMO_FILES: ScanProfile = ScanProfile {
        extensions: &["dem"],
        depth: Depth::Shallow,
        keep_extension: false,
    };

    pub const GENERAL_FILES: ScanProfile = ScanProfile {
        extensions: &[],
        depth: Depth::Shallow,
        keep_extension: true,
    };

    pub fn recursive(self) -> Self {
        Self {
            depth: Depth::Recursive,
            ..self
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| self.extensions.contains(&ext))
    }
}

const VCS_DIRS: &[&str] = &[".git", ".svn", ".hg"];

/// Install-tree directories that repeat inside themselves (`share/share`)
/// when a symlink points back up the tree.
const DOUBLED_DIRS: &[&str] = &["share", "src", "doc", "interfaces"];

/// Directories a recursive scan never enters: version control metadata and
/// the doubled install-tree directories above.
fn is_stop_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    if VCS_DIRS.contains(&name) {
        return true;
    }
    DOUBLED_DIRS.contains(&name)
        && entry
            .path()
            .parent()
            .and_then(|parent| parent.file_name())
            .map_or(false, |parent| parent == name)
}

fn quoted(prefix: &str, name: &str, trailing: &str) -> String {
    format!("\"{}{}{}\"", prefix, name, trailing).replace('\\', "/")
}

/// Walks `dir` according to `profile` and appends one quoted entry per
/// match to `out`. Unreadable directories and entries are skipped.
pub fn scan_into(dir: &Path, prefix: &str, profile: &ScanProfile, out: &mut EntryList) {
    let max_depth = match profile.depth {
        Depth::Shallow => 1,
        Depth::Recursive => usize::MAX,
    };
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| profile.depth == Depth::Shallow || !is_stop_dir(entry));

    for entry in walker.filter_map(Result::ok) {
        let path = entry.path();
        if entry.file_type().is_dir() {
            if profile.depth == Depth::Shallow {
                let name = entry.file_name().to_string_lossy();
                out.push(quoted(prefix, &name, "/"));
            }
            continue;
        }
        if !profile.accepts(path) {
            continue;
        }
        let name = if profile.keep_extension {
            path.file_name()
        } else {
            path.file_stem()
        };
        if let Some(name) = name {
            out.push(quoted(prefix, &name.to_string_lossy(), ""));
        }
    }
}

/// Convenience wrapper returning the entries of a single scan.
pub fn scan(dir: &Path, prefix: &str, profile: &ScanProfile) -> Vec<String> {
    let mut out = EntryList::new();
    scan_into(dir, prefix, profile, &mut out);
    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn shallow_scan_filters_extensions_and_lists_dirs() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "draw.mac");
        touch(tmp.path(), "helper.lisp");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "sub/inner.mac");

        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES);
        assert!(entries.contains(&"\"draw\"".to_string()));
        assert!(entries.contains(&"\"helper\"".to_string()));
        assert!(entries.contains(&"\"sub/\"".to_string()));
        assert!(!entries.iter().any(|e| e.contains("notes")));
        assert!(!entries.iter().any(|e| e.contains("inner")));
    }

    #[test]
    fn prefix_is_prepended() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.dem");
        let entries = scan(tmp.path(), "demos/", &ScanProfile::DEMO_FILES);
        assert_eq!(entries, vec!["\"demos/a\""]);
    }

    #[test]
    fn general_files_keep_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "data.csv");
        let entries = scan(tmp.path(), "", &ScanProfile::GENERAL_FILES);
        assert_eq!(entries, vec!["\"data.csv\""]);
    }

    #[test]
    fn recursive_scan_skips_stop_dirs() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "share/linearalgebra/eigen.mac");
        touch(tmp.path(), "share/share/ghost.mac");
        touch(tmp.path(), ".git/hooks/hook.mac");
        touch(tmp.path(), "top.wxm");

        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES.recursive());
        assert!(entries.contains(&"\"eigen\"".to_string()));
        assert!(entries.contains(&"\"top\"".to_string()));
        assert!(!entries.iter().any(|e| e.contains("ghost") || e.contains("hook")));
        assert!(!entries.iter().any(|e| e.ends_with("/\"")));
    }

    #[test]
    fn package_named_like_its_parent_is_scanned() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "foo/foo/bar.mac");
        touch(tmp.path(), "src/src/ghost.mac");

        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES.recursive());
        assert_eq!(entries, vec!["\"bar\""]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "pkg/x.mac");
        std::os::unix::fs::symlink("..", tmp.path().join("pkg/loop")).unwrap();

        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES.recursive());
        assert_eq!(entries, vec!["\"x\""]);
    }

    #[cfg(unix)]
    #[test]
    fn bad_subdirectory_does_not_stop_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a/first.mac");
        touch(tmp.path(), "locked/hidden.mac");
        touch(tmp.path(), "z/last.mac");
        std::os::unix::fs::symlink("nowhere.mac", tmp.path().join("m_dangling.mac")).unwrap();
        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES.recursive());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(entries.contains(&"\"first\"".to_string()));
        assert!(entries.contains(&"\"last\"".to_string()));
        assert!(!entries.iter().any(|e| e.contains("dangling")));
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let entries = scan(&tmp.path().join("nope"), "", &ScanProfile::LOAD_FILES);
        assert!(entries.is_empty());
    }

    #[test]
    fn duplicates_are_dropped_at_insertion() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "same.mac");
        touch(tmp.path(), "same.lisp");
        let entries = scan(tmp.path(), "", &ScanProfile::LOAD_FILES);
        assert_eq!(entries, vec!["\"same\""]);
    }
}
