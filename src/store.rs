use crate::kind::CompletionKind;
use ahash::{AHashMap, AHashSet};
use parking_lot::Mutex;

/// Ordered list of unique strings. Keeps insertion order for display and a
/// hash set for constant time membership checks.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<String>,
    members: AHashSet<String>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` unless it is already present.
    pub fn push(&mut self, text: String) -> bool {
        if self.members.contains(&text) {
            return false;
        }
        self.members.insert(text.clone());
        self.entries.push(text);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.members.contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl FromIterator<String> for EntryList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = EntryList::new();
        for text in iter {
            list.push(text);
        }
        list
    }
}

struct Inner {
    lists: [EntryList; CompletionKind::COUNT],
    baselines: [Vec<String>; CompletionKind::COUNT],
    worksheet_words: AHashMap<String, usize>,
}

/// The lexicon behind autocompletion.
///
/// All kinds, the share-dir baselines and the worksheet word counts live
/// behind one mutex. Every read hands out a copy so nobody iterates while
/// holding the lock.
pub struct SymbolStore {
    inner: Mutex<Inner>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                lists: std::array::from_fn(|_| EntryList::new()),
                baselines: std::array::from_fn(|_| Vec::new()),
                worksheet_words: AHashMap::new(),
            }),
        }
    }

    /// Adds a trimmed entry. Returns false for empty or already known text.
    pub fn add_entry(&self, kind: CompletionKind, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.inner.lock().lists[kind.index()].push(text.to_string())
    }

    /// Adds many entries under a single lock acquisition, returning how many
    /// were new.
    pub fn add_entries<I, S>(&self, kind: CompletionKind, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.lock();
        let list = &mut inner.lists[kind.index()];
        texts
            .into_iter()
            .filter(|text| {
                let text = text.as_ref().trim();
                !text.is_empty() && list.push(text.to_string())
            })
            .count()
    }

    /// Adds `text` unless an existing entry of `kind` satisfies
    /// `is_duplicate`. The check and the insert happen under one lock.
    pub fn add_entry_unless<F>(&self, kind: CompletionKind, text: &str, is_duplicate: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let mut inner = self.inner.lock();
        let list = &mut inner.lists[kind.index()];
        if list.iter().any(|existing| is_duplicate(existing.as_str())) {
            return false;
        }
        list.push(text.to_string())
    }

    /// Swaps the whole list of `kind`. Readers see either the old or the new
    /// list, never a mix.
    pub fn replace_kind(&self, kind: CompletionKind, entries: Vec<String>) {
        let list: EntryList = entries
            .into_iter()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        // the previous list is freed after the guard is released
        let old = std::mem::replace(&mut self.inner.lock().lists[kind.index()], list);
        drop(old);
    }

    pub fn entries(&self, kind: CompletionKind) -> Vec<String> {
        self.inner.lock().lists[kind.index()].entries.clone()
    }

    /// Snapshot of the entries of `kind` accepted by `predicate`.
    pub fn matching<F>(&self, kind: CompletionKind, predicate: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.inner.lock().lists[kind.index()]
            .iter()
            .filter(|text| predicate(text.as_str()))
            .cloned()
            .collect()
    }

    pub fn contains(&self, kind: CompletionKind, text: &str) -> bool {
        self.inner.lock().lists[kind.index()].contains(text.trim())
    }

    pub fn len(&self, kind: CompletionKind) -> usize {
        self.inner.lock().lists[kind.index()].len()
    }

    pub fn set_baseline(&self, kind: CompletionKind, entries: Vec<String>) {
        self.inner.lock().baselines[kind.index()] = entries;
    }

    /// Files found in the engine's own directories; rescans start from here.
    pub fn baseline(&self, kind: CompletionKind) -> Vec<String> {
        self.inner.lock().baselines[kind.index()].clone()
    }

    pub fn add_worksheet_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.lock();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            *inner.worksheet_words.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    /// Decrements counts; a word whose count reaches zero leaves the index.
    pub fn remove_worksheet_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.lock();
        for word in words {
            let word = word.as_ref();
            if let Some(count) = inner.worksheet_words.get_mut(word) {
                *count -= 1;
                if *count == 0 {
                    inner.worksheet_words.remove(word);
                }
            }
        }
    }

    pub fn clear_worksheet_words(&self) {
        self.inner.lock().worksheet_words.clear();
    }

    pub fn worksheet_word_count(&self, word: &str) -> usize {
        self.inner
            .lock()
            .worksheet_words
            .get(word)
            .copied()
            .unwrap_or(0)
    }

    /// Sorted snapshot of the worksheet words and their counts.
    pub fn worksheet_words(&self) -> Vec<(String, usize)> {
        let mut words: Vec<(String, usize)> = self
            .inner
            .lock()
            .worksheet_words
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        words.sort();
        words
    }
}

impl Default for SymbolStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn duplicate_entry_is_stored_once() {
        let store = SymbolStore::new();
        assert!(store.add_entry(CompletionKind::Command, "integrate"));
        assert!(!store.add_entry(CompletionKind::Command, "integrate"));
        assert!(!store.add_entry(CompletionKind::Command, "  integrate "));
        assert_eq!(store.entries(CompletionKind::Command), vec!["integrate"]);
    }

    #[test]
    fn kinds_are_independent() {
        let store = SymbolStore::new();
        store.add_entry(CompletionKind::Command, "m");
        assert!(store.add_entry(CompletionKind::Unit, "m"));
        assert!(store.contains(CompletionKind::Unit, "m"));
        assert!(!store.contains(CompletionKind::Template, "m"));
    }

    #[test]
    fn empty_text_is_rejected() {
        let store = SymbolStore::new();
        assert!(!store.add_entry(CompletionKind::Command, "   "));
        assert_eq!(store.len(CompletionKind::Command), 0);
    }

    #[test]
    fn bulk_add_preserves_order_and_counts_new() {
        let store = SymbolStore::new();
        store.add_entry(CompletionKind::Command, "b");
        let added = store.add_entries(CompletionKind::Command, ["a", "b", "c", "a"]);
        assert_eq!(added, 2);
        assert_eq!(store.entries(CompletionKind::Command), vec!["b", "a", "c"]);
    }

    #[test]
    fn replace_kind_swaps_wholesale() {
        let store = SymbolStore::new();
        store.add_entry(CompletionKind::LoadFile, "\"old\"");
        store.replace_kind(
            CompletionKind::LoadFile,
            vec!["\"new\"".into(), "\"other\"".into(), "\"new\"".into()],
        );
        assert_eq!(
            store.entries(CompletionKind::LoadFile),
            vec!["\"new\"", "\"other\""]
        );
        assert!(!store.contains(CompletionKind::LoadFile, "\"old\""));
    }

    #[test]
    fn add_entry_unless_uses_predicate() {
        let store = SymbolStore::new();
        store.add_entry(CompletionKind::Template, "f(<x>)");
        assert!(!store.add_entry_unless(CompletionKind::Template, "f(<y>)", |e| e.starts_with("f(")));
        assert!(store.add_entry_unless(CompletionKind::Template, "g(<y>)", |e| e.starts_with("g(")));
    }

    #[test]
    fn readers_never_see_partial_replace() {
        let store = Arc::new(SymbolStore::new());
        let old: Vec<String> = (0..200).map(|i| format!("old{i}")).collect();
        let new: Vec<String> = (0..300).map(|i| format!("new{i}")).collect();
        store.replace_kind(CompletionKind::LoadFile, old.clone());

        let writer = {
            let store = Arc::clone(&store);
            let (old, new) = (old.clone(), new.clone());
            thread::spawn(move || {
                for round in 0..200 {
                    let next = if round % 2 == 0 { new.clone() } else { old.clone() };
                    store.replace_kind(CompletionKind::LoadFile, next);
                }
            })
        };

        for _ in 0..500 {
            let snapshot = store.entries(CompletionKind::LoadFile);
            assert!(snapshot == old || snapshot == new);
        }
        writer.join().unwrap();
    }

    #[test]
    fn worksheet_word_counts() {
        let store = SymbolStore::new();
        store.add_worksheet_words(["foo", "foo", "bar"]);
        assert_eq!(store.worksheet_word_count("foo"), 2);
        store.remove_worksheet_words(["foo", "bar", "missing"]);
        assert_eq!(store.worksheet_word_count("foo"), 1);
        assert_eq!(store.worksheet_word_count("bar"), 0);
        assert_eq!(store.worksheet_words(), vec![("foo".to_string(), 1)]);
        store.clear_worksheet_words();
        assert!(store.worksheet_words().is_empty());
    }

    #[test]
    fn baseline_is_separate_from_entries() {
        let store = SymbolStore::new();
        store.set_baseline(CompletionKind::DemoFile, vec!["\"intro\"".into()]);
        assert_eq!(store.baseline(CompletionKind::DemoFile), vec!["\"intro\""]);
        assert_eq!(store.len(CompletionKind::DemoFile), 0);
    }
}
