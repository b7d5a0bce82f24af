use crate::kind::CompletionKind;
use crate::store::{EntryList, SymbolStore};
use regex::Regex;
use std::ops::Range;

/// Answers completion requests from snapshots of a [`SymbolStore`].
pub struct QueryEngine {
    ellipsis: Regex,
    placeholder: Regex,
    punctuation: Regex,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            ellipsis: Regex::new(r"\s*,\s*\.\.\.").expect("Invalid regex"),
            placeholder: Regex::new(r"<+\s*([^<>]*?)\s*>+").expect("Invalid regex"),
            punctuation: Regex::new(r"\s*([,()\[\]])\s*").expect("Invalid regex"),
        }
    }

    /// Entries of `kind` starting with `partial`, in insertion order.
    /// Template matches come back in their insertable form.
    pub fn complete(&self, store: &SymbolStore, partial: &str, kind: CompletionKind) -> Vec<String> {
        // file entries are quoted; the closing quote may already be typed
        let partial = match kind {
            CompletionKind::LoadFile | CompletionKind::DemoFile => {
                partial.strip_suffix('"').unwrap_or(partial)
            }
            _ => partial,
        };

        let matches = store.matching(kind, |entry| entry.starts_with(partial));
        if kind != CompletionKind::Template {
            return matches;
        }

        matches
            .iter()
            .map(|template| self.fix_template(template))
            .collect::<EntryList>()
            .into_vec()
    }

    /// Command completions followed by matching words from the worksheet
    /// that the engine has not declared.
    pub fn complete_with_worksheet_words(&self, store: &SymbolStore, partial: &str) -> Vec<String> {
        let mut completions: EntryList = self
            .complete(store, partial, CompletionKind::Command)
            .into_iter()
            .collect();

        for (word, _) in store.worksheet_words() {
            if word.starts_with(partial) {
                completions.push(word);
            }
        }
        completions.into_vec()
    }

    /// Normalizes a template for insertion: no blanks around punctuation,
    /// no trailing `, ...` and exactly one `<`/`>` pair per argument.
    pub fn fix_template(&self, template: &str) -> String {
        let fixed = self.ellipsis.replace_all(template, "");
        let fixed = self.placeholder.replace_all(&fixed, "<$1>");
        let fixed = self.punctuation.replace_all(&fixed, "$1");
        fixed.trim().to_string()
    }

    /// Byte ranges of the `<arg>` tokens of a fixed template, in order.
    pub fn placeholders(&self, template: &str) -> Vec<Range<usize>> {
        self.placeholder
            .find_iter(template)
            .map(|m| m.range())
            .collect()
    }

    /// Demo files are stored quoted, the way `demo("name")` expects them.
    pub fn has_demo_file(&self, store: &SymbolStore, command: &str) -> bool {
        store.contains(CompletionKind::DemoFile, &format!("\"{}\"", command.trim()))
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_completion_on_empty_store() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entry(CompletionKind::Command, "integrate");
        assert_eq!(
            engine.complete(&store, "int", CompletionKind::Command),
            vec!["integrate"]
        );
    }

    #[test]
    fn every_completion_has_the_prefix_and_is_stored() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entries(
            CompletionKind::Command,
            ["integrate", "intersect", "Integrate", "diff", "in", "i"],
        );
        for partial in ["", "i", "in", "int", "Int", "x"] {
            for completion in engine.complete(&store, partial, CompletionKind::Command) {
                assert!(completion.starts_with(partial));
                assert!(store.contains(CompletionKind::Command, &completion));
            }
        }
    }

    #[test]
    fn commands_are_case_sensitive() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entries(CompletionKind::Command, ["Integrate", "integrate"]);
        assert_eq!(
            engine.complete(&store, "Int", CompletionKind::Command),
            vec!["Integrate"]
        );
    }

    #[test]
    fn results_keep_insertion_order() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entries(CompletionKind::Command, ["sinh", "sin", "sinc"]);
        assert_eq!(
            engine.complete(&store, "sin", CompletionKind::Command),
            vec!["sinh", "sin", "sinc"]
        );
    }

    #[test]
    fn fixes_template_placeholders() {
        let engine = QueryEngine::new();
        assert_eq!(
            engine.fix_template("integrate(<expr>, <var>)"),
            "integrate(<expr>,<var>)"
        );
        assert_eq!(
            engine.fix_template("integrate( <<expr>>, <var> )"),
            "integrate(<expr>,<var>)"
        );
        assert_eq!(engine.fix_template("print(<expr>, ...)"), "print(<expr>)");
        assert_eq!(
            engine.fix_template("if <cond> then <a> else <b>"),
            "if <cond> then <a> else <b>"
        );
    }

    #[test]
    fn template_completion_is_formatted() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entry(CompletionKind::Template, "integrate(<expr>, <var>)");
        store.add_entry(CompletionKind::Template, "integrate(<expr>,<var>)");
        assert_eq!(
            engine.complete(&store, "integrate", CompletionKind::Template),
            vec!["integrate(<expr>,<var>)"]
        );
    }

    #[test]
    fn placeholder_ranges() {
        let engine = QueryEngine::new();
        let template = "diff(<expr>,<var>)";
        let ranges = engine.placeholders(template);
        let tokens: Vec<&str> = ranges.into_iter().map(|r| &template[r]).collect();
        assert_eq!(tokens, vec!["<expr>", "<var>"]);
    }

    #[test]
    fn closing_quote_is_ignored_for_files() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entries(CompletionKind::LoadFile, ["\"draw\"", "\"drawdf\""]);
        assert_eq!(
            engine.complete(&store, "\"draw\"", CompletionKind::LoadFile),
            vec!["\"draw\"", "\"drawdf\""]
        );
    }

    #[test]
    fn worksheet_words_follow_commands() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entry(CompletionKind::Command, "foo");
        store.add_worksheet_words(["fox", "foo", "bar"]);
        assert_eq!(
            engine.complete_with_worksheet_words(&store, "fo"),
            vec!["foo", "fox"]
        );
    }

    #[test]
    fn demo_lookup_uses_quoted_name() {
        let store = SymbolStore::new();
        let engine = QueryEngine::new();
        store.add_entry(CompletionKind::DemoFile, "\"cf\"");
        assert!(engine.has_demo_file(&store, "cf"));
        assert!(!engine.has_demo_file(&store, "integrate"));
    }
}
