use crate::builtins;
use crate::kind::CompletionKind;
use crate::store::SymbolStore;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymbolsError {
    #[error("malformed symbol list: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// One symbol the engine told us about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: CompletionKind,
    pub text: String,
}

impl Declaration {
    pub fn new(kind: CompletionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Parses a symbol list such as
/// `<wxxml-symbols><function>foo</function><template>foo(<x>)</template></wxxml-symbols>`.
pub fn parse_symbols(xml: &str) -> Result<Vec<Declaration>, SymbolsError> {
    let document = roxmltree::Document::parse(xml)?;
    Ok(declarations(&document))
}

/// Reads the declarations of an already parsed document. Each child element
/// of the root is one symbol; its tag decides the kind.
pub fn declarations(document: &roxmltree::Document) -> Vec<Declaration> {
    document
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .filter_map(|node| {
            let text = node.text()?.trim();
            if text.is_empty() {
                return None;
            }
            let kind = match node.tag_name().name() {
                "template" => CompletionKind::Template,
                "unit" => CompletionKind::Unit,
                _ => CompletionKind::Command,
            };
            Some(Declaration::new(kind, text))
        })
        .collect()
}

/// Adds one symbol, applying the `FUNCTION: ` / `TEMPLATE: ` markers and the
/// one-template-per-arity rule. Returns the kinds that changed.
pub fn register(store: &SymbolStore, kind: CompletionKind, text: &str) -> Vec<CompletionKind> {
    let text = text.trim();
    let (kind, text) = match kind {
        CompletionKind::Command => {
            if let Some(rest) = text.strip_prefix("FUNCTION: ") {
                (CompletionKind::Command, rest.trim())
            } else if let Some(rest) = text.strip_prefix("TEMPLATE: ") {
                (CompletionKind::Template, rest.trim())
            } else {
                (kind, text)
            }
        }
        _ => (kind, text),
    };

    if kind != CompletionKind::Template {
        return if store.add_entry(kind, text) { vec![kind] } else { Vec::new() };
    }

    let mut changed = Vec::new();
    let (head, arity) = template_signature(text);
    if store.add_entry(CompletionKind::Command, head) {
        changed.push(CompletionKind::Command);
    }
    let added = store.add_entry_unless(CompletionKind::Template, text, |existing| {
        template_signature(existing) == (head, arity)
    });
    if added {
        changed.push(CompletionKind::Template);
    }
    changed
}

/// Registers a batch of declarations and returns the kinds that changed,
/// each reported once.
pub fn register_all(store: &SymbolStore, declarations: &[Declaration]) -> Vec<CompletionKind> {
    let mut changed: Vec<CompletionKind> = Vec::new();
    for declaration in declarations {
        for kind in register(store, declaration.kind, &declaration.text) {
            if !changed.contains(&kind) {
                changed.push(kind);
            }
        }
    }
    changed
}

/// Parses `xml` and registers what it declares. Malformed input contributes
/// nothing.
pub fn ingest(store: &SymbolStore, xml: &str) -> Vec<CompletionKind> {
    match parse_symbols(xml) {
        Ok(declarations) => {
            debug!("engine declared {} symbols", declarations.len());
            register_all(store, &declarations)
        }
        Err(e) => {
            debug!("ignoring symbol list: {}", e);
            Vec::new()
        }
    }
}

/// Loads the compiled tables.
pub fn load_builtins(store: &SymbolStore) -> Vec<CompletionKind> {
    let mut changed = Vec::new();
    for (kind, table) in [
        (CompletionKind::Command, builtins::COMMANDS),
        (CompletionKind::EscCommand, builtins::ESC_COMMANDS),
        (CompletionKind::Unit, builtins::UNITS),
    ] {
        if store.add_entries(kind, table.iter()) > 0 {
            changed.push(kind);
        }
    }

    let templates: Vec<Declaration> = builtins::TEMPLATES
        .iter()
        .map(|t| Declaration::new(CompletionKind::Template, *t))
        .collect();
    for kind in register_all(store, &templates) {
        if !changed.contains(&kind) {
            changed.push(kind);
        }
    }
    changed
}

/// Function name and number of `<` placeholders of a template.
fn template_signature(template: &str) -> (&str, usize) {
    let end = template
        .find(|c: char| c == '(' || c.is_whitespace())
        .unwrap_or(template.len());
    (&template[..end], template.matches('<').count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_symbols() {
        let xml = "<wxxml-symbols><function>foo</function><value>bar</value>\
                   <template>foo(&lt;x&gt;)</template><unit>furlong</unit></wxxml-symbols>";
        let declarations = parse_symbols(xml).unwrap();
        assert_eq!(
            declarations,
            vec![
                Declaration::new(CompletionKind::Command, "foo"),
                Declaration::new(CompletionKind::Command, "bar"),
                Declaration::new(CompletionKind::Template, "foo(<x>)"),
                Declaration::new(CompletionKind::Unit, "furlong"),
            ]
        );
    }

    #[test]
    fn unknown_tags_are_commands_and_empty_ones_skipped() {
        let xml = "<symbols><variable>v</variable><function>  </function></symbols>";
        assert_eq!(
            parse_symbols(xml).unwrap(),
            vec![Declaration::new(CompletionKind::Command, "v")]
        );
    }

    #[test]
    fn malformed_xml_leaves_store_unchanged() {
        let store = SymbolStore::new();
        ingest(&store, "<wxxml-symbols><function>foo</function></wxxml-symbols>");
        let before = store.entries(CompletionKind::Command);

        let changed = ingest(&store, "<wxxml-symbols><function>baz</function>");
        assert!(changed.is_empty());
        assert_eq!(store.entries(CompletionKind::Command), before);
        assert!(matches!(parse_symbols("<a><b></a>"), Err(SymbolsError::Xml(_))));
    }

    #[test]
    fn markers_reclassify_commands() {
        let store = SymbolStore::new();
        register(&store, CompletionKind::Command, "FUNCTION: foo");
        register(&store, CompletionKind::Command, "TEMPLATE: bar(<x>)");
        assert!(store.contains(CompletionKind::Command, "foo"));
        assert!(store.contains(CompletionKind::Template, "bar(<x>)"));
        assert!(store.contains(CompletionKind::Command, "bar"));
    }

    #[test]
    fn one_template_per_function_and_arity() {
        let store = SymbolStore::new();
        register(&store, CompletionKind::Template, "f(<x>)");
        register(&store, CompletionKind::Template, "f(<y>)");
        register(&store, CompletionKind::Template, "f(<x>, <y>)");
        register(&store, CompletionKind::Template, "fg(<x>)");
        assert_eq!(
            store.entries(CompletionKind::Template),
            vec!["f(<x>)", "f(<x>, <y>)", "fg(<x>)"]
        );
    }

    #[test]
    fn builtins_fill_their_kinds() {
        let store = SymbolStore::new();
        let changed = load_builtins(&store);
        for kind in [
            CompletionKind::Command,
            CompletionKind::EscCommand,
            CompletionKind::Unit,
            CompletionKind::Template,
        ] {
            assert!(changed.contains(&kind));
            assert!(store.len(kind) > 0);
        }
        assert!(store.contains(CompletionKind::Command, "integrate"));
        assert!(store.contains(CompletionKind::Command, "zn_primroot"));
        assert!(store.len(CompletionKind::Command) >= 2000);
        assert!(store.contains(CompletionKind::Template, "integrate(<expr>, <var>)"));

        // loading twice adds nothing
        assert!(load_builtins(&store).is_empty());
    }
}
