//! Where finished diagnostics go.

use indexmap::IndexMap;
use legend_common::Diagnostic;

/// Receives a document's complete diagnostic list. `set` always replaces;
/// there is no append.
pub trait DiagnosticSink {
    fn set(&mut self, document: &str, diagnostics: Vec<Diagnostic>);

    fn clear(&mut self, document: &str) {
        self.set(document, Vec::new());
    }
}

/// In-memory sink keyed by document identity, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    entries: IndexMap<String, Vec<Diagnostic>>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, document: &str) -> Option<&[Diagnostic]> {
        self.entries.get(document).map(Vec::as_slice)
    }

    /// Forget a document entirely.
    pub fn delete(&mut self, document: &str) -> Option<Vec<Diagnostic>> {
        self.entries.shift_remove(document)
    }

    pub fn has(&self, document: &str) -> bool {
        self.entries.contains_key(document)
    }

    /// Number of documents with an entry (possibly empty).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics across all documents.
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Diagnostic])> {
        self.entries
            .iter()
            .map(|(document, diagnostics)| (document.as_str(), diagnostics.as_slice()))
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn set(&mut self, document: &str, diagnostics: Vec<Diagnostic>) {
        self.entries.insert(document.to_string(), diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legend_common::{Position, Range};

    fn warning(message: &str) -> Diagnostic {
        Diagnostic::warning(
            "observable-naming",
            0,
            1,
            Range::new(Position::new(0, 0), Position::new(0, 1)),
            message,
        )
    }

    #[test]
    fn set_replaces_previous_list() {
        let mut collection = DiagnosticCollection::new();
        collection.set("file:///a.tsx", vec![warning("one"), warning("two")]);
        collection.set("file:///a.tsx", vec![warning("three")]);
        let diagnostics = collection.get("file:///a.tsx").unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "three");
    }

    #[test]
    fn clear_keeps_an_empty_entry() {
        let mut collection = DiagnosticCollection::new();
        collection.set("a", vec![warning("one")]);
        collection.clear("a");
        assert!(collection.has("a"));
        assert_eq!(collection.total(), 0);
        assert!(collection.delete("a").is_some());
        assert!(collection.is_empty());
    }

    #[test]
    fn documents_iterate_in_insertion_order() {
        let mut collection = DiagnosticCollection::new();
        collection.set("b", vec![]);
        collection.set("a", vec![warning("x")]);
        collection.set("b", vec![warning("y")]);
        let order: Vec<&str> = collection.iter().map(|(doc, _)| doc).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(collection.total(), 2);
    }
}
