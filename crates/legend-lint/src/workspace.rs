//! Open documents and on-demand checking, for editor hosts.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::LintOptions;
use crate::document::LintDocument;
use crate::engine::LintEngine;
use crate::sink::DiagnosticSink;

/// Documents by URI plus the engine that checks them.
#[derive(Default)]
pub struct LintWorkspace {
    documents: FxHashMap<String, LintDocument>,
    engine: LintEngine,
}

impl LintWorkspace {
    pub fn new(options: LintOptions) -> Self {
        LintWorkspace {
            documents: FxHashMap::default(),
            engine: LintEngine::new(options),
        }
    }

    pub fn engine(&self) -> &LintEngine {
        &self.engine
    }

    pub fn set_options(&mut self, options: LintOptions) {
        self.engine = LintEngine::new(options);
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn document(&self, uri: &str) -> Option<&LintDocument> {
        self.documents.get(uri)
    }

    /// Open (or reopen) a document.
    pub fn open_document(&mut self, uri: &str, text: String) {
        trace!(uri, "open document");
        self.documents
            .insert(uri.to_string(), LintDocument::new(uri.to_string(), text));
    }

    /// Replace an open document's text. `None` if it isn't open.
    pub fn update_document(&mut self, uri: &str, text: String) -> Option<()> {
        let document = self.documents.get_mut(uri)?;
        document.update_source(text);
        Some(())
    }

    pub fn close_document(&mut self, uri: &str) -> Option<LintDocument> {
        self.documents.remove(uri)
    }

    /// Check one document and hand its diagnostics to `sink`: the entry is
    /// cleared first, then set. A document that isn't open is skipped
    /// without touching the sink. Returns the diagnostic count.
    pub fn check_document(&self, uri: &str, sink: &mut dyn DiagnosticSink) -> Option<usize> {
        let Some(document) = self.documents.get(uri) else {
            debug!(uri, "check requested for unknown document");
            return None;
        };
        let diagnostics = self.engine.check_document(document);
        let count = diagnostics.len();
        sink.clear(uri);
        sink.set(uri, diagnostics);
        Some(count)
    }

    /// Check every open document, in URI order.
    pub fn check_all(&self, sink: &mut dyn DiagnosticSink) -> usize {
        let mut uris: Vec<&String> = self.documents.keys().collect();
        uris.sort();
        uris.into_iter()
            .filter_map(|uri| self.check_document(uri, sink))
            .sum()
    }
}
