//! A parsed and bound source file.

use legend_binder::BinderState;
use legend_common::LineMap;
use legend_parser::parser::node::NodeArena;
use legend_parser::{NodeIndex, ParseDiagnostic, ParserState};
use tracing::debug;

/// Everything one lint pass needs: tree, bindings and line map. Rebuilt
/// from scratch whenever the text changes.
pub struct LintDocument {
    pub(crate) file_name: String,
    pub(crate) root: NodeIndex,
    pub(crate) parser: ParserState,
    pub(crate) binder: BinderState,
    pub(crate) line_map: LineMap,
}

impl LintDocument {
    /// Parse and bind `source_text`.
    pub fn new(file_name: String, source_text: String) -> Self {
        let mut parser = ParserState::new(file_name.clone(), source_text);
        let root = parser.parse_source_file();

        let mut binder = BinderState::new();
        binder.bind_source_file(parser.get_arena(), root);

        let line_map = LineMap::build(parser.get_source_text());
        debug!(
            file = %file_name,
            parse_errors = parser.get_diagnostics().len(),
            "document parsed"
        );

        LintDocument {
            file_name,
            root,
            parser,
            binder,
            line_map,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn arena(&self) -> &NodeArena {
        self.parser.get_arena()
    }

    pub fn binder(&self) -> &BinderState {
        &self.binder
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    pub fn source_text(&self) -> &str {
        self.parser.get_source_text()
    }

    /// Syntax errors the parser recovered from.
    pub fn parse_diagnostics(&self) -> &[ParseDiagnostic] {
        self.parser.get_diagnostics()
    }

    /// Replace the text and rebuild the tree.
    pub fn update_source(&mut self, source_text: String) {
        *self = LintDocument::new(std::mem::take(&mut self.file_name), source_text);
    }
}
