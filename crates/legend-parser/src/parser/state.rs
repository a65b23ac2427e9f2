//! Parser state: token handling, diagnostics, speculation and list parsing.
//!
//! Parsing methods live in `state_statements`, `state_expressions`,
//! `state_types` and `state_jsx`; this module holds what they share.

use legend_common::limits::MAX_PARSE_DEPTH;
use legend_scanner::{ScannerSnapshot, ScannerState, SyntaxKind, token_to_string};
use serde::Serialize;
use tracing::{debug, trace};

use super::base::{NodeIndex, NodeList};
use super::flags::node_flags;
use super::node::{IdentifierData, NodeArena, SourceFileData};
use super::syntax_kind_ext;

/// Parse error. Parsing always continues and produces a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

/// Context bits that change how constructs are parsed.
pub(crate) mod context_flags {
    /// `in` is not a binary operator (for-statement initializers)
    pub const DISALLOW_IN: u32 = 1 << 0;
    pub const IN_ASYNC: u32 = 1 << 1;
    pub const IN_GENERATOR: u32 = 1 << 2;
    /// Conditional types are not allowed (inside an `extends` clause)
    pub const DISALLOW_CONDITIONAL_TYPES: u32 = 1 << 3;
}

/// Saved parser position for speculative parsing.
pub(crate) struct ParserSnapshot {
    scanner: ScannerSnapshot,
    current_token: SyntaxKind,
    prev_token_end: u32,
    diagnostics_len: usize,
}

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// End of the last consumed token; node ends are taken from here
    pub(crate) prev_token_end: u32,
    pub(crate) context_flags: u32,
    pub(crate) diagnostics: Vec<ParseDiagnostic>,
    pub(crate) recursion_depth: u32,
    pub(crate) depth_error_reported: bool,
    pub(crate) is_jsx: bool,
}

/// JSX is on for `.tsx`/`.jsx`/`.js`-family files and unknown extensions.
pub fn file_uses_jsx(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    !(lower.ends_with(".ts") || lower.ends_with(".mts") || lower.ends_with(".cts"))
}

impl ParserState {
    pub fn new(file_name: String, text: String) -> ParserState {
        let is_jsx = file_uses_jsx(&file_name);
        let estimated_nodes = text.len() / 6;
        ParserState {
            scanner: ScannerState::new(text),
            arena: NodeArena::with_capacity(estimated_nodes),
            file_name,
            current_token: SyntaxKind::Unknown,
            prev_token_end: 0,
            context_flags: 0,
            diagnostics: Vec::new(),
            recursion_depth: 0,
            depth_error_reported: false,
            is_jsx,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_source_text(&self) -> &str {
        self.scanner.source_text()
    }

    /// Parser and scanner diagnostics, ordered by position.
    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // Entry point
    // =========================================================================

    #[tracing::instrument(level = "debug", skip(self), fields(file = %self.file_name))]
    pub fn parse_source_file(&mut self) -> NodeIndex {
        self.scanner.scan_shebang_trivia();
        self.next_token();

        let statements = self.parse_statement_list_until(|p| p.is_token(SyntaxKind::EndOfFileToken));

        let eof_pos = self.token_pos();
        let end_of_file_token =
            self.arena
                .add_token(SyntaxKind::EndOfFileToken as u16, eof_pos, eof_pos);

        self.merge_scanner_diagnostics();

        let text = self.scanner.source_text_arc();
        let end = text.len() as u32;
        let root = self.arena.add_source_file(
            syntax_kind_ext::SOURCE_FILE,
            0,
            end,
            SourceFileData {
                file_name: self.file_name.clone(),
                text,
                statements,
                end_of_file_token,
                is_jsx: self.is_jsx,
            },
        );

        debug!(
            nodes = self.arena.len(),
            diagnostics = self.diagnostics.len(),
            "parsed source file"
        );
        root
    }

    fn merge_scanner_diagnostics(&mut self) {
        for diag in self.scanner.get_scanner_diagnostics() {
            self.diagnostics.push(ParseDiagnostic {
                start: diag.pos as u32,
                length: diag.length as u32,
                message: diag.message.to_string(),
                code: diag.code,
            });
        }
        self.diagnostics.sort_by_key(|d| d.start);
        self.diagnostics
            .dedup_by(|a, b| a.start == b.start && a.code == b.code);
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.prev_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan();
        self.current_token
    }

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.token_pos()
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end()
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    #[inline]
    pub(crate) fn in_context(&self, flag: u32) -> bool {
        self.context_flags & flag != 0
    }

    /// Run `f` with context `flags` set (`value`) or cleared.
    pub(crate) fn with_context<T>(
        &mut self,
        flags: u32,
        value: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context_flags;
        if value {
            self.context_flags |= flags;
        } else {
            self.context_flags &= !flags;
        }
        let result = f(self);
        self.context_flags = saved;
        result
    }

    /// Identifier, or a contextual keyword usable as one.
    pub(crate) fn is_identifier(&self) -> bool {
        if self.current_token == SyntaxKind::YieldKeyword {
            return !self.in_context(context_flags::IN_GENERATOR);
        }
        if self.current_token == SyntaxKind::AwaitKeyword {
            return !self.in_context(context_flags::IN_ASYNC);
        }
        self.current_token.is_identifier_like()
    }

    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.current_token.is_identifier_or_keyword()
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report "'x' expected." (TS1005).
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            self.parse_error_at_current_token(&format!("'{}' expected.", token_to_string(kind)), 1005);
            false
        }
    }

    /// `>` that may have been scanned as part of a longer operator.
    pub(crate) fn parse_expected_greater_than(&mut self) -> bool {
        self.parse_expected(SyntaxKind::GreaterThanToken)
    }

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        self.is_token(SyntaxKind::SemicolonToken)
            || self.is_token(SyntaxKind::CloseBraceToken)
            || self.is_token(SyntaxKind::EndOfFileToken)
            || self.has_preceding_line_break()
    }

    /// Consume a statement terminator, honoring automatic semicolon insertion.
    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
            return true;
        }
        if self.can_parse_semicolon() {
            return true;
        }
        self.parse_expected(SyntaxKind::SemicolonToken)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        // One error per position keeps recovery from cascading.
        if self.diagnostics.last().is_some_and(|d| d.start == start) {
            return;
        }
        trace!(start, code, message, "parse error");
        self.diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: message.to_string(),
            code,
        });
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn error_expression_expected(&mut self) {
        self.parse_error_at_current_token("Expression expected.", 1109);
    }

    /// Placeholder identifier for a missing construct.
    pub(crate) fn create_missing_identifier(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let index = self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            pos,
            pos,
            IdentifierData {
                escaped_text: String::new(),
            },
        );
        self.arena
            .set_node_flags(index, node_flags::THIS_NODE_HAS_ERROR);
        index
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Enter a recursive construct; false when nesting is too deep.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSE_DEPTH {
            if !self.depth_error_reported {
                self.depth_error_reported = true;
                self.parse_error_at_current_token("Expression nesting is too deep.", 1109);
            }
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    pub(crate) fn save(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.save_state(),
            current_token: self.current_token,
            prev_token_end: self.prev_token_end,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.scanner.restore_state(snapshot.scanner);
        self.current_token = snapshot.current_token;
        self.prev_token_end = snapshot.prev_token_end;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    /// Run `f` and always rewind afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.save();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    /// Run `f`; rewind if it returns `None` or reported an error.
    ///
    /// Nodes created by a failed attempt stay in the arena unreachable from
    /// the root.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.save();
        let diagnostics_before = self.diagnostics.len();
        match f(self) {
            Some(value) if self.diagnostics.len() == diagnostics_before => Some(value),
            _ => {
                self.restore(snapshot);
                None
            }
        }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Parse statements until `is_end` holds, skipping unparseable tokens.
    pub(crate) fn parse_statement_list_until(
        &mut self,
        is_end: impl Fn(&Self) -> bool,
    ) -> NodeList {
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        while !is_end(self) && !self.is_token(SyntaxKind::EndOfFileToken) {
            let start = self.token_pos();
            let start_token = self.current_token;
            let statement = self.parse_statement();
            if statement.is_some() {
                nodes.push(statement);
            }
            if self.token_pos() == start && self.current_token == start_token {
                self.parse_error_at_current_token("Declaration or statement expected.", 1128);
                self.next_token();
            }
        }
        NodeList::with_nodes(nodes, pos, self.prev_token_end)
    }

    /// Parse `elem (, elem)* ,?` up to `close` (not consumed).
    pub(crate) fn parse_delimited_list(
        &mut self,
        close: SyntaxKind,
        mut parse_element: impl FnMut(&mut Self) -> NodeIndex,
    ) -> NodeList {
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        let mut has_trailing_comma = false;
        while !self.is_token(close) && !self.is_token(SyntaxKind::EndOfFileToken) {
            let start = self.token_pos();
            let element = parse_element(self);
            if element.is_some() {
                nodes.push(element);
            }
            if self.parse_optional(SyntaxKind::CommaToken) {
                has_trailing_comma = true;
                continue;
            }
            has_trailing_comma = false;
            if self.is_token(close) {
                break;
            }
            self.parse_expected(SyntaxKind::CommaToken);
            if self.token_pos() == start {
                // No progress: skip the offending token.
                self.next_token();
            }
            if self.is_list_terminator() {
                break;
            }
        }
        let mut list = NodeList::with_nodes(nodes, pos, self.prev_token_end);
        list.has_trailing_comma = has_trailing_comma;
        list
    }

    /// Tokens that end any enclosing list during recovery.
    fn is_list_terminator(&self) -> bool {
        matches!(
            self.current_token,
            SyntaxKind::SemicolonToken | SyntaxKind::EndOfFileToken
        )
    }
}
