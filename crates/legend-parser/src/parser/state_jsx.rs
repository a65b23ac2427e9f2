//! Parser state - JSX elements, fragments, attributes and children.
//!
//! Inside element bodies the scanner runs in JSX-child mode (`scan_jsx_token`)
//! so text is not tokenized as code. An element nested in children rescans
//! in that mode after its closing `>`; a top-level element resumes normal
//! scanning.

use legend_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::state::ParserState;
use super::syntax_kind_ext;

impl ParserState {
    fn scan_jsx_child_token(&mut self) {
        self.prev_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan_jsx_token();
    }

    fn scan_jsx_identifier(&mut self) {
        self.current_token = self.scanner.scan_jsx_identifier();
    }

    fn scan_jsx_attribute_value(&mut self) {
        self.prev_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan_jsx_attribute_value();
    }

    /// Consume a closing `>` and continue in the right scanning mode.
    fn parse_jsx_closing_greater_than(&mut self, in_children: bool) {
        if !self.is_token(SyntaxKind::GreaterThanToken) {
            self.parse_error_at_current_token("'>' expected.", 1005);
            return;
        }
        if in_children {
            self.scan_jsx_child_token();
        } else {
            self.next_token();
        }
    }

    pub(crate) fn parse_jsx_element_or_self_closing_or_fragment(
        &mut self,
        in_children: bool,
    ) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_jsx_element_worker(in_children);
        self.exit_recursion();
        result
    }

    fn parse_jsx_element_worker(&mut self, in_children: bool) -> NodeIndex {
        let start = self.token_pos();
        let opening = self.parse_jsx_opening_or_self_closing_or_opening_fragment(in_children);
        let Some(opening_kind) = self.arena.kind_of(opening) else {
            return NodeIndex::NONE;
        };

        match opening_kind {
            syntax_kind_ext::JSX_SELF_CLOSING_ELEMENT => opening,
            syntax_kind_ext::JSX_OPENING_FRAGMENT => {
                let children = self.parse_jsx_children();
                let closing_fragment = self.parse_jsx_closing_fragment(in_children);
                self.arena.add_jsx_fragment(
                    syntax_kind_ext::JSX_FRAGMENT,
                    start,
                    self.prev_token_end,
                    JsxFragmentData {
                        opening_fragment: opening,
                        children,
                        closing_fragment,
                    },
                )
            }
            _ => {
                let children = self.parse_jsx_children();
                let closing_element = self.parse_jsx_closing_element(in_children);
                self.check_jsx_tag_names_match(opening, closing_element);
                self.arena.add_jsx_element(
                    syntax_kind_ext::JSX_ELEMENT,
                    start,
                    self.prev_token_end,
                    JsxElementData {
                        opening_element: opening,
                        children,
                        closing_element,
                    },
                )
            }
        }
    }

    fn parse_jsx_opening_or_self_closing_or_opening_fragment(
        &mut self,
        in_children: bool,
    ) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::LessThanToken);

        if self.is_token(SyntaxKind::GreaterThanToken) {
            self.scan_jsx_child_token();
            return self.arena.add_token(
                syntax_kind_ext::JSX_OPENING_FRAGMENT,
                start,
                self.prev_token_end,
            );
        }

        let tag_name = self.parse_jsx_element_name();
        let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_type_arguments())
        } else {
            None
        };
        let attributes = self.parse_jsx_attributes();

        let kind = if self.is_token(SyntaxKind::GreaterThanToken) {
            self.scan_jsx_child_token();
            syntax_kind_ext::JSX_OPENING_ELEMENT
        } else {
            self.parse_expected(SyntaxKind::SlashToken);
            self.parse_jsx_closing_greater_than(in_children);
            syntax_kind_ext::JSX_SELF_CLOSING_ELEMENT
        };

        self.arena.add_jsx_opening(
            kind,
            start,
            self.prev_token_end,
            JsxOpeningData {
                tag_name,
                type_arguments,
                attributes,
            },
        )
    }

    /// `div`, `data-x`, `ns:tag`, `Foo.Bar`
    fn parse_jsx_element_name(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.scan_jsx_identifier();
        let mut name = if self.is_token(SyntaxKind::ThisKeyword) {
            self.next_token();
            self.arena
                .add_token(SyntaxKind::ThisKeyword as u16, start, self.prev_token_end)
        } else {
            self.parse_identifier_name()
        };

        if self.parse_optional(SyntaxKind::ColonToken) {
            self.scan_jsx_identifier();
            let local = self.parse_identifier_name();
            return self.arena.add_jsx_namespaced_name(
                syntax_kind_ext::JSX_NAMESPACED_NAME,
                start,
                self.prev_token_end,
                JsxNamespacedNameData {
                    namespace: name,
                    name: local,
                },
            );
        }

        while self.parse_optional(SyntaxKind::DotToken) {
            let member = self.parse_identifier_name();
            name = self.arena.add_access_expr(
                syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
                start,
                self.prev_token_end,
                AccessExprData {
                    expression: name,
                    name_or_argument: member,
                    question_dot_token: false,
                },
            );
        }
        name
    }

    fn parse_jsx_attributes(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let mut properties = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken | SyntaxKind::EndOfFileToken
        ) {
            let attribute_start = self.token_pos();
            let attribute = if self.is_token(SyntaxKind::OpenBraceToken) {
                self.parse_jsx_spread_attribute()
            } else {
                self.parse_jsx_attribute()
            };
            if attribute.is_some() {
                properties.push(attribute);
            }
            if self.token_pos() == attribute_start {
                self.parse_error_at_current_token("Identifier expected.", 1003);
                self.next_token();
            }
        }
        let properties = NodeList::with_nodes(properties, start, self.prev_token_end);
        self.arena.add_jsx_attributes(
            syntax_kind_ext::JSX_ATTRIBUTES,
            start,
            self.prev_token_end,
            JsxAttributesData { properties },
        )
    }

    /// `{...props}`
    fn parse_jsx_spread_attribute(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::JSX_SPREAD_ATTRIBUTE,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    /// `name`, `name="v"`, `name={expr}`, `name=<El />`
    fn parse_jsx_attribute(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.scan_jsx_identifier();
        let mut name = self.parse_identifier_name();
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.scan_jsx_identifier();
            let local = self.parse_identifier_name();
            name = self.arena.add_jsx_namespaced_name(
                syntax_kind_ext::JSX_NAMESPACED_NAME,
                start,
                self.prev_token_end,
                JsxNamespacedNameData {
                    namespace: name,
                    name: local,
                },
            );
        }

        let initializer = if self.is_token(SyntaxKind::EqualsToken) {
            self.scan_jsx_attribute_value();
            match self.token() {
                SyntaxKind::StringLiteral => self.parse_literal(),
                SyntaxKind::OpenBraceToken => self.parse_jsx_expression(false),
                SyntaxKind::LessThanToken => {
                    self.parse_jsx_element_or_self_closing_or_fragment(false)
                }
                _ => {
                    self.parse_error_at_current_token(
                        "JSX value should be either an expression or a quoted JSX text.",
                        1145,
                    );
                    NodeIndex::NONE
                }
            }
        } else {
            NodeIndex::NONE
        };

        self.arena.add_jsx_attribute(
            syntax_kind_ext::JSX_ATTRIBUTE,
            start,
            self.prev_token_end,
            JsxAttributeData { name, initializer },
        )
    }

    /// `{expr}` as an attribute value or a child.
    fn parse_jsx_expression(&mut self, in_children: bool) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let expression = if self.is_token(SyntaxKind::CloseBraceToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        if self.is_token(SyntaxKind::CloseBraceToken) {
            if in_children {
                self.scan_jsx_child_token();
            } else {
                self.next_token();
            }
        } else {
            self.parse_error_at_current_token("'}' expected.", 1005);
        }
        self.arena.add_jsx_expression(
            syntax_kind_ext::JSX_EXPRESSION,
            start,
            self.prev_token_end,
            JsxExpressionData {
                dot_dot_dot_token,
                expression,
            },
        )
    }

    fn parse_jsx_children(&mut self) -> NodeList {
        let pos = self.token_pos();
        let mut children = Vec::new();
        loop {
            let child = match self.token() {
                SyntaxKind::JsxText | SyntaxKind::JsxTextAllWhiteSpaces => {
                    let kind = self.token() as u16;
                    let start = self.token_pos();
                    let end = self.token_end();
                    let text = self.token_value().to_string();
                    self.scan_jsx_child_token();
                    self.arena
                        .add_literal(kind, start, end, LiteralData { text, value: None })
                }
                SyntaxKind::OpenBraceToken => self.parse_jsx_expression(true),
                SyntaxKind::LessThanToken => {
                    self.parse_jsx_element_or_self_closing_or_fragment(true)
                }
                SyntaxKind::LessThanSlashToken => break,
                _ => {
                    self.parse_error_at_current_token(
                        "JSX element has no corresponding closing tag.",
                        17008,
                    );
                    break;
                }
            };
            if child.is_none() {
                break;
            }
            children.push(child);
        }
        NodeList::with_nodes(children, pos, self.prev_token_end)
    }

    fn parse_jsx_closing_element(&mut self, in_children: bool) -> NodeIndex {
        let start = self.token_pos();
        if !self.parse_expected(SyntaxKind::LessThanSlashToken) {
            return NodeIndex::NONE;
        }
        let tag_name = self.parse_jsx_element_name();
        self.parse_jsx_closing_greater_than(in_children);
        self.arena.add_jsx_closing(
            syntax_kind_ext::JSX_CLOSING_ELEMENT,
            start,
            self.prev_token_end,
            JsxClosingData { tag_name },
        )
    }

    fn parse_jsx_closing_fragment(&mut self, in_children: bool) -> NodeIndex {
        let start = self.token_pos();
        if !self.parse_expected(SyntaxKind::LessThanSlashToken) {
            return NodeIndex::NONE;
        }
        self.parse_jsx_closing_greater_than(in_children);
        self.arena.add_token(
            syntax_kind_ext::JSX_CLOSING_FRAGMENT,
            start,
            self.prev_token_end,
        )
    }

    fn check_jsx_tag_names_match(&mut self, opening: NodeIndex, closing: NodeIndex) {
        let opening_tag = self
            .arena
            .get(opening)
            .and_then(|n| self.arena.get_jsx_opening(n))
            .map(|d| d.tag_name);
        let closing_tag = self
            .arena
            .get(closing)
            .and_then(|n| self.arena.get_jsx_closing(n))
            .map(|d| d.tag_name);
        let (Some(opening_tag), Some(closing_tag)) = (opening_tag, closing_tag) else {
            return;
        };
        let source = self.scanner.source_text();
        let opening_text = self.arena.node_text(opening_tag, source).map(str::to_string);
        let closing_text = self.arena.node_text(closing_tag, source);
        if opening_text.as_deref() == closing_text {
            return;
        }
        let Some(closing_node) = self.arena.get(closing_tag).copied() else {
            return;
        };
        let message = format!(
            "Expected corresponding JSX closing tag for '{}'.",
            opening_text.unwrap_or_default()
        );
        self.parse_error_at(closing_node.pos, closing_node.len(), &message, 17002);
    }
}
