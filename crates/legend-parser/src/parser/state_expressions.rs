//! Parser state - expressions.

use legend_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::flags::{ModifierFlags, node_flags};
use super::node::*;
use super::state::{ParserState, context_flags};
use super::syntax_kind_ext;

/// Signature part of an arrow function, parsed speculatively.
struct ArrowHead {
    type_parameters: Option<NodeList>,
    parameters: NodeList,
    type_annotation: NodeIndex,
}

/// Binding power of a binary operator; 0 when `kind` is not one.
fn binary_operator_precedence(kind: SyntaxKind) -> u8 {
    use SyntaxKind::*;
    match kind {
        QuestionQuestionToken => 4,
        BarBarToken => 5,
        AmpersandAmpersandToken => 6,
        BarToken => 7,
        CaretToken => 8,
        AmpersandToken => 9,
        EqualsEqualsToken
        | ExclamationEqualsToken
        | EqualsEqualsEqualsToken
        | ExclamationEqualsEqualsToken => 10,
        LessThanToken
        | GreaterThanToken
        | LessThanEqualsToken
        | GreaterThanEqualsToken
        | InstanceOfKeyword
        | InKeyword
        | AsKeyword
        | SatisfiesKeyword => 11,
        LessThanLessThanToken
        | GreaterThanGreaterThanToken
        | GreaterThanGreaterThanGreaterThanToken => 12,
        PlusToken | MinusToken => 13,
        AsteriskToken | SlashToken | PercentToken => 14,
        AsteriskAsteriskToken => 15,
        _ => 0,
    }
}

/// Parse the numeric value of a literal whose separators were removed.
fn parse_numeric_value(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    let radix = |prefix: &str, radix: u32| {
        lower
            .strip_prefix(prefix)
            .and_then(|digits| u64::from_str_radix(digits, radix).ok())
            .map(|v| v as f64)
    };
    if lower.starts_with("0x") {
        radix("0x", 16)
    } else if lower.starts_with("0b") {
        radix("0b", 2)
    } else if lower.starts_with("0o") {
        radix("0o", 8)
    } else {
        lower.parse::<f64>().ok()
    }
}

impl ParserState {
    // =========================================================================
    // Re-scanning
    // =========================================================================

    pub(crate) fn re_scan_greater_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_greater_token();
        self.current_token
    }

    fn re_scan_slash_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_slash_token();
        self.current_token
    }

    pub(crate) fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_template_token();
        self.current_token
    }

    // =========================================================================
    // Names and literals
    // =========================================================================

    fn create_identifier_from_token(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let kind = if self.is_token(SyntaxKind::PrivateIdentifier) {
            SyntaxKind::PrivateIdentifier
        } else {
            SyntaxKind::Identifier
        };
        let escaped_text = self.token_value().to_string();
        self.next_token();
        self.arena.add_identifier(
            kind as u16,
            pos,
            self.prev_token_end,
            IdentifierData { escaped_text },
        )
    }

    /// Identifier in a binding or reference position.
    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if self.is_identifier() {
            return self.create_identifier_from_token();
        }
        if self.token().is_reserved_word() {
            let message = format!(
                "Identifier expected. '{}' is a reserved word that cannot be used here.",
                self.token_value()
            );
            self.parse_error_at_current_token(&message, 1359);
        } else {
            self.parse_error_at_current_token("Identifier expected.", 1003);
        }
        self.create_missing_identifier()
    }

    /// Identifier after `.` or as a property name; keywords allowed.
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if self.is_identifier_or_keyword() || self.is_token(SyntaxKind::PrivateIdentifier) {
            return self.create_identifier_from_token();
        }
        self.parse_error_at_current_token("Identifier expected.", 1003);
        self.create_missing_identifier()
    }

    /// Literal node for the current token (string, numeric, template part, ...).
    pub(crate) fn parse_literal(&mut self) -> NodeIndex {
        let kind = self.token();
        let pos = self.token_pos();
        let text = self.token_value().to_string();
        let value = if kind == SyntaxKind::NumericLiteral {
            parse_numeric_value(&text)
        } else {
            None
        };
        self.next_token();
        self.arena.add_literal(
            kind as u16,
            pos,
            self.prev_token_end,
            LiteralData { text, value },
        )
    }

    /// Property name in classes, object literals, interfaces and enums.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => self.parse_literal(),
            SyntaxKind::OpenBracketToken => {
                let start = self.token_pos();
                self.next_token();
                let expression = self.with_context(context_flags::DISALLOW_IN, false, |p| {
                    p.parse_assignment_expression_or_higher()
                });
                self.parse_expected(SyntaxKind::CloseBracketToken);
                self.arena.add_unary_expr_ex(
                    syntax_kind_ext::COMPUTED_PROPERTY_NAME,
                    start,
                    self.prev_token_end,
                    UnaryExprDataEx {
                        expression,
                        asterisk_token: false,
                    },
                )
            }
            _ => self.parse_identifier_name(),
        }
    }

    // =========================================================================
    // Expression entry points
    // =========================================================================

    /// `expr (, expr)*`
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let mut expr = self.parse_assignment_expression_or_higher();
        while self.is_token(SyntaxKind::CommaToken) {
            let operator_token = self.token() as u16;
            self.next_token();
            let right = self.parse_assignment_expression_or_higher();
            expr = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start,
                self.prev_token_end,
                BinaryExprData {
                    left: expr,
                    operator_token,
                    right,
                },
            );
        }
        expr
    }

    pub(crate) fn parse_assignment_expression_or_higher(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_assignment_expression_worker();
        self.exit_recursion();
        result
    }

    fn parse_assignment_expression_worker(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::YieldKeyword) && self.in_context(context_flags::IN_GENERATOR)
        {
            return self.parse_yield_expression();
        }

        if let Some(arrow) = self.try_parse_arrow_function() {
            return arrow;
        }

        let start = self.token_pos();
        let expr = self.parse_binary_expression_or_higher(0);

        if self.re_scan_greater_token().is_assignment_operator() {
            let operator_token = self.token() as u16;
            self.next_token();
            let right = self.parse_assignment_expression_or_higher();
            return self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start,
                self.prev_token_end,
                BinaryExprData {
                    left: expr,
                    operator_token,
                    right,
                },
            );
        }

        self.parse_conditional_expression_rest(start, expr)
    }

    fn parse_conditional_expression_rest(&mut self, start: u32, condition: NodeIndex) -> NodeIndex {
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return condition;
        }
        let when_true = self.with_context(context_flags::DISALLOW_IN, false, |p| {
            p.parse_assignment_expression_or_higher()
        });
        self.parse_expected(SyntaxKind::ColonToken);
        let when_false = self.parse_assignment_expression_or_higher();
        self.arena.add_conditional_expr(
            syntax_kind_ext::CONDITIONAL_EXPRESSION,
            start,
            self.prev_token_end,
            ConditionalExprData {
                condition,
                when_true,
                when_false,
            },
        )
    }

    fn parse_yield_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let (asterisk_token, expression) = if !self.has_preceding_line_break()
            && (self.is_token(SyntaxKind::AsteriskToken) || self.is_start_of_expression())
        {
            let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
            (asterisk, self.parse_assignment_expression_or_higher())
        } else {
            (false, NodeIndex::NONE)
        };
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::YIELD_EXPRESSION,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token,
            },
        )
    }

    pub(crate) fn is_start_of_expression(&self) -> bool {
        use SyntaxKind::*;
        matches!(
            self.token(),
            NumericLiteral
                | BigIntLiteral
                | StringLiteral
                | NoSubstitutionTemplateLiteral
                | TemplateHead
                | OpenParenToken
                | OpenBracketToken
                | OpenBraceToken
                | PlusToken
                | MinusToken
                | TildeToken
                | ExclamationToken
                | PlusPlusToken
                | MinusMinusToken
                | LessThanToken
                | SlashToken
                | SlashEqualsToken
                | PrivateIdentifier
                | AtToken
        ) || self.is_identifier_or_keyword()
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn try_parse_arrow_function(&mut self) -> Option<NodeIndex> {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::OpenParenToken => {
                let head = self.try_parse(|p| p.parse_arrow_head(false))?;
                Some(self.parse_arrow_body(start, false, head))
            }
            SyntaxKind::LessThanToken => {
                if self.is_jsx && !self.is_generic_arrow_in_jsx() {
                    return None;
                }
                let head = self.try_parse(|p| p.parse_arrow_head(false))?;
                Some(self.parse_arrow_body(start, false, head))
            }
            SyntaxKind::AsyncKeyword => {
                let simple = self.look_ahead(|p| {
                    p.next_token();
                    !p.has_preceding_line_break()
                        && p.is_identifier()
                        && p.next_token_is(SyntaxKind::EqualsGreaterThanToken)
                });
                if simple {
                    self.next_token();
                    return Some(self.parse_simple_arrow_function(start, true));
                }
                let paren_follows = self.look_ahead(|p| {
                    p.next_token();
                    !p.has_preceding_line_break()
                        && matches!(
                            p.token(),
                            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
                        )
                });
                if !paren_follows {
                    return self.try_parse_simple_arrow(start);
                }
                let head = self.try_parse(|p| {
                    p.next_token();
                    p.parse_arrow_head(true)
                })?;
                Some(self.parse_arrow_body(start, true, head))
            }
            _ => self.try_parse_simple_arrow(start),
        }
    }

    fn try_parse_simple_arrow(&mut self, start: u32) -> Option<NodeIndex> {
        let is_simple = self.is_identifier()
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::EqualsGreaterThanToken) && !p.has_preceding_line_break()
            });
        is_simple.then(|| self.parse_simple_arrow_function(start, false))
    }

    /// `<T,>(...)` or `<T extends U>(...)` in a JSX-enabled file.
    fn is_generic_arrow_in_jsx(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if !p.is_identifier() {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::CommaToken | SyntaxKind::ExtendsKeyword | SyntaxKind::EqualsToken
            )
        })
    }

    fn parse_arrow_head(&mut self, is_async: bool) -> Option<ArrowHead> {
        self.with_function_context(is_async, false, |p| {
            let type_parameters = p.parse_type_parameters_opt();
            if !p.is_token(SyntaxKind::OpenParenToken) {
                return None;
            }
            let parameters = p.parse_parameter_list();
            let type_annotation = if p.is_token(SyntaxKind::ColonToken) {
                p.parse_return_type()
            } else {
                NodeIndex::NONE
            };
            if !p.is_token(SyntaxKind::EqualsGreaterThanToken) || p.has_preceding_line_break() {
                return None;
            }
            Some(ArrowHead {
                type_parameters,
                parameters,
                type_annotation,
            })
        })
    }

    /// `x => body`
    fn parse_simple_arrow_function(&mut self, start: u32, is_async: bool) -> NodeIndex {
        let param_start = self.token_pos();
        let name = self.parse_identifier();
        let parameter = self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            param_start,
            self.prev_token_end,
            ParameterData {
                modifiers: None,
                dot_dot_dot_token: false,
                name,
                question_token: false,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            },
        );
        let head = ArrowHead {
            type_parameters: None,
            parameters: NodeList::with_nodes(vec![parameter], param_start, self.prev_token_end),
            type_annotation: NodeIndex::NONE,
        };
        self.parse_arrow_body(start, is_async, head)
    }

    fn parse_arrow_body(&mut self, start: u32, is_async: bool, head: ArrowHead) -> NodeIndex {
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let body = self.with_function_context(is_async, false, |p| {
            if p.is_token(SyntaxKind::OpenBraceToken) {
                p.parse_block()
            } else {
                p.parse_assignment_expression_or_higher()
            }
        });
        let node = self.arena.add_function(
            syntax_kind_ext::ARROW_FUNCTION,
            start,
            self.prev_token_end,
            FunctionData {
                modifiers: None,
                is_async,
                asterisk_token: false,
                name: NodeIndex::NONE,
                type_parameters: head.type_parameters,
                parameters: head.parameters,
                type_annotation: head.type_annotation,
                body,
                equals_greater_than_token: true,
            },
        );
        if is_async {
            self.arena.set_modifier_flags(node, ModifierFlags::ASYNC);
        }
        node
    }

    // =========================================================================
    // Binary and unary
    // =========================================================================

    fn parse_binary_expression_or_higher(&mut self, precedence: u8) -> NodeIndex {
        let start = self.token_pos();
        let left = self.parse_unary_expression_or_higher();
        self.parse_binary_expression_rest(precedence, start, left)
    }

    fn parse_binary_expression_rest(
        &mut self,
        precedence: u8,
        start: u32,
        mut left: NodeIndex,
    ) -> NodeIndex {
        loop {
            let operator = self.re_scan_greater_token();
            let new_precedence = binary_operator_precedence(operator);
            if new_precedence == 0 {
                break;
            }
            // `**` is right-associative
            let consume = if operator == SyntaxKind::AsteriskAsteriskToken {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if !consume {
                break;
            }
            if operator == SyntaxKind::InKeyword && self.in_context(context_flags::DISALLOW_IN) {
                break;
            }
            if matches!(operator, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                if self.has_preceding_line_break() {
                    break;
                }
                self.next_token();
                let type_node = self.parse_type();
                let kind = if operator == SyntaxKind::AsKeyword {
                    syntax_kind_ext::AS_EXPRESSION
                } else {
                    syntax_kind_ext::SATISFIES_EXPRESSION
                };
                left = self.arena.add_type_assertion(
                    kind,
                    start,
                    self.prev_token_end,
                    TypeAssertionData {
                        expression: left,
                        type_node,
                    },
                );
                continue;
            }

            self.next_token();
            let right = self.parse_binary_expression_or_higher(new_precedence);
            left = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start,
                self.prev_token_end,
                BinaryExprData {
                    left,
                    operator_token: operator as u16,
                    right,
                },
            );
        }
        left
    }

    fn parse_unary_expression_or_higher(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_unary_expression_worker();
        self.exit_recursion();
        result
    }

    fn parse_unary_expression_worker(&mut self) -> NodeIndex {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken => {
                let operator = self.token() as u16;
                self.next_token();
                let operand = self.parse_unary_expression_or_higher();
                self.arena.add_unary_expr(
                    syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
                    start,
                    self.prev_token_end,
                    UnaryExprData { operator, operand },
                )
            }
            SyntaxKind::DeleteKeyword => self.parse_simple_unary(syntax_kind_ext::DELETE_EXPRESSION),
            SyntaxKind::TypeOfKeyword => {
                self.parse_simple_unary(syntax_kind_ext::TYPE_OF_EXPRESSION)
            }
            SyntaxKind::VoidKeyword => self.parse_simple_unary(syntax_kind_ext::VOID_EXPRESSION),
            SyntaxKind::AwaitKeyword if self.is_await_expression() => {
                self.parse_simple_unary(syntax_kind_ext::AWAIT_EXPRESSION)
            }
            SyntaxKind::LessThanToken if !self.is_jsx => {
                // `<T>expr`
                self.next_token();
                let type_node = self.parse_type();
                self.parse_expected(SyntaxKind::GreaterThanToken);
                let expression = self.parse_unary_expression_or_higher();
                self.arena.add_type_assertion(
                    syntax_kind_ext::TYPE_ASSERTION,
                    start,
                    self.prev_token_end,
                    TypeAssertionData {
                        expression,
                        type_node,
                    },
                )
            }
            _ => {
                let expression = self.parse_left_hand_side_expression_or_higher();
                if matches!(
                    self.token(),
                    SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
                ) && !self.has_preceding_line_break()
                {
                    let operator = self.token() as u16;
                    self.next_token();
                    return self.arena.add_unary_expr(
                        syntax_kind_ext::POSTFIX_UNARY_EXPRESSION,
                        start,
                        self.prev_token_end,
                        UnaryExprData {
                            operator,
                            operand: expression,
                        },
                    );
                }
                expression
            }
        }
    }

    fn parse_simple_unary(&mut self, kind: u16) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = self.parse_unary_expression_or_higher();
        self.arena.add_unary_expr_ex(
            kind,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    /// `await` outside an async function is still an await expression at top
    /// level when an operand follows on the same line.
    fn is_await_expression(&mut self) -> bool {
        if self.in_context(context_flags::IN_ASYNC) {
            return true;
        }
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break()
                && (p.is_identifier_or_keyword()
                    || p.token().is_literal()
                    || p.is_token(SyntaxKind::TemplateHead))
        })
    }

    // =========================================================================
    // Left-hand-side, member and call expressions
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression_or_higher(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let expression = self.parse_member_expression_or_higher();
        self.parse_call_expression_rest(start, expression)
    }

    fn parse_member_expression_or_higher(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let expression = self.parse_primary_expression();
        self.parse_member_expression_rest(start, expression, true)
    }

    fn parse_member_expression_rest(
        &mut self,
        start: u32,
        mut expression: NodeIndex,
        allow_optional_chain: bool,
    ) -> NodeIndex {
        loop {
            let question_dot_token =
                allow_optional_chain && self.parse_optional(SyntaxKind::QuestionDotToken);

            if question_dot_token {
                match self.token() {
                    SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                        // `a?.()` / `a?.<T>()`
                        let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
                            self.try_parse(|p| p.parse_type_arguments_in_expression())
                        } else {
                            None
                        };
                        let arguments = self.parse_argument_list();
                        expression = self.arena.add_call_expr(
                            syntax_kind_ext::CALL_EXPRESSION,
                            start,
                            self.prev_token_end,
                            CallExprData {
                                expression,
                                type_arguments,
                                arguments: Some(arguments),
                            },
                        );
                        self.arena
                            .set_node_flags(expression, node_flags::OPTIONAL_CHAIN);
                        continue;
                    }
                    SyntaxKind::OpenBracketToken => {
                        expression = self.parse_element_access(start, expression, true);
                        continue;
                    }
                    _ => {}
                }
            }

            if question_dot_token || self.parse_optional(SyntaxKind::DotToken) {
                let name_or_argument = self.parse_identifier_name();
                expression = self.arena.add_access_expr(
                    syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
                    start,
                    self.prev_token_end,
                    AccessExprData {
                        expression,
                        name_or_argument,
                        question_dot_token,
                    },
                );
                if question_dot_token {
                    self.arena
                        .set_node_flags(expression, node_flags::OPTIONAL_CHAIN);
                }
                continue;
            }

            match self.token() {
                SyntaxKind::ExclamationToken if !self.has_preceding_line_break() => {
                    self.next_token();
                    expression = self.arena.add_unary_expr_ex(
                        syntax_kind_ext::NON_NULL_EXPRESSION,
                        start,
                        self.prev_token_end,
                        UnaryExprDataEx {
                            expression,
                            asterisk_token: false,
                        },
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    expression = self.parse_element_access(start, expression, false);
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    expression = self.parse_tagged_template(start, expression, None);
                }
                _ => return expression,
            }
        }
    }

    fn parse_element_access(
        &mut self,
        start: u32,
        expression: NodeIndex,
        question_dot_token: bool,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let argument = if self.is_token(SyntaxKind::CloseBracketToken) {
            self.error_expression_expected();
            self.create_missing_identifier()
        } else {
            self.with_context(context_flags::DISALLOW_IN, false, |p| p.parse_expression())
        };
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let node = self.arena.add_access_expr(
            syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION,
            start,
            self.prev_token_end,
            AccessExprData {
                expression,
                name_or_argument: argument,
                question_dot_token,
            },
        );
        if question_dot_token {
            self.arena.set_node_flags(node, node_flags::OPTIONAL_CHAIN);
        }
        node
    }

    fn parse_tagged_template(
        &mut self,
        start: u32,
        tag: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let template = if self.is_token(SyntaxKind::NoSubstitutionTemplateLiteral) {
            self.parse_literal()
        } else {
            self.parse_template_expression()
        };
        self.arena.add_tagged_template(
            syntax_kind_ext::TAGGED_TEMPLATE_EXPRESSION,
            start,
            self.prev_token_end,
            TaggedTemplateData {
                tag,
                type_arguments,
                template,
            },
        )
    }

    fn parse_call_expression_rest(&mut self, start: u32, mut expression: NodeIndex) -> NodeIndex {
        loop {
            expression = self.parse_member_expression_rest(start, expression, true);

            let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
                self.try_parse(|p| p.parse_type_arguments_in_expression())
            } else {
                None
            };

            if type_arguments.is_some()
                && matches!(
                    self.token(),
                    SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead
                )
            {
                expression = self.parse_tagged_template(start, expression, type_arguments);
                continue;
            }

            if self.is_token(SyntaxKind::OpenParenToken) {
                let arguments = self.parse_argument_list();
                expression = self.arena.add_call_expr(
                    syntax_kind_ext::CALL_EXPRESSION,
                    start,
                    self.prev_token_end,
                    CallExprData {
                        expression,
                        type_arguments,
                        arguments: Some(arguments),
                    },
                );
                continue;
            }

            if let Some(type_arguments) = type_arguments {
                // Instantiation expression `f<T>`
                expression = self.arena.add_expr_with_type_args(
                    syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS,
                    start,
                    self.prev_token_end,
                    ExprWithTypeArgsData {
                        expression,
                        type_arguments: Some(type_arguments),
                    },
                );
                continue;
            }

            return expression;
        }
    }

    /// `<T, U>` in expression position, accepted only where a type argument
    /// list can end.
    fn parse_type_arguments_in_expression(&mut self) -> Option<NodeList> {
        if !self.is_token(SyntaxKind::LessThanToken) {
            return None;
        }
        let list = self.parse_type_arguments();
        let can_follow = matches!(
            self.token(),
            SyntaxKind::OpenParenToken
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CommaToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        );
        can_follow.then_some(list)
    }

    /// `( arg, ...spread )`
    pub(crate) fn parse_argument_list(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let list = self.with_context(context_flags::DISALLOW_IN, false, |p| {
            p.parse_delimited_list(SyntaxKind::CloseParenToken, |p| {
                p.parse_spread_or_assignment_expression()
            })
        });
        self.parse_expected(SyntaxKind::CloseParenToken);
        list
    }

    fn parse_spread_or_assignment_expression(&mut self) -> NodeIndex {
        if !self.is_token(SyntaxKind::DotDotDotToken) {
            return self.parse_assignment_expression_or_higher();
        }
        let start = self.token_pos();
        self.next_token();
        let expression = self.parse_assignment_expression_or_higher();
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::SPREAD_ELEMENT,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword => {
                let kind = self.token() as u16;
                self.next_token();
                self.arena.add_token(kind, start, self.prev_token_end)
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => self.parse_literal(),
            SyntaxKind::TemplateHead => self.parse_template_expression(),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal_expression(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal_expression(),
            SyntaxKind::AsyncKeyword
                if self.look_ahead(|p| {
                    p.next_token();
                    p.is_token(SyntaxKind::FunctionKeyword) && !p.has_preceding_line_break()
                }) =>
            {
                self.next_token();
                self.parse_function_expression(start, true)
            }
            SyntaxKind::FunctionKeyword => self.parse_function_expression(start, false),
            SyntaxKind::ClassKeyword => self.parse_class_like(
                syntax_kind_ext::CLASS_EXPRESSION,
                start,
                None,
                ModifierFlags::empty(),
            ),
            SyntaxKind::AtToken => {
                // Decorated class expression
                let (modifiers, flags) = self.parse_modifiers(|_| false);
                self.parse_class_like(syntax_kind_ext::CLASS_EXPRESSION, start, modifiers, flags)
            }
            SyntaxKind::NewKeyword => self.parse_new_expression(),
            SyntaxKind::ImportKeyword => self.parse_import_call_or_meta(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                if self.re_scan_slash_token() == SyntaxKind::RegularExpressionLiteral {
                    self.parse_literal()
                } else {
                    self.error_expression_expected();
                    self.create_missing_identifier()
                }
            }
            SyntaxKind::LessThanToken if self.is_jsx => {
                self.parse_jsx_element_or_self_closing_or_fragment(false)
            }
            SyntaxKind::PrivateIdentifier => self.create_identifier_from_token(),
            _ if self.is_identifier() => self.parse_identifier(),
            _ => {
                self.error_expression_expected();
                self.create_missing_identifier()
            }
        }
    }

    fn parse_parenthesized_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression =
            self.with_context(context_flags::DISALLOW_IN, false, |p| p.parse_expression());
        self.parse_expected(SyntaxKind::CloseParenToken);
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::PARENTHESIZED_EXPRESSION,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    /// Template with substitutions: `` `a${b}c` ``.
    fn parse_template_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let head = self.parse_literal();
        let spans_pos = self.token_pos();
        let mut spans = Vec::new();
        loop {
            let span_start = self.token_pos();
            let expression =
                self.with_context(context_flags::DISALLOW_IN, false, |p| p.parse_expression());
            let (literal, done) = self.parse_template_span_literal();
            spans.push(self.arena.add_template_span(
                syntax_kind_ext::TEMPLATE_SPAN,
                span_start,
                self.prev_token_end,
                TemplateSpanData {
                    expression,
                    literal,
                },
            ));
            if done {
                break;
            }
        }
        let template_spans = NodeList::with_nodes(spans, spans_pos, self.prev_token_end);
        self.arena.add_template_expr(
            syntax_kind_ext::TEMPLATE_EXPRESSION,
            start,
            self.prev_token_end,
            TemplateExprData {
                head,
                template_spans,
            },
        )
    }

    /// Literal after a template substitution; `true` once the template ends.
    pub(crate) fn parse_template_span_literal(&mut self) -> (NodeIndex, bool) {
        if self.is_token(SyntaxKind::CloseBraceToken) {
            self.re_scan_template_token();
        }
        match self.token() {
            SyntaxKind::TemplateMiddle => (self.parse_literal(), false),
            SyntaxKind::TemplateTail => (self.parse_literal(), true),
            _ => {
                self.parse_error_at_current_token("'}' expected.", 1005);
                (NodeIndex::NONE, true)
            }
        }
    }

    fn parse_array_literal_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let multi_line = self.has_preceding_line_break();
        let elements = self.with_context(context_flags::DISALLOW_IN, false, |p| {
            p.parse_delimited_list(SyntaxKind::CloseBracketToken, |p| {
                if p.is_token(SyntaxKind::CommaToken) {
                    let pos = p.token_pos();
                    return p
                        .arena
                        .add_token(syntax_kind_ext::OMITTED_EXPRESSION, pos, pos);
                }
                p.parse_spread_or_assignment_expression()
            })
        });
        self.parse_expected(SyntaxKind::CloseBracketToken);
        self.arena.add_literal_expr(
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION,
            start,
            self.prev_token_end,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    pub(crate) fn parse_object_literal_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let multi_line = self.has_preceding_line_break();
        let elements = self.with_context(context_flags::DISALLOW_IN, false, |p| {
            p.parse_delimited_list(SyntaxKind::CloseBraceToken, |p| {
                p.parse_object_literal_element()
            })
        });
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_literal_expr(
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION,
            start,
            self.prev_token_end,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    fn parse_object_literal_element(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let expression = self.parse_assignment_expression_or_higher();
            return self.arena.add_unary_expr_ex(
                syntax_kind_ext::SPREAD_ASSIGNMENT,
                start,
                self.prev_token_end,
                UnaryExprDataEx {
                    expression,
                    asterisk_token: false,
                },
            );
        }

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.next_token_is_property_name_on_same_line()
        {
            return self.parse_accessor(start, None, ModifierFlags::empty());
        }

        let mut flags = ModifierFlags::empty();
        let mut modifiers = None;
        if self.is_token(SyntaxKind::AsyncKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                !p.has_preceding_line_break()
                    && (p.is_token(SyntaxKind::AsteriskToken)
                        || p.is_token(SyntaxKind::OpenBracketToken)
                        || p.is_token(SyntaxKind::StringLiteral)
                        || p.is_token(SyntaxKind::NumericLiteral)
                        || p.is_identifier_or_keyword())
            })
        {
            let end = self.token_end();
            self.next_token();
            let token = self
                .arena
                .add_token(SyntaxKind::AsyncKeyword as u16, start, end);
            modifiers = Some(NodeList::with_nodes(vec![token], start, end));
            flags |= ModifierFlags::ASYNC;
        }

        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = self.parse_property_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        if asterisk_token
            || self.is_token(SyntaxKind::OpenParenToken)
            || self.is_token(SyntaxKind::LessThanToken)
        {
            return self.parse_method_declaration_rest(
                start,
                modifiers,
                flags,
                asterisk_token,
                name,
                question_token,
            );
        }

        if self.parse_optional(SyntaxKind::ColonToken) {
            let initializer = self.parse_assignment_expression_or_higher();
            return self.arena.add_property_assignment(
                syntax_kind_ext::PROPERTY_ASSIGNMENT,
                start,
                self.prev_token_end,
                PropertyAssignmentData { name, initializer },
            );
        }

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression_or_higher()
        } else {
            NodeIndex::NONE
        };
        self.arena.add_property_assignment(
            syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT,
            start,
            self.prev_token_end,
            PropertyAssignmentData { name, initializer },
        )
    }

    /// Parameters, return type and body of a method after its name.
    pub(crate) fn parse_method_declaration_rest(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
        asterisk_token: bool,
        name: NodeIndex,
        question_token: bool,
    ) -> NodeIndex {
        let is_async = flags.contains(ModifierFlags::ASYNC);
        let (type_parameters, parameters, type_annotation, body) =
            self.with_function_context(is_async, asterisk_token, |p| {
                let type_parameters = p.parse_type_parameters_opt();
                let parameters = p.parse_parameter_list();
                let type_annotation = p.parse_return_type();
                let body = if p.is_token(SyntaxKind::OpenBraceToken) {
                    p.parse_block()
                } else {
                    p.parse_semicolon();
                    NodeIndex::NONE
                };
                (type_parameters, parameters, type_annotation, body)
            });
        let node = self.arena.add_method_decl(
            syntax_kind_ext::METHOD_DECLARATION,
            start,
            self.prev_token_end,
            MethodDeclData {
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_annotation,
                body,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_function_expression(&mut self, start: u32, is_async: bool) -> NodeIndex {
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let (name, type_parameters, parameters, type_annotation, body) =
            self.with_function_context(is_async, asterisk_token, |p| {
                let name = if p.is_identifier() {
                    p.parse_identifier()
                } else {
                    NodeIndex::NONE
                };
                let type_parameters = p.parse_type_parameters_opt();
                let parameters = p.parse_parameter_list();
                let type_annotation = p.parse_return_type();
                let body = p.parse_block();
                (name, type_parameters, parameters, type_annotation, body)
            });
        let node = self.arena.add_function(
            syntax_kind_ext::FUNCTION_EXPRESSION,
            start,
            self.prev_token_end,
            FunctionData {
                modifiers: None,
                is_async,
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_annotation,
                body,
                equals_greater_than_token: false,
            },
        );
        if is_async {
            self.arena.set_modifier_flags(node, ModifierFlags::ASYNC);
        }
        node
    }

    /// `new X<T>(args)`, `new X`, `new.target`
    fn parse_new_expression(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::NewKeyword);

        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            return self.arena.add_meta_property(
                syntax_kind_ext::META_PROPERTY,
                start,
                self.prev_token_end,
                MetaPropertyData {
                    keyword_token: SyntaxKind::NewKeyword as u16,
                    name,
                },
            );
        }

        let expression_start = self.token_pos();
        let primary = self.parse_primary_expression();
        let expression = self.parse_member_expression_rest(expression_start, primary, false);
        let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
            self.try_parse(|p| p.parse_type_arguments_in_expression())
        } else {
            None
        };
        let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
            Some(self.parse_argument_list())
        } else {
            None
        };
        self.arena.add_call_expr(
            syntax_kind_ext::NEW_EXPRESSION,
            start,
            self.prev_token_end,
            CallExprData {
                expression,
                type_arguments,
                arguments,
            },
        )
    }

    /// `import("m")` callee or `import.meta`
    fn parse_import_call_or_meta(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let end = self.token_end();
        self.next_token();
        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            return self.arena.add_meta_property(
                syntax_kind_ext::META_PROPERTY,
                start,
                self.prev_token_end,
                MetaPropertyData {
                    keyword_token: SyntaxKind::ImportKeyword as u16,
                    name,
                },
            );
        }
        self.arena
            .add_token(SyntaxKind::ImportKeyword as u16, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_by_radix() {
        assert_eq!(parse_numeric_value("42"), Some(42.0));
        assert_eq!(parse_numeric_value("0x1F"), Some(31.0));
        assert_eq!(parse_numeric_value("0b101"), Some(5.0));
        assert_eq!(parse_numeric_value("0o17"), Some(15.0));
        assert_eq!(parse_numeric_value("1.5e3"), Some(1500.0));
        assert_eq!(parse_numeric_value(".5"), Some(0.5));
    }

    #[test]
    fn precedence_orders_operators() {
        assert!(
            binary_operator_precedence(SyntaxKind::AsteriskToken)
                > binary_operator_precedence(SyntaxKind::PlusToken)
        );
        assert!(
            binary_operator_precedence(SyntaxKind::AmpersandAmpersandToken)
                > binary_operator_precedence(SyntaxKind::BarBarToken)
        );
        assert_eq!(binary_operator_precedence(SyntaxKind::EqualsToken), 0);
    }
}
