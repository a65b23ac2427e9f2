//! Parser state - statements and declarations.

use legend_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::flags::{ModifierFlags, node_flags};
use super::node::*;
use super::state::{ParserState, context_flags};
use super::syntax_kind_ext;

impl ParserState {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(crate) fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_statement_worker();
        self.exit_recursion();
        result
    }

    fn parse_statement_worker(&mut self) -> NodeIndex {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                self.arena
                    .add_token(syntax_kind_ext::EMPTY_STATEMENT, start, self.prev_token_end)
            }
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::VarKeyword => {
                self.parse_variable_statement(start, None, ModifierFlags::empty())
            }
            SyntaxKind::LetKeyword if self.is_let_declaration() => {
                self.parse_variable_statement(start, None, ModifierFlags::empty())
            }
            SyntaxKind::ConstKeyword if !self.next_token_is(SyntaxKind::EnumKeyword) => {
                self.parse_variable_statement(start, None, ModifierFlags::empty())
            }
            SyntaxKind::FunctionKeyword => {
                self.parse_function_declaration(start, None, ModifierFlags::empty())
            }
            SyntaxKind::ClassKeyword => self.parse_class_like(
                syntax_kind_ext::CLASS_DECLARATION,
                start,
                None,
                ModifierFlags::empty(),
            ),
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ContinueKeyword | SyntaxKind::BreakKeyword => self.parse_jump_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon();
                self.arena.add_token(
                    syntax_kind_ext::DEBUGGER_STATEMENT,
                    start,
                    self.prev_token_end,
                )
            }
            SyntaxKind::AtToken
            | SyntaxKind::ExportKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::EnumKeyword
            | SyntaxKind::InterfaceKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::NamespaceKeyword
            | SyntaxKind::ModuleKeyword
            | SyntaxKind::GlobalKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::AsyncKeyword
                if self.is_start_of_declaration() =>
            {
                self.parse_declaration()
            }
            _ => self.parse_expression_or_labeled_statement(),
        }
    }

    pub(crate) fn next_token_is(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_token(kind)
        })
    }

    fn is_let_declaration(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_identifier()
                || p.is_token(SyntaxKind::OpenBracketToken)
                || p.is_token(SyntaxKind::OpenBraceToken)
        })
    }

    fn is_start_of_declaration(&mut self) -> bool {
        self.look_ahead(|p| p.scan_start_of_declaration())
    }

    fn scan_start_of_declaration(&mut self) -> bool {
        loop {
            match self.token() {
                SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::AtToken => return true,
                SyntaxKind::InterfaceKeyword | SyntaxKind::TypeKeyword => {
                    self.next_token();
                    return !self.has_preceding_line_break() && self.is_identifier();
                }
                SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword => {
                    self.next_token();
                    return !self.has_preceding_line_break()
                        && (self.is_identifier() || self.is_token(SyntaxKind::StringLiteral));
                }
                SyntaxKind::GlobalKeyword => {
                    self.next_token();
                    return self.is_token(SyntaxKind::OpenBraceToken);
                }
                SyntaxKind::ImportKeyword => {
                    self.next_token();
                    return !matches!(
                        self.token(),
                        SyntaxKind::OpenParenToken | SyntaxKind::DotToken
                    );
                }
                SyntaxKind::ExportKeyword => {
                    self.next_token();
                    if matches!(
                        self.token(),
                        SyntaxKind::EqualsToken
                            | SyntaxKind::AsteriskToken
                            | SyntaxKind::OpenBraceToken
                            | SyntaxKind::DefaultKeyword
                            | SyntaxKind::TypeKeyword
                            | SyntaxKind::AsKeyword
                    ) {
                        return true;
                    }
                }
                SyntaxKind::DeclareKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword => {
                    self.next_token();
                    if self.has_preceding_line_break() {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let multi_line = self.parse_expected(SyntaxKind::OpenBraceToken)
            && self.has_preceding_line_break();
        let statements =
            self.parse_statement_list_until(|p| p.is_token(SyntaxKind::CloseBraceToken));
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_block(
            syntax_kind_ext::BLOCK,
            start,
            self.prev_token_end,
            BlockData {
                statements,
                multi_line,
            },
        )
    }

    fn parse_expression_or_labeled_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        if self.is_identifier()
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::ColonToken)
            })
        {
            let label = self.parse_identifier();
            self.parse_expected(SyntaxKind::ColonToken);
            let statement = self.parse_statement();
            return self.arena.add_labeled(
                syntax_kind_ext::LABELED_STATEMENT,
                start,
                self.prev_token_end,
                LabeledData { label, statement },
            );
        }

        let expression = self.parse_expression();
        if expression.is_none() {
            return NodeIndex::NONE;
        }
        self.parse_semicolon();
        self.arena.add_expr_statement(
            syntax_kind_ext::EXPRESSION_STATEMENT,
            start,
            self.prev_token_end,
            ExprStatementData { expression },
        )
    }

    fn parse_parenthesized_condition(&mut self) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseParenToken);
        expression
    }

    fn parse_if_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();
        let then_statement = self.parse_statement();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()
        } else {
            NodeIndex::NONE
        };
        self.arena.add_if_statement(
            syntax_kind_ext::IF_STATEMENT,
            start,
            self.prev_token_end,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    fn parse_do_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let statement = self.parse_statement();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_parenthesized_condition();
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.arena.add_loop(
            syntax_kind_ext::DO_STATEMENT,
            start,
            self.prev_token_end,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    fn parse_while_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let condition = self.parse_parenthesized_condition();
        let statement = self.parse_statement();
        self.arena.add_loop(
            syntax_kind_ext::WHILE_STATEMENT,
            start,
            self.prev_token_end,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    fn parse_for_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let await_modifier = self.parse_optional(SyntaxKind::AwaitKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);

        let initializer = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else if self.is_token(SyntaxKind::VarKeyword)
            || self.is_token(SyntaxKind::ConstKeyword)
            || (self.is_token(SyntaxKind::LetKeyword) && self.is_let_declaration())
        {
            self.with_context(context_flags::DISALLOW_IN, true, |p| {
                p.parse_variable_declaration_list()
            })
        } else {
            self.with_context(context_flags::DISALLOW_IN, true, |p| p.parse_expression())
        };

        let for_in_of_kind = if self.parse_optional(SyntaxKind::OfKeyword) {
            Some(syntax_kind_ext::FOR_OF_STATEMENT)
        } else if self.parse_optional(SyntaxKind::InKeyword) {
            Some(syntax_kind_ext::FOR_IN_STATEMENT)
        } else {
            None
        };

        if let Some(kind) = for_in_of_kind {
            let expression = if kind == syntax_kind_ext::FOR_OF_STATEMENT {
                self.parse_assignment_expression_or_higher()
            } else {
                self.parse_expression()
            };
            self.parse_expected(SyntaxKind::CloseParenToken);
            let statement = self.parse_statement();
            return self.arena.add_for_in_of(
                kind,
                start,
                self.prev_token_end,
                ForInOfData {
                    await_modifier,
                    initializer,
                    expression,
                    statement,
                },
            );
        }

        self.parse_expected(SyntaxKind::SemicolonToken);
        let condition = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let incrementor = if self.is_token(SyntaxKind::CloseParenToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement();
        self.arena.add_loop(
            syntax_kind_ext::FOR_STATEMENT,
            start,
            self.prev_token_end,
            LoopData {
                initializer,
                condition,
                incrementor,
                statement,
            },
        )
    }

    fn parse_jump_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let kind = if self.is_token(SyntaxKind::BreakKeyword) {
            syntax_kind_ext::BREAK_STATEMENT
        } else {
            syntax_kind_ext::CONTINUE_STATEMENT
        };
        self.next_token();
        let label = if !self.can_parse_semicolon() && self.is_identifier() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();
        self.arena
            .add_jump(kind, start, self.prev_token_end, JumpData { label })
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        self.arena.add_return(
            syntax_kind_ext::RETURN_STATEMENT,
            start,
            self.prev_token_end,
            ReturnData { expression },
        )
    }

    fn parse_throw_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = if self.has_preceding_line_break() {
            self.parse_error_at_current_token("Line break not permitted here.", 1142);
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        self.arena.add_return(
            syntax_kind_ext::THROW_STATEMENT,
            start,
            self.prev_token_end,
            ReturnData { expression },
        )
    }

    fn parse_switch_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = self.parse_parenthesized_condition();

        let block_start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let clauses_pos = self.token_pos();
        let mut clauses = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let clause_start = self.token_pos();
            let (kind, expression) = if self.parse_optional(SyntaxKind::CaseKeyword) {
                (syntax_kind_ext::CASE_CLAUSE, self.parse_expression())
            } else if self.parse_optional(SyntaxKind::DefaultKeyword) {
                (syntax_kind_ext::DEFAULT_CLAUSE, NodeIndex::NONE)
            } else {
                self.parse_error_at_current_token("'case' or 'default' expected.", 1130);
                self.next_token();
                continue;
            };
            self.parse_expected(SyntaxKind::ColonToken);
            let statements = self.parse_statement_list_until(|p| {
                matches!(
                    p.token(),
                    SyntaxKind::CaseKeyword
                        | SyntaxKind::DefaultKeyword
                        | SyntaxKind::CloseBraceToken
                )
            });
            clauses.push(self.arena.add_case_clause(
                kind,
                clause_start,
                self.prev_token_end,
                CaseClauseData {
                    expression,
                    statements,
                },
            ));
        }
        let clauses = NodeList::with_nodes(clauses, clauses_pos, self.prev_token_end);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let case_block = self.arena.add_block(
            syntax_kind_ext::CASE_BLOCK,
            block_start,
            self.prev_token_end,
            BlockData {
                statements: clauses,
                multi_line: true,
            },
        );

        self.arena.add_switch(
            syntax_kind_ext::SWITCH_STATEMENT,
            start,
            self.prev_token_end,
            SwitchData {
                expression,
                case_block,
            },
        )
    }

    fn parse_try_statement(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let try_block = self.parse_block();

        let catch_clause = if self.is_token(SyntaxKind::CatchKeyword) {
            let catch_start = self.token_pos();
            self.next_token();
            let variable_declaration = if self.parse_optional(SyntaxKind::OpenParenToken) {
                let decl = self.parse_variable_declaration();
                self.parse_expected(SyntaxKind::CloseParenToken);
                decl
            } else {
                NodeIndex::NONE
            };
            let block = self.parse_block();
            self.arena.add_catch_clause(
                syntax_kind_ext::CATCH_CLAUSE,
                catch_start,
                self.prev_token_end,
                CatchClauseData {
                    variable_declaration,
                    block,
                },
            )
        } else {
            NodeIndex::NONE
        };

        let finally_block = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            self.parse_block()
        } else {
            NodeIndex::NONE
        };

        if catch_clause.is_none() && finally_block.is_none() {
            self.parse_error_at_current_token("'catch' or 'finally' expected.", 1472);
        }

        self.arena.add_try(
            syntax_kind_ext::TRY_STATEMENT,
            start,
            self.prev_token_end,
            TryData {
                try_block,
                catch_clause,
                finally_block,
            },
        )
    }

    // =========================================================================
    // Variables
    // =========================================================================

    fn parse_variable_statement(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let list = self.parse_variable_declaration_list();
        self.parse_semicolon();
        let list_node = self.arena.get(list).copied();
        let declarations = NodeList::with_nodes(
            vec![list],
            list_node.map_or(start, |n| n.pos),
            list_node.map_or(start, |n| n.end),
        );
        let statement = self.arena.add_variable(
            syntax_kind_ext::VARIABLE_STATEMENT,
            start,
            self.prev_token_end,
            VariableData {
                modifiers,
                declarations,
            },
        );
        self.arena.set_modifier_flags(statement, flags);
        statement
    }

    /// `var|let|const decl, decl`
    pub(crate) fn parse_variable_declaration_list(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let flags = match self.token() {
            SyntaxKind::LetKeyword => node_flags::LET,
            SyntaxKind::ConstKeyword => node_flags::CONST,
            _ => node_flags::NONE,
        };
        self.next_token();

        let list_pos = self.token_pos();
        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declaration());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let declarations = NodeList::with_nodes(declarations, list_pos, self.prev_token_end);

        let list = self.arena.add_variable(
            syntax_kind_ext::VARIABLE_DECLARATION_LIST,
            start,
            self.prev_token_end,
            VariableData {
                modifiers: None,
                declarations,
            },
        );
        self.arena.set_node_flags(list, flags);
        list
    }

    pub(crate) fn parse_variable_declaration(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let name = self.parse_binding_name();
        let exclamation_token =
            !self.has_preceding_line_break() && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression_or_higher()
        } else {
            NodeIndex::NONE
        };
        self.arena.add_variable_declaration(
            syntax_kind_ext::VARIABLE_DECLARATION,
            start,
            self.prev_token_end,
            VariableDeclarationData {
                name,
                exclamation_token,
                type_annotation,
                initializer,
            },
        )
    }

    /// Identifier or destructuring pattern.
    pub(crate) fn parse_binding_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_object_binding_pattern(),
            SyntaxKind::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => self.parse_identifier(),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let elements = self.parse_delimited_list(SyntaxKind::CloseBraceToken, |p| {
            let element_start = p.token_pos();
            let dot_dot_dot_token = p.parse_optional(SyntaxKind::DotDotDotToken);
            let (property_name, name) = if dot_dot_dot_token {
                (NodeIndex::NONE, p.parse_identifier())
            } else {
                let property = p.parse_property_name();
                if p.parse_optional(SyntaxKind::ColonToken) {
                    (property, p.parse_binding_name())
                } else {
                    (NodeIndex::NONE, property)
                }
            };
            let initializer = if p.parse_optional(SyntaxKind::EqualsToken) {
                p.parse_assignment_expression_or_higher()
            } else {
                NodeIndex::NONE
            };
            p.arena.add_binding_element(
                syntax_kind_ext::BINDING_ELEMENT,
                element_start,
                p.prev_token_end,
                BindingElementData {
                    dot_dot_dot_token,
                    property_name,
                    name,
                    initializer,
                },
            )
        });
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_binding_pattern(
            syntax_kind_ext::OBJECT_BINDING_PATTERN,
            start,
            self.prev_token_end,
            BindingPatternData { elements },
        )
    }

    fn parse_array_binding_pattern(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let elements = self.parse_delimited_list(SyntaxKind::CloseBracketToken, |p| {
            let element_start = p.token_pos();
            if p.is_token(SyntaxKind::CommaToken) {
                return p.arena.add_token(
                    syntax_kind_ext::OMITTED_EXPRESSION,
                    element_start,
                    element_start,
                );
            }
            let dot_dot_dot_token = p.parse_optional(SyntaxKind::DotDotDotToken);
            let name = p.parse_binding_name();
            let initializer = if p.parse_optional(SyntaxKind::EqualsToken) {
                p.parse_assignment_expression_or_higher()
            } else {
                NodeIndex::NONE
            };
            p.arena.add_binding_element(
                syntax_kind_ext::BINDING_ELEMENT,
                element_start,
                p.prev_token_end,
                BindingElementData {
                    dot_dot_dot_token,
                    property_name: NodeIndex::NONE,
                    name,
                    initializer,
                },
            )
        });
        self.parse_expected(SyntaxKind::CloseBracketToken);
        self.arena.add_binding_pattern(
            syntax_kind_ext::ARRAY_BINDING_PATTERN,
            start,
            self.prev_token_end,
            BindingPatternData { elements },
        )
    }

    // =========================================================================
    // Modifiers and decorators
    // =========================================================================

    /// Parse decorators and modifier keywords accepted by `allowed`.
    pub(crate) fn parse_modifiers(
        &mut self,
        allowed: impl Fn(SyntaxKind) -> bool,
    ) -> (Option<NodeList>, ModifierFlags) {
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        let mut flags = ModifierFlags::empty();
        loop {
            if self.is_token(SyntaxKind::AtToken) {
                nodes.push(self.parse_decorator());
                flags |= ModifierFlags::DECORATOR;
                continue;
            }
            let kind = self.token();
            if !allowed(kind) || !self.next_token_can_follow_modifier(kind) {
                break;
            }
            let start = self.token_pos();
            let end = self.token_end();
            self.next_token();
            nodes.push(self.arena.add_token(kind as u16, start, end));
            flags |= ModifierFlags::from_keyword(kind);
        }
        if nodes.is_empty() {
            (None, flags)
        } else {
            (
                Some(NodeList::with_nodes(nodes, pos, self.prev_token_end)),
                flags,
            )
        }
    }

    fn parse_decorator(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.next_token();
        let expression = self.parse_left_hand_side_expression_or_higher();
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::DECORATOR,
            start,
            self.prev_token_end,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    fn next_token_can_follow_modifier(&mut self, modifier: SyntaxKind) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            match modifier {
                SyntaxKind::ConstKeyword => p.is_token(SyntaxKind::EnumKeyword),
                SyntaxKind::ExportKeyword => !matches!(
                    p.token(),
                    SyntaxKind::OpenBraceToken
                        | SyntaxKind::AsteriskToken
                        | SyntaxKind::EqualsToken
                        | SyntaxKind::AsKeyword
                ) && !(p.is_token(SyntaxKind::TypeKeyword)
                    && p.next_token_is(SyntaxKind::OpenBraceToken)),
                SyntaxKind::DefaultKeyword => matches!(
                    p.token(),
                    SyntaxKind::ClassKeyword
                        | SyntaxKind::FunctionKeyword
                        | SyntaxKind::InterfaceKeyword
                        | SyntaxKind::AbstractKeyword
                        | SyntaxKind::AtToken
                ) || (p.is_token(SyntaxKind::AsyncKeyword)
                    && p.next_token_is(SyntaxKind::FunctionKeyword)),
                _ => !p.has_preceding_line_break() && p.can_follow_modifier(),
            }
        })
    }

    fn can_follow_modifier(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::DotDotDotToken
                | SyntaxKind::PrivateIdentifier
                | SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
        ) || self.is_identifier_or_keyword()
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn is_declaration_modifier(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::ExportKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
        )
    }

    fn parse_declaration(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if self.is_token(SyntaxKind::ExportKeyword) {
            let handled = self.look_ahead(|p| {
                p.next_token();
                matches!(
                    p.token(),
                    SyntaxKind::OpenBraceToken
                        | SyntaxKind::AsteriskToken
                        | SyntaxKind::EqualsToken
                        | SyntaxKind::DefaultKeyword
                        | SyntaxKind::AsKeyword
                ) || (p.is_token(SyntaxKind::TypeKeyword)
                    && p.next_token_is(SyntaxKind::OpenBraceToken))
            });
            if handled && let Some(node) = self.try_parse_export_without_declaration(start) {
                return node;
            }
        }

        let (modifiers, flags) = self.parse_modifiers(Self::is_declaration_modifier);

        match self.token() {
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement(start, modifiers, flags)
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(start, modifiers, flags),
            SyntaxKind::ClassKeyword => {
                self.parse_class_like(syntax_kind_ext::CLASS_DECLARATION, start, modifiers, flags)
            }
            SyntaxKind::InterfaceKeyword => {
                self.parse_interface_declaration(start, modifiers, flags)
            }
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(start, modifiers, flags),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(start, modifiers, flags),
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword | SyntaxKind::GlobalKeyword => {
                self.parse_module_declaration(start, modifiers, flags)
            }
            SyntaxKind::ImportKeyword => self.parse_import_declaration(start, modifiers),
            _ => {
                self.parse_error_at_current_token("Declaration expected.", 1146);
                NodeIndex::NONE
            }
        }
    }

    pub(crate) fn parse_function_declaration(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let is_async = flags.contains(ModifierFlags::ASYNC);
        let name = if self.is_identifier() {
            self.parse_identifier()
        } else {
            if !flags.contains(ModifierFlags::DEFAULT) {
                self.parse_error_at_current_token("Identifier expected.", 1003);
            }
            NodeIndex::NONE
        };

        let (type_parameters, parameters, type_annotation, body) =
            self.with_function_context(is_async, asterisk_token, |p| {
                let type_parameters = p.parse_type_parameters_opt();
                let parameters = p.parse_parameter_list();
                let type_annotation = p.parse_return_type();
                let body = if p.is_token(SyntaxKind::OpenBraceToken) {
                    p.parse_block()
                } else {
                    // Overload signature or ambient declaration
                    p.parse_semicolon();
                    NodeIndex::NONE
                };
                (type_parameters, parameters, type_annotation, body)
            });

        let node = self.arena.add_function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start,
            self.prev_token_end,
            FunctionData {
                modifiers,
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
        self.arena.set_modifier_flags(node, flags);
        node
    }

    /// Run `f` with async/generator context set for a function body.
    pub(crate) fn with_function_context<T>(
        &mut self,
        is_async: bool,
        is_generator: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context_flags;
        self.context_flags &= !(context_flags::IN_ASYNC | context_flags::IN_GENERATOR);
        if is_async {
            self.context_flags |= context_flags::IN_ASYNC;
        }
        if is_generator {
            self.context_flags |= context_flags::IN_GENERATOR;
        }
        let result = f(self);
        self.context_flags = saved;
        result
    }

    /// `( param, ... )`
    pub(crate) fn parse_parameter_list(&mut self) -> NodeList {
        if !self.parse_expected(SyntaxKind::OpenParenToken) {
            return NodeList::new();
        }
        let list = self.parse_delimited_list(SyntaxKind::CloseParenToken, |p| p.parse_parameter());
        self.parse_expected(SyntaxKind::CloseParenToken);
        list
    }

    fn is_parameter_modifier(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::OverrideKeyword
        )
    }

    pub(crate) fn parse_parameter(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let (modifiers, flags) = self.parse_modifiers(Self::is_parameter_modifier);
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = if self.is_token(SyntaxKind::ThisKeyword) {
            let pos = self.token_pos();
            self.next_token();
            self.arena.add_identifier(
                SyntaxKind::Identifier as u16,
                pos,
                self.prev_token_end,
                IdentifierData {
                    escaped_text: "this".to_string(),
                },
            )
        } else {
            self.parse_binding_name()
        };
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression_or_higher()
        } else {
            NodeIndex::NONE
        };
        let node = self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            start,
            self.prev_token_end,
            ParameterData {
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation,
                initializer,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(crate) fn parse_class_like(
        &mut self,
        kind: u16,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::ClassKeyword);
        let name = if self.is_identifier()
            && !self.is_token(SyntaxKind::ImplementsKeyword)
        {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        let type_parameters = self.parse_type_parameters_opt();
        let heritage_clauses = self.parse_heritage_clauses();

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let members_pos = self.token_pos();
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let member_start = self.token_pos();
            let member = self.parse_class_member();
            if member.is_some() {
                members.push(member);
            }
            if self.token_pos() == member_start {
                self.parse_error_at_current_token("Property or signature expected.", 1131);
                self.next_token();
            }
        }
        let members = NodeList::with_nodes(members, members_pos, self.prev_token_end);
        self.parse_expected(SyntaxKind::CloseBraceToken);

        let node = self.arena.add_class(
            kind,
            start,
            self.prev_token_end,
            ClassData {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    /// `extends A<T>` / `implements B, C`
    pub(crate) fn parse_heritage_clauses(&mut self) -> Option<NodeList> {
        let pos = self.token_pos();
        let mut clauses = Vec::new();
        while matches!(
            self.token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            let start = self.token_pos();
            let token = self.token() as u16;
            self.next_token();
            let types_pos = self.token_pos();
            let mut types = Vec::new();
            loop {
                types.push(self.parse_expression_with_type_arguments());
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            let types = NodeList::with_nodes(types, types_pos, self.prev_token_end);
            clauses.push(self.arena.add_heritage_clause(
                syntax_kind_ext::HERITAGE_CLAUSE,
                start,
                self.prev_token_end,
                HeritageData { token, types },
            ));
        }
        if clauses.is_empty() {
            None
        } else {
            Some(NodeList::with_nodes(clauses, pos, self.prev_token_end))
        }
    }

    fn parse_expression_with_type_arguments(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let expression = self.parse_left_hand_side_expression_or_higher();
        let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_type_arguments())
        } else {
            None
        };
        self.arena.add_expr_with_type_args(
            syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS,
            start,
            self.prev_token_end,
            ExprWithTypeArgsData {
                expression,
                type_arguments,
            },
        )
    }

    fn is_class_member_modifier(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
        )
    }

    fn parse_class_member(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
            return self.arena.add_token(
                syntax_kind_ext::SEMICOLON_CLASS_ELEMENT,
                start,
                self.prev_token_end,
            );
        }

        if self.is_token(SyntaxKind::StaticKeyword) && self.next_token_is(SyntaxKind::OpenBraceToken)
        {
            self.next_token();
            let block = self.with_function_context(false, false, |p| p.parse_block());
            let statements = self
                .arena
                .get(block)
                .and_then(|n| self.arena.get_block(n))
                .map(|b| b.statements.clone())
                .unwrap_or_default();
            return self.arena.add_block(
                syntax_kind_ext::CLASS_STATIC_BLOCK_DECLARATION,
                start,
                self.prev_token_end,
                BlockData {
                    statements,
                    multi_line: true,
                },
            );
        }

        let (modifiers, flags) = self.parse_modifiers(Self::is_class_member_modifier);

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.next_token_is_property_name_on_same_line()
        {
            return self.parse_accessor(start, modifiers, flags);
        }

        if self.is_token(SyntaxKind::ConstructorKeyword)
            && self.next_token_is(SyntaxKind::OpenParenToken)
        {
            self.next_token();
            let (parameters, body) = self.with_function_context(false, false, |p| {
                let parameters = p.parse_parameter_list();
                // Constructors cannot declare a return type; skip one if present.
                let _ = p.parse_return_type();
                let body = if p.is_token(SyntaxKind::OpenBraceToken) {
                    p.parse_block()
                } else {
                    p.parse_semicolon();
                    NodeIndex::NONE
                };
                (parameters, body)
            });
            let node = self.arena.add_constructor(
                syntax_kind_ext::CONSTRUCTOR,
                start,
                self.prev_token_end,
                ConstructorData {
                    modifiers,
                    parameters,
                    body,
                },
            );
            self.arena.set_modifier_flags(node, flags);
            return node;
        }

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            return self.parse_index_signature(start, modifiers, flags);
        }

        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = self.parse_property_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_method_declaration_rest(
                start,
                modifiers,
                flags,
                asterisk_token,
                name,
                question_token,
            );
        }

        let exclamation_token = self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.with_function_context(false, false, |p| p.parse_assignment_expression_or_higher())
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();
        let node = self.arena.add_property_decl(
            syntax_kind_ext::PROPERTY_DECLARATION,
            start,
            self.prev_token_end,
            PropertyDeclData {
                modifiers,
                name,
                question_token,
                exclamation_token,
                type_annotation,
                initializer,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    pub(crate) fn next_token_is_property_name_on_same_line(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break()
                && (p.is_identifier_or_keyword()
                    || matches!(
                        p.token(),
                        SyntaxKind::StringLiteral
                            | SyntaxKind::NumericLiteral
                            | SyntaxKind::OpenBracketToken
                            | SyntaxKind::PrivateIdentifier
                    ))
        })
    }

    /// `get name() {}` / `set name(v) {}` in classes and object literals.
    pub(crate) fn parse_accessor(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let kind = if self.is_token(SyntaxKind::GetKeyword) {
            syntax_kind_ext::GET_ACCESSOR
        } else {
            syntax_kind_ext::SET_ACCESSOR
        };
        self.next_token();
        let name = self.parse_property_name();
        let (parameters, type_annotation, body) = self.with_function_context(false, false, |p| {
            let parameters = p.parse_parameter_list();
            let type_annotation = p.parse_return_type();
            let body = if p.is_token(SyntaxKind::OpenBraceToken) {
                p.parse_block()
            } else {
                p.parse_semicolon();
                NodeIndex::NONE
            };
            (parameters, type_annotation, body)
        });
        let node = self.arena.add_accessor(
            kind,
            start,
            self.prev_token_end,
            AccessorData {
                modifiers,
                name,
                parameters,
                type_annotation,
                body,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    // =========================================================================
    // Interfaces, type aliases, enums, namespaces
    // =========================================================================

    fn parse_interface_declaration(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::InterfaceKeyword);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters_opt();
        let heritage_clauses = self.parse_heritage_clauses();
        let members = self.parse_object_type_members();
        let node = self.arena.add_interface(
            syntax_kind_ext::INTERFACE_DECLARATION,
            start,
            self.prev_token_end,
            InterfaceData {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_type_alias_declaration(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::TypeKeyword);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters_opt();
        self.parse_expected(SyntaxKind::EqualsToken);
        let type_node = self.parse_type();
        self.parse_semicolon();
        let node = self.arena.add_type_alias(
            syntax_kind_ext::TYPE_ALIAS_DECLARATION,
            start,
            self.prev_token_end,
            TypeAliasData {
                modifiers,
                name,
                type_parameters,
                type_node,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_enum_declaration(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::EnumKeyword);
        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let members = self.parse_delimited_list(SyntaxKind::CloseBraceToken, |p| {
            let member_start = p.token_pos();
            let name = p.parse_property_name();
            let initializer = if p.parse_optional(SyntaxKind::EqualsToken) {
                p.parse_assignment_expression_or_higher()
            } else {
                NodeIndex::NONE
            };
            p.arena.add_enum_member(
                syntax_kind_ext::ENUM_MEMBER,
                member_start,
                p.prev_token_end,
                EnumMemberData { name, initializer },
            )
        });
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let node = self.arena.add_enum(
            syntax_kind_ext::ENUM_DECLARATION,
            start,
            self.prev_token_end,
            EnumData {
                modifiers,
                name,
                members,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_module_declaration(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        let name = if self.is_token(SyntaxKind::GlobalKeyword) {
            self.parse_identifier_name()
        } else {
            self.next_token();
            if self.is_token(SyntaxKind::StringLiteral) {
                self.parse_literal()
            } else {
                self.parse_identifier()
            }
        };
        let body = self.parse_module_body();
        let node = self.arena.add_module(
            syntax_kind_ext::MODULE_DECLARATION,
            start,
            self.prev_token_end,
            ModuleData {
                modifiers,
                name,
                body,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_module_body(&mut self) -> NodeIndex {
        let start = self.token_pos();
        if self.parse_optional(SyntaxKind::DotToken) {
            // `namespace A.B {}` nests B inside A
            let name = self.parse_identifier();
            let body = self.parse_module_body();
            let node = self.arena.add_module(
                syntax_kind_ext::MODULE_DECLARATION,
                start,
                self.prev_token_end,
                ModuleData {
                    modifiers: None,
                    name,
                    body,
                },
            );
            self.arena.set_modifier_flags(node, ModifierFlags::EXPORT);
            return node;
        }
        if !self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_semicolon();
            return NodeIndex::NONE;
        }
        self.next_token();
        let statements =
            self.parse_statement_list_until(|p| p.is_token(SyntaxKind::CloseBraceToken));
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_block(
            syntax_kind_ext::MODULE_BLOCK,
            start,
            self.prev_token_end,
            BlockData {
                statements,
                multi_line: true,
            },
        )
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    fn parse_import_declaration(&mut self, start: u32, modifiers: Option<NodeList>) -> NodeIndex {
        self.parse_expected(SyntaxKind::ImportKeyword);

        // import "side-effect";
        if self.is_token(SyntaxKind::StringLiteral) {
            let module_specifier = self.parse_literal();
            self.parse_import_attributes();
            self.parse_semicolon();
            return self.arena.add_import_decl(
                syntax_kind_ext::IMPORT_DECLARATION,
                start,
                self.prev_token_end,
                ImportDeclData {
                    modifiers,
                    import_clause: NodeIndex::NONE,
                    module_specifier,
                },
            );
        }

        let clause_start = self.token_pos();
        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                (p.is_identifier() && !p.is_token(SyntaxKind::FromKeyword))
                    || p.is_token(SyntaxKind::OpenBraceToken)
                    || p.is_token(SyntaxKind::AsteriskToken)
            });
        if is_type_only {
            self.next_token();
        }

        let name = if self.is_identifier() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };

        // import x = require("m") / import x = A.B
        if name.is_some() && self.parse_optional(SyntaxKind::EqualsToken) {
            let module_specifier = self.parse_expression();
            self.parse_semicolon();
            let import_clause = self.arena.add_import_clause(
                syntax_kind_ext::IMPORT_CLAUSE,
                clause_start,
                self.prev_token_end,
                ImportClauseData {
                    is_type_only,
                    name,
                    named_bindings: NodeIndex::NONE,
                },
            );
            return self.arena.add_import_decl(
                syntax_kind_ext::IMPORT_DECLARATION,
                start,
                self.prev_token_end,
                ImportDeclData {
                    modifiers,
                    import_clause,
                    module_specifier,
                },
            );
        }

        let named_bindings = if name.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
            if self.is_token(SyntaxKind::AsteriskToken) {
                self.parse_namespace_import()
            } else if self.is_token(SyntaxKind::OpenBraceToken) {
                self.parse_named_imports_or_exports(
                    syntax_kind_ext::NAMED_IMPORTS,
                    syntax_kind_ext::IMPORT_SPECIFIER,
                )
            } else {
                self.parse_error_at_current_token("'{' expected.", 1005);
                NodeIndex::NONE
            }
        } else {
            NodeIndex::NONE
        };

        let import_clause = self.arena.add_import_clause(
            syntax_kind_ext::IMPORT_CLAUSE,
            clause_start,
            self.prev_token_end,
            ImportClauseData {
                is_type_only,
                name,
                named_bindings,
            },
        );

        self.parse_expected(SyntaxKind::FromKeyword);
        let module_specifier = self.parse_module_specifier();
        self.parse_import_attributes();
        self.parse_semicolon();

        self.arena.add_import_decl(
            syntax_kind_ext::IMPORT_DECLARATION,
            start,
            self.prev_token_end,
            ImportDeclData {
                modifiers,
                import_clause,
                module_specifier,
            },
        )
    }

    fn parse_module_specifier(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal()
        } else {
            self.parse_error_at_current_token("String literal expected.", 1141);
            NodeIndex::NONE
        }
    }

    /// `with { type: "json" }` is parsed and dropped.
    fn parse_import_attributes(&mut self) {
        if (self.is_token(SyntaxKind::WithKeyword)
            || (self.is_token(SyntaxKind::Identifier) && self.token_value() == "assert"))
            && !self.has_preceding_line_break()
        {
            self.next_token();
            if self.is_token(SyntaxKind::OpenBraceToken) {
                let _ = self.parse_object_literal_expression();
            }
        }
    }

    fn parse_namespace_import(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::AsteriskToken);
        self.parse_expected(SyntaxKind::AsKeyword);
        let name = self.parse_identifier();
        self.arena.add_named_imports(
            syntax_kind_ext::NAMESPACE_IMPORT,
            start,
            self.prev_token_end,
            NamedImportsData {
                name,
                elements: NodeList::new(),
            },
        )
    }

    fn parse_named_imports_or_exports(&mut self, kind: u16, specifier_kind: u16) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let elements = self.parse_delimited_list(SyntaxKind::CloseBraceToken, |p| {
            p.parse_import_or_export_specifier(specifier_kind)
        });
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.arena.add_named_imports(
            kind,
            start,
            self.prev_token_end,
            NamedImportsData {
                name: NodeIndex::NONE,
                elements,
            },
        )
    }

    fn parse_import_or_export_specifier(&mut self, kind: u16) -> NodeIndex {
        let start = self.token_pos();
        // `type x` / `type x as y`, but not `type` alone or `type as x`
        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                (p.is_identifier_or_keyword() || p.is_token(SyntaxKind::StringLiteral))
                    && !(p.is_token(SyntaxKind::AsKeyword)
                        && p.look_ahead(|q| {
                            q.next_token();
                            !q.is_identifier_or_keyword()
                        }))
            });
        if is_type_only {
            self.next_token();
        }
        let first = self.parse_module_export_name();
        let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
            (first, self.parse_module_export_name())
        } else {
            (NodeIndex::NONE, first)
        };
        self.arena.add_specifier(
            kind,
            start,
            self.prev_token_end,
            SpecifierData {
                is_type_only,
                property_name,
                name,
            },
        )
    }

    fn parse_module_export_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal()
        } else {
            self.parse_identifier_name()
        }
    }

    /// Export forms that are not `export <declaration>`.
    fn try_parse_export_without_declaration(&mut self, start: u32) -> Option<NodeIndex> {
        let modifier_end = self.token_end();
        self.next_token(); // export

        match self.token() {
            SyntaxKind::EqualsToken => {
                self.next_token();
                let expression = self.parse_assignment_expression_or_higher();
                self.parse_semicolon();
                Some(self.arena.add_export_assignment(
                    syntax_kind_ext::EXPORT_ASSIGNMENT,
                    start,
                    self.prev_token_end,
                    ExportAssignmentData {
                        modifiers: None,
                        is_export_equals: true,
                        expression,
                    },
                ))
            }
            SyntaxKind::DefaultKeyword => {
                let default_is_declaration = self.look_ahead(|p| {
                    p.next_token();
                    matches!(
                        p.token(),
                        SyntaxKind::ClassKeyword
                            | SyntaxKind::FunctionKeyword
                            | SyntaxKind::InterfaceKeyword
                            | SyntaxKind::AbstractKeyword
                            | SyntaxKind::AtToken
                    ) || (p.is_token(SyntaxKind::AsyncKeyword)
                        && p.next_token_is(SyntaxKind::FunctionKeyword))
                });
                if default_is_declaration {
                    return Some(self.parse_export_default_declaration(start, modifier_end));
                }
                self.next_token();
                let expression = self.parse_assignment_expression_or_higher();
                self.parse_semicolon();
                let node = self.arena.add_export_assignment(
                    syntax_kind_ext::EXPORT_ASSIGNMENT,
                    start,
                    self.prev_token_end,
                    ExportAssignmentData {
                        modifiers: None,
                        is_export_equals: false,
                        expression,
                    },
                );
                self.arena
                    .set_modifier_flags(node, ModifierFlags::EXPORT | ModifierFlags::DEFAULT);
                Some(node)
            }
            SyntaxKind::AsKeyword => {
                // export as namespace X;
                self.next_token();
                self.parse_expected(SyntaxKind::NamespaceKeyword);
                let _ = self.parse_identifier();
                self.parse_semicolon();
                Some(self.arena.add_export_decl(
                    syntax_kind_ext::EXPORT_DECLARATION,
                    start,
                    self.prev_token_end,
                    ExportDeclData {
                        modifiers: None,
                        is_type_only: false,
                        export_clause: NodeIndex::NONE,
                        module_specifier: NodeIndex::NONE,
                    },
                ))
            }
            _ => {
                let is_type_only = self.parse_optional(SyntaxKind::TypeKeyword);
                let export_clause = if self.is_token(SyntaxKind::AsteriskToken) {
                    let clause_start = self.token_pos();
                    self.next_token();
                    if self.parse_optional(SyntaxKind::AsKeyword) {
                        let name = self.parse_module_export_name();
                        self.arena.add_named_imports(
                            syntax_kind_ext::NAMESPACE_EXPORT,
                            clause_start,
                            self.prev_token_end,
                            NamedImportsData {
                                name,
                                elements: NodeList::new(),
                            },
                        )
                    } else {
                        NodeIndex::NONE
                    }
                } else {
                    self.parse_named_imports_or_exports(
                        syntax_kind_ext::NAMED_EXPORTS,
                        syntax_kind_ext::EXPORT_SPECIFIER,
                    )
                };
                let module_specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
                    self.parse_module_specifier()
                } else {
                    NodeIndex::NONE
                };
                self.parse_import_attributes();
                self.parse_semicolon();
                Some(self.arena.add_export_decl(
                    syntax_kind_ext::EXPORT_DECLARATION,
                    start,
                    self.prev_token_end,
                    ExportDeclData {
                        modifiers: None,
                        is_type_only,
                        export_clause,
                        module_specifier,
                    },
                ))
            }
        }
    }

    /// `export default class/function/interface ...`
    fn parse_export_default_declaration(&mut self, start: u32, export_end: u32) -> NodeIndex {
        let export_token =
            self.arena
                .add_token(SyntaxKind::ExportKeyword as u16, start, export_end);
        let default_start = self.token_pos();
        let default_end = self.token_end();
        self.next_token();
        let default_token =
            self.arena
                .add_token(SyntaxKind::DefaultKeyword as u16, default_start, default_end);

        let (rest, mut flags) = self.parse_modifiers(Self::is_declaration_modifier);
        flags |= ModifierFlags::EXPORT | ModifierFlags::DEFAULT;
        let mut nodes = vec![export_token, default_token];
        if let Some(rest) = rest {
            nodes.extend(rest.nodes);
        }
        let modifiers = Some(NodeList::with_nodes(nodes, start, self.prev_token_end));

        match self.token() {
            SyntaxKind::ClassKeyword => {
                self.parse_class_like(syntax_kind_ext::CLASS_DECLARATION, start, modifiers, flags)
            }
            SyntaxKind::InterfaceKeyword => {
                self.parse_interface_declaration(start, modifiers, flags)
            }
            _ => self.parse_function_declaration(start, modifiers, flags),
        }
    }
}
