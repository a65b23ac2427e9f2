//! Parser state - type annotations, type members and type parameters.

use legend_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::flags::ModifierFlags;
use super::node::*;
use super::state::{ParserState, context_flags};
use super::syntax_kind_ext;

impl ParserState {
    /// `: Type`, or NONE when no colon follows.
    pub(crate) fn parse_type_annotation(&mut self) -> NodeIndex {
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        }
    }

    /// `: Type` or `: x is Type` after a signature.
    pub(crate) fn parse_return_type(&mut self) -> NodeIndex {
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type_or_type_predicate()
        } else {
            NodeIndex::NONE
        }
    }

    fn parse_type_or_type_predicate(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if self.is_token(SyntaxKind::AssertsKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                !p.has_preceding_line_break()
                    && (p.is_identifier() || p.is_token(SyntaxKind::ThisKeyword))
            })
        {
            self.next_token();
            let parameter_name = self.parse_predicate_parameter_name();
            let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
                self.parse_type()
            } else {
                NodeIndex::NONE
            };
            return self.arena.add_type_predicate(
                syntax_kind_ext::TYPE_PREDICATE,
                start,
                self.prev_token_end,
                TypePredicateData {
                    asserts_modifier: true,
                    parameter_name,
                    type_node,
                },
            );
        }

        if (self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword))
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::IsKeyword) && !p.has_preceding_line_break()
            })
        {
            let parameter_name = self.parse_predicate_parameter_name();
            self.parse_expected(SyntaxKind::IsKeyword);
            let type_node = self.parse_type();
            return self.arena.add_type_predicate(
                syntax_kind_ext::TYPE_PREDICATE,
                start,
                self.prev_token_end,
                TypePredicateData {
                    asserts_modifier: false,
                    parameter_name,
                    type_node,
                },
            );
        }

        self.parse_type()
    }

    fn parse_predicate_parameter_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::ThisKeyword) {
            let start = self.token_pos();
            self.next_token();
            self.arena
                .add_token(syntax_kind_ext::THIS_TYPE, start, self.prev_token_end)
        } else {
            self.parse_identifier()
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub(crate) fn parse_type(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_type_worker();
        self.exit_recursion();
        result
    }

    fn parse_type_worker(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if self.is_start_of_function_or_constructor_type() {
            return self.parse_function_or_constructor_type();
        }

        let check_type = self.parse_union_type_or_higher();
        if self.in_context(context_flags::DISALLOW_CONDITIONAL_TYPES)
            || self.has_preceding_line_break()
            || !self.parse_optional(SyntaxKind::ExtendsKeyword)
        {
            return check_type;
        }

        let extends_type = self.with_context(context_flags::DISALLOW_CONDITIONAL_TYPES, true, |p| {
            p.parse_type()
        });
        self.parse_expected(SyntaxKind::QuestionToken);
        let true_type = self.with_context(context_flags::DISALLOW_CONDITIONAL_TYPES, false, |p| {
            p.parse_type()
        });
        self.parse_expected(SyntaxKind::ColonToken);
        let false_type = self.with_context(context_flags::DISALLOW_CONDITIONAL_TYPES, false, |p| {
            p.parse_type()
        });
        self.arena.add_conditional_type(
            syntax_kind_ext::CONDITIONAL_TYPE,
            start,
            self.prev_token_end,
            ConditionalTypeData {
                check_type,
                extends_type,
                true_type,
                false_type,
            },
        )
    }

    fn is_start_of_function_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::AbstractKeyword => self.next_token_is(SyntaxKind::NewKeyword),
            SyntaxKind::OpenParenToken => {
                self.look_ahead(|p| p.is_unambiguously_start_of_function_type())
            }
            _ => false,
        }
    }

    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken
        ) {
            return true;
        }
        if self.skip_parameter_start() {
            if matches!(
                self.token(),
                SyntaxKind::ColonToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::QuestionToken
                    | SyntaxKind::EqualsToken
            ) {
                return true;
            }
            if self.parse_optional(SyntaxKind::CloseParenToken)
                && self.is_token(SyntaxKind::EqualsGreaterThanToken)
            {
                return true;
            }
        }
        false
    }

    fn skip_parameter_start(&mut self) -> bool {
        if self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword) {
            self.next_token();
            return true;
        }
        if matches!(
            self.token(),
            SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
        ) {
            let before = self.diagnostics.len();
            let _ = self.parse_binding_name();
            return self.diagnostics.len() == before;
        }
        false
    }

    fn parse_function_or_constructor_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let is_abstract = self.parse_optional(SyntaxKind::AbstractKeyword);
        let kind = if self.parse_optional(SyntaxKind::NewKeyword) {
            syntax_kind_ext::CONSTRUCTOR_TYPE
        } else {
            syntax_kind_ext::FUNCTION_TYPE
        };
        let type_parameters = self.parse_type_parameters_opt();
        let parameters = self.parse_parameter_list();
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let type_annotation = self.parse_type_or_type_predicate();
        self.arena.add_function_type(
            kind,
            start,
            self.prev_token_end,
            FunctionTypeData {
                type_parameters,
                parameters,
                type_annotation,
                is_abstract,
            },
        )
    }

    fn parse_union_type_or_higher(&mut self) -> NodeIndex {
        self.parse_composite_type(syntax_kind_ext::UNION_TYPE, SyntaxKind::BarToken, |p| {
            p.parse_intersection_type_or_higher()
        })
    }

    fn parse_intersection_type_or_higher(&mut self) -> NodeIndex {
        self.parse_composite_type(
            syntax_kind_ext::INTERSECTION_TYPE,
            SyntaxKind::AmpersandToken,
            |p| p.parse_type_operator_or_higher(),
        )
    }

    /// `A | B | C` (a leading operator is allowed).
    fn parse_composite_type(
        &mut self,
        kind: u16,
        operator: SyntaxKind,
        parse_constituent: fn(&mut Self) -> NodeIndex,
    ) -> NodeIndex {
        let start = self.token_pos();
        let has_leading_operator = self.parse_optional(operator);
        let first = parse_constituent(self);
        if !self.is_token(operator) && !has_leading_operator {
            return first;
        }
        let mut types = vec![first];
        while self.parse_optional(operator) {
            types.push(parse_constituent(self));
        }
        let types = NodeList::with_nodes(types, start, self.prev_token_end);
        self.arena.add_composite_type(
            kind,
            start,
            self.prev_token_end,
            CompositeTypeData { types },
        )
    }

    fn parse_type_operator_or_higher(&mut self) -> NodeIndex {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => {
                let operator = self.token() as u16;
                self.next_token();
                let type_node = self.parse_type_operator_or_higher();
                self.arena.add_type_operator(
                    syntax_kind_ext::TYPE_OPERATOR,
                    start,
                    self.prev_token_end,
                    TypeOperatorData {
                        operator,
                        type_node,
                    },
                )
            }
            SyntaxKind::InferKeyword => {
                self.next_token();
                let param_start = self.token_pos();
                let name = self.parse_identifier();
                let constraint = if self.is_token(SyntaxKind::ExtendsKeyword)
                    && self.in_context(context_flags::DISALLOW_CONDITIONAL_TYPES)
                {
                    // `infer U extends X ? ...` keeps the constraint only when
                    // no conditional could follow.
                    self.try_parse(|p| {
                        p.next_token();
                        let constraint = p.parse_type();
                        (!p.is_token(SyntaxKind::QuestionToken)).then_some(constraint)
                    })
                    .unwrap_or(NodeIndex::NONE)
                } else {
                    NodeIndex::NONE
                };
                let type_parameter = self.arena.add_type_parameter(
                    syntax_kind_ext::TYPE_PARAMETER,
                    param_start,
                    self.prev_token_end,
                    TypeParameterData {
                        modifiers: None,
                        name,
                        constraint,
                        default: NodeIndex::NONE,
                    },
                );
                self.arena.add_infer_type(
                    syntax_kind_ext::INFER_TYPE,
                    start,
                    self.prev_token_end,
                    InferTypeData { type_parameter },
                )
            }
            _ => self.parse_postfix_type_or_higher(),
        }
    }

    fn parse_postfix_type_or_higher(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let mut type_node = self.parse_non_array_type();
        while !self.has_preceding_line_break() && self.is_token(SyntaxKind::OpenBracketToken) {
            self.next_token();
            if self.parse_optional(SyntaxKind::CloseBracketToken) {
                type_node = self.arena.add_array_type(
                    syntax_kind_ext::ARRAY_TYPE,
                    start,
                    self.prev_token_end,
                    ArrayTypeData {
                        element_type: type_node,
                    },
                );
            } else {
                let index_type = self.parse_type();
                self.parse_expected(SyntaxKind::CloseBracketToken);
                type_node = self.arena.add_indexed_access_type(
                    syntax_kind_ext::INDEXED_ACCESS_TYPE,
                    start,
                    self.prev_token_end,
                    IndexedAccessTypeData {
                        object_type: type_node,
                        index_type,
                    },
                );
            }
        }
        type_node
    }

    fn parse_non_array_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::NeverKeyword
            | SyntaxKind::ObjectKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::NullKeyword
                if !self.next_token_is(SyntaxKind::DotToken) =>
            {
                let kind = self.token() as u16;
                self.next_token();
                self.arena.add_token(kind, start, self.prev_token_end)
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                self.arena
                    .add_token(syntax_kind_ext::THIS_TYPE, start, self.prev_token_end)
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let kind = self.token() as u16;
                self.next_token();
                let literal = self.arena.add_token(kind, start, self.prev_token_end);
                self.wrap_literal_type(start, literal)
            }
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => {
                let literal = self.parse_literal();
                self.wrap_literal_type(start, literal)
            }
            SyntaxKind::MinusToken
                if self.look_ahead(|p| {
                    p.next_token();
                    matches!(
                        p.token(),
                        SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral
                    )
                }) =>
            {
                self.next_token();
                let operand = self.parse_literal();
                let literal = self.arena.add_unary_expr(
                    syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
                    start,
                    self.prev_token_end,
                    UnaryExprData {
                        operator: SyntaxKind::MinusToken as u16,
                        operand,
                    },
                );
                self.wrap_literal_type(start, literal)
            }
            SyntaxKind::TemplateHead => self.parse_template_literal_type(),
            SyntaxKind::TypeOfKeyword => self.parse_type_query(),
            SyntaxKind::ImportKeyword => self.parse_import_type(false),
            SyntaxKind::OpenBraceToken => {
                if self.look_ahead(|p| p.is_start_of_mapped_type()) {
                    self.parse_mapped_type()
                } else {
                    let members = self.parse_object_type_members();
                    self.arena.add_type_literal(
                        syntax_kind_ext::TYPE_LITERAL,
                        start,
                        self.prev_token_end,
                        TypeLiteralData { members },
                    )
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let type_node = self.parse_type();
                self.parse_expected(SyntaxKind::CloseParenToken);
                self.arena.add_wrapped_type(
                    syntax_kind_ext::PARENTHESIZED_TYPE,
                    start,
                    self.prev_token_end,
                    WrappedTypeData { type_node },
                )
            }
            _ if self.is_identifier_or_keyword() => self.parse_type_reference(),
            _ => {
                self.parse_error_at_current_token("Type expected.", 1110);
                self.create_missing_identifier()
            }
        }
    }

    fn wrap_literal_type(&mut self, start: u32, literal: NodeIndex) -> NodeIndex {
        self.arena.add_literal_type(
            syntax_kind_ext::LITERAL_TYPE,
            start,
            self.prev_token_end,
            LiteralTypeData { literal },
        )
    }

    /// `A`, `A.B.C`, `Array<T>`
    fn parse_type_reference(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let type_name = self.parse_entity_name();
        let type_arguments = if !self.has_preceding_line_break()
            && self.is_token(SyntaxKind::LessThanToken)
        {
            Some(self.parse_type_arguments())
        } else {
            None
        };
        self.arena.add_type_ref(
            syntax_kind_ext::TYPE_REFERENCE,
            start,
            self.prev_token_end,
            TypeRefData {
                type_name,
                type_arguments,
            },
        )
    }

    /// Identifier or dotted `QualifiedName`.
    pub(crate) fn parse_entity_name(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let mut entity = self.parse_identifier_name();
        while self.is_token(SyntaxKind::DotToken) {
            self.next_token();
            let right = self.parse_identifier_name();
            entity = self.arena.add_qualified_name(
                syntax_kind_ext::QUALIFIED_NAME,
                start,
                self.prev_token_end,
                QualifiedNameData {
                    left: entity,
                    right,
                },
            );
        }
        entity
    }

    fn parse_type_query(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::TypeOfKeyword);
        if self.is_token(SyntaxKind::ImportKeyword) {
            return self.parse_import_type(true);
        }
        let expr_name = self.parse_entity_name();
        let type_arguments = if !self.has_preceding_line_break()
            && self.is_token(SyntaxKind::LessThanToken)
        {
            Some(self.parse_type_arguments())
        } else {
            None
        };
        self.arena.add_type_query(
            syntax_kind_ext::TYPE_QUERY,
            start,
            self.prev_token_end,
            TypeQueryData {
                expr_name,
                type_arguments,
            },
        )
    }

    /// `import("m").A<T>` / `typeof import("m")`
    fn parse_import_type(&mut self, is_type_of: bool) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::ImportKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);
        let argument = self.parse_type();
        self.parse_expected(SyntaxKind::CloseParenToken);
        let qualifier = if self.parse_optional(SyntaxKind::DotToken) {
            self.parse_entity_name()
        } else {
            NodeIndex::NONE
        };
        let type_arguments = if !self.has_preceding_line_break()
            && self.is_token(SyntaxKind::LessThanToken)
        {
            Some(self.parse_type_arguments())
        } else {
            None
        };
        self.arena.add_import_type(
            syntax_kind_ext::IMPORT_TYPE,
            start,
            self.prev_token_end,
            ImportTypeData {
                is_type_of,
                argument,
                qualifier,
                type_arguments,
            },
        )
    }

    fn parse_template_literal_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let head = self.parse_literal();
        let spans_pos = self.token_pos();
        let mut spans = Vec::new();
        loop {
            let span_start = self.token_pos();
            let type_node = self.parse_type();
            let (literal, done) = self.parse_template_span_literal();
            spans.push(self.arena.add_template_span(
                syntax_kind_ext::TEMPLATE_LITERAL_TYPE_SPAN,
                span_start,
                self.prev_token_end,
                TemplateSpanData {
                    expression: type_node,
                    literal,
                },
            ));
            if done {
                break;
            }
        }
        let template_spans = NodeList::with_nodes(spans, spans_pos, self.prev_token_end);
        self.arena.add_template_expr(
            syntax_kind_ext::TEMPLATE_LITERAL_TYPE,
            start,
            self.prev_token_end,
            TemplateExprData {
                head,
                template_spans,
            },
        )
    }

    fn parse_tuple_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let types = self.parse_delimited_list(SyntaxKind::CloseBracketToken, |p| {
            p.parse_tuple_element_type()
        });
        self.parse_expected(SyntaxKind::CloseBracketToken);
        self.arena.add_composite_type(
            syntax_kind_ext::TUPLE_TYPE,
            start,
            self.prev_token_end,
            CompositeTypeData { types },
        )
    }

    fn parse_tuple_element_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        let is_named = self.look_ahead(|p| {
            p.parse_optional(SyntaxKind::DotDotDotToken);
            if !p.is_identifier_or_keyword() {
                return false;
            }
            p.next_token();
            p.parse_optional(SyntaxKind::QuestionToken);
            p.is_token(SyntaxKind::ColonToken)
        });
        if is_named {
            let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_identifier_name();
            let question_token = self.parse_optional(SyntaxKind::QuestionToken);
            self.parse_expected(SyntaxKind::ColonToken);
            let type_node = self.parse_type();
            return self.arena.add_named_tuple_member(
                syntax_kind_ext::NAMED_TUPLE_MEMBER,
                start,
                self.prev_token_end,
                NamedTupleMemberData {
                    dot_dot_dot_token,
                    name,
                    question_token,
                    type_node,
                },
            );
        }

        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let type_node = self.parse_type();
            return self.arena.add_wrapped_type(
                syntax_kind_ext::REST_TYPE,
                start,
                self.prev_token_end,
                WrappedTypeData { type_node },
            );
        }

        let type_node = self.parse_type();
        if self.parse_optional(SyntaxKind::QuestionToken) {
            return self.arena.add_wrapped_type(
                syntax_kind_ext::OPTIONAL_TYPE,
                start,
                self.prev_token_end,
                WrappedTypeData { type_node },
            );
        }
        type_node
    }

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.next_token();
        if matches!(self.token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            self.next_token();
            return self.is_token(SyntaxKind::ReadonlyKeyword);
        }
        if self.is_token(SyntaxKind::ReadonlyKeyword) {
            self.next_token();
        }
        if !self.parse_optional(SyntaxKind::OpenBracketToken) {
            return false;
        }
        if !self.is_identifier() {
            return false;
        }
        self.next_token();
        self.is_token(SyntaxKind::InKeyword)
    }

    /// `{ readonly [K in T as N]?: V }`
    fn parse_mapped_type(&mut self) -> NodeIndex {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let readonly_token = match self.token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let token = self.token() as u16;
                self.next_token();
                self.parse_expected(SyntaxKind::ReadonlyKeyword);
                token
            }
            SyntaxKind::ReadonlyKeyword => {
                self.next_token();
                SyntaxKind::ReadonlyKeyword as u16
            }
            _ => 0,
        };

        self.parse_expected(SyntaxKind::OpenBracketToken);
        let param_start = self.token_pos();
        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::InKeyword);
        let constraint = self.parse_type();
        let type_parameter = self.arena.add_type_parameter(
            syntax_kind_ext::TYPE_PARAMETER,
            param_start,
            self.prev_token_end,
            TypeParameterData {
                modifiers: None,
                name,
                constraint,
                default: NodeIndex::NONE,
            },
        );
        let name_type = if self.parse_optional(SyntaxKind::AsKeyword) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        self.parse_expected(SyntaxKind::CloseBracketToken);

        let question_token = match self.token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let token = self.token() as u16;
                self.next_token();
                self.parse_expected(SyntaxKind::QuestionToken);
                token
            }
            SyntaxKind::QuestionToken => {
                self.next_token();
                SyntaxKind::QuestionToken as u16
            }
            _ => 0,
        };

        let type_node = self.parse_type_annotation();
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.parse_expected(SyntaxKind::CloseBraceToken);

        self.arena.add_mapped_type(
            syntax_kind_ext::MAPPED_TYPE,
            start,
            self.prev_token_end,
            MappedTypeData {
                readonly_token,
                type_parameter,
                name_type,
                question_token,
                type_node,
            },
        )
    }

    // =========================================================================
    // Type members (interfaces and type literals)
    // =========================================================================

    /// `{ member; member, ... }`
    pub(crate) fn parse_object_type_members(&mut self) -> NodeList {
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return NodeList::new();
        }
        let pos = self.token_pos();
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let member_start = self.token_pos();
            let member = self.parse_type_member();
            if member.is_some() {
                members.push(member);
            }
            if !self.parse_optional(SyntaxKind::SemicolonToken) {
                self.parse_optional(SyntaxKind::CommaToken);
            }
            if self.token_pos() == member_start {
                self.parse_error_at_current_token("Property or signature expected.", 1131);
                self.next_token();
            }
        }
        let members = NodeList::with_nodes(members, pos, self.prev_token_end);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        members
    }

    fn is_type_member_modifier(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::ReadonlyKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    fn parse_type_member(&mut self) -> NodeIndex {
        let start = self.token_pos();

        if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            return self.parse_signature_member(syntax_kind_ext::CALL_SIGNATURE, start);
        }
        if self.is_token(SyntaxKind::NewKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                matches!(
                    p.token(),
                    SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
                )
            })
        {
            self.next_token();
            return self.parse_signature_member(syntax_kind_ext::CONSTRUCT_SIGNATURE, start);
        }

        let (modifiers, flags) = self.parse_modifiers(Self::is_type_member_modifier);

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.next_token_is_property_name_on_same_line()
        {
            return self.parse_accessor(start, modifiers, flags);
        }

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            return self.parse_index_signature(start, modifiers, flags);
        }

        let name = self.parse_property_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        let (kind, type_parameters, parameters, type_annotation) = if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_parameters = self.parse_type_parameters_opt();
            let parameters = self.parse_parameter_list();
            let type_annotation = self.parse_return_type();
            (
                syntax_kind_ext::METHOD_SIGNATURE,
                type_parameters,
                Some(parameters),
                type_annotation,
            )
        } else {
            let type_annotation = self.parse_type_annotation();
            (
                syntax_kind_ext::PROPERTY_SIGNATURE,
                None,
                None,
                type_annotation,
            )
        };

        let node = self.arena.add_signature(
            kind,
            start,
            self.prev_token_end,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters,
                type_annotation,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    fn parse_signature_member(&mut self, kind: u16, start: u32) -> NodeIndex {
        let type_parameters = self.parse_type_parameters_opt();
        let parameters = self.parse_parameter_list();
        let type_annotation = self.parse_return_type();
        self.arena.add_signature(
            kind,
            start,
            self.prev_token_end,
            SignatureData {
                modifiers: None,
                name: NodeIndex::NONE,
                question_token: false,
                type_parameters,
                parameters: Some(parameters),
                type_annotation,
            },
        )
    }

    /// `[` starts an index signature rather than a computed property name.
    pub(crate) fn is_index_signature(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if matches!(
                p.token(),
                SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken
            ) {
                return true;
            }
            if matches!(
                p.token(),
                SyntaxKind::PublicKeyword
                    | SyntaxKind::PrivateKeyword
                    | SyntaxKind::ProtectedKeyword
                    | SyntaxKind::ReadonlyKeyword
            ) && p.look_ahead(|q| {
                q.next_token();
                q.is_identifier()
            }) {
                return true;
            }
            if !p.is_identifier() {
                return false;
            }
            p.next_token();
            if matches!(p.token(), SyntaxKind::ColonToken | SyntaxKind::CommaToken) {
                return true;
            }
            if !p.parse_optional(SyntaxKind::QuestionToken) {
                return false;
            }
            matches!(
                p.token(),
                SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
            )
        })
    }

    /// `[key: string]: T`
    pub(crate) fn parse_index_signature(
        &mut self,
        start: u32,
        modifiers: Option<NodeList>,
        flags: ModifierFlags,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let parameters =
            self.parse_delimited_list(SyntaxKind::CloseBracketToken, |p| p.parse_parameter());
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let type_annotation = self.parse_type_annotation();
        self.parse_optional(SyntaxKind::SemicolonToken);
        let node = self.arena.add_index_signature(
            syntax_kind_ext::INDEX_SIGNATURE,
            start,
            self.prev_token_end,
            IndexSignatureData {
                modifiers,
                parameters,
                type_annotation,
            },
        );
        self.arena.set_modifier_flags(node, flags);
        node
    }

    // =========================================================================
    // Type parameters and arguments
    // =========================================================================

    /// `<T extends U = D, ...>` if present.
    pub(crate) fn parse_type_parameters_opt(&mut self) -> Option<NodeList> {
        if !self.is_token(SyntaxKind::LessThanToken) {
            return None;
        }
        self.next_token();
        let list = self.parse_delimited_list(SyntaxKind::GreaterThanToken, |p| {
            p.parse_type_parameter()
        });
        self.parse_expected(SyntaxKind::GreaterThanToken);
        Some(list)
    }

    fn parse_type_parameter(&mut self) -> NodeIndex {
        let start = self.token_pos();
        // Variance and const modifiers: `in`, `out`, `const`
        while (self.is_token(SyntaxKind::ConstKeyword)
            || self.is_token(SyntaxKind::InKeyword)
            || (self.is_token(SyntaxKind::Identifier) && self.token_value() == "out"))
            && self.look_ahead(|p| {
                p.next_token();
                p.is_identifier()
            })
        {
            self.next_token();
        }
        let name = self.parse_identifier();
        let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        let default = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        self.arena.add_type_parameter(
            syntax_kind_ext::TYPE_PARAMETER,
            start,
            self.prev_token_end,
            TypeParameterData {
                modifiers: None,
                name,
                constraint,
                default,
            },
        )
    }

    /// `<A, B>`
    pub(crate) fn parse_type_arguments(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::LessThanToken);
        let list = self.parse_delimited_list(SyntaxKind::GreaterThanToken, |p| p.parse_type());
        self.parse_expected_greater_than();
        list
    }
}
