//! NodeArena access methods and child enumeration.

use legend_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};
use super::flags::ModifierFlags;
use super::node::*;
use super::syntax_kind_ext::*;

/// Token kinds that own a data pool, usable as patterns.
mod token_kinds {
    use legend_scanner::SyntaxKind;

    pub const IDENTIFIER: u16 = SyntaxKind::Identifier as u16;
    pub const PRIVATE_IDENTIFIER: u16 = SyntaxKind::PrivateIdentifier as u16;
    pub const STRING_LITERAL: u16 = SyntaxKind::StringLiteral as u16;
    pub const NUMERIC_LITERAL: u16 = SyntaxKind::NumericLiteral as u16;
    pub const BIGINT_LITERAL: u16 = SyntaxKind::BigIntLiteral as u16;
    pub const REGULAR_EXPRESSION_LITERAL: u16 = SyntaxKind::RegularExpressionLiteral as u16;
    pub const NO_SUBSTITUTION_TEMPLATE_LITERAL: u16 =
        SyntaxKind::NoSubstitutionTemplateLiteral as u16;
    pub const TEMPLATE_HEAD: u16 = SyntaxKind::TemplateHead as u16;
    pub const TEMPLATE_MIDDLE: u16 = SyntaxKind::TemplateMiddle as u16;
    pub const TEMPLATE_TAIL: u16 = SyntaxKind::TemplateTail as u16;
    pub const JSX_TEXT: u16 = SyntaxKind::JsxText as u16;
    pub const JSX_TEXT_ALL_WHITE_SPACES: u16 = SyntaxKind::JsxTextAllWhiteSpaces as u16;
}

use token_kinds::*;

macro_rules! get_methods {
    ($( $(#[$meta:meta])* $name:ident -> $ty:ty, $pool:ident, [$($kind:pat),+ $(,)?]; )*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&self, node: &Node) -> Option<&$ty> {
                if node.has_data() && matches!(node.kind, $($kind)|+) {
                    self.$pool.get(node.data_index as usize)
                } else {
                    None
                }
            }
        )*
    };
}

impl NodeArena {
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended_mut(&mut self, index: NodeIndex) -> Option<&mut ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get_mut(index.0 as usize)
        }
    }

    /// Parent of a node; NONE for the root or an invalid index.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<u16> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: u16) -> bool {
        self.kind_of(index) == Some(kind)
    }

    pub fn modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        self.get_extended(index)
            .map_or(ModifierFlags::empty(), |info| {
                ModifierFlags::from_bits_truncate(info.modifier_flags)
            })
    }

    /// Text of an Identifier or PrivateIdentifier node.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.escaped_text.as_str())
    }

    /// Cooked text of a literal node.
    pub fn literal_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_literal(node).map(|data| data.text.as_str())
    }

    /// Source slice covered by a node.
    pub fn node_text<'a>(&self, index: NodeIndex, source: &'a str) -> Option<&'a str> {
        let node = self.get(index)?;
        source.get(node.pos as usize..node.end as usize)
    }

    /// Entity name text: `a`, `a.b.c` (Identifier / QualifiedName /
    /// PropertyAccess chains of identifiers).
    pub fn entity_name_text(&self, index: NodeIndex) -> Option<String> {
        let node = self.get(index)?;
        if let Some(ident) = self.get_identifier(node) {
            return Some(ident.escaped_text.clone());
        }
        if let Some(qn) = self.get_qualified_name(node) {
            let left = self.entity_name_text(qn.left)?;
            let right = self.identifier_text(qn.right)?;
            return Some(format!("{left}.{right}"));
        }
        if node.kind == PROPERTY_ACCESS_EXPRESSION {
            let access = self.get_access_expr(node)?;
            let left = self.entity_name_text(access.expression)?;
            let right = self.identifier_text(access.name_or_argument)?;
            return Some(format!("{left}.{right}"));
        }
        if node.kind == SyntaxKind::ThisKeyword as u16 {
            return Some("this".to_string());
        }
        None
    }

    /// The SourceFile data, if `index` is a source file.
    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get(index).and_then(|node| self.get_source_file(node))
    }

    /// Skip through parenthesized expressions.
    pub fn skip_parentheses(&self, mut index: NodeIndex) -> NodeIndex {
        while let Some(node) = self.get(index) {
            if node.kind != PARENTHESIZED_EXPRESSION {
                break;
            }
            match self.get_unary_expr_ex(node) {
                Some(data) => index = data.expression,
                None => break,
            }
        }
        index
    }

    get_methods! {
        get_identifier -> IdentifierData, identifiers, [IDENTIFIER, PRIVATE_IDENTIFIER];
        get_literal -> LiteralData, literals, [
            STRING_LITERAL,
            NUMERIC_LITERAL,
            BIGINT_LITERAL,
            REGULAR_EXPRESSION_LITERAL,
            NO_SUBSTITUTION_TEMPLATE_LITERAL,
            TEMPLATE_HEAD,
            TEMPLATE_MIDDLE,
            TEMPLATE_TAIL,
            JSX_TEXT,
            JSX_TEXT_ALL_WHITE_SPACES,
        ];
        get_qualified_name -> QualifiedNameData, qualified_names, [QUALIFIED_NAME];

        get_binary_expr -> BinaryExprData, binary_exprs, [BINARY_EXPRESSION];
        get_unary_expr -> UnaryExprData, unary_exprs, [PREFIX_UNARY_EXPRESSION, POSTFIX_UNARY_EXPRESSION];
        /// Single-expression wrappers (parenthesized, await, spread, ...).
        get_unary_expr_ex -> UnaryExprDataEx, unary_exprs_ex, [
            COMPUTED_PROPERTY_NAME,
            DECORATOR,
            PARENTHESIZED_EXPRESSION,
            DELETE_EXPRESSION,
            TYPE_OF_EXPRESSION,
            VOID_EXPRESSION,
            AWAIT_EXPRESSION,
            YIELD_EXPRESSION,
            SPREAD_ELEMENT,
            NON_NULL_EXPRESSION,
            SPREAD_ASSIGNMENT,
            JSX_SPREAD_ATTRIBUTE,
        ];
        get_type_assertion -> TypeAssertionData, type_assertions, [TYPE_ASSERTION, AS_EXPRESSION, SATISFIES_EXPRESSION];
        get_call_expr -> CallExprData, call_exprs, [CALL_EXPRESSION, NEW_EXPRESSION];
        get_tagged_template -> TaggedTemplateData, tagged_templates, [TAGGED_TEMPLATE_EXPRESSION];
        get_access_expr -> AccessExprData, access_exprs, [PROPERTY_ACCESS_EXPRESSION, ELEMENT_ACCESS_EXPRESSION];
        get_conditional_expr -> ConditionalExprData, conditional_exprs, [CONDITIONAL_EXPRESSION];
        get_template_expr -> TemplateExprData, template_exprs, [TEMPLATE_EXPRESSION, TEMPLATE_LITERAL_TYPE];
        get_template_span -> TemplateSpanData, template_spans, [TEMPLATE_SPAN, TEMPLATE_LITERAL_TYPE_SPAN];
        get_literal_expr -> LiteralExprData, literal_exprs, [ARRAY_LITERAL_EXPRESSION, OBJECT_LITERAL_EXPRESSION];
        get_property_assignment -> PropertyAssignmentData, property_assignments, [PROPERTY_ASSIGNMENT, SHORTHAND_PROPERTY_ASSIGNMENT];
        get_meta_property -> MetaPropertyData, meta_properties, [META_PROPERTY];

        get_function -> FunctionData, functions, [FUNCTION_DECLARATION, FUNCTION_EXPRESSION, ARROW_FUNCTION];
        get_method_decl -> MethodDeclData, method_decls, [METHOD_DECLARATION];
        get_constructor -> ConstructorData, constructors, [CONSTRUCTOR];
        get_accessor -> AccessorData, accessors, [GET_ACCESSOR, SET_ACCESSOR];
        get_signature -> SignatureData, signatures, [PROPERTY_SIGNATURE, METHOD_SIGNATURE, CALL_SIGNATURE, CONSTRUCT_SIGNATURE];
        get_index_signature -> IndexSignatureData, index_signatures, [INDEX_SIGNATURE];
        get_property_decl -> PropertyDeclData, property_decls, [PROPERTY_DECLARATION];
        get_parameter -> ParameterData, parameters, [PARAMETER];
        get_type_parameter -> TypeParameterData, type_parameters, [TYPE_PARAMETER];

        get_class -> ClassData, classes, [CLASS_DECLARATION, CLASS_EXPRESSION];
        get_heritage_clause -> HeritageData, heritage_clauses, [HERITAGE_CLAUSE];
        get_expr_type_args -> ExprWithTypeArgsData, expr_with_type_args, [EXPRESSION_WITH_TYPE_ARGUMENTS];
        get_interface -> InterfaceData, interfaces, [INTERFACE_DECLARATION];
        get_type_alias -> TypeAliasData, type_aliases, [TYPE_ALIAS_DECLARATION];
        get_enum -> EnumData, enums, [ENUM_DECLARATION];
        get_enum_member -> EnumMemberData, enum_members, [ENUM_MEMBER];
        get_module -> ModuleData, modules, [MODULE_DECLARATION];

        get_block -> BlockData, blocks, [BLOCK, MODULE_BLOCK, CASE_BLOCK, CLASS_STATIC_BLOCK_DECLARATION];
        get_source_file -> SourceFileData, source_files, [SOURCE_FILE];
        get_variable -> VariableData, variables, [VARIABLE_STATEMENT, VARIABLE_DECLARATION_LIST];
        get_variable_declaration -> VariableDeclarationData, variable_declarations, [VARIABLE_DECLARATION];
        get_expression_statement -> ExprStatementData, expr_statements, [EXPRESSION_STATEMENT];
        get_return_statement -> ReturnData, return_data, [RETURN_STATEMENT, THROW_STATEMENT];
        get_if_statement -> IfStatementData, if_statements, [IF_STATEMENT];
        get_loop -> LoopData, loops, [FOR_STATEMENT, WHILE_STATEMENT, DO_STATEMENT];
        get_for_in_of -> ForInOfData, for_in_of, [FOR_IN_STATEMENT, FOR_OF_STATEMENT];
        get_switch -> SwitchData, switch_data, [SWITCH_STATEMENT];
        get_case_clause -> CaseClauseData, case_clauses, [CASE_CLAUSE, DEFAULT_CLAUSE];
        get_try -> TryData, try_data, [TRY_STATEMENT];
        get_catch_clause -> CatchClauseData, catch_clauses, [CATCH_CLAUSE];
        get_labeled_statement -> LabeledData, labeled_data, [LABELED_STATEMENT];
        get_jump_data -> JumpData, jump_data, [BREAK_STATEMENT, CONTINUE_STATEMENT];

        get_import_decl -> ImportDeclData, import_decls, [IMPORT_DECLARATION];
        get_import_clause -> ImportClauseData, import_clauses, [IMPORT_CLAUSE];
        get_named_imports -> NamedImportsData, named_imports, [NAMESPACE_IMPORT, NAMED_IMPORTS, NAMED_EXPORTS, NAMESPACE_EXPORT];
        get_specifier -> SpecifierData, specifiers, [IMPORT_SPECIFIER, EXPORT_SPECIFIER];
        get_export_decl -> ExportDeclData, export_decls, [EXPORT_DECLARATION];
        get_export_assignment -> ExportAssignmentData, export_assignments, [EXPORT_ASSIGNMENT];

        get_type_ref -> TypeRefData, type_refs, [TYPE_REFERENCE];
        get_composite_type -> CompositeTypeData, composite_types, [UNION_TYPE, INTERSECTION_TYPE, TUPLE_TYPE];
        get_function_type -> FunctionTypeData, function_types, [FUNCTION_TYPE, CONSTRUCTOR_TYPE];
        get_type_query -> TypeQueryData, type_queries, [TYPE_QUERY];
        get_type_literal -> TypeLiteralData, type_literals, [TYPE_LITERAL];
        get_array_type -> ArrayTypeData, array_types, [ARRAY_TYPE];
        get_wrapped_type -> WrappedTypeData, wrapped_types, [OPTIONAL_TYPE, REST_TYPE, PARENTHESIZED_TYPE];
        get_type_operator -> TypeOperatorData, type_operators, [TYPE_OPERATOR];
        get_indexed_access_type -> IndexedAccessTypeData, indexed_access_types, [INDEXED_ACCESS_TYPE];
        get_conditional_type -> ConditionalTypeData, conditional_types, [CONDITIONAL_TYPE];
        get_infer_type -> InferTypeData, infer_types, [INFER_TYPE];
        get_mapped_type -> MappedTypeData, mapped_types, [MAPPED_TYPE];
        get_literal_type -> LiteralTypeData, literal_types, [LITERAL_TYPE];
        get_named_tuple_member -> NamedTupleMemberData, named_tuple_members, [NAMED_TUPLE_MEMBER];
        get_type_predicate -> TypePredicateData, type_predicates, [TYPE_PREDICATE];
        get_import_type -> ImportTypeData, import_types, [IMPORT_TYPE];

        get_binding_pattern -> BindingPatternData, binding_patterns, [OBJECT_BINDING_PATTERN, ARRAY_BINDING_PATTERN];
        get_binding_element -> BindingElementData, binding_elements, [BINDING_ELEMENT];

        get_jsx_element -> JsxElementData, jsx_elements, [JSX_ELEMENT];
        get_jsx_opening -> JsxOpeningData, jsx_opening, [JSX_OPENING_ELEMENT, JSX_SELF_CLOSING_ELEMENT];
        get_jsx_closing -> JsxClosingData, jsx_closing, [JSX_CLOSING_ELEMENT];
        get_jsx_fragment -> JsxFragmentData, jsx_fragments, [JSX_FRAGMENT];
        get_jsx_attributes -> JsxAttributesData, jsx_attributes, [JSX_ATTRIBUTES];
        get_jsx_attribute -> JsxAttributeData, jsx_attribute, [JSX_ATTRIBUTE];
        get_jsx_expression -> JsxExpressionData, jsx_expressions, [JSX_EXPRESSION];
        get_jsx_namespaced_name -> JsxNamespacedNameData, jsx_namespaced_names, [JSX_NAMESPACED_NAME];
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Collect the direct children of a node in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        self.for_each_child(index, |child| children.push(child));
        children
    }

    /// Visit the direct children of a node in source order.
    pub fn for_each_child<F: FnMut(NodeIndex)>(&self, index: NodeIndex, mut f: F) {
        let Some(node) = self.get(index) else {
            return;
        };
        if !node.has_data() {
            return;
        }
        let mut v = ChildVisitor { f: &mut f };

        match node.kind {
            QUALIFIED_NAME => {
                if let Some(d) = self.get_qualified_name(node) {
                    v.node(d.left);
                    v.node(d.right);
                }
            }
            BINARY_EXPRESSION => {
                if let Some(d) = self.get_binary_expr(node) {
                    v.node(d.left);
                    v.node(d.right);
                }
            }
            PREFIX_UNARY_EXPRESSION | POSTFIX_UNARY_EXPRESSION => {
                if let Some(d) = self.get_unary_expr(node) {
                    v.node(d.operand);
                }
            }
            COMPUTED_PROPERTY_NAME | DECORATOR | PARENTHESIZED_EXPRESSION | DELETE_EXPRESSION
            | TYPE_OF_EXPRESSION | VOID_EXPRESSION | AWAIT_EXPRESSION | YIELD_EXPRESSION
            | SPREAD_ELEMENT | NON_NULL_EXPRESSION | SPREAD_ASSIGNMENT | JSX_SPREAD_ATTRIBUTE => {
                if let Some(d) = self.get_unary_expr_ex(node) {
                    v.node(d.expression);
                }
            }
            TYPE_ASSERTION => {
                // `<T>expr`: the type comes first
                if let Some(d) = self.get_type_assertion(node) {
                    v.node(d.type_node);
                    v.node(d.expression);
                }
            }
            AS_EXPRESSION | SATISFIES_EXPRESSION => {
                if let Some(d) = self.get_type_assertion(node) {
                    v.node(d.expression);
                    v.node(d.type_node);
                }
            }
            CALL_EXPRESSION | NEW_EXPRESSION => {
                if let Some(d) = self.get_call_expr(node) {
                    v.node(d.expression);
                    v.opt_list(&d.type_arguments);
                    v.opt_list(&d.arguments);
                }
            }
            TAGGED_TEMPLATE_EXPRESSION => {
                if let Some(d) = self.get_tagged_template(node) {
                    v.node(d.tag);
                    v.opt_list(&d.type_arguments);
                    v.node(d.template);
                }
            }
            PROPERTY_ACCESS_EXPRESSION | ELEMENT_ACCESS_EXPRESSION => {
                if let Some(d) = self.get_access_expr(node) {
                    v.node(d.expression);
                    v.node(d.name_or_argument);
                }
            }
            CONDITIONAL_EXPRESSION => {
                if let Some(d) = self.get_conditional_expr(node) {
                    v.node(d.condition);
                    v.node(d.when_true);
                    v.node(d.when_false);
                }
            }
            TEMPLATE_EXPRESSION | TEMPLATE_LITERAL_TYPE => {
                if let Some(d) = self.get_template_expr(node) {
                    v.node(d.head);
                    v.list(&d.template_spans);
                }
            }
            TEMPLATE_SPAN | TEMPLATE_LITERAL_TYPE_SPAN => {
                if let Some(d) = self.get_template_span(node) {
                    v.node(d.expression);
                    v.node(d.literal);
                }
            }
            ARRAY_LITERAL_EXPRESSION | OBJECT_LITERAL_EXPRESSION => {
                if let Some(d) = self.get_literal_expr(node) {
                    v.list(&d.elements);
                }
            }
            PROPERTY_ASSIGNMENT | SHORTHAND_PROPERTY_ASSIGNMENT => {
                if let Some(d) = self.get_property_assignment(node) {
                    v.node(d.name);
                    v.node(d.initializer);
                }
            }
            META_PROPERTY => {
                if let Some(d) = self.get_meta_property(node) {
                    v.node(d.name);
                }
            }
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION => {
                if let Some(d) = self.get_function(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.list(&d.parameters);
                    v.node(d.type_annotation);
                    v.node(d.body);
                }
            }
            METHOD_DECLARATION => {
                if let Some(d) = self.get_method_decl(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.list(&d.parameters);
                    v.node(d.type_annotation);
                    v.node(d.body);
                }
            }
            CONSTRUCTOR => {
                if let Some(d) = self.get_constructor(node) {
                    v.opt_list(&d.modifiers);
                    v.list(&d.parameters);
                    v.node(d.body);
                }
            }
            GET_ACCESSOR | SET_ACCESSOR => {
                if let Some(d) = self.get_accessor(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.list(&d.parameters);
                    v.node(d.type_annotation);
                    v.node(d.body);
                }
            }
            PROPERTY_SIGNATURE | METHOD_SIGNATURE | CALL_SIGNATURE | CONSTRUCT_SIGNATURE => {
                if let Some(d) = self.get_signature(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.opt_list(&d.parameters);
                    v.node(d.type_annotation);
                }
            }
            INDEX_SIGNATURE => {
                if let Some(d) = self.get_index_signature(node) {
                    v.opt_list(&d.modifiers);
                    v.list(&d.parameters);
                    v.node(d.type_annotation);
                }
            }
            PROPERTY_DECLARATION => {
                if let Some(d) = self.get_property_decl(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.node(d.type_annotation);
                    v.node(d.initializer);
                }
            }
            PARAMETER => {
                if let Some(d) = self.get_parameter(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.node(d.type_annotation);
                    v.node(d.initializer);
                }
            }
            TYPE_PARAMETER => {
                if let Some(d) = self.get_type_parameter(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.node(d.constraint);
                    v.node(d.default);
                }
            }
            CLASS_DECLARATION | CLASS_EXPRESSION => {
                if let Some(d) = self.get_class(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.opt_list(&d.heritage_clauses);
                    v.list(&d.members);
                }
            }
            HERITAGE_CLAUSE => {
                if let Some(d) = self.get_heritage_clause(node) {
                    v.list(&d.types);
                }
            }
            EXPRESSION_WITH_TYPE_ARGUMENTS => {
                if let Some(d) = self.get_expr_type_args(node) {
                    v.node(d.expression);
                    v.opt_list(&d.type_arguments);
                }
            }
            INTERFACE_DECLARATION => {
                if let Some(d) = self.get_interface(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.opt_list(&d.heritage_clauses);
                    v.list(&d.members);
                }
            }
            TYPE_ALIAS_DECLARATION => {
                if let Some(d) = self.get_type_alias(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.opt_list(&d.type_parameters);
                    v.node(d.type_node);
                }
            }
            ENUM_DECLARATION => {
                if let Some(d) = self.get_enum(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.list(&d.members);
                }
            }
            ENUM_MEMBER => {
                if let Some(d) = self.get_enum_member(node) {
                    v.node(d.name);
                    v.node(d.initializer);
                }
            }
            MODULE_DECLARATION => {
                if let Some(d) = self.get_module(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.name);
                    v.node(d.body);
                }
            }
            BLOCK | MODULE_BLOCK | CASE_BLOCK | CLASS_STATIC_BLOCK_DECLARATION => {
                if let Some(d) = self.get_block(node) {
                    v.list(&d.statements);
                }
            }
            SOURCE_FILE => {
                if let Some(d) = self.get_source_file(node) {
                    v.list(&d.statements);
                    v.node(d.end_of_file_token);
                }
            }
            VARIABLE_STATEMENT | VARIABLE_DECLARATION_LIST => {
                if let Some(d) = self.get_variable(node) {
                    v.opt_list(&d.modifiers);
                    v.list(&d.declarations);
                }
            }
            VARIABLE_DECLARATION => {
                if let Some(d) = self.get_variable_declaration(node) {
                    v.node(d.name);
                    v.node(d.type_annotation);
                    v.node(d.initializer);
                }
            }
            EXPRESSION_STATEMENT => {
                if let Some(d) = self.get_expression_statement(node) {
                    v.node(d.expression);
                }
            }
            RETURN_STATEMENT | THROW_STATEMENT => {
                if let Some(d) = self.get_return_statement(node) {
                    v.node(d.expression);
                }
            }
            IF_STATEMENT => {
                if let Some(d) = self.get_if_statement(node) {
                    v.node(d.expression);
                    v.node(d.then_statement);
                    v.node(d.else_statement);
                }
            }
            DO_STATEMENT => {
                if let Some(d) = self.get_loop(node) {
                    v.node(d.statement);
                    v.node(d.condition);
                }
            }
            FOR_STATEMENT | WHILE_STATEMENT => {
                if let Some(d) = self.get_loop(node) {
                    v.node(d.initializer);
                    v.node(d.condition);
                    v.node(d.incrementor);
                    v.node(d.statement);
                }
            }
            FOR_IN_STATEMENT | FOR_OF_STATEMENT => {
                if let Some(d) = self.get_for_in_of(node) {
                    v.node(d.initializer);
                    v.node(d.expression);
                    v.node(d.statement);
                }
            }
            SWITCH_STATEMENT => {
                if let Some(d) = self.get_switch(node) {
                    v.node(d.expression);
                    v.node(d.case_block);
                }
            }
            CASE_CLAUSE | DEFAULT_CLAUSE => {
                if let Some(d) = self.get_case_clause(node) {
                    v.node(d.expression);
                    v.list(&d.statements);
                }
            }
            TRY_STATEMENT => {
                if let Some(d) = self.get_try(node) {
                    v.node(d.try_block);
                    v.node(d.catch_clause);
                    v.node(d.finally_block);
                }
            }
            CATCH_CLAUSE => {
                if let Some(d) = self.get_catch_clause(node) {
                    v.node(d.variable_declaration);
                    v.node(d.block);
                }
            }
            LABELED_STATEMENT => {
                if let Some(d) = self.get_labeled_statement(node) {
                    v.node(d.label);
                    v.node(d.statement);
                }
            }
            BREAK_STATEMENT | CONTINUE_STATEMENT => {
                if let Some(d) = self.get_jump_data(node) {
                    v.node(d.label);
                }
            }
            IMPORT_DECLARATION => {
                if let Some(d) = self.get_import_decl(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.import_clause);
                    v.node(d.module_specifier);
                }
            }
            IMPORT_CLAUSE => {
                if let Some(d) = self.get_import_clause(node) {
                    v.node(d.name);
                    v.node(d.named_bindings);
                }
            }
            NAMESPACE_IMPORT | NAMED_IMPORTS | NAMED_EXPORTS | NAMESPACE_EXPORT => {
                if let Some(d) = self.get_named_imports(node) {
                    v.node(d.name);
                    v.list(&d.elements);
                }
            }
            IMPORT_SPECIFIER | EXPORT_SPECIFIER => {
                if let Some(d) = self.get_specifier(node) {
                    v.node(d.property_name);
                    v.node(d.name);
                }
            }
            EXPORT_DECLARATION => {
                if let Some(d) = self.get_export_decl(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.export_clause);
                    v.node(d.module_specifier);
                }
            }
            EXPORT_ASSIGNMENT => {
                if let Some(d) = self.get_export_assignment(node) {
                    v.opt_list(&d.modifiers);
                    v.node(d.expression);
                }
            }
            TYPE_REFERENCE => {
                if let Some(d) = self.get_type_ref(node) {
                    v.node(d.type_name);
                    v.opt_list(&d.type_arguments);
                }
            }
            UNION_TYPE | INTERSECTION_TYPE | TUPLE_TYPE => {
                if let Some(d) = self.get_composite_type(node) {
                    v.list(&d.types);
                }
            }
            FUNCTION_TYPE | CONSTRUCTOR_TYPE => {
                if let Some(d) = self.get_function_type(node) {
                    v.opt_list(&d.type_parameters);
                    v.list(&d.parameters);
                    v.node(d.type_annotation);
                }
            }
            TYPE_QUERY => {
                if let Some(d) = self.get_type_query(node) {
                    v.node(d.expr_name);
                    v.opt_list(&d.type_arguments);
                }
            }
            TYPE_LITERAL => {
                if let Some(d) = self.get_type_literal(node) {
                    v.list(&d.members);
                }
            }
            ARRAY_TYPE => {
                if let Some(d) = self.get_array_type(node) {
                    v.node(d.element_type);
                }
            }
            OPTIONAL_TYPE | REST_TYPE | PARENTHESIZED_TYPE => {
                if let Some(d) = self.get_wrapped_type(node) {
                    v.node(d.type_node);
                }
            }
            TYPE_OPERATOR => {
                if let Some(d) = self.get_type_operator(node) {
                    v.node(d.type_node);
                }
            }
            INDEXED_ACCESS_TYPE => {
                if let Some(d) = self.get_indexed_access_type(node) {
                    v.node(d.object_type);
                    v.node(d.index_type);
                }
            }
            CONDITIONAL_TYPE => {
                if let Some(d) = self.get_conditional_type(node) {
                    v.node(d.check_type);
                    v.node(d.extends_type);
                    v.node(d.true_type);
                    v.node(d.false_type);
                }
            }
            INFER_TYPE => {
                if let Some(d) = self.get_infer_type(node) {
                    v.node(d.type_parameter);
                }
            }
            MAPPED_TYPE => {
                if let Some(d) = self.get_mapped_type(node) {
                    v.node(d.type_parameter);
                    v.node(d.name_type);
                    v.node(d.type_node);
                }
            }
            LITERAL_TYPE => {
                if let Some(d) = self.get_literal_type(node) {
                    v.node(d.literal);
                }
            }
            NAMED_TUPLE_MEMBER => {
                if let Some(d) = self.get_named_tuple_member(node) {
                    v.node(d.name);
                    v.node(d.type_node);
                }
            }
            TYPE_PREDICATE => {
                if let Some(d) = self.get_type_predicate(node) {
                    v.node(d.parameter_name);
                    v.node(d.type_node);
                }
            }
            IMPORT_TYPE => {
                if let Some(d) = self.get_import_type(node) {
                    v.node(d.argument);
                    v.node(d.qualifier);
                    v.opt_list(&d.type_arguments);
                }
            }
            OBJECT_BINDING_PATTERN | ARRAY_BINDING_PATTERN => {
                if let Some(d) = self.get_binding_pattern(node) {
                    v.list(&d.elements);
                }
            }
            BINDING_ELEMENT => {
                if let Some(d) = self.get_binding_element(node) {
                    v.node(d.property_name);
                    v.node(d.name);
                    v.node(d.initializer);
                }
            }
            JSX_ELEMENT => {
                if let Some(d) = self.get_jsx_element(node) {
                    v.node(d.opening_element);
                    v.list(&d.children);
                    v.node(d.closing_element);
                }
            }
            JSX_OPENING_ELEMENT | JSX_SELF_CLOSING_ELEMENT => {
                if let Some(d) = self.get_jsx_opening(node) {
                    v.node(d.tag_name);
                    v.opt_list(&d.type_arguments);
                    v.node(d.attributes);
                }
            }
            JSX_CLOSING_ELEMENT => {
                if let Some(d) = self.get_jsx_closing(node) {
                    v.node(d.tag_name);
                }
            }
            JSX_FRAGMENT => {
                if let Some(d) = self.get_jsx_fragment(node) {
                    v.node(d.opening_fragment);
                    v.list(&d.children);
                    v.node(d.closing_fragment);
                }
            }
            JSX_ATTRIBUTES => {
                if let Some(d) = self.get_jsx_attributes(node) {
                    v.list(&d.properties);
                }
            }
            JSX_ATTRIBUTE => {
                if let Some(d) = self.get_jsx_attribute(node) {
                    v.node(d.name);
                    v.node(d.initializer);
                }
            }
            JSX_EXPRESSION => {
                if let Some(d) = self.get_jsx_expression(node) {
                    v.node(d.expression);
                }
            }
            JSX_NAMESPACED_NAME => {
                if let Some(d) = self.get_jsx_namespaced_name(node) {
                    v.node(d.namespace);
                    v.node(d.name);
                }
            }
            _ => {}
        }
    }
}

struct ChildVisitor<'f, F: FnMut(NodeIndex)> {
    f: &'f mut F,
}

impl<F: FnMut(NodeIndex)> ChildVisitor<'_, F> {
    #[inline]
    fn node(&mut self, index: NodeIndex) {
        if index.is_some() {
            (self.f)(index);
        }
    }

    #[inline]
    fn list(&mut self, list: &NodeList) {
        for index in list.iter() {
            self.node(index);
        }
    }

    #[inline]
    fn opt_list(&mut self, list: &Option<NodeList>) {
        if let Some(list) = list {
            self.list(list);
        }
    }
}
