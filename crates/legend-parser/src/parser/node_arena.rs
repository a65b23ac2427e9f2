//! NodeArena creation methods (add_* methods).
//!
//! Nodes are built bottom-up: children exist before their parent, so every
//! `add_*` call links the new node as the parent of its children.

use smallvec::SmallVec;

use super::base::NodeIndex;
use super::flags::ModifierFlags;
use super::node::*;

macro_rules! add_methods {
    ($( $(#[$meta:meta])* $name:ident($ty:ty) => $pool:ident; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, kind: u16, pos: u32, end: u32, data: $ty) -> NodeIndex {
                let data_index = self.$pool.len() as u32;
                self.$pool.push(data);
                self.push_node(Node::with_data(kind, pos, end, data_index))
            }
        )*
    };
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena sized for roughly `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            extended_info: Vec::with_capacity(capacity),
            identifiers: Vec::with_capacity(capacity / 4),
            literals: Vec::with_capacity(capacity / 8),
            call_exprs: Vec::with_capacity(capacity / 8),
            access_exprs: Vec::with_capacity(capacity / 8),
            source_files: Vec::with_capacity(1),
            ..NodeArena::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        self.adopt_children(index);
        index
    }

    /// Point every child of `parent` back at it.
    fn adopt_children(&mut self, parent: NodeIndex) {
        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        self.for_each_child(parent, |child| children.push(child));
        for child in children {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_none() {
            return;
        }
        if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
            info.parent = parent;
        }
    }

    pub fn set_modifier_flags(&mut self, index: NodeIndex, flags: ModifierFlags) {
        if let Some(info) = self.get_extended_mut(index) {
            info.modifier_flags = flags.bits();
        }
    }

    pub fn set_node_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.get_mut(index) {
            node.flags |= flags;
        }
    }

    /// Re-link children after a node's data was patched in place.
    pub fn relink_children(&mut self, parent: NodeIndex) {
        self.adopt_children(parent);
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    /// Add a token node (keywords, `this`, omitted expressions, ...).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    add_methods! {
        add_identifier(IdentifierData) => identifiers;
        add_literal(LiteralData) => literals;
        add_qualified_name(QualifiedNameData) => qualified_names;

        add_binary_expr(BinaryExprData) => binary_exprs;
        add_unary_expr(UnaryExprData) => unary_exprs;
        add_unary_expr_ex(UnaryExprDataEx) => unary_exprs_ex;
        add_type_assertion(TypeAssertionData) => type_assertions;
        add_call_expr(CallExprData) => call_exprs;
        add_tagged_template(TaggedTemplateData) => tagged_templates;
        add_access_expr(AccessExprData) => access_exprs;
        add_conditional_expr(ConditionalExprData) => conditional_exprs;
        add_template_expr(TemplateExprData) => template_exprs;
        add_template_span(TemplateSpanData) => template_spans;
        add_literal_expr(LiteralExprData) => literal_exprs;
        add_property_assignment(PropertyAssignmentData) => property_assignments;
        add_meta_property(MetaPropertyData) => meta_properties;

        add_function(FunctionData) => functions;
        add_method_decl(MethodDeclData) => method_decls;
        add_constructor(ConstructorData) => constructors;
        add_accessor(AccessorData) => accessors;
        add_signature(SignatureData) => signatures;
        add_index_signature(IndexSignatureData) => index_signatures;
        add_property_decl(PropertyDeclData) => property_decls;
        add_parameter(ParameterData) => parameters;
        add_type_parameter(TypeParameterData) => type_parameters;

        add_class(ClassData) => classes;
        add_heritage_clause(HeritageData) => heritage_clauses;
        add_expr_with_type_args(ExprWithTypeArgsData) => expr_with_type_args;
        add_interface(InterfaceData) => interfaces;
        add_type_alias(TypeAliasData) => type_aliases;
        add_enum(EnumData) => enums;
        add_enum_member(EnumMemberData) => enum_members;
        add_module(ModuleData) => modules;

        add_block(BlockData) => blocks;
        add_source_file(SourceFileData) => source_files;
        add_variable(VariableData) => variables;
        add_variable_declaration(VariableDeclarationData) => variable_declarations;
        add_expr_statement(ExprStatementData) => expr_statements;
        add_return(ReturnData) => return_data;
        add_if_statement(IfStatementData) => if_statements;
        add_loop(LoopData) => loops;
        add_for_in_of(ForInOfData) => for_in_of;
        add_switch(SwitchData) => switch_data;
        add_case_clause(CaseClauseData) => case_clauses;
        add_try(TryData) => try_data;
        add_catch_clause(CatchClauseData) => catch_clauses;
        add_labeled(LabeledData) => labeled_data;
        add_jump(JumpData) => jump_data;

        add_import_decl(ImportDeclData) => import_decls;
        add_import_clause(ImportClauseData) => import_clauses;
        add_named_imports(NamedImportsData) => named_imports;
        add_specifier(SpecifierData) => specifiers;
        add_export_decl(ExportDeclData) => export_decls;
        add_export_assignment(ExportAssignmentData) => export_assignments;

        add_type_ref(TypeRefData) => type_refs;
        add_composite_type(CompositeTypeData) => composite_types;
        add_function_type(FunctionTypeData) => function_types;
        add_type_query(TypeQueryData) => type_queries;
        add_type_literal(TypeLiteralData) => type_literals;
        add_array_type(ArrayTypeData) => array_types;
        add_wrapped_type(WrappedTypeData) => wrapped_types;
        add_type_operator(TypeOperatorData) => type_operators;
        add_indexed_access_type(IndexedAccessTypeData) => indexed_access_types;
        add_conditional_type(ConditionalTypeData) => conditional_types;
        add_infer_type(InferTypeData) => infer_types;
        add_mapped_type(MappedTypeData) => mapped_types;
        add_literal_type(LiteralTypeData) => literal_types;
        add_named_tuple_member(NamedTupleMemberData) => named_tuple_members;
        add_type_predicate(TypePredicateData) => type_predicates;
        add_import_type(ImportTypeData) => import_types;

        add_binding_pattern(BindingPatternData) => binding_patterns;
        add_binding_element(BindingElementData) => binding_elements;

        add_jsx_element(JsxElementData) => jsx_elements;
        add_jsx_opening(JsxOpeningData) => jsx_opening;
        add_jsx_closing(JsxClosingData) => jsx_closing;
        add_jsx_fragment(JsxFragmentData) => jsx_fragments;
        add_jsx_attributes(JsxAttributesData) => jsx_attributes;
        add_jsx_attribute(JsxAttributeData) => jsx_attribute;
        add_jsx_expression(JsxExpressionData) => jsx_expressions;
        add_jsx_namespaced_name(JsxNamespacedNameData) => jsx_namespaced_names;
    }
}
