//! Thin node headers and typed data pools.
//!
//! Each node is a small `Node` header (kind, flags, span, data index). The
//! `data_index` points into the pool selected by `kind`; token nodes such as
//! keywords and `this` carry no data. Parent links and modifier flags live
//! in the parallel `extended_info` vector.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::base::{NodeIndex, NodeList};

/// A thin node header.
///
/// `pos` is the start of the node's first token (leading trivia excluded),
/// `end` the end of its last token. Both are byte offsets.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// `SyntaxKind` value for tokens, `syntax_kind_ext` value for composites
    pub kind: u16,
    /// `node_flags` bits
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    /// Index into the kind's data pool (`NO_DATA` for tokens)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.pos
    }
}

/// Per-node side information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
    /// `ModifierFlags` bits
    pub modifier_flags: u32,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            modifier_flags: 0,
        }
    }
}

// =============================================================================
// Names and literals
// =============================================================================

/// Identifier, PrivateIdentifier
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String, numeric, bigint, regex, template part and JSX text literals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    /// Cooked value
    pub text: String,
    /// Numeric value for numeric literals
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: u16,
    pub right: NodeIndex,
}

/// Prefix/postfix unary expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: u16,
    pub operand: NodeIndex,
}

/// Single-expression wrappers: parenthesized, delete, typeof, void, await,
/// yield, spread, non-null, computed property names, decorators, spread
/// assignments and JSX spread attributes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprDataEx {
    pub expression: NodeIndex,
    /// `yield*`
    pub asterisk_token: bool,
}

/// TypeAssertion, AsExpression, SatisfiesExpression
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAssertionData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

/// CallExpression, NewExpression
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
    /// `None` for `new X` without parentheses
    pub arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub template: NodeIndex,
}

/// PropertyAccessExpression, ElementAccessExpression
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
    pub question_dot_token: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// TemplateExpression, TemplateLiteralType
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateExprData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

/// TemplateSpan, TemplateLiteralTypeSpan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

/// ArrayLiteralExpression, ObjectLiteralExpression
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
    pub multi_line: bool,
}

/// PropertyAssignment, ShorthandPropertyAssignment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    /// For shorthand properties, the `= default` initializer if present
    pub initializer: NodeIndex,
}

/// `new.target`, `import.meta`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetaPropertyData {
    pub keyword_token: u16,
    pub name: NodeIndex,
}

// =============================================================================
// Functions and signatures
// =============================================================================

/// FunctionDeclaration, FunctionExpression, ArrowFunction
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub is_async: bool,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    /// Block, or an expression for concise arrow bodies
    pub body: NodeIndex,
    pub equals_greater_than_token: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub modifiers: Option<NodeList>,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// GetAccessor, SetAccessor
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessorData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

/// PropertySignature, MethodSignature, CallSignature, ConstructSignature
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    /// `None` for property signatures
    pub parameters: Option<NodeList>,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSignatureData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

// =============================================================================
// Classes, interfaces and other declarations
// =============================================================================

/// ClassDeclaration, ClassExpression
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    /// `ExtendsKeyword` or `ImplementsKeyword`
    pub token: u16,
    pub types: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `namespace N {}`, `declare module "m" {}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

// =============================================================================
// Statements
// =============================================================================

/// Block, ModuleBlock, CaseBlock, ClassStaticBlockDeclaration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    #[serde(skip)]
    pub text: Arc<str>,
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    pub is_jsx: bool,
}

/// VariableStatement (declarations = `[declaration_list]`),
/// VariableDeclarationList
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// ReturnStatement, ThrowStatement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// ForStatement, WhileStatement, DoStatement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

/// ForInStatement, ForOfStatement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForInOfData {
    pub await_modifier: bool,
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

/// CaseClause, DefaultClause
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

/// BreakStatement, ContinueStatement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JumpData {
    pub label: NodeIndex,
}

// =============================================================================
// Modules
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    /// Default import binding
    pub name: NodeIndex,
    /// NamespaceImport or NamedImports
    pub named_bindings: NodeIndex,
}

/// NamespaceImport / NamespaceExport (`name`), NamedImports / NamedExports
/// (`elements`)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedImportsData {
    pub name: NodeIndex,
    pub elements: NodeList,
}

/// ImportSpecifier, ExportSpecifier
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecifierData {
    pub is_type_only: bool,
    /// `a` in `a as b`
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    /// NamedExports, NamespaceExport, or NONE for `export *`
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

/// `export default expr` / `export = expr`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    /// Identifier or QualifiedName
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// UnionType, IntersectionType, TupleType
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

/// FunctionType, ConstructorType
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionTypeData {
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub is_abstract: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeQueryData {
    pub expr_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

/// OptionalType, RestType, ParenthesizedType
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

/// `keyof T`, `unique symbol`, `readonly T[]`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeOperatorData {
    pub operator: u16,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexedAccessTypeData {
    pub object_type: NodeIndex,
    pub index_type: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalTypeData {
    pub check_type: NodeIndex,
    pub extends_type: NodeIndex,
    pub true_type: NodeIndex,
    pub false_type: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InferTypeData {
    pub type_parameter: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MappedTypeData {
    /// ReadonlyKeyword, PlusToken, MinusToken, or 0
    pub readonly_token: u16,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    /// QuestionToken, PlusToken, MinusToken, or 0
    pub question_token: u16,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedTupleMemberData {
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypePredicateData {
    pub asserts_modifier: bool,
    pub parameter_name: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportTypeData {
    pub is_type_of: bool,
    pub argument: NodeIndex,
    pub qualifier: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

// =============================================================================
// Binding patterns
// =============================================================================

/// ObjectBindingPattern, ArrayBindingPattern
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    /// Identifier or nested pattern; NONE for array holes
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

// =============================================================================
// JSX
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxElementData {
    pub opening_element: NodeIndex,
    pub children: NodeList,
    pub closing_element: NodeIndex,
}

/// JsxOpeningElement, JsxSelfClosingElement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxOpeningData {
    pub tag_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub attributes: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxClosingData {
    pub tag_name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxFragmentData {
    pub opening_fragment: NodeIndex,
    pub children: NodeList,
    pub closing_fragment: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxAttributesData {
    pub properties: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxAttributeData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxExpressionData {
    pub dot_dot_dot_token: bool,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsxNamespacedNameData {
    pub namespace: NodeIndex,
    pub name: NodeIndex,
}

// =============================================================================
// Arena
// =============================================================================

/// Flat storage for one parsed file.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,

    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub qualified_names: Vec<QualifiedNameData>,

    pub binary_exprs: Vec<BinaryExprData>,
    pub unary_exprs: Vec<UnaryExprData>,
    pub unary_exprs_ex: Vec<UnaryExprDataEx>,
    pub type_assertions: Vec<TypeAssertionData>,
    pub call_exprs: Vec<CallExprData>,
    pub tagged_templates: Vec<TaggedTemplateData>,
    pub access_exprs: Vec<AccessExprData>,
    pub conditional_exprs: Vec<ConditionalExprData>,
    pub template_exprs: Vec<TemplateExprData>,
    pub template_spans: Vec<TemplateSpanData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub property_assignments: Vec<PropertyAssignmentData>,
    pub meta_properties: Vec<MetaPropertyData>,

    pub functions: Vec<FunctionData>,
    pub method_decls: Vec<MethodDeclData>,
    pub constructors: Vec<ConstructorData>,
    pub accessors: Vec<AccessorData>,
    pub signatures: Vec<SignatureData>,
    pub index_signatures: Vec<IndexSignatureData>,
    pub property_decls: Vec<PropertyDeclData>,
    pub parameters: Vec<ParameterData>,
    pub type_parameters: Vec<TypeParameterData>,

    pub classes: Vec<ClassData>,
    pub heritage_clauses: Vec<HeritageData>,
    pub expr_with_type_args: Vec<ExprWithTypeArgsData>,
    pub interfaces: Vec<InterfaceData>,
    pub type_aliases: Vec<TypeAliasData>,
    pub enums: Vec<EnumData>,
    pub enum_members: Vec<EnumMemberData>,
    pub modules: Vec<ModuleData>,

    pub blocks: Vec<BlockData>,
    pub source_files: Vec<SourceFileData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub return_data: Vec<ReturnData>,
    pub if_statements: Vec<IfStatementData>,
    pub loops: Vec<LoopData>,
    pub for_in_of: Vec<ForInOfData>,
    pub switch_data: Vec<SwitchData>,
    pub case_clauses: Vec<CaseClauseData>,
    pub try_data: Vec<TryData>,
    pub catch_clauses: Vec<CatchClauseData>,
    pub labeled_data: Vec<LabeledData>,
    pub jump_data: Vec<JumpData>,

    pub import_decls: Vec<ImportDeclData>,
    pub import_clauses: Vec<ImportClauseData>,
    pub named_imports: Vec<NamedImportsData>,
    pub specifiers: Vec<SpecifierData>,
    pub export_decls: Vec<ExportDeclData>,
    pub export_assignments: Vec<ExportAssignmentData>,

    pub type_refs: Vec<TypeRefData>,
    pub composite_types: Vec<CompositeTypeData>,
    pub function_types: Vec<FunctionTypeData>,
    pub type_queries: Vec<TypeQueryData>,
    pub type_literals: Vec<TypeLiteralData>,
    pub array_types: Vec<ArrayTypeData>,
    pub wrapped_types: Vec<WrappedTypeData>,
    pub type_operators: Vec<TypeOperatorData>,
    pub indexed_access_types: Vec<IndexedAccessTypeData>,
    pub conditional_types: Vec<ConditionalTypeData>,
    pub infer_types: Vec<InferTypeData>,
    pub mapped_types: Vec<MappedTypeData>,
    pub literal_types: Vec<LiteralTypeData>,
    pub named_tuple_members: Vec<NamedTupleMemberData>,
    pub type_predicates: Vec<TypePredicateData>,
    pub import_types: Vec<ImportTypeData>,

    pub binding_patterns: Vec<BindingPatternData>,
    pub binding_elements: Vec<BindingElementData>,

    pub jsx_elements: Vec<JsxElementData>,
    pub jsx_opening: Vec<JsxOpeningData>,
    pub jsx_closing: Vec<JsxClosingData>,
    pub jsx_fragments: Vec<JsxFragmentData>,
    pub jsx_attributes: Vec<JsxAttributesData>,
    pub jsx_attribute: Vec<JsxAttributeData>,
    pub jsx_expressions: Vec<JsxExpressionData>,
    pub jsx_namespaced_names: Vec<JsxNamespacedNameData>,
}
