//! Node kinds above the token range.
//!
//! Tokens and keywords use their `SyntaxKind` value directly; composite
//! nodes use these constants, which start above `SyntaxKind::LAST_TOKEN`.

/// First composite node kind.
pub const FIRST_NODE: u16 = 300;

// Names
pub const QUALIFIED_NAME: u16 = 300;
pub const COMPUTED_PROPERTY_NAME: u16 = 301;

// Signature elements
pub const TYPE_PARAMETER: u16 = 302;
pub const PARAMETER: u16 = 303;
pub const DECORATOR: u16 = 304;

// Type members
pub const PROPERTY_SIGNATURE: u16 = 305;
pub const PROPERTY_DECLARATION: u16 = 306;
pub const METHOD_SIGNATURE: u16 = 307;
pub const METHOD_DECLARATION: u16 = 308;
pub const CLASS_STATIC_BLOCK_DECLARATION: u16 = 309;
pub const CONSTRUCTOR: u16 = 310;
pub const GET_ACCESSOR: u16 = 311;
pub const SET_ACCESSOR: u16 = 312;
pub const CALL_SIGNATURE: u16 = 313;
pub const CONSTRUCT_SIGNATURE: u16 = 314;
pub const INDEX_SIGNATURE: u16 = 315;

// Types
pub const TYPE_PREDICATE: u16 = 316;
pub const TYPE_REFERENCE: u16 = 317;
pub const FUNCTION_TYPE: u16 = 318;
pub const CONSTRUCTOR_TYPE: u16 = 319;
pub const TYPE_QUERY: u16 = 320;
pub const TYPE_LITERAL: u16 = 321;
pub const ARRAY_TYPE: u16 = 322;
pub const TUPLE_TYPE: u16 = 323;
pub const OPTIONAL_TYPE: u16 = 324;
pub const REST_TYPE: u16 = 325;
pub const UNION_TYPE: u16 = 326;
pub const INTERSECTION_TYPE: u16 = 327;
pub const CONDITIONAL_TYPE: u16 = 328;
pub const INFER_TYPE: u16 = 329;
pub const PARENTHESIZED_TYPE: u16 = 330;
pub const THIS_TYPE: u16 = 331;
pub const TYPE_OPERATOR: u16 = 332;
pub const INDEXED_ACCESS_TYPE: u16 = 333;
pub const MAPPED_TYPE: u16 = 334;
pub const LITERAL_TYPE: u16 = 335;
pub const NAMED_TUPLE_MEMBER: u16 = 336;
pub const TEMPLATE_LITERAL_TYPE: u16 = 337;
pub const TEMPLATE_LITERAL_TYPE_SPAN: u16 = 338;
pub const IMPORT_TYPE: u16 = 339;

// Binding patterns
pub const OBJECT_BINDING_PATTERN: u16 = 340;
pub const ARRAY_BINDING_PATTERN: u16 = 341;
pub const BINDING_ELEMENT: u16 = 342;

// Expressions
pub const ARRAY_LITERAL_EXPRESSION: u16 = 343;
pub const OBJECT_LITERAL_EXPRESSION: u16 = 344;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 345;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 346;
pub const CALL_EXPRESSION: u16 = 347;
pub const NEW_EXPRESSION: u16 = 348;
pub const TAGGED_TEMPLATE_EXPRESSION: u16 = 349;
pub const TYPE_ASSERTION: u16 = 350;
pub const PARENTHESIZED_EXPRESSION: u16 = 351;
pub const FUNCTION_EXPRESSION: u16 = 352;
pub const ARROW_FUNCTION: u16 = 353;
pub const DELETE_EXPRESSION: u16 = 354;
pub const TYPE_OF_EXPRESSION: u16 = 355;
pub const VOID_EXPRESSION: u16 = 356;
pub const AWAIT_EXPRESSION: u16 = 357;
pub const PREFIX_UNARY_EXPRESSION: u16 = 358;
pub const POSTFIX_UNARY_EXPRESSION: u16 = 359;
pub const BINARY_EXPRESSION: u16 = 360;
pub const CONDITIONAL_EXPRESSION: u16 = 361;
pub const TEMPLATE_EXPRESSION: u16 = 362;
pub const YIELD_EXPRESSION: u16 = 363;
pub const SPREAD_ELEMENT: u16 = 364;
pub const CLASS_EXPRESSION: u16 = 365;
pub const OMITTED_EXPRESSION: u16 = 366;
pub const EXPRESSION_WITH_TYPE_ARGUMENTS: u16 = 367;
pub const AS_EXPRESSION: u16 = 368;
pub const NON_NULL_EXPRESSION: u16 = 369;
pub const META_PROPERTY: u16 = 370;
pub const SATISFIES_EXPRESSION: u16 = 371;

// Misc
pub const TEMPLATE_SPAN: u16 = 372;
pub const SEMICOLON_CLASS_ELEMENT: u16 = 373;

// Statements
pub const BLOCK: u16 = 374;
pub const EMPTY_STATEMENT: u16 = 375;
pub const VARIABLE_STATEMENT: u16 = 376;
pub const EXPRESSION_STATEMENT: u16 = 377;
pub const IF_STATEMENT: u16 = 378;
pub const DO_STATEMENT: u16 = 379;
pub const WHILE_STATEMENT: u16 = 380;
pub const FOR_STATEMENT: u16 = 381;
pub const FOR_IN_STATEMENT: u16 = 382;
pub const FOR_OF_STATEMENT: u16 = 383;
pub const CONTINUE_STATEMENT: u16 = 384;
pub const BREAK_STATEMENT: u16 = 385;
pub const RETURN_STATEMENT: u16 = 386;
pub const SWITCH_STATEMENT: u16 = 387;
pub const LABELED_STATEMENT: u16 = 388;
pub const THROW_STATEMENT: u16 = 389;
pub const TRY_STATEMENT: u16 = 390;
pub const DEBUGGER_STATEMENT: u16 = 391;

// Declarations
pub const VARIABLE_DECLARATION: u16 = 392;
pub const VARIABLE_DECLARATION_LIST: u16 = 393;
pub const FUNCTION_DECLARATION: u16 = 394;
pub const CLASS_DECLARATION: u16 = 395;
pub const INTERFACE_DECLARATION: u16 = 396;
pub const TYPE_ALIAS_DECLARATION: u16 = 397;
pub const ENUM_DECLARATION: u16 = 398;
pub const MODULE_DECLARATION: u16 = 399;
pub const MODULE_BLOCK: u16 = 400;
pub const CASE_BLOCK: u16 = 401;
pub const IMPORT_DECLARATION: u16 = 402;
pub const IMPORT_CLAUSE: u16 = 403;
pub const NAMESPACE_IMPORT: u16 = 404;
pub const NAMED_IMPORTS: u16 = 405;
pub const IMPORT_SPECIFIER: u16 = 406;
pub const EXPORT_ASSIGNMENT: u16 = 407;
pub const EXPORT_DECLARATION: u16 = 408;
pub const NAMED_EXPORTS: u16 = 409;
pub const NAMESPACE_EXPORT: u16 = 410;
pub const EXPORT_SPECIFIER: u16 = 411;

// JSX
pub const JSX_ELEMENT: u16 = 412;
pub const JSX_SELF_CLOSING_ELEMENT: u16 = 413;
pub const JSX_OPENING_ELEMENT: u16 = 414;
pub const JSX_CLOSING_ELEMENT: u16 = 415;
pub const JSX_FRAGMENT: u16 = 416;
pub const JSX_OPENING_FRAGMENT: u16 = 417;
pub const JSX_CLOSING_FRAGMENT: u16 = 418;
pub const JSX_ATTRIBUTE: u16 = 419;
pub const JSX_ATTRIBUTES: u16 = 420;
pub const JSX_SPREAD_ATTRIBUTE: u16 = 421;
pub const JSX_EXPRESSION: u16 = 422;
pub const JSX_NAMESPACED_NAME: u16 = 423;

// Clauses
pub const CASE_CLAUSE: u16 = 424;
pub const DEFAULT_CLAUSE: u16 = 425;
pub const HERITAGE_CLAUSE: u16 = 426;
pub const CATCH_CLAUSE: u16 = 427;

// Property assignments
pub const PROPERTY_ASSIGNMENT: u16 = 428;
pub const SHORTHAND_PROPERTY_ASSIGNMENT: u16 = 429;
pub const SPREAD_ASSIGNMENT: u16 = 430;

// Enum
pub const ENUM_MEMBER: u16 = 431;

// Top level
pub const SOURCE_FILE: u16 = 432;

pub const LAST_NODE: u16 = 432;

/// Debug name of a composite node kind (`None` for tokens).
pub fn kind_name(kind: u16) -> Option<&'static str> {
    Some(match kind {
        QUALIFIED_NAME => "QualifiedName",
        COMPUTED_PROPERTY_NAME => "ComputedPropertyName",
        TYPE_PARAMETER => "TypeParameter",
        PARAMETER => "Parameter",
        DECORATOR => "Decorator",
        PROPERTY_SIGNATURE => "PropertySignature",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        METHOD_SIGNATURE => "MethodSignature",
        METHOD_DECLARATION => "MethodDeclaration",
        CLASS_STATIC_BLOCK_DECLARATION => "ClassStaticBlockDeclaration",
        CONSTRUCTOR => "Constructor",
        GET_ACCESSOR => "GetAccessor",
        SET_ACCESSOR => "SetAccessor",
        CALL_SIGNATURE => "CallSignature",
        CONSTRUCT_SIGNATURE => "ConstructSignature",
        INDEX_SIGNATURE => "IndexSignature",
        TYPE_PREDICATE => "TypePredicate",
        TYPE_REFERENCE => "TypeReference",
        FUNCTION_TYPE => "FunctionType",
        CONSTRUCTOR_TYPE => "ConstructorType",
        TYPE_QUERY => "TypeQuery",
        TYPE_LITERAL => "TypeLiteral",
        ARRAY_TYPE => "ArrayType",
        TUPLE_TYPE => "TupleType",
        OPTIONAL_TYPE => "OptionalType",
        REST_TYPE => "RestType",
        UNION_TYPE => "UnionType",
        INTERSECTION_TYPE => "IntersectionType",
        CONDITIONAL_TYPE => "ConditionalType",
        INFER_TYPE => "InferType",
        PARENTHESIZED_TYPE => "ParenthesizedType",
        THIS_TYPE => "ThisType",
        TYPE_OPERATOR => "TypeOperator",
        INDEXED_ACCESS_TYPE => "IndexedAccessType",
        MAPPED_TYPE => "MappedType",
        LITERAL_TYPE => "LiteralType",
        NAMED_TUPLE_MEMBER => "NamedTupleMember",
        TEMPLATE_LITERAL_TYPE => "TemplateLiteralType",
        TEMPLATE_LITERAL_TYPE_SPAN => "TemplateLiteralTypeSpan",
        IMPORT_TYPE => "ImportType",
        OBJECT_BINDING_PATTERN => "ObjectBindingPattern",
        ARRAY_BINDING_PATTERN => "ArrayBindingPattern",
        BINDING_ELEMENT => "BindingElement",
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CALL_EXPRESSION => "CallExpression",
        NEW_EXPRESSION => "NewExpression",
        TAGGED_TEMPLATE_EXPRESSION => "TaggedTemplateExpression",
        TYPE_ASSERTION => "TypeAssertion",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        FUNCTION_EXPRESSION => "FunctionExpression",
        ARROW_FUNCTION => "ArrowFunction",
        DELETE_EXPRESSION => "DeleteExpression",
        TYPE_OF_EXPRESSION => "TypeOfExpression",
        VOID_EXPRESSION => "VoidExpression",
        AWAIT_EXPRESSION => "AwaitExpression",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        POSTFIX_UNARY_EXPRESSION => "PostfixUnaryExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        TEMPLATE_EXPRESSION => "TemplateExpression",
        YIELD_EXPRESSION => "YieldExpression",
        SPREAD_ELEMENT => "SpreadElement",
        CLASS_EXPRESSION => "ClassExpression",
        OMITTED_EXPRESSION => "OmittedExpression",
        EXPRESSION_WITH_TYPE_ARGUMENTS => "ExpressionWithTypeArguments",
        AS_EXPRESSION => "AsExpression",
        NON_NULL_EXPRESSION => "NonNullExpression",
        META_PROPERTY => "MetaProperty",
        SATISFIES_EXPRESSION => "SatisfiesExpression",
        TEMPLATE_SPAN => "TemplateSpan",
        SEMICOLON_CLASS_ELEMENT => "SemicolonClassElement",
        BLOCK => "Block",
        EMPTY_STATEMENT => "EmptyStatement",
        VARIABLE_STATEMENT => "VariableStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        IF_STATEMENT => "IfStatement",
        DO_STATEMENT => "DoStatement",
        WHILE_STATEMENT => "WhileStatement",
        FOR_STATEMENT => "ForStatement",
        FOR_IN_STATEMENT => "ForInStatement",
        FOR_OF_STATEMENT => "ForOfStatement",
        CONTINUE_STATEMENT => "ContinueStatement",
        BREAK_STATEMENT => "BreakStatement",
        RETURN_STATEMENT => "ReturnStatement",
        SWITCH_STATEMENT => "SwitchStatement",
        LABELED_STATEMENT => "LabeledStatement",
        THROW_STATEMENT => "ThrowStatement",
        TRY_STATEMENT => "TryStatement",
        DEBUGGER_STATEMENT => "DebuggerStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        VARIABLE_DECLARATION_LIST => "VariableDeclarationList",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        CLASS_DECLARATION => "ClassDeclaration",
        INTERFACE_DECLARATION => "InterfaceDeclaration",
        TYPE_ALIAS_DECLARATION => "TypeAliasDeclaration",
        ENUM_DECLARATION => "EnumDeclaration",
        MODULE_DECLARATION => "ModuleDeclaration",
        MODULE_BLOCK => "ModuleBlock",
        CASE_BLOCK => "CaseBlock",
        IMPORT_DECLARATION => "ImportDeclaration",
        IMPORT_CLAUSE => "ImportClause",
        NAMESPACE_IMPORT => "NamespaceImport",
        NAMED_IMPORTS => "NamedImports",
        IMPORT_SPECIFIER => "ImportSpecifier",
        EXPORT_ASSIGNMENT => "ExportAssignment",
        EXPORT_DECLARATION => "ExportDeclaration",
        NAMED_EXPORTS => "NamedExports",
        NAMESPACE_EXPORT => "NamespaceExport",
        EXPORT_SPECIFIER => "ExportSpecifier",
        JSX_ELEMENT => "JsxElement",
        JSX_SELF_CLOSING_ELEMENT => "JsxSelfClosingElement",
        JSX_OPENING_ELEMENT => "JsxOpeningElement",
        JSX_CLOSING_ELEMENT => "JsxClosingElement",
        JSX_FRAGMENT => "JsxFragment",
        JSX_OPENING_FRAGMENT => "JsxOpeningFragment",
        JSX_CLOSING_FRAGMENT => "JsxClosingFragment",
        JSX_ATTRIBUTE => "JsxAttribute",
        JSX_ATTRIBUTES => "JsxAttributes",
        JSX_SPREAD_ATTRIBUTE => "JsxSpreadAttribute",
        JSX_EXPRESSION => "JsxExpression",
        JSX_NAMESPACED_NAME => "JsxNamespacedName",
        CASE_CLAUSE => "CaseClause",
        DEFAULT_CLAUSE => "DefaultClause",
        HERITAGE_CLAUSE => "HeritageClause",
        CATCH_CLAUSE => "CatchClause",
        PROPERTY_ASSIGNMENT => "PropertyAssignment",
        SHORTHAND_PROPERTY_ASSIGNMENT => "ShorthandPropertyAssignment",
        SPREAD_ASSIGNMENT => "SpreadAssignment",
        ENUM_MEMBER => "EnumMember",
        SOURCE_FILE => "SourceFile",
        _ => return None,
    })
}

/// True for function-like nodes that own a body.
pub fn is_function_like(kind: u16) -> bool {
    matches!(
        kind,
        FUNCTION_DECLARATION
            | FUNCTION_EXPRESSION
            | ARROW_FUNCTION
            | METHOD_DECLARATION
            | CONSTRUCTOR
            | GET_ACCESSOR
            | SET_ACCESSOR
    )
}

pub fn is_class_like(kind: u16) -> bool {
    matches!(kind, CLASS_DECLARATION | CLASS_EXPRESSION)
}

pub fn is_jsx_markup(kind: u16) -> bool {
    matches!(kind, JSX_ELEMENT | JSX_SELF_CLOSING_ELEMENT | JSX_FRAGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use legend_scanner::SyntaxKind;

    #[test]
    fn node_kinds_start_above_tokens() {
        assert!(FIRST_NODE > SyntaxKind::LAST_TOKEN as u16);
        assert_eq!(QUALIFIED_NAME, FIRST_NODE);
        assert_eq!(kind_name(SOURCE_FILE), Some("SourceFile"));
        assert_eq!(kind_name(LAST_NODE), Some("SourceFile"));
        assert_eq!(kind_name(SyntaxKind::Identifier as u16), None);
    }
}
