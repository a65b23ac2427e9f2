use super::{diagnostic_codes, first_initializer, parse, statements};
use crate::parser::flags::{ModifierFlags, node_flags};
use crate::parser::syntax_kind_ext;
use legend_scanner::SyntaxKind;

#[test]
fn test_parse_empty_file() {
    let (parser, root) = parse("empty.ts", "");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());
    assert!(statements(arena, root).is_empty());
    assert_eq!(arena.kind_of(root), Some(syntax_kind_ext::SOURCE_FILE));
}

#[test]
fn test_parse_const_declaration() {
    let (parser, root) = parse("test.ts", "const count = 1;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    assert_eq!(stmts.len(), 1);
    assert_eq!(arena.kind_of(stmts[0]), Some(syntax_kind_ext::VARIABLE_STATEMENT));

    let init = first_initializer(arena, stmts[0]);
    assert_eq!(arena.kind_of(init), Some(SyntaxKind::NumericLiteral as u16));
    assert_eq!(arena.literal_text(init), Some("1"));
}

#[test]
fn test_declaration_list_carries_const_flag() {
    let (parser, root) = parse("test.ts", "const a = 1;\nlet b = 2;");
    let arena = parser.get_arena();
    let stmts = statements(arena, root);
    assert_eq!(stmts.len(), 2);

    let list_flags = |stmt| {
        let list = arena
            .get(stmt)
            .and_then(|n| arena.get_variable(n))
            .and_then(|v| v.declarations.first())
            .unwrap();
        arena.get(list).unwrap().flags
    };
    assert_ne!(list_flags(stmts[0]) & node_flags::CONST, 0);
    assert_ne!(list_flags(stmts[1]) & node_flags::LET, 0);
}

#[test]
fn test_missing_expression_reports_diagnostic() {
    let (parser, _) = parse("test.ts", "let x = ;");
    assert!(diagnostic_codes(&parser).contains(&1109));
}

#[test]
fn test_parent_links_reach_source_file() {
    let (parser, root) = parse("test.ts", "function f() { return a.b.c; }");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    let func = arena.get(stmts[0]).and_then(|n| arena.get_function(n)).unwrap();
    assert_eq!(arena.identifier_text(func.name), Some("f"));
    assert_eq!(arena.parent_of(func.name), stmts[0]);
    assert_eq!(arena.parent_of(stmts[0]), root);
    assert_eq!(arena.parent_of(func.body), stmts[0]);
}

#[test]
fn test_class_extends_property_access() {
    let source = "class Counter extends React.Component<Props> {\n  count = 0;\n  render() { return null; }\n}";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    let class = arena.get(stmts[0]).and_then(|n| arena.get_class(n)).unwrap();
    assert_eq!(arena.identifier_text(class.name), Some("Counter"));
    assert_eq!(class.members.len(), 2);

    let clause = class.heritage_clauses.as_ref().and_then(|c| c.first()).unwrap();
    let heritage = arena.get(clause).and_then(|n| arena.get_heritage_clause(n)).unwrap();
    assert_eq!(heritage.token, SyntaxKind::ExtendsKeyword as u16);

    let base = arena
        .get(heritage.types.first().unwrap())
        .and_then(|n| arena.get_expr_type_args(n))
        .unwrap();
    assert_eq!(
        arena.kind_of(base.expression),
        Some(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION)
    );
    assert_eq!(base.type_arguments.as_ref().map(|t| t.len()), Some(1));
    assert_eq!(arena.node_text(base.expression, source), Some("React.Component"));
}

#[test]
fn test_arrow_function_with_annotations() {
    let (parser, root) = parse("test.ts", "const inc = (a: number): number => a + 1;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let arrow = arena.get(init).and_then(|n| arena.get_function(n)).unwrap();
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::ARROW_FUNCTION));
    assert_eq!(arrow.parameters.len(), 1);
    assert!(arrow.type_annotation.is_some());
    assert_eq!(
        arena.kind_of(arrow.body),
        Some(syntax_kind_ext::BINARY_EXPRESSION)
    );
}

#[test]
fn test_async_simple_arrow() {
    let (parser, root) = parse("test.ts", "const load = async x => await x;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::ARROW_FUNCTION));
    assert!(arena.modifier_flags(init).contains(ModifierFlags::ASYNC));
}

#[test]
fn test_parenthesized_expression_is_not_arrow() {
    let (parser, root) = parse("test.ts", "const v = (a + b) * c;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let binary = arena.get(init).and_then(|n| arena.get_binary_expr(n)).unwrap();
    assert_eq!(binary.operator_token, SyntaxKind::AsteriskToken as u16);
    assert_eq!(
        arena.kind_of(binary.left),
        Some(syntax_kind_ext::PARENTHESIZED_EXPRESSION)
    );
}

#[test]
fn test_generic_call_expression() {
    let source = "const name = useSelector<string>(() => state$.name.get());";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let call = arena.get(init).and_then(|n| arena.get_call_expr(n)).unwrap();
    assert_eq!(arena.identifier_text(call.expression), Some("useSelector"));
    assert_eq!(call.type_arguments.as_ref().map(|t| t.len()), Some(1));
    assert_eq!(call.arguments.as_ref().map(|a| a.len()), Some(1));
}

#[test]
fn test_less_than_comparison_is_not_generic_call() {
    let (parser, root) = parse("test.ts", "const ok = a < b && c > (d);");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let binary = arena.get(init).and_then(|n| arena.get_binary_expr(n)).unwrap();
    assert_eq!(
        binary.operator_token,
        SyntaxKind::AmpersandAmpersandToken as u16
    );
}

#[test]
fn test_optional_chain_call() {
    let (parser, root) = parse("test.ts", "obs?.peek?.();");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmt = statements(arena, root)[0];
    let expr = arena
        .get(stmt)
        .and_then(|n| arena.get_expression_statement(n))
        .map(|s| s.expression)
        .unwrap();
    let call = arena.get(expr).unwrap();
    assert_eq!(call.kind, syntax_kind_ext::CALL_EXPRESSION);
    assert_ne!(call.flags & node_flags::OPTIONAL_CHAIN, 0);
}

#[test]
fn test_import_forms() {
    let source = "import React, { Component as Base } from \"react\";\nimport * as legend from '@legendapp/state';\nimport type { Observable } from \"@legendapp/state\";\nimport \"./side-effect\";";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    assert_eq!(stmts.len(), 4);

    let decl = arena.get(stmts[0]).and_then(|n| arena.get_import_decl(n)).unwrap();
    assert_eq!(arena.literal_text(decl.module_specifier), Some("react"));
    let clause = arena.get(decl.import_clause).and_then(|n| arena.get_import_clause(n)).unwrap();
    assert_eq!(arena.identifier_text(clause.name), Some("React"));
    let named = arena
        .get(clause.named_bindings)
        .and_then(|n| arena.get_named_imports(n))
        .unwrap();
    let spec = arena
        .get(named.elements.first().unwrap())
        .and_then(|n| arena.get_specifier(n))
        .unwrap();
    assert_eq!(arena.identifier_text(spec.property_name), Some("Component"));
    assert_eq!(arena.identifier_text(spec.name), Some("Base"));

    let decl = arena.get(stmts[1]).and_then(|n| arena.get_import_decl(n)).unwrap();
    let clause = arena.get(decl.import_clause).and_then(|n| arena.get_import_clause(n)).unwrap();
    assert_eq!(
        arena.kind_of(clause.named_bindings),
        Some(syntax_kind_ext::NAMESPACE_IMPORT)
    );

    let decl = arena.get(stmts[2]).and_then(|n| arena.get_import_decl(n)).unwrap();
    let clause = arena.get(decl.import_clause).and_then(|n| arena.get_import_clause(n)).unwrap();
    assert!(clause.is_type_only);

    let decl = arena.get(stmts[3]).and_then(|n| arena.get_import_decl(n)).unwrap();
    assert!(decl.import_clause.is_none());
}

#[test]
fn test_export_forms() {
    let source = "export const a = 1;\nexport default function App() {}\nexport { a as b };\nexport * from \"./other\";";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    assert_eq!(stmts.len(), 4);
    assert!(arena.modifier_flags(stmts[0]).contains(ModifierFlags::EXPORT));
    assert_eq!(arena.kind_of(stmts[1]), Some(syntax_kind_ext::FUNCTION_DECLARATION));
    assert!(arena.modifier_flags(stmts[1]).contains(ModifierFlags::DEFAULT));
    assert_eq!(arena.kind_of(stmts[2]), Some(syntax_kind_ext::EXPORT_DECLARATION));
    assert_eq!(arena.kind_of(stmts[3]), Some(syntax_kind_ext::EXPORT_DECLARATION));
}

#[test]
fn test_type_declarations() {
    let source = "interface Props { count: number; onChange?(v: number): void }\ntype Store = { todos: string[] } & Base;\nenum Mode { A, B = 2 }";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let stmts = statements(arena, root);
    let iface = arena.get(stmts[0]).and_then(|n| arena.get_interface(n)).unwrap();
    assert_eq!(iface.members.len(), 2);
    let alias = arena.get(stmts[1]).and_then(|n| arena.get_type_alias(n)).unwrap();
    assert_eq!(
        arena.kind_of(alias.type_node),
        Some(syntax_kind_ext::INTERSECTION_TYPE)
    );
    let en = arena.get(stmts[2]).and_then(|n| arena.get_enum(n)).unwrap();
    assert_eq!(en.members.len(), 2);
}

#[test]
fn test_type_assertion_in_ts_file() {
    let (parser, root) = parse("test.ts", "const n = <number>value;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::TYPE_ASSERTION));
}

#[test]
fn test_as_expression() {
    let (parser, root) = parse("test.ts", "const n = value as Observable<number>;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let assertion = arena.get(init).and_then(|n| arena.get_type_assertion(n)).unwrap();
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::AS_EXPRESSION));
    assert_eq!(arena.identifier_text(assertion.expression), Some("value"));
    assert_eq!(
        arena.kind_of(assertion.type_node),
        Some(syntax_kind_ext::TYPE_REFERENCE)
    );
}

#[test]
fn test_control_flow_statements() {
    let source = "for (const item of items) { if (item) continue; else break; }\nwhile (x) { x--; }\ntry { f(); } catch (e) { g(); } finally { h(); }\nswitch (k) { case 1: break; default: }";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let kinds: Vec<_> = statements(arena, root)
        .into_iter()
        .filter_map(|s| arena.kind_of(s))
        .collect();
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::FOR_OF_STATEMENT,
            syntax_kind_ext::WHILE_STATEMENT,
            syntax_kind_ext::TRY_STATEMENT,
            syntax_kind_ext::SWITCH_STATEMENT,
        ]
    );
}

#[test]
fn test_template_literal_with_substitutions() {
    let (parser, root) = parse("test.ts", "const s = `a${b}c${d}e`;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let template = arena.get(init).and_then(|n| arena.get_template_expr(n)).unwrap();
    assert_eq!(template.template_spans.len(), 2);
}

#[test]
fn test_node_positions_cover_source_text() {
    let source = "const store = observable({ count: 0 });";
    let (parser, root) = parse("test.ts", source);
    let arena = parser.get_arena();

    let init = first_initializer(arena, statements(arena, root)[0]);
    assert_eq!(
        arena.node_text(init, source),
        Some("observable({ count: 0 })")
    );
}

#[test]
fn test_recovers_after_error() {
    let (parser, root) = parse("test.ts", "const a = ;\nconst b = 2;");
    let arena = parser.get_arena();
    assert!(!parser.get_diagnostics().is_empty());
    assert_eq!(statements(arena, root).len(), 2);
}
