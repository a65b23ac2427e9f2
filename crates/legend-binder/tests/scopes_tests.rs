use legend_binder::{BinderState, ContainerKind, SymbolId};
use legend_parser::parser::node::NodeArena;
use legend_parser::syntax::preorder;
use legend_parser::{NodeIndex, ParserState, syntax_kind_ext};

fn bind(source: &str) -> (NodeArena, NodeIndex, BinderState) {
    let mut parser = ParserState::new("test.tsx".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let arena = parser.into_arena();
    let mut binder = BinderState::new();
    binder.bind_source_file(&arena, root);
    (arena, root, binder)
}

/// Identifier nodes named `name`, in source order.
fn identifiers(arena: &NodeArena, root: NodeIndex, name: &str) -> Vec<NodeIndex> {
    preorder(arena, root)
        .filter(|&idx| arena.identifier_text(idx) == Some(name))
        .collect()
}

fn symbol_of(binder: &BinderState, idx: NodeIndex) -> Option<SymbolId> {
    binder.get_node_symbol(idx)
}

#[test]
fn test_reference_resolves_to_declaration() {
    let (arena, root, binder) = bind("const count$ = observable(0);\ncount$.get();");
    let uses = identifiers(&arena, root, "count$");
    assert_eq!(uses.len(), 2);
    assert!(symbol_of(&binder, uses[0]).is_some());
    assert_eq!(symbol_of(&binder, uses[0]), symbol_of(&binder, uses[1]));
}

#[test]
fn test_forward_reference_resolves() {
    let (arena, root, binder) = bind("function App() { return helper(); }\nfunction helper() { return 1; }");
    let uses = identifiers(&arena, root, "helper");
    assert_eq!(uses.len(), 2);
    assert_eq!(symbol_of(&binder, uses[0]), symbol_of(&binder, uses[1]));
}

#[test]
fn test_inner_declaration_shadows_outer() {
    let source = "const value = 1;\nfunction f(value) { return value; }\nvalue;";
    let (arena, root, binder) = bind(source);
    let uses = identifiers(&arena, root, "value");
    assert_eq!(uses.len(), 4);
    let outer = symbol_of(&binder, uses[0]);
    let param = symbol_of(&binder, uses[1]);
    assert_ne!(outer, param);
    assert_eq!(symbol_of(&binder, uses[2]), param);
    assert_eq!(symbol_of(&binder, uses[3]), outer);
}

#[test]
fn test_block_scoped_let_is_not_visible_outside() {
    let (arena, root, binder) = bind("{ let hidden = 1; }\nhidden;");
    let uses = identifiers(&arena, root, "hidden");
    assert_eq!(uses.len(), 2);
    assert!(symbol_of(&binder, uses[0]).is_some());
    assert!(symbol_of(&binder, uses[1]).is_none());
    assert!(!binder.file_locals().unwrap().has("hidden"));
}

#[test]
fn test_var_hoists_to_function_scope() {
    let (arena, root, binder) = bind("function f() { if (x) { var v = 1; } return v; }");
    let uses = identifiers(&arena, root, "v");
    assert_eq!(uses.len(), 2);
    assert!(symbol_of(&binder, uses[1]).is_some());
    assert_eq!(symbol_of(&binder, uses[0]), symbol_of(&binder, uses[1]));
    assert!(!binder.file_locals().unwrap().has("v"));
}

#[test]
fn test_property_names_are_not_references() {
    let (arena, root, binder) = bind("const get = 1;\nconst o = { get: 2 };\no.get;");
    let uses = identifiers(&arena, root, "get");
    assert_eq!(uses.len(), 3);
    assert!(symbol_of(&binder, uses[0]).is_some());
    assert!(symbol_of(&binder, uses[1]).is_none());
    assert!(symbol_of(&binder, uses[2]).is_none());
}

#[test]
fn test_scopes_for_containers() {
    let source = "function f() { for (let i = 0; i < 1; i++) { try {} catch (e) {} } }\nclass C { m() {} }";
    let (arena, root, binder) = bind(source);

    let kinds: Vec<_> = binder.scopes.iter().map(|s| s.kind).collect();
    assert_eq!(kinds[0], ContainerKind::SourceFile);
    for kind in [
        ContainerKind::Function,
        ContainerKind::For,
        ContainerKind::Catch,
        ContainerKind::Class,
    ] {
        assert!(kinds.contains(&kind), "missing {kind:?}");
    }

    let catch_var = identifiers(&arena, root, "e")[0];
    let scope = binder.enclosing_scope(&arena, catch_var);
    assert_eq!(binder.get_scope(scope).map(|s| s.kind), Some(ContainerKind::Catch));

    let method = preorder(&arena, root)
        .find(|&idx| arena.kind_of(idx) == Some(syntax_kind_ext::METHOD_DECLARATION))
        .unwrap();
    assert!(binder.scope_of_container(method).is_some());
}

#[test]
fn test_rebinding_is_deterministic() {
    let source = "import { observable } from '@legendapp/state';\nconst s$ = observable({ a: 1 });\nfunction App() { return s$.a.get(); }";
    let mut parser = ParserState::new("test.tsx".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let arena = parser.into_arena();

    let mut binder = BinderState::new();
    binder.bind_source_file(&arena, root);
    let first = (binder.symbols.len(), binder.node_symbols.len());
    binder.bind_source_file(&arena, root);
    assert_eq!(first, (binder.symbols.len(), binder.node_symbols.len()));
}
