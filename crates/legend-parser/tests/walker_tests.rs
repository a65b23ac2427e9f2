//! Traversal helpers over a parsed arena.

use legend_parser::syntax::{ancestors, find_ancestor, preorder};
use legend_parser::{NodeIndex, ParserState, syntax_kind_ext};

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("walk.tsx".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

#[test]
fn preorder_starts_at_root_and_follows_source_order() {
    let (parser, root) = parse("const a = b + c;");
    let arena = parser.get_arena();

    let visited: Vec<_> = preorder(arena, root).collect();
    assert_eq!(visited.first(), Some(&root));

    let names: Vec<_> = visited
        .iter()
        .filter_map(|&idx| arena.identifier_text(idx))
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn preorder_visits_each_node_once() {
    let (parser, root) = parse("function f(x) { if (x) { return <div>{x}</div>; } }");
    let arena = parser.get_arena();

    let mut visited: Vec<_> = preorder(arena, root).collect();
    let total = visited.len();
    visited.sort();
    visited.dedup();
    assert_eq!(visited.len(), total);
}

#[test]
fn ancestors_walk_up_to_the_source_file() {
    let (parser, root) = parse("class A { m() { return value$.get(); } }");
    let arena = parser.get_arena();

    let get_name = preorder(arena, root)
        .find(|&idx| arena.identifier_text(idx) == Some("get"))
        .expect("identifier `get`");

    let chain: Vec<_> = ancestors(arena, get_name).collect();
    assert_eq!(chain.last(), Some(&root));
    assert!(!chain.contains(&get_name));
    assert!(
        chain
            .iter()
            .any(|&idx| arena.kind_of(idx) == Some(syntax_kind_ext::METHOD_DECLARATION))
    );
}

#[test]
fn find_ancestor_returns_nearest_match() {
    let (parser, root) = parse("function outer() { const inner = () => { use$(); }; }");
    let arena = parser.get_arena();

    let call_name = preorder(arena, root)
        .find(|&idx| arena.identifier_text(idx) == Some("use$"))
        .expect("identifier `use$`");

    let function_like = find_ancestor(arena, call_name, |kind| {
        kind == syntax_kind_ext::ARROW_FUNCTION || kind == syntax_kind_ext::FUNCTION_DECLARATION
    });
    assert_eq!(
        function_like.and_then(|idx| arena.kind_of(idx)),
        Some(syntax_kind_ext::ARROW_FUNCTION)
    );

    let missing = find_ancestor(arena, call_name, |kind| kind == syntax_kind_ext::CLASS_DECLARATION);
    assert_eq!(missing, None);
}
