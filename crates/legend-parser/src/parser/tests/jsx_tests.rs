use super::{diagnostic_codes, first_initializer, parse, statements};
use crate::parser::syntax_kind_ext;

#[test]
fn test_jsx_element_with_attributes_and_children() {
    let source = "const view = <div className=\"row\" onClick={() => toggle()}>{count$.get()} items</div>;";
    let (parser, root) = parse("view.tsx", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let element = arena.get(init).and_then(|n| arena.get_jsx_element(n)).unwrap();
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::JSX_ELEMENT));

    let opening = arena
        .get(element.opening_element)
        .and_then(|n| arena.get_jsx_opening(n))
        .unwrap();
    assert_eq!(arena.identifier_text(opening.tag_name), Some("div"));
    let attributes = arena
        .get(opening.attributes)
        .and_then(|n| arena.get_jsx_attributes(n))
        .unwrap();
    assert_eq!(attributes.properties.len(), 2);

    let child_kinds: Vec<_> = element
        .children
        .iter()
        .filter_map(|c| arena.kind_of(c))
        .collect();
    assert_eq!(child_kinds[0], syntax_kind_ext::JSX_EXPRESSION);
    assert!(child_kinds.len() >= 2);
    assert_eq!(arena.node_text(init, source).map(|t| t.ends_with("</div>")), Some(true));
}

#[test]
fn test_jsx_fragment_and_self_closing() {
    let (parser, root) = parse("view.tsx", "const view = <><Item value={1} /><br/></>;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let fragment = arena.get(init).and_then(|n| arena.get_jsx_fragment(n)).unwrap();
    assert_eq!(fragment.children.len(), 2);
    for child in fragment.children.iter() {
        assert_eq!(
            arena.kind_of(child),
            Some(syntax_kind_ext::JSX_SELF_CLOSING_ELEMENT)
        );
    }
}

#[test]
fn test_jsx_member_tag_name() {
    let (parser, root) = parse("view.tsx", "const v = <Legend.Memo>{() => x}</Legend.Memo>;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());

    let init = first_initializer(arena, statements(arena, root)[0]);
    let element = arena.get(init).and_then(|n| arena.get_jsx_element(n)).unwrap();
    let opening = arena
        .get(element.opening_element)
        .and_then(|n| arena.get_jsx_opening(n))
        .unwrap();
    assert_eq!(
        arena.kind_of(opening.tag_name),
        Some(syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION)
    );
}

#[test]
fn test_jsx_mismatched_closing_tag() {
    let (parser, _) = parse("view.tsx", "const v = <div></span>;");
    assert!(diagnostic_codes(&parser).contains(&17002));
}

#[test]
fn test_jsx_returned_from_function_component() {
    let source = "export function Counter({ count$ }: Props) {\n  return (\n    <section>\n      <h1>{count$.get()}</h1>\n    </section>\n  );\n}";
    let (parser, root) = parse("counter.tsx", source);
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(
        arena.kind_of(statements(arena, root)[0]),
        Some(syntax_kind_ext::FUNCTION_DECLARATION)
    );
}

#[test]
fn test_generic_arrow_in_tsx() {
    let (parser, root) = parse("util.tsx", "const id = <T,>(value: T) => value;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());

    let init = first_initializer(arena, statements(arena, root)[0]);
    assert_eq!(arena.kind_of(init), Some(syntax_kind_ext::ARROW_FUNCTION));
}

#[test]
fn test_statement_after_jsx_parses_normally() {
    let (parser, root) = parse("view.tsx", "const a = <b>text</b>;\nconst c = a < 2;");
    let arena = parser.get_arena();
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(statements(arena, root).len(), 2);
}
