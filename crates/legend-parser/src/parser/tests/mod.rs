use crate::parser::{NodeIndex, ParserState};
use crate::parser::node::NodeArena;

mod jsx_tests;
mod parser_tests;

pub(super) fn parse(file_name: &str, source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new(file_name.to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

pub(super) fn diagnostic_codes(parser: &ParserState) -> Vec<u32> {
    parser.get_diagnostics().iter().map(|d| d.code).collect()
}

pub(super) fn statements(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    arena
        .get(root)
        .and_then(|node| arena.get_source_file(node))
        .map(|sf| sf.statements.nodes.clone())
        .unwrap_or_default()
}

/// Initializer of the first declarator in a `const`/`let` statement.
pub(super) fn first_initializer(arena: &NodeArena, statement: NodeIndex) -> NodeIndex {
    let list = arena
        .get(statement)
        .and_then(|n| arena.get_variable(n))
        .and_then(|v| v.declarations.first())
        .expect("variable statement");
    let declaration = arena
        .get(list)
        .and_then(|n| arena.get_variable(n))
        .and_then(|v| v.declarations.first())
        .expect("declaration list");
    arena
        .get(declaration)
        .and_then(|n| arena.get_variable_declaration(n))
        .map(|d| d.initializer)
        .expect("declaration")
}
