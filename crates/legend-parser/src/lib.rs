//! TypeScript/TSX parser for legend-lint.
//!
//! The AST is a flat arena of thin [`parser::node::Node`] headers with typed
//! data pools. Every node records its parent, so analyses can walk upward
//! without owning references.

pub mod parser;
pub mod syntax;

pub use parser::{NodeIndex, NodeList, ParseDiagnostic, ParserState, syntax_kind_ext};
pub use parser::node::{Node, NodeArena};
