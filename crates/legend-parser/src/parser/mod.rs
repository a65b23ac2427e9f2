//! Recursive-descent parser producing a [`NodeArena`](node::NodeArena).

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod flags;
pub mod node;
pub mod syntax_kind_ext;

mod node_access;
mod node_arena;

pub mod state;
pub use state::{ParseDiagnostic, ParserState, file_uses_jsx};

mod state_expressions;
mod state_jsx;
mod state_statements;
mod state_types;

#[cfg(test)]
mod tests;
