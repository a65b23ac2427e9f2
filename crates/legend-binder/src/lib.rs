//! Lexical binder for legend-lint.
//!
//! Walks a parsed [`NodeArena`](legend_parser::parser::node::NodeArena),
//! opens a scope per container (source file, function, block, class, catch,
//! `for`, namespace) and declares every binding in it. `var` and function
//! declarations hoist to the enclosing function scope. A second pass maps
//! each identifier reference to its symbol in `node_symbols`.

pub mod state;
pub use state::{BinderState, ContainerKind, ResolutionStats, Scope, ScopeId};

pub mod symbols;
pub use symbols::{
    ImportKind, ImportTarget, Symbol, SymbolArena, SymbolId, SymbolTable, symbol_flags,
};

mod state_binding;
mod state_resolution;
