//! Type oracle for legend-lint.
//!
//! Derives just enough type information from one bound file to answer the
//! lint rules' questions:
//! - `oracle` - the [`TypeOracle`] trait and its result types
//! - `state` - [`CheckerState`], the oracle over a parsed and bound file
//! - `expr` - expression and declaration types, symbol lookup
//! - `type_nodes` - types written in annotations
//! - `members` - property lookup on classes, interfaces and literals
//! - `signatures` - return types and call signature counts
//!
//! Types come from annotations, initializers and a configurable table of
//! observable factories. Anything the file cannot show resolves to `None`.

pub mod oracle;
pub use oracle::{SymbolRef, TypeDescriptor, TypeOracle};

pub mod options;
pub use options::{CheckerOptions, DEFAULT_OBSERVABLE_FACTORIES};

pub mod state;
pub use state::CheckerState;

mod expr;
pub use expr::OBSERVABLE_METHODS;

mod members;
mod signatures;
mod type_nodes;
