//! Centralized limits and thresholds.
//!
//! Recursive algorithms in the parser and the type oracle bail out once
//! these depths are exceeded instead of overflowing the stack.

/// Maximum nesting depth of expressions/statements the parser descends into.
///
/// Past this depth the parser reports "Expression nesting is too deep" and
/// skips the rest of the construct. Sized so a debug build still fits on a
/// 2 MiB thread stack (rayon workers and test threads).
pub const MAX_PARSE_DEPTH: u32 = 500;

/// Maximum number of declaration hops when resolving the type of an
/// identifier through its bound symbol.
///
/// Guards against cycles such as `const a = b; const b = a;`.
pub const MAX_TYPE_RESOLUTION_DEPTH: u32 = 32;

/// Maximum number of ancestors visited by an upward walk.
///
/// Parent chains are acyclic for trees built by the parser; this only
/// protects against arenas assembled by hand.
pub const MAX_ANCESTOR_WALK: usize = 100_000;
