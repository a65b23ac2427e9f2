//! Tree traversal helpers over a parsed [`NodeArena`](crate::NodeArena).

pub mod walker;

pub use walker::{Ancestors, PreorderWalk, ancestors, find_ancestor, preorder};
