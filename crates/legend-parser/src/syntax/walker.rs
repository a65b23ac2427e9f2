//! Preorder descent and parent-chain ascent.

use legend_common::limits::MAX_ANCESTOR_WALK;
use smallvec::SmallVec;

use crate::parser::NodeIndex;
use crate::parser::node::NodeArena;

/// Depth-first, source-ordered iterator over a subtree (root included).
pub struct PreorderWalk<'a> {
    arena: &'a NodeArena,
    stack: SmallVec<[NodeIndex; 32]>,
}

impl<'a> Iterator for PreorderWalk<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.stack.pop()?;
        let start = self.stack.len();
        let arena = self.arena;
        let stack = &mut self.stack;
        arena.for_each_child(current, |child| stack.push(child));
        // Children were pushed in source order; reverse so the first pops next.
        self.stack[start..].reverse();
        Some(current)
    }
}

pub fn preorder(arena: &NodeArena, root: NodeIndex) -> PreorderWalk<'_> {
    let mut stack = SmallVec::new();
    if arena.get(root).is_some() {
        stack.push(root);
    }
    PreorderWalk { arena, stack }
}

/// Iterator over the strict ancestors of a node, nearest first.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let parent = self.arena.parent_of(self.current);
        if parent.is_none() {
            self.remaining = 0;
            return None;
        }
        self.current = parent;
        Some(parent)
    }
}

pub fn ancestors(arena: &NodeArena, node: NodeIndex) -> Ancestors<'_> {
    Ancestors {
        arena,
        current: node,
        remaining: MAX_ANCESTOR_WALK,
    }
}

/// Nearest ancestor (excluding `node`) whose kind satisfies `predicate`.
pub fn find_ancestor(
    arena: &NodeArena,
    node: NodeIndex,
    mut predicate: impl FnMut(u16) -> bool,
) -> Option<NodeIndex> {
    ancestors(arena, node).find(|&ancestor| arena.kind_of(ancestor).is_some_and(&mut predicate))
}
