//! `CheckerState`: the [`TypeOracle`] over one parsed and bound file.

use std::cell::Cell;
use std::sync::Arc;

use legend_binder::{BinderState, ScopeId, Symbol, SymbolId};
use legend_common::limits::MAX_TYPE_RESOLUTION_DEPTH;
use legend_parser::NodeIndex;
use legend_parser::parser::node::NodeArena;
use tracing::trace;

use crate::oracle::{SymbolRef, TypeDescriptor, TypeOracle};
use crate::options::CheckerOptions;

/// Answers type queries from annotations, initializers and a small set of
/// known factories. Nothing is cached; every query re-derives its answer.
pub struct CheckerState<'a> {
    pub(crate) arena: &'a NodeArena,
    pub(crate) binder: &'a BinderState,
    pub(crate) options: &'a CheckerOptions,
    pub(crate) source: Option<Arc<str>>,
    depth: Cell<u32>,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        binder: &'a BinderState,
        options: &'a CheckerOptions,
    ) -> CheckerState<'a> {
        let source = binder
            .get_scope(ScopeId(0))
            .and_then(|scope| arena.get(scope.container))
            .and_then(|node| arena.get_source_file(node))
            .map(|sf| Arc::clone(&sf.text));
        CheckerState {
            arena,
            binder,
            options,
            source,
            depth: Cell::new(0),
        }
    }

    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    pub fn binder(&self) -> &'a BinderState {
        self.binder
    }

    pub fn options(&self) -> &'a CheckerOptions {
        self.options
    }

    /// Run `f` one resolution level deeper; `None` past the depth limit.
    /// Declarations that refer to each other bottom out here.
    pub(crate) fn guarded<T>(&self, f: impl FnOnce() -> Option<T>) -> Option<T> {
        let depth = self.depth.get();
        if depth >= MAX_TYPE_RESOLUTION_DEPTH {
            trace!(depth, "type resolution depth exceeded");
            return None;
        }
        self.depth.set(depth + 1);
        let result = f();
        self.depth.set(depth);
        result
    }

    /// Source text covered by `node`, whitespace runs collapsed.
    pub(crate) fn node_text(&self, node: NodeIndex) -> Option<String> {
        let source = self.source.as_deref()?;
        let text = self.arena.node_text(node, source)?;
        Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub(crate) fn bound_symbol(&self, node: NodeIndex) -> Option<(SymbolId, &'a Symbol)> {
        let id = self.binder.get_node_symbol(node)?;
        self.binder.get_symbol(id).map(|sym| (id, sym))
    }

    pub(crate) fn symbol_ref(id: SymbolId, symbol: &Symbol) -> SymbolRef {
        SymbolRef {
            id,
            name: symbol.name.clone(),
            declaration: declaration_of(symbol),
        }
    }
}

/// Value declaration, else the first declaration.
pub(crate) fn declaration_of(symbol: &Symbol) -> NodeIndex {
    if symbol.value_declaration.is_some() {
        symbol.value_declaration
    } else {
        symbol.first_declaration().unwrap_or(NodeIndex::NONE)
    }
}

impl TypeOracle for CheckerState<'_> {
    fn type_of(&self, node: NodeIndex) -> Option<TypeDescriptor> {
        self.guarded(|| self.compute_type_of(node))
    }

    fn symbol_of(&self, node: NodeIndex) -> Option<SymbolRef> {
        self.guarded(|| self.compute_symbol_of(node))
    }

    fn return_type_name_of(&self, function: NodeIndex) -> Option<String> {
        self.guarded(|| self.return_type_of_function(function))
            .map(|ty| ty.name)
    }

    fn call_signatures_of(&self, node: NodeIndex) -> usize {
        self.guarded(|| Some(self.count_call_signatures(node)))
            .unwrap_or(0)
    }
}
