//! Binder state: scopes, symbols and the node → symbol map.

use legend_common::limits::MAX_ANCESTOR_WALK;
use legend_parser::NodeIndex;
use legend_parser::parser::node::NodeArena;
use rustc_hash::FxHashMap;
use tracing::{debug, debug_span};

use crate::symbols::{Symbol, SymbolArena, SymbolId, SymbolTable};

/// What kind of syntax owns a scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    SourceFile,
    /// Functions, methods, accessors, constructors, arrows and static blocks.
    Function,
    Block,
    Class,
    Catch,
    For,
    Module,
}

impl ContainerKind {
    /// `var` and function declarations hoist to the nearest such container.
    #[inline]
    pub fn is_function_scoped(self) -> bool {
        matches!(
            self,
            ContainerKind::SourceFile | ContainerKind::Function | ContainerKind::Module
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

/// One lexical scope.
#[derive(Clone, Debug)]
pub struct Scope {
    pub kind: ContainerKind,
    pub container: NodeIndex,
    pub parent: ScopeId,
    pub table: SymbolTable,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ResolutionStats {
    pub resolved: usize,
    pub unresolved: usize,
}

/// Binds one source file: collects declarations into lexical scopes, then
/// resolves identifier references against them.
#[derive(Debug, Default)]
pub struct BinderState {
    pub symbols: SymbolArena,
    pub scopes: Vec<Scope>,
    /// Declaration nodes, declaration names and resolved references
    /// (keyed by `NodeIndex.0`).
    pub node_symbols: FxHashMap<u32, SymbolId>,
    /// Container node → the scope it opens.
    pub(crate) node_scope_ids: FxHashMap<u32, ScopeId>,
    pub(crate) stats: ResolutionStats,
}

impl BinderState {
    pub fn new() -> BinderState {
        BinderState::default()
    }

    /// Bind the tree rooted at `root`. Rebinding replaces all previous state.
    pub fn bind_source_file(&mut self, arena: &NodeArena, root: NodeIndex) {
        let _span = debug_span!("bind_source_file", root = root.0).entered();
        *self = BinderState::default();
        if arena.get(root).is_none() {
            return;
        }

        let root_scope = self.create_scope(ContainerKind::SourceFile, root, ScopeId::NONE);
        self.collect_declarations(arena, root, root_scope);
        self.resolve_references(arena, root, root_scope);

        debug!(
            symbols = self.symbols.len(),
            scopes = self.scopes.len(),
            resolved = self.stats.resolved,
            unresolved = self.stats.unresolved,
            "bound source file"
        );
    }

    pub(crate) fn create_scope(
        &mut self,
        kind: ContainerKind,
        container: NodeIndex,
        parent: ScopeId,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            container,
            parent,
            table: SymbolTable::new(),
        });
        self.node_scope_ids.insert(container.0, id);
        id
    }

    // Accessors

    #[inline]
    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    #[inline]
    pub fn get_node_symbol(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node.0).copied()
    }

    /// Symbol declared by, or referenced at, `node`.
    pub fn symbol_at(&self, node: NodeIndex) -> Option<&Symbol> {
        self.get_node_symbol(node).and_then(|id| self.symbols.get(id))
    }

    #[inline]
    pub fn get_scope(&self, id: ScopeId) -> Option<&Scope> {
        if id.is_none() {
            return None;
        }
        self.scopes.get(id.0 as usize)
    }

    /// Scope opened by a container node.
    pub fn scope_of_container(&self, container: NodeIndex) -> Option<ScopeId> {
        self.node_scope_ids.get(&container.0).copied()
    }

    /// Innermost scope enclosing `node` (a container's own scope counts).
    pub fn enclosing_scope(&self, arena: &NodeArena, node: NodeIndex) -> ScopeId {
        let mut current = node;
        for _ in 0..MAX_ANCESTOR_WALK {
            if current.is_none() {
                break;
            }
            if let Some(scope) = self.scope_of_container(current) {
                return scope;
            }
            current = arena.parent_of(current);
        }
        ScopeId::NONE
    }

    /// Top-level declarations of the bound file.
    pub fn file_locals(&self) -> Option<&SymbolTable> {
        self.scopes.first().map(|scope| &scope.table)
    }

    /// Resolve `name` from `scope` outward.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let mut current = scope;
        while let Some(s) = self.get_scope(current) {
            if let Some(id) = s.table.get(name) {
                return Some(id);
            }
            current = s.parent;
        }
        None
    }

    /// Class member by name.
    pub fn member_of(&self, class_symbol: SymbolId, name: &str) -> Option<SymbolId> {
        self.symbols
            .get(class_symbol)?
            .members
            .as_ref()?
            .get(name)
    }

    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }
}
