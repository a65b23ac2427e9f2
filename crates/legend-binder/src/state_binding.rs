//! Declaration collection: scopes, hoisting and symbol merging.

use legend_parser::parser::flags::{ModifierFlags, node_flags};
use legend_parser::parser::node::{Node, NodeArena};
use legend_parser::syntax::find_ancestor;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use smallvec::SmallVec;
use tracing::trace;

use crate::state::{BinderState, ContainerKind, ScopeId};
use crate::symbols::{ImportKind, ImportTarget, SymbolId, SymbolTable, symbol_flags};

impl BinderState {
    /// Pre-order pass declaring every binding in its scope.
    pub(crate) fn collect_declarations(
        &mut self,
        arena: &NodeArena,
        root: NodeIndex,
        root_scope: ScopeId,
    ) {
        let mut stack: SmallVec<[(NodeIndex, ScopeId); 64]> = SmallVec::new();
        stack.push((root, root_scope));
        while let Some((idx, scope)) = stack.pop() {
            let Some(node) = arena.get(idx) else {
                continue;
            };
            let inner = self.bind_node(arena, node, idx, scope);
            let start = stack.len();
            arena.for_each_child(idx, |child| stack.push((child, inner)));
            stack[start..].reverse();
        }
    }

    /// Declare whatever `node` introduces; returns the scope its children
    /// live in.
    fn bind_node(
        &mut self,
        arena: &NodeArena,
        node: &Node,
        idx: NodeIndex,
        scope: ScopeId,
    ) -> ScopeId {
        match node.kind {
            k if k == syntax_kind_ext::VARIABLE_DECLARATION => {
                self.bind_variable_declaration(arena, node, idx, scope);
                scope
            }
            k if k == syntax_kind_ext::PARAMETER => {
                if let Some(param) = arena.get_parameter(node) {
                    self.bind_binding_name(
                        arena,
                        param.name,
                        idx,
                        symbol_flags::PARAMETER,
                        scope,
                        false,
                    );
                }
                scope
            }
            k if k == syntax_kind_ext::FUNCTION_DECLARATION => {
                if let Some(func) = arena.get_function(node)
                    && let Some(name) = arena.identifier_text(func.name)
                {
                    let target = self.hoist_scope(scope);
                    let exported = Self::is_node_exported(arena, idx);
                    let sym = self.declare_symbol(target, name, symbol_flags::FUNCTION, idx, exported);
                    self.node_symbols.insert(func.name.0, sym);
                }
                self.create_scope(ContainerKind::Function, idx, scope)
            }
            k if k == syntax_kind_ext::FUNCTION_EXPRESSION => {
                let inner = self.create_scope(ContainerKind::Function, idx, scope);
                if let Some(func) = arena.get_function(node)
                    && let Some(name) = arena.identifier_text(func.name)
                {
                    let sym = self.declare_symbol(inner, name, symbol_flags::FUNCTION, idx, false);
                    self.node_symbols.insert(func.name.0, sym);
                }
                inner
            }
            k if k == syntax_kind_ext::ARROW_FUNCTION
                || k == syntax_kind_ext::METHOD_DECLARATION
                || k == syntax_kind_ext::CONSTRUCTOR
                || k == syntax_kind_ext::GET_ACCESSOR
                || k == syntax_kind_ext::SET_ACCESSOR
                || k == syntax_kind_ext::CLASS_STATIC_BLOCK_DECLARATION =>
            {
                self.create_scope(ContainerKind::Function, idx, scope)
            }
            k if k == syntax_kind_ext::CLASS_DECLARATION => {
                let class_symbol = arena.get_class(node).and_then(|class| {
                    let name = arena.identifier_text(class.name)?;
                    let exported = Self::is_node_exported(arena, idx);
                    let sym = self.declare_symbol(scope, name, symbol_flags::CLASS, idx, exported);
                    self.node_symbols.insert(class.name.0, sym);
                    Some(sym)
                });
                if let Some(sym) = class_symbol {
                    self.bind_class_members(arena, node, sym);
                }
                self.create_scope(ContainerKind::Class, idx, scope)
            }
            k if k == syntax_kind_ext::CLASS_EXPRESSION => {
                let inner = self.create_scope(ContainerKind::Class, idx, scope);
                let class_symbol = arena.get_class(node).and_then(|class| {
                    let name = arena.identifier_text(class.name)?;
                    let sym = self.declare_symbol(inner, name, symbol_flags::CLASS, idx, false);
                    self.node_symbols.insert(class.name.0, sym);
                    Some(sym)
                });
                if let Some(sym) = class_symbol {
                    self.bind_class_members(arena, node, sym);
                }
                inner
            }
            k if k == syntax_kind_ext::BLOCK => {
                let parent = arena.parent_of(idx);
                if arena
                    .kind_of(parent)
                    .is_some_and(syntax_kind_ext::is_function_like)
                {
                    scope
                } else {
                    self.create_scope(ContainerKind::Block, idx, scope)
                }
            }
            k if k == syntax_kind_ext::CASE_BLOCK => {
                self.create_scope(ContainerKind::Block, idx, scope)
            }
            k if k == syntax_kind_ext::CATCH_CLAUSE => {
                self.create_scope(ContainerKind::Catch, idx, scope)
            }
            k if k == syntax_kind_ext::FOR_STATEMENT
                || k == syntax_kind_ext::FOR_IN_STATEMENT
                || k == syntax_kind_ext::FOR_OF_STATEMENT =>
            {
                self.create_scope(ContainerKind::For, idx, scope)
            }
            k if k == syntax_kind_ext::MODULE_DECLARATION => {
                if let Some(module) = arena.get_module(node)
                    && let Some(name) = arena.identifier_text(module.name)
                {
                    let exported = Self::is_node_exported(arena, idx);
                    let sym = self.declare_symbol(scope, name, symbol_flags::MODULE, idx, exported);
                    self.node_symbols.insert(module.name.0, sym);
                }
                self.create_scope(ContainerKind::Module, idx, scope)
            }
            k if k == syntax_kind_ext::INTERFACE_DECLARATION => {
                if let Some(iface) = arena.get_interface(node) {
                    self.declare_named(arena, iface.name, idx, symbol_flags::INTERFACE, scope);
                }
                scope
            }
            k if k == syntax_kind_ext::TYPE_ALIAS_DECLARATION => {
                if let Some(alias) = arena.get_type_alias(node) {
                    self.declare_named(arena, alias.name, idx, symbol_flags::TYPE_ALIAS, scope);
                }
                scope
            }
            k if k == syntax_kind_ext::ENUM_DECLARATION => {
                if let Some(en) = arena.get_enum(node) {
                    self.declare_named(arena, en.name, idx, symbol_flags::ENUM, scope);
                }
                scope
            }
            k if k == syntax_kind_ext::TYPE_PARAMETER => {
                // Only type parameters of scope-owning declarations are lexical.
                let owner = arena.parent_of(idx);
                if self.get_scope(scope).is_some_and(|s| s.container == owner)
                    && let Some(param) = arena.get_type_parameter(node)
                    && let Some(name) = arena.identifier_text(param.name)
                {
                    let sym = self.declare_symbol(scope, name, symbol_flags::TYPE_PARAMETER, idx, false);
                    self.node_symbols.insert(param.name.0, sym);
                }
                scope
            }
            k if k == syntax_kind_ext::IMPORT_CLAUSE => {
                if let Some(clause) = arena.get_import_clause(node)
                    && clause.name.is_some()
                {
                    // `import x = require("m")` has no named bindings and a
                    // non-literal specifier.
                    let kind = if Self::is_import_equals(arena, idx) {
                        ImportKind::Namespace
                    } else {
                        ImportKind::Default
                    };
                    self.bind_import(arena, clause.name, idx, kind, None, scope);
                }
                scope
            }
            k if k == syntax_kind_ext::NAMESPACE_IMPORT => {
                if let Some(ns) = arena.get_named_imports(node) {
                    self.bind_import(arena, ns.name, idx, ImportKind::Namespace, None, scope);
                }
                scope
            }
            k if k == syntax_kind_ext::IMPORT_SPECIFIER => {
                if let Some(spec) = arena.get_specifier(node) {
                    let imported_from = if spec.property_name.is_some() {
                        spec.property_name
                    } else {
                        spec.name
                    };
                    let imported = arena
                        .identifier_text(imported_from)
                        .or_else(|| arena.literal_text(imported_from))
                        .map(str::to_string);
                    self.bind_import(arena, spec.name, idx, ImportKind::Named, imported, scope);
                }
                scope
            }
            _ => scope,
        }
    }

    fn bind_variable_declaration(
        &mut self,
        arena: &NodeArena,
        node: &Node,
        idx: NodeIndex,
        scope: ScopeId,
    ) {
        let Some(decl) = arena.get_variable_declaration(node) else {
            return;
        };
        let parent = arena.parent_of(idx);
        let list_flags = arena
            .get(parent)
            .filter(|p| p.kind == syntax_kind_ext::VARIABLE_DECLARATION_LIST)
            .map(|p| p.flags);

        // Catch-clause variables have no list and stay in the catch scope.
        let (flags, target) = match list_flags {
            Some(flags) if flags & node_flags::BLOCK_SCOPED == 0 => (
                symbol_flags::FUNCTION_SCOPED_VARIABLE,
                self.hoist_scope(scope),
            ),
            _ => (symbol_flags::BLOCK_SCOPED_VARIABLE, scope),
        };
        let exported = Self::is_node_exported(arena, idx);
        self.bind_binding_name(arena, decl.name, idx, flags, target, exported);
    }

    /// Declare a plain identifier name, or every identifier inside a binding
    /// pattern. Pattern names use their binding element as the declaration.
    fn bind_binding_name(
        &mut self,
        arena: &NodeArena,
        name: NodeIndex,
        declaration: NodeIndex,
        flags: u32,
        scope: ScopeId,
        exported: bool,
    ) {
        if let Some(text) = arena.identifier_text(name) {
            let sym = self.declare_symbol(scope, text, flags, declaration, exported);
            self.node_symbols.insert(name.0, sym);
            return;
        }

        let mut pending: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        pending.push(name);
        while let Some(pattern_idx) = pending.pop() {
            let Some(pattern) = arena.get(pattern_idx).and_then(|n| arena.get_binding_pattern(n))
            else {
                continue;
            };
            for element_idx in pattern.elements.iter() {
                let Some(element) = arena
                    .get(element_idx)
                    .and_then(|n| arena.get_binding_element(n))
                else {
                    continue;
                };
                if let Some(text) = arena.identifier_text(element.name) {
                    let sym = self.declare_symbol(scope, text, flags, element_idx, exported);
                    self.node_symbols.insert(element.name.0, sym);
                } else if element.name.is_some() {
                    pending.push(element.name);
                }
            }
        }
    }

    fn declare_named(
        &mut self,
        arena: &NodeArena,
        name: NodeIndex,
        declaration: NodeIndex,
        flags: u32,
        scope: ScopeId,
    ) {
        if let Some(text) = arena.identifier_text(name) {
            let exported = Self::is_node_exported(arena, declaration);
            let sym = self.declare_symbol(scope, text, flags, declaration, exported);
            self.node_symbols.insert(name.0, sym);
        }
    }

    fn bind_import(
        &mut self,
        arena: &NodeArena,
        name: NodeIndex,
        declaration: NodeIndex,
        kind: ImportKind,
        imported_name: Option<String>,
        scope: ScopeId,
    ) {
        let Some(text) = arena.identifier_text(name) else {
            return;
        };
        let sym = self.declare_symbol(scope, text, symbol_flags::ALIAS, declaration, false);
        self.node_symbols.insert(name.0, sym);
        if let Some(module_specifier) = Self::import_module_specifier(arena, declaration)
            && let Some(symbol) = self.symbols.get_mut(sym)
        {
            trace!(name = text, module = %module_specifier, ?kind, "import binding");
            symbol.import = Some(ImportTarget {
                module_specifier,
                kind,
                imported_name,
            });
        }
    }

    fn bind_class_members(&mut self, arena: &NodeArena, node: &Node, class_symbol: SymbolId) {
        let Some(class) = arena.get_class(node) else {
            return;
        };
        let mut members = SymbolTable::new();
        for member_idx in class.members.iter() {
            let Some(member) = arena.get(member_idx) else {
                continue;
            };
            let (name, flags) = match member.kind {
                k if k == syntax_kind_ext::PROPERTY_DECLARATION => (
                    arena.get_property_decl(member).map(|p| p.name),
                    symbol_flags::PROPERTY,
                ),
                k if k == syntax_kind_ext::METHOD_DECLARATION => (
                    arena.get_method_decl(member).map(|m| m.name),
                    symbol_flags::METHOD,
                ),
                k if k == syntax_kind_ext::GET_ACCESSOR => (
                    arena.get_accessor(member).map(|a| a.name),
                    symbol_flags::GET_ACCESSOR,
                ),
                k if k == syntax_kind_ext::SET_ACCESSOR => (
                    arena.get_accessor(member).map(|a| a.name),
                    symbol_flags::SET_ACCESSOR,
                ),
                k if k == syntax_kind_ext::CONSTRUCTOR => {
                    self.bind_parameter_properties(arena, member, &mut members);
                    continue;
                }
                _ => continue,
            };
            let Some(name) = name else {
                continue;
            };
            let Some(text) = arena
                .identifier_text(name)
                .or_else(|| arena.literal_text(name))
            else {
                continue;
            };
            let mut flags = flags;
            if arena.modifier_flags(member_idx).contains(ModifierFlags::STATIC) {
                flags |= symbol_flags::STATIC;
            }
            let sym = self.declare_member(&mut members, text, flags, member_idx);
            self.node_symbols.insert(name.0, sym);
        }
        if let Some(symbol) = self.symbols.get_mut(class_symbol) {
            symbol.members = Some(Box::new(members));
        }
    }

    /// `constructor(private store$: Store)` declares a property.
    fn bind_parameter_properties(
        &mut self,
        arena: &NodeArena,
        ctor: &Node,
        members: &mut SymbolTable,
    ) {
        let Some(ctor) = arena.get_constructor(ctor) else {
            return;
        };
        let property_modifiers = ModifierFlags::PUBLIC
            | ModifierFlags::PRIVATE
            | ModifierFlags::PROTECTED
            | ModifierFlags::READONLY;
        for param_idx in ctor.parameters.iter() {
            if !arena.modifier_flags(param_idx).intersects(property_modifiers) {
                continue;
            }
            let Some(param) = arena.get(param_idx).and_then(|n| arena.get_parameter(n)) else {
                continue;
            };
            if let Some(text) = arena.identifier_text(param.name) {
                self.declare_member(members, text, symbol_flags::PROPERTY, param_idx);
            }
        }
    }

    fn declare_member(
        &mut self,
        members: &mut SymbolTable,
        name: &str,
        flags: u32,
        declaration: NodeIndex,
    ) -> SymbolId {
        if let Some(existing) = members.get(name)
            && let Some(sym) = self.symbols.get_mut(existing)
        {
            sym.flags |= flags;
            sym.declarations.push(declaration);
            self.node_symbols.insert(declaration.0, existing);
            return existing;
        }
        let sym = self.symbols.alloc(flags, name.to_string());
        if let Some(symbol) = self.symbols.get_mut(sym) {
            symbol.declarations.push(declaration);
            symbol.value_declaration = declaration;
        }
        members.set(name.to_string(), sym);
        self.node_symbols.insert(declaration.0, sym);
        sym
    }

    /// Declare a symbol in `scope`, merging with an existing one when allowed.
    pub(crate) fn declare_symbol(
        &mut self,
        scope: ScopeId,
        name: &str,
        flags: u32,
        declaration: NodeIndex,
        is_exported: bool,
    ) -> SymbolId {
        let existing = self.get_scope(scope).and_then(|s| s.table.get(name));
        if let Some(existing_id) = existing
            && let Some(sym) = self.symbols.get_mut(existing_id)
        {
            if Self::can_merge_flags(sym.flags, flags) {
                sym.flags |= flags;
                if sym.value_declaration.is_none() && (flags & symbol_flags::VALUE) != 0 {
                    sym.value_declaration = declaration;
                }
            }
            if !sym.declarations.contains(&declaration) {
                sym.declarations.push(declaration);
            }
            sym.is_exported |= is_exported;
            self.node_symbols.insert(declaration.0, existing_id);
            return existing_id;
        }

        let sym_id = self.symbols.alloc(flags, name.to_string());
        if let Some(sym) = self.symbols.get_mut(sym_id) {
            sym.declarations.push(declaration);
            if (flags & symbol_flags::VALUE) != 0 {
                sym.value_declaration = declaration;
            }
            sym.is_exported = is_exported;
        }
        if let Some(s) = self.scopes.get_mut(scope.0 as usize) {
            s.table.set(name.to_string(), sym_id);
        }
        self.node_symbols.insert(declaration.0, sym_id);
        trace!(name, flags, scope = scope.0, "declared symbol");
        sym_id
    }

    /// Check if two symbol flag sets can be merged.
    #[must_use]
    pub const fn can_merge_flags(existing_flags: u32, new_flags: u32) -> bool {
        const MERGEABLE_WITH_MODULE: u32 =
            symbol_flags::CLASS | symbol_flags::FUNCTION | symbol_flags::ENUM | symbol_flags::INTERFACE;

        if (existing_flags & symbol_flags::INTERFACE) != 0
            && (new_flags & (symbol_flags::INTERFACE | symbol_flags::CLASS | symbol_flags::VALUE))
                != 0
        {
            return true;
        }
        if (new_flags & symbol_flags::INTERFACE) != 0
            && (existing_flags & (symbol_flags::CLASS | symbol_flags::VALUE)) != 0
        {
            return true;
        }
        if (existing_flags & symbol_flags::MODULE) != 0
            && (new_flags & (symbol_flags::MODULE | MERGEABLE_WITH_MODULE)) != 0
        {
            return true;
        }
        if (new_flags & symbol_flags::MODULE) != 0 && (existing_flags & MERGEABLE_WITH_MODULE) != 0
        {
            return true;
        }
        // Overloads.
        if (existing_flags & symbol_flags::FUNCTION) != 0
            && (new_flags & symbol_flags::FUNCTION) != 0
        {
            return true;
        }
        // Type aliases live in the type space only.
        if (existing_flags & symbol_flags::TYPE_ALIAS) != 0
            && (new_flags & symbol_flags::VALUE) != 0
        {
            return true;
        }
        if (new_flags & symbol_flags::TYPE_ALIAS) != 0
            && (existing_flags & symbol_flags::VALUE) != 0
        {
            return true;
        }
        false
    }

    /// Nearest function-scoped container at or above `scope`.
    fn hoist_scope(&self, scope: ScopeId) -> ScopeId {
        let mut current = scope;
        while let Some(s) = self.get_scope(current) {
            if s.kind.is_function_scoped() || s.parent.is_none() {
                return current;
            }
            current = s.parent;
        }
        scope
    }

    fn is_node_exported(arena: &NodeArena, idx: NodeIndex) -> bool {
        let Some(node) = arena.get(idx) else {
            return false;
        };
        if node.kind == syntax_kind_ext::VARIABLE_DECLARATION {
            // VariableDeclaration -> VariableDeclarationList -> VariableStatement
            let statement = arena.parent_of(arena.parent_of(idx));
            return arena.is_kind(statement, syntax_kind_ext::VARIABLE_STATEMENT)
                && arena
                    .modifier_flags(statement)
                    .contains(ModifierFlags::EXPORT);
        }
        arena.modifier_flags(idx).contains(ModifierFlags::EXPORT)
    }

    fn import_declaration_of(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
        find_ancestor(arena, idx, |kind| kind == syntax_kind_ext::IMPORT_DECLARATION)
    }

    fn is_import_equals(arena: &NodeArena, clause: NodeIndex) -> bool {
        Self::import_declaration_of(arena, clause)
            .and_then(|decl| arena.get(decl))
            .and_then(|n| arena.get_import_decl(n))
            .is_some_and(|decl| {
                !arena.is_kind(decl.module_specifier, SyntaxKind::StringLiteral as u16)
            })
    }

    /// Module text of the import declaration owning `idx`. Accepts a string
    /// literal or `require("m")`.
    fn import_module_specifier(arena: &NodeArena, idx: NodeIndex) -> Option<String> {
        let decl_idx = Self::import_declaration_of(arena, idx)?;
        let decl = arena.get_import_decl(arena.get(decl_idx)?)?;
        if let Some(text) = arena.literal_text(decl.module_specifier) {
            return Some(text.to_string());
        }
        let call = arena.get_call_expr(arena.get(decl.module_specifier)?)?;
        if arena.identifier_text(call.expression) != Some("require") {
            return None;
        }
        let first = call.arguments.as_ref()?.first()?;
        arena.literal_text(first).map(str::to_string)
    }
}
