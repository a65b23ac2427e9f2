//! Symbols, symbol tables and the symbol arena.

use legend_parser::NodeIndex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a [`Symbol`] in a [`SymbolArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const NONE: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

/// Symbol flags (u32 bitmask).
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const FUNCTION_SCOPED_VARIABLE: u32 = 1 << 0;
    pub const BLOCK_SCOPED_VARIABLE: u32 = 1 << 1;
    pub const PROPERTY: u32 = 1 << 2;
    pub const ENUM_MEMBER: u32 = 1 << 3;
    pub const FUNCTION: u32 = 1 << 4;
    pub const CLASS: u32 = 1 << 5;
    pub const INTERFACE: u32 = 1 << 6;
    pub const ENUM: u32 = 1 << 7;
    pub const MODULE: u32 = 1 << 8;
    pub const METHOD: u32 = 1 << 9;
    pub const GET_ACCESSOR: u32 = 1 << 10;
    pub const SET_ACCESSOR: u32 = 1 << 11;
    pub const TYPE_PARAMETER: u32 = 1 << 12;
    pub const TYPE_ALIAS: u32 = 1 << 13;
    pub const ALIAS: u32 = 1 << 14;
    pub const PARAMETER: u32 = 1 << 15;
    pub const STATIC: u32 = 1 << 16;

    pub const VARIABLE: u32 = FUNCTION_SCOPED_VARIABLE | BLOCK_SCOPED_VARIABLE;
    pub const VALUE: u32 =
        VARIABLE | PROPERTY | ENUM_MEMBER | FUNCTION | CLASS | ENUM | METHOD | GET_ACCESSOR
            | SET_ACCESSOR | PARAMETER;
    pub const TYPE: u32 = CLASS | INTERFACE | ENUM | TYPE_PARAMETER | TYPE_ALIAS;
    pub const ACCESSOR: u32 = GET_ACCESSOR | SET_ACCESSOR;
}

/// How an import binding refers to its module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportKind {
    /// `import { a } from "m"` / `import { a as b } from "m"`
    Named,
    /// `import a from "m"`
    Default,
    /// `import * as a from "m"` / `import a = require("m")`
    Namespace,
}

/// The module-side identity of an import binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTarget {
    pub module_specifier: String,
    pub kind: ImportKind,
    /// Exported name for [`ImportKind::Named`] imports (before any `as` rename).
    pub imported_name: Option<String>,
}

/// A named declaration site (or merged set of sites).
#[derive(Clone, Debug)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub flags: u32,
    pub declarations: Vec<NodeIndex>,
    /// First value-space declaration, `NONE` for type-only symbols.
    pub value_declaration: NodeIndex,
    pub is_exported: bool,
    pub import: Option<ImportTarget>,
    /// Instance and static members for classes.
    pub members: Option<Box<SymbolTable>>,
}

impl Symbol {
    fn new(id: SymbolId, flags: u32, name: String) -> Symbol {
        Symbol {
            id,
            name,
            flags,
            declarations: Vec::new(),
            value_declaration: NodeIndex::NONE,
            is_exported: false,
            import: None,
            members: None,
        }
    }

    #[inline]
    pub fn has_any_flags(&self, flags: u32) -> bool {
        (self.flags & flags) != 0
    }

    /// First declaration node, if any.
    pub fn first_declaration(&self) -> Option<NodeIndex> {
        self.declarations.first().copied()
    }
}

/// Name to symbol mapping for one scope or member list.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.entries.get(name).copied()
    }

    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn set(&mut self, name: String, id: SymbolId) {
        self.entries.insert(name, id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SymbolId)> {
        self.entries.iter()
    }
}

/// Owns every symbol of one bound file.
#[derive(Clone, Debug, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena::default()
    }

    pub fn alloc(&mut self, flags: u32, name: String) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(id, flags, name));
        id
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        if id.is_none() {
            return None;
        }
        self.symbols.get(id.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        if id.is_none() {
            return None;
        }
        self.symbols.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}
