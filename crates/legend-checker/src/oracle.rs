//! The type queries the lint rules depend on.

use legend_binder::SymbolId;
use legend_parser::NodeIndex;

/// A bound symbol as seen by the rules: its name and declaration site.
///
/// Synthetic symbols (members of an imported module such as
/// `React.Component`) carry [`SymbolId::NONE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRef {
    pub id: SymbolId,
    pub name: String,
    pub declaration: NodeIndex,
}

impl SymbolRef {
    pub fn synthetic(name: impl Into<String>) -> SymbolRef {
        SymbolRef {
            id: SymbolId::NONE,
            name: name.into(),
            declaration: NodeIndex::NONE,
        }
    }
}

/// Static type of an expression or declaration, derived per query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Display name, e.g. `Observable<number>`.
    pub name: String,
    /// Head of the type reference, e.g. `Observable`.
    pub family: Option<String>,
    pub symbol: Option<SymbolRef>,
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor {
            name: name.into(),
            family: None,
            symbol: None,
        }
    }

    pub fn with_family(name: impl Into<String>, family: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor {
            name: name.into(),
            family: Some(family.into()),
            symbol: None,
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: Option<SymbolRef>) -> TypeDescriptor {
        self.symbol = symbol;
        self
    }

    /// Family prefix match, falling back to the display name when the
    /// family is unknown.
    pub fn is_in_family(&self, prefix: &str) -> bool {
        match &self.family {
            Some(family) => family.starts_with(prefix),
            None => self.name.starts_with(prefix),
        }
    }
}

/// Type and symbol queries over one bound file.
///
/// Every query is pure. Anything unresolvable answers `None` (or `0`), and
/// callers treat absence as "does not match".
pub trait TypeOracle {
    fn type_of(&self, node: NodeIndex) -> Option<TypeDescriptor>;

    fn symbol_of(&self, node: NodeIndex) -> Option<SymbolRef>;

    /// Declared or inferred return type name of a function-like node.
    fn return_type_name_of(&self, function: NodeIndex) -> Option<String>;

    fn call_signatures_of(&self, node: NodeIndex) -> usize;
}
