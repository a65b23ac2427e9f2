//! Types written in annotations.

use legend_binder::symbol_flags;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;

use crate::oracle::{SymbolRef, TypeDescriptor, TypeOracle};
use crate::state::{CheckerState, declaration_of};

impl CheckerState<'_> {
    pub(crate) fn type_from_type_node(&self, type_node: NodeIndex) -> Option<TypeDescriptor> {
        self.guarded(|| self.compute_type_from_type_node(type_node))
    }

    fn compute_type_from_type_node(&self, type_node: NodeIndex) -> Option<TypeDescriptor> {
        let node = self.arena.get(type_node)?;
        match node.kind {
            k if k == syntax_kind_ext::TYPE_REFERENCE => self.type_from_reference(type_node),
            k if k == syntax_kind_ext::PARENTHESIZED_TYPE => {
                let wrapped = self.arena.get_wrapped_type(node)?;
                self.type_from_type_node(wrapped.type_node)
            }
            k if k == syntax_kind_ext::UNION_TYPE => {
                let union = self.arena.get_composite_type(node)?;
                let name = self.node_text(type_node)?;
                // `Observable<T> | undefined` stays in the Observable family.
                let mut family: Option<String> = None;
                let mut symbol = None;
                for member in union.types.iter() {
                    if self.is_nullish_type(member) {
                        continue;
                    }
                    let Some(member_type) = self.type_from_type_node(member) else {
                        return Some(TypeDescriptor::named(name));
                    };
                    match (&family, member_type.family) {
                        (None, Some(f)) => {
                            family = Some(f);
                            symbol = member_type.symbol;
                        }
                        (Some(existing), Some(f)) if *existing == f => {}
                        _ => return Some(TypeDescriptor::named(name)),
                    }
                }
                Some(TypeDescriptor {
                    name,
                    family,
                    symbol,
                })
            }
            k if k == syntax_kind_ext::ARRAY_TYPE => {
                let name = self.node_text(type_node)?;
                Some(TypeDescriptor::with_family(name, "Array"))
            }
            k if k == syntax_kind_ext::TYPE_QUERY => {
                let query = self.arena.get_type_query(node)?;
                self.type_of(query.expr_name)
            }
            _ => self.node_text(type_node).map(TypeDescriptor::named),
        }
    }

    /// `Name<Args>`: the family is the (possibly qualified) head name. Local
    /// type aliases are followed.
    fn type_from_reference(&self, type_node: NodeIndex) -> Option<TypeDescriptor> {
        let node = self.arena.get(type_node)?;
        let reference = self.arena.get_type_ref(node)?;
        let family = self.arena.entity_name_text(reference.type_name)?;
        let head = self.leftmost_identifier(reference.type_name);

        if let Some((id, symbol)) = self.bound_symbol(head) {
            if symbol.has_any_flags(symbol_flags::TYPE_ALIAS)
                && head == reference.type_name
                && let Some(alias) = symbol
                    .declarations
                    .iter()
                    .find_map(|&d| self.arena.get(d).and_then(|n| self.arena.get_type_alias(n)))
            {
                return self.type_from_type_node(alias.type_node);
            }
            let name = self.node_text(type_node)?;
            let symbol = if symbol.import.is_some() || head != reference.type_name {
                SymbolRef::synthetic(family.clone())
            } else {
                SymbolRef {
                    id,
                    name: symbol.name.clone(),
                    declaration: declaration_of(symbol),
                }
            };
            return Some(TypeDescriptor::with_family(name, family).with_symbol(Some(symbol)));
        }

        let name = self.node_text(type_node)?;
        let symbol = SymbolRef::synthetic(family.clone());
        Some(TypeDescriptor::with_family(name, family).with_symbol(Some(symbol)))
    }

    /// `a` in `a.b.c`.
    pub(crate) fn leftmost_identifier(&self, mut name: NodeIndex) -> NodeIndex {
        while let Some(node) = self.arena.get(name) {
            if let Some(qn) = self.arena.get_qualified_name(node) {
                name = qn.left;
            } else if node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
                && let Some(access) = self.arena.get_access_expr(node)
            {
                name = access.expression;
            } else {
                break;
            }
        }
        name
    }

    fn is_nullish_type(&self, type_node: NodeIndex) -> bool {
        let Some(node) = self.arena.get(type_node) else {
            return false;
        };
        if node.kind == SyntaxKind::UndefinedKeyword as u16
            || node.kind == SyntaxKind::NullKeyword as u16
            || node.kind == SyntaxKind::VoidKeyword as u16
        {
            return true;
        }
        node.kind == syntax_kind_ext::LITERAL_TYPE
            && self
                .arena
                .get_literal_type(node)
                .is_some_and(|lit| self.arena.is_kind(lit.literal, SyntaxKind::NullKeyword as u16))
    }
}
