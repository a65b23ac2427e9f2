//! Reference resolution. Runs after every declaration is collected so
//! forward references resolve.

use legend_parser::parser::node::NodeArena;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use smallvec::SmallVec;
use tracing::trace;

use crate::state::{BinderState, ScopeId};

impl BinderState {
    pub(crate) fn resolve_references(
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
            if node.kind == SyntaxKind::Identifier as u16 && !self.node_symbols.contains_key(&idx.0) {
                self.resolve_identifier(arena, idx, scope);
                continue;
            }
            let inner = self.scope_of_container(idx).unwrap_or(scope);
            let start = stack.len();
            arena.for_each_child(idx, |child| stack.push((child, inner)));
            stack[start..].reverse();
        }
    }

    fn resolve_identifier(&mut self, arena: &NodeArena, idx: NodeIndex, scope: ScopeId) {
        if !is_reference_position(arena, idx) {
            return;
        }
        let Some(name) = arena.identifier_text(idx) else {
            return;
        };
        match self.lookup(scope, name) {
            Some(sym) => {
                self.node_symbols.insert(idx.0, sym);
                self.stats.resolved += 1;
            }
            None => {
                trace!(name, pos = arena.get(idx).map_or(0, |n| n.pos), "unresolved identifier");
                self.stats.unresolved += 1;
            }
        }
    }
}

/// False for identifiers that name members, labels or attributes rather
/// than referring to a lexical binding.
fn is_reference_position(arena: &NodeArena, ident: NodeIndex) -> bool {
    let parent_idx = arena.parent_of(ident);
    let Some(parent) = arena.get(parent_idx) else {
        return true;
    };
    match parent.kind {
        k if k == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => arena
            .get_access_expr(parent)
            .is_none_or(|access| access.name_or_argument != ident),
        k if k == syntax_kind_ext::QUALIFIED_NAME => arena
            .get_qualified_name(parent)
            .is_none_or(|qn| qn.right != ident),
        k if k == syntax_kind_ext::PROPERTY_ASSIGNMENT => arena
            .get_property_assignment(parent)
            .is_none_or(|pa| pa.name != ident),
        k if k == syntax_kind_ext::PROPERTY_DECLARATION => arena
            .get_property_decl(parent)
            .is_none_or(|p| p.name != ident),
        k if k == syntax_kind_ext::METHOD_DECLARATION => arena
            .get_method_decl(parent)
            .is_none_or(|m| m.name != ident),
        k if k == syntax_kind_ext::GET_ACCESSOR || k == syntax_kind_ext::SET_ACCESSOR => arena
            .get_accessor(parent)
            .is_none_or(|a| a.name != ident),
        k if k == syntax_kind_ext::PROPERTY_SIGNATURE || k == syntax_kind_ext::METHOD_SIGNATURE => {
            arena.get_signature(parent).is_none_or(|s| s.name != ident)
        }
        k if k == syntax_kind_ext::ENUM_MEMBER => arena
            .get_enum_member(parent)
            .is_none_or(|m| m.name != ident),
        k if k == syntax_kind_ext::BINDING_ELEMENT => arena
            .get_binding_element(parent)
            .is_none_or(|b| b.property_name != ident),
        k if k == syntax_kind_ext::JSX_ATTRIBUTE => arena
            .get_jsx_attribute(parent)
            .is_none_or(|a| a.name != ident),
        k if k == syntax_kind_ext::LABELED_STATEMENT => arena
            .get_labeled_statement(parent)
            .is_none_or(|l| l.label != ident),
        k if k == syntax_kind_ext::NAMED_TUPLE_MEMBER => arena
            .get_named_tuple_member(parent)
            .is_none_or(|m| m.name != ident),
        k if k == syntax_kind_ext::EXPORT_SPECIFIER => arena
            .get_specifier(parent)
            .is_none_or(|s| s.property_name.is_none() || s.property_name == ident),
        k if k == syntax_kind_ext::BREAK_STATEMENT
            || k == syntax_kind_ext::CONTINUE_STATEMENT
            || k == syntax_kind_ext::META_PROPERTY
            || k == syntax_kind_ext::JSX_NAMESPACED_NAME
            || k == syntax_kind_ext::IMPORT_SPECIFIER =>
        {
            false
        }
        _ => true,
    }
}
