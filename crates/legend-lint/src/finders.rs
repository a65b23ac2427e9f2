//! Candidate node searches. Each is a full preorder pass returning nodes in
//! document order.

use legend_checker::{TypeDescriptor, TypeOracle};
use legend_parser::parser::node::NodeArena;
use legend_parser::syntax::preorder;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use tracing::{debug, trace};

/// Observable family test: the type's generic family, or its display name
/// when no family is known, starts with `prefix`.
pub fn is_observable_type(ty: &TypeDescriptor, prefix: &str) -> bool {
    ty.is_in_family(prefix)
}

/// Variable declarations whose type is an observable.
pub fn find_observable_declarations(
    arena: &NodeArena,
    root: NodeIndex,
    oracle: &dyn TypeOracle,
    prefix: &str,
) -> Vec<NodeIndex> {
    let nodes: Vec<NodeIndex> = preorder(arena, root)
        .filter(|&idx| arena.is_kind(idx, syntax_kind_ext::VARIABLE_DECLARATION))
        .filter(|&idx| {
            let ty = oracle.type_of(idx);
            trace!(node = idx.0, ty = ?ty.as_ref().map(|t| &t.name), "variable declaration");
            ty.is_some_and(|t| is_observable_type(&t, prefix))
        })
        .collect();
    debug!("Found {} Observable nodes", nodes.len());
    nodes
}

/// `<observable>.use()` calls.
pub fn find_use_calls(
    arena: &NodeArena,
    root: NodeIndex,
    oracle: &dyn TypeOracle,
    prefix: &str,
) -> Vec<NodeIndex> {
    let nodes: Vec<NodeIndex> = preorder(arena, root)
        .filter(|&idx| {
            let Some(receiver) = method_call_receiver(arena, idx, "use") else {
                return false;
            };
            trace!(call = idx.0, "use() call");
            oracle
                .type_of(receiver)
                .is_some_and(|t| is_observable_type(&t, prefix))
        })
        .collect();
    debug!("Found {} Observables nodes with a '.use()' method call", nodes.len());
    nodes
}

/// Calls to a selector hook: `useSelector(...)` by name, or
/// `ns.useSelector(...)` when the member is callable.
pub fn find_selector_calls(
    arena: &NodeArena,
    root: NodeIndex,
    oracle: &dyn TypeOracle,
    hooks: &[String],
) -> Vec<NodeIndex> {
    let is_hook = |name: &str| hooks.iter().any(|hook| hook == name);
    let nodes: Vec<NodeIndex> = preorder(arena, root)
        .filter(|&idx| {
            let Some(call) = arena
                .get(idx)
                .filter(|n| n.kind == syntax_kind_ext::CALL_EXPRESSION)
                .and_then(|n| arena.get_call_expr(n))
            else {
                return false;
            };
            let callee = call.expression;
            let Some(callee_node) = arena.get(callee) else {
                return false;
            };
            if callee_node.kind == SyntaxKind::Identifier as u16 {
                return arena.identifier_text(callee).is_some_and(is_hook);
            }
            if callee_node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION {
                let named_hook = arena
                    .get_access_expr(callee_node)
                    .and_then(|access| arena.identifier_text(access.name_or_argument))
                    .is_some_and(is_hook);
                return named_hook && oracle.call_signatures_of(callee) > 0;
            }
            false
        })
        .collect();
    debug!("Found {} useSelector nodes", nodes.len());
    nodes
}

/// The call a selector's first argument boils down to: the body of
/// `() => call()`, or the argument itself when it is a call. Anything else
/// (block bodies, compound expressions, no argument) is `None`.
pub fn selector_inner_call(arena: &NodeArena, selector_call: NodeIndex) -> Option<NodeIndex> {
    let call = arena.get(selector_call).and_then(|n| arena.get_call_expr(n))?;
    let argument = call.arguments.as_ref()?.first()?;
    let argument_node = arena.get(argument)?;
    let candidate = if argument_node.kind == syntax_kind_ext::ARROW_FUNCTION {
        arena.get_function(argument_node)?.body
    } else {
        argument
    };
    arena
        .is_kind(candidate, syntax_kind_ext::CALL_EXPRESSION)
        .then_some(candidate)
}

/// For `x.get()` with `x` a bound identifier, the identifier `x`.
pub fn single_get_receiver(
    arena: &NodeArena,
    oracle: &dyn TypeOracle,
    call: NodeIndex,
) -> Option<NodeIndex> {
    let receiver = method_call_receiver(arena, call, "get")?;
    if !arena.is_kind(receiver, SyntaxKind::Identifier as u16) {
        return None;
    }
    oracle.symbol_of(receiver).map(|_| receiver)
}

/// Receiver of `receiver.method(...)`.
fn method_call_receiver(arena: &NodeArena, call: NodeIndex, method: &str) -> Option<NodeIndex> {
    let node = arena.get(call)?;
    if node.kind != syntax_kind_ext::CALL_EXPRESSION {
        return None;
    }
    let callee = arena.get_call_expr(node)?.expression;
    let callee_node = arena.get(callee)?;
    if callee_node.kind != syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION {
        return None;
    }
    let access = arena.get_access_expr(callee_node)?;
    (arena.identifier_text(access.name_or_argument)? == method).then_some(access.expression)
}
