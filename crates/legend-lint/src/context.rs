//! Is a node inside something that renders UI?
//!
//! A *UI root* is either a class whose first `extends` clause names one of
//! the configured component base classes, or a function/arrow whose own body
//! returns markup (`<div/>`, `<></>`, possibly parenthesized). The check for
//! a node walks its ancestors outward and stops at the first UI root.

use legend_checker::TypeOracle;
use legend_parser::parser::node::NodeArena;
use legend_parser::syntax::ancestors;
use legend_parser::{NodeIndex, syntax_kind_ext};
use legend_scanner::SyntaxKind;
use smallvec::SmallVec;
use tracing::trace;

use crate::config::LintOptions;

pub struct ContextClassifier<'a> {
    arena: &'a NodeArena,
    oracle: &'a dyn TypeOracle,
    options: &'a LintOptions,
}

impl<'a> ContextClassifier<'a> {
    pub fn new(
        arena: &'a NodeArena,
        oracle: &'a dyn TypeOracle,
        options: &'a LintOptions,
    ) -> ContextClassifier<'a> {
        ContextClassifier {
            arena,
            oracle,
            options,
        }
    }

    /// Whether `node` is lexically nested inside a UI root.
    pub fn is_ui_context(&self, node: NodeIndex) -> bool {
        self.enclosing_ui_root(node).is_some()
    }

    /// Nearest ancestor of `node` that is a UI root.
    pub fn enclosing_ui_root(&self, node: NodeIndex) -> Option<NodeIndex> {
        ancestors(self.arena, node).find(|&ancestor| self.is_ui_root(ancestor))
    }

    pub fn is_ui_root(&self, node: NodeIndex) -> bool {
        let Some(kind) = self.arena.kind_of(node) else {
            return false;
        };
        if syntax_kind_ext::is_class_like(kind) {
            return self.is_component_class(node);
        }
        if kind == syntax_kind_ext::FUNCTION_DECLARATION
            || kind == syntax_kind_ext::FUNCTION_EXPRESSION
            || kind == syntax_kind_ext::ARROW_FUNCTION
        {
            return self.is_component_function(node);
        }
        false
    }

    fn is_component_class(&self, class_idx: NodeIndex) -> bool {
        let Some(class) = self.arena.get(class_idx).and_then(|n| self.arena.get_class(n)) else {
            return false;
        };
        // Only the first clause counts, and only when it is `extends`.
        let Some(heritage) = class
            .heritage_clauses
            .as_ref()
            .and_then(|clauses| clauses.first())
            .and_then(|clause| self.arena.get(clause))
            .and_then(|node| self.arena.get_heritage_clause(node))
        else {
            return false;
        };
        if heritage.token != SyntaxKind::ExtendsKeyword as u16 {
            return false;
        }
        let Some(base) = heritage.types.first() else {
            return false;
        };
        let expression = self
            .arena
            .get(base)
            .and_then(|node| self.arena.get_expr_type_args(node))
            .map_or(base, |expr| expr.expression);
        let Some(symbol) = self.oracle.symbol_of(expression) else {
            return false;
        };
        trace!(class = class_idx.0, base = %symbol.name, "class base");
        self.options
            .component_base_classes
            .iter()
            .any(|name| *name == symbol.name)
    }

    fn is_component_function(&self, function: NodeIndex) -> bool {
        let Some(func) = self.arena.get(function).and_then(|n| self.arena.get_function(n)) else {
            return false;
        };
        let body = func.body;
        let is_block = self.arena.is_kind(body, syntax_kind_ext::BLOCK);
        if !is_block && self.is_markup(body) {
            return true;
        }
        if is_block && self.returns_markup(body) {
            return true;
        }
        self.oracle
            .return_type_name_of(function)
            .is_some_and(|name| self.options.jsx_element_types.contains(&name))
    }

    /// JSX element, self-closing element or fragment, seen through parentheses.
    fn is_markup(&self, expr: NodeIndex) -> bool {
        let expr = self.arena.skip_parentheses(expr);
        self.arena
            .kind_of(expr)
            .is_some_and(syntax_kind_ext::is_jsx_markup)
    }

    /// Whether a `return <markup>` belongs to this body. Nested functions
    /// are classified on their own and are not entered.
    fn returns_markup(&self, body: NodeIndex) -> bool {
        let mut stack: SmallVec<[NodeIndex; 32]> = SmallVec::new();
        self.arena.for_each_child(body, |child| stack.push(child));
        while let Some(idx) = stack.pop() {
            let Some(node) = self.arena.get(idx) else {
                continue;
            };
            if syntax_kind_ext::is_function_like(node.kind) {
                continue;
            }
            if node.kind == syntax_kind_ext::RETURN_STATEMENT {
                if self
                    .arena
                    .get_return_statement(node)
                    .is_some_and(|ret| self.is_markup(ret.expression))
                {
                    return true;
                }
                continue;
            }
            self.arena.for_each_child(idx, |child| stack.push(child));
        }
        false
    }
}
