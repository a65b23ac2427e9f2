//! The three checks. Each appends its diagnostics, in document order, to
//! the list it is given.

use legend_checker::TypeOracle;
use legend_common::diagnostics::diagnostic_messages;
use legend_common::{Diagnostic, LineMap, format_message};
use legend_parser::parser::node::NodeArena;
use legend_parser::NodeIndex;
use tracing::trace;

use crate::config::LintOptions;
use crate::context::ContextClassifier;
use crate::finders::{
    find_observable_declarations, find_selector_calls, find_use_calls, selector_inner_call,
    single_get_receiver,
};
use crate::rules::RuleKind;

/// One document's inputs to a check.
pub struct CheckContext<'a> {
    pub arena: &'a NodeArena,
    pub root: NodeIndex,
    pub source: &'a str,
    pub line_map: &'a LineMap,
    pub oracle: &'a dyn TypeOracle,
    pub options: &'a LintOptions,
}

impl CheckContext<'_> {
    /// Warning covering `node`'s tokens.
    fn node_diagnostic(&self, rule: RuleKind, node: NodeIndex, message: String) -> Option<Diagnostic> {
        let node = self.arena.get(node)?;
        Some(self.span_diagnostic(rule, node.pos, node.end, message))
    }

    fn span_diagnostic(&self, rule: RuleKind, start: u32, end: u32, message: String) -> Diagnostic {
        let source_len = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        let start = start.min(source_len);
        let end = end.clamp(start, source_len);
        let range = self.line_map.range(start, end, self.source);
        Diagnostic::warning(rule.name(), start, end - start, range, message)
    }
}

pub type CheckFn = fn(&CheckContext<'_>, &mut Vec<Diagnostic>);

pub fn check_fn(rule: RuleKind) -> CheckFn {
    match rule {
        RuleKind::ObservableNaming => check_observable_naming,
        RuleKind::UseOutsideComponent => check_use_outside_component,
        RuleKind::SelectorSingleGet => check_selector_single_get,
    }
}

/// Observable variables must end with the configured suffix. The span is
/// the name only.
pub fn check_observable_naming(cx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
    let suffix = cx.options.observable_suffix.as_str();
    let prefix = cx.options.observable_type_prefix.as_str();
    for decl_idx in find_observable_declarations(cx.arena, cx.root, cx.oracle, prefix) {
        let Some(decl) = cx
            .arena
            .get(decl_idx)
            .and_then(|node| cx.arena.get_variable_declaration(node))
        else {
            continue;
        };
        // Destructuring patterns have no single name to check.
        let Some(name) = cx.arena.identifier_text(decl.name) else {
            continue;
        };
        if name.ends_with(suffix) {
            continue;
        }
        let message = format_message(
            diagnostic_messages::OBSERVABLE_NAME_MISSING_SUFFIX,
            &[name, prefix, suffix],
        );
        out.extend(cx.node_diagnostic(RuleKind::ObservableNaming, decl.name, message));
    }
}

/// `x$.use()` outside any component.
pub fn check_use_outside_component(cx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
    let prefix = cx.options.observable_type_prefix.as_str();
    let classifier = ContextClassifier::new(cx.arena, cx.oracle, cx.options);
    for call in find_use_calls(cx.arena, cx.root, cx.oracle, prefix) {
        if classifier.is_ui_context(call) {
            continue;
        }
        trace!(call = call.0, "use() outside component");
        out.extend(cx.node_diagnostic(
            RuleKind::UseOutsideComponent,
            call,
            diagnostic_messages::OBSERVABLE_USE_OUTSIDE_COMPONENT.to_string(),
        ));
    }
}

/// `useSelector(() => x$.get())` is just `x$.use()`.
pub fn check_selector_single_get(cx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
    let hooks = cx.options.selector_hooks.as_slice();
    for selector in find_selector_calls(cx.arena, cx.root, cx.oracle, hooks) {
        let Some(inner) = selector_inner_call(cx.arena, selector) else {
            continue;
        };
        if single_get_receiver(cx.arena, cx.oracle, inner).is_none() {
            continue;
        }
        out.extend(cx.node_diagnostic(
            RuleKind::SelectorSingleGet,
            selector,
            diagnostic_messages::SELECTOR_WITH_SINGLE_GET.to_string(),
        ));
    }
}
