//! Runs the enabled checks over a document.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use legend_checker::CheckerState;
use legend_common::Diagnostic;
use tracing::{debug, info_span, warn};

use crate::checks::{CheckContext, CheckFn, check_fn};
use crate::config::LintOptions;
use crate::document::LintDocument;
use crate::rules::RuleKind;

/// Checks run in [`RuleKind::ALL`] order and their results are concatenated.
/// Nothing is deduplicated or carried over between runs.
#[derive(Debug, Clone, Default)]
pub struct LintEngine {
    options: LintOptions,
}

impl LintEngine {
    pub fn new(options: LintOptions) -> LintEngine {
        LintEngine { options }
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Parse, bind and check `source_text` in one go.
    pub fn lint_source(&self, file_name: &str, source_text: &str) -> Vec<Diagnostic> {
        let document = LintDocument::new(file_name.to_string(), source_text.to_string());
        self.check_document(&document)
    }

    pub fn check_document(&self, document: &LintDocument) -> Vec<Diagnostic> {
        let span = info_span!("lint_document", file = %document.file_name());
        let _enter = span.enter();

        let checker = CheckerState::new(document.arena(), document.binder(), &self.options.checker);
        let cx = CheckContext {
            arena: document.arena(),
            root: document.root(),
            source: document.source_text(),
            line_map: document.line_map(),
            oracle: &checker,
            options: &self.options,
        };
        let checks: Vec<(RuleKind, CheckFn)> = self
            .options
            .rules
            .iter()
            .map(|rule| (rule, check_fn(rule)))
            .collect();
        let diagnostics = run_checks(&cx, &checks);
        debug!("Found {} diagnostics", diagnostics.len());
        diagnostics
    }
}

/// Run `checks` in order. A check that panics contributes nothing and the
/// rest still run.
pub fn run_checks(cx: &CheckContext<'_>, checks: &[(RuleKind, CheckFn)]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for &(rule, check) in checks {
        let span = info_span!("check", rule = rule.name());
        let _enter = span.enter();
        let mut found = Vec::new();
        match panic::catch_unwind(AssertUnwindSafe(|| check(cx, &mut found))) {
            Ok(()) => {
                debug!(rule = rule.name(), count = found.len(), "check finished");
                diagnostics.append(&mut found);
            }
            Err(payload) => {
                warn!(
                    rule = rule.name(),
                    panic = panic_message(payload.as_ref()),
                    "check panicked; its findings were dropped"
                );
            }
        }
    }
    diagnostics
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
