//! Diagnostic types and message templates for the rule engine.
//!
//! Every diagnostic produced by legend-lint is a warning tagged with
//! [`DIAGNOSTIC_SOURCE`]. Messages are built from the templates in
//! [`diagnostic_messages`] with [`format_message`].

use serde::{Deserialize, Serialize};

use crate::position::Range;

/// Source tag attached to every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "legend-lint";

/// Diagnostic severity level (matches LSP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum DiagnosticSeverity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

impl From<DiagnosticSeverity> for u8 {
    fn from(severity: DiagnosticSeverity) -> u8 {
        severity as u8
    }
}

impl TryFrom<u8> for DiagnosticSeverity {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, <DiagnosticSeverity as TryFrom<u8>>::Error> {
        match value {
            1 => Ok(Self::Error),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Information),
            4 => Ok(Self::Hint),
            _ => Err("invalid diagnostic severity"),
        }
    }
}

impl DiagnosticSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "info",
            Self::Hint => "hint",
        }
    }
}

/// A lint finding.
///
/// `start`/`length` are byte offsets into the document; `range` is the same
/// span in zero-based line/character form. Diagnostics have no identity
/// beyond their content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub source: String,
    /// Name of the rule that produced this diagnostic.
    pub code: String,
    pub start: u32,
    pub length: u32,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    #[must_use]
    pub fn warning(
        code: impl Into<String>,
        start: u32,
        length: u32,
        range: Range,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            source: DIAGNOSTIC_SOURCE.to_string(),
            code: code.into(),
            start,
            length,
        }
    }

    /// Byte offset one past the end of the diagnostic span.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

/// Message templates. `{0}`, `{1}`, ... are filled by [`format_message`].
pub mod diagnostic_messages {
    /// {0}: variable name, {1}: observable type family, {2}: required suffix
    pub const OBSERVABLE_NAME_MISSING_SUFFIX: &str =
        "Variable '{0}' of type '{1}' doesn't end with '{2}'";
    pub const OBSERVABLE_USE_OUTSIDE_COMPONENT: &str =
        "Observable.use() called outside of a React component";
    pub const SELECTOR_WITH_SINGLE_GET: &str =
        "Single .get() method call in useSelector can be replaced with .use() on the variable";
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn naming_template_matches_expected_text() {
        let message = format_message(
            diagnostic_messages::OBSERVABLE_NAME_MISSING_SUFFIX,
            &["fooObs", "Observable", "$"],
        );
        assert_eq!(
            message,
            "Variable 'fooObs' of type 'Observable' doesn't end with '$'"
        );
    }

    #[test]
    fn severity_serializes_as_lsp_number() {
        let diag = Diagnostic::warning(
            "observable-naming",
            0,
            3,
            Range::new(Position::new(0, 0), Position::new(0, 3)),
            "msg",
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], 2);
        assert_eq!(json["source"], "legend-lint");
        assert_eq!(diag.end(), 3);
    }
}
