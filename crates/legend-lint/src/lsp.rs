//! LSP payloads for lint diagnostics.

use legend_common::{Diagnostic, DiagnosticSeverity, Range};
use serde::{Deserialize, Serialize};

/// LSP diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LspDiagnostic {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
}

/// `textDocument/publishDiagnostics` params.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsParams {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    pub diagnostics: Vec<LspDiagnostic>,
}

pub fn convert_diagnostic(diag: &Diagnostic) -> LspDiagnostic {
    LspDiagnostic {
        range: diag.range,
        severity: Some(diag.severity),
        code: Some(diag.code.clone()),
        source: Some(diag.source.clone()),
        message: diag.message.clone(),
    }
}

pub fn publish_diagnostics_params(
    uri: &str,
    version: Option<i32>,
    diagnostics: &[Diagnostic],
) -> PublishDiagnosticsParams {
    PublishDiagnosticsParams {
        uri: uri.to_string(),
        version,
        diagnostics: diagnostics.iter().map(convert_diagnostic).collect(),
    }
}

/// Full JSON-RPC notification, ready to frame and send.
pub fn publish_diagnostics_notification(
    uri: &str,
    version: Option<i32>,
    diagnostics: &[Diagnostic],
) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": "textDocument/publishDiagnostics",
        "params": publish_diagnostics_params(uri, version, diagnostics),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use legend_common::Position;

    #[test]
    fn test_publish_notification_shape() {
        let diag = Diagnostic::warning(
            "selector-single-get",
            10,
            20,
            Range::new(Position::new(1, 2), Position::new(1, 22)),
            "Single .get() method call in useSelector can be replaced with .use() on the variable",
        );
        let value = publish_diagnostics_notification("file:///app.tsx", Some(3), &[diag]);

        assert_eq!(value["method"], "textDocument/publishDiagnostics");
        assert_eq!(value["params"]["uri"], "file:///app.tsx");
        assert_eq!(value["params"]["version"], 3);
        let first = &value["params"]["diagnostics"][0];
        assert_eq!(first["severity"], 2);
        assert_eq!(first["source"], "legend-lint");
        assert_eq!(first["code"], "selector-single-get");
        assert_eq!(first["range"]["start"]["line"], 1);
        assert_eq!(first["range"]["end"]["character"], 22);
    }

    #[test]
    fn test_version_is_omitted_when_unknown() {
        let value = publish_diagnostics_notification("file:///a.ts", None, &[]);
        assert!(value["params"].get("version").is_none());
        assert_eq!(value["params"]["diagnostics"].as_array().map(Vec::len), Some(0));
    }
}
