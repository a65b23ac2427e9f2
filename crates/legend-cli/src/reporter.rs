use colored::Colorize;
use legend_common::{Diagnostic, DiagnosticSeverity, LineMap};
use serde::Serialize;
use std::collections::HashMap;

use crate::driver::FileReport;

/// Renders diagnostics in the `file:line:col - warning rule: message` style,
/// followed by the offending source line and a `~~~` underline.
pub struct Reporter {
    color: bool,
    sources: HashMap<String, String>,
    line_maps: HashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: HashMap::new(),
            line_maps: HashMap::new(),
        }
    }

    /// Register the text a file's diagnostics point into.
    pub fn add_source(&mut self, file: &str, text: &str) {
        self.line_maps.insert(file.to_string(), LineMap::build(text));
        self.sources.insert(file.to_string(), text.to_string());
    }

    pub fn render_reports(&mut self, reports: &[FileReport]) -> String {
        let mut blocks = Vec::new();
        for report in reports {
            if report.diagnostics.is_empty() {
                continue;
            }
            self.add_source(&report.file, &report.source);
            blocks.push(self.render(&report.file, &report.diagnostics));
        }
        blocks.join("\n\n")
    }

    pub fn render(&self, file: &str, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(file, diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, file: &str, diagnostic: &Diagnostic) -> String {
        let start = diagnostic.range.start;
        let mut output = self.format_location(file, start.line + 1, start.character + 1);
        output.push_str(" - ");
        output.push_str(&self.format_severity(diagnostic.severity));
        output.push(' ');
        output.push_str(&self.format_code(&diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message);

        if let Some(snippet) = self.format_snippet(file, diagnostic) {
            output.push_str(&snippet);
        }
        output
    }

    /// ```text
    ///     2   const fooObs = observable(0);
    ///               ~~~~~~
    /// ```
    fn format_snippet(&self, file: &str, diagnostic: &Diagnostic) -> Option<String> {
        let source = self.sources.get(file)?;
        let line_map = self.line_maps.get(file)?;
        let range = diagnostic.range;
        let line_text = line_map.line_text(range.start.line as usize, source)?;

        // Multi-line spans are underlined to the end of their first line.
        let underline_end = if range.end.line == range.start.line {
            range.end.character
        } else {
            u32::MAX
        };

        let mut display = String::new();
        let mut underline = String::new();
        let mut column = 0u32;
        for ch in line_text.chars() {
            let width = if ch == '\t' { 4 } else { 1 };
            if column < range.start.character {
                underline.push_str(&" ".repeat(width));
            } else if column < underline_end {
                underline.push_str(&"~".repeat(width));
            }
            if ch == '\t' {
                display.push_str("    ");
            } else {
                display.push(ch);
            }
            column += ch.len_utf16() as u32;
        }
        // Empty spans (or spans at the line end) still get one marker.
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.yellow().to_string()
        } else {
            underline
        };
        Some(format!(
            "\n  {:>3}   {}\n        {}",
            range.start.line + 1,
            display,
            underline
        ))
    }

    fn format_location(&self, file: &str, line: u32, column: u32) -> String {
        let location = format!("{file}:{line}:{column}");
        if self.color {
            location.cyan().to_string()
        } else {
            location
        }
    }

    fn format_severity(&self, severity: DiagnosticSeverity) -> String {
        let label = severity.as_str();
        if !self.color {
            return label.to_string();
        }
        match severity {
            DiagnosticSeverity::Error => label.red().bold().to_string(),
            DiagnosticSeverity::Warning => label.yellow().bold().to_string(),
            DiagnosticSeverity::Information => label.blue().bold().to_string(),
            DiagnosticSeverity::Hint => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: &str) -> String {
        if self.color {
            code.bright_blue().to_string()
        } else {
            code.to_string()
        }
    }
}

/// Closing line, e.g. `Found 3 warnings in 2 files.`
pub fn summary(reports: &[FileReport]) -> Option<String> {
    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    if total == 0 {
        return None;
    }
    let noun = if total == 1 { "warning" } else { "warnings" };
    let files: Vec<&FileReport> = reports.iter().filter(|r| !r.diagnostics.is_empty()).collect();
    Some(match files.as_slice() {
        [only] => format!("Found {total} {noun} in {}.", only.file),
        _ => format!("Found {total} {noun} in {} files.", files.len()),
    })
}

#[derive(Serialize)]
struct JsonFileReport<'a> {
    file: &'a str,
    diagnostics: &'a [Diagnostic],
}

/// Every file (clean ones included) as a JSON array.
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    let files: Vec<JsonFileReport<'_>> = reports
        .iter()
        .map(|report| JsonFileReport {
            file: &report.file,
            diagnostics: &report.diagnostics,
        })
        .collect();
    serde_json::to_string_pretty(&files)
}
