use legend_cli::driver::{FileReport, lint_text};
use legend_cli::reporter::{Reporter, summary};
use legend_lint::LintEngine;

fn report(file: &str, source: &str) -> FileReport {
    lint_text(&LintEngine::default(), file, source.to_string())
}

#[test]
fn test_diagnostic_with_snippet() {
    let report = report("app.tsx", "const fooObs = makeObservable(5);");
    let mut reporter = Reporter::new(false);
    reporter.add_source(&report.file, &report.source);
    let text = reporter.render(&report.file, &report.diagnostics);
    assert_eq!(
        text,
        "app.tsx:1:7 - warning observable-naming: Variable 'fooObs' of type 'Observable' doesn't end with '$'\n\
         \x20   1   const fooObs = makeObservable(5);\n\
         \x20             ~~~~~~"
    );
}

#[test]
fn test_tabs_expand_in_snippet() {
    let report = report("a.ts", "const count$ = observable(0);\n\tcount$.use();");
    let mut reporter = Reporter::new(false);
    let text = reporter.render_reports(std::slice::from_ref(&report));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "a.ts:2:2 - warning use-outside-component: Observable.use() called outside of a React component");
    assert_eq!(lines[1], "    2       count$.use();");
    assert_eq!(lines[2], "            ~~~~~~~~~~~~");
}

#[test]
fn test_clean_files_render_nothing() {
    let clean = report("clean.ts", "const a$ = observable(1);");
    let mut reporter = Reporter::new(false);
    assert!(reporter.render_reports(&[clean.clone()]).is_empty());
    assert_eq!(summary(&[clean]), None);
}

#[test]
fn test_summary_lines() {
    let one = report("one.ts", "const a = observable(1);");
    let two = report("two.ts", "const b = observable(1);\nconst c = observable(2);");
    let clean = report("clean.ts", "");

    assert_eq!(
        summary(&[one.clone(), clean.clone()]).as_deref(),
        Some("Found 1 warning in one.ts.")
    );
    assert_eq!(
        summary(&[one, two, clean]).as_deref(),
        Some("Found 3 warnings in 2 files.")
    );
}
