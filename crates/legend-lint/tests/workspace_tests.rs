use legend_lint::lsp::publish_diagnostics_notification;
use legend_lint::{
    Diagnostic, DiagnosticCollection, DiagnosticSink, LintOptions, LintWorkspace, RuleKind,
    RuleSet,
};

const BAD: &str = "const fooObs = makeObservable(5);\nfooObs.use();";
const GOOD: &str = "const foo$ = makeObservable(5);";

/// Records every call it receives.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<(String, usize)>,
}

impl DiagnosticSink for RecordingSink {
    fn set(&mut self, document: &str, diagnostics: Vec<Diagnostic>) {
        self.calls.push((document.to_string(), diagnostics.len()));
    }
}

#[test]
fn test_unknown_document_leaves_sink_untouched() {
    let workspace = LintWorkspace::default();
    let mut sink = DiagnosticCollection::new();
    assert_eq!(workspace.check_document("file:///missing.tsx", &mut sink), None);
    assert!(sink.is_empty());
}

#[test]
fn test_check_clears_then_sets() {
    let mut workspace = LintWorkspace::default();
    workspace.open_document("file:///a.tsx", BAD.to_string());
    let mut sink = RecordingSink::default();
    assert_eq!(workspace.check_document("file:///a.tsx", &mut sink), Some(2));
    assert_eq!(
        sink.calls,
        vec![
            ("file:///a.tsx".to_string(), 0),
            ("file:///a.tsx".to_string(), 2)
        ]
    );
}

#[test]
fn test_update_replaces_previous_diagnostics() {
    let mut workspace = LintWorkspace::default();
    let mut sink = DiagnosticCollection::new();
    workspace.open_document("file:///a.tsx", BAD.to_string());
    workspace.check_document("file:///a.tsx", &mut sink);
    assert_eq!(sink.get("file:///a.tsx").map(<[Diagnostic]>::len), Some(2));

    assert_eq!(workspace.update_document("file:///a.tsx", GOOD.to_string()), Some(()));
    assert_eq!(workspace.check_document("file:///a.tsx", &mut sink), Some(0));
    assert_eq!(sink.get("file:///a.tsx").map(<[Diagnostic]>::len), Some(0));
    assert_eq!(
        workspace.document("file:///a.tsx").map(|d| d.source_text()),
        Some(GOOD)
    );
}

#[test]
fn test_update_of_unknown_document() {
    let mut workspace = LintWorkspace::default();
    assert_eq!(workspace.update_document("file:///nope.ts", GOOD.to_string()), None);
    assert_eq!(workspace.document_count(), 0);
}

#[test]
fn test_close_keeps_last_published_entry() {
    let mut workspace = LintWorkspace::default();
    let mut sink = DiagnosticCollection::new();
    workspace.open_document("file:///a.tsx", BAD.to_string());
    workspace.check_document("file:///a.tsx", &mut sink);

    assert!(workspace.close_document("file:///a.tsx").is_some());
    assert_eq!(workspace.check_document("file:///a.tsx", &mut sink), None);
    assert_eq!(sink.get("file:///a.tsx").map(<[Diagnostic]>::len), Some(2));
}

#[test]
fn test_check_all_in_uri_order() {
    let mut workspace = LintWorkspace::default();
    workspace.open_document("file:///b.tsx", BAD.to_string());
    workspace.open_document("file:///a.tsx", GOOD.to_string());
    workspace.open_document("file:///c.tsx", BAD.to_string());

    let mut sink = DiagnosticCollection::new();
    assert_eq!(workspace.check_all(&mut sink), 4);
    let order: Vec<&str> = sink.iter().map(|(uri, _)| uri).collect();
    assert_eq!(order, vec!["file:///a.tsx", "file:///b.tsx", "file:///c.tsx"]);
    assert_eq!(sink.total(), 4);
}

#[test]
fn test_set_options_applies_to_next_check() {
    let mut workspace = LintWorkspace::default();
    workspace.open_document("file:///a.tsx", BAD.to_string());
    workspace.set_options(LintOptions {
        rules: RuleSet::only(&[RuleKind::UseOutsideComponent]),
        ..LintOptions::default()
    });
    let mut sink = DiagnosticCollection::new();
    assert_eq!(workspace.check_document("file:///a.tsx", &mut sink), Some(1));
    let diagnostics = sink.get("file:///a.tsx").unwrap();
    assert_eq!(diagnostics[0].code, "use-outside-component");
}

#[test]
fn test_published_notification_for_document() {
    let mut workspace = LintWorkspace::default();
    workspace.open_document("file:///a.tsx", BAD.to_string());
    let mut sink = DiagnosticCollection::new();
    workspace.check_document("file:///a.tsx", &mut sink);

    let diagnostics = sink.get("file:///a.tsx").unwrap();
    let value = publish_diagnostics_notification("file:///a.tsx", Some(1), diagnostics);
    let published = value["params"]["diagnostics"].as_array().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0]["code"], "observable-naming");
    assert_eq!(published[0]["range"]["start"]["character"], 6);
    assert_eq!(published[1]["range"]["start"]["line"], 1);
}
