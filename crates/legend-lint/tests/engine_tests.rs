use legend_checker::CheckerState;
use legend_common::Diagnostic;
use legend_lint::checks::{CheckContext, CheckFn, check_observable_naming, check_selector_single_get};
use legend_lint::engine::run_checks;
use legend_lint::{LintDocument, LintEngine, LintOptions, RuleKind, RuleSet};

const USE_OUTSIDE: &str = "Observable.use() called outside of a React component";
const SINGLE_GET: &str =
    "Single .get() method call in useSelector can be replaced with .use() on the variable";

fn lint(source: &str) -> Vec<Diagnostic> {
    LintEngine::default().lint_source("test.tsx", source)
}

fn lint_rule(source: &str, rule: RuleKind) -> Vec<Diagnostic> {
    lint(source)
        .into_iter()
        .filter(|d| d.code == rule.name())
        .collect()
}

/// Source text a diagnostic covers.
fn covered<'a>(source: &'a str, diag: &Diagnostic) -> &'a str {
    &source[diag.start as usize..diag.end() as usize]
}

// =============================================================================
// observable-naming
// =============================================================================

#[test]
fn test_naming_flags_missing_suffix() {
    let source = "const fooObs = makeObservable(5);";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.code, "observable-naming");
    assert_eq!(
        diag.message,
        "Variable 'fooObs' of type 'Observable' doesn't end with '$'"
    );
    assert_eq!(covered(source, diag), "fooObs");
    assert_eq!(diag.range.start.line, 0);
    assert_eq!(diag.range.start.character, 6);
    assert_eq!(diag.range.end.character, 12);
    assert_eq!(diag.source, "legend-lint");
}

#[test]
fn test_naming_accepts_dollar_suffix() {
    assert!(lint_rule("const count$ = makeObservable(0);", RuleKind::ObservableNaming).is_empty());
}

#[test]
fn test_naming_one_diagnostic_per_declaration() {
    let source = "const a = observable(1);\n\
                  const b$ = observable(2);\n\
                  function f() {\n  let c = computed(() => 3);\n}\n\
                  const plain = 4;";
    let names: Vec<String> = lint_rule(source, RuleKind::ObservableNaming)
        .iter()
        .map(|d| covered(source, d).to_string())
        .collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn test_naming_uses_annotation() {
    let source = "const store: Observable<number> = createStore();";
    let diagnostics = lint_rule(source, RuleKind::ObservableNaming);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(covered(source, &diagnostics[0]), "store");
}

#[test]
fn test_naming_is_case_sensitive_exact_suffix() {
    let source = "const countS = observable(0);\nconst count$$ = observable(0);";
    let diagnostics = lint_rule(source, RuleKind::ObservableNaming);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("'countS'"));
}

#[test]
fn test_naming_skips_destructuring() {
    let source = "const { a } = observable({ a: 1 });";
    assert!(lint_rule(source, RuleKind::ObservableNaming).is_empty());
}

#[test]
fn test_naming_range_counts_utf16_units() {
    let source = "const s = \"\u{1F600}\"; const fooObs = makeObservable(0);";
    let diagnostics = lint_rule(source, RuleKind::ObservableNaming);
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.start, 24);
    assert_eq!(diag.range.start.character, 22);
    assert_eq!(diag.range.end.character, 28);
}

// =============================================================================
// use-outside-component
// =============================================================================

#[test]
fn test_use_inside_component_is_fine() {
    let source = "const count$ = makeObservable(0);\n\
                  function App() {\n  const value = count$.use();\n  return <div>{value}</div>;\n}";
    assert!(lint(source).is_empty());
}

#[test]
fn test_use_at_top_level_is_flagged() {
    let source = "const count$ = makeObservable(0);\ncount$.use();";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, USE_OUTSIDE);
    assert_eq!(diagnostics[0].code, "use-outside-component");
    assert_eq!(covered(source, &diagnostics[0]), "count$.use()");
    assert_eq!(diagnostics[0].range.start.line, 1);
}

#[test]
fn test_use_in_class_component_is_fine() {
    let source = "import React from \"react\";\n\
                  const count$ = makeObservable(0);\n\
                  class Counter extends React.Component {\n  render() {\n    const v = count$.use();\n    return <div>{v}</div>;\n  }\n}";
    assert!(lint_rule(source, RuleKind::UseOutsideComponent).is_empty());
}

#[test]
fn test_use_in_plain_function_is_flagged() {
    let source = "const count$ = makeObservable(0);\nfunction read() {\n  return count$.use();\n}";
    assert_eq!(lint_rule(source, RuleKind::UseOutsideComponent).len(), 1);
}

#[test]
fn test_use_on_non_observable_is_ignored() {
    let source = "const api = { use() { return 1; } };\napi.use();";
    assert!(lint(source).is_empty());
}

#[test]
fn test_use_on_observable_child() {
    let source = "const state$ = observable({ user: { name: \"\" } });\nstate$.user.name.use();";
    let diagnostics = lint_rule(source, RuleKind::UseOutsideComponent);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(covered(source, &diagnostics[0]), "state$.user.name.use()");
}

// =============================================================================
// selector-single-get
// =============================================================================

#[test]
fn test_selector_single_get_is_flagged() {
    let source = "import { useSelector } from \"@legendapp/state/react\";\n\
                  const count$ = makeObservable(0);\n\
                  function App() {\n  const v = useSelector(() => count$.get());\n  return <div>{v}</div>;\n}";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, SINGLE_GET);
    assert_eq!(covered(source, &diagnostics[0]), "useSelector(() => count$.get())");
}

#[test]
fn test_selector_compound_body_is_not_flagged() {
    let source = "const count$ = makeObservable(0);\nconst other$ = makeObservable(1);\n\
                  useSelector(() => count$.get() + other$.get());";
    assert!(lint_rule(source, RuleKind::SelectorSingleGet).is_empty());
}

#[test]
fn test_selector_direct_call_argument() {
    let source = "const count$ = makeObservable(0);\nuseSelector(count$.get());";
    assert_eq!(lint_rule(source, RuleKind::SelectorSingleGet).len(), 1);
}

#[test]
fn test_selector_shapes_that_are_left_alone() {
    let source = "const count$ = makeObservable(0);\nconst state$ = observable({ a: 1 });\n\
                  useSelector(() => { return count$.get(); });\n\
                  useSelector(() => missing.get());\n\
                  useSelector(() => state$.a.get());\n\
                  useSelector(() => count$.peek());\n\
                  useSelector();";
    assert!(lint_rule(source, RuleKind::SelectorSingleGet).is_empty());
}

#[test]
fn test_selector_only_first_argument_counts() {
    let source = "const count$ = makeObservable(0);\nuseSelector(() => 1, () => count$.get());";
    assert!(lint_rule(source, RuleKind::SelectorSingleGet).is_empty());
}

#[test]
fn test_namespaced_selector_is_flagged() {
    let source = "import * as legend from \"@legendapp/state/react\";\n\
                  const count$ = makeObservable(0);\n\
                  legend.useSelector(() => count$.get());";
    let diagnostics = lint_rule(source, RuleKind::SelectorSingleGet);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(covered(source, &diagnostics[0]), "legend.useSelector(() => count$.get())");
}

#[test]
fn test_non_callable_member_named_like_selector() {
    let source = "const count$ = makeObservable(0);\nconst api = { useSelector: 5 };\n\
                  api.useSelector(() => count$.get());";
    assert!(lint_rule(source, RuleKind::SelectorSingleGet).is_empty());
}

// =============================================================================
// Engine
// =============================================================================

#[test]
fn test_checks_run_in_fixed_order() {
    let source = "const count$ = makeObservable(0);\n\
                  useSelector(() => count$.get());\n\
                  count$.use();\n\
                  const fooObs = makeObservable(1);";
    let codes: Vec<String> = lint(source).into_iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec!["observable-naming", "use-outside-component", "selector-single-get"]
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let source = "const fooObs = makeObservable(5);\nfooObs.use();\nuseSelector(() => fooObs.get());";
    let engine = LintEngine::default();
    let first = engine.lint_source("a.tsx", source);
    let second = engine.lint_source("a.tsx", source);
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    let document = LintDocument::new("a.tsx".to_string(), source.to_string());
    assert_eq!(engine.check_document(&document), engine.check_document(&document));
}

#[test]
fn test_ranges_stay_within_document() {
    let source = "const a = observable(0);\na.use();\nuseSelector(() => a.get())";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 3);
    let last_line = u32::try_from(source.lines().count()).unwrap() - 1;
    for diag in &diagnostics {
        assert!(diag.end() as usize <= source.len());
        assert!(diag.range.start <= diag.range.end);
        assert!(diag.range.end.line <= last_line);
    }
}

#[test]
fn test_disabled_rules_do_not_run() {
    let options = LintOptions {
        rules: RuleSet::only(&[RuleKind::SelectorSingleGet]),
        ..LintOptions::default()
    };
    let source = "const fooObs = makeObservable(5);\nfooObs.use();\nuseSelector(() => fooObs.get());";
    let diagnostics = LintEngine::new(options).lint_source("a.tsx", source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "selector-single-get");
}

#[test]
fn test_parse_errors_do_not_stop_analysis() {
    let source = "const fooObs = makeObservable(5);\nconst broken = ;\nconst barObs = observable(1);";
    let diagnostics = lint_rule(source, RuleKind::ObservableNaming);
    assert_eq!(diagnostics.len(), 2);
}

/// Lints `source` on a thread with the stack size rayon and libtest use.
fn lint_on_small_stack(source: String) -> Vec<Diagnostic> {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || lint(&source))
        .unwrap()
        .join()
        .unwrap()
}

fn nested_arrows(depth: usize) -> String {
    format!(
        "const fooObs = makeObservable(5);\nconst a = {}1;\n",
        "() => ".repeat(depth)
    )
}

#[test]
fn test_deep_nesting_fits_small_stack() {
    for depth in [490, 999, 5_000] {
        let diagnostics = lint_on_small_stack(nested_arrows(depth));
        assert_eq!(diagnostics.len(), 1, "depth {depth}");
        assert_eq!(diagnostics[0].code, "observable-naming");
    }
}

fn panicking_check(_cx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
    out.clear();
    panic!("check blew up");
}

#[test]
fn test_panicking_check_is_isolated() {
    let source = "const fooObs = makeObservable(5);\nuseSelector(() => fooObs.get());";
    let document = LintDocument::new("a.tsx".to_string(), source.to_string());
    let options = LintOptions::default();
    let checker = CheckerState::new(document.arena(), document.binder(), &options.checker);
    let cx = CheckContext {
        arena: document.arena(),
        root: document.root(),
        source: document.source_text(),
        line_map: document.line_map(),
        oracle: &checker,
        options: &options,
    };
    let checks: Vec<(RuleKind, CheckFn)> = vec![
        (RuleKind::ObservableNaming, check_observable_naming),
        (RuleKind::UseOutsideComponent, panicking_check),
        (RuleKind::SelectorSingleGet, check_selector_single_get),
    ];
    let diagnostics = run_checks(&cx, &checks);
    let codes: Vec<&str> = diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["observable-naming", "selector-single-get"]);
}
