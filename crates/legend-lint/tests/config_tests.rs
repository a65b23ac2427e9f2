use std::fs;
use std::path::Path;

use legend_lint::{
    CONFIG_FILE_NAME, LintConfig, LintEngine, RuleKind, find_config, load_config, parse_config,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_accepts_comments_and_trailing_commas() {
    let config = parse_config(
        r#"{
            // turn one rule off
            rules: { "selector-single-get": false, },
            observableSuffix: "Obs",
        }"#,
    )
    .unwrap();
    assert_eq!(config.rules.get("selector-single-get"), Some(&false));
    assert_eq!(config.observable_suffix.as_deref(), Some("Obs"));
}

#[test]
fn test_parse_rejects_unknown_fields() {
    assert!(parse_config(r#"{ "observableSufix": "$" }"#).is_err());
}

#[test]
fn test_empty_config_resolves_to_defaults() {
    let options = LintConfig::default().resolve().unwrap();
    assert!(RuleKind::ALL.iter().all(|&rule| options.rules.is_enabled(rule)));
    assert_eq!(options.observable_suffix, "$");
    assert_eq!(options.observable_type_prefix, "Observable");
    assert_eq!(options.selector_hooks, vec!["useSelector"]);
}

#[test]
fn test_resolve_applies_overrides() {
    let config = parse_config(
        r#"{
            rules: { "observable-naming": false },
            observableTypePrefix: "Store",
            selectorHooks: ["useSelector", "useValue"],
            observableFactories: { createStore: "Store" },
            jsxElementTypes: ["ReactNode"],
        }"#,
    )
    .unwrap();
    let options = config.resolve().unwrap();
    assert!(!options.rules.is_enabled(RuleKind::ObservableNaming));
    assert!(options.rules.is_enabled(RuleKind::UseOutsideComponent));
    assert_eq!(options.observable_type_prefix, "Store");
    assert_eq!(options.checker.observable_type_prefix, "Store");
    assert_eq!(options.checker.factory_family("createStore"), Some("Store"));
    // Built-in factories stay available.
    assert_eq!(options.checker.factory_family("observable"), Some("Observable"));
    assert_eq!(options.checker.jsx_element_type, "ReactNode");
}

#[test]
fn test_unknown_rule_is_an_error() {
    let config = parse_config(r#"{ rules: { "no-such-rule": true } }"#).unwrap();
    let err = config.resolve().unwrap_err();
    assert!(err.to_string().contains("no-such-rule"));
}

#[test]
fn test_empty_prefix_is_an_error() {
    let config = parse_config(r#"{ observableTypePrefix: "" }"#).unwrap();
    assert!(config.resolve().is_err());
}

#[test]
fn test_ignore_patterns() {
    let config = parse_config(r#"{ ignore: ["**/generated/**", "*.d.ts"] }"#).unwrap();
    let set = config.ignore_set().unwrap();
    assert!(set.is_match("src/generated/api.ts"));
    assert!(set.is_match("types.d.ts"));
    assert!(!set.is_match("src/app.tsx"));

    let bad = parse_config(r#"{ ignore: ["src/[oops"] }"#).unwrap();
    assert!(bad.ignore_set().is_err());
}

#[test]
fn test_extends_merges_child_over_base() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "base.json",
        r#"{
            rules: { "observable-naming": false, "selector-single-get": false },
            selectorHooks: ["useSelector", "useValue"],
            observableSuffix: "Obs",
            observableFactories: { createStore: "Observable" },
        }"#,
    );
    let child = write(
        dir.path(),
        CONFIG_FILE_NAME,
        r#"{
            extends: "./base",
            rules: { "selector-single-get": true },
            observableSuffix: "$",
            observableFactories: { makeStore: "Observable" },
        }"#,
    );

    let config = load_config(&child).unwrap();
    assert_eq!(config.extends, None);
    assert_eq!(config.rules.get("observable-naming"), Some(&false));
    assert_eq!(config.rules.get("selector-single-get"), Some(&true));
    assert_eq!(config.observable_suffix.as_deref(), Some("$"));
    assert_eq!(
        config.selector_hooks,
        Some(vec!["useSelector".to_string(), "useValue".to_string()])
    );
    assert_eq!(config.observable_factories.len(), 2);
}

#[test]
fn test_extends_cycle_is_detected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.json", r#"{ extends: "./b.json" }"#);
    let b = write(dir.path(), "b.json", r#"{ extends: "./a.json" }"#);
    let err = load_config(&b).unwrap_err();
    assert!(format!("{err:#}").contains("cycle"));
}

#[test]
fn test_missing_extends_target_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), CONFIG_FILE_NAME, r#"{ extends: "./missing" }"#);
    assert!(load_config(&path).is_err());
}

#[test]
fn test_find_config_walks_up() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("src").join("components");
    fs::create_dir_all(&nested).unwrap();
    let config = write(dir.path(), CONFIG_FILE_NAME, "{}");

    assert_eq!(find_config(&nested), Some(config.clone()));
    assert_eq!(find_config(dir.path()), Some(config));
}

#[test]
fn test_configured_suffix_changes_naming_rule() {
    let options = parse_config(r#"{ observableSuffix: "Obs" }"#)
        .unwrap()
        .resolve()
        .unwrap();
    let engine = LintEngine::new(options);
    let diagnostics =
        engine.lint_source("a.ts", "const countObs = observable(0);\nconst count$ = observable(1);");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Variable 'count$' of type 'Observable' doesn't end with 'Obs'"
    );
}

#[test]
fn test_configured_factory_is_observable() {
    let options = parse_config(r#"{ observableFactories: { createStore: "Observable" } }"#)
        .unwrap()
        .resolve()
        .unwrap();
    let source = "const store = createStore({ a: 1 });";
    assert!(LintEngine::default().lint_source("a.ts", source).is_empty());
    assert_eq!(LintEngine::new(options).lint_source("a.ts", source).len(), 1);
}

#[test]
fn test_configured_selector_hook() {
    let options = parse_config(r#"{ selectorHooks: ["useValue"] }"#)
        .unwrap()
        .resolve()
        .unwrap();
    let source = "const count$ = observable(0);\nuseValue(() => count$.get());\nuseSelector(() => count$.get());";
    let diagnostics = LintEngine::new(options).lint_source("a.ts", source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range.start.line, 1);
}
