use clap::Parser;
use legend_cli::args::{CliArgs, OutputFormat};
use legend_cli::driver::{
    EXIT_FATAL, EXIT_SUCCESS, EXIT_TOO_MANY_WARNINGS, discover_files, has_source_extension, lint,
    render_output,
};
use globset::GlobSetBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NAMING: &str = "const fooObs = makeObservable(5);\n";
const USE: &str = "const count$ = makeObservable(0);\ncount$.use();\n";
const CLEAN: &str = "const count$ = makeObservable(0);\n";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A project with its own config so no outer `legend-lint.json` is picked up.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "legend-lint.json", "{}");
    write(dir.path(), "src/b_naming.ts", NAMING);
    write(dir.path(), "src/a_use.tsx", USE);
    write(dir.path(), "src/clean.tsx", CLEAN);
    dir
}

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("legend-lint").chain(argv.iter().copied()))
}

fn relative(paths: &[PathBuf], root: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_discovery_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/app.tsx", CLEAN);
    write(dir.path(), "src/util.mts", CLEAN);
    write(dir.path(), "src/readme.md", "# hi");
    write(dir.path(), "src/generated/api.ts", CLEAN);
    write(dir.path(), "node_modules/pkg/index.ts", CLEAN);
    write(dir.path(), ".cache/tmp.ts", CLEAN);

    let mut builder = GlobSetBuilder::new();
    builder.add(globset::Glob::new("src/generated/**").unwrap());
    let ignore = builder.build().unwrap();

    let files = discover_files(&[], dir.path(), &ignore).unwrap();
    assert_eq!(relative(&files, dir.path()), vec!["src/app.tsx", "src/util.mts"]);
}

#[test]
fn test_explicit_files_are_kept() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "script.js", CLEAN);
    write(dir.path(), "lib/a.ts", CLEAN);
    let ignore = GlobSetBuilder::new().build().unwrap();
    let files = discover_files(
        &[PathBuf::from("script.js"), PathBuf::from("lib"), PathBuf::from("lib/a.ts")],
        dir.path(),
        &ignore,
    )
    .unwrap();
    assert_eq!(relative(&files, dir.path()), vec!["lib/a.ts", "script.js"]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let ignore = GlobSetBuilder::new().build().unwrap();
    assert!(discover_files(&[PathBuf::from("nope")], dir.path(), &ignore).is_err());
}

#[test]
fn test_source_extensions() {
    for name in ["a.ts", "a.tsx", "a.js", "a.jsx", "a.mts", "a.cts"] {
        assert!(has_source_extension(Path::new(name)), "{name}");
    }
    for name in ["a.json", "a.d", "Makefile", "a.vue"] {
        assert!(!has_source_extension(Path::new(name)), "{name}");
    }
}

#[test]
fn test_lint_reports_in_path_order() {
    let dir = project();
    let result = lint(&args(&["src"]), dir.path()).unwrap();
    let files: Vec<&str> = result.reports.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(
        files.iter().map(|f| f.replace('\\', "/")).collect::<Vec<_>>(),
        vec!["src/a_use.tsx", "src/b_naming.ts", "src/clean.tsx"]
    );
    assert_eq!(result.reports[0].diagnostics[0].code, "use-outside-component");
    assert_eq!(result.reports[1].diagnostics[0].code, "observable-naming");
    assert!(result.reports[2].diagnostics.is_empty());
    assert_eq!(result.warning_count(), 2);
}

#[test]
fn test_unreadable_file_does_not_stop_the_run() {
    let dir = project();
    fs::write(dir.path().join("src/latin1.js"), b"const caf\xe9 = 1;\n").unwrap();

    let result = lint(&args(&["src"]), dir.path()).unwrap();
    assert_eq!(result.reports.len(), 3);
    assert_eq!(result.warning_count(), 2);
    assert_eq!(result.reports[1].diagnostics[0].code, "observable-naming");

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].file.replace('\\', "/"), "src/latin1.js");
    assert_eq!(result.exit_status(None), EXIT_FATAL);

    let output = render_output(&result, OutputFormat::Text, false).unwrap();
    assert!(output.ends_with("Found 2 warnings in 2 files."));
}

#[test]
fn test_rule_flags() {
    let dir = project();
    let only = lint(&args(&["--rule", "observable-naming", "src"]), dir.path()).unwrap();
    assert_eq!(only.warning_count(), 1);
    assert_eq!(only.reports[1].diagnostics.len(), 1);

    let disabled = lint(&args(&["--disable", "observable-naming", "src"]), dir.path()).unwrap();
    assert_eq!(disabled.warning_count(), 1);
    assert_eq!(disabled.reports[0].diagnostics.len(), 1);
}

#[test]
fn test_unknown_rule_flag_is_rejected() {
    assert!(CliArgs::try_parse_from(["legend-lint", "--rule", "nope"]).is_err());
}

#[test]
fn test_config_file_is_applied() {
    let dir = project();
    write(
        dir.path(),
        "legend-lint.json",
        r#"{ rules: { "use-outside-component": false }, ignore: ["**/b_*.ts"] }"#,
    );
    let result = lint(&args(&["src"]), dir.path()).unwrap();
    assert_eq!(result.reports.len(), 2);
    assert_eq!(result.warning_count(), 0);
}

#[test]
fn test_explicit_config_path() {
    let dir = project();
    write(dir.path(), "configs/strict.json", r#"{ observableSuffix: "Obs" }"#);
    let result = lint(&args(&["--config", "configs/strict.json", "src"]), dir.path()).unwrap();
    // count$ in a_use.tsx and clean.tsx now break the naming rule; fooObs is fine.
    let naming: usize = result
        .reports
        .iter()
        .flat_map(|r| &r.diagnostics)
        .filter(|d| d.code == "observable-naming")
        .count();
    assert_eq!(naming, 2);
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = project();
    write(dir.path(), "legend-lint.json", r#"{ rules: { "bogus": true } }"#);
    assert!(lint(&args(&["src"]), dir.path()).is_err());
}

#[test]
fn test_exit_status_with_max_warnings() {
    let dir = project();
    let result = lint(&args(&["src"]), dir.path()).unwrap();
    assert_eq!(result.exit_status(None), EXIT_SUCCESS);
    assert_eq!(result.exit_status(Some(2)), EXIT_SUCCESS);
    assert_eq!(result.exit_status(Some(1)), EXIT_TOO_MANY_WARNINGS);
    assert_eq!(args(&["--max-warnings", "0"]).max_warnings, Some(0));
}

#[test]
fn test_json_output() {
    let dir = project();
    let result = lint(&args(&["src"]), dir.path()).unwrap();
    let output = render_output(&result, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 3);
    let first = &files[0]["diagnostics"][0];
    assert_eq!(first["code"], "use-outside-component");
    assert_eq!(first["severity"], 2);
    assert_eq!(first["range"]["start"]["line"], 1);
    assert_eq!(files[2]["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_text_output_ends_with_summary() {
    let dir = project();
    let result = lint(&args(&["src"]), dir.path()).unwrap();
    let output = render_output(&result, OutputFormat::Text, false).unwrap();
    assert!(output.ends_with("Found 2 warnings in 2 files."));
    assert!(output.contains("use-outside-component: Observable.use() called outside of a React component"));
}

#[test]
fn test_stdin_defaults() {
    let parsed = args(&["--stdin"]);
    assert!(parsed.stdin);
    assert_eq!(parsed.stdin_filename, "stdin.tsx");
    assert_eq!(parsed.format, OutputFormat::Text);
    assert!(parsed.paths.is_empty());
}
