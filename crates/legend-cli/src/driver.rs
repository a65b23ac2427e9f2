//! File discovery, config resolution and the lint pass over many files.

use anyhow::{Context, Result, bail};
use globset::GlobSet;
use legend_common::Diagnostic;
use legend_lint::{LintConfig, LintEngine, LintOptions, RuleSet, find_config, load_config};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};
use walkdir::{DirEntry, WalkDir};

use crate::args::{CliArgs, OutputFormat};
use crate::reporter::{Reporter, render_json, summary};

/// Extensions picked up when walking directories.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mts", "cts"];

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_TOO_MANY_WARNINGS: u8 = 1;
pub const EXIT_FATAL: u8 = 2;

/// One linted file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Display name, relative to the working directory when possible.
    pub file: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// A file that could not be read. The rest of the run carries on without it.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LintResult {
    /// In input order.
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl LintResult {
    pub fn warning_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    pub fn exit_status(&self, max_warnings: Option<usize>) -> u8 {
        if !self.failures.is_empty() {
            return EXIT_FATAL;
        }
        match max_warnings {
            Some(max) if self.warning_count() > max => EXIT_TOO_MANY_WARNINGS,
            _ => EXIT_SUCCESS,
        }
    }
}

/// Config file (explicit or found upward from `cwd`) with CLI rule flags
/// applied on top.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<(LintOptions, GlobSet)> {
    let config_path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    let config = match &config_path {
        Some(path) => {
            debug!(path = %path.display(), "using config");
            load_config(path)?
        }
        None => LintConfig::default(),
    };

    let mut options = config.resolve().with_context(|| match &config_path {
        Some(path) => format!("invalid config: {}", path.display()),
        None => "invalid default config".to_string(),
    })?;
    if !args.rules.is_empty() {
        options.rules = RuleSet::only(&args.rules);
    }
    for &rule in &args.disabled {
        options.rules.set(rule, false);
    }
    let ignore = config.ignore_set()?;
    Ok((options, ignore))
}

/// Lint whatever `args` names: stdin, or files found under the given paths.
pub fn lint(args: &CliArgs, cwd: &Path) -> Result<LintResult> {
    let (options, ignore) = resolve_options(args, cwd)?;
    let engine = LintEngine::new(options);

    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(LintResult {
            reports: vec![lint_text(&engine, &args.stdin_filename, text)],
            failures: Vec::new(),
        });
    }

    let files = discover_files(&args.paths, cwd, &ignore)?;
    debug!(count = files.len(), "discovered source files");
    Ok(lint_files(&engine, &files, cwd))
}

pub fn lint_text(engine: &LintEngine, file: &str, source: String) -> FileReport {
    let diagnostics = engine.lint_source(file, &source);
    FileReport {
        file: file.to_string(),
        source,
        diagnostics,
    }
}

/// Files are linted in parallel; reports come back in `files` order.
/// Unreadable files land in `failures` without stopping the others.
pub fn lint_files(engine: &LintEngine, files: &[PathBuf], cwd: &Path) -> LintResult {
    let span = info_span!("lint_files", count = files.len());
    let _enter = span.enter();

    let outcomes: Vec<std::result::Result<FileReport, FileFailure>> = files
        .par_iter()
        .map(|path| {
            let file = display_name(path, cwd);
            match std::fs::read_to_string(path) {
                Ok(source) => Ok(lint_text(engine, &file, source)),
                Err(err) => {
                    warn!(file = %file, error = %err, "skipping unreadable file");
                    Err(FileFailure {
                        file,
                        error: err.to_string(),
                    })
                }
            }
        })
        .collect();

    let mut result = LintResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(report) => result.reports.push(report),
            Err(failure) => result.failures.push(failure),
        }
    }
    result
}

/// Expand `paths` into a sorted list of source files. Explicit files are
/// always kept; directory walks skip `node_modules`, hidden directories,
/// unknown extensions and `ignore` matches.
pub fn discover_files(paths: &[PathBuf], cwd: &Path, ignore: &GlobSet) -> Result<Vec<PathBuf>> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        paths.iter().map(|path| cwd.join(path)).collect()
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root);
            continue;
        }
        if !root.is_dir() {
            bail!("no such file or directory: {}", root.display());
        }
        for entry in WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry))
            .filter_map(|entry| entry.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !has_source_extension(path) {
                continue;
            }
            let relative = path.strip_prefix(cwd).unwrap_or(path);
            if ignore.is_match(relative) {
                debug!(path = %relative.display(), "ignored");
                continue;
            }
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name == "node_modules" || name.starts_with('.')
}

fn display_name(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}

/// Full stdout text for `result` in the requested format.
pub fn render_output(result: &LintResult, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(&result.reports).context("failed to serialize diagnostics"),
        OutputFormat::Text => {
            let mut reporter = Reporter::new(color);
            let mut out = reporter.render_reports(&result.reports);
            if let Some(line) = summary(&result.reports) {
                out.push_str("\n\n");
                out.push_str(&line);
            }
            Ok(out)
        }
    }
}
