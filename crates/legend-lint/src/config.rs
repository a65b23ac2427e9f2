//! `legend-lint.json` loading and the resolved [`LintOptions`].
//!
//! The file is JSON5, so comments and trailing commas are accepted. A config
//! may `extends` another file (relative to its own directory); the child's
//! values win and `rules`/`observableFactories` are merged key by key.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use legend_checker::CheckerOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{RuleKind, RuleSet};

pub const CONFIG_FILE_NAME: &str = "legend-lint.json";

/// A config file as written. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub extends: Option<String>,
    /// Rule name → enabled.
    #[serde(default)]
    pub rules: IndexMap<String, bool>,
    #[serde(default)]
    pub observable_type_prefix: Option<String>,
    #[serde(default)]
    pub observable_suffix: Option<String>,
    #[serde(default)]
    pub component_base_classes: Option<Vec<String>>,
    #[serde(default)]
    pub selector_hooks: Option<Vec<String>>,
    /// Extra factory functions (name → type family), added to the built-in table.
    #[serde(default)]
    pub observable_factories: IndexMap<String, String>,
    #[serde(default)]
    pub react_modules: Option<Vec<String>>,
    #[serde(default)]
    pub jsx_element_types: Option<Vec<String>>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

/// Settings the engine runs with.
#[derive(Debug, Clone)]
pub struct LintOptions {
    pub rules: RuleSet,
    /// Type families starting with this are observables.
    pub observable_type_prefix: String,
    /// Required suffix for observable variable names.
    pub observable_suffix: String,
    /// Base class symbol names that make a class a component.
    pub component_base_classes: Vec<String>,
    /// Callee names treated as `useSelector`.
    pub selector_hooks: Vec<String>,
    /// Return type names that make a function a component.
    pub jsx_element_types: Vec<String>,
    pub checker: CheckerOptions,
}

impl Default for LintOptions {
    fn default() -> Self {
        LintOptions {
            rules: RuleSet::default(),
            observable_type_prefix: "Observable".to_string(),
            observable_suffix: "$".to_string(),
            component_base_classes: vec![
                "React.Component".to_string(),
                "React.PureComponent".to_string(),
            ],
            selector_hooks: vec!["useSelector".to_string()],
            jsx_element_types: vec!["JSX.Element".to_string()],
            checker: CheckerOptions::default(),
        }
    }
}

impl LintConfig {
    /// Apply this config over the defaults.
    pub fn resolve(&self) -> Result<LintOptions> {
        let mut options = LintOptions::default();
        for (name, &enabled) in &self.rules {
            let rule: RuleKind = name.parse().map_err(|err: String| anyhow!(err))?;
            options.rules.set(rule, enabled);
        }
        if let Some(prefix) = &self.observable_type_prefix {
            if prefix.is_empty() {
                bail!("observableTypePrefix must not be empty");
            }
            options.observable_type_prefix = prefix.clone();
            options.checker.observable_type_prefix = prefix.clone();
        }
        if let Some(suffix) = &self.observable_suffix {
            options.observable_suffix = suffix.clone();
        }
        if let Some(classes) = &self.component_base_classes {
            options.component_base_classes = classes.clone();
        }
        if let Some(hooks) = &self.selector_hooks {
            options.selector_hooks = hooks.clone();
        }
        if let Some(types) = &self.jsx_element_types {
            if let Some(first) = types.first() {
                options.checker.jsx_element_type = first.clone();
            }
            options.jsx_element_types = types.clone();
        }
        if let Some(modules) = &self.react_modules {
            options.checker.react_modules = modules.clone();
        }
        for (name, family) in &self.observable_factories {
            options
                .checker
                .observable_factories
                .insert(name.clone(), family.clone());
        }
        Ok(options)
    }

    /// Compiled `ignore` patterns.
    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in self.ignore.iter().flatten() {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid ignore pattern '{pattern}'"))?;
            builder.add(glob);
        }
        builder.build().context("failed to compile ignore patterns")
    }
}

pub fn parse_config(source: &str) -> Result<LintConfig> {
    json5::from_str(source).context("failed to parse legend-lint config")
}

/// Load `path`, following `extends` chains.
pub fn load_config(path: &Path) -> Result<LintConfig> {
    let mut visited = HashSet::new();
    load_config_inner(path, &mut visited)
}

fn load_config_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<LintConfig> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("config extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");

    if let Some(extends) = config.extends.take() {
        let base_path = resolve_extends_path(path, &extends)?;
        let base = load_config_inner(&base_path, visited)?;
        config = merge_configs(base, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("config has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }
    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

fn merge_configs(base: LintConfig, child: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(child.rules);
    let mut observable_factories = base.observable_factories;
    observable_factories.extend(child.observable_factories);

    LintConfig {
        extends: None,
        rules,
        observable_type_prefix: child.observable_type_prefix.or(base.observable_type_prefix),
        observable_suffix: child.observable_suffix.or(base.observable_suffix),
        component_base_classes: child.component_base_classes.or(base.component_base_classes),
        selector_hooks: child.selector_hooks.or(base.selector_hooks),
        observable_factories,
        react_modules: child.react_modules.or(base.react_modules),
        jsx_element_types: child.jsx_element_types.or(base.jsx_element_types),
        ignore: child.ignore.or(base.ignore),
    }
}

/// Nearest `legend-lint.json` at or above `start_dir`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
