//! Knobs for the type oracle.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Calls whose result type is known without seeing the callee's source.
pub const DEFAULT_OBSERVABLE_FACTORIES: &[(&str, &str)] = &[
    ("observable", "Observable"),
    ("makeObservable", "Observable"),
    ("computed", "ObservableComputed"),
    ("observablePrimitive", "ObservablePrimitive"),
    ("useObservable", "Observable"),
];

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerOptions {
    /// Factory function name → result type family.
    pub observable_factories: FxHashMap<String, String>,
    /// Type families starting with this are observables.
    pub observable_type_prefix: String,
    /// Module specifiers whose exports are reported as `React.<name>`.
    pub react_modules: Vec<String>,
    /// Type name given to JSX markup.
    pub jsx_element_type: String,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        CheckerOptions {
            observable_factories: DEFAULT_OBSERVABLE_FACTORIES
                .iter()
                .map(|(name, family)| ((*name).to_string(), (*family).to_string()))
                .collect(),
            observable_type_prefix: "Observable".to_string(),
            react_modules: vec!["react".to_string()],
            jsx_element_type: "JSX.Element".to_string(),
        }
    }
}

impl CheckerOptions {
    pub fn factory_family(&self, callee: &str) -> Option<&str> {
        self.observable_factories.get(callee).map(String::as_str)
    }

    pub fn is_react_module(&self, specifier: &str) -> bool {
        self.react_modules.iter().any(|m| m == specifier)
    }
}
