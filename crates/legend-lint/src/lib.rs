//! Legend-State lint rules for TypeScript and TSX.
//!
//! Three checks run over each parsed, bound document:
//! - `observable-naming` - observable variables end with `$`
//! - `use-outside-component` - `x$.use()` only inside a component
//! - `selector-single-get` - `useSelector(() => x$.get())` should be `x$.use()`
//!
//! Modules:
//! - `finders` - candidate searches (observable declarations, `.use()` calls, selectors)
//! - `context` - the ancestor-walk UI context classifier
//! - `checks` / `engine` - the checks and the fault-isolated runner
//! - `config` - `legend-lint.json` loading and resolved options
//! - `sink`, `lsp`, `workspace` - diagnostic delivery for hosts

pub mod checks;
pub mod config;
pub mod context;
pub mod document;
pub mod engine;
pub mod finders;
pub mod lsp;
pub mod rules;
pub mod sink;
pub mod workspace;

pub use config::{CONFIG_FILE_NAME, LintConfig, LintOptions, find_config, load_config, parse_config};
pub use context::ContextClassifier;
pub use document::LintDocument;
pub use engine::LintEngine;
pub use rules::{RuleKind, RuleSet};
pub use sink::{DiagnosticCollection, DiagnosticSink};
pub use workspace::LintWorkspace;

pub use legend_common::{Diagnostic, DiagnosticSeverity};
