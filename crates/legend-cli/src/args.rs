use clap::{Parser, ValueEnum};
use legend_lint::RuleKind;
use std::path::PathBuf;

/// CLI arguments for the legend-lint binary.
#[derive(Parser, Debug)]
#[command(
    name = "legend-lint",
    version,
    about = "Lint Legend-State observable usage in TypeScript and TSX"
)]
pub struct CliArgs {
    /// Files or directories to lint. Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to a legend-lint.json. Otherwise the nearest one above the
    /// working directory is used.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Read source text from stdin instead of files.
    #[arg(long)]
    pub stdin: bool,

    /// File name reported for stdin input; its extension selects TS or TSX.
    #[arg(long = "stdin-filename", value_name = "NAME", default_value = "stdin.tsx")]
    pub stdin_filename: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Run only these rules (repeatable).
    #[arg(long = "rule", value_name = "RULE")]
    pub rules: Vec<RuleKind>,

    /// Turn a rule off (repeatable).
    #[arg(long = "disable", value_name = "RULE")]
    pub disabled: Vec<RuleKind>,

    /// Exit with status 1 when more than this many warnings are reported.
    #[arg(long = "max-warnings", value_name = "N")]
    pub max_warnings: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col - warning rule: message` with a source snippet.
    Text,
    /// One JSON document with every file's diagnostics.
    Json,
}
