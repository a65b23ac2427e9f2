#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use legend_cli::args::CliArgs;
use legend_cli::driver::{self, EXIT_FATAL};
use legend_cli::tracing_config;

fn main() -> ExitCode {
    // Only installed when LEGEND_LINT_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("legend-lint: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(args: &CliArgs) -> Result<u8> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::lint(args, &cwd)?;

    let color = !args.no_color && std::io::stdout().is_terminal();
    let output = driver::render_output(&result, args.format, color)?;
    if !output.is_empty() {
        println!("{output}");
    }
    for failure in &result.failures {
        eprintln!("legend-lint: failed to read {}: {}", failure.file, failure.error);
    }
    Ok(result.exit_status(args.max_warnings))
}
