//! The `legend-lint` command line: argument parsing, file discovery,
//! parallel linting and tsc-style reporting.

pub mod args;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
