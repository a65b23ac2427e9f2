//! Common types and utilities for legend-lint.
//!
//! This crate provides foundational types used across all legend crates:
//! - Position/Range types for line/column source locations (`LineMap`)
//! - Lint diagnostics, severities and message templates
//! - Recursion and traversal limits

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Location, Position, Range, SourceLocation};

// Diagnostics produced by the rule engine
pub mod diagnostics;
pub use diagnostics::{DIAGNOSTIC_SOURCE, Diagnostic, DiagnosticSeverity, format_message};

// Centralized limits and thresholds
pub mod limits;
