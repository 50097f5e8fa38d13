//! Shared CLI helpers: input loading and outcome printing.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use arogya_core::Outcome;

/// Exit status for a soft (non-success) outcome.
pub const SOFT_FAILURE_EXIT: u8 = 2;

/// Read an input file fully into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// JSON body in the shape the web frontend consumes, plus the status tag.
pub fn outcome_json(field: &str, outcome: &Outcome) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), outcome.message().into());
    body.insert("status".to_string(), outcome.kind().to_string().into());
    serde_json::Value::Object(body)
}

/// Print an outcome to stdout, as JSON or as colored text.
pub fn print_outcome(field: &str, outcome: &Outcome, json: bool) {
    if json {
        println!("{}", outcome_json(field, outcome));
        return;
    }
    println!();
    if outcome.is_success() {
        println!("{}", outcome.message());
    } else {
        println!("{} {}", "⚠".yellow().bold(), outcome.message().yellow());
    }
    println!();
}

pub fn exit_status(outcome: &Outcome) -> u8 {
    if outcome.is_success() {
        0
    } else {
        SOFT_FAILURE_EXIT
    }
}

/// `EnvFilter` directives. `arogya` also matches the `arogya_*` crate targets.
pub fn log_directives(verbose: bool) -> &'static str {
    if verbose {
        "arogya=debug,info"
    } else {
        "warn"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
