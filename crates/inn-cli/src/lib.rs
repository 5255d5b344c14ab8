//! # inn-cli — Taxpayer Number Tooling
//!
//! Provides the `inn` command-line interface over [`inn_core`]: batch
//! validation with the stable rejection codes, classification reports,
//! and extraction of numbers from free text.
//!
//! ## Subcommands
//!
//! - `inn check` — validate candidate numbers, one verdict per line.
//! - `inn info` — classification report for valid numbers.
//! - `inn extract` — pull valid numbers out of text, a file, or stdin.
//!
//! Every subcommand honors the global `--json` flag for
//! machine-readable output.
//!
//! ## Exit codes
//!
//! - `0` — all candidates valid / at least one number extracted.
//! - `1` — a candidate failed validation / nothing extracted.
//! - `2` — operational error (for example an unreadable input file).

pub mod check;
pub mod extract;
pub mod info;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read subcommand input from a file, or from stdin when no file is
/// given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
