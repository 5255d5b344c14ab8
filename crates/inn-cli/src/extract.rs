//! # Extract Subcommand
//!
//! Pulls valid numbers out of free text supplied as an argument, read
//! from a file, or piped through stdin. Digit runs that fail validation
//! are skipped, as are runs of any length other than 10 or 12.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use inn_core::{extract, InnKind};

use crate::read_input;

/// Arguments for the `inn extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to scan. When omitted, input comes from --file or stdin.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to scan from a file.
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// One found number in the JSON report.
#[derive(Serialize)]
struct ExtractReport<'a> {
    number: &'a str,
    kind: InnKind,
}

/// Execute the extract subcommand.
///
/// Returns exit code: 0 when at least one valid number was found,
/// 1 when the input contained none.
pub fn run_extract(args: &ExtractArgs, json: bool) -> Result<u8> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_input(args.file.as_deref())?,
    };

    let found = extract(&text);

    if json {
        let reports: Vec<ExtractReport> = found
            .iter()
            .map(|inn| ExtractReport {
                number: inn.as_str(),
                kind: inn.kind(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for inn in &found {
            println!("{inn}");
        }
    }

    tracing::info!(found = found.len(), bytes = text.len(), "extraction complete");

    if found.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_text_argument() {
        let args = ExtractArgs {
            text: Some("invoice 7707083893, ref 9999999999.".into()),
            file: None,
        };
        assert_eq!(run_extract(&args, false).unwrap(), 0);
    }

    #[test]
    fn nothing_found_returns_one() {
        let args = ExtractArgs {
            text: Some("no numbers in this letter".into()),
            file: None,
        };
        assert_eq!(run_extract(&args, false).unwrap(), 1);
    }

    #[test]
    fn extracts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.txt");
        std::fs::write(&path, "ИНН поставщика: 500100732259\n").unwrap();

        let args = ExtractArgs {
            text: None,
            file: Some(path),
        };
        assert_eq!(run_extract(&args, true).unwrap(), 0);
    }

    #[test]
    fn unreadable_file_is_an_operational_error() {
        let args = ExtractArgs {
            text: None,
            file: Some(PathBuf::from("/no/such/inn-input.txt")),
        };
        assert!(run_extract(&args, false).is_err());
    }
}
