//! # Check Subcommand
//!
//! Batch validation of candidate numbers. One verdict per candidate,
//! with the stable rejection codes (1 non-numeric, 2 bad length,
//! 3 checksum mismatch) carried in the JSON report.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use inn_core::validate;

/// Arguments for the `inn check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Candidate numbers to validate.
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,
}

/// One verdict in the JSON report.
#[derive(Serialize)]
struct CheckReport<'a> {
    candidate: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every candidate validates, 1 when any
/// candidate is rejected or none were given.
pub fn run_check(args: &CheckArgs, json: bool) -> Result<u8> {
    if args.candidates.is_empty() {
        println!("Usage: inn check CANDIDATE...");
        return Ok(1);
    }

    let mut reports = Vec::new();
    for candidate in &args.candidates {
        match validate(candidate) {
            Ok(()) => reports.push(CheckReport {
                candidate,
                valid: true,
                code: None,
                error: None,
            }),
            Err(e) => reports.push(CheckReport {
                candidate,
                valid: false,
                code: Some(e.code()),
                error: Some(e.to_string()),
            }),
        }
    }

    let failed = reports.iter().filter(|r| !r.valid).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.error {
                None => println!("OK: {}", report.candidate),
                Some(err) => println!("FAIL: {} — {}", report.candidate, err),
            }
        }
        println!(
            "\nCandidates: {}/{} passed",
            reports.len() - failed,
            reports.len()
        );
    }

    tracing::info!(total = reports.len(), failed, "check complete");

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(candidates: &[&str]) -> CheckArgs {
        CheckArgs {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn all_valid_returns_zero() {
        let code = run_check(&args(&["7707083893", "500100732259"]), false).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn any_invalid_returns_one() {
        let code = run_check(&args(&["7707083893", "7707083894"]), false).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn no_candidates_prints_usage_and_returns_one() {
        let code = run_check(&args(&[]), false).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn json_mode_keeps_the_verdict() {
        assert_eq!(run_check(&args(&["770708389X"]), true).unwrap(), 1);
        assert_eq!(run_check(&args(&["0000000040"]), true).unwrap(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let code = run_check(&args(&[" 7707083893 "]), false).unwrap();
        assert_eq!(code, 0);
    }
}
