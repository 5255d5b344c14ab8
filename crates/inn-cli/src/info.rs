//! # Info Subcommand
//!
//! Classification report for valid numbers: holder kind, issuing
//! authority, registration position, check digits, and whether the
//! number sits in the domestic or the special registration scheme.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use inn_core::{Inn, InnError, InnKind, SPECIAL_REGISTRATION_PREFIX};

/// Arguments for the `inn info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Numbers to classify. An invalid candidate is reported and fails
    /// the run.
    #[arg(value_name = "NUMBER")]
    pub numbers: Vec<String>,
}

/// One classification in the JSON report.
#[derive(Serialize)]
struct InfoReport<'a> {
    number: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<InnKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authority_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_digits: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domestic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the info subcommand.
///
/// Returns exit code: 0 when every number is valid, 1 when any
/// candidate is rejected or none were given.
pub fn run_info(args: &InfoArgs, json: bool) -> Result<u8> {
    if args.numbers.is_empty() {
        println!("Usage: inn info NUMBER...");
        return Ok(1);
    }

    let parsed: Vec<(&String, Result<Inn, InnError>)> = args
        .numbers
        .iter()
        .map(|n| (n, Inn::new(n.as_str())))
        .collect();
    let failed = parsed.iter().filter(|(_, outcome)| outcome.is_err()).count();

    if json {
        let reports: Vec<InfoReport> = parsed
            .iter()
            .map(|(number, outcome)| match outcome {
                Ok(inn) => InfoReport {
                    number: inn.as_str(),
                    valid: true,
                    kind: Some(inn.kind()),
                    authority_code: Some(inn.authority_code()),
                    position_code: Some(inn.position_code()),
                    check_digits: Some(inn.check_digit_str()),
                    domestic: Some(inn.is_domestic()),
                    error: None,
                },
                Err(e) => InfoReport {
                    number: number.as_str(),
                    valid: false,
                    kind: None,
                    authority_code: None,
                    position_code: None,
                    check_digits: None,
                    domestic: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (number, outcome) in &parsed {
            match outcome {
                Ok(inn) => {
                    println!("{}", inn.as_str());
                    println!("  kind:      {}", inn.kind());
                    println!("  authority: {}", inn.authority_code());
                    println!("  position:  {}", inn.position_code());
                    println!("  check:     {}", inn.check_digit_str());
                    if inn.is_domestic() {
                        println!("  scheme:    domestic");
                    } else {
                        println!("  scheme:    special ({SPECIAL_REGISTRATION_PREFIX})");
                    }
                }
                Err(e) => println!("FAIL: {number} — {e}"),
            }
        }
    }

    tracing::info!(total = parsed.len(), failed, "info complete");

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
