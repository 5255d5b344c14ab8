//! # Free-Text Extraction
//!
//! Finds taxpayer numbers embedded in arbitrary text: invoices, pasted
//! records, OCR output. Candidates are maximal ASCII digit runs, so
//! every candidate is bounded by a non-digit character or a text edge
//! on both sides.
//!
//! ## Boundary rule
//!
//! A digit run whose length is not exactly 10 or 12 never yields a
//! candidate, even when a valid number sits inside it. Eleven fused
//! digits, or two valid numbers written back to back with no separator,
//! are dropped whole. Two numbers separated by a single non-digit
//! character are each found. This is a documented limitation of the
//! boundary rule, kept as is.
//!
//! Output is ordered by position in the text, keeps duplicates, and is
//! identical across repeated calls on the same input.

use std::sync::LazyLock;

use regex::Regex;

use crate::inn::Inn;

/// ASCII digit runs. `[0-9]` rather than `\d` keeps Unicode digit
/// characters out of candidates.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Extract every valid taxpayer number embedded in `text`.
///
/// Scans for maximal digit runs, keeps the runs of length 10 or 12,
/// and validates each one; runs that fail the checksum are skipped
/// silently (visible at trace level). The result preserves text order
/// and duplicates.
pub fn extract(text: &str) -> Vec<Inn> {
    let mut found = Vec::new();
    for run in DIGIT_RUN.find_iter(text) {
        let candidate = run.as_str();
        if !matches!(candidate.len(), 10 | 12) {
            continue;
        }
        match Inn::new(candidate) {
            Ok(inn) => found.push(inn),
            Err(err) => {
                tracing::trace!(candidate, code = err.code(), "digit run failed validation");
            }
        }
    }
    tracing::debug!(found = found.len(), "scanned text for embedded numbers");
    found
}
