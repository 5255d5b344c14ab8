//! # Validation Pipeline
//!
//! Full validation of a taxpayer number candidate: structural rules
//! first, checksum second, with the first failing rule reported.
//!
//! ## Rule order
//!
//! 1. Digits only. Any non-ASCII-digit character fails the candidate
//!    before length is considered.
//! 2. Length 10 or 12. The empty string fails here, not under rule 1.
//! 3. Check digits. One trailing digit for length 10, two for
//!    length 12, each computed by the weighted mod-11 scheme in
//!    [`crate::checksum`]. Both digits of a 12-digit number must match.
//!
//! Surrounding whitespace is trimmed before rule 1 runs; the error for
//! a rejected candidate always carries the trimmed form.

use crate::checksum::check_digits;
use crate::error::InnError;

/// Digits-only and accepted-length rules.
pub(crate) fn check_structure(candidate: &str) -> Result<(), InnError> {
    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InnError::NonNumeric {
            candidate: candidate.to_owned(),
        });
    }
    let length = candidate.len();
    if !matches!(length, 10 | 12) {
        return Err(InnError::BadLength {
            candidate: candidate.to_owned(),
            length,
        });
    }
    Ok(())
}

/// Check-digit rule. Expects a candidate that already passed
/// [`check_structure`]; on structurally invalid input it has nothing to
/// compare and reports success.
pub(crate) fn check_checksum(candidate: &str) -> Result<(), InnError> {
    let expected = check_digits(candidate);
    let tail = &candidate.as_bytes()[candidate.len() - expected.len()..];
    let found: Vec<u8> = tail.iter().map(|b| b - b'0').collect();
    if expected == found {
        Ok(())
    } else {
        Err(InnError::ChecksumMismatch {
            candidate: candidate.to_owned(),
            expected,
            found,
        })
    }
}

/// Validate a candidate taxpayer number.
///
/// Trims surrounding whitespace, then applies the structural and
/// checksum rules in order. Returns the first failure as an
/// [`InnError`]; see [`InnError::code`] for the stable numeric
/// classification of the three outcomes.
pub fn validate(candidate: &str) -> Result<(), InnError> {
    let candidate = candidate.trim();
    check_structure(candidate)?;
    check_checksum(candidate)
}

/// Whether a candidate passes [`validate`].
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
