//! # Error Types
//!
//! Structured validation errors, built with `thiserror`. Failures are
//! reported as values — nothing in this crate panics on bad input, and
//! there is no retained last-error state: the `Err` side of a `Result`
//! carries everything a caller needs for diagnostics.
//!
//! Each variant keeps the offending candidate and enough context to
//! diagnose the rejection without re-running the validation.

use thiserror::Error;

/// A rejected INN candidate.
///
/// The three kinds correspond to the three validation rules, applied in
/// order: charset, length, checksum. The first rule that fails produces
/// the error; later rules are not evaluated.
#[derive(Error, Debug)]
pub enum InnError {
    /// The candidate contains a character other than an ASCII digit.
    #[error("non-numeric characters in candidate \"{candidate}\"")]
    NonNumeric {
        /// The candidate as validated (after trimming).
        candidate: String,
    },

    /// The candidate is all-digit but its length is neither 10 nor 12.
    #[error("candidate \"{candidate}\" has length {length} (expected 10 or 12 digits)")]
    BadLength {
        /// The candidate as validated (after trimming).
        candidate: String,
        /// The candidate's digit count.
        length: usize,
    },

    /// Charset and length are fine, but a computed check digit disagrees
    /// with the trailing digit(s) of the candidate.
    #[error("checksum mismatch in candidate \"{candidate}\" (expected check digits {expected:?}, found {found:?})")]
    ChecksumMismatch {
        /// The candidate as validated (after trimming).
        candidate: String,
        /// Check digits derived from the leading digits.
        expected: Vec<u8>,
        /// Check digits actually present at the end of the candidate.
        found: Vec<u8>,
    },
}

impl InnError {
    /// Stable numeric code for this failure kind: 1 for non-numeric
    /// input, 2 for a bad length, 3 for a checksum mismatch.
    ///
    /// Hosts that key on numeric error codes (form validators, ingestion
    /// pipelines) can rely on these values not changing.
    pub fn code(&self) -> u8 {
        match self {
            Self::NonNumeric { .. } => 1,
            Self::BadLength { .. } => 2,
            Self::ChecksumMismatch { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_display_carries_candidate() {
        let err = InnError::NonNumeric {
            candidate: "77070838-3".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("non-numeric"));
        assert!(msg.contains("77070838-3"));
    }

    #[test]
    fn bad_length_display_carries_length() {
        let err = InnError::BadLength {
            candidate: "123".to_string(),
            length: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("length 3"));
        assert!(msg.contains("10 or 12"));
    }

    #[test]
    fn checksum_mismatch_display_carries_digits() {
        let err = InnError::ChecksumMismatch {
            candidate: "7707083894".to_string(),
            expected: vec![3],
            found: vec![4],
        };
        let msg = format!("{err}");
        assert!(msg.contains("checksum mismatch"));
        assert!(msg.contains("[3]"));
        assert!(msg.contains("[4]"));
    }

    #[test]
    fn codes_are_stable() {
        let non_numeric = InnError::NonNumeric {
            candidate: String::new(),
        };
        let bad_length = InnError::BadLength {
            candidate: String::new(),
            length: 0,
        };
        let mismatch = InnError::ChecksumMismatch {
            candidate: String::new(),
            expected: Vec::new(),
            found: Vec::new(),
        };
        assert_eq!(non_numeric.code(), 1);
        assert_eq!(bad_length.code(), 2);
        assert_eq!(mismatch.code(), 3);
    }

    #[test]
    fn all_variants_are_debug() {
        let err = InnError::BadLength {
            candidate: "x".to_string(),
            length: 1,
        };
        assert!(!format!("{err:?}").is_empty());
    }
}
