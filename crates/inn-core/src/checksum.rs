//! # Check-Digit Computation
//!
//! The weighted mod-11 check-digit algorithm used by the Russian tax
//! authority. A 10-digit number (legal entity) carries one trailing
//! check digit; a 12-digit number (individual) carries two.
//!
//! ## Algorithm
//!
//! Every check digit is a weighted sum of the digits preceding it,
//! reduced `mod 11` and then `mod 10`. The second reduction is not a
//! truncation artifact: remainders 0–9 pass through unchanged, and a
//! remainder of 10 — which cannot be stored in one digit — collapses to
//! check digit 0 by definition.
//!
//! The three weight rows share one tail. The base row covers the first
//! nine digits of a 10-digit number; the 12-digit rows extend it by
//! prepending 7 (first check digit, over ten digits) and 3, 7 (second
//! check digit, over eleven digits).

/// Weight row for the check digit of a 10-digit number.
const WEIGHTS_10: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weight row for the first check digit of a 12-digit number.
const WEIGHTS_11: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weight row for the second check digit of a 12-digit number.
const WEIGHTS_12: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// One weighted check digit over `digits` (numeric values 0–9).
fn weighted_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| w * u32::from(d))
        .sum();
    (sum % 11 % 10) as u8
}

/// Compute the expected check digits for a candidate digit string.
///
/// Returns one digit for a 10-digit subject, two for a 12-digit subject
/// (first-check then second-check order), and an empty sequence for any
/// subject that is not an all-ASCII-digit string of an accepted length.
/// The digits returned are what the trailing digit(s) of the subject
/// *should* be; comparing them is the caller's job (see
/// [`InnChecksum::compute`] for the bundled form).
pub fn check_digits(subject: &str) -> Vec<u8> {
    if !subject.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }
    let digits: Vec<u8> = subject.bytes().map(|b| b - b'0').collect();
    match digits.len() {
        10 => vec![weighted_check_digit(&digits[..9], &WEIGHTS_10)],
        12 => vec![
            weighted_check_digit(&digits[..10], &WEIGHTS_11),
            weighted_check_digit(&digits[..11], &WEIGHTS_12),
        ],
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Bundled assessment
// ---------------------------------------------------------------------------

/// A one-shot checksum assessment of a candidate string.
///
/// Bundles the subject, its expected check digits, and the two judgment
/// flags in a single immutable value. Produced fresh per call; nothing
/// is cached or mutated afterwards. `check()` is empty exactly when the
/// subject is structurally invalid.
///
/// The full validation pipeline distinguishes *which* rule failed (see
/// [`crate::validate::validate`]); this type answers the coarser
/// "what should the check digits be, and do they match" question, which
/// is what diagnostic tooling wants.
#[derive(Debug, Clone)]
pub struct InnChecksum {
    subject: String,
    check: Vec<u8>,
    structurally_valid: bool,
    matches: bool,
}

impl InnChecksum {
    /// Assess a candidate string.
    pub fn compute(subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let structurally_valid = subject.bytes().all(|b| b.is_ascii_digit())
            && matches!(subject.len(), 10 | 12);
        let check = check_digits(&subject);
        let matches = structurally_valid && {
            let tail = &subject.as_bytes()[subject.len() - check.len()..];
            check.iter().zip(tail).all(|(&c, &b)| c == b - b'0')
        };
        Self {
            subject,
            check,
            structurally_valid,
            matches,
        }
    }

    /// The assessed string, exactly as passed in.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The expected check digits: empty, one, or two values in 0–9.
    pub fn check(&self) -> &[u8] {
        &self.check
    }

    /// Whether the subject is an all-digit string of length 10 or 12.
    pub fn is_structurally_valid(&self) -> bool {
        self.structurally_valid
    }

    /// Whether every expected check digit equals the corresponding
    /// trailing digit of the subject. Always `false` for structurally
    /// invalid subjects.
    pub fn matches(&self) -> bool {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_entity_check_digit() {
        // Published number of a well-known bank.
        assert_eq!(check_digits("7707083893"), vec![3]);
    }

    #[test]
    fn individual_check_digits() {
        assert_eq!(check_digits("500100732259"), vec![5, 9]);
    }

    #[test]
    fn remainder_ten_collapses_to_zero() {
        // 8 * 4 = 32, 32 mod 11 = 10, which maps to check digit 0.
        assert_eq!(check_digits("0000000040"), vec![0]);
        // Same collapse in the first check digit of a 12-digit number:
        // 7 * 3 = 21, 21 mod 11 = 10.
        assert_eq!(check_digits("300000000009"), vec![0, 9]);
    }

    #[test]
    fn rejected_lengths_yield_no_digits() {
        assert!(check_digits("").is_empty());
        assert!(check_digits("123").is_empty());
        assert!(check_digits("77070838930").is_empty()); // 11 digits
        assert!(check_digits("7707083893500100732259").is_empty());
    }

    #[test]
    fn non_digit_input_yields_no_digits() {
        assert!(check_digits("77070838X3").is_empty());
        assert!(check_digits("7707.83893").is_empty());
    }

    #[test]
    fn assessment_of_valid_subject() {
        let check = InnChecksum::compute("7707083893");
        assert_eq!(check.subject(), "7707083893");
        assert_eq!(check.check(), &[3]);
        assert!(check.is_structurally_valid());
        assert!(check.matches());
    }

    #[test]
    fn assessment_of_tampered_subject() {
        let check = InnChecksum::compute("7707083894");
        assert!(check.is_structurally_valid());
        assert_eq!(check.check(), &[3]);
        assert!(!check.matches());
    }

    #[test]
    fn assessment_of_structurally_invalid_subject() {
        let check = InnChecksum::compute("not-a-number");
        assert!(!check.is_structurally_valid());
        assert!(check.check().is_empty());
        assert!(!check.matches());
    }

    #[test]
    fn twelve_digit_assessment_requires_both_digits() {
        // Last digit tampered: first check digit still matches, second
        // does not, so the whole assessment fails.
        let check = InnChecksum::compute("500100732258");
        assert_eq!(check.check(), &[5, 9]);
        assert!(!check.matches());
    }
}
