//! # The Validated Number Type
//!
//! [`Inn`] is a string newtype that can only hold a taxpayer number
//! that passed full validation. There is no unchecked constructor and
//! no mutation: once built, the value is valid for its lifetime.
//!
//! ## Construction
//!
//! [`Inn::new`] trims surrounding whitespace, runs the structural and
//! checksum rules, and stores the trimmed digit string. Deserialization
//! routes through the same constructor, so invalid values are rejected
//! at the serde boundary rather than silently accepted.

use serde::{Deserialize, Serialize};

use crate::error::InnError;
use crate::validate;

// -- Validating Deserialize for Inn -----------------------------------------

impl<'de> Deserialize<'de> for Inn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A validated Russian taxpayer identification number (INN).
///
/// Holds either 10 digits (legal entity) or 12 digits (individual),
/// with the trailing check digit(s) verified. Classification accessors
/// live in [`crate::classify`].
///
/// # Validation
///
/// - ASCII digits only, after trimming surrounding whitespace
/// - Length exactly 10 or 12
/// - Weighted mod-11 check digits match (one digit at length 10,
///   both digits at length 12)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Inn(String);

impl Inn {
    /// Create a validated number from a string value.
    ///
    /// Surrounding whitespace is trimmed before validation; the trimmed
    /// digit string is what the value stores and displays.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as an [`InnError`].
    pub fn new(value: impl Into<String>) -> Result<Self, InnError> {
        let raw = value.into();
        let trimmed = raw.trim();
        validate::validate(trimmed)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Access the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Inn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Inn {
    type Err = InnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_numbers() {
        let legal = Inn::new("7707083893").unwrap();
        assert_eq!(legal.as_str(), "7707083893");

        let person = Inn::new("500100732259").unwrap();
        assert_eq!(person.as_str(), "500100732259");
    }

    #[test]
    fn new_rejects_each_rule_in_order() {
        assert_eq!(Inn::new("77070838X3").unwrap_err().code(), 1);
        assert_eq!(Inn::new("123456789").unwrap_err().code(), 2);
        assert_eq!(Inn::new("7707083894").unwrap_err().code(), 3);
    }

    #[test]
    fn new_stores_trimmed_form() {
        let inn = Inn::new("  7707083893\n").unwrap();
        assert_eq!(inn.as_str(), "7707083893");
        assert_eq!(inn.to_string(), "7707083893");
    }

    #[test]
    fn from_str_parses() {
        let inn: Inn = "500100732259".parse().unwrap();
        assert_eq!(inn.as_str(), "500100732259");
        assert!("500100732258".parse::<Inn>().is_err());
    }

    #[test]
    fn equality_is_by_digit_string() {
        let a = Inn::new("7707083893").unwrap();
        let b = Inn::new(" 7707083893").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let inn = Inn::new("7707083893").unwrap();
        let json = serde_json::to_string(&inn).unwrap();
        assert_eq!(json, "\"7707083893\"");
    }

    #[test]
    fn deserialization_validates() {
        let inn: Inn = serde_json::from_str("\"500100732259\"").unwrap();
        assert_eq!(inn.as_str(), "500100732259");

        let err = serde_json::from_str::<Inn>("\"500100732258\"");
        assert!(err.is_err());
        let err = serde_json::from_str::<Inn>("\"not digits\"");
        assert!(err.is_err());
    }
}
