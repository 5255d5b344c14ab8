//! # Classification
//!
//! Facts derivable from a validated number without any lookup: the
//! holder kind, the registration segments, and the special-registration
//! prefix test.
//!
//! ## Segments
//!
//! | Length | Authority | Position | Check digits |
//! |--------|-----------|----------|--------------|
//! | 10     | 0..4      | 4..9     | 9..10        |
//! | 12     | 0..4      | 4..10    | 10..12       |
//!
//! The authority code names the issuing tax office; the position code
//! is the registration sequence within that office.
//!
//! ## Aggregates
//!
//! Any type that wraps a number (an invoice, a counterparty record)
//! joins the classification surface by implementing [`AsInn`]. The
//! free [`format`] function and every accessor on [`Inn`] are then one
//! `as_inn()` call away, with no downcasting or concrete-type checks.

use serde::{Deserialize, Serialize};

use crate::inn::Inn;

/// Prefix of numbers issued to foreign organizations without permanent
/// domestic registration.
pub const SPECIAL_REGISTRATION_PREFIX: &str = "9909";

/// The kind of taxpayer a number belongs to, decided by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InnKind {
    /// A 10-digit number: organization or other legal entity.
    Legal,
    /// A 12-digit number: individual or sole proprietor.
    Person,
}

impl InnKind {
    /// Stable snake_case identifier, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Person => "person",
        }
    }
}

impl std::fmt::Display for InnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classification accessors
// ---------------------------------------------------------------------------

impl Inn {
    /// The holder kind: [`InnKind::Legal`] at length 10,
    /// [`InnKind::Person`] at length 12.
    pub fn kind(&self) -> InnKind {
        if self.as_str().len() == 10 {
            InnKind::Legal
        } else {
            InnKind::Person
        }
    }

    /// Whether this number belongs to an individual.
    pub fn is_person(&self) -> bool {
        self.kind() == InnKind::Person
    }

    /// Whether this number belongs to a legal entity.
    pub fn is_legal(&self) -> bool {
        self.kind() == InnKind::Legal
    }

    /// Whether this number was issued under the domestic registration
    /// scheme. `false` for the reserved
    /// [`SPECIAL_REGISTRATION_PREFIX`], which marks foreign
    /// organizations with no permanent domestic registration. A special
    /// number is still valid, not malformed.
    pub fn is_domestic(&self) -> bool {
        !self.as_str().starts_with(SPECIAL_REGISTRATION_PREFIX)
    }

    /// The 4-digit code of the issuing tax authority.
    pub fn authority_code(&self) -> &str {
        &self.as_str()[..4]
    }

    /// The registration-sequence segment: 5 digits at length 10,
    /// 6 digits at length 12.
    pub fn position_code(&self) -> &str {
        let s = self.as_str();
        if s.len() == 10 {
            &s[4..9]
        } else {
            &s[4..10]
        }
    }

    /// The trailing check digit(s) as stored: one digit at length 10,
    /// two at length 12.
    pub fn check_digit_str(&self) -> &str {
        let s = self.as_str();
        if s.len() == 10 {
            &s[9..]
        } else {
            &s[10..]
        }
    }
}

// ---------------------------------------------------------------------------
// Capability for aggregates
// ---------------------------------------------------------------------------

/// Capability of exposing a validated number.
///
/// Implemented by [`Inn`] itself and by any aggregate that carries one,
/// so classification code can accept either without caring which.
pub trait AsInn {
    /// The underlying validated number.
    fn as_inn(&self) -> &Inn;
}

impl AsInn for Inn {
    fn as_inn(&self) -> &Inn {
        self
    }
}

/// The raw digit string of a number or of the number inside an
/// aggregate.
pub fn format(subject: &impl AsInn) -> &str {
    subject.as_inn().as_str()
}
