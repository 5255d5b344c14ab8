#![deny(missing_docs)]

//! # inn-core — Russian Taxpayer Number Validation
//!
//! Validation, classification, and free-text extraction of Russian
//! Taxpayer Identification Numbers (INN): 10 digits for legal entities,
//! 12 for individuals, with one or two trailing check digits computed
//! by a weighted mod-11 scheme. Depends only on `serde`, `thiserror`,
//! `regex`, and `tracing` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **[`Inn`] is valid by construction.** The smart constructor is
//!    the only path to a value; no unchecked constructor exists, so no
//!    partially valid instance can reach downstream code. Deserialized
//!    values go through the same constructor.
//!
//! 2. **Explicit results, no retained state.** [`validate()`] returns
//!    `Result<(), InnError>` per call and nothing is stored between
//!    calls, so the API is safe under concurrent and repeated use.
//!
//! 3. **One checksum engine.** Validation and diagnostics both flow
//!    through [`check_digits()`]; the weight rows are defined once.
//!
//! 4. **[`InnError`] taxonomy with stable codes.** Structured errors
//!    with `thiserror`, each carrying the offending candidate and a
//!    numeric code (1 non-numeric, 2 bad length, 3 checksum mismatch)
//!    that host applications can key on.

pub mod checksum;
pub mod classify;
pub mod error;
pub mod extract;
pub mod inn;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use checksum::{check_digits, InnChecksum};
pub use classify::{format, AsInn, InnKind, SPECIAL_REGISTRATION_PREFIX};
pub use error::InnError;
pub use extract::extract;
pub use inn::Inn;
pub use validate::{is_valid, validate};
