//! # numerales
//!
//! Spanish written-word rendering of numbers and currency amounts.
//!
//! ## Overview
//!
//! The crate turns a non-negative amount into uppercase Spanish words,
//! optionally followed by configurable unit and cents nouns:
//!
//! - **Numerals**: `units`, `tens`, `hundreds`, `thousands`, `millions`,
//!   each naming one magnitude tier and delegating downward
//! - **Currency**: validated [`Amount`](currency::Amount) decomposition,
//!   [`CurrencyConfig`](currency::CurrencyConfig) nouns and the currency formatter
//! - **Presentation**: sanitization, capitalization and the feminine form,
//!   bundled in the [`Words`](presentation::Words) value type
//! - **Global configuration**: a process-wide, lock-guarded configuration
//!   mirroring the classic setter-based API
//!
//! ## Feature Flags
//!
//! - `global` (default): process-wide configuration functions
//! - `serde`: `Serialize`/`Deserialize` for configuration and amounts
//! - `decimal`: exact conversion from `rust_decimal::Decimal`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use numerales::prelude::*;
//!
//! let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
//!
//! let words = to_words(123.04, &config).unwrap();
//! assert_eq!(words, "CIENTO VEINTITRES DOLARES CON CUATRO CENTAVOS");
//!
//! let words = to_words_capitalized(1_500_450.04, &config).unwrap();
//! assert_eq!(
//!     words,
//!     "Un millon quinientos mil cuatrocientos cincuenta dolares con cuatro centavos"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the explicit-configuration API and its types. The global
/// configuration functions stay under [`global`](crate::global) because
/// their names overlap with the explicit ones.
///
/// # Usage
///
/// ```rust
/// use numerales::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::currency::*;
    pub use crate::error::*;
    pub use crate::numeral::*;
    pub use crate::presentation::*;
}

pub mod convert;
pub mod currency;
pub mod error;
pub mod numeral;
pub mod presentation;

#[cfg(feature = "global")]
pub mod global;

pub use convert::{amount_to_words, to_words, to_words_capitalized, to_words_feminine};
pub use currency::{Amount, CurrencyConfig, MAX_INTEGER};
pub use error::NumeralError;
pub use presentation::Words;
