//! Currency amounts and their written form.
//!
//! - [`Amount`]: a validated integer part and two-digit cents part
//! - [`CurrencyConfig`]: the unit and cents nouns, singular and plural
//! - [`format_currency`]: the raw currency phrase for an amount
//!
//! # Examples
//!
//! ```rust
//! use numerales::currency::{Amount, CurrencyConfig, format_currency};
//!
//! let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
//! let amount = Amount::try_from(1.5).unwrap();
//!
//! assert_eq!(format_currency(amount, &config), "UN DOLAR CON CINCUENTA CENTAVOS");
//! ```

mod amount;
mod config;
mod formatter;

pub use amount::{Amount, MAX_INTEGER};
pub use config::CurrencyConfig;
pub use formatter::format_currency;
