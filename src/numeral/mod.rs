//! Spanish numeral naming, one magnitude tier per function.
//!
//! Each tier handles its own range and delegates the remainder downward:
//!
//! - [`units`]: 0 to 9, the leaf lookup
//! - [`tens`]: 0 to 99, teens and the fused `VEINTI` forms
//! - [`hundreds`]: 0 to 999, `CIEN` versus `CIENTO`
//! - [`thousands`]: 0 to 999 999, the invariant `MIL`
//! - [`millions`]: 0 to 999 999 999, `UN MILLON` versus `MILLONES`
//!
//! The irregular words live in literal tables; Spanish numeral grammar does
//! not reduce to a formula.
//!
//! Output is built by plain concatenation, so a tier whose remainder is zero
//! may leave a trailing space behind (`hundreds(200) == "DOSCIENTOS "`).
//! Trimming belongs to [`presentation`](crate::presentation).
//!
//! # Examples
//!
//! ```rust
//! use numerales::numeral::{hundreds, millions, tens};
//!
//! assert_eq!(tens(21), "VEINTIUN");
//! assert_eq!(tens(31), "TREINTA Y UN");
//! assert_eq!(hundreds(100), "CIEN");
//! assert_eq!(hundreds(101), "CIENTO UN");
//! assert_eq!(millions(2_000_021), "DOS MILLONES VEINTIUN");
//! ```

mod hundreds;
mod millions;
mod scale;
mod tens;
mod thousands;
mod units;

pub use hundreds::hundreds;
pub use millions::millions;
pub use tens::tens;
pub use thousands::thousands;
pub use units::units;
