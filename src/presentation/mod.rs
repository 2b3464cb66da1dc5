//! String transforms layered on top of the currency phrase.
//!
//! None of these know anything about numeral grammar; they operate on the
//! finished text:
//!
//! - [`sanitize`]: trim and collapse the first double space
//! - [`normalize_whitespace`]: collapse every whitespace run
//! - [`capitalize`]: first letter uppercase, the rest lowercase
//! - [`feminize`]: `UN <noun>` to `UNA <noun>`
//! - [`Words`]: an immutable value bundling the transforms

mod text;
mod words;

pub use text::{capitalize, feminize, normalize_whitespace, sanitize};
pub use words::Words;
