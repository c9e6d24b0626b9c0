//! Conversion of already-isolated numeric literal text into values, and a
//! process-wide millisecond clock for timing measurements.
//!
//! The parsers never panic. Integer literals are checked against the signed
//! 32-bit range:
//!
//! ```rust
//! use numlit::{LiteralError, parse_int};
//!
//! assert_eq!(parse_int("0x7fffffff", 16), Ok(i32::MAX));
//! assert_eq!(parse_int("0xFFFFFFFF", 16), Err(LiteralError::OutOfRange));
//! assert!(numlit::parse_int_or_nan("0xZZ", 16).is_nan());
//! ```
//!
//! Float literals follow number-coercion rules and collapse failures to NaN:
//!
//! ```rust
//! assert_eq!(numlit::parse_float(" 3.14 "), 3.14);
//! assert!(numlit::parse_float("abc").is_nan());
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod float_literal;
mod int_literal;
mod options;
mod radix;

#[cfg(feature = "std")]
pub mod clock;

#[cfg(test)]
mod tests;

pub use error::LiteralError;
pub use float_literal::{parse_float, try_parse_float};
pub use int_literal::{parse_int, parse_int_or_nan, parse_int_with};
pub use options::{LiteralOptions, Trailing};
pub use radix::Radix;
