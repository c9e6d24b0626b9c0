use thiserror::Error;

/// Reasons a numeric literal could not be converted.
///
/// The sentinel-returning entry points ([`parse_int_or_nan`] and
/// [`parse_float`]) collapse every variant into `f64::NAN`.
///
/// [`parse_int_or_nan`]: crate::parse_int_or_nan
/// [`parse_float`]: crate::parse_float
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// The base lies outside `2..=36`.
    #[error("unsupported base {0}")]
    UnsupportedBase(u32),
    /// A non-decimal literal does not start with its two-character prefix.
    #[error("expected a '{expected}' radix prefix")]
    MissingPrefix {
        /// The prefix the base calls for, or `"??"` when any two characters
        /// would do.
        expected: &'static str,
    },
    /// No digits after the prefix and sign.
    #[error("literal has no digits")]
    Empty,
    /// A character that is not a digit of the base.
    #[error("invalid digit '{found}' at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of `found` in the original literal text.
        offset: usize,
    },
    /// The value does not fit in a signed 32-bit integer.
    #[error("literal is out of the signed 32-bit range")]
    OutOfRange,
    /// The text is not a valid numeric literal.
    #[error("not a number")]
    NotANumber,
}
