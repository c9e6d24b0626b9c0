/// Configuration options for integer literal parsing.
///
/// # Examples
///
/// ```rust
/// use numlit::{LiteralOptions, Trailing, parse_int_with};
///
/// let lenient = LiteralOptions {
///     trailing: Trailing::Ignore,
/// };
/// assert_eq!(parse_int_with("0x1fz", 16, &lenient), Ok(31));
/// assert!(parse_int_with("0x1fz", 16, &LiteralOptions::default()).is_err());
/// ```
///
/// # Default
///
/// Whole-string match: every character after the prefix and sign must be a
/// digit of the base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiteralOptions {
    /// How characters following the last valid digit are treated.
    ///
    /// # Default
    ///
    /// [`Trailing::Reject`]
    pub trailing: Trailing,
}

/// Treatment of text after the longest run of valid digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Trailing {
    /// Fail with [`LiteralError::InvalidDigit`](crate::LiteralError::InvalidDigit).
    #[default]
    Reject,
    /// Skip leading white space, then stop at the first non-digit and keep
    /// what was read so far, as the classic `parseInt` does.
    Ignore,
}
