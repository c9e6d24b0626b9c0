//! Float literal conversion using number-coercion rules.
//!
//! Accepted, after trimming surrounding white space:
//! - nothing at all, which coerces to `0.0`;
//! - `[+-]? (digits ["." digits?] | "." digits) ([eE] [+-]? digits)?`;
//! - `Infinity` with an optional sign (exact case);
//! - unsigned `0x`, `0o` and `0b` integers.
//!
//! Rust's own `inf` and `nan` spellings are not numeric literals here.

use crate::{LiteralError, Radix};

/// Parse a float literal; NaN when the text is not a number.
///
/// ```rust
/// assert_eq!(numlit::parse_float("1e3"), 1000.0);
/// assert_eq!(numlit::parse_float("0x10"), 16.0);
/// assert!(numlit::parse_float("nan").is_nan());
/// ```
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    try_parse_float(text).unwrap_or(f64::NAN)
}

/// Parse a float literal.
///
/// # Errors
///
/// [`LiteralError::NotANumber`] when the text is not a numeric literal.
pub fn try_parse_float(text: &str) -> Result<f64, LiteralError> {
    let trimmed = text.trim_matches(is_coercion_whitespace);
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let result = coerce(trimmed);
    if result.is_err() {
        tracing::trace!(literal = text, "rejected float literal");
    }
    result
}

fn coerce(text: &str) -> Result<f64, LiteralError> {
    match text {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(value) = prefixed_integer(text) {
        return value;
    }
    if is_decimal_literal(text.as_bytes()) {
        text.parse().map_err(|_| LiteralError::NotANumber)
    } else {
        Err(LiteralError::NotANumber)
    }
}

/// White space and line terminators as number coercion trims them. U+0085
/// is white space to Unicode but not to coercion; U+FEFF is the reverse.
pub(crate) fn is_coercion_whitespace(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// `None` when `text` has no radix prefix (it may still be decimal).
fn prefixed_integer(text: &str) -> Option<Result<f64, LiteralError>> {
    let radix = match text.as_bytes() {
        [b'0', b'x' | b'X', _, ..] => Radix::HEX,
        [b'0', b'o' | b'O', _, ..] => Radix::OCTAL,
        [b'0', b'b' | b'B', _, ..] => Radix::BINARY,
        _ => return None,
    };
    Some(integer_value(&text[2..], radix))
}

/// All prefixed radixes are powers of two, so digits shift in as bits. Once
/// `u128` is full, further digits only bump the binary exponent and set a
/// sticky bit; the kept bits (at least 125) fold the sticky bit into bit 0 so
/// the single conversion to `f64` rounds correctly.
fn integer_value(digits: &str, radix: Radix) -> Result<f64, LiteralError> {
    let shift = radix.get().trailing_zeros();
    let mut bits: u128 = 0;
    let mut exponent: u32 = 0;
    let mut sticky = false;
    for ch in digits.chars() {
        let digit = radix.digit(ch).ok_or(LiteralError::NotANumber)?;
        if bits.leading_zeros() >= shift {
            bits = (bits << shift) | u128::from(digit);
        } else {
            exponent = exponent.saturating_add(shift);
            sticky |= digit != 0;
        }
    }
    Ok(scale(round_once(bits | u128::from(sticky)), exponent))
}

#[allow(clippy::cast_precision_loss)]
fn round_once(bits: u128) -> f64 {
    bits as f64
}

/// `value * 2^exponent`; exact, since only the exponent changes.
fn scale(value: f64, exponent: u32) -> f64 {
    if exponent == 0 {
        value
    } else if exponent > 1023 {
        // a nonzero `value` is at least 2^124 here
        f64::INFINITY
    } else {
        value * f64::from_bits(u64::from(1023 + exponent) << 52)
    }
}

fn is_decimal_literal(bytes: &[u8]) -> bool {
    let mut at = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = count_digits(&bytes[at..]);
    at += whole;
    let mut fraction = 0;
    if bytes.get(at) == Some(&b'.') {
        at += 1;
        fraction = count_digits(&bytes[at..]);
        at += fraction;
    }
    if whole + fraction == 0 {
        return false;
    }

    if matches!(bytes.get(at), Some(b'e' | b'E')) {
        at += 1;
        if matches!(bytes.get(at), Some(b'+' | b'-')) {
            at += 1;
        }
        let exponent = count_digits(&bytes[at..]);
        if exponent == 0 {
            return false;
        }
        at += exponent;
    }
    at == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
