//! Integer literal conversion.
//!
//! A literal is an optional sign, the two-character radix prefix when the
//! base is not 10, then digits of the base. For compatibility with
//! `parseInt`-style callers that strip the prefix themselves, the sign may
//! also follow the prefix (`0x-1f`) as long as it does not also precede it.
//!
//! Digits are accumulated with saturating `i64` arithmetic so arbitrarily long
//! literals cannot overflow; the 32-bit range check happens once at the end.

use crate::{
    LiteralError, LiteralOptions, Radix, Trailing, float_literal::is_coercion_whitespace,
};

/// Parse an integer literal in `base` with the default (strict) options.
///
/// ```rust
/// use numlit::{LiteralError, parse_int};
///
/// assert_eq!(parse_int("12345", 10), Ok(12345));
/// assert_eq!(parse_int("0b1010", 2), Ok(10));
/// assert_eq!(parse_int("-0x80000000", 16), Ok(i32::MIN));
/// assert_eq!(parse_int("0x80000000", 16), Err(LiteralError::OutOfRange));
/// ```
///
/// # Errors
///
/// See [`LiteralError`]; every failure means the literal does not denote a
/// signed 32-bit integer in `base`.
pub fn parse_int(text: &str, base: u32) -> Result<i32, LiteralError> {
    parse_int_with(text, base, &LiteralOptions::default())
}

/// Parse an integer literal in `base` using `options`.
///
/// # Errors
///
/// See [`parse_int`].
pub fn parse_int_with(
    text: &str,
    base: u32,
    options: &LiteralOptions,
) -> Result<i32, LiteralError> {
    let result = Radix::new(base).and_then(|radix| parse_radix(text, radix, options.trailing));
    if let Err(err) = &result {
        tracing::trace!(literal = text, base, %err, "rejected integer literal");
    }
    result
}

/// Sentinel form of [`parse_int`]: the value widened to `f64`, or NaN when
/// the literal is rejected. Test the result with [`f64::is_nan`].
#[must_use]
pub fn parse_int_or_nan(text: &str, base: u32) -> f64 {
    parse_int(text, base).map_or(f64::NAN, f64::from)
}

fn parse_radix(literal: &str, radix: Radix, trailing: Trailing) -> Result<i32, LiteralError> {
    let text = match trailing {
        Trailing::Reject => literal,
        Trailing::Ignore => literal.trim_start_matches(is_coercion_whitespace),
    };
    let (mut negative, unsigned) = split_sign(text);
    let mut body = radix.strip_prefix(unsigned)?;
    if unsigned.len() == text.len() {
        (negative, body) = split_sign(body);
    }

    let offset = literal.len() - body.len();
    let magnitude = accumulate(body, offset, radix, trailing)?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| LiteralError::OutOfRange)
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Read digits of `radix` from `digits`; `offset` is where `digits` starts in
/// the caller's literal so that errors point into the original text.
fn accumulate(
    digits: &str,
    offset: usize,
    radix: Radix,
    trailing: Trailing,
) -> Result<i64, LiteralError> {
    let base = i64::from(radix.get());
    let mut magnitude: i64 = 0;
    let mut seen = false;

    for (index, ch) in digits.char_indices() {
        let Some(digit) = radix.digit(ch) else {
            match trailing {
                Trailing::Ignore => break,
                Trailing::Reject => {
                    return Err(LiteralError::InvalidDigit {
                        found: ch,
                        offset: offset + index,
                    });
                }
            }
        };
        // saturates far above the 32-bit range, so `OutOfRange` still fires
        magnitude = magnitude
            .saturating_mul(base)
            .saturating_add(i64::from(digit));
        seen = true;
    }

    if seen {
        Ok(magnitude)
    } else {
        Err(LiteralError::Empty)
    }
}
