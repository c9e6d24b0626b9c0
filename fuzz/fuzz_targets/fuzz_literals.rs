#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use numlit::{LiteralOptions, Trailing, parse_float, parse_int, parse_int_or_nan, parse_int_with};

const PREFIXED_BASES: [u32; 4] = [2, 8, 10, 16];

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    base_selector: u8,
    raw_base: u32,
}

/// Straightforward model of strict integer parsing: wide arithmetic, no
/// saturation, validation before conversion.
fn reference(text: &str, base: u32) -> Option<i32> {
    let (mut negative, unsigned) = split_sign(text);
    let mut body = if base == 10 {
        unsigned
    } else {
        let prefix = match base {
            2 => "0b",
            8 => "0o",
            _ => "0x",
        };
        let head = unsigned.get(..2)?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        &unsigned[2..]
    };
    if unsigned.len() == text.len() {
        (negative, body) = split_sign(body);
    }

    if body.is_empty() || !body.chars().all(|c| c.is_digit(base)) {
        return None;
    }
    let significant = body.trim_start_matches('0');
    if significant.len() > 64 {
        return None;
    }
    let magnitude = if significant.is_empty() {
        0
    } else {
        i128::from_str_radix(significant, base).ok()?
    };
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fuzz_target!(|input: Input| {
    let base = PREFIXED_BASES[usize::from(input.base_selector) % PREFIXED_BASES.len()];
    let parsed = parse_int(&input.text, base);
    assert_eq!(parsed.ok(), reference(&input.text, base), "{input:?}");

    let sentinel = parse_int_or_nan(&input.text, base);
    match parsed {
        Ok(value) => assert_eq!(sentinel, f64::from(value)),
        Err(_) => assert!(sentinel.is_nan()),
    }

    // lenient mode accepts a superset of strict mode, with the same values
    let lenient = LiteralOptions {
        trailing: Trailing::Ignore,
    };
    if let Ok(value) = parsed {
        assert_eq!(parse_int_with(&input.text, base, &lenient), Ok(value));
    }

    // any base, any text: no panics
    let _ = parse_int(&input.text, input.raw_base);
    let _ = parse_int_with(&input.text, input.raw_base, &lenient);
    let _ = parse_float(&input.text);
});
