use rstest::rstest;

use crate::{LiteralOptions, Trailing, parse_int, parse_int_or_nan, parse_int_with};

#[rstest]
#[case("12345", 10, 12345)]
#[case("0", 10, 0)]
#[case("-0", 10, 0)]
#[case("+42", 10, 42)]
#[case("-2147483648", 10, i32::MIN)]
#[case("2147483647", 10, i32::MAX)]
#[case("007", 10, 7)]
#[case("0x0", 16, 0)]
#[case("0xff", 16, 255)]
#[case("0XFF", 16, 255)]
#[case("0xDeadBee", 16, 0x0dea_dbee)]
#[case("0x7fffffff", 16, i32::MAX)]
#[case("-0x80000000", 16, i32::MIN)]
#[case("0x-1f", 16, -31)]
#[case("0o17", 8, 15)]
#[case("0O777", 8, 511)]
#[case("0b1010", 2, 10)]
#[case("-0b1", 2, -1)]
#[case("0b01111111111111111111111111111111", 2, i32::MAX)]
#[case("##zz", 36, 1295)]
#[case("__12", 3, 5)]
fn parses_literals(#[case] text: &str, #[case] base: u32, #[case] expected: i32) {
    assert_eq!(parse_int(text, base), Ok(expected));
    assert_eq!(parse_int_or_nan(text, base), f64::from(expected));
}

#[rstest]
#[case("0x1fz", 16, 31)]
#[case("12abc", 10, 12)]
#[case("0b102", 2, 2)]
#[case("0o78", 8, 7)]
#[case("-7.5", 10, -7)]
#[case("3 apples", 10, 3)]
#[case(" 12", 10, 12)]
#[case("\u{FEFF}\t0x1f;", 16, 31)]
#[case("\n -0b11", 2, -3)]
fn lenient_mode_stops_at_first_non_digit(
    #[case] text: &str,
    #[case] base: u32,
    #[case] expected: i32,
) {
    let options = LiteralOptions {
        trailing: Trailing::Ignore,
    };
    assert_eq!(parse_int_with(text, base, &options), Ok(expected));
    assert!(parse_int(text, base).is_err());
}

#[test]
fn leading_zeros_do_not_count_towards_range() {
    let padded = "0x00000000000000000000000000000001";
    assert_eq!(parse_int(padded, 16), Ok(1));
}

#[test]
fn repeated_calls_are_bitwise_identical() {
    for (text, base) in [("0x7b", 16), ("bogus", 10), ("0xFFFFFFFF", 16)] {
        let first = parse_int_or_nan(text, base).to_bits();
        let second = parse_int_or_nan(text, base).to_bits();
        assert_eq!(first, second);
        assert_eq!(parse_int(text, base), parse_int(text, base));
    }
}
