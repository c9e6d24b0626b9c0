use crate::LiteralError;

/// A validated base in `2..=36`.
///
/// Bases 2, 8 and 16 carry the conventional `0b`, `0o` and `0x` prefixes.
/// Every other non-decimal base still expects a two-character prefix, but
/// its content is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Base 2, written with a `0b` prefix.
    pub const BINARY: Self = Self(2);
    /// Base 8, written with a `0o` prefix.
    pub const OCTAL: Self = Self(8);
    /// Base 10, written without a prefix.
    pub const DECIMAL: Self = Self(10);
    /// Base 16, written with a `0x` prefix.
    pub const HEX: Self = Self(16);

    /// Validate `base`.
    ///
    /// # Errors
    ///
    /// [`LiteralError::UnsupportedBase`] when `base` is outside `2..=36`.
    pub const fn new(base: u32) -> Result<Self, LiteralError> {
        if base >= 2 && base <= 36 {
            Ok(Self(base))
        } else {
            Err(LiteralError::UnsupportedBase(base))
        }
    }

    /// The numeric base.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The conventional prefix for this base, in lower case.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("0b"),
            8 => Some("0o"),
            16 => Some("0x"),
            _ => None,
        }
    }

    /// Value of `ch` as a digit of this base.
    #[must_use]
    pub fn digit(self, ch: char) -> Option<u32> {
        ch.to_digit(self.0)
    }

    /// Remove the two-character radix prefix, or return `text` unchanged for
    /// base 10. Known prefixes are matched case-insensitively.
    pub(crate) fn strip_prefix(self, text: &str) -> Result<&str, LiteralError> {
        if self == Self::DECIMAL {
            return Ok(text);
        }
        let expected = self.prefix();
        let missing = LiteralError::MissingPrefix {
            expected: expected.unwrap_or("??"),
        };
        let Some(head) = text.get(..2) else {
            return Err(missing);
        };
        match expected {
            Some(prefix) if !head.eq_ignore_ascii_case(prefix) => Err(missing),
            _ => Ok(&text[2..]),
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = LiteralError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Self::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}
