//! Parsing and formatting of the 6-digit hexadecimal notation.

use thiserror::Error;

use crate::rgb::Rgb;

/// A malformed hexadecimal color string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseHexError {
    /// Anything other than 6 digits after the optional `#` prefix.
    #[error("expected 6 hexadecimal digits, found {0} characters")]
    WrongLength(usize),
    /// A character that is not a hexadecimal digit, reported by channel
    /// index.
    #[error("invalid hexadecimal digit in channel {0}")]
    InvalidDigit(usize),
}

fn channel(digits: &str, index: usize) -> Result<u8, ParseHexError> {
    let pair = digits
        .get(index * 2..index * 2 + 2)
        .ok_or(ParseHexError::InvalidDigit(index))?;
    // from_str_radix would also accept a sign here.
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseHexError::InvalidDigit(index));
    }
    u8::from_str_radix(pair, 16).map_err(|_| ParseHexError::InvalidDigit(index))
}

impl Rgb {
    /// Parse a 6-digit hexadecimal string, with or without the leading
    /// `#`. Either letter case is accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let count = digits.chars().count();
        if count != 6 {
            return Err(ParseHexError::WrongLength(count));
        }
        Ok(Self {
            red: channel(digits, 0)?,
            green: channel(digits, 1)?,
            blue: channel(digits, 2)?,
        })
    }

    /// Format as the canonical lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!(Rgb::from_hex("#ff8800"), Ok(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("ff8800"), Ok(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("#FF8800"), Ok(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn formats_canonical_lowercase() {
        assert_eq!(Rgb::new(255, 136, 0).to_hex(), "#ff8800");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(Rgb::from_hex(""), Err(ParseHexError::WrongLength(0)));
        assert_eq!(Rgb::from_hex("#ff880"), Err(ParseHexError::WrongLength(5)));
        assert_eq!(
            Rgb::from_hex("#ff88001"),
            Err(ParseHexError::WrongLength(7))
        );
        // Only one prefix is consumed.
        assert_eq!(
            Rgb::from_hex("##ff8800"),
            Err(ParseHexError::WrongLength(7))
        );
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            Rgb::from_hex("#ff88zz"),
            Err(ParseHexError::InvalidDigit(2))
        );
        assert_eq!(
            Rgb::from_hex("#+f8800"),
            Err(ParseHexError::InvalidDigit(0))
        );
        // Six characters, but not six bytes.
        assert_eq!(
            Rgb::from_hex("é08800"),
            Err(ParseHexError::InvalidDigit(0))
        );
    }

    #[test]
    fn round_trips_exactly() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    assert_eq!(Rgb::from_hex(&rgb.to_hex()), Ok(rgb));
                }
            }
        }
    }
}
