//! Parsing and formatting of hexadecimal colors such as `#D2691E` or `fa0`.

use crate::error::HexFormatError;
use crate::models::Srgb;

/// Parse a 3 or 6 digit hexadecimal color, with or without a leading `#`.
/// Surrounding whitespace is ignored and digits are case-insensitive.
pub fn parse_hex(text: &str) -> Result<Srgb, HexFormatError> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexFormatError::UnexpectedCharacter(c))
        })
        .collect::<Result<Vec<u8>, _>>();

    let len = digits.chars().count();
    if len != 3 && len != 6 {
        return Err(HexFormatError::UnexpectedLength(len));
    }
    let nibbles = nibbles?;

    let bytes = match *nibbles.as_slice() {
        [r, g, b] => [r * 17, g * 17, b * 17],
        [r1, r0, g1, g0, b1, b0] => [(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0],
        _ => return Err(HexFormatError::UnexpectedLength(len)),
    };

    Ok(Srgb::from_bytes(bytes))
}

/// Format a color as 6 uppercase hexadecimal digits without a leading `#`.
pub fn format_hex(color: &Srgb) -> String {
    let [red, green, blue] = color.to_bytes();
    format!("{red:02X}{green:02X}{blue:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form() {
        assert_eq!(parse_hex("#D2691E").map(|c| c.to_bytes()), Ok([210, 105, 30]));
        assert_eq!(parse_hex("d2691e").map(|c| c.to_bytes()), Ok([210, 105, 30]));
        assert_eq!(parse_hex("  00ff00 ").map(|c| c.to_bytes()), Ok([0, 255, 0]));
    }

    #[test]
    fn short_form() {
        assert_eq!(parse_hex("#fa0").map(|c| c.to_bytes()), Ok([255, 170, 0]));
        assert_eq!(parse_hex("000").map(|c| c.to_bytes()), Ok([0, 0, 0]));
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(parse_hex("#00"), Err(HexFormatError::UnexpectedLength(2)));
        assert_eq!(parse_hex(""), Err(HexFormatError::UnexpectedLength(0)));
        assert_eq!(parse_hex("#"), Err(HexFormatError::UnexpectedLength(0)));
        assert_eq!(parse_hex("1234"), Err(HexFormatError::UnexpectedLength(4)));
        assert_eq!(parse_hex("##123456"), Err(HexFormatError::UnexpectedLength(7)));
    }

    #[test]
    fn rejects_bad_characters() {
        assert_eq!(parse_hex("#00g"), Err(HexFormatError::UnexpectedCharacter('g')));
        assert_eq!(parse_hex("12 456"), Err(HexFormatError::UnexpectedCharacter(' ')));
        assert_eq!(parse_hex("0x1234"), Err(HexFormatError::UnexpectedCharacter('x')));
    }

    #[test]
    fn format_is_uppercase_without_hash() {
        assert_eq!(format_hex(&Srgb::from_bytes([210, 105, 30])), "D2691E");
        assert_eq!(format_hex(&Srgb::from_bytes([0, 0, 0])), "000000");
    }

    #[test]
    fn round_trip_is_case_insensitive() {
        for hex in ["00ff00", "D2691E", "abcdef", "010203", "FFFFFF"] {
            let parsed = parse_hex(hex).expect("valid hex");
            assert!(format_hex(&parsed).eq_ignore_ascii_case(hex), "{hex}");
        }
    }
}
