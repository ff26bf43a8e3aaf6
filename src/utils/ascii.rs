use crate::error::{Error, Result};

/// Decode a pair of ASCII digit characters as a decimal value.
/// The first character is the tens digit, the second the units.
/// Result is in the range 0-99.
pub fn combined_char_based_value(c1: u8, c2: u8) -> Result<u8> {
    let tens = digit(c1)?;
    let units = digit(c2)?;
    Ok((tens * 10) + units)
}

/// Strip the trailing run of NUL characters from a string.
/// NULs at the start or in the middle are kept.
pub fn trim_trailing_null_bytes(text: &str) -> &str {
    text.trim_end_matches('\0')
}

fn digit(c: u8) -> Result<u8> {
    if c.is_ascii_digit() {
        Ok(c - 0x30)
    } else {
        Err(Error::InvalidDigit(c))
    }
}

mod tests {
    #[test]
    fn combined_value_decodes_digit_pairs() {
        use super::combined_char_based_value;

        let vals = [
            ((0x30_u8, 0x30_u8), 0_u8),
            ((0x31, 0x30), 10),
            ((0x35, 0x35), 55),
            ((0x39, 0x30), 90),
            ((0x30, 0x31), 1),
            ((0x30, 0x39), 9),
            ((0x39, 0x39), 99),
        ];

        for ((c1, c2), expected) in &vals {
            assert_eq!(combined_char_based_value(*c1, *c2).unwrap(), *expected);
        }
    }

    #[test]
    fn combined_value_rejects_non_digits() {
        use super::combined_char_based_value;
        use crate::Error;

        assert_eq!(combined_char_based_value(0x29, 0x30), Err(Error::InvalidDigit(0x29)));
        assert_eq!(combined_char_based_value(0x30, 0x3A), Err(Error::InvalidDigit(0x3A)));
        assert_eq!(combined_char_based_value(0x41, 0x42), Err(Error::InvalidDigit(0x41)));
    }

    #[test]
    fn trim_strips_trailing_nuls_only() {
        use super::trim_trailing_null_bytes;

        let vals = [
            ("", ""),
            ("\0\0\0", ""),
            ("abc", "abc"),
            ("abc\0", "abc"),
            ("abc\0\0\0", "abc"),
            ("\0abc", "\0abc"),
            ("ab\0c\0", "ab\0c"),
        ];

        for (input, expected) in &vals {
            assert_eq!(trim_trailing_null_bytes(input), *expected);
        }
    }
}
