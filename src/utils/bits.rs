//! Bit-level helpers shared by the registers and the driver.
//!
//! Provides the XOR fold used for feedback and keystream extraction, and
//! the parser that turns a textual bit pattern into an integer in the
//! left-indexed register convention.

use crate::error::{A51Error, Result};

/// XOR of every bit in `bits`, folded left to right.
///
/// XOR over booleans is associative and commutative, so the fold order
/// never changes the result. An empty slice yields `false`.
///
/// # Parameters
/// - `bits`: The bits to combine.
///
/// # Returns
/// `true` iff an odd number of the inputs are `true`.
pub fn xor_fold(bits: &[bool]) -> bool {
    bits.iter().fold(false, |acc, &bit| acc ^ bit)
}

/// Parses a bit-pattern literal such as `"1111_1010"` or `"0b1010"`.
///
/// The leftmost character becomes the most significant bit of the result,
/// which is index 0 once loaded into a register of exactly that width.
/// Underscores are accepted as visual separators, as in Rust literals.
///
/// # Parameters
/// - `pattern`: The literal to parse.
/// - `width`: Maximum number of bits allowed.
///
/// # Returns
/// The parsed value and the number of bits it carried.
///
/// # Errors
/// - [`A51Error::EmptyBitPattern`] if no bits are present.
/// - [`A51Error::InvalidBitPattern`] on any character other than `0`, `1`, `_`.
/// - [`A51Error::BitPatternTooWide`] if more than `width` bits are present.
pub fn parse_bit_pattern(pattern: &str, width: usize) -> Result<(u64, usize)> {
    let (offset, digits) = match pattern.strip_prefix("0b") {
        Some(rest) => (2, rest),
        None => (0, pattern),
    };

    let mut value: u64 = 0;
    let mut len = 0usize;
    for (i, c) in digits.chars().enumerate() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            '_' => continue,
            found => {
                return Err(A51Error::InvalidBitPattern {
                    position: i + offset,
                    found,
                })
            }
        };
        len += 1;
        if len > width || len > u64::BITS as usize {
            // Keep counting so the error reports the full length.
            continue;
        }
        value = (value << 1) | bit;
    }

    if len == 0 {
        return Err(A51Error::EmptyBitPattern);
    }
    if len > width {
        return Err(A51Error::BitPatternTooWide { len, width });
    }
    Ok((value, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_fold_basic() {
        assert!(!xor_fold(&[]));
        assert!(xor_fold(&[true]));
        assert!(!xor_fold(&[true, true]));
        assert!(xor_fold(&[true, false, true, true]));
        assert!(!xor_fold(&[true, false, true, false]));
    }

    #[test]
    fn test_xor_fold_matches_chained_inequality() {
        // a != b != c != d, evaluated left to right
        for mask in 0u8..16 {
            let b: Vec<bool> = (0..4).map(|i| mask & (1 << i) != 0).collect();
            let chained = ((b[0] != b[1]) != b[2]) != b[3];
            assert_eq!(xor_fold(&b), chained, "mask={:04b}", mask);
        }
    }

    #[test]
    fn test_parse_bit_pattern_basic() {
        assert_eq!(parse_bit_pattern("1011", 8).unwrap(), (0b1011, 4));
        assert_eq!(parse_bit_pattern("0b1011", 8).unwrap(), (0b1011, 4));
        assert_eq!(parse_bit_pattern("10_11", 8).unwrap(), (0b1011, 4));
        assert_eq!(parse_bit_pattern("0001", 4).unwrap(), (1, 4));
    }

    #[test]
    fn test_parse_bit_pattern_scenario_x() {
        let (value, len) = parse_bit_pattern("1111101010101010101", 19).unwrap();
        assert_eq!(value, 0b1111101010101010101);
        assert_eq!(len, 19);
    }

    #[test]
    fn test_parse_bit_pattern_invalid_char() {
        assert_eq!(
            parse_bit_pattern("10201", 8),
            Err(A51Error::InvalidBitPattern {
                position: 2,
                found: '2'
            })
        );
        assert_eq!(
            parse_bit_pattern("0b1x", 8),
            Err(A51Error::InvalidBitPattern {
                position: 3,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_parse_bit_pattern_too_wide() {
        assert_eq!(
            parse_bit_pattern("111111111", 8),
            Err(A51Error::BitPatternTooWide { len: 9, width: 8 })
        );
    }

    #[test]
    fn test_parse_bit_pattern_empty() {
        assert_eq!(parse_bit_pattern("", 8), Err(A51Error::EmptyBitPattern));
        assert_eq!(parse_bit_pattern("0b", 8), Err(A51Error::EmptyBitPattern));
        assert_eq!(parse_bit_pattern("__", 8), Err(A51Error::EmptyBitPattern));
    }
}
