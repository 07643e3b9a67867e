//! Error types for the a51-keystream library.

use thiserror::Error;

/// Errors produced by the a51-keystream library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum A51Error {
    /// A left-indexed bit position is not inside the register.
    #[error("Bit index {index} is outside a register of width {width}")]
    BitIndexOutOfRange {
        /// The requested logical position.
        index: usize,
        /// Width of the register that was addressed.
        width: usize,
    },
    /// A bit-pattern literal contains something other than `0` or `1`.
    #[error("Invalid character {found:?} at position {position} in bit pattern")]
    InvalidBitPattern {
        /// Character offset inside the literal.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// A bit-pattern literal carries more bits than the register holds.
    #[error("Bit pattern of {len} bits does not fit a register of width {width}")]
    BitPatternTooWide {
        /// Number of bits in the literal.
        len: usize,
        /// Width of the target register.
        width: usize,
    },
    /// A bit-pattern literal has no bits at all.
    #[error("Bit pattern is empty")]
    EmptyBitPattern,
    /// Modular exponentiation was asked to reduce modulo zero.
    #[error("Modulus must be greater than zero")]
    ZeroModulus,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, A51Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bit_index_out_of_range() {
        let err = A51Error::BitIndexOutOfRange {
            index: 19,
            width: 19,
        };
        assert_eq!(
            format!("{}", err),
            "Bit index 19 is outside a register of width 19"
        );
    }

    #[test]
    fn test_display_invalid_bit_pattern() {
        let err = A51Error::InvalidBitPattern {
            position: 3,
            found: '2',
        };
        assert_eq!(
            format!("{}", err),
            "Invalid character '2' at position 3 in bit pattern"
        );
    }

    #[test]
    fn test_display_bit_pattern_too_wide() {
        let err = A51Error::BitPatternTooWide { len: 24, width: 23 };
        assert_eq!(
            format!("{}", err),
            "Bit pattern of 24 bits does not fit a register of width 23"
        );
    }

    #[test]
    fn test_display_zero_modulus() {
        assert_eq!(
            format!("{}", A51Error::ZeroModulus),
            "Modulus must be greater than zero"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(A51Error::EmptyBitPattern, A51Error::EmptyBitPattern);
        assert_ne!(
            A51Error::BitIndexOutOfRange {
                index: 22,
                width: 22
            },
            A51Error::BitIndexOutOfRange {
                index: 23,
                width: 22
            }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = A51Error::BitPatternTooWide { len: 30, width: 19 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
