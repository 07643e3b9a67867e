//! BitRegister: fixed-width bit container with left-indexed addressing.
//!
//! Index 0 is the leftmost (most significant) bit and index `N - 1` is the
//! rightmost bit, the register's output tap. The backing integer stores the
//! same bits in its natural order, so logical index `i` lives at physical
//! bit `N - 1 - i`. That translation never leaves this module.
//!
//! The register knows nothing about feedback. It only stores bits and
//! shifts them; tap selection lives in [`crate::register`].

use std::fmt;

use zeroize::Zeroize;

use crate::error::{A51Error, Result};
use crate::utils::bits::parse_bit_pattern;

/// Fixed-width register of `N` bits (`1 <= N <= 64`).
///
/// # Examples
///
/// ```
/// use a51_keystream::BitRegister;
///
/// let mut reg = BitRegister::<4>::new(0b1000);
/// assert!(reg.at(0).unwrap());
/// assert!(!reg.peek());
///
/// reg.shift(true);
/// assert_eq!(reg.value(), 0b0001);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitRegister<const N: usize> {
    state: u64,
}

impl<const N: usize> BitRegister<N> {
    /// Number of bits held by this register type.
    pub const WIDTH: usize = N;

    const MASK: u64 = if N == 64 { u64::MAX } else { (1u64 << N) - 1 };

    const VALID_WIDTH: () = assert!(N > 0 && N <= 64, "register width must be in 1..=64");

    /// Creates a register from an integer literal.
    ///
    /// The most significant retained bit of `value` lands at index 0 and
    /// bit 0 of `value` lands at index `N - 1`. Bits above the width are
    /// discarded, as with any fixed-width truncation.
    ///
    /// # Parameters
    /// - `value`: Initial contents.
    ///
    /// # Returns
    /// A register holding `value & (2^N - 1)`.
    pub fn new(value: u64) -> Self {
        let () = Self::VALID_WIDTH;
        BitRegister {
            state: value & Self::MASK,
        }
    }

    /// Creates a register from a textual bit pattern, leftmost character first.
    ///
    /// Patterns shorter than `N` are right-aligned (implicit leading zeros).
    ///
    /// # Errors
    /// Returns the parse errors of
    /// [`parse_bit_pattern`](crate::utils::bits::parse_bit_pattern), including
    /// [`A51Error::BitPatternTooWide`] when the pattern exceeds `N` bits.
    pub fn from_bit_str(pattern: &str) -> Result<Self> {
        let (value, _) = parse_bit_pattern(pattern, N)?;
        Ok(Self::new(value))
    }

    /// Returns the register width `N`.
    pub fn width(&self) -> usize {
        N
    }

    /// Returns the contents as an integer in the construction convention.
    pub fn value(&self) -> u64 {
        self.state
    }

    /// Reads the bit at left-indexed `pos`.
    ///
    /// # Errors
    /// Returns [`A51Error::BitIndexOutOfRange`] if `pos >= N`.
    pub fn at(&self, pos: usize) -> Result<bool> {
        Self::check(pos)?;
        Ok(self.bit(pos))
    }

    /// Writes the bit at left-indexed `pos`.
    ///
    /// # Errors
    /// Returns [`A51Error::BitIndexOutOfRange`] if `pos >= N`.
    pub fn set(&mut self, pos: usize, value: bool) -> Result<()> {
        Self::check(pos)?;
        let mask = 1u64 << (N - 1 - pos);
        if value {
            self.state |= mask;
        } else {
            self.state &= !mask;
        }
        Ok(())
    }

    /// Reads the output tap, index `N - 1`.
    pub fn peek(&self) -> bool {
        self.state & 1 == 1
    }

    /// Moves every bit one step toward index 0 and writes `bit` at `N - 1`.
    ///
    /// The bit previously at index 0 is discarded. Any taps that feed `bit`
    /// must be read before calling this.
    pub fn shift(&mut self, bit: bool) {
        self.state = ((self.state << 1) | u64::from(bit)) & Self::MASK;
    }

    /// Unchecked read for positions the caller already knows are in range.
    pub(crate) fn bit(&self, pos: usize) -> bool {
        debug_assert!(pos < N, "bit position {} out of range for width {}", pos, N);
        (self.state >> (N - 1 - pos)) & 1 == 1
    }

    fn check(pos: usize) -> Result<()> {
        if pos < N {
            Ok(())
        } else {
            Err(A51Error::BitIndexOutOfRange {
                index: pos,
                width: N,
            })
        }
    }
}

impl<const N: usize> fmt::Display for BitRegister<N> {
    /// Dumps the bits in left-indexed order between their endpoint labels,
    /// e.g. `(0) 1011 (3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(0) {:0width$b} ({})", self.state, N - 1, width = N)
    }
}

impl<const N: usize> fmt::Debug for BitRegister<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRegister")
            .field("width", &N)
            .field("bits", &format_args!("{:0width$b}", self.state, width = N))
            .finish()
    }
}

impl<const N: usize> Drop for BitRegister<N> {
    /// Clears the register contents on drop.
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
