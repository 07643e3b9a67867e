//! Feedback registers X, Y and Z.
//!
//! All three share one mechanism: a [`BitRegister`] plus a static
//! [`RegisterLayout`] naming its feedback taps and its control bit. The
//! variants differ only in width and layout.
//!
//! | Register | Width | Feedback taps | Control bit |
//! |---|---|---|---|
//! | X | 19 | 18, 17, 16, 13 | 8 |
//! | Y | 22 | 21, 20 | 10 |
//! | Z | 23 | 22, 21, 20, 7 | 10 |

use std::fmt;

use tracing::trace;

use crate::bit_register::BitRegister;
use crate::error::Result;

/// Static description of one register variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterLayout {
    /// Short label used in dumps and traces.
    pub name: &'static str,
    /// Left-indexed positions XOR-ed into the next injected bit.
    pub taps: &'static [usize],
    /// Left-indexed position read for the majority vote.
    pub control: usize,
}

/// Layout of register X.
pub const X_LAYOUT: RegisterLayout = RegisterLayout {
    name: "X",
    taps: &[18, 17, 16, 13],
    control: 8,
};

/// Layout of register Y.
pub const Y_LAYOUT: RegisterLayout = RegisterLayout {
    name: "Y",
    taps: &[21, 20],
    control: 10,
};

/// Layout of register Z.
pub const Z_LAYOUT: RegisterLayout = RegisterLayout {
    name: "Z",
    taps: &[22, 21, 20, 7],
    control: 10,
};

/// Width of register X.
pub const X_WIDTH: usize = 19;
/// Width of register Y.
pub const Y_WIDTH: usize = 22;
/// Width of register Z.
pub const Z_WIDTH: usize = 23;

/// Register X: 19 bits.
pub type RegisterX = Register<X_WIDTH>;
/// Register Y: 22 bits.
pub type RegisterY = Register<Y_WIDTH>;
/// Register Z: 23 bits.
pub type RegisterZ = Register<Z_WIDTH>;

/// A [`BitRegister`] bound to a feedback layout.
///
/// Every tap and the control position of the layout are below `N`; the
/// per-variant constructors are the only way to pair a width with a layout.
#[derive(Clone, PartialEq, Eq)]
pub struct Register<const N: usize> {
    bits: BitRegister<N>,
    layout: &'static RegisterLayout,
}

macro_rules! register_variant {
    ($alias:ident, $layout:ident) => {
        impl $alias {
            /// Creates the register from an integer literal, index 0 = most
            /// significant retained bit. Bits above the width are discarded.
            pub fn new(value: u64) -> Self {
                Register {
                    bits: BitRegister::new(value),
                    layout: &$layout,
                }
            }

            /// Creates the register from a textual bit pattern.
            ///
            /// # Errors
            /// Fails on malformed or over-wide patterns, see
            /// [`BitRegister::from_bit_str`].
            pub fn from_bit_str(pattern: &str) -> Result<Self> {
                Ok(Register {
                    bits: BitRegister::from_bit_str(pattern)?,
                    layout: &$layout,
                })
            }
        }
    };
}

register_variant!(RegisterX, X_LAYOUT);
register_variant!(RegisterY, Y_LAYOUT);
register_variant!(RegisterZ, Z_LAYOUT);

impl<const N: usize> Register<N> {
    /// Returns the layout this register was built with.
    pub fn layout(&self) -> &'static RegisterLayout {
        self.layout
    }

    /// Returns the register name from its layout.
    pub fn name(&self) -> &'static str {
        self.layout.name
    }

    /// Returns the register width `N`.
    pub fn width(&self) -> usize {
        N
    }

    /// Returns the underlying storage.
    pub fn bits(&self) -> &BitRegister<N> {
        &self.bits
    }

    /// Returns the contents as an integer in the construction convention.
    pub fn value(&self) -> u64 {
        self.bits.value()
    }

    /// Reads the bit at left-indexed `pos`.
    ///
    /// # Errors
    /// Returns [`A51Error::BitIndexOutOfRange`](crate::A51Error::BitIndexOutOfRange)
    /// if `pos >= N`.
    pub fn at(&self, pos: usize) -> Result<bool> {
        self.bits.at(pos)
    }

    /// Writes the bit at left-indexed `pos`.
    ///
    /// # Errors
    /// Returns [`A51Error::BitIndexOutOfRange`](crate::A51Error::BitIndexOutOfRange)
    /// if `pos >= N`.
    pub fn set(&mut self, pos: usize, value: bool) -> Result<()> {
        self.bits.set(pos, value)
    }

    /// Reads the output tap, index `N - 1`.
    pub fn peek(&self) -> bool {
        self.bits.peek()
    }

    /// Reads the bit that takes part in the majority vote.
    pub fn control_bit(&self) -> bool {
        self.bits.bit(self.layout.control)
    }

    /// XOR of the feedback taps in the current state.
    pub fn feedback_bit(&self) -> bool {
        self.layout
            .taps
            .iter()
            .fold(false, |acc, &tap| acc ^ self.bits.bit(tap))
    }

    /// Advances the register one step.
    ///
    /// All taps are read from the pre-shift state, then the XOR is shifted in
    /// at index `N - 1`.
    pub fn update_state(&mut self) {
        let new_bit = self.feedback_bit();
        if tracing::enabled!(tracing::Level::TRACE) {
            let taps: Vec<u8> = self
                .layout
                .taps
                .iter()
                .map(|&tap| u8::from(self.bits.bit(tap)))
                .collect();
            trace!(
                register = self.layout.name,
                taps = ?self.layout.taps,
                values = ?taps,
                new_bit = u8::from(new_bit),
                "feedback"
            );
        }
        self.bits.shift(new_bit);
    }
}

impl<const N: usize> fmt::Display for Register<N> {
    /// Dumps the register as `X (0) 1111... (18)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.layout.name, self.bits)
    }
}

impl<const N: usize> fmt::Debug for Register<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("name", &self.layout.name)
            .field("bits", &self.bits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::A51Error;

    #[test]
    fn test_layouts_fit_widths() {
        for &tap in X_LAYOUT.taps.iter().chain(std::iter::once(&X_LAYOUT.control)) {
            assert!(tap < X_WIDTH, "X tap {}", tap);
        }
        for &tap in Y_LAYOUT.taps.iter().chain(std::iter::once(&Y_LAYOUT.control)) {
            assert!(tap < Y_WIDTH, "Y tap {}", tap);
        }
        for &tap in Z_LAYOUT.taps.iter().chain(std::iter::once(&Z_LAYOUT.control)) {
            assert!(tap < Z_WIDTH, "Z tap {}", tap);
        }
    }

    #[test]
    fn test_variant_widths() {
        assert_eq!(RegisterX::new(0).width(), 19);
        assert_eq!(RegisterY::new(0).width(), 22);
        assert_eq!(RegisterZ::new(0).width(), 23);
    }

    #[test]
    fn test_update_state_x() {
        let mut x = RegisterX::new(0b1111101010101010101);
        // taps 18,17,16,13 = 1,0,1,0 -> 0
        assert!(!x.feedback_bit());
        x.update_state();
        assert_eq!(x.value(), 0b1111010101010101010);
        x.update_state();
        assert_eq!(x.value(), 0b1110101010101010100);
    }

    #[test]
    fn test_update_state_y() {
        let mut y = RegisterY::new(0b1100110011001100110011);
        // taps 21,20 = 1,1 -> 0
        y.update_state();
        assert_eq!(y.value(), 0b1001100110011001100110);
    }

    #[test]
    fn test_update_state_z() {
        let mut z = RegisterZ::new(0b11100001111000011110000);
        // taps 22,21,20,7 = 0,0,0,1 -> 1
        assert!(z.feedback_bit());
        z.update_state();
        assert_eq!(z.value(), 0b11000011110000111100001);
    }

    #[test]
    fn test_update_state_changes_state() {
        let mut x = RegisterX::new(0b1111101010101010101);
        let s0 = x.value();
        x.update_state();
        let s1 = x.value();
        x.update_state();
        let s2 = x.value();
        assert_ne!(s0, s1);
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_update_state_reads_pre_shift_taps() {
        let mut z = RegisterZ::new(0b11100001111000011110000);
        let expected = z.feedback_bit();
        z.update_state();
        assert_eq!(z.peek(), expected);
    }

    #[test]
    fn test_control_bit() {
        let mut x = RegisterX::new(0);
        assert!(!x.control_bit());
        x.set(8, true).unwrap();
        assert!(x.control_bit());
        assert_eq!(x.control_bit(), x.at(8).unwrap());

        let y = RegisterY::new(1 << (Y_WIDTH - 1 - 10));
        assert!(y.control_bit());
        let z = RegisterZ::new(1 << (Z_WIDTH - 1 - 10));
        assert!(z.control_bit());
    }

    #[test]
    fn test_from_bit_str_matches_new() {
        let a = RegisterZ::from_bit_str("11100001111000011110000").unwrap();
        let b = RegisterZ::new(0b11100001111000011110000);
        assert_eq!(a, b);
        assert_eq!(
            RegisterY::from_bit_str("11001100110011001100110"),
            Err(A51Error::BitPatternTooWide { len: 23, width: 22 })
        );
    }

    #[test]
    fn test_display() {
        let x = RegisterX::new(0b1111101010101010101);
        assert_eq!(format!("{}", x), "X (0) 1111101010101010101 (18)");
    }

    #[test]
    fn test_layout_accessors() {
        let y = RegisterY::new(0);
        assert_eq!(y.name(), "Y");
        assert_eq!(y.layout(), &Y_LAYOUT);
        assert_eq!(y.layout().taps, &[21, 20]);
    }
}
