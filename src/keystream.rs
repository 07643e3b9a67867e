//! KeystreamGenerator: majority-clocked combination of registers X, Y, Z.
//!
//! Each step, in this order:
//! 1. key bit = `X.peek() ^ Y.peek() ^ Z.peek()` (pre-clock state),
//! 2. read the control bits `X[8]`, `Y[10]`, `Z[10]`,
//! 3. take their majority,
//! 4. clock every register whose control bit equals the majority.
//!
//! At least two registers clock on every step. State carries over between
//! calls; nothing here ever resets the registers.

use tracing::{debug_span, trace};

use crate::register::{RegisterX, RegisterY, RegisterZ};
use crate::utils::bits::xor_fold;

/// Boolean majority of three: `true` iff at least two inputs are `true`.
pub fn majority(a: bool, b: bool, c: bool) -> bool {
    (a & b) | (b & c) | (c & a)
}

/// Observable outcome of one generator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTrace {
    /// Keystream bit produced by the step.
    pub key_bit: bool,
    /// Control bits of X, Y, Z read before clocking.
    pub control: [bool; 3],
    /// Majority of the control bits.
    pub majority: bool,
    /// Whether X, Y, Z were clocked.
    pub clocked: [bool; 3],
}

impl StepTrace {
    /// Number of registers clocked in this step (always 2 or 3).
    pub fn clock_count(&self) -> usize {
        self.clocked.iter().filter(|&&c| c).count()
    }
}

/// Owns the three registers and drives them in lock-step.
///
/// # Examples
///
/// ```
/// use a51_keystream::{KeystreamGenerator, RegisterX, RegisterY, RegisterZ};
///
/// let mut ksg = KeystreamGenerator::new(
///     RegisterX::new(0b1111101010101010101),
///     RegisterY::new(0b1100110011001100110011),
///     RegisterZ::new(0b11100001111000011110000),
/// );
///
/// let ks = ksg.generate_keystream(10);
/// assert_eq!(ks.len(), 10);
/// assert_eq!(
///     ks,
///     [false, false, false, true, false, true, true, false, true, true]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystreamGenerator {
    x: RegisterX,
    y: RegisterY,
    z: RegisterZ,
    steps: u64,
}

impl KeystreamGenerator {
    /// Takes ownership of three initialized registers.
    pub fn new(x: RegisterX, y: RegisterY, z: RegisterZ) -> Self {
        KeystreamGenerator { x, y, z, steps: 0 }
    }

    /// Register X in its current state.
    pub fn x(&self) -> &RegisterX {
        &self.x
    }

    /// Register Y in its current state.
    pub fn y(&self) -> &RegisterY {
        &self.y
    }

    /// Register Z in its current state.
    pub fn z(&self) -> &RegisterZ {
        &self.z
    }

    /// Total steps performed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Gives the registers back in their current state.
    pub fn into_registers(self) -> (RegisterX, RegisterY, RegisterZ) {
        (self.x, self.y, self.z)
    }

    /// Performs one step and reports what happened.
    pub fn step(&mut self) -> StepTrace {
        let taps = [self.x.peek(), self.y.peek(), self.z.peek()];
        let key_bit = xor_fold(&taps);

        let control = [
            self.x.control_bit(),
            self.y.control_bit(),
            self.z.control_bit(),
        ];
        let vote = majority(control[0], control[1], control[2]);
        let clocked = control.map(|c| c == vote);

        trace!(
            step = self.steps,
            taps = ?taps.map(u8::from),
            key_bit = u8::from(key_bit),
            control = ?control.map(u8::from),
            majority = u8::from(vote),
            clocked = ?clocked.map(u8::from),
            "step"
        );

        if clocked[0] {
            self.x.update_state();
        }
        if clocked[1] {
            self.y.update_state();
        }
        if clocked[2] {
            self.z.update_state();
        }
        self.steps += 1;

        StepTrace {
            key_bit,
            control,
            majority: vote,
            clocked,
        }
    }

    /// Produces `length` keystream bits, index 0 first.
    ///
    /// Registers are left in their final state, so a later call continues
    /// the same stream.
    pub fn generate_keystream(&mut self, length: usize) -> Vec<bool> {
        let _span = debug_span!("generate_keystream", length).entered();
        let mut keystream = Vec::with_capacity(length);
        for _ in 0..length {
            keystream.push(self.step().key_bit);
        }
        trace!(x = %self.x, y = %self.y, z = %self.z, "final registers");
        keystream
    }
}
