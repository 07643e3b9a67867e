//! Square-and-multiply modular exponentiation.
//!
//! Standalone numeric utility shipped with the driver. It shares no state
//! with the keystream core.

use tracing::trace;

use crate::error::{A51Error, Result};

/// Computes `base^exponent mod modulus` by left-to-right binary exponentiation.
///
/// The running remainder starts at `base mod modulus` (the leading one bit
/// of the exponent). For each lower bit, from the most significant down, it
/// is squared and, if the bit is set, multiplied by the base. Products are
/// taken in 128 bits, so any `u64` inputs are safe.
///
/// # Parameters
/// - `base`: The base.
/// - `exponent`: The exponent; `0` yields `1 mod modulus`.
/// - `modulus`: The modulus, must be non-zero.
///
/// # Errors
/// Returns [`A51Error::ZeroModulus`] if `modulus == 0`.
///
/// # Examples
///
/// ```
/// use a51_keystream::fast_mod_exp;
///
/// assert_eq!(fast_mod_exp(856, 25, 7).unwrap(), 2);
/// ```
pub fn fast_mod_exp(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(A51Error::ZeroModulus);
    }
    let m = modulus as u128;
    if exponent == 0 {
        return Ok((1 % m) as u64);
    }

    let b = base as u128 % m;
    let mut r = b;
    let top = u64::BITS - 1 - exponent.leading_zeros();
    for i in (0..top).rev() {
        let bit = (exponent >> i) & 1 == 1;
        trace!(remainder = r as u64, bit = i, value = u8::from(bit), "square");
        r = r * r % m;
        if bit {
            r = r * b % m;
        }
    }
    Ok(r as u64)
}
