//! Keystream presentation helpers.
//!
//! The generator's bit order is canonical (index 0 produced first). These
//! helpers only change how that order is rendered for display or storage.

/// Renders bits as a `0`/`1` string, index 0 leftmost.
pub fn to_bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Renders bits as a `0`/`1` string, last index leftmost.
pub fn to_reversed_bit_string(bits: &[bool]) -> String {
    bits.iter().rev().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Packs bits into bytes, first bit in the most significant position.
///
/// A trailing partial byte is padded with zero bits on the right.
///
/// # Parameters
/// - `bits`: Bits in generation order.
///
/// # Returns
/// A `Vec<u8>` of `bits.len().div_ceil(8)` bytes.
pub fn pack_msb_first(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &b)| byte | (u8::from(b) << (7 - i)))
        })
        .collect()
}

/// Lowercase hex of [`pack_msb_first`].
pub fn to_hex(bits: &[bool]) -> String {
    pack_msb_first(bits)
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
