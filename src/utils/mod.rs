//! Small pure helpers for bit manipulation and keystream formatting.

pub mod bits;
pub mod converter;
