//! A5/1-style keystream generator.
//!
//! Three binary feedback shift registers of widths 19, 22 and 23 are clocked
//! irregularly by a majority vote over one control bit of each. Every step
//! contributes one keystream bit, the XOR of the registers' output taps.
//!
//! This crate reproduces the mechanics of the construction. A5/1 is known to
//! be weak; nothing here is meant for protecting data.
//!
//! # Architecture
//!
//! ```text
//! BitRegister<N>      (fixed-width storage, left-indexed, shift primitive)
//!     ↓ bound to a static RegisterLayout (taps + control bit)
//! Register<N>         (RegisterX / RegisterY / RegisterZ, update_state)
//!     ↓ three owned by value
//! KeystreamGenerator  (majority clocking, keystream extraction)
//! ```
//!
//! # Examples
//!
//! ```
//! use a51_keystream::{KeystreamGenerator, RegisterX, RegisterY, RegisterZ};
//! use a51_keystream::utils::converter::to_bit_string;
//!
//! let x = RegisterX::from_bit_str("1111101010101010101").unwrap();
//! let y = RegisterY::from_bit_str("1100110011001100110011").unwrap();
//! let z = RegisterZ::from_bit_str("11100001111000011110000").unwrap();
//!
//! let mut ksg = KeystreamGenerator::new(x, y, z);
//! let first = ksg.generate_keystream(5);
//! let second = ksg.generate_keystream(5);
//!
//! assert_eq!(to_bit_string(&first), "00010");
//! assert_eq!(to_bit_string(&second), "11011");
//! ```
//!
//! Out-of-range bit access is reported, never wrapped:
//!
//! ```
//! use a51_keystream::{A51Error, RegisterY};
//!
//! let y = RegisterY::new(0);
//! assert_eq!(
//!     y.at(22),
//!     Err(A51Error::BitIndexOutOfRange { index: 22, width: 22 })
//! );
//! ```

#![deny(clippy::all)]

pub mod bit_register;
pub mod error;
pub mod keystream;
pub mod mod_exp;
pub mod register;
pub mod utils;

pub use bit_register::BitRegister;
pub use error::{A51Error, Result};
pub use keystream::{majority, KeystreamGenerator, StepTrace};
pub use mod_exp::fast_mod_exp;
pub use register::{Register, RegisterLayout, RegisterX, RegisterY, RegisterZ};
