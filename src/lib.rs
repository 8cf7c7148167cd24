//! Arbitrary-precision unsigned integers stored as little-endian limb arrays.
//!
//! The algorithms work against the [`LimbStore`] capability, so the same
//! code serves fixed-capacity arrays (`[u32; 8]`, [`U256`], ...) and growable
//! vectors (`Vec<u64>`). A fixed store that is too narrow for a result never
//! wraps silently: the correct low-order limbs are written and
//! [`Error::ResultOutOfRange`] (or a carry/borrow flag) is reported.
//!
//! ```
//! use bigint_algo::{from_native, to_radix_string, Error};
//!
//! let mut bytes = [0u8; 3];
//! assert_eq!(from_native(0x1234_5678u32, &mut bytes), Err(Error::ResultOutOfRange));
//! assert_eq!(bytes, [0x78, 0x56, 0x34]);
//!
//! let mut v: Vec<u32> = Vec::new();
//! from_native(12345u64, &mut v).unwrap();
//! assert_eq!(to_radix_string(&v, 36), "9ix");
//! ```

#![no_std]

extern crate alloc;

mod arith;
mod bignum;
mod convert;
mod error;
mod limb;
mod radix;
mod store;

pub use arith::{add, compare, div_rem_small, divmod, mul, mul_into, mul_small_add, shl, shr, sub};
pub use bignum::{U1024, U128, U2048, U256, U4096, U512};
pub use convert::{from_native, to_native};
pub use error::{Error, Truncated};
pub use limb::{Limb, Native};
pub use radix::{
    from_chars, from_radix_str, from_radix_str_into, to_chars, to_radix_string,
    to_radix_string_with, DigitCase,
};
pub use store::LimbStore;
