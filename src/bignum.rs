//! Fixed-width unsigned integer types.
//!
//! Each type generated by `define_bignum!` is a plain array of limbs that
//! implements [`LimbStore`], so every algorithm of the crate applies to it
//! directly. On top of that it carries the integer API of the primitive
//! types: `overflowing_*`/`checked_*`/`wrapping_*` methods that never panic,
//! and operators that panic on overflow or division by zero exactly like
//! `u64` does in a debug build.

use alloc::string::String;
use core::cmp;
use core::fmt;
use core::ops::{
    Add, AddAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Div, DivAssign,
    Mul, MulAssign,
    Not,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Sub, SubAssign,
};
use core::str::FromStr;

use crate::arith;
use crate::convert::{from_native, to_native};
use crate::error::{Error, Truncated};
use crate::radix::{self, DigitCase};
use crate::store::LimbStore;

macro_rules! define_bignum {
    ($name:ident: type=$ty:ty, n=$n:expr) => (
        /// Stack-allocated unsigned integer of fixed width.
        ///
        /// This is backed by a fixed-size array of limbs. `[a, b, c, ...]`
        /// represents `a + b*2^W + c*2^(2W) + ...` where `W` is the number of
        /// bits in the limb type.
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            base: [$ty; $n],
        }

        impl $name {
            /// The number of bits in this type.
            pub const BITS: u32 = <$ty>::BITS * $n;
            /// The number of limbs in this type.
            pub const LIMBS: usize = $n;

            pub const ZERO: $name = $name { base: [0; $n] };
            pub const ONE: $name = {
                let mut base = [0; $n];
                base[0] = 1;
                $name { base }
            };
            /// The smallest value that can be represented by this integer type.
            pub const MIN: $name = $name::ZERO;
            /// The largest value that can be represented by this integer type.
            pub const MAX: $name = $name { base: [<$ty>::MAX; $n] };

            /// Makes a bignum from its limbs, least significant first.
            pub const fn from_limbs(base: [$ty; $n]) -> $name {
                $name { base }
            }

            pub const fn as_limbs(&self) -> &[$ty; $n] {
                &self.base
            }

            pub const fn into_limbs(self) -> [$ty; $n] {
                self.base
            }

            pub fn is_zero(&self) -> bool {
                LimbStore::is_zero(self)
            }

            /// Returns the number of bits necessary to represent this value.
            /// Zero needs 0 bits.
            pub fn bit_length(&self) -> u32 {
                LimbStore::bit_length(self) as u32
            }

            pub fn from_str_radix(src: &str, radix: u32) -> Result<$name, Error> {
                let mut ret = $name::ZERO;
                radix::from_radix_str_into(src, radix, &mut ret)?;
                Ok(ret)
            }

            pub fn to_str_radix(&self, radix: u32) -> String {
                radix::to_radix_string(self, radix)
            }

            #[inline]
            pub fn count_ones(self) -> u32 {
                self.base.iter().map(|v| v.count_ones()).sum()
            }

            #[inline]
            pub fn count_zeros(self) -> u32 {
                $name::BITS - self.count_ones()
            }

            #[inline]
            pub fn leading_zeros(self) -> u32 {
                $name::BITS - self.bit_length()
            }

            #[inline]
            pub fn trailing_zeros(self) -> u32 {
                match self.base.iter().position(|&v| v != 0) {
                    Some(i) => i as u32 * <$ty>::BITS + self.base[i].trailing_zeros(),
                    None => $name::BITS,
                }
            }

            pub fn overflowing_add(self, other: $name) -> ($name, bool) {
                arith::add(&self, &other)
            }

            pub fn overflowing_sub(self, other: $name) -> ($name, bool) {
                arith::sub(&self, &other)
            }

            pub fn overflowing_mul(self, other: $name) -> ($name, bool) {
                let mut ret = $name::ZERO;
                let overflow = arith::mul_into(&self, &other, &mut ret).is_err();
                (ret, overflow)
            }

            pub fn overflowing_pow(self, mut exp: u32) -> ($name, bool) {
                let mut base = self;
                let mut acc = $name::ONE;
                let mut overflow = false;
                while exp > 0 {
                    if exp & 1 == 1 {
                        let (v, o) = acc.overflowing_mul(base);
                        acc = v;
                        overflow |= o;
                    }
                    exp >>= 1;
                    if exp > 0 {
                        let (v, o) = base.overflowing_mul(base);
                        base = v;
                        overflow |= o;
                    }
                }
                (acc, overflow)
            }

            pub fn checked_add(self, other: $name) -> Option<$name> {
                match self.overflowing_add(other) {
                    (v, false) => Some(v),
                    _ => None,
                }
            }

            pub fn checked_sub(self, other: $name) -> Option<$name> {
                match self.overflowing_sub(other) {
                    (v, false) => Some(v),
                    _ => None,
                }
            }

            pub fn checked_mul(self, other: $name) -> Option<$name> {
                match self.overflowing_mul(other) {
                    (v, false) => Some(v),
                    _ => None,
                }
            }

            pub fn checked_pow(self, exp: u32) -> Option<$name> {
                match self.overflowing_pow(exp) {
                    (v, false) => Some(v),
                    _ => None,
                }
            }

            pub fn checked_div(self, other: $name) -> Option<$name> {
                self.div_rem(other).ok().map(|(q, _)| q)
            }

            pub fn checked_rem(self, other: $name) -> Option<$name> {
                self.div_rem(other).ok().map(|(_, r)| r)
            }

            pub fn wrapping_add(self, other: $name) -> $name {
                self.overflowing_add(other).0
            }

            pub fn wrapping_sub(self, other: $name) -> $name {
                self.overflowing_sub(other).0
            }

            pub fn wrapping_mul(self, other: $name) -> $name {
                self.overflowing_mul(other).0
            }

            pub fn saturating_add(self, other: $name) -> $name {
                self.checked_add(other).unwrap_or($name::MAX)
            }

            pub fn saturating_sub(self, other: $name) -> $name {
                self.checked_sub(other).unwrap_or($name::ZERO)
            }

            /// Returns `(self / other, self % other)`.
            pub fn div_rem(self, other: $name) -> Result<($name, $name), Error> {
                arith::divmod(&self, &other)
            }

            /// Divides by a limb, returning the quotient and the remainder.
            pub fn div_rem_small(self, other: $ty) -> Result<($name, $ty), Error> {
                let mut q = self;
                let r = arith::div_rem_small(&mut q, other)?;
                Ok((q, r))
            }
        }

        impl LimbStore for $name {
            type Limb = $ty;

            #[inline]
            fn limbs(&self) -> &[$ty] {
                &self.base
            }

            #[inline]
            fn limbs_mut(&mut self) -> &mut [$ty] {
                &mut self.base
            }

            #[inline]
            fn grow_to(&mut self, _len: usize) -> usize {
                $n
            }

            #[inline]
            fn with_len(_len: usize) -> $name {
                $name::ZERO
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::ZERO
            }
        }

        impl_core_ops_add!($name, type=$ty);
        impl_core_ops_sub!($name, type=$ty);
        impl_core_ops_mul!($name, type=$ty);
        impl_core_ops_div_rem!($name, type=$ty);
        impl_core_ops_bits!($name, type=$ty);

        impl_core_cmp!($name);
        impl_core_fmt!($name);

        impl_from_primitive! { u8, $name }
        impl_from_primitive! { u16, $name }
        impl_from_primitive! { u32, $name }
        impl_from_primitive! { u64, $name }
        impl_from_primitive! { u128, $name }
        impl_from_primitive! { usize, $name }

        impl_try_from_bignum! { u8, $name }
        impl_try_from_bignum! { u16, $name }
        impl_try_from_bignum! { u32, $name }
        impl_try_from_bignum! { u64, $name }
        impl_try_from_bignum! { u128, $name }
        impl_try_from_bignum! { usize, $name }

        impl_serde!($name);
    )
}

macro_rules! impl_core_ops_add {
    ($name:ident, type=$ty:ty) => (
        impl Add<$ty> for $name {
            type Output = $name;

            fn add(self, other: $ty) -> $name {
                let mut self_clone = self;
                self_clone += other;
                self_clone
            }
        }

        impl AddAssign<$ty> for $name {
            fn add_assign(&mut self, other: $ty) {
                *self += $name::from(other);
            }
        }

        impl Add<$name> for $name {
            type Output = $name;

            fn add(self, other: $name) -> $name {
                let mut self_clone = self;
                self_clone += other;
                self_clone
            }
        }

        impl AddAssign<$name> for $name {
            fn add_assign(&mut self, other: $name) {
                let (v, carry) = self.overflowing_add(other);
                assert!(!carry, "attempt to add with overflow");
                *self = v;
            }
        }
    )
}

macro_rules! impl_core_ops_sub {
    ($name:ident, type=$ty:ty) => (
        impl Sub<$ty> for $name {
            type Output = $name;

            fn sub(self, other: $ty) -> $name {
                self - $name::from(other)
            }
        }

        impl SubAssign<$ty> for $name {
            fn sub_assign(&mut self, other: $ty) {
                *self -= $name::from(other);
            }
        }

        impl Sub<$name> for $name {
            type Output = $name;

            fn sub(self, other: $name) -> $name {
                let mut self_clone = self;
                self_clone -= other;
                self_clone
            }
        }

        impl SubAssign<$name> for $name {
            fn sub_assign(&mut self, other: $name) {
                let (v, borrow) = self.overflowing_sub(other);
                assert!(!borrow, "attempt to subtract with overflow");
                *self = v;
            }
        }
    )
}

macro_rules! impl_core_ops_mul {
    ($name:ident, type=$ty:ty) => (
        impl Mul<$ty> for $name {
            type Output = $name;

            fn mul(self, rhs: $ty) -> $name {
                let mut self_clone = self;
                self_clone *= rhs;
                self_clone
            }
        }

        impl MulAssign<$ty> for $name {
            fn mul_assign(&mut self, other: $ty) {
                let carry = arith::mul_small_add(self, other, 0);
                assert!(carry == 0, "attempt to multiply with overflow");
            }
        }

        impl Mul<$name> for $name {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                let mut self_clone = self;
                self_clone *= rhs;
                self_clone
            }
        }

        impl MulAssign<$name> for $name {
            fn mul_assign(&mut self, rhs: $name) {
                let (v, overflow) = self.overflowing_mul(rhs);
                assert!(!overflow, "attempt to multiply with overflow");
                *self = v;
            }
        }
    )
}

macro_rules! impl_core_ops_div_rem {
    ($name:ident, type=$ty:ty) => (
        impl Div<$ty> for $name {
            type Output = $name;

            fn div(self, other: $ty) -> $name {
                match self.div_rem_small(other) {
                    Ok((q, _)) => q,
                    Err(_) => panic!("attempt to divide by zero"),
                }
            }
        }

        impl DivAssign<$ty> for $name {
            fn div_assign(&mut self, other: $ty) {
                *self = *self / other;
            }
        }

        impl Div<$name> for $name {
            type Output = $name;

            fn div(self, other: $name) -> $name {
                match self.div_rem(other) {
                    Ok((q, _)) => q,
                    Err(_) => panic!("attempt to divide by zero"),
                }
            }
        }

        impl DivAssign<$name> for $name {
            fn div_assign(&mut self, other: $name) {
                *self = *self / other;
            }
        }

        impl Rem<$ty> for $name {
            type Output = $ty;

            fn rem(self, other: $ty) -> $ty {
                match self.div_rem_small(other) {
                    Ok((_, r)) => r,
                    Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
                }
            }
        }

        impl RemAssign<$ty> for $name {
            fn rem_assign(&mut self, other: $ty) {
                *self = $name::from(*self % other);
            }
        }

        impl Rem<$name> for $name {
            type Output = $name;

            fn rem(self, other: $name) -> $name {
                match self.div_rem(other) {
                    Ok((_, r)) => r,
                    Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
                }
            }
        }

        impl RemAssign<$name> for $name {
            fn rem_assign(&mut self, other: $name) {
                *self = *self % other;
            }
        }
    )
}

macro_rules! impl_core_ops_bits {
    ($name:ident, type=$ty:ty) => (
        impl Not for $name {
            type Output = $name;

            fn not(self) -> $name {
                $name::MAX - self
            }
        }

        /// Bits shifted past the top are discarded; shifting by `BITS` or more
        /// yields zero.
        impl Shl<u32> for $name {
            type Output = $name;

            fn shl(self, bits: u32) -> $name {
                arith::shl(&self, bits as usize).0
            }
        }

        impl ShlAssign<u32> for $name {
            fn shl_assign(&mut self, bits: u32) {
                *self = *self << bits;
            }
        }

        impl Shr<u32> for $name {
            type Output = $name;

            fn shr(self, bits: u32) -> $name {
                arith::shr(&self, bits as usize).0
            }
        }

        impl ShrAssign<u32> for $name {
            fn shr_assign(&mut self, bits: u32) {
                *self = *self >> bits;
            }
        }

        impl_core_ops_bitwise!($name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        impl_core_ops_bitwise!($name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        impl_core_ops_bitwise!($name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
    )
}

macro_rules! impl_core_ops_bitwise {
    ($name:ident, $op:ident, $f:ident, $op_assign:ident, $f_assign:ident, $tok:tt) => (
        impl $op<$name> for $name {
            type Output = $name;

            fn $f(self, other: $name) -> $name {
                let mut self_clone = self;
                self_clone.$f_assign(other);
                self_clone
            }
        }

        impl $op_assign<$name> for $name {
            fn $f_assign(&mut self, other: $name) {
                for (a, b) in self.base.iter_mut().zip(&other.base) {
                    *a = *a $tok *b;
                }
            }
        }
    )
}

macro_rules! impl_core_cmp {
    ($name:ident) => (
        impl cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &$name) -> Option<cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl cmp::Ord for $name {
            fn cmp(&self, other: &$name) -> cmp::Ordering {
                arith::compare(self, other)
            }
        }
    )
}

macro_rules! impl_core_fmt {
    ($name:ident) => (
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad_integral(true, "", &radix::to_radix_string(self, 10))
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad_integral(true, "0x", &radix::to_radix_string(self, 16))
            }
        }

        impl fmt::UpperHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let digits = radix::to_radix_string_with(self, 16, DigitCase::Upper);
                f.pad_integral(true, "0x", &digits)
            }
        }

        impl fmt::Octal for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad_integral(true, "0o", &radix::to_radix_string(self, 8))
            }
        }

        impl fmt::Binary for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad_integral(true, "0b", &radix::to_radix_string(self, 2))
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(src: &str) -> Result<$name, Error> {
                $name::from_str_radix(src, 10)
            }
        }
    )
}

// Every native unsigned type fits in the narrowest bignum (128 bits).
macro_rules! impl_from_primitive {
    ($Small:ty, $Large:ident) => {
        impl From<$Small> for $Large {
            #[inline]
            fn from(small: $Small) -> $Large {
                let mut ret = $Large::ZERO;
                let fits = from_native(small, &mut ret).is_ok();
                debug_assert!(fits);
                ret
            }
        }
    }
}

macro_rules! impl_try_from_bignum {
    ($Small:ty, $Large:ident) => {
        impl TryFrom<$Large> for $Small {
            type Error = Truncated<$Small>;

            #[inline]
            fn try_from(large: $Large) -> Result<$Small, Truncated<$Small>> {
                to_native(&large)
            }
        }
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_serde {
    ($name:ident) => (
        /// Serialized as a decimal string.
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        /// Deserialized from a decimal string or an unsigned integer.
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<$name, D::Error> {
                struct Visitor;

                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("a decimal string or an unsigned integer")
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<$name, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<$name, E> {
                        Ok($name::from(v))
                    }
                }

                deserializer.deserialize_any(Visitor)
            }
        }
    )
}

#[cfg(not(feature = "serde"))]
macro_rules! impl_serde {
    ($name:ident) => {};
}

define_bignum!(U128: type=u32, n=4);
define_bignum!(U256: type=u32, n=8);
define_bignum!(U512: type=u32, n=16);
define_bignum!(U1024: type=u32, n=32);
define_bignum!(U2048: type=u32, n=64);
define_bignum!(U4096: type=u32, n=128);
