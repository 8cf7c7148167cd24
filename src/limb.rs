//! Word-level primitives.
//!
//! A [`Limb`] is one positional digit of a big integer. Every multi-limb
//! algorithm in this crate is written in terms of the double-width helpers
//! defined here, so carries never overflow the primitive types.

use core::fmt;
use core::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// Arithmetic operations required by bignums.
pub trait Limb:
    PrimInt + Unsigned + Default + Hash + fmt::Debug + fmt::LowerHex + Send + Sync + 'static
{
    /// The number of bits in the limb, `W`.
    const BITS: u32;

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self + other + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_add(self, other: Self, carry: bool) -> (bool /* carry */, Self);

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self * other + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_mul(self, other: Self, carry: Self) -> (Self /* carry */, Self);

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self * other + other2 + carry`,
    /// where `W` is the number of bits in `Self`.
    fn full_mul_add(self, other: Self, other2: Self, carry: Self) -> (Self /* carry */, Self);

    /// Returns `(quo, rem)` such that `borrow * 2^W + self = quo * other + rem`
    /// and `0 <= rem < other`, where `W` is the number of bits in `Self`.
    fn full_div_rem(self, other: Self, borrow: Self) -> (Self /* quotient */, Self /* remainder */);

    /// The low `W` bits of `v`.
    fn from_u128_lossy(v: u128) -> Self;

    /// Zero-extends the limb to 128 bits.
    fn as_u128(self) -> u128;
}

macro_rules! impl_full_ops {
    ($($ty:ty: mul/div($bigty:ident);)*) => (
        $(
            impl Limb for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn full_add(self, other: $ty, carry: bool) -> (bool, $ty) {
                    // this cannot overflow, the output is between 0 and 2*2^nbits - 1
                    let (v, carry1) = self.overflowing_add(other);
                    let (v, carry2) = v.overflowing_add(carry as $ty);
                    (carry1 || carry2, v)
                }

                #[inline]
                fn full_mul(self, other: $ty, carry: $ty) -> ($ty, $ty) {
                    // this cannot overflow, the output is between 0 and 2^nbits * (2^nbits - 1)
                    let v = (self as $bigty) * (other as $bigty) + (carry as $bigty);
                    ((v >> <$ty>::BITS) as $ty, v as $ty)
                }

                #[inline]
                fn full_mul_add(self, other: $ty, other2: $ty, carry: $ty) -> ($ty, $ty) {
                    // this cannot overflow, the output is between 0 and 2^(2*nbits) - 1
                    let v = (self as $bigty) * (other as $bigty) + (other2 as $bigty) +
                            (carry as $bigty);
                    ((v >> <$ty>::BITS) as $ty, v as $ty)
                }

                #[inline]
                fn full_div_rem(self, other: $ty, borrow: $ty) -> ($ty, $ty) {
                    debug_assert!(borrow < other);
                    // this cannot overflow, the dividend is between 0 and other * 2^nbits - 1
                    let lhs = ((borrow as $bigty) << <$ty>::BITS) | (self as $bigty);
                    let rhs = other as $bigty;
                    ((lhs / rhs) as $ty, (lhs % rhs) as $ty)
                }

                #[inline]
                fn from_u128_lossy(v: u128) -> $ty {
                    v as $ty
                }

                #[inline]
                fn as_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    )
}

impl_full_ops! {
    u8:  mul/div(u16);
    u16: mul/div(u32);
    u32: mul/div(u64);
    u64: mul/div(u128);
}

/// A fixed-width native unsigned integer that can be moved in and out of a
/// limb store.
pub trait Native: PrimInt + Unsigned + fmt::Debug + 'static {
    /// The number of bits in the type.
    const BITS: u32;

    /// Zero-extends the value to 128 bits.
    fn as_u128(self) -> u128;

    /// The low `BITS` bits of `v`.
    fn from_u128_lossy(v: u128) -> Self;
}

macro_rules! impl_native {
    ($($ty:ty)*) => {$(
        impl Native for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_u128_lossy(v: u128) -> $ty {
                v as $ty
            }
        }
    )*}
}

impl_native! { u8 u16 u32 u64 u128 usize }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_add() {
        assert_eq!(0xffu8.full_add(1, false), (true, 0));
        assert_eq!(0xffu8.full_add(0xff, true), (true, 0xff));
        assert_eq!(1u32.full_add(2, true), (false, 4));
        assert_eq!(u64::MAX.full_add(0, true), (true, 0));
    }

    #[test]
    fn test_full_mul_add() {
        assert_eq!(0xffu8.full_mul(0xff, 0xff), (0xff, 0x00));
        assert_eq!(0xffu8.full_mul_add(0xff, 0xff, 0xff), (0xff, 0xff));
        assert_eq!(u64::MAX.full_mul_add(u64::MAX, u64::MAX, u64::MAX), (u64::MAX, u64::MAX));
        assert_eq!(3u16.full_mul(4, 5), (0, 17));
    }

    #[test]
    fn test_full_div_rem() {
        // (1 * 2^8 + 0x2c) / 10 = 30 rem 0
        assert_eq!(0x2cu8.full_div_rem(10, 1), (30, 0));
        assert_eq!(7u32.full_div_rem(2, 1), (0x8000_0003, 1));
        assert_eq!(0u64.full_div_rem(3, 2), (0xaaaa_aaaa_aaaa_aaaa, 2));
    }

    #[test]
    fn test_lossy_conversions() {
        assert_eq!(<u8 as Limb>::from_u128_lossy(0x1234), 0x34);
        assert_eq!(<u16 as Native>::from_u128_lossy(0x1_2345), 0x2345);
        assert_eq!(Limb::as_u128(u64::MAX), u64::MAX as u128);
        assert_eq!(<usize as Native>::BITS, usize::BITS);
    }
}
