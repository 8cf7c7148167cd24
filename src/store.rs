//! The limb store capability.
//!
//! A store holds digits `[a, b, c, ...]` representing `a + b*2^W + c*2^(2W) + ...`
//! where `W` is the number of bits in the limb type. Every algorithm in the
//! crate reads and writes through [`LimbStore`]; the concrete container is
//! either a fixed-capacity array or a growable vector.

use alloc::vec::Vec;

use num_traits::{One, PrimInt, Zero};

use crate::limb::Limb;

pub trait LimbStore {
    type Limb: Limb;

    /// Digits, least significant first.
    fn limbs(&self) -> &[Self::Limb];

    fn limbs_mut(&mut self) -> &mut [Self::Limb];

    /// Makes room for at least `len` limbs if the store can grow, zero-filling
    /// new high limbs. Returns the resulting length, which is smaller than
    /// `len` only for fixed-capacity stores.
    fn grow_to(&mut self, len: usize) -> usize;

    /// A zero-valued store sized for `len` limbs. Fixed-capacity stores ignore
    /// the hint.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    #[inline]
    fn len(&self) -> usize {
        self.limbs().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.limbs().is_empty()
    }

    /// The `i`-th limb, or zero when `i` is past the end.
    #[inline]
    fn limb(&self, i: usize) -> Self::Limb {
        self.limbs().get(i).copied().unwrap_or_else(Self::Limb::zero)
    }

    /// Returns `true` if the bignum is zero.
    fn is_zero(&self) -> bool {
        self.limbs().iter().all(|v| v.is_zero())
    }

    /// Sets every limb to zero without changing the length.
    fn set_zero(&mut self) {
        for v in self.limbs_mut() {
            *v = Self::Limb::zero();
        }
    }

    /// Returns the `i`-th bit where bit 0 is the least significant one.
    /// In other words, the bit with weight `2^i`. Bits past the end read as zero.
    fn bit(&self, i: usize) -> bool {
        let digitbits = Self::Limb::BITS as usize;
        let d = self.limb(i / digitbits);
        !((d >> (i % digitbits)) & Self::Limb::one()).is_zero()
    }

    /// Returns the number of bits necessary to represent this value. Note that zero
    /// is considered to need 0 bits.
    fn bit_length(&self) -> usize {
        let digits = self.limbs();
        match digits.iter().rposition(|v| !v.is_zero()) {
            Some(top) => {
                let digitbits = Self::Limb::BITS as usize;
                (top + 1) * digitbits - digits[top].leading_zeros() as usize
            }
            None => 0,
        }
    }

    /// The number of limbs up to and including the most significant non-zero one.
    fn significant_len(&self) -> usize {
        self.limbs()
            .iter()
            .rposition(|v| !v.is_zero())
            .map_or(0, |top| top + 1)
    }
}

impl<L: Limb, const N: usize> LimbStore for [L; N] {
    type Limb = L;

    #[inline]
    fn limbs(&self) -> &[L] {
        self
    }

    #[inline]
    fn limbs_mut(&mut self) -> &mut [L] {
        self
    }

    #[inline]
    fn grow_to(&mut self, _len: usize) -> usize {
        N
    }

    #[inline]
    fn with_len(_len: usize) -> Self {
        [L::zero(); N]
    }
}

impl<L: Limb> LimbStore for Vec<L> {
    type Limb = L;

    #[inline]
    fn limbs(&self) -> &[L] {
        self
    }

    #[inline]
    fn limbs_mut(&mut self) -> &mut [L] {
        self
    }

    fn grow_to(&mut self, len: usize) -> usize {
        if self.len() < len {
            self.resize(len, L::zero());
        }
        self.len()
    }

    fn with_len(len: usize) -> Self {
        alloc::vec![L::zero(); len]
    }
}
