//! Moving values between native unsigned integers and limb stores.
//!
//! Both directions decompose by value, not by memory layout, so the result is
//! the same on little- and big-endian hosts. When the destination is too
//! narrow the low-order bits are still produced and the loss is reported.

use num_traits::Zero;
use tracing::trace;

use crate::error::{Error, Truncated};
use crate::limb::{Limb, Native};
use crate::store::LimbStore;

/// Number of `limb_bits`-wide chunks needed to hold `v`.
fn chunks_needed(v: u128, limb_bits: u32) -> usize {
    let used = 128 - v.leading_zeros();
    used.div_ceil(limb_bits) as usize
}

/// Writes `n` into `out`, least significant limb first.
///
/// Every limb of `out` is overwritten; limbs above the value are zero. A
/// growable store is extended to fit `n`. If a fixed-capacity store is too
/// small, `out` receives `n mod 2^(W*N)` and [`Error::ResultOutOfRange`] is
/// returned. Zero always fits, even into an empty store.
pub fn from_native<N: Native, S: LimbStore + ?Sized>(n: N, out: &mut S) -> Result<(), Error> {
    let limb_bits = S::Limb::BITS;
    let mut v = n.as_u128();
    out.grow_to(chunks_needed(v, limb_bits));
    out.set_zero();

    for limb in out.limbs_mut() {
        if v == 0 {
            break;
        }
        *limb = S::Limb::from_u128_lossy(v);
        v = v.checked_shr(limb_bits).unwrap_or(0);
    }

    if v != 0 {
        trace!(
            value = ?n,
            limbs = out.len(),
            limb_bits,
            "native value truncated into limb store"
        );
        return Err(Error::ResultOutOfRange);
    }
    Ok(())
}

/// Reads `store` back as a native integer.
///
/// If the stored value exceeds `T::MAX`, the low `T::BITS` bits are returned
/// inside [`Truncated`].
pub fn to_native<T: Native, S: LimbStore + ?Sized>(store: &S) -> Result<T, Truncated<T>> {
    let limb_bits = S::Limb::BITS;
    let mut acc: u128 = 0;
    let mut lost = false;

    for (i, &limb) in store.limbs().iter().enumerate() {
        if limb.is_zero() {
            continue;
        }
        let shift = (i as u64) * (limb_bits as u64);
        if shift >= T::BITS as u64 {
            lost = true;
            break;
        }
        let shift = shift as u32;
        let wide = limb.as_u128();
        acc |= wide << shift;
        // bits of this limb that land at or above T::BITS
        if shift + limb_bits > T::BITS && (wide >> (T::BITS - shift)) != 0 {
            lost = true;
        }
    }

    let value = T::from_u128_lossy(acc);
    if lost {
        trace!(
            limbs = store.len(),
            target_bits = T::BITS,
            "limb store truncated into native value"
        );
        return Err(Truncated::new(value));
    }
    Ok(value)
}
