//! Comparison and arithmetic over limb stores.
//!
//! Operands of different lengths are logically zero-extended; nothing reads
//! past the end of a store. Every function returns the correct low-order
//! result together with an explicit carry, borrow or loss flag, or an
//! [`Error::DivideByZero`] for division. Nothing here panics on overflow.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::{self, Ordering};

use num_traits::{One, Zero};
use tracing::debug;

use crate::error::Error;
use crate::limb::Limb;
use crate::store::LimbStore;

/// Compares two digit slices as zero-extended numbers.
pub(crate) fn cmp_limbs<L: Limb>(a: &[L], b: &[L]) -> Ordering {
    let sz = cmp::min(a.len(), b.len());
    if a[sz..].iter().any(|v| !v.is_zero()) {
        return Ordering::Greater;
    }
    if b[sz..].iter().any(|v| !v.is_zero()) {
        return Ordering::Less;
    }
    let lhs = a[..sz].iter().rev();
    let rhs = b[..sz].iter().rev();
    lhs.cmp(rhs)
}

/// Adds `other` to `a` in place, returning the carry out of the top limb.
pub(crate) fn add_assign_limbs<L: Limb>(a: &mut [L], other: &[L]) -> bool {
    debug_assert!(a.len() >= other.len());
    let mut carry = false;
    for (a, &b) in a.iter_mut().zip(other) {
        let (c, v) = (*a).full_add(b, carry);
        *a = v;
        carry = c;
    }
    for a in &mut a[other.len()..] {
        if !carry {
            break;
        }
        let (c, v) = (*a).full_add(L::zero(), carry);
        *a = v;
        carry = c;
    }
    carry
}

/// Subtracts `other` from `a` in place, returning the borrow out of the top limb.
pub(crate) fn sub_assign_limbs<L: Limb>(a: &mut [L], other: &[L]) -> bool {
    debug_assert!(a.len() >= other.len());
    let mut noborrow = true;
    for (a, &b) in a.iter_mut().zip(other) {
        let (c, v) = (*a).full_add(!b, noborrow);
        *a = v;
        noborrow = c;
    }
    for a in &mut a[other.len()..] {
        if noborrow {
            break;
        }
        let (c, v) = (*a).full_add(L::max_value(), noborrow);
        *a = v;
        noborrow = c;
    }
    !noborrow
}

/// Multiplies `a` by `b` into `ret`, keeping the low `ret.len()` limbs.
/// Returns `true` if non-zero product bits fell outside `ret`.
pub(crate) fn mul_limbs<L: Limb>(ret: &mut [L], a: &[L], b: &[L]) -> bool {
    // the internal routine. works best when aa.len() <= bb.len().
    fn mul_inner<L: Limb>(ret: &mut [L], aa: &[L], bb: &[L]) -> bool {
        let n = ret.len();
        let mut overflow = false;
        for (i, &a) in aa.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            let mut carry = L::zero();
            let mut complete = true;
            for (j, &b) in bb.iter().enumerate() {
                let k = i + j;
                if k >= n {
                    if !b.is_zero() || !carry.is_zero() {
                        overflow = true;
                        complete = false;
                        break;
                    }
                    continue;
                }
                let (c, v) = a.full_mul_add(b, ret[k], carry);
                ret[k] = v;
                carry = c;
            }
            if complete && !carry.is_zero() {
                // rows before `i` never reach past `i + bb.len() - 1`
                match ret.get_mut(i + bb.len()) {
                    Some(slot) => *slot = carry,
                    None => overflow = true,
                }
            }
        }
        overflow
    }

    for v in ret.iter_mut() {
        *v = L::zero();
    }
    let a = &a[..significant(a)];
    let b = &b[..significant(b)];
    if a.len() < b.len() {
        mul_inner(ret, a, b)
    } else {
        mul_inner(ret, b, a)
    }
}

/// Multiplies `a` by the limb `m` and adds the limb `add`, in place.
/// Returns the limb carried out of the top.
pub(crate) fn mul_small_add_limbs<L: Limb>(a: &mut [L], m: L, add: L) -> L {
    let mut carry = add;
    for a in a.iter_mut() {
        let (c, v) = (*a).full_mul(m, carry);
        *a = v;
        carry = c;
    }
    carry
}

/// Divides `a` by the non-zero limb `other` in place and returns the remainder.
pub(crate) fn div_rem_small_limbs<L: Limb>(a: &mut [L], other: L) -> L {
    debug_assert!(!other.is_zero());
    let mut borrow = L::zero();
    for a in a.iter_mut().rev() {
        let (q, r) = (*a).full_div_rem(other, borrow);
        *a = q;
        borrow = r;
    }
    borrow
}

/// Shifts `a` left by one bit in place, returning the bit shifted out.
fn shl1_limbs<L: Limb>(a: &mut [L]) -> bool {
    let top = (L::BITS - 1) as usize;
    let mut carry = L::zero();
    for a in a.iter_mut() {
        let out = *a >> top;
        *a = (*a << 1) | carry;
        carry = out;
    }
    !carry.is_zero()
}

fn significant<L: Limb>(a: &[L]) -> usize {
    a.iter().rposition(|v| !v.is_zero()).map_or(0, |top| top + 1)
}

/// Compares `a` and `b`, most significant limb first. Stores of different
/// lengths compare as if the shorter one were zero-extended.
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: LimbStore + ?Sized,
    B: LimbStore<Limb = A::Limb> + ?Sized,
{
    cmp_limbs(a.limbs(), b.limbs())
}

/// Computes `a + b`.
///
/// The result has as many limbs as the longer operand (a fixed-capacity store
/// keeps its own width). The flag is the carry out of the most significant
/// limb: `true` means the sum did not fit and the result holds it modulo
/// `2^(W*len)`.
pub fn add<S: LimbStore>(a: &S, b: &S) -> (S, bool) {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut ret = S::with_len(long.len());
    ret.limbs_mut()[..long.len()].copy_from_slice(long.limbs());
    let carry = add_assign_limbs(ret.limbs_mut(), short.limbs());
    (ret, carry)
}

/// Computes `a - b`.
///
/// The result width follows [`add`]. The flag is the borrow out of the most
/// significant limb: `true` exactly when `a < b`, in which case the result is
/// `a - b` modulo `2^(W*len)`.
pub fn sub<S: LimbStore>(a: &S, b: &S) -> (S, bool) {
    let len = cmp::max(a.len(), b.len());
    let mut ret = S::with_len(len);
    ret.limbs_mut()[..a.len()].copy_from_slice(a.limbs());
    let borrow = sub_assign_limbs(ret.limbs_mut(), b.limbs());
    (ret, borrow)
}

/// Computes the full product `a * b` as `a.len() + b.len()` limbs, which
/// always suffices.
pub fn mul<A, B>(a: &A, b: &B) -> Vec<A::Limb>
where
    A: LimbStore + ?Sized,
    B: LimbStore<Limb = A::Limb> + ?Sized,
{
    let mut ret = vec![A::Limb::zero(); a.len() + b.len()];
    let overflow = mul_limbs(&mut ret, a.limbs(), b.limbs());
    debug_assert!(!overflow);
    ret
}

/// Computes `a * b` into `out`.
///
/// A growable `out` is extended to the full product width first. If a
/// fixed-capacity `out` is too narrow, it receives the product modulo
/// `2^(W*N)` and [`Error::ResultOutOfRange`] is returned.
pub fn mul_into<A, B, D>(a: &A, b: &B, out: &mut D) -> Result<(), Error>
where
    A: LimbStore + ?Sized,
    B: LimbStore<Limb = A::Limb> + ?Sized,
    D: LimbStore<Limb = A::Limb> + ?Sized,
{
    out.grow_to(significant(a.limbs()) + significant(b.limbs()));
    if mul_limbs(out.limbs_mut(), a.limbs(), b.limbs()) {
        return Err(Error::ResultOutOfRange);
    }
    Ok(())
}

/// Multiplies `a` by the limb `m` and adds the limb `add`, in place.
///
/// Returns the limb carried out of the most significant position; a non-zero
/// carry means the result did not fit and `a` holds it modulo `2^(W*len)`.
pub fn mul_small_add<S: LimbStore + ?Sized>(a: &mut S, m: S::Limb, add: S::Limb) -> S::Limb {
    mul_small_add_limbs(a.limbs_mut(), m, add)
}

/// Divides `a` by the limb `d` in place and returns the remainder.
pub fn div_rem_small<S: LimbStore + ?Sized>(a: &mut S, d: S::Limb) -> Result<S::Limb, Error> {
    if d.is_zero() {
        debug!("short division by zero");
        return Err(Error::DivideByZero);
    }
    Ok(div_rem_small_limbs(a.limbs_mut(), d))
}

/// Computes `(a / b, a % b)`.
///
/// The quotient has the width of `a` and the remainder the width of `b`;
/// both always fit. Fails with [`Error::DivideByZero`] when `b` is zero.
pub fn divmod<S: LimbStore>(a: &S, b: &S) -> Result<(S, S), Error> {
    let d_len = b.significant_len();
    if d_len == 0 {
        debug!(dividend_limbs = a.len(), "division by zero");
        return Err(Error::DivideByZero);
    }

    let mut q = S::with_len(a.len());
    let mut r = S::with_len(b.len());

    if d_len == 1 {
        q.limbs_mut()[..a.len()].copy_from_slice(a.limbs());
        r.limbs_mut()[0] = div_rem_small_limbs(q.limbs_mut(), b.limbs()[0]);
        return Ok((q, r));
    }

    if compare(a, b) == Ordering::Less {
        let n = a.significant_len();
        r.limbs_mut()[..n].copy_from_slice(&a.limbs()[..n]);
        return Ok((q, r));
    }

    // Base-2 long division: bring down one bit of `a` at a time.
    // `rem` needs one spare limb since it may reach `2 * d - 1` before subtracting.
    let digitbits = S::Limb::BITS as usize;
    let d = &b.limbs()[..d_len];
    let mut rem = vec![S::Limb::zero(); d_len + 1];
    for i in (0..a.bit_length()).rev() {
        shl1_limbs(&mut rem);
        if a.bit(i) {
            rem[0] = rem[0] | S::Limb::one();
        }
        if cmp_limbs(&rem, d) != Ordering::Less {
            sub_assign_limbs(&mut rem, d);
            // Set bit `i` of q to 1.
            let digit = &mut q.limbs_mut()[i / digitbits];
            *digit = *digit | (S::Limb::one() << (i % digitbits));
        }
    }
    debug_assert!(rem[d_len].is_zero());
    r.limbs_mut()[..d_len].copy_from_slice(&rem[..d_len]);
    Ok((q, r))
}

/// Computes `a << bits`, keeping the width of `a`.
///
/// The flag is `true` when a non-zero bit was shifted out of the top. Grow a
/// growable store first if every bit must be kept.
pub fn shl<S: LimbStore>(a: &S, bits: usize) -> (S, bool) {
    let digitbits = S::Limb::BITS as usize;
    let digits = bits / digitbits;
    let bits = bits % digitbits;

    let mut ret = S::with_len(a.len());
    let mut lost = false;
    {
        let out = ret.limbs_mut();
        let mut place = |idx: usize, v: S::Limb| {
            if v.is_zero() {
                return;
            }
            match out.get_mut(idx) {
                Some(slot) => *slot = *slot | v,
                None => lost = true,
            }
        };
        for (i, &x) in a.limbs().iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            let idx = i.saturating_add(digits);
            if bits == 0 {
                place(idx, x);
            } else {
                place(idx, x << bits);
                place(idx.saturating_add(1), x >> (digitbits - bits));
            }
        }
    }
    (ret, lost)
}

/// Computes `a >> bits`, keeping the width of `a`.
///
/// The flag is `true` when a non-zero bit was shifted out of the bottom, i.e.
/// the result is the floor of the exact quotient by `2^bits`.
pub fn shr<S: LimbStore>(a: &S, bits: usize) -> (S, bool) {
    let digitbits = S::Limb::BITS as usize;
    let digits = bits / digitbits;
    let bits = bits % digitbits;

    let mut ret = S::with_len(a.len());
    let mut lost = false;
    {
        let out = ret.limbs_mut();
        for (i, &x) in a.limbs().iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            if i < digits {
                lost = true;
                continue;
            }
            out[i - digits] = out[i - digits] | (x >> bits);
            if bits > 0 {
                let low = x << (digitbits - bits);
                if i > digits {
                    out[i - digits - 1] = out[i - digits - 1] | low;
                } else if !low.is_zero() {
                    lost = true;
                }
            }
        }
    }
    (ret, lost)
}
