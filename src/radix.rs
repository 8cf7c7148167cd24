//! Text rendering and parsing in bases 2 to 36.
//!
//! Digits `0-9` map to values 0-9 and letters to 10-35. Output uses the
//! [`DigitCase`] requested; input accepts either case. There are no prefixes,
//! signs or separators. Zero renders as `"0"`.

use alloc::string::String;
use alloc::vec::Vec;

use num_traits::{One, Zero};
use tracing::trace;

use crate::arith::{div_rem_small_limbs, mul_small_add_limbs};
use crate::error::Error;
use crate::limb::Limb;
use crate::store::LimbStore;

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter case used for digits above 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitCase {
    #[default]
    Lower,
    Upper,
}

impl DigitCase {
    fn table(self) -> &'static [u8; 36] {
        match self {
            DigitCase::Lower => LOWER_DIGITS,
            DigitCase::Upper => UPPER_DIGITS,
        }
    }
}

fn checked_base(base: u32) -> u32 {
    debug_assert!((2..=36).contains(&base), "The radix must be within 2...36");
    base.clamp(2, 36)
}

/// The largest power of `base` that fits in one limb, with its exponent.
fn radix_chunk<L: Limb>(base: u32) -> (L, usize) {
    let radix = L::from_u128_lossy(base as u128);
    let mut power = radix;
    let mut exp = 1;
    while let Some(next) = power.checked_mul(&radix) {
        power = next;
        exp += 1;
    }
    (power, exp)
}

fn digit_value(byte: u8, base: u32) -> Option<u32> {
    let v = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    } as u32;
    (v < base).then_some(v)
}

/// Digit values of `store` in `base`, least significant first. Empty for zero.
fn to_digits_le<S: LimbStore + ?Sized>(store: &S, base: u32) -> Vec<u8> {
    let (chunk, exp) = radix_chunk::<S::Limb>(base);
    let radix = S::Limb::from_u128_lossy(base as u128);

    // Estimate how big the result will be, so we can pre-allocate it.
    let bits_per_digit = base.ilog2() as usize;
    let mut res = Vec::with_capacity(store.bit_length() / bits_per_digit + 1);

    let mut work: Vec<S::Limb> = store.limbs()[..store.significant_len()].to_vec();
    while work.len() > 1 {
        let mut r = div_rem_small_limbs(&mut work, chunk);
        for _ in 0..exp {
            res.push((r % radix).as_u128() as u8);
            r = r / radix;
        }
        while work.last().is_some_and(|v| v.is_zero()) {
            work.pop();
        }
    }

    if let Some(&last) = work.first() {
        let mut r = last;
        while !r.is_zero() {
            res.push((r % radix).as_u128() as u8);
            r = r / radix;
        }
    }

    // chunks below the top one may leave leading zeros behind
    while res.last() == Some(&0) {
        res.pop();
    }
    res
}

/// Renders `store` in `base` with lowercase letters.
///
/// `base` must be in `2..=36`.
pub fn to_radix_string<S: LimbStore + ?Sized>(store: &S, base: u32) -> String {
    to_radix_string_with(store, base, DigitCase::Lower)
}

/// Renders `store` in `base` using the given letter case.
pub fn to_radix_string_with<S: LimbStore + ?Sized>(store: &S, base: u32, case: DigitCase) -> String {
    let base = checked_base(base);
    let digits = to_digits_le(store, base);
    if digits.is_empty() {
        return String::from("0");
    }
    let table = case.table();
    digits.iter().rev().map(|&d| table[d as usize] as char).collect()
}

/// Writes the digits of `store` in `base` to the front of `buf` (lowercase)
/// and returns how many bytes were written.
///
/// The end of the conversion is `Ok(n)` -> `buf[n]`, and
/// `Err(ResultOutOfRange)` -> `buf.len()`: a buffer too short for every digit
/// is consumed entirely and its contents are unspecified. No partial digit
/// string is ever reported as a success.
pub fn to_chars<S: LimbStore + ?Sized>(buf: &mut [u8], store: &S, base: u32) -> Result<usize, Error> {
    let base = checked_base(base);
    let digits = to_digits_le(store, base);
    let len = digits.len().max(1);
    if len > buf.len() {
        trace!(needed = len, available = buf.len(), "digit buffer too small");
        return Err(Error::ResultOutOfRange);
    }
    if digits.is_empty() {
        buf[0] = b'0';
        return Ok(1);
    }
    for (slot, &d) in buf.iter_mut().zip(digits.iter().rev()) {
        *slot = LOWER_DIGITS[d as usize];
    }
    Ok(len)
}

/// Accumulates already validated `digits` into `out` (which is overwritten).
/// Returns `true` if high-order limbs did not fit a fixed-capacity `out`.
fn accumulate<S: LimbStore + ?Sized>(digits: &[u8], base: u32, out: &mut S) -> bool {
    let (_, exp) = radix_chunk::<S::Limb>(base);
    let radix = S::Limb::from_u128_lossy(base as u128);

    out.set_zero();
    let mut overflow = false;
    for group in digits.chunks(exp) {
        let mut mul = S::Limb::one();
        let mut n = S::Limb::zero();
        for &byte in group {
            // validated by the caller
            let v = digit_value(byte, base).unwrap_or(0);
            n = n * radix + S::Limb::from_u128_lossy(v as u128);
            mul = mul * radix;
        }
        // `mul` is `radix^group.len()`, which fits in a limb
        let carry = mul_small_add_limbs(out.limbs_mut(), mul, n);
        if !carry.is_zero() {
            let len = out.len();
            if out.grow_to(len + 1) > len {
                out.limbs_mut()[len] = carry;
            } else {
                overflow = true;
            }
        }
    }
    overflow
}

/// Parses `text` as a number in `base` into `out`.
///
/// Every byte must be a digit of `base`; empty text or any other byte fails
/// with [`Error::InvalidDigit`] and leaves `out` untouched. If the value does
/// not fit a fixed-capacity `out`, the low-order limbs are stored and
/// [`Error::ResultOutOfRange`] is returned.
pub fn from_radix_str_into<S: LimbStore + ?Sized>(text: &str, base: u32, out: &mut S) -> Result<(), Error> {
    let base = checked_base(base);
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(Error::InvalidDigit { position: 0 });
    }
    if let Some(position) = bytes.iter().position(|&b| digit_value(b, base).is_none()) {
        trace!(position, base, "invalid digit");
        return Err(Error::InvalidDigit { position });
    }
    if accumulate(bytes, base, out) {
        trace!(digits = bytes.len(), limbs = out.len(), "parsed value truncated");
        return Err(Error::ResultOutOfRange);
    }
    Ok(())
}

/// Parses `text` as a number in `base` into a new store.
///
/// A growable store is sized to the value; a fixed-capacity store reports
/// [`Error::ResultOutOfRange`] when the value does not fit.
pub fn from_radix_str<S: LimbStore>(text: &str, base: u32) -> Result<S, Error> {
    let mut out = S::with_len(0);
    from_radix_str_into(text, base, &mut out)?;
    Ok(out)
}

/// Parses the longest prefix of `text` made of digits of `base` into `out`
/// and returns the number of bytes consumed.
///
/// Fails with `InvalidDigit { position: 0 }` if `text` does not start with a
/// digit. Overflow follows [`from_radix_str_into`].
pub fn from_chars<S: LimbStore + ?Sized>(text: &[u8], base: u32, out: &mut S) -> Result<usize, Error> {
    let base = checked_base(base);
    let end = text
        .iter()
        .position(|&b| digit_value(b, base).is_none())
        .unwrap_or(text.len());
    if end == 0 {
        return Err(Error::InvalidDigit { position: 0 });
    }
    if accumulate(&text[..end], base, out) {
        return Err(Error::ResultOutOfRange);
    }
    Ok(end)
}
