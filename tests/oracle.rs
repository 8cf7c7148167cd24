//! Differential tests against `num-bigint`.

use std::cmp::Ordering;

use bigint_algo::{
    add, compare, divmod, from_radix_str, mul, mul_into, shl, shr, sub, to_radix_string, Error,
    Limb, U256,
};
use num_bigint::{BigUint, RandomBits};
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn to_big<L: Limb>(limbs: &[L]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &l| (acc << L::BITS) + BigUint::from(l.as_u128()))
}

fn from_big_fixed<const N: usize>(v: &BigUint) -> [u64; N] {
    let mut out = [0u64; N];
    for (o, d) in out.iter_mut().zip(v.to_u64_digits()) {
        *o = d;
    }
    out
}

fn random_vec(prng: &mut ChaCha20Rng, max_bits: u64) -> Vec<u32> {
    let bits = prng.gen_range(1..=max_bits);
    let v: BigUint = prng.sample(RandomBits::new(bits));
    v.to_u32_digits()
}

#[test]
fn test_add_sub_growable() {
    init_tracing();
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..200 {
        let a = random_vec(&mut prng, 600);
        let b = random_vec(&mut prng, 600);
        let (big_a, big_b) = (to_big(&a), to_big(&b));

        let (sum, carry) = add(&a, &b);
        let width = a.len().max(b.len()) as u64 * 32;
        let modulus = BigUint::one() << width;
        let expected = &big_a + &big_b;
        assert_eq!(sum.len(), a.len().max(b.len()));
        assert_eq!(carry, expected >= modulus);
        assert_eq!(to_big(&sum), expected % &modulus);

        let (diff, borrow) = sub(&a, &b);
        assert_eq!(borrow, big_a < big_b);
        let expected = (&modulus + &big_a - &big_b) % &modulus;
        assert_eq!(to_big(&diff), expected);
    }
}

#[test]
fn test_add_fixed_carry() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    let modulus = BigUint::one() << 256u32;

    for _ in 0..200 {
        let a: BigUint = prng.sample(RandomBits::new(256));
        let b: BigUint = prng.sample(RandomBits::new(256));
        let (sum, carry) = add(&from_big_fixed::<4>(&a), &from_big_fixed::<4>(&b));
        assert_eq!(carry, &a + &b >= modulus);
        assert_eq!(to_big(&sum), (&a + &b) % &modulus);
    }
}

#[test]
fn test_compare() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);

    for _ in 0..200 {
        let a = random_vec(&mut prng, 300);
        let mut b = random_vec(&mut prng, 300);
        assert_eq!(compare(&a, &b), to_big(&a).cmp(&to_big(&b)));

        // padding with zero limbs never changes the ordering
        b.extend([0, 0, 0]);
        assert_eq!(compare(&a, &b), to_big(&a).cmp(&to_big(&b)));
        assert_eq!(compare(&b, &b.clone()), Ordering::Equal);
    }
}

#[test]
fn test_mul() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);

    for _ in 0..200 {
        let a = random_vec(&mut prng, 700);
        let b = random_vec(&mut prng, 700);
        let product = mul(&a, &b);
        assert_eq!(product.len(), a.len() + b.len());
        assert_eq!(to_big(&product), to_big(&a) * to_big(&b));
    }
}

#[test]
fn test_mul_into_fixed() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);
    let modulus = BigUint::one() << 256u32;

    for _ in 0..200 {
        let (a_bits, b_bits) = (prng.gen_range(1..=256), prng.gen_range(1..=256));
        let a: BigUint = prng.sample(RandomBits::new(a_bits));
        let b: BigUint = prng.sample(RandomBits::new(b_bits));
        let mut out = [0u64; 4];
        let result = mul_into(&from_big_fixed::<4>(&a), &from_big_fixed::<4>(&b), &mut out);
        let expected = &a * &b;
        if expected >= modulus {
            assert_eq!(result, Err(Error::ResultOutOfRange));
        } else {
            assert_eq!(result, Ok(()));
        }
        assert_eq!(to_big(&out), expected % &modulus);
    }
}

#[test]
fn test_divmod() {
    init_tracing();
    let mut prng = ChaCha20Rng::seed_from_u64(5);

    for _ in 0..200 {
        let a = random_vec(&mut prng, 512);
        let b = random_vec(&mut prng, 300);
        let (big_a, big_b) = (to_big(&a), to_big(&b));
        if big_b.is_zero() {
            assert_eq!(divmod(&a, &b), Err(Error::DivideByZero));
            continue;
        }
        let (q, r) = divmod(&a, &b).unwrap();
        assert_eq!(q.len(), a.len());
        assert_eq!(r.len(), b.len());
        assert_eq!(to_big(&q), &big_a / &big_b);
        assert_eq!(to_big(&r), &big_a % &big_b);
    }
}

#[test]
fn test_divmod_single_limb_divisor() {
    let mut prng = ChaCha20Rng::seed_from_u64(6);

    for _ in 0..100 {
        let mut a = random_vec(&mut prng, 400);
        let d = prng.gen_range(1..=u32::MAX);
        // high zero limbs in the divisor still take the short-division path
        a.resize(a.len().max(3), 0);
        let (q, r) = divmod(&a, &vec![d, 0, 0]).unwrap();
        assert_eq!(to_big(&q), to_big(&a) / BigUint::from(d));
        assert_eq!(to_big(&r), to_big(&a) % BigUint::from(d));
    }
}

#[test]
fn test_shifts() {
    let mut prng = ChaCha20Rng::seed_from_u64(7);
    let modulus = BigUint::one() << 256u32;

    for _ in 0..200 {
        let a: BigUint = prng.sample(RandomBits::new(256));
        let bits = prng.gen_range(0..300usize);
        let limbs = from_big_fixed::<4>(&a);

        let (l, lost) = shl(&limbs, bits);
        let exact = &a << bits;
        assert_eq!(to_big(&l), &exact % &modulus);
        assert_eq!(lost, exact >= modulus);

        let (r, lost) = shr(&limbs, bits);
        let exact = &a >> bits;
        assert_eq!(to_big(&r), exact);
        assert_eq!(lost, (&exact << bits) != a);
    }
}

#[test]
fn test_radix_against_num_bigint() {
    let mut prng = ChaCha20Rng::seed_from_u64(8);

    for base in 2..=36u32 {
        for _ in 0..20 {
            let a = random_vec(&mut prng, 400);
            let big = to_big(&a);
            let text = to_radix_string(&a, base);
            assert_eq!(text, big.to_str_radix(base));

            let back: Vec<u32> = from_radix_str(&text, base).unwrap();
            assert_eq!(to_big(&back), big);

            let bytes: Vec<u8> = from_radix_str(&text.to_uppercase(), base).unwrap();
            assert_eq!(to_big(&bytes), big);
        }
    }
}

#[test]
fn test_u256_against_num_bigint() {
    let mut prng = ChaCha20Rng::seed_from_u64(9);
    let modulus = BigUint::one() << 256u32;

    for _ in 0..100 {
        let a: BigUint = prng.sample(RandomBits::new(256));
        let b_bits = prng.gen_range(1..=256);
        let b: BigUint = prng.sample(RandomBits::new(b_bits));
        let x: U256 = a.to_string().parse().unwrap();
        let y: U256 = b.to_string().parse().unwrap();
        assert_eq!(x.to_string(), a.to_string());

        let (s, carry) = x.overflowing_add(y);
        assert_eq!(s.to_string(), ((&a + &b) % &modulus).to_string());
        assert_eq!(carry, &a + &b >= modulus);

        let (p, overflow) = x.overflowing_mul(y);
        assert_eq!(p.to_string(), ((&a * &b) % &modulus).to_string());
        assert_eq!(overflow, &a * &b >= modulus);

        if !b.is_zero() {
            let (q, r) = x.div_rem(y).unwrap();
            assert_eq!(q.to_string(), (&a / &b).to_string());
            assert_eq!(r.to_string(), (&a % &b).to_string());
        }
        assert_eq!(format!("{:x}", x), a.to_str_radix(16));
    }
}

#[test]
fn test_byte_limbs_every_base() {
    let mut prng = ChaCha20Rng::seed_from_u64(10);

    for base in 2..=36u32 {
        for _ in 0..20 {
            let bits = prng.gen_range(1..=300u64);
            let big: BigUint = prng.sample(RandomBits::new(bits));
            let bytes = big.to_bytes_le();
            assert_eq!(to_radix_string(&bytes, base), big.to_str_radix(base));

            let text = big.to_str_radix(base);
            let narrow: Vec<u8> = from_radix_str(&text, base).unwrap();
            assert_eq!(to_big(&narrow), big);
            let wide: Vec<u64> = from_radix_str(&text, base).unwrap();
            assert_eq!(to_big(&wide), big);
        }
    }
}

#[test]
fn test_divmod_byte_and_wide_limbs() {
    let mut prng = ChaCha20Rng::seed_from_u64(11);

    for _ in 0..500 {
        let a_bits = prng.gen_range(1..=400u64);
        let b_bits = prng.gen_range(1..=200u64);
        let big_a: BigUint = prng.sample(RandomBits::new(a_bits));
        let big_b: BigUint = prng.sample(RandomBits::new(b_bits));
        if big_b.is_zero() {
            continue;
        }

        let a = big_a.to_bytes_le();
        let mut b = big_b.to_bytes_le();
        b.extend([0, 0]);
        let (q, r) = divmod(&a, &b).unwrap();
        assert_eq!(to_big(&q), &big_a / &big_b);
        assert_eq!(to_big(&r), &big_a % &big_b);

        let a = big_a.to_u64_digits();
        let mut b = big_b.to_u64_digits();
        b.push(0);
        let (q, r) = divmod(&a, &b).unwrap();
        assert_eq!(to_big(&q), &big_a / &big_b);
        assert_eq!(to_big(&r), &big_a % &big_b);
    }
}

#[test]
fn test_mul_into_byte_limbs_truncates() {
    let mut prng = ChaCha20Rng::seed_from_u64(12);
    let modulus = BigUint::one() << 24u32;

    for _ in 0..300 {
        let a_bits = prng.gen_range(1..=24u64);
        let b_bits = prng.gen_range(1..=24u64);
        let a: BigUint = prng.sample(RandomBits::new(a_bits));
        let b: BigUint = prng.sample(RandomBits::new(b_bits));
        let mut out = [0u8; 3];
        let result = mul_into(&a.to_bytes_le(), &b.to_bytes_le(), &mut out);
        let expected = &a * &b;
        assert_eq!(result.is_err(), expected >= modulus);
        assert_eq!(to_big(&out), expected % &modulus);
    }
}
