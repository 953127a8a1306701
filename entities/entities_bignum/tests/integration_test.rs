//! Integration tests for the entities_bignum crate
//!
//! Exercises the arithmetic laws the engine guarantees: commutativity,
//! associativity modulo capacity, the division identity, shift round
//! trips, square-root bracketing and the power identities.

use std::cmp::Ordering;

use entities_bignum::{BigNum, Word, WORD_COUNT};

/// Small deterministic generator so runs are reproducible without an RNG
/// dependency.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// A value with up to `nwords` populated low words.
fn random_value(rng: &mut XorShift64, nwords: usize) -> BigNum {
    let mut words = [0 as Word; WORD_COUNT];
    for word in words.iter_mut().take(nwords) {
        *word = rng.next() as Word;
    }
    BigNum::from_words(words)
}

#[test]
fn test_addition_commutes() {
    let mut rng = XorShift64::new(0x5EED_0001);
    for _ in 0..32 {
        let a = random_value(&mut rng, WORD_COUNT);
        let b = random_value(&mut rng, WORD_COUNT);
        assert_eq!(a.plus(&b), b.plus(&a));
    }
}

#[test]
fn test_multiplication_commutes() {
    let mut rng = XorShift64::new(0x5EED_0002);
    for _ in 0..16 {
        let a = random_value(&mut rng, WORD_COUNT);
        let b = random_value(&mut rng, WORD_COUNT);
        assert_eq!(a.times(&b), b.times(&a));
    }
}

#[test]
fn test_addition_associates_modulo_capacity() {
    let mut rng = XorShift64::new(0x5EED_0003);
    for _ in 0..32 {
        let a = random_value(&mut rng, WORD_COUNT);
        let b = random_value(&mut rng, WORD_COUNT);
        let c = random_value(&mut rng, WORD_COUNT);
        assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
    }
}

#[test]
fn test_multiplication_associates_modulo_capacity() {
    let mut rng = XorShift64::new(0x5EED_0004);
    for _ in 0..8 {
        let a = random_value(&mut rng, 12);
        let b = random_value(&mut rng, 12);
        let c = random_value(&mut rng, 12);
        assert_eq!(a.times(&b).times(&c), a.times(&b.times(&c)));
    }
}

#[test]
fn test_division_identity() {
    let mut rng = XorShift64::new(0x5EED_0005);
    for round in 0usize..24 {
        let a = random_value(&mut rng, WORD_COUNT);
        let divisor_words = 1 + (round % 16);
        let mut b = random_value(&mut rng, divisor_words);
        if b.is_zero() {
            b.increment();
        }
        let (quotient, remainder) = a.divmod(&b).unwrap();
        assert_eq!(quotient.times(&b).plus(&remainder), a);
        assert_eq!(remainder.cmp(&b), Ordering::Less);
    }
}

#[test]
fn test_shift_round_trip() {
    let mut rng = XorShift64::new(0x5EED_0006);
    for round in 0u32..32 {
        // Keep the significant bits plus the shift inside the capacity so
        // nothing is truncated on the way up.
        let x = random_value(&mut rng, 8);
        let k = (round * 24) % 768;
        assert_eq!(x.lshift(k).rshift(k), x, "k = {}", k);
    }
}

#[test]
fn test_isqrt_brackets_value() {
    let mut rng = XorShift64::new(0x5EED_0007);
    for round in 0usize..16 {
        let n = random_value(&mut rng, 1 + (round % 15));
        let root = n.isqrt();
        assert!(root.times(&root).cmp(&n) != Ordering::Greater);
        let mut next = root;
        next.increment();
        assert_eq!(next.times(&next).cmp(&n), Ordering::Greater);
    }
}

#[test]
fn test_cmp_is_antisymmetric_and_transitive() {
    let mut rng = XorShift64::new(0x5EED_0008);
    for _ in 0..16 {
        let mut a = random_value(&mut rng, WORD_COUNT);
        let mut b = random_value(&mut rng, WORD_COUNT);
        if a.cmp(&b) == Ordering::Greater {
            std::mem::swap(&mut a, &mut b);
        }
        let c = b.plus(&BigNum::from_u32(1));
        // a <= b < c unless the increment wrapped c to zero.
        if !c.is_zero() {
            assert_ne!(b.cmp(&c), Ordering::Greater);
            assert_ne!(a.cmp(&c), Ordering::Greater);
            assert_eq!(c.cmp(&b), b.cmp(&c).reverse());
        }
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }
}

#[test]
fn test_pow_identities() {
    let mut rng = XorShift64::new(0x5EED_0009);
    let zero = BigNum::new();
    let one = BigNum::from_u32(1);
    for _ in 0..8 {
        let x = random_value(&mut rng, 4);
        assert_eq!(x.pow(&zero), one);
        assert_eq!(x.pow(&one), x);
    }
}

#[test]
fn test_factorial_20_matches_native() {
    let mut n = BigNum::from_u64(20);
    let mut result = BigNum::from_u32(1);
    while !n.is_zero() {
        result = result.times(&n);
        n.decrement();
    }
    assert_eq!(result.to_u64(), 2_432_902_008_176_640_000);
}

#[test]
fn test_operands_unchanged_by_operations() {
    let a = BigNum::from_u64(0xAAAA_BBBB_CCCC_DDDD);
    let b = BigNum::from_u32(12345);
    let a_before = a;
    let b_before = b;
    let _ = a.plus(&b);
    let _ = a.minus(&b);
    let _ = a.times(&b);
    let _ = a.div(&b);
    let _ = a.rem(&b);
    let _ = a.bitand(&b);
    let _ = a.lshift(17);
    let _ = a.isqrt();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
