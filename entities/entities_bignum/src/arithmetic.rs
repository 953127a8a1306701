//! Big Number Arithmetic
//!
//! Addition, subtraction, multiplication, division, modulo, power and
//! integer square root over the fixed-capacity word array, plus in-place
//! increment and decrement.
//!
//! Every result is reduced modulo 2^1024. Division by zero is the only
//! failable precondition in this module and is reported as `None`; all
//! other edge behaviour (overflow, underflow) is defined wraparound.
//!
//! Multi-step algorithms keep their scratch values (multiplication rows,
//! the division alignment pair, the power accumulator, the square-root
//! bounds) as stack locals, so nothing is heap-allocated on any path.

use std::cmp::Ordering;

use crate::bignum::{BigNum, Word, WORD_BITS, WORD_COUNT};

/// Smallest top-word value at which one more alignment shift would
/// overflow the divisor.
const HALF_MAX: Word = 1 + Word::MAX / 2;

impl BigNum {
    /// Add two big numbers: `self + other`, wrapping modulo 2^1024.
    ///
    /// Word-wise addition through a 64-bit accumulator; the carry chains
    /// across words and the carry out of the top word is discarded.
    pub fn plus(&self, other: &Self) -> Self {
        let mut out = Self::new();
        let mut carry = 0u64;
        for i in 0..WORD_COUNT {
            let tmp = u64::from(self.words[i]) + u64::from(other.words[i]) + carry;
            out.words[i] = tmp as Word;
            carry = tmp >> WORD_BITS;
        }
        out
    }

    /// Subtract two big numbers: `self - other`, wrapping modulo 2^1024.
    ///
    /// Implemented as a biased add (`self[i] + 2^32 - other[i] - borrow`)
    /// so no negative intermediate is ever formed. When `other > self`
    /// numerically, the result is the defined unsigned wraparound
    /// `2^1024 - (other - self)`.
    pub fn minus(&self, other: &Self) -> Self {
        let mut out = Self::new();
        let mut borrow = 0u64;
        for i in 0..WORD_COUNT {
            let biased = u64::from(self.words[i]) + (u64::from(Word::MAX) + 1);
            let subtrahend = u64::from(other.words[i]) + borrow;
            let res = biased - subtrahend;
            out.words[i] = res as Word;
            borrow = u64::from(res <= u64::from(Word::MAX));
        }
        out
    }

    /// Multiply two big numbers: `self * other`, wrapping modulo 2^1024.
    ///
    /// Schoolbook O(n²): each widened word product is positioned at word
    /// offset `i + j` and accumulated into a per-row total, and the rows
    /// are summed into the result. Partial products whose offset would
    /// exceed the capacity are dropped.
    pub fn times(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for i in 0..WORD_COUNT {
            let mut row = Self::new();
            for j in 0..WORD_COUNT - i {
                let product = u64::from(self.words[i]) * u64::from(other.words[j]);
                let mut partial = Self::from_u64(product);
                partial.lshift_words(i + j);
                row = row.plus(&partial);
            }
            out = out.plus(&row);
        }
        out
    }

    /// Divide two big numbers: `self / other`.
    ///
    /// Restoring binary long division. The divisor and a quotient-bit
    /// accumulator are left-shifted until the divisor exceeds the
    /// dividend; if the divisor's top word has reached half the word
    /// range the alignment loop stops immediately instead, since one
    /// more shift would overflow the top word and loop forever on
    /// maximal divisors.
    ///
    /// Returns `None` when `other` is zero.
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }

        let mut current = Self::from_u32(1);
        let mut denom = *other;
        let mut remainder = *self;

        let mut overflow = false;
        while denom.cmp(self) != Ordering::Greater {
            if denom.words[WORD_COUNT - 1] >= HALF_MAX {
                overflow = true;
                break;
            }
            current.lshift_one_bit();
            denom.lshift_one_bit();
        }
        if !overflow {
            // Undo the final over-shift of the alignment loop.
            denom.rshift_one_bit();
            current.rshift_one_bit();
        }

        let mut quotient = Self::new();
        while !current.is_zero() {
            if remainder.cmp(&denom) != Ordering::Less {
                remainder = remainder.minus(&denom);
                quotient = quotient.bitor(&current);
            }
            current.rshift_one_bit();
            denom.rshift_one_bit();
        }
        Some(quotient)
    }

    /// Divide with remainder: returns `(quotient, remainder)`.
    ///
    /// The quotient is always the first element of the pair. The
    /// remainder is derived as `self - quotient * other`, so the division
    /// identity `self == quotient * other + remainder` holds modulo
    /// 2^1024 and `remainder < other`.
    ///
    /// Returns `None` when `other` is zero.
    pub fn divmod(&self, other: &Self) -> Option<(Self, Self)> {
        let quotient = self.div(other)?;
        let remainder = self.minus(&quotient.times(other));
        Some((quotient, remainder))
    }

    /// Remainder of division: `self % other`.
    ///
    /// Returns `None` when `other` is zero.
    pub fn rem(&self, other: &Self) -> Option<Self> {
        let (_, remainder) = self.divmod(other)?;
        Some(remainder)
    }

    /// Increment in place, wrapping modulo 2^1024.
    ///
    /// Ripple carry that stops at the first word that absorbs the carry
    /// without overflowing.
    pub fn increment(&mut self) {
        for word in self.words.iter_mut() {
            let (res, overflowed) = word.overflowing_add(1);
            *word = res;
            if !overflowed {
                break;
            }
        }
    }

    /// Decrement in place, wrapping modulo 2^1024.
    ///
    /// Decrementing zero wraps to the maximum representable value.
    pub fn decrement(&mut self) {
        for word in self.words.iter_mut() {
            let (res, underflowed) = word.overflowing_sub(1);
            *word = res;
            if !underflowed {
                break;
            }
        }
    }

    /// Raise to a power: `self ^ exponent`, wrapping modulo 2^1024.
    ///
    /// Repeated multiplication; the exponent is consumed by
    /// decrement-to-zero, so the cost is proportional to the numeric
    /// value of the exponent, not its bit length. `pow(a, 0) == 1` for
    /// every `a`, including zero.
    pub fn pow(&self, exponent: &Self) -> Self {
        if exponent.is_zero() {
            return Self::from_u32(1);
        }

        let mut result = *self;
        let mut count = *exponent;
        count.decrement();
        while !count.is_zero() {
            result = result.times(self);
            count.decrement();
        }
        result
    }

    /// Integer square root: `floor(sqrt(self))`, exact for all inputs.
    ///
    /// Binary search over `[low, high]`. The midpoint is derived as
    /// `low + (high - low)/2 + 1` rather than `(low + high)/2`, which
    /// could overflow near capacity.
    pub fn isqrt(&self) -> Self {
        let mut low = Self::new();
        let mut high = *self;
        let mut mid = high.rshift(1);
        mid.increment();

        while high.cmp(&low) == Ordering::Greater {
            let squared = mid.times(&mid);
            if squared.cmp(self) == Ordering::Greater {
                high = mid;
                high.decrement();
            } else {
                low = mid;
            }
            mid = high.minus(&low);
            mid.rshift_one_bit();
            mid = low.plus(&mid);
            mid.increment();
        }
        low
    }
}
