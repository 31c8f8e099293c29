//! Modular arithmetic over a `U256` modulus.
//!
//! These helpers underlie both the secp256k1 field (modulus `p`) and the
//! scalar field (modulus `n`): point addition needs field inverses, and
//! ECDSA signing needs the inverse of the ephemeral scalar `k` mod `n`.
//!
//! Multiplication reduces a full 512-bit product rather than truncating,
//! since a truncated `U256` product is wrong for any modulus smaller than
//! `2^256` (which both `p` and `n` are).

use crate::primitives::U256;

/// A 512-bit value held as two `U256` limbs, high and low. Internal to
/// this module: nothing outside needs a 512-bit type of its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Wide {
    hi: U256,
    lo: U256,
}

/// Widening multiply: `a * b` without truncation.
fn mul_wide(a: U256, b: U256) -> Wide {
    let a_words: [u64; 4] = a.into();
    let b_words: [u64; 4] = b.into();

    let mut acc = [0u128; 8];

    for (i, &x) in a_words.iter().rev().enumerate() {
        for (j, &y) in b_words.iter().rev().enumerate() {
            acc[i + j] += x as u128 * y as u128;
        }
    }

    for i in 0..7 {
        let carry = acc[i] >> 64;
        acc[i] &= 0xFFFF_FFFF_FFFF_FFFF;
        acc[i + 1] += carry;
    }

    let mut lo_words = [0u64; 4];
    let mut hi_words = [0u64; 4];

    for (o, &v) in lo_words.iter_mut().zip(acc[0..4].iter().rev()) {
        *o = v as u64;
    }
    for (o, &v) in hi_words.iter_mut().zip(acc[4..8].iter().rev()) {
        *o = v as u64;
    }

    Wide {
        hi: U256::from(hi_words),
        lo: U256::from(lo_words),
    }
}

/// Reduces a 512-bit value modulo `modulus`, which must be non-zero.
///
/// Binary long division carried out one bit at a time across both limbs,
/// with an explicit overflow flag tracking the bit shifted past the top of
/// the 256-bit working remainder (see [`crate::primitives::ops::divmod`]
/// for the same technique applied to plain 256-bit division).
fn reduce_wide(value: Wide, modulus: U256) -> U256 {
    assert!(modulus != U256::ZERO, "reduction modulo zero");

    let mut remainder = U256::ZERO;
    let mut rem_of = false;

    for limb in [value.hi, value.lo] {
        for bit in 0..256 {
            let incoming = limb.bit_msb(bit) as u8;

            rem_of = remainder.bit_msb(0);
            remainder = (remainder.shl1()) | U256::from(incoming);

            if rem_of || remainder >= modulus {
                remainder = remainder - modulus;
                rem_of = false;
            }
        }
    }

    debug_assert!(!rem_of);
    remainder
}

/// Adds `a + b` modulo `modulus`.
pub fn mod_add(a: U256, b: U256, modulus: U256) -> U256 {
    let a = a % modulus;
    let b = b % modulus;

    let sum = a + b;
    // `a` and `b` are each < modulus, so `a + b` can overflow `U256` only
    // if modulus is within one unit of `U256::MAX`; the wrapping add would
    // then make `sum` appear smaller than `a`, which is the overflow tell.
    if sum < a || sum >= modulus {
        sum - modulus
    } else {
        sum
    }
}

/// Subtracts `a - b` modulo `modulus`.
pub fn mod_sub(a: U256, b: U256, modulus: U256) -> U256 {
    let a = a % modulus;
    let b = b % modulus;

    if a >= b { a - b } else { modulus - (b - a) }
}

/// Multiplies `a * b` modulo `modulus`.
pub fn mod_mul(a: U256, b: U256, modulus: U256) -> U256 {
    let wide = mul_wide(a % modulus, b % modulus);
    reduce_wide(wide, modulus)
}

/// Sign-tracked magnitude used internally by [`extended_gcd`]. The Bezout
/// coefficients produced by the extended Euclidean algorithm oscillate in
/// sign every step, so tracking sign alongside an unsigned magnitude is
/// simpler than working in genuine two's-complement.
#[derive(Copy, Clone, Debug)]
struct Signed {
    neg: bool,
    mag: U256,
}

impl Signed {
    fn from_u256(mag: U256) -> Self {
        Signed { neg: false, mag }
    }

    fn sub(self, rhs: Signed) -> Self {
        self.add(Signed {
            neg: !rhs.neg,
            mag: rhs.mag,
        })
    }

    fn add(self, rhs: Signed) -> Self {
        if self.neg == rhs.neg {
            return Signed {
                neg: self.neg,
                mag: self.mag + rhs.mag,
            };
        }

        if self.mag >= rhs.mag {
            Signed {
                neg: self.neg,
                mag: self.mag - rhs.mag,
            }
        } else {
            Signed {
                neg: rhs.neg,
                mag: rhs.mag - self.mag,
            }
        }
        .normalize()
    }

    fn mul(self, rhs: Signed) -> Self {
        Signed {
            neg: self.neg != rhs.neg,
            mag: self.mag * rhs.mag,
        }
        .normalize()
    }

    fn normalize(self) -> Self {
        if self.mag.is_zero() {
            Signed {
                neg: false,
                mag: self.mag,
            }
        } else {
            self
        }
    }
}

/// Extended Euclidean algorithm: returns `(gcd, x, y)` such that
/// `a*x + b*y = gcd` (as signed quantities; `x`/`y` are returned as
/// `(negative, magnitude)` pairs).
fn extended_gcd(a: U256, b: U256) -> (U256, Signed, Signed) {
    let (mut old_r, mut r) = (Signed::from_u256(a), Signed::from_u256(b));
    let (mut old_s, mut s) = (Signed::from_u256(U256::ONE), Signed::from_u256(U256::ZERO));
    let (mut old_t, mut t) = (Signed::from_u256(U256::ZERO), Signed::from_u256(U256::ONE));

    while !r.mag.is_zero() {
        let quotient = old_r.mag / r.mag;
        let quotient = Signed::from_u256(quotient);

        let new_r = old_r.sub(quotient.mul(r));
        old_r = r;
        r = new_r;

        let new_s = old_s.sub(quotient.mul(s));
        old_s = s;
        s = new_s;

        let new_t = old_t.sub(quotient.mul(t));
        old_t = t;
        t = new_t;
    }

    (old_r.mag, old_s, old_t)
}

/// Computes the modular inverse of `a` modulo `modulus` via the extended
/// Euclidean algorithm. `modulus` must be prime (secp256k1's field prime
/// and group order both are) and `a` must not be `0 mod modulus`.
pub fn mod_inv(a: U256, modulus: U256) -> U256 {
    let a = a % modulus;
    assert!(!a.is_zero(), "no inverse for 0");

    let (gcd, x, _y) = extended_gcd(a, modulus);
    debug_assert_eq!(gcd, U256::ONE, "modulus must be prime");

    if x.neg {
        modulus - (x.mag % modulus)
    } else {
        x.mag % modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // secp256k1 field prime.
    const P: U256 = U256::from_be_bytes([
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
        0xfc, 0x2f,
    ]);

    #[test]
    fn mod_add_wraps_at_modulus() {
        let a = P - U256::ONE;
        let b = U256::from(2u8);
        assert_eq!(mod_add(a, b, P), U256::ONE);
    }

    #[test]
    fn mod_sub_wraps_below_zero() {
        let a = U256::ZERO;
        let b = U256::ONE;
        assert_eq!(mod_sub(a, b, P), P - U256::ONE);
    }

    #[test]
    fn mod_mul_small_values() {
        assert_eq!(mod_mul(U256::from(6u8), U256::from(7u8), P), U256::from(42u8));
    }

    #[test]
    fn mod_mul_near_modulus_does_not_truncate() {
        let a = P - U256::ONE;
        let b = P - U256::ONE;
        // (p-1)*(p-1) mod p == 1
        assert_eq!(mod_mul(a, b, P), U256::ONE);
    }

    #[test]
    fn mod_inv_round_trips() {
        let a = U256::from(12345u64);
        let inv = mod_inv(a, P);
        assert_eq!(mod_mul(a, inv, P), U256::ONE);
    }

    #[test]
    fn mod_inv_of_one_is_one() {
        assert_eq!(mod_inv(U256::ONE, P), U256::ONE);
    }
}
