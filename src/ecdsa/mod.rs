//! ECDSA signing, low-s normalization, and DER encoding.

pub mod der;

use crate::curve::{Generator, Point, scalar_mul};
use crate::hash::{double_sha256, sha256};
use crate::primitives::U256;
use crate::primitives::modular::{mod_add, mod_inv, mod_mul};

/// A signature `(r, s)` with `r, s ∈ [1, n-1]` and `s ≤ n/2` (low-s
/// normalization).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
}

/// Derives the ephemeral scalar `k` from a seed by reducing it into
/// `[1, n-1]`, per this crate's own §4.4 derivation: `k = 1 + (seed mod
/// (n-1))`. On retry the caller re-hashes the seed and calls this again.
fn derive_k(seed: U256, n: U256) -> U256 {
    let n_minus_one = n - U256::ONE;
    mod_add(seed % n_minus_one, U256::ONE, n)
}

/// Signs `message` with private scalar `d`, returning a low-s signature.
///
/// The ephemeral scalar is derived deterministically from
/// `SHA-256(message)` (see [`derive_k`]) rather than drawn from an RNG;
/// two calls with identical inputs always return identical signatures.
pub fn sign(d: U256, r#gen: &Generator, message: &[u8]) -> Signature {
    let z = double_sha256(message);

    let mut seed = sha256(message);

    loop {
        let k = derive_k(seed, r#gen.n);
        let point = scalar_mul(k, r#gen.g, &crate::curve::FIELD);

        let r = match point {
            Point::Infinity => {
                seed = sha256(&seed.to_be_bytes());
                continue;
            }
            Point::Affine { x, .. } => x % r#gen.n,
        };

        if r.is_zero() {
            seed = sha256(&seed.to_be_bytes());
            continue;
        }

        let k_inv = mod_inv(k, r#gen.n);
        let rd = mod_mul(r, d, r#gen.n);
        let s = mod_mul(k_inv, mod_add(z % r#gen.n, rd, r#gen.n), r#gen.n);

        if s.is_zero() {
            seed = sha256(&seed.to_be_bytes());
            continue;
        }

        let half_n = r#gen.n.shr1();
        let s = if s > half_n { r#gen.n - s } else { s };

        return Signature { r, s };
    }
}

/// Validates that a signature's components lie in `[1, n-1]` and that `s`
/// is already low-s normalized.
pub fn is_valid_shape(sig: &Signature, n: U256) -> bool {
    !sig.r.is_zero() && sig.r < n && !sig.s.is_zero() && sig.s < n && sig.s <= n.shr1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::SECP256K1;

    #[test]
    fn signing_is_deterministic() {
        let d = U256::from(0xABCDEFu64);
        let a = sign(d, &SECP256K1, b"test message");
        let b = sign(d, &SECP256K1, b"test message");
        assert_eq!(a, b);
    }

    #[test]
    fn signature_is_low_s() {
        let d = U256::from(42u64);
        let sig = sign(d, &SECP256K1, b"another message");
        assert!(sig.s <= SECP256K1.n.shr1());
    }

    #[test]
    fn signature_shape_is_valid() {
        let d = U256::from(7u64);
        let sig = sign(d, &SECP256K1, b"yet another message");
        assert!(is_valid_shape(&sig, SECP256K1.n));
    }

    #[test]
    fn different_messages_produce_different_signatures() {
        let d = U256::from(9001u64);
        let a = sign(d, &SECP256K1, b"message one");
        let b = sign(d, &SECP256K1, b"message two");
        assert_ne!(a, b);
    }
}
