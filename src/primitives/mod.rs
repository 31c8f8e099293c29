//! Fixed-size 256-bit unsigned integer primitive.
//!
//! This module is the BigInt facade the rest of the crate builds on: curve
//! arithmetic (`curve`), ECDSA (`ecdsa`), and the hash functions (`hash`) all
//! operate on `U256` rather than reaching for an external big-integer crate.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - secp256k1 field elements and scalars
//! - hash outputs (SHA-256 digests, RIPEMD-160 operands)
//! - transaction amounts and indices that exceed native integer width during
//!   signing-message construction
//!
//! The internal representation is big-endian, which aligns naturally with
//! cryptographic conventions (private keys, digests, curve coordinates are
//! all specified and displayed big-endian).

use core::fmt::{Display, Formatter, Result};

pub mod conv;
pub mod modular;
pub mod ops;

/// 256-bit unsigned integer stored as 32-byte big-endian.
///
/// `U256` is `Copy`: every arithmetic operator takes its operands by value
/// and returns a new value, so no caller-owned scalar is ever mutated out
/// from under it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    pub const ZERO: Self = Self([0u8; 32]);
    pub const ONE: Self = Self::one_be();
    pub const MAX: Self = Self([255u8; 32]);

    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a `U256` from a 32-byte big-endian array.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes)
    }

    /// Returns the big-endian byte representation.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Counts the number of leading zero bits, scanning from the most
    /// significant byte.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Returns the value of bit `i`, where bit 0 is the least significant.
    ///
    /// Used by double-and-add scalar multiplication to walk the scalar from
    /// its low bit upward.
    pub fn bit(&self, i: usize) -> bool {
        assert!(i < 256, "bit index out of range");

        let byte = self.0[31 - i / 8];
        (byte >> (i % 8)) & 1 == 1
    }

    /// Returns the value of bit `i` counting from the most significant bit
    /// (bit 0 is the top bit). Used by the wide-division bit scan in
    /// [`modular`].
    pub(crate) fn bit_msb(&self, i: usize) -> bool {
        assert!(i < 256, "bit index out of range");

        let byte = self.0[i / 8];
        (byte >> (7 - i % 8)) & 1 == 1
    }

    /// Right-shifts by exactly one bit, discarding the bit shifted out.
    pub fn shr1(&self) -> Self {
        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for (o, &b) in out.iter_mut().zip(self.0.iter()) {
            *o = (b >> 1) | carry;
            carry = (b & 1) << 7;
        }

        U256(out)
    }

    /// Left-shifts by exactly one bit, discarding the bit shifted out.
    /// The discarded bit is exactly the value [`U256::bit_msb`]`(0)` read
    /// before the call, which [`modular::reduce_wide`] relies on to track
    /// overflow past the top of a 256-bit working remainder.
    pub(crate) fn shl1(&self) -> Self {
        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for (o, &b) in out.iter_mut().zip(self.0.iter()).rev() {
            *o = (b << 1) | carry;
            carry = (b >> 7) & 1;
        }

        U256(out)
    }
}

impl Display for U256 {
    /// Formats the value as a `0x`-prefixed, lowercase, 64-hex-digit string —
    /// the conventional rendering for a secp256k1 scalar or field element.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("0x")?;

        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
