//! Hash algorithms exposed by the crate.
//!
//! Both SHA-256 and RIPEMD-160 are implemented from scratch rather than
//! pulled from an existing crate, matching the rest of the primitives in
//! this crate. [`hash160`] composes the two the way Bitcoin addresses do.

pub mod ripemd160;
pub mod sha256;

pub use ripemd160::core::ripemd160;
pub use sha256::core::sha256;

use crate::primitives::U256;

/// SHA-256 applied twice, used for transaction IDs, signing-message
/// digests, and Base58Check checksums.
pub fn double_sha256(input: &[u8]) -> U256 {
    sha256(&sha256(input).to_be_bytes())
}

/// RIPEMD-160 of the SHA-256 digest of `input`. Public keys are hashed this
/// way before being embedded in a Base58Check address.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(input).to_be_bytes())
}
