//! Scripts as opaque, self-serializing byte sequences.
//!
//! This core never interprets script opcodes; the P2PKH constants below
//! exist purely so callers assembling scriptPubKeys/scriptSigs don't have
//! to hand-roll the magic numbers.

use crate::error::CoreError;
use crate::tx::varint;

/// A script body too long for this toolkit to construct is rejected here
/// rather than silently emitting a multi-byte CompactSize length.
pub const MAX_SCRIPT_LEN: usize = 253;

pub const OP_DUP: u8 = 0x76;
pub const OP_HASH160: u8 = 0xA9;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_CHECKSIG: u8 = 0xAC;

/// An ordered sequence of raw script bytes, serialized as a CompactSize
/// length prefix followed by the body.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn empty() -> Self {
        Script(Vec::new())
    }

    /// Wraps `bytes` as a script, rejecting bodies that would require this
    /// toolkit to emit a multi-byte CompactSize length (`>= 253` bytes).
    pub fn new(bytes: Vec<u8>) -> Result<Self, CoreError> {
        if bytes.len() >= MAX_SCRIPT_LEN {
            return Err(CoreError::ScriptTooLong);
        }

        Ok(Script(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the standard P2PKH scriptPubKey for a 20-byte pubkey hash:
    /// `OP_DUP OP_HASH160 <20B> OP_EQUALVERIFY OP_CHECKSIG`.
    pub fn p2pkh(hash160: &[u8; 20]) -> Self {
        let mut bytes = Vec::with_capacity(25);
        bytes.push(OP_DUP);
        bytes.push(OP_HASH160);
        bytes.push(0x14); // push 20 bytes
        bytes.extend_from_slice(hash160);
        bytes.push(OP_EQUALVERIFY);
        bytes.push(OP_CHECKSIG);

        Script(bytes)
    }

    pub fn serialize(&self, out: &mut Vec<u8>) -> Result<(), CoreError> {
        if self.0.len() >= MAX_SCRIPT_LEN {
            return Err(CoreError::ScriptTooLong);
        }

        varint::write(out, self.0.len() as u64);
        out.extend_from_slice(&self.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p2pkh_has_standard_shape() {
        let hash = [0xAB; 20];
        let script = Script::p2pkh(&hash);
        let bytes = script.as_bytes();

        assert_eq!(bytes[0], OP_DUP);
        assert_eq!(bytes[1], OP_HASH160);
        assert_eq!(bytes[2], 0x14);
        assert_eq!(&bytes[3..23], &hash);
        assert_eq!(bytes[23], OP_EQUALVERIFY);
        assert_eq!(bytes[24], OP_CHECKSIG);
    }

    #[test]
    fn oversized_script_is_rejected() {
        assert!(Script::new(vec![0u8; MAX_SCRIPT_LEN]).is_err());
    }

    #[test]
    fn empty_script_serializes_to_zero_length_prefix() {
        let mut out = Vec::new();
        Script::empty().serialize(&mut out).unwrap();
        assert_eq!(out, vec![0x00]);
    }
}
