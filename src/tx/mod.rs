//! Pre-segwit legacy transaction assembly and serialization.

pub mod script;
pub mod varint;

pub use script::Script;

use crate::curve::Generator;
use crate::ecdsa::{self, Signature, der};
use crate::error::CoreError;
use crate::hash::double_sha256;
use crate::keys::{PrivateKey, PublicKey};
use crate::primitives::U256;

/// SIGHASH_ALL, the only sighash type this toolkit supports.
pub const SIGHASH_ALL: u32 = 0x0000_0001;

/// One transaction input.
///
/// `prev_tx` is kept in display orientation (big-endian, matching how
/// block explorers and the original source print it) and byte-reversed
/// only at serialization time, where the wire format wants little-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub prev_tx: [u8; 32],
    pub prev_index: u32,
    pub script_sig: Script,
    pub sequence: u32,
    /// The referenced output's scriptPubKey. Consumed only by signing-mode
    /// serialization (§4.7); never itself serialized.
    pub prev_script_pubkey: Script,
}

impl TxIn {
    pub fn new(prev_tx: [u8; 32], prev_index: u32, prev_script_pubkey: Script) -> Self {
        TxIn {
            prev_tx,
            prev_index,
            script_sig: Script::empty(),
            sequence: 0xFFFF_FFFF,
            prev_script_pubkey,
        }
    }

    fn serialize_with_script(&self, out: &mut Vec<u8>, script: &Script) -> Result<(), CoreError> {
        let mut reversed = self.prev_tx;
        reversed.reverse();

        out.extend_from_slice(&reversed);
        out.extend_from_slice(&self.prev_index.to_le_bytes());
        script.serialize(out)?;
        out.extend_from_slice(&self.sequence.to_le_bytes());

        Ok(())
    }

    fn serialize_broadcast(&self, out: &mut Vec<u8>) -> Result<(), CoreError> {
        self.serialize_with_script(out, &self.script_sig)
    }
}

/// One transaction output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub amount: u64,
    pub script_pubkey: Script,
}

impl TxOut {
    pub fn new(amount: u64, script_pubkey: Script) -> Self {
        TxOut { amount, script_pubkey }
    }

    fn serialize(&self, out: &mut Vec<u8>) -> Result<(), CoreError> {
        out.extend_from_slice(&self.amount.to_le_bytes());
        self.script_pubkey.serialize(out)
    }
}

/// A full transaction: version, inputs, outputs, locktime.
///
/// Built incrementally: construct with unsigned/empty `script_sig`s, call
/// [`Tx::sign_input`] once per input to populate its scriptSig, then
/// [`Tx::serialize_broadcast`] once every input is signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tx {
    pub version: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub locktime: u32,
}

impl Tx {
    pub fn new(version: u32, inputs: Vec<TxIn>, outputs: Vec<TxOut>, locktime: u32) -> Self {
        Tx { version, inputs, outputs, locktime }
    }

    fn serialize_inner(&self, out: &mut Vec<u8>, signing_index: Option<usize>) -> Result<(), CoreError> {
        out.extend_from_slice(&self.version.to_le_bytes());

        varint::write(out, self.inputs.len() as u64);
        for (j, input) in self.inputs.iter().enumerate() {
            match signing_index {
                None => input.serialize_broadcast(out)?,
                Some(i) if i == j => input.serialize_with_script(out, &input.prev_script_pubkey)?,
                Some(_) => input.serialize_with_script(out, &Script::empty())?,
            }
        }

        varint::write(out, self.outputs.len() as u64);
        for output in &self.outputs {
            output.serialize(out)?;
        }

        out.extend_from_slice(&self.locktime.to_le_bytes());

        if signing_index.is_some() {
            out.extend_from_slice(&SIGHASH_ALL.to_le_bytes());
        }

        Ok(())
    }

    /// Serializes the transaction in broadcast mode: real scriptSigs, no
    /// sighash trailer.
    pub fn serialize_broadcast(&self) -> Result<Vec<u8>, CoreError> {
        let mut out = Vec::new();
        self.serialize_inner(&mut out, None)?;
        Ok(out)
    }

    /// Builds the §4.7 signing-mode serialization for input `sig_index`.
    fn signing_bytes(&self, sig_index: usize) -> Result<Vec<u8>, CoreError> {
        if sig_index >= self.inputs.len() {
            return Err(CoreError::SigningMessageMode);
        }

        let mut out = Vec::new();
        self.serialize_inner(&mut out, Some(sig_index))?;
        Ok(out)
    }

    /// Builds the §4.7 signing-mode serialization for input `sig_index` and
    /// returns its double-SHA-256 digest — the ECDSA message `z`.
    ///
    /// This is the value `ecdsa::sign` would compute internally from the
    /// same signing-mode bytes; it is exposed so callers can inspect or
    /// verify `z` without re-deriving the serialization themselves.
    /// [`Tx::sign_input`] signs the raw signing-mode bytes directly rather
    /// than routing through this digest, since `ecdsa::sign` already hashes
    /// its `message` argument once.
    pub fn signing_message(&self, sig_index: usize) -> Result<U256, CoreError> {
        let bytes = self.signing_bytes(sig_index)?;
        Ok(double_sha256(&bytes))
    }

    /// Signs input `sig_index` with `private_key`, DER-encodes the result
    /// with the SIGHASH_ALL byte appended, and writes the P2PKH unlock
    /// script into that input's `script_sig` in place.
    ///
    /// `pubkey` must be `private_key`'s own public key (already validated
    /// on-curve by [`PublicKey::from_point`]); mismatches are rejected with
    /// `InvalidPoint` rather than silently signed and embedded.
    ///
    /// This is the one operation in this module that mutates rather than
    /// returns a new value — signing a transaction is inherently a
    /// multi-step process over shared state (§4.8), not a pure function.
    pub fn sign_input(
        &mut self,
        sig_index: usize,
        private_key: &PrivateKey,
        r#gen: &Generator,
        pubkey: &PublicKey,
    ) -> Result<Signature, CoreError> {
        if *pubkey != private_key.public_key(r#gen) {
            return Err(CoreError::InvalidPoint);
        }

        let message = self.signing_bytes(sig_index)?;
        let signature = ecdsa::sign(private_key.scalar(), r#gen, &message);

        let mut der_sig = der::encode(&signature);
        der_sig.push(0x01);

        let pubkey_bytes = pubkey.to_compressed();

        let mut script_sig_bytes = Vec::with_capacity(der_sig.len() + 1 + pubkey_bytes.len() + 2);
        script_sig_bytes.push(der_sig.len() as u8);
        script_sig_bytes.extend_from_slice(&der_sig);
        script_sig_bytes.push(pubkey_bytes.len() as u8);
        script_sig_bytes.extend_from_slice(&pubkey_bytes);

        self.inputs[sig_index].script_sig = Script::new(script_sig_bytes)?;

        Ok(signature)
    }

    /// `tx_id`: the byte-reversed double-SHA-256 of the broadcast
    /// serialization.
    pub fn tx_id(&self) -> Result<[u8; 32], CoreError> {
        let serialized = self.serialize_broadcast()?;
        let mut id = double_sha256(&serialized).to_be_bytes();
        id.reverse();
        Ok(id)
    }
}
