//! The crate-wide error type.
//!
//! Every fallible operation in this crate returns `Result<_, CoreError>`.
//! Variants carry no payload beyond what's needed to identify which misuse
//! occurred — the call site already has the offending value in scope — the
//! same plain, payload-light style used by this codebase's other fallible
//! modules rather than an external error-derive crate.

use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A scalar was zero or outside `[1, modulus)` where a nonzero residue
    /// was required (private keys, ephemeral `k`, signature components).
    InvalidScalar,
    /// A constructed point does not satisfy the curve equation.
    InvalidPoint,
    /// A Base58Check payload was not exactly 25 bytes.
    InvalidAddressLength,
    /// A Base58Check payload's embedded checksum did not match.
    InvalidChecksum,
    /// A script body is too long for this toolkit to serialize safely
    /// (≥ 253 bytes; see the CompactSize boundary in `tx`).
    ScriptTooLong,
    /// A signing-mode serialization was requested with an out-of-range
    /// input index.
    SigningMessageMode,
    /// DER signature decoding found malformed framing.
    DerDecodeError,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CoreError::InvalidScalar => "scalar is zero or out of range",
            CoreError::InvalidPoint => "point does not satisfy the curve equation",
            CoreError::InvalidAddressLength => "Base58Check payload is not 25 bytes",
            CoreError::InvalidChecksum => "Base58Check checksum does not match",
            CoreError::ScriptTooLong => "script is too long to serialize",
            CoreError::SigningMessageMode => "sig_index out of range for this transaction",
            CoreError::DerDecodeError => "malformed DER signature encoding",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for CoreError {}
