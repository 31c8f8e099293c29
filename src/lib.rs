//! A from-scratch toolkit for constructing, signing, and serializing
//! pre-segwit Bitcoin transactions.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level API. Every cryptographic
//! primitive the protocol depends on — secp256k1 field and group
//! arithmetic, SHA-256, RIPEMD-160, ECDSA, Base58Check, and the legacy
//! transaction wire format — is implemented here rather than pulled in
//! from an external crate.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size, low-level arithmetic: `U256` and its modular operations
//!   ([`primitives::modular`]). Every other module is built on top of this
//!   one.
//!
//! - `hash`
//!   SHA-256 and RIPEMD-160, implemented from the compression function
//!   upward, plus the `double_sha256`/`hash160` compositions the rest of
//!   the crate needs.
//!
//! - `curve`
//!   secp256k1 field and group arithmetic: point addition, doubling, and
//!   double-and-add scalar multiplication.
//!
//! - `keys`
//!   Private/public key types, compressed and uncompressed public key
//!   encoding, and Base58Check address derivation.
//!
//! - `ecdsa`
//!   Signing with this crate's own ephemeral-scalar derivation, low-s
//!   normalization, and DER encoding/decoding.
//!
//! - `tx`
//!   `Script`, `TxIn`, `TxOut`, `Tx`: the pre-segwit legacy serialization
//!   format, CompactSize varints, and the per-input signing-message
//!   construction used by SIGHASH_ALL.
//!
//! - `error`
//!   The crate-wide `CoreError` type every fallible operation returns.
//!
//! # Design goals
//!
//! - No heap allocations in the field/curve/hash core (`Vec` is used only
//!   where the wire format itself is variable-length: scripts and
//!   serialized transactions).
//! - Minimal and explicit APIs.
//! - Stable, well-defined semantics, validated against fixed test vectors.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries. It deliberately omits constant-time hardening,
//! side-channel resistance, script interpretation, segwit, and network
//! I/O — see each module's documentation for what it does and does not
//! cover.

pub mod curve;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod keys;
pub mod primitives;
pub mod tx;

pub use error::CoreError;
