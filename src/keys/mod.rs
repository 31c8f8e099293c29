//! Key types, public key encoding, and Base58Check addresses.

pub mod base58;

use crate::curve::{FIELD, Generator, Point, is_on_curve, scalar_base_mul};
use crate::error::CoreError;
use crate::hash::hash160;
use crate::primitives::U256;

/// An integer in `[1, n-1]`, the scalar that generates a [`PublicKey`] via
/// `d · G`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey(U256);

impl PrivateKey {
    /// Validates `scalar` as a private key: nonzero and below the group
    /// order `n`.
    pub fn new(scalar: U256, r#gen: &Generator) -> Result<Self, CoreError> {
        if scalar.is_zero() || scalar >= r#gen.n {
            return Err(CoreError::InvalidScalar);
        }

        Ok(PrivateKey(scalar))
    }

    pub fn scalar(&self) -> U256 {
        self.0
    }

    /// Derives the public key `d · G`.
    pub fn public_key(&self, r#gen: &Generator) -> PublicKey {
        let point = scalar_base_mul(self.0, r#gen).expect("private key scalar already validated");
        PublicKey(point)
    }
}

/// A curve point known to equal `k · G` for some private scalar `k`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wraps a point after checking it lies on the curve.
    pub fn from_point(point: Point) -> Result<Self, CoreError> {
        match point {
            Point::Infinity => Err(CoreError::InvalidPoint),
            Point::Affine { x, y } => {
                if is_on_curve(x, y, &FIELD) {
                    Ok(PublicKey(point))
                } else {
                    Err(CoreError::InvalidPoint)
                }
            }
        }
    }

    pub fn point(&self) -> Point {
        self.0
    }

    /// 33-byte compressed encoding: `0x02`/`0x03` parity prefix || x.
    pub fn to_compressed(&self) -> [u8; 33] {
        let (x, y) = self.0.coords().expect("public key is never infinity");

        let mut out = [0u8; 33];
        out[0] = if y.to_be_bytes()[31] & 1 == 0 { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&x.to_be_bytes());

        out
    }

    /// 65-byte uncompressed encoding: `0x04` || x || y.
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let (x, y) = self.0.coords().expect("public key is never infinity");

        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&x.to_be_bytes());
        out[33..65].copy_from_slice(&y.to_be_bytes());

        out
    }

    /// hash160 of the compressed or uncompressed encoding, per `compressed`.
    pub fn hash160(&self, compressed: bool) -> [u8; 20] {
        if compressed {
            hash160(&self.to_compressed())
        } else {
            hash160(&self.to_uncompressed())
        }
    }

    /// Derives the Base58Check address for this key on `net`, using the
    /// compressed or uncompressed pubkey encoding per `compressed`.
    pub fn address(&self, net: Network, compressed: bool) -> String {
        base58::encode_address(net.version_byte(), &self.hash160(compressed))
    }
}

/// Which network's address version byte to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Main,
    Test,
}

impl Network {
    pub const fn version_byte(self) -> u8 {
        match self {
            Network::Main => 0x00,
            Network::Test => 0x6f,
        }
    }
}
