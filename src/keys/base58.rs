//! Base58Check encoding and decoding.
//!
//! The 58-character alphabet omits `0`, `O`, `I`, and `l` to avoid visual
//! ambiguity in addresses a human might transcribe by hand.

use crate::error::CoreError;
use crate::hash::double_sha256;
use crate::primitives::U256;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes a 25-byte Base58Check payload (version byte || hash160 ||
/// 4-byte checksum) as a Base58 string.
fn encode_payload(payload: &[u8; 25]) -> String {
    let leading_zeros = payload.iter().take_while(|&&b| b == 0).count();

    let mut value_bytes = [0u8; 32];
    value_bytes[7..].copy_from_slice(payload);
    let mut value = U256::from_be_bytes(value_bytes);

    let mut digits = Vec::new();
    let fifty_eight = U256::from(58u8);

    while !value.is_zero() {
        let remainder = value % fifty_eight;
        value = value / fifty_eight;
        digits.push(ALPHABET[remainder.to_be_bytes()[31] as usize]);
    }

    let mut out = vec![ALPHABET[0]; leading_zeros];
    out.extend(digits.into_iter().rev());

    String::from_utf8(out).expect("alphabet is all ASCII")
}

/// Builds the Base58Check address for `version_byte || hash160`: appends
/// the 4-byte double-SHA-256 checksum, then Base58-encodes the 25-byte
/// result.
pub fn encode_address(version_byte: u8, hash160: &[u8; 20]) -> String {
    let mut payload = [0u8; 25];
    payload[0] = version_byte;
    payload[1..21].copy_from_slice(hash160);

    let checksum = double_sha256(&payload[..21]);
    payload[21..25].copy_from_slice(&checksum.to_be_bytes()[..4]);

    encode_payload(&payload)
}

/// Decodes a Base58Check string back into `(version_byte, hash160)`,
/// verifying the embedded checksum.
pub fn decode(s: &str) -> Result<(u8, [u8; 20]), CoreError> {
    let leading_ones = s.bytes().take_while(|&b| b == ALPHABET[0]).count();

    let mut value = U256::ZERO;
    let fifty_eight = U256::from(58u8);

    for ch in s.bytes() {
        let digit = ALPHABET
            .iter()
            .position(|&a| a == ch)
            .ok_or(CoreError::InvalidAddressLength)?;
        value = value * fifty_eight + U256::from(digit as u8);
    }

    if leading_ones > 25 {
        return Err(CoreError::InvalidAddressLength);
    }

    let bytes = value.to_be_bytes();
    // The encoded number occupies the low-order bytes of `bytes`; the
    // leading '1' characters restore the high-order zero bytes that
    // `encode_payload` stripped before converting to an integer.
    let body_len = 25 - leading_ones;

    // If the decoded value doesn't actually fit in `body_len` bytes, this
    // isn't a valid 25-byte Base58Check payload — reject it rather than
    // silently truncating the high-order bytes away.
    if bytes[..32 - body_len].iter().any(|&b| b != 0) {
        return Err(CoreError::InvalidAddressLength);
    }

    let mut payload = [0u8; 25];
    payload[leading_ones..].copy_from_slice(&bytes[32 - body_len..]);

    let checksum = double_sha256(&payload[..21]);
    if checksum.to_be_bytes()[..4] != payload[21..25] {
        return Err(CoreError::InvalidChecksum);
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..21]);

    Ok((payload[0], hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_round_trips() {
        let hash = [0x11u8; 20];
        let addr = encode_address(0x6f, &hash);
        let (version, decoded_hash) = decode(&addr).expect("valid address must decode");

        assert_eq!(version, 0x6f);
        assert_eq!(decoded_hash, hash);
    }

    #[test]
    fn tampered_checksum_is_rejected() {
        let hash = [0x22u8; 20];
        let mut addr = encode_address(0x00, &hash).into_bytes();
        let last = addr.len() - 1;
        addr[last] = if addr[last] == b'1' { b'2' } else { b'1' };
        let addr = String::from_utf8(addr).unwrap();

        assert!(matches!(decode(&addr), Err(CoreError::InvalidChecksum) | Err(CoreError::InvalidAddressLength)));
    }

    #[test]
    fn leading_zero_byte_becomes_leading_one_char() {
        let hash = [0u8; 20];
        let addr = encode_address(0x00, &hash);
        assert!(addr.starts_with('1'));
    }
}
