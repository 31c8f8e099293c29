//! DER encoding and decoding of ECDSA signatures.

use crate::ecdsa::Signature;
use crate::error::CoreError;
use crate::primitives::U256;

/// Minimally encodes `value` as a big-endian two's-complement integer:
/// strip leading `0x00` bytes, then prepend one `0x00` if the remaining
/// top bit is set (so the value isn't misread as negative).
fn encode_integer(value: U256) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(31);
    let mut trimmed = bytes[first_nonzero..].to_vec();

    if trimmed[0] & 0x80 != 0 {
        trimmed.insert(0, 0x00);
    }

    trimmed
}

/// Encodes `sig` as `0x30 len(content) 0x02 len(r) r 0x02 len(s) s`.
pub fn encode(sig: &Signature) -> Vec<u8> {
    let r = encode_integer(sig.r);
    let s = encode_integer(sig.s);

    let mut content = Vec::with_capacity(4 + r.len() + s.len());
    content.push(0x02);
    content.push(r.len() as u8);
    content.extend_from_slice(&r);
    content.push(0x02);
    content.push(s.len() as u8);
    content.extend_from_slice(&s);

    let mut out = Vec::with_capacity(2 + content.len());
    out.push(0x30);
    out.push(content.len() as u8);
    out.extend_from_slice(&content);

    out
}

/// Parses one `0x02`-tagged minimally-encoded integer starting at
/// `bytes[*pos]`, advancing `*pos` past it.
fn decode_integer(bytes: &[u8], pos: &mut usize) -> Result<U256, CoreError> {
    if bytes.len() < *pos + 2 || bytes[*pos] != 0x02 {
        return Err(CoreError::DerDecodeError);
    }

    let len = bytes[*pos + 1] as usize;
    let start = *pos + 2;
    let end = start.checked_add(len).ok_or(CoreError::DerDecodeError)?;

    if len == 0 || end > bytes.len() {
        return Err(CoreError::DerDecodeError);
    }

    let value_bytes = &bytes[start..end];

    if value_bytes[0] == 0x00 && (value_bytes.len() == 1 || value_bytes[1] & 0x80 == 0) {
        return Err(CoreError::DerDecodeError);
    }
    if value_bytes.len() > 33 {
        return Err(CoreError::DerDecodeError);
    }

    let mut padded = [0u8; 32];
    padded[32 - value_bytes.len().min(32)..]
        .copy_from_slice(&value_bytes[value_bytes.len().saturating_sub(32)..]);

    *pos = end;
    Ok(U256::from_be_bytes(padded))
}

/// Decodes a DER-encoded signature, rejecting malformed framing (bad tag,
/// truncated length, trailing bytes, or a non-minimally-encoded integer).
pub fn decode(bytes: &[u8]) -> Result<Signature, CoreError> {
    if bytes.len() < 2 || bytes[0] != 0x30 {
        return Err(CoreError::DerDecodeError);
    }

    let content_len = bytes[1] as usize;
    if 2 + content_len != bytes.len() {
        return Err(CoreError::DerDecodeError);
    }

    let mut pos = 2;
    let r = decode_integer(bytes, &mut pos)?;
    let s = decode_integer(bytes, &mut pos)?;

    if pos != bytes.len() {
        return Err(CoreError::DerDecodeError);
    }

    Ok(Signature { r, s })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_small_values() {
        let sig = Signature {
            r: U256::from(1u8),
            s: U256::from(2u8),
        };
        let encoded = encode(&sig);
        assert_eq!(decode(&encoded).unwrap(), sig);
    }

    #[test]
    fn round_trips_high_bit_values() {
        let sig = Signature {
            r: U256::MAX - U256::from(1u8),
            s: U256::from(0x80u8),
        };
        let encoded = encode(&sig);
        assert_eq!(decode(&encoded).unwrap(), sig);
    }

    #[test]
    fn rejects_bad_tag() {
        let mut encoded = encode(&Signature {
            r: U256::ONE,
            s: U256::ONE,
        });
        encoded[0] = 0x31;
        assert_eq!(decode(&encoded), Err(CoreError::DerDecodeError));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut encoded = encode(&Signature {
            r: U256::ONE,
            s: U256::ONE,
        });
        encoded.push(0xFF);
        assert_eq!(decode(&encoded), Err(CoreError::DerDecodeError));
    }
}
