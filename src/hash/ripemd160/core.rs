//! RIPEMD-160 core hashing function.
//!
//! Unlike SHA-256, RIPEMD-160 interprets message words and the trailing
//! length field as little-endian, and produces a 160-bit digest rather than
//! a 256-bit one — it is used here only as the second step of
//! [`crate::hash::hash160`], never on its own as a general-purpose hash.

use crate::hash::ripemd160::H160_INIT;
use crate::hash::ripemd160::computations::compress;

/// Computes the RIPEMD-160 digest of `input`, returned as 20 raw bytes.
pub fn ripemd160(input: &[u8]) -> [u8; 20] {
    let mut state = H160_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 64 <= len {
        let block: &[u8; 64] = input[i..i + 64].try_into().unwrap();
        compress(block, &mut state);
        i += 64;
    }

    let mut block = [0u8; 64];
    let rem = len - i;

    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, &mut state);
        block = [0; 64];
    }

    let bit_len = (len as u64) << 3;
    block[56..64].copy_from_slice(&bit_len.to_le_bytes());

    compress(&block, &mut state);

    let mut digest = [0u8; 20];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::ripemd160;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(hex(&ripemd160(b"")), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    }

    #[test]
    fn abc() {
        assert_eq!(hex(&ripemd160(b"abc")), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn message_digest() {
        assert_eq!(
            hex(&ripemd160(b"message digest")),
            "5d0689ef49d2fae572b881b123a85ffa21595f36"
        );
    }
}
