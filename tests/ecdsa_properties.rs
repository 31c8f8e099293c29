use tbtc_core::curve::SECP256K1;
use tbtc_core::ecdsa::{der, sign};
use tbtc_core::primitives::U256;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn signature_matches_reference_vector() {
    let sig = sign(U256::from(0xABCDEFu64), &SECP256K1, b"test message");

    assert_eq!(
        hex(&sig.r.to_be_bytes()),
        "ea794f07b86cfe0abb469acffa346f3cd7f39fa896b7e20e7e91634571d30ba0"
    );
}

#[test]
fn der_encoding_matches_reference_vector() {
    let sig = sign(U256::from(0xABCDEFu64), &SECP256K1, b"test message");
    let encoded = der::encode(&sig);

    assert_eq!(
        hex(&encoded),
        "3045022100ea794f07b86cfe0abb469acffa346f3cd7f39fa896b7e20e7e91634571d30ba002205560e24ee3655f2f2722cf71b7d1d281964b306dacc2004c6566b08a5de8d1e1"
    );
    assert_eq!(der::decode(&encoded).unwrap(), sig);
}

#[test]
fn low_s_holds_across_many_messages() {
    let half_n = SECP256K1.n.shr1();
    for i in 0u64..20 {
        let message = format!("message number {i}");
        let sig = sign(U256::from(i + 1), &SECP256K1, message.as_bytes());
        assert!(sig.s <= half_n);
        assert!(!sig.r.is_zero());
        assert!(!sig.s.is_zero());
    }
}
