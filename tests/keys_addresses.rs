use tbtc_core::curve::{Point, SECP256K1, scalar_base_mul};
use tbtc_core::keys::{Network, PublicKey, base58};
use tbtc_core::primitives::U256;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn priv_scalar_from_ascii(s: &str) -> U256 {
    let bytes = s.as_bytes();
    assert!(bytes.len() <= 32);
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(bytes);
    U256::from_be_bytes(padded)
}

#[test]
fn public_key_derivation_from_ascii_passphrase() {
    let d = priv_scalar_from_ascii("btc is the future");
    let point = scalar_base_mul(d, &SECP256K1).expect("passphrase scalar is below n");

    let Point::Affine { x, y } = point else {
        panic!("public key must not be infinity");
    };

    assert_eq!(
        hex(&x.to_be_bytes()),
        "c5349e1961a5b98537334a3295274bb35de4fa2ce5989c40f799278883de51f"
    );
    assert_eq!(
        hex(&y.to_be_bytes()),
        "34a28391d1ed1edb95534818b889c72946f981d98de00ed28ada7d66223b363"
    );
}

#[test]
fn testnet_address_for_driver_passphrase() {
    let d = priv_scalar_from_ascii("btc is the future");
    let point = scalar_base_mul(d, &SECP256K1).unwrap();
    let pubkey = PublicKey::from_point(point).unwrap();

    let address = pubkey.address(Network::Test, true);

    assert_eq!(address, "mwXWLUQGNkELzjCQVDxLaUVPKamEDg4Hev");
    assert!(address.len() >= 25 && address.len() <= 34);
    assert!(address.starts_with('m') || address.starts_with('n'));
}

#[test]
fn second_passphrase_yields_distinct_testnet_address() {
    let d = priv_scalar_from_ascii("eth is a shitcoin");
    let point = scalar_base_mul(d, &SECP256K1).unwrap();
    let pubkey = PublicKey::from_point(point).unwrap();

    let address = pubkey.address(Network::Test, true);

    assert_eq!(address, "n3XA1PPswqruikLiGFadJTyd9oX5mUGSbc");
}

#[test]
fn base58_round_trips_arbitrary_hash() {
    for seed in [0u8, 1, 42, 255] {
        let hash = [seed; 20];
        let addr = base58::encode_address(0x00, &hash);
        let (version, decoded) = base58::decode(&addr).expect("encoded address must decode");
        assert_eq!(version, 0x00);
        assert_eq!(decoded, hash);
    }
}
