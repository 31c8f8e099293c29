use tbtc_core::hash::{ripemd160, sha256};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn sha256_empty_string() {
    let digest = sha256(b"");
    assert_eq!(
        hex(&digest.to_be_bytes()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc() {
    let digest = sha256(b"abc");
    assert_eq!(
        hex(&digest.to_be_bytes()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_driver_message() {
    let digest = sha256(b"here is a random bytes message, cool right?");
    assert_eq!(
        hex(&digest.to_be_bytes()),
        "69b9779edaa573a509999cbae415d3408c30544bad09727a1d64eff353c95b89"
    );
}

#[test]
fn ripemd160_empty_string() {
    let digest = ripemd160(b"");
    assert_eq!(hex(&digest), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    assert_eq!(digest.len(), 20);
}

#[test]
fn ripemd160_driver_message() {
    let digest = ripemd160(b"hello this is a test");
    assert_eq!(hex(&digest), "f51960af7dd4813a587ab26388ddab3b28d1f7b4");
}

#[test]
fn ripemd160_always_twenty_bytes() {
    for msg in [&b""[..], b"a", b"abc", b"a much longer message used to exercise multi-block padding"] {
        assert_eq!(ripemd160(msg).len(), 20);
    }
}
