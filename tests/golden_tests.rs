//! Fingerprints cross-checked against the reference JA3/JA3S implementations.

use huginn_net_ja3::*;

struct Ja3Golden {
    name: &'static str,
    sig: ClientHelloSignature,
    bare: &'static str,
    hash: &'static str,
}

fn ja3_goldens() -> Vec<Ja3Golden> {
    vec![
        Ja3Golden {
            // TLS 1.2 client from the reference test capture
            name: "tls12_client_capture",
            sig: ClientHelloSignature {
                version: 0x0303,
                cipher_suites: vec![
                    0x003c, 0x002f, 0x003d, 0x0035, 0x0005, 0x000a, 0xc027, 0xc013, 0xc014,
                    0xc02b, 0xc023, 0xc02c, 0xc024, 0xc009, 0xc00a, 0x0040, 0x0032, 0x006a,
                    0x0038, 0x0013, 0x0004,
                ],
                extensions: vec![0xff01, 0x0000, 0x000a, 0x000b, 0x000d],
                supported_groups: vec![0x0017, 0x0018],
                supported_points: vec![0x00],
            },
            bare: "771,60-47-61-53-5-10-49191-49171-49172-49195-49187-49196-49188-49161-49162-64-50-106-56-19-4,65281-0-10-11-13,23-24,0",
            hash: "4d7a28d6f2263ed61de88ca66eb011e3",
        },
        Ja3Golden {
            name: "no_extensions",
            sig: ClientHelloSignature {
                version: 769,
                supported_points: vec![0],
                ..Default::default()
            },
            bare: "769,,,,0",
            hash: "87b2288d92499e7ffef406aedd3ca090",
        },
    ]
}

#[test]
fn test_ja3_goldens() {
    for golden in ja3_goldens() {
        let payload = golden.sig.generate_ja3(&Ja3Options::default());
        assert_eq!(payload.raw.value(), golden.bare, "bare mismatch for {}", golden.name);
        assert_eq!(payload.hash.value(), golden.hash, "hash mismatch for {}", golden.name);
    }
}

#[test]
fn test_ja3_golden_with_grease_injected() {
    // a GREASE-aware client sending the same hello must keep the fingerprint
    let mut golden = ja3_goldens().remove(0);
    golden.sig.cipher_suites.insert(0, 0x3a3a);
    golden.sig.extensions.insert(0, 0x9a9a);
    golden.sig.extensions.push(0xeaea);
    golden.sig.supported_groups.insert(0, 0xdada);

    let payload = golden.sig.generate_ja3(&Ja3Options::default());
    assert_eq!(payload.raw.value(), golden.bare);
    assert_eq!(payload.hash.value(), golden.hash);
}

#[test]
fn test_ja3s_golden() {
    // ServerHello from the reference JA3S test capture
    let sig = ServerHelloSignature {
        version: 0x0303,
        cipher_suite: 0xc02f,
        extensions: vec![0x0017, 0xff01, 0x000b, 0x0010],
    };
    let payload = sig.generate_ja3s();
    assert_eq!(payload.raw, "771,49199,23-65281-11-16");
    assert_eq!(payload.hash, "5b94af9bf6efc9dea416841602004fbb");
    assert_eq!(payload.digest.map(|d| to_hex(&d)), Some(payload.hash.clone()));
}

#[test]
fn test_ja3s_golden_with_grease_extension() {
    let sig = ServerHelloSignature {
        version: 0x0303,
        cipher_suite: 0xc02f,
        extensions: vec![0x0017, 0xff01, 0x2a2a, 0x000b, 0x0010],
    };
    assert_eq!(sig.generate_ja3s().hash, "5b94af9bf6efc9dea416841602004fbb");
}
