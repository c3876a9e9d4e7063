//! Published known-answer vectors (FIPS-197 Appendix C.1, SP 800-38A F.1.1).

use aes_ecb::{decrypt_ecb, encrypt_ecb, EcbCipher, Error};

const SP800_38A_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

const SP800_38A_BLOCKS: [(&str, &str); 4] = [
    (
        "6bc1bee22e409f96e93d7e117393172a",
        "3ad77bb40d7a3660a89ecaf32466ef97",
    ),
    (
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "f5d3d58503b9699de785895a96fdbaaf",
    ),
    (
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "43b1cd7f598ece23881b00e3ed030688",
    ),
    (
        "f69f2445df4f9b17ad2b417be66c3710",
        "7b0c785e27e8ad3f8223207104725dd4",
    ),
];

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn fips_197_c1_single_block() {
    let cipher = EcbCipher::from_slice(&unhex("000102030405060708090a0b0c0d0e0f")).unwrap();
    let ct = cipher
        .encrypt_block(&unhex("00112233445566778899aabbccddeeff"))
        .unwrap();
    assert_eq!(hex::encode(ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn sp800_38a_ecb_blocks() {
    let cipher = EcbCipher::from_slice(&unhex(SP800_38A_KEY)).unwrap();
    let plaintext: Vec<u8> = SP800_38A_BLOCKS.iter().flat_map(|(p, _)| unhex(p)).collect();
    let expected: Vec<u8> = SP800_38A_BLOCKS.iter().flat_map(|(_, c)| unhex(c)).collect();

    assert_eq!(cipher.encrypt_blocks(&plaintext).unwrap(), expected);
    assert_eq!(cipher.decrypt_blocks(&expected).unwrap(), plaintext);
}

#[test]
fn padded_ecb_prefix_matches_raw_blocks() {
    let key = unhex(SP800_38A_KEY);
    let plaintext: Vec<u8> = SP800_38A_BLOCKS.iter().flat_map(|(p, _)| unhex(p)).collect();
    let expected: Vec<u8> = SP800_38A_BLOCKS.iter().flat_map(|(_, c)| unhex(c)).collect();

    let ct = encrypt_ecb(&plaintext, &key).unwrap();
    assert_eq!(ct.len(), plaintext.len() + 16);
    assert_eq!(&ct[..64], &expected[..]);

    let pad_block = EcbCipher::from_slice(&key)
        .unwrap()
        .encrypt_block(&[16u8; 16])
        .unwrap();
    assert_eq!(&ct[64..], &pad_block[..]);
    assert_eq!(decrypt_ecb(&ct, &key).unwrap(), plaintext);
}

#[test]
fn text_round_trip_with_default_demo_key() {
    let key = b"thisisasecretkey";
    let message = "The quick brown fox jumps over the lazy dog".as_bytes();
    let ct = encrypt_ecb(message, key).unwrap();
    assert_eq!(ct.len(), 48);
    assert_eq!(decrypt_ecb(&ct, key).unwrap(), message);
}

#[test]
fn wrong_key_is_detected_or_garbles() {
    let ct = encrypt_ecb(b"secret", b"thisisasecretkey").unwrap();
    match decrypt_ecb(&ct, b"thisisanotherkey") {
        Err(Error::PaddingError) => {}
        Ok(pt) => assert_ne!(pt, b"secret"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
