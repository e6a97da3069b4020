use rijndael_core::{
    decrypt, describe, encrypt, expand_key, gmul, xtime, Block, Error, KeySchedule, KeySize,
    INV_SBOX, SBOX,
};

struct Vector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    // FIPS-197 Appendix B.
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    // SP 800-38A F.1.3 and F.1.5, first block.
    Vector {
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    Vector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
    // All-zero key and block.
    Vector {
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
];

fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16 bytes")
}

#[test]
fn known_answers_encrypt() {
    for v in VECTORS {
        let key = hex::decode(v.key).expect("hex");
        let mut out = [0u8; 16];
        let result = encrypt(&block(v.plaintext), &mut out, &key, key.len());
        assert_eq!(describe(&result), "Success");
        assert_eq!(hex::encode(out), v.ciphertext, "key {}", v.key);
    }
}

#[test]
fn known_answers_decrypt() {
    for v in VECTORS {
        let key = hex::decode(v.key).expect("hex");
        let mut out = [0u8; 16];
        decrypt(&block(v.ciphertext), &mut out, &key, key.len()).expect("decrypt");
        assert_eq!(hex::encode(out), v.plaintext, "key {}", v.key);
    }
}

#[test]
fn expanded_key_tail_for_appendix_a1() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").expect("hex");
    let mut schedule = [0u8; 176];
    expand_key(&mut schedule, &key, KeySize::Aes128).expect("expand");
    assert_eq!(&schedule[..16], key.as_slice());
    assert_eq!(
        hex::encode(&schedule[160..]),
        "d014f9a8c9ee2589e13f0cc8b6630ca6"
    );

    let owned = KeySchedule::new(&key, KeySize::Aes128).expect("expand");
    assert_eq!(owned.as_bytes(), &schedule[..]);
}

#[test]
fn unsupported_sizes_leave_output_untouched() {
    let key = [0x33u8; 64];
    for size in (0..=64).filter(|s| ![16, 24, 32].contains(s)) {
        let mut out = [0xeeu8; 16];
        let result = encrypt(&[0u8; 16], &mut out, &key[..size], size);
        assert_eq!(result, Err(Error::UnsupportedKeySize { size }));
        assert_eq!(describe(&result), "Unsupported key size");
        assert_eq!(out, [0xeeu8; 16]);
    }
}

#[test]
fn round_trip_every_size() {
    let plaintext: Block = *b"abcdef1234567890";
    for size in KeySize::ALL {
        let key: Vec<u8> = (0..size.key_len()).map(|i| (i * 7 + 3) as u8).collect();
        let mut ct = [0u8; 16];
        let mut pt = [0u8; 16];
        encrypt(&plaintext, &mut ct, &key, size.key_len()).expect("encrypt");
        decrypt(&ct, &mut pt, &key, size.key_len()).expect("decrypt");
        assert_ne!(ct, plaintext);
        assert_eq!(pt, plaintext);
    }
}

#[test]
fn demo_vector_from_fixed_key() {
    let mut ct = [0u8; 16];
    encrypt(b"abcdef1234567890", &mut ct, b"kkkkeeeeyyyy....", 16).expect("encrypt");
    assert_eq!(hex::encode(ct), "39628bccc1cd48e45fddb5e89cbf9d02");
}

#[test]
fn public_tables_and_field_helpers() {
    for b in 0..=255u8 {
        assert_eq!(INV_SBOX[usize::from(SBOX[usize::from(b)])], b);
        assert_eq!(gmul(b, 2), xtime(b));
    }
}

#[test]
fn concurrent_callers_agree() {
    let key = hex::decode(VECTORS[2].key).expect("hex");
    let plaintext = block(VECTORS[2].plaintext);
    let expected = block(VECTORS[2].ciphertext);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut out = [0u8; 16];
                    for _ in 0..200 {
                        encrypt(&plaintext, &mut out, &key, 32).expect("encrypt");
                    }
                    out
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), expected);
        }
    });
}
