//! Built-in known-answer vectors.

use anyhow::{bail, Context, Result};
use rijndael_core::{decrypt_block, encrypt_block, Block, KeySchedule, KeySize};

/// One known-answer case. Hex strings are in FIPS-197 byte order.
pub struct Vector {
    pub name: &'static str,
    pub key: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
    /// Last round key, when the source publishes the schedule.
    pub last_round_key: Option<&'static str>,
}

pub const VECTORS: &[Vector] = &[
    Vector {
        name: "FIPS-197 B (AES-128)",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
        last_round_key: Some("d014f9a8c9ee2589e13f0cc8b6630ca6"),
    },
    Vector {
        name: "FIPS-197 C.1 (AES-128)",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
        last_round_key: Some("13111d7fe3944a17f307a78b4d2b30c5"),
    },
    Vector {
        name: "FIPS-197 C.2 (AES-192)",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
        last_round_key: None,
    },
    Vector {
        name: "FIPS-197 C.3 (AES-256)",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
        last_round_key: None,
    },
    Vector {
        name: "SP 800-38A F.1.3 (AES-192)",
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "bd334f1d6e45f25ff712a214571fa5cc",
        last_round_key: Some("e98ba06f448c773c8ecc720401002202"),
    },
    Vector {
        name: "SP 800-38A F.1.5 (AES-256)",
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
        last_round_key: Some("fe4890d1e6188d0b046df344706c631e"),
    },
    Vector {
        name: "all-zero (AES-128)",
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
        last_round_key: None,
    },
];

fn decode_block(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    Block::try_from(bytes.as_slice()).context("block must be 16 bytes")
}

/// Runs one vector through expansion, encryption and decryption.
pub fn check(vector: &Vector) -> Result<()> {
    let key = hex::decode(vector.key).context("decode key hex")?;
    let size = KeySize::try_from(key.len())?;
    let schedule = KeySchedule::new(&key, size)?;
    let plaintext = decode_block(vector.plaintext)?;
    let ciphertext = decode_block(vector.ciphertext)?;

    if let Some(expected) = vector.last_round_key {
        let actual = hex::encode(schedule.round_key(size.rounds()));
        if actual != expected {
            bail!("last round key {actual}, expected {expected}");
        }
    }

    let encrypted = encrypt_block(&plaintext, &schedule);
    if encrypted != ciphertext {
        bail!("ciphertext {}, expected {}", hex::encode(encrypted), vector.ciphertext);
    }
    let decrypted = decrypt_block(&ciphertext, &schedule);
    if decrypted != plaintext {
        bail!("plaintext {}, expected {}", hex::encode(decrypted), vector.plaintext);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vector_passes() {
        for vector in VECTORS {
            check(vector).unwrap_or_else(|err| panic!("{}: {err:#}", vector.name));
        }
    }

    #[test]
    fn corrupted_vector_is_reported() {
        let bad = Vector {
            name: "corrupted",
            key: VECTORS[0].key,
            plaintext: VECTORS[0].plaintext,
            ciphertext: "00000000000000000000000000000000",
            last_round_key: None,
        };
        let err = check(&bad).unwrap_err();
        assert!(err.to_string().starts_with("ciphertext 3925841d"));
    }
}
