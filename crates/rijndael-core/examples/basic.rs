//! Encrypts one block under each key size and decrypts it back.

use rijndael_core::{decrypt_block, encrypt, encrypt_block, KeySchedule, KeySize};

fn main() {
    let plaintext = *b"first block here";

    for size in KeySize::ALL {
        // Deterministic key for reproducibility in the example.
        let key: Vec<u8> = (0..size.key_len() as u8).collect();
        let schedule = KeySchedule::new(&key, size).expect("key length matches size");

        let ciphertext = encrypt_block(&plaintext, &schedule);
        let recovered = decrypt_block(&ciphertext, &schedule);
        assert_eq!(recovered, plaintext);

        let mut one_shot = [0u8; 16];
        encrypt(&plaintext, &mut one_shot, &key, size.key_len()).expect("supported size");
        assert_eq!(one_shot, ciphertext);

        println!("{size}: {}", hex::encode(ciphertext));
    }

    println!("example succeeded; every key size round-trips");
}
