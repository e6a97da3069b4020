//! Single-block Rijndael / AES implementation following FIPS-197.
//!
//! This crate mirrors the standard closely and provides:
//! - GF(2^8) multiplication and the fixed S-box, inverse S-box and Rcon tables.
//! - The key schedule for 128, 192 and 256-bit keys.
//! - Encryption and decryption of exactly one 16-byte block.
//!
//! The round-key schedule lives on the stack and is wiped with [`zeroize`]
//! when it goes out of scope. There are no modes of operation, no padding and
//! no streaming; callers that need them build on top of [`encrypt_block`] and
//! [`decrypt_block`].
//!
//! The S-box is a plain lookup table, so this implementation is not hardened
//! against cache-timing side channels.
//!
//! ```
//! use rijndael_core::{decrypt, encrypt};
//!
//! let key = [0u8; 16];
//! let plaintext = [0u8; 16];
//! let mut ciphertext = [0u8; 16];
//! encrypt(&plaintext, &mut ciphertext, &key, 16).unwrap();
//! assert_eq!(ciphertext[..4], [0x66, 0xe9, 0x4b, 0xd4]);
//!
//! let mut recovered = [0u8; 16];
//! decrypt(&ciphertext, &mut recovered, &key, 16).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key};
pub use crate::error::{describe, Error, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{KeySchedule, KeySize, MAX_ROUNDS, MAX_SCHEDULE_LEN};
pub use crate::sbox::{INV_SBOX, RCON, SBOX};
