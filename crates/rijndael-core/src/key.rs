//! Key sizes and the expanded round-key schedule.

use core::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::expand_key;
use crate::error::{Error, Result};

/// Round count for the largest supported key.
pub const MAX_ROUNDS: usize = 14;

/// Schedule length for the largest supported key (240 bytes).
pub const MAX_SCHEDULE_LEN: usize = BLOCK_SIZE * (MAX_ROUNDS + 1);

/// Supported cipher key sizes. The discriminant is the key length in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128 = 16,
    /// 192-bit key, 12 rounds.
    Aes192 = 24,
    /// 256-bit key, 14 rounds.
    Aes256 = 32,
}

impl KeySize {
    /// All supported sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Key length in bytes.
    #[inline]
    pub const fn key_len(self) -> usize {
        self as usize
    }

    /// Number of cipher rounds.
    #[inline]
    pub const fn rounds(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }

    /// Length of the expanded schedule, `16 * (rounds + 1)`.
    #[inline]
    pub const fn schedule_len(self) -> usize {
        BLOCK_SIZE * (self.rounds() + 1)
    }

    /// Key length in 32-bit words (`Nk` in FIPS-197).
    #[inline]
    pub(crate) const fn key_words(self) -> usize {
        self.key_len() / 4
    }
}

impl TryFrom<usize> for KeySize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        match size {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            _ => {
                debug!("rejecting key-size tag {size}");
                Err(Error::UnsupportedKeySize { size })
            }
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_len() * 8)
    }
}

/// Expanded round keys, stored inline and wiped on drop.
///
/// Storage is always sized for AES-256; only the first
/// [`KeySize::schedule_len`] bytes are populated for smaller keys.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: [Block; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    /// Expands `key` for the given size.
    ///
    /// Fails with [`Error::KeyLength`] when `key.len()` does not match `size`.
    pub fn new(key: &[u8], size: KeySize) -> Result<Self> {
        let mut schedule = Self {
            round_keys: [[0u8; BLOCK_SIZE]; MAX_ROUNDS + 1],
            size,
        };
        let len = size.schedule_len();
        expand_key(&mut schedule.round_keys.as_flattened_mut()[..len], key, size)?;
        Ok(schedule)
    }

    /// Key size this schedule was expanded for.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        debug_assert!(round <= self.rounds());
        &self.round_keys[round]
    }

    /// The populated schedule bytes, in FIPS-197 word order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.round_keys.as_flattened()[..self.size.schedule_len()]
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
