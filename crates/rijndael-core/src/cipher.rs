//! AES key schedule and single-block encryption/decryption.

use log::debug;
use zeroize::Zeroize;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::key::{KeySchedule, KeySize, MAX_SCHEDULE_LEN};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands `key` into `schedule` following FIPS-197 section 5.2.
///
/// `schedule` must be exactly [`KeySize::schedule_len`] bytes and `key`
/// exactly [`KeySize::key_len`] bytes; nothing is written otherwise. Most
/// callers want [`KeySchedule::new`], which owns and wipes the buffer.
pub fn expand_key(schedule: &mut [u8], key: &[u8], key_size: KeySize) -> Result<()> {
    if key.len() != key_size.key_len() {
        debug!("{key_size}: key is {} bytes", key.len());
        return Err(Error::KeyLength {
            expected: key_size.key_len(),
            actual: key.len(),
        });
    }
    if schedule.len() != key_size.schedule_len() {
        debug!("{key_size}: schedule buffer is {} bytes", schedule.len());
        return Err(Error::ScheduleLength {
            expected: key_size.schedule_len(),
            actual: schedule.len(),
        });
    }

    let nk = key_size.key_words();
    let total_words = key_size.schedule_len() / 4;
    let mut w = [0u32; MAX_SCHEDULE_LEN / 4];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    for (chunk, word) in schedule.chunks_exact_mut(4).zip(w.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    w.zeroize();
    Ok(())
}

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(rounds));

    state
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.round_key(0));

    state
}

fn schedule_for(key: &[u8], key_size: usize) -> Result<KeySchedule> {
    let size = KeySize::try_from(key_size)?;
    KeySchedule::new(key, size)
}

/// Encrypts one block under `key`.
///
/// `key_size` is the key length tag in bytes (16, 24 or 32) and must match
/// `key.len()`. The schedule is expanded on the stack and wiped before
/// returning. On error `ciphertext` is left untouched.
pub fn encrypt(
    plaintext: &Block,
    ciphertext: &mut Block,
    key: &[u8],
    key_size: usize,
) -> Result<()> {
    let schedule = schedule_for(key, key_size)?;
    *ciphertext = encrypt_block(plaintext, &schedule);
    Ok(())
}

/// Decrypts one block under `key`. See [`encrypt`] for the argument contract.
pub fn decrypt(
    ciphertext: &Block,
    plaintext: &mut Block,
    key: &[u8],
    key_size: usize,
) -> Result<()> {
    let schedule = schedule_for(key, key_size)?;
    *plaintext = decrypt_block(ciphertext, &schedule);
    Ok(())
}
