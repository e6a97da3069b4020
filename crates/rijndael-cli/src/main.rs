//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

mod kat;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{decrypt, encrypt, Block, KeySchedule, KeySize, BLOCK_SIZE};

/// Key used by `demo` when no seed is given.
const DEMO_KEY: &[u8; 16] = b"kkkkeeeeyyyy....";
/// Plaintext used by `demo` when no seed is given.
const DEMO_PLAINTEXT: &Block = b"abcdef1234567890";

/// Single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Single-block AES-128/192/256 (FIPS-197)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Encrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Decrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded key schedule, one round key per line.
    Expand {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a block, decrypt it back and print every step.
    Demo {
        /// Use a random AES-256 key and block from this seed instead of the fixed demo values.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check the implementation against the built-in FIPS-197 vectors.
    Kat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Demo { seed } => cmd_demo(seed),
        Commands::Kat => cmd_kat(),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let input = parse_block_hex(block_hex)?;
    let mut output = [0u8; BLOCK_SIZE];
    encrypt(&input, &mut output, &key, key.len()).context("encrypt block")?;
    println!("{}", hex::encode(output));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let input = parse_block_hex(block_hex)?;
    let mut output = [0u8; BLOCK_SIZE];
    decrypt(&input, &mut output, &key, key.len()).context("decrypt block")?;
    println!("{}", hex::encode(output));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let size = KeySize::try_from(key.len()).context("select key size")?;
    let schedule = KeySchedule::new(&key, size).context("expand key")?;
    info!("{size}: {} rounds, {} schedule bytes", size.rounds(), size.schedule_len());
    print!("{}", hex_dump(schedule.as_bytes()));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let (key, plaintext) = match seed {
        Some(value) => {
            let mut rng = seeded_rng(value);
            let mut key = vec![0u8; KeySize::Aes256.key_len()];
            let mut block = [0u8; BLOCK_SIZE];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            (key, block)
        }
        None => (DEMO_KEY.to_vec(), *DEMO_PLAINTEXT),
    };
    debug!("demo with {}-byte key", key.len());

    let mut ciphertext = [0u8; BLOCK_SIZE];
    encrypt(&plaintext, &mut ciphertext, &key, key.len()).context("encrypt block")?;
    let mut decrypted = [0u8; BLOCK_SIZE];
    decrypt(&ciphertext, &mut decrypted, &key, key.len()).context("decrypt block")?;

    println!("key:        {}", hex::encode(&key));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    println!("roundtrip ok");
    Ok(())
}

fn cmd_kat() -> Result<()> {
    let mut failures = 0usize;
    for vector in kat::VECTORS {
        match kat::check(vector) {
            Ok(()) => println!("ok    {}", vector.name),
            Err(err) => {
                failures += 1;
                println!("FAIL  {}: {err:#}", vector.name);
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} known-answer vectors failed", kat::VECTORS.len());
    }
    info!("all {} known-answer vectors passed", kat::VECTORS.len());
    Ok(())
}

/// Decodes a key; the size check is left to the core so that an unsupported
/// length surfaces as its error.
fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).context("decode key hex")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

/// Formats bytes as space-separated hex, 16 per line.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for line in bytes.chunks(16) {
        let words: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&words.join(" "));
        out.push('\n');
    }
    out
}

fn seeded_rng(seed: u64) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_block_requires_sixteen_bytes() {
        assert_eq!(
            parse_block_hex(" 00112233445566778899aabbccddeeff\n").expect("block"),
            [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
                0xee, 0xff
            ]
        );
        assert!(parse_block_hex("0011").is_err());
        assert!(parse_block_hex("zz112233445566778899aabbccddeeff").is_err());
    }

    #[test]
    fn unsupported_key_length_is_reported_by_core() {
        let key = parse_key_hex("0011223344").expect("valid hex");
        let err = KeySize::try_from(key.len()).unwrap_err();
        assert_eq!(err, rijndael_core::Error::UnsupportedKeySize { size: 5 });
        assert!(cmd_encrypt("0011223344", "00112233445566778899aabbccddeeff").is_err());
    }

    #[test]
    fn hex_dump_wraps_at_sixteen_bytes() {
        let bytes: Vec<u8> = (0..20).collect();
        let dump = hex_dump(&bytes);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f");
        assert_eq!(lines[1], "10 11 12 13");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn demo_runs_with_and_without_seed() {
        cmd_demo(None).expect("fixed demo");
        cmd_demo(Some(7)).expect("seeded demo");
    }

    #[test]
    fn kat_passes() {
        cmd_kat().expect("known answers");
    }
}
