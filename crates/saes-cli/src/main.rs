//! Command-line interface for the reduced-width AES lab cipher.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use saes_analysis::{
    extract_blocks, recover_key, recover_message, run as run_diffusion, DiffusionReport,
    VariantMean, DEFAULT_TRIALS,
};
use saes_core::{
    decrypt_block, encrypt_block, expand_key, to_state, CipherConfig, MasterKey, Variant,
};

/// Reduced-width AES CLI.
#[derive(Parser)]
#[command(
    name = "saes",
    version,
    author,
    about = "Reduced-width AES: encrypt, measure diffusion, break the one-round variant"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Lazy,
    VeryLazy,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Standard => Variant::Standard,
            VariantArg::Lazy => Variant::Lazy,
            VariantArg::VeryLazy => Variant::VeryLazy,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-bit block.
    Encrypt {
        /// Master key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Number of rounds (1-4).
        #[arg(long, default_value_t = 2)]
        rounds: u8,
        /// Round-structure variant.
        #[arg(long, value_enum, default_value_t = VariantArg::Standard)]
        variant: VariantArg,
    },
    /// Decrypt a single block (2-round standard construction).
    Decrypt {
        /// Master key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Measure the avalanche effect of every variant.
    Diffusion {
        /// Trials per batch.
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
        /// Optional RNG seed for reproducible batches.
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the report as JSON instead of aligned text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Recover a one-round key from a known pair and decrypt a cryptogram.
    Recover {
        /// Hex-encoded ciphertext stream.
        #[arg(long, value_name = "FILE")]
        cryptogram: PathBuf,
        /// Known plaintext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        known_plain: String,
        /// Matching ciphertext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        known_cipher: String,
    },
    /// Run a local demo: round trip a random block, then break one round.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            block_hex,
            rounds,
            variant,
        } => cmd_encrypt(&key_hex, &block_hex, rounds, variant.into()),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Diffusion { trials, seed, json } => cmd_diffusion(trials, seed, json),
        Commands::Recover {
            cryptogram,
            known_plain,
            known_cipher,
        } => cmd_recover(&cryptogram, &known_plain, &known_cipher),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str, rounds: u8, variant: Variant) -> Result<()> {
    if !(1..=4).contains(&rounds) {
        bail!("round count must be between 1 and 4");
    }
    let key = parse_block_hex(key_hex).context("parse key")?;
    let plaintext = parse_block_hex(block_hex).context("parse plaintext")?;
    let round_keys = expand_key(MasterKey(key));
    let ciphertext = encrypt_block(plaintext, &round_keys, CipherConfig { rounds, variant });
    println!("{:04x}", ciphertext);
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_block_hex(key_hex).context("parse key")?;
    let ciphertext = parse_block_hex(block_hex).context("parse ciphertext")?;
    let round_keys = expand_key(MasterKey(key));
    let plaintext = decrypt_block(ciphertext, &round_keys, CipherConfig::standard(2))
        .context("decrypt block")?;
    println!("{:04x}", plaintext);
    Ok(())
}

fn cmd_diffusion(trials: usize, seed: Option<u64>, json: bool) -> Result<()> {
    if trials == 0 {
        bail!("trial count must be positive");
    }
    let mut rng = seeded_rng(seed);
    let report = run_diffusion(&mut rng, trials);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &DiffusionReport) {
    println!(
        "mean Hamming distance over {} trials (ideal: 8 of 16 bits)",
        report.trials
    );
    println!("fixed key, perturbed plaintext:");
    print_means(&report.plaintext_avalanche);
    println!("fixed plaintext, perturbed key:");
    print_means(&report.key_avalanche);
}

fn print_means(means: &[VariantMean]) {
    for entry in means {
        println!("  {:<12} {:.3}", entry.label, entry.mean);
    }
}

fn cmd_recover(cryptogram: &PathBuf, known_plain: &str, known_cipher: &str) -> Result<()> {
    let text = fs::read_to_string(cryptogram)
        .with_context(|| format!("read {}", cryptogram.display()))?;
    let stream = hex::decode(text.trim()).context("decode cryptogram hex")?;
    if stream.is_empty() {
        bail!("cryptogram is empty");
    }

    let plain = parse_block_hex(known_plain).context("parse known plaintext")?;
    let cipher = parse_block_hex(known_cipher).context("parse known ciphertext")?;
    let key = recover_key(plain, cipher);

    let blocks = extract_blocks(&stream);
    let message = recover_message(&blocks, &key);
    println!(
        "recovered key: {:x}{:x}{:x}{:x}",
        key[0], key[1], key[2], key[3]
    );
    println!("{}", String::from_utf8_lossy(&message));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);

    let key = MasterKey(rng.gen());
    let round_keys = expand_key(key);
    let plaintext: u16 = rng.gen();
    let config = CipherConfig::standard(2);
    let ciphertext = encrypt_block(plaintext, &round_keys, config);
    let decrypted = decrypt_block(ciphertext, &round_keys, config).context("decrypt block")?;
    println!("demo key: {:04x}", key.0);
    println!("plaintext: {:04x}", plaintext);
    println!("ciphertext: {:04x}", ciphertext);
    println!("decrypted: {:04x}", decrypted);
    if decrypted != plaintext {
        bail!("demo round trip failed");
    }

    // One-round break: a single known pair pins the key exactly.
    let one_round_key = to_state(rng.gen());
    let pair_plain: u16 = rng.gen();
    let pair_cipher = saes_analysis::encrypt_one_round(pair_plain, &one_round_key);
    let recovered = recover_key(pair_plain, pair_cipher);
    println!(
        "one-round key recovered from a single pair: {:x}{:x}{:x}{:x}",
        recovered[0], recovered[1], recovered[2], recovered[3]
    );
    if recovered != one_round_key {
        bail!("one-round recovery failed");
    }
    Ok(())
}

fn parse_block_hex(hex_str: &str) -> Result<u16> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 2 {
        bail!("blocks and keys are 16 bits (4 hex characters)");
    }
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
