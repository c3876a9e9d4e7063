//! Command-line interface for AES-128-ECB.

#![forbid(unsafe_code)]

mod encoding;

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::Aes128Key;
use aes_ecb::EcbCipher;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::encoding::{decode, encode, InputFormat, OutputFormat};

/// AES-128-ECB CLI.
#[derive(Parser)]
#[command(
    name = "aes-ecb",
    version,
    author,
    about = "AES-128 in ECB mode with PKCS#7 padding"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad and encrypt data.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// How inline `--data` is interpreted.
        #[arg(long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decrypt data and strip its padding.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// How inline `--data` is interpreted.
        #[arg(long, value_enum, default_value_t = InputFormat::Hex)]
        format: InputFormat,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encrypt and decrypt random data under a random key, printing every stage.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Plaintext length in bytes.
        #[arg(long, default_value_t = 24)]
        len: usize,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// AES-128 key as exactly 16 bytes of text.
    #[arg(long, value_name = "TEXT")]
    key_text: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Inline input, decoded per `--format`.
    #[arg(long)]
    data: Option<String>,
    /// Input file read as raw bytes.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct OutputArgs {
    /// Write raw result bytes to this file instead of printing them.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Encoding used when printing to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    show: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key,
            input,
            format,
            output,
        } => cmd_enc(&key, &input, format, &output),
        Commands::Dec {
            key,
            input,
            format,
            output,
        } => cmd_dec(&key, &input, format, &output),
        Commands::Demo { seed, len } => cmd_demo(seed, len),
    }
}

fn cmd_enc(
    key: &KeyArgs,
    input: &InputArgs,
    format: InputFormat,
    out: &OutputArgs,
) -> Result<()> {
    let cipher = EcbCipher::new(&key.resolve()?);
    let plaintext = input.read(format)?;
    let ciphertext = cipher.encrypt(&plaintext);
    match &out.output {
        Some(path) => write_file(path, &ciphertext),
        None => {
            println!("ciphertext: {}", encode(&ciphertext, out.show));
            Ok(())
        }
    }
}

fn cmd_dec(
    key: &KeyArgs,
    input: &InputArgs,
    format: InputFormat,
    out: &OutputArgs,
) -> Result<()> {
    let cipher = EcbCipher::new(&key.resolve()?);
    let ciphertext = input.read(format)?;
    let plaintext = cipher.decrypt(&ciphertext).context("decrypt ciphertext")?;
    match &out.output {
        Some(path) => write_file(path, &plaintext),
        None => {
            println!("plaintext: {}", encode(&plaintext, out.show));
            if let Ok(text) = std::str::from_utf8(&plaintext) {
                println!("text: {text}");
            }
            Ok(())
        }
    }
}

fn cmd_demo(seed: Option<u64>, len: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key_bytes: [u8; 16] = rng.gen();
    let mut plaintext = vec![0u8; len];
    rng.fill_bytes(&mut plaintext);

    let cipher = EcbCipher::new(&Aes128Key::from(key_bytes));
    let ciphertext = cipher.encrypt(&plaintext);
    let decrypted = cipher.decrypt(&ciphertext).context("decrypt demo ciphertext")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext (hex): {}", encode(&plaintext, OutputFormat::Hex));
    println!("plaintext (binary): {}", encode(&plaintext, OutputFormat::Binary));
    println!("ciphertext (hex): {}", encode(&ciphertext, OutputFormat::Hex));
    println!("ciphertext (binary): {}", encode(&ciphertext, OutputFormat::Binary));
    println!("decrypted (hex): {}", encode(&decrypted, OutputFormat::Hex));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

impl KeyArgs {
    fn resolve(&self) -> Result<Aes128Key> {
        match (&self.key_hex, &self.key_text) {
            (Some(hex_str), _) => parse_key_hex(hex_str),
            (None, Some(text)) => parse_key_text(text),
            (None, None) => bail!("a key is required (--key-hex or --key-text)"),
        }
    }
}

impl InputArgs {
    fn read(&self, format: InputFormat) -> Result<Vec<u8>> {
        match (&self.data, &self.input) {
            (Some(data), _) => decode(data, format),
            (None, Some(path)) => {
                fs::read(path).with_context(|| format!("read {}", path.display()))
            }
            (None, None) => bail!("input is required (--data or --input)"),
        }
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_key_text(text: &str) -> Result<Aes128Key> {
    Aes128Key::try_from(text.as_bytes()).context("AES-128 text key must be exactly 16 bytes")
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
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
