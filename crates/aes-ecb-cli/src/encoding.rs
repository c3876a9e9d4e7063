//! Conversions between textual encodings and byte sequences.

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;

/// How inline `--data` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// UTF-8 text taken verbatim.
    Text,
    /// Hex digits, optionally separated by whitespace.
    Hex,
    /// `0`/`1` digits, eight per byte, optionally separated by whitespace.
    Binary,
}

/// How byte results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Lowercase hex.
    Hex,
    /// Space-separated groups of eight bits.
    Binary,
}

/// Decodes `input` according to `format`.
pub fn decode(input: &str, format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Text => Ok(input.as_bytes().to_vec()),
        InputFormat::Hex => {
            let compact = strip_whitespace(input);
            hex::decode(&compact).context("decode hex input")
        }
        InputFormat::Binary => parse_binary(&strip_whitespace(input)),
    }
}

/// Renders `bytes` according to `format`.
pub fn encode(bytes: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => hex::encode(bytes),
        OutputFormat::Binary => format_binary(bytes),
    }
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_binary(bits: &str) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        bail!("binary input must be a multiple of 8 bits, got {}", bits.len());
    }
    bits.as_bytes()
        .chunks(8)
        .map(|group| {
            group.iter().try_fold(0u8, |acc, &bit| match bit {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                other => Err(anyhow!("invalid binary digit {:?}", other as char)),
            })
        })
        .collect()
}

fn format_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}
