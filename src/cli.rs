//! Command-line surface: argument grammar, hex formatting, and dispatch to
//! the CORE algorithms.

use clap::{Parser, Subcommand};
use rug::Integer;

use crate::error::{Result, RsaError};

#[derive(Parser, Debug)]
#[command(
    name = "rsa-toy",
    about = "A small RSA toolkit: generate keys, encrypt, decrypt, and break",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an RSA key pair with a public modulus of the given bit length.
    #[command(visible_alias = "g")]
    Generate {
        /// Required size of the public modulus, in bits. Must be > 6.
        #[arg(short = 'b', long)]
        bits: u32,
    },
    /// Encrypt a plaintext integer under a public key.
    #[command(visible_alias = "e")]
    Encrypt {
        /// Public exponent, hex (0x-prefixed).
        e: String,
        /// Public modulus, hex (0x-prefixed).
        n: String,
        /// Plaintext integer, hex (0x-prefixed).
        m: String,
    },
    /// Decrypt a ciphertext integer under a private key.
    #[command(visible_alias = "d")]
    Decrypt {
        /// Private exponent, hex (0x-prefixed).
        d: String,
        /// Public modulus, hex (0x-prefixed).
        n: String,
        /// Ciphertext integer, hex (0x-prefixed).
        c: String,
    },
    /// Break an RSA instance by factoring the modulus and recovering the plaintext.
    #[command(visible_alias = "b")]
    Break {
        /// Public exponent, hex (0x-prefixed).
        e: String,
        /// Public modulus, hex (0x-prefixed).
        n: String,
        /// Ciphertext integer, hex (0x-prefixed).
        c: String,
    },
}

/// Parses a hex-formatted integer matching `0[xX][0-9a-fA-F]+`.
pub fn parse_hex(input: &str) -> Result<Integer> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| RsaError::MalformedHex(input.to_string()))?;

    Integer::parse_radix(digits, 16)
        .map(Integer::from)
        .map_err(|_| RsaError::MalformedHex(input.to_string()))
}

/// Parses a hex-formatted modulus, additionally rejecting `N = 0`.
pub fn parse_modulus(input: &str) -> Result<Integer> {
    let n = parse_hex(input)?;
    if n == 0 {
        return Err(RsaError::ZeroModulus);
    }
    Ok(n)
}

/// Formats an integer as a lowercase, `0x`-prefixed hex string.
pub fn format_hex(value: &Integer) -> String {
    format!("0x{}", value.to_string_radix(16))
}
