//! AES-128 in Electronic Codebook mode over PKCS#7-padded data.
//!
//! Every 16-byte block is encrypted independently under one key schedule: no
//! chaining, no IV. Identical plaintext blocks therefore produce identical
//! ciphertext blocks under the same key.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod mode;
mod padding;

pub use crate::error::{Error, Result};
pub use crate::mode::{decrypt_ecb, encrypt_ecb, EcbCipher};
pub use crate::padding::{pad, unpad};
pub use aes_core::{Aes128Key, Block, BLOCK_LEN};
