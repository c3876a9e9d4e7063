//! AES-128 block cipher following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) multiplication under the AES reduction polynomial.
//! - The forward and inverse S-boxes and the key schedule round constants.
//! - Round transforms over an owned 4×4 [`State`].
//! - Key expansion and single-block encryption/decryption.
//!
//! Every 16-byte block, key and round key maps onto the state column-major:
//! byte `i` lands in row `i % 4`, column `i / 4`.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
pub mod round;
mod sbox;
mod state;

pub use crate::block::{block_from_slice, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{Error, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{Aes128Key, RoundKeys, KEY_LEN, ROUNDS};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
pub use crate::state::State;
