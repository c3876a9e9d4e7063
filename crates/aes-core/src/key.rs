//! Key types for AES-128.

use crate::block::Block;
use crate::error::{Error, Result};

/// Key size in bytes.
pub const KEY_LEN: usize = 16;

/// Number of rounds; the schedule holds `ROUNDS + 1` round keys.
pub const ROUNDS: usize = 10;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_LEN]);

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        value
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength { got: value.len() })
    }
}

/// Expanded round keys for AES-128.
///
/// Immutable once built; a single schedule can be shared by reference across
/// any number of threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}
