//! ECB session over a single expanded key.

use aes_core::{
    block_from_slice, decrypt_block, encrypt_block, expand_key, Aes128Key, Block, RoundKeys,
    BLOCK_LEN,
};

use crate::error::{Error, Result};
use crate::padding::{pad, unpad};

/// AES-128-ECB cipher holding the key schedule for one master key.
///
/// The schedule is expanded once in [`EcbCipher::new`] and only read afterwards,
/// so a cipher can be shared across threads and blocks processed in any order.
#[derive(Clone, Debug)]
pub struct EcbCipher {
    round_keys: RoundKeys,
}

impl EcbCipher {
    /// Expands `key` into a new cipher session.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a session from raw key bytes, which must be exactly 16 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::new(&key))
    }

    /// Returns the expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts exactly one 16-byte block.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        let block = block_from_slice(block)?;
        Ok(encrypt_block(&block, &self.round_keys))
    }

    /// Decrypts exactly one 16-byte block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        let block = block_from_slice(block)?;
        Ok(decrypt_block(&block, &self.round_keys))
    }

    /// Encrypts block-aligned data without padding.
    pub fn encrypt_blocks(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.apply_blocks(data, encrypt_block)
    }

    /// Decrypts block-aligned data without removing padding.
    pub fn decrypt_blocks(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.apply_blocks(data, decrypt_block)
    }

    /// Pads `plaintext` and encrypts it block by block.
    ///
    /// The output is always a non-empty multiple of 16 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = pad(plaintext);
        for chunk in out.chunks_exact_mut(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&encrypt_block(&block, &self.round_keys));
        }
        out
    }

    /// Decrypts `ciphertext` and strips its padding.
    ///
    /// Nothing is returned unless both the length and the padding check out.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = self.decrypt_blocks(ciphertext)?;
        let len = unpad(&out)?.len();
        out.truncate(len);
        Ok(out)
    }

    fn apply_blocks(&self, data: &[u8], op: fn(&Block, &RoundKeys) -> Block) -> Result<Vec<u8>> {
        if data.len() % BLOCK_LEN != 0 {
            return Err(Error::InvalidCiphertextLength { len: data.len() });
        }
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_LEN) {
            let block = block_from_slice(chunk)?;
            out.extend_from_slice(&op(&block, &self.round_keys));
        }
        Ok(out)
    }
}

/// Pads and encrypts `plaintext` under a 16-byte `key`.
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ok(EcbCipher::from_slice(key)?.encrypt(plaintext))
}

/// Decrypts `ciphertext` under a 16-byte `key` and removes the padding.
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    EcbCipher::from_slice(key)?.decrypt(ciphertext)
}
