//! Error types for ECB encryption and decryption.

use thiserror::Error;

/// Failures surfaced by the ECB layer. None of them are worth retrying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The key was not exactly 16 bytes.
    #[error("invalid key length: expected 16 bytes, got {got}")]
    InvalidKeyLength {
        /// Length that was supplied.
        got: usize,
    },

    /// A single-block input was not exactly 16 bytes.
    #[error("invalid block length: expected 16 bytes, got {got}")]
    InvalidBlockLength {
        /// Length that was supplied.
        got: usize,
    },

    /// Ciphertext length was not a multiple of the block size.
    #[error("invalid ciphertext length {len}: must be a multiple of 16")]
    InvalidCiphertextLength {
        /// Length that was supplied.
        len: usize,
    },

    /// The decrypted padding was malformed.
    #[error("invalid PKCS#7 padding")]
    PaddingError,
}

impl From<aes_core::Error> for Error {
    fn from(err: aes_core::Error) -> Self {
        match err {
            aes_core::Error::InvalidKeyLength { got } => Error::InvalidKeyLength { got },
            aes_core::Error::InvalidBlockLength { got } => Error::InvalidBlockLength { got },
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
