//! Length errors raised when converting caller bytes into keys and blocks.

use thiserror::Error;

/// Errors produced by the block cipher's input conversions.
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
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
