//! PKCS#7 padding for 16-byte blocks.
//!
//! Input that is already block aligned still gets a full block of sixteen
//! `0x10` bytes. Omitting it would let the last plaintext byte be misread as a
//! pad length on decryption.

use aes_core::BLOCK_LEN;

use crate::error::{Error, Result};

/// Returns `data` followed by 1..=16 bytes each equal to the pad length.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Validates and strips PKCS#7 padding, returning the unpadded prefix.
///
/// The final byte must lie in `1..=16`, must not exceed the buffer length, and
/// every one of the trailing pad bytes must carry the same value.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let pad_len = *data.last().ok_or(Error::PaddingError)? as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(Error::PaddingError);
    }
    let (body, tail) = data.split_at(data.len() - pad_len);
    if tail.iter().any(|&b| b as usize != pad_len) {
        return Err(Error::PaddingError);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"YELLOW SUBMARINE!");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[17..], &[15u8; 15][..]);
    }

    #[test]
    fn aligned_input_gets_full_pad_block() {
        for len in [0usize, 16, 32, 48] {
            let data = vec![0xabu8; len];
            let padded = pad(&data);
            assert_eq!(padded.len(), len + 16);
            assert_eq!(&padded[len..], &[16u8; 16][..]);
        }
    }

    #[test]
    fn pad_then_unpad_restores_every_length() {
        for len in 0..=64usize {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_LEN, 0);
            assert_eq!(unpad(&padded).unwrap(), &data[..]);
        }
    }

    #[test]
    fn rejects_zero_and_oversized_pad_length() {
        let mut block = [16u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(Error::PaddingError));
        block[15] = 17;
        assert_eq!(unpad(&block), Err(Error::PaddingError));
        assert_eq!(unpad(&[3u8, 3]), Err(Error::PaddingError));
        assert_eq!(unpad(&[]), Err(Error::PaddingError));
    }

    #[test]
    fn rejects_inconsistent_pad_bytes() {
        let mut padded = pad(b"hello");
        padded[12] ^= 1;
        assert_eq!(unpad(&padded), Err(Error::PaddingError));
    }
}
