//! The 4×4 cipher state.

use crate::block::Block;

/// 4×4 byte matrix stored as four columns.
///
/// Byte `i` of a block maps to row `i % 4`, column `i / 4`. The same mapping is
/// used for plaintext, ciphertext and round keys, so key loading and block
/// loading can never disagree on orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    cols: [[u8; 4]; 4],
}

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut cols = [[0u8; 4]; 4];
        for (col, chunk) in cols.iter_mut().zip(block.chunks_exact(4)) {
            col.copy_from_slice(chunk);
        }
        Self { cols }
    }

    /// Builds a state from its columns.
    pub fn from_columns(cols: [[u8; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Flattens the state back into a block.
    pub fn into_block(self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, col) in block.chunks_exact_mut(4).zip(self.cols.iter()) {
            chunk.copy_from_slice(col);
        }
        block
    }

    /// Returns column `col` (0..4).
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        self.cols[col]
    }

    /// Returns all four columns.
    #[inline]
    pub fn columns(&self) -> &[[u8; 4]; 4] {
        &self.cols
    }

    /// Returns row `row` (0..4), read left to right across the columns.
    pub fn row(&self, row: usize) -> [u8; 4] {
        [
            self.cols[0][row],
            self.cols[1][row],
            self.cols[2][row],
            self.cols[3][row],
        ]
    }

    /// Returns the byte at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cols[col][row]
    }

    /// Applies `f` to every byte.
    pub fn map_bytes(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            cols: self.cols.map(|col| col.map(&f)),
        }
    }

    /// Applies `f` to every column.
    pub fn map_columns(self, f: impl Fn([u8; 4]) -> [u8; 4]) -> Self {
        Self {
            cols: self.cols.map(f),
        }
    }

    /// Builds a state where byte (`row`, `col`) is `f(row, col)`.
    pub fn from_fn(f: impl Fn(usize, usize) -> u8) -> Self {
        Self {
            cols: std::array::from_fn(|col| std::array::from_fn(|row| f(row, col))),
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.into_block()
    }
}
