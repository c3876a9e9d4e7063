//! AES round transformations.
//!
//! Each transform takes the state by value and hands back the transformed
//! state, so a block operation threads one exclusively-owned value through the
//! whole round sequence.

use crate::block::Block;
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes.
#[inline]
pub fn sub_bytes(state: State) -> State {
    state.map_bytes(sbox)
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: State) -> State {
    state.map_bytes(inv_sbox)
}

/// Performs ShiftRows: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: State) -> State {
    State::from_fn(|row, col| state.get(row, (col + row) % 4))
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: State) -> State {
    State::from_fn(|row, col| state.get(row, (col + 4 - row) % 4))
}

fn mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

fn inv_mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09),
        gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d),
        gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b),
        gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e),
    ]
}

/// MixColumns over all four columns, circulant coefficients {2, 3, 1, 1}.
#[inline]
pub fn mix_columns(state: State) -> State {
    state.map_columns(mix_single_column)
}

/// Inverse MixColumns over all four columns, circulant coefficients {14, 11, 13, 9}.
#[inline]
pub fn inv_mix_columns(state: State) -> State {
    state.map_columns(inv_mix_single_column)
}

/// Adds (XORs) a round key into the state. Its own inverse.
#[inline]
pub fn add_round_key(state: State, round_key: &Block) -> State {
    let key = State::from_block(round_key);
    State::from_fn(|row, col| state.get(row, col) ^ key.get(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_state(rng: &mut impl RngCore) -> State {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        State::from_block(&block)
    }

    #[test]
    fn sub_bytes_inverts_for_every_byte() {
        for hi in 0..16u8 {
            let block: Block = std::array::from_fn(|i| (hi << 4) | i as u8);
            let state = State::from_block(&block);
            assert_eq!(inv_sub_bytes(sub_bytes(state)), state);
        }
    }

    #[test]
    fn shift_rows_rotates_each_row_left() {
        let block: Block = std::array::from_fn(|i| i as u8);
        let shifted = shift_rows(State::from_block(&block));
        assert_eq!(shifted.row(0), [0, 4, 8, 12]);
        assert_eq!(shifted.row(1), [5, 9, 13, 1]);
        assert_eq!(shifted.row(2), [10, 14, 2, 6]);
        assert_eq!(shifted.row(3), [15, 3, 7, 11]);
        assert_eq!(
            shifted.into_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn inv_shift_rows_restores_state() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let state = random_state(&mut rng);
            assert_eq!(inv_shift_rows(shift_rows(state)), state);
            assert_eq!(shift_rows(inv_shift_rows(state)), state);
        }
    }

    #[test]
    fn mix_columns_matches_known_columns() {
        assert_eq!(mix_single_column([0xdb, 0x13, 0x53, 0x45]), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(mix_single_column([0xf2, 0x0a, 0x22, 0x5c]), [0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(mix_single_column([0x01, 0x01, 0x01, 0x01]), [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(mix_single_column([0xc6, 0xc6, 0xc6, 0xc6]), [0xc6, 0xc6, 0xc6, 0xc6]);
        assert_eq!(mix_single_column([0x2d, 0x26, 0x31, 0x4c]), [0x4d, 0x7e, 0xbd, 0xf8]);
    }

    #[test]
    fn inv_mix_columns_inverts_sampled_columns() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..4096 {
            let mut col = [0u8; 4];
            rng.fill_bytes(&mut col);
            assert_eq!(inv_mix_single_column(mix_single_column(col)), col);
            assert_eq!(mix_single_column(inv_mix_single_column(col)), col);
        }
        let state = random_state(&mut rng);
        assert_eq!(inv_mix_columns(mix_columns(state)), state);
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let state = random_state(&mut rng);
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let keyed = add_round_key(state, &key);
        assert_ne!(keyed, state);
        assert_eq!(add_round_key(keyed, &key), state);
        assert_eq!(add_round_key(state, &[0u8; 16]), state);
    }
}
