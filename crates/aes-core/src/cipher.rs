//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};
use crate::state::State;

type Word = [u8; 4];

fn rot_word([b0, b1, b2, b3]: Word) -> Word {
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

fn next_round_key(prev: &State, rcon: u8) -> State {
    let mut temp = sub_word(rot_word(prev.column(3)));
    temp[0] ^= rcon;

    let mut cols = [[0u8; 4]; 4];
    cols[0] = xor_word(prev.column(0), temp);
    for col in 1..4 {
        cols[col] = xor_word(cols[col - 1], prev.column(col));
    }
    State::from_columns(cols)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    let mut current = State::from_block(&key.0);
    round_keys[0] = current.into_block();

    for (round, rcon) in RCON.iter().enumerate() {
        current = next_round_key(&current, *rcon);
        round_keys[round + 1] = current.into_block();
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(State::from_block(block), round_keys.get(0));

    for round in 1..ROUNDS {
        state = sub_bytes(state);
        state = shift_rows(state);
        state = mix_columns(state);
        state = add_round_key(state, round_keys.get(round));
    }

    state = sub_bytes(state);
    state = shift_rows(state);
    add_round_key(state, round_keys.get(ROUNDS)).into_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(State::from_block(block), round_keys.get(ROUNDS));

    for round in (1..ROUNDS).rev() {
        state = inv_shift_rows(state);
        state = inv_sub_bytes(state);
        state = add_round_key(state, round_keys.get(round));
        state = inv_mix_columns(state);
    }

    state = inv_shift_rows(state);
    state = inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0)).into_block()
}
