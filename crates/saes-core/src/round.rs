//! Round transformations over the four-nibble state.

use crate::field::gf_mul;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{to_state, xor_in_place, State};

/// Applies nibble substitution to the state in place.
#[inline]
pub fn sub_nibbles(state: &mut State) {
    for nibble in state.iter_mut() {
        *nibble = sbox(*nibble);
    }
}

/// Applies the inverse nibble substitution.
#[inline]
pub fn inv_sub_nibbles(state: &mut State) {
    for nibble in state.iter_mut() {
        *nibble = inv_sbox(*nibble);
    }
}

/// Performs ShiftRow in place: the second matrix row rotates, which at this
/// width is a swap of indices 2 and 3. Self-inverse.
#[inline]
pub fn shift_row(state: &mut State) {
    state.swap(2, 3);
}

/// MixColumns: multiplication by the matrix `[1 4; 4 1]` over GF(2^4).
#[inline]
pub fn mix_columns(state: &mut State) {
    let [s0, s1, s2, s3] = *state;
    *state = [
        s0 ^ gf_mul(4, s2),
        s1 ^ gf_mul(4, s3),
        s2 ^ gf_mul(4, s0),
        s3 ^ gf_mul(4, s1),
    ];
}

/// Inverse MixColumns: multiplication by `[9 2; 2 9]` over GF(2^4).
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    let [s0, s1, s2, s3] = *state;
    *state = [
        gf_mul(9, s0) ^ gf_mul(2, s2),
        gf_mul(9, s1) ^ gf_mul(2, s3),
        gf_mul(9, s2) ^ gf_mul(2, s0),
        gf_mul(9, s3) ^ gf_mul(2, s1),
    ];
}

/// Adds (XORs) a 16-bit round key into the state, decoding the key through
/// the block/state codec first.
#[inline]
pub fn add_round_key(state: &mut State, round_key: u16) {
    xor_in_place(state, &to_state(round_key));
}
