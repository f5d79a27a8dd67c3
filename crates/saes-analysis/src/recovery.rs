//! Known-plaintext key recovery against the weakened one-round cipher.
//!
//! The target construction is `ct = AddKey(K, ShiftRow(Sub(pt)))`: no key
//! whitening, no column mixing, a single affine step with a raw four-nibble
//! key. Substitution and row shift are public and invertible, so one known
//! plaintext/ciphertext pair pins the key exactly:
//! `K = ct ^ ShiftRow(Sub(pt))`. This is a complete break of the one-round
//! variant only; nothing here can detect a ciphertext produced by some
//! other construction, and the recovered key is then meaningless noise.

use saes_core::{
    inv_sub_nibbles, shift_row, sub_nibbles, to_block, to_state, xor_in_place, State,
};

/// Encrypts one block under the one-round construction.
pub fn encrypt_one_round(plaintext: u16, key: &State) -> u16 {
    let mut state = to_state(plaintext);
    sub_nibbles(&mut state);
    shift_row(&mut state);
    xor_in_place(&mut state, key);
    to_block(state)
}

/// Decrypts one block under the one-round construction.
pub fn decrypt_one_round(ciphertext: u16, key: &State) -> u16 {
    let mut state = to_state(ciphertext);
    xor_in_place(&mut state, key);
    shift_row(&mut state);
    inv_sub_nibbles(&mut state);
    to_block(state)
}

/// Recovers the one-round key from a single known pair.
///
/// Deterministic and unconditionally exact whenever the ciphertext really
/// came from [`encrypt_one_round`].
pub fn recover_key(plaintext: u16, ciphertext: u16) -> State {
    let mut state = to_state(plaintext);
    sub_nibbles(&mut state);
    shift_row(&mut state);
    let mut key = to_state(ciphertext);
    xor_in_place(&mut key, &state);
    key
}

/// Splits a ciphertext byte stream into 16-bit blocks.
///
/// The lab's source reads the stream as little-endian 16-bit windows and
/// swaps the bytes of each window before decoding, landing each pair back
/// in stream order with the first byte in the high half. The transform is
/// preserved exactly; changing it garbles every recovered message. A
/// trailing odd byte is dropped.
pub fn extract_blocks(stream: &[u8]) -> Vec<u16> {
    stream
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]).swap_bytes())
        .collect()
}

/// Decrypts a block sequence with a recovered key and reassembles the
/// plaintext two bytes per block, high byte first.
pub fn recover_message(blocks: &[u16], key: &State) -> Vec<u8> {
    let mut message = Vec::with_capacity(blocks.len() * 2);
    for &block in blocks {
        let plain = decrypt_one_round(block, key);
        message.push((plain >> 8) as u8);
        message.push(plain as u8);
    }
    message
}
