//! State representation and the block/state codec.

/// Cipher state: four nibbles forming a 2x2 matrix in column-major order
/// (index 0 = row 0 col 0, index 1 = row 1 col 0, index 2 = row 0 col 1,
/// index 3 = row 1 col 1).
pub type State = [u8; 4];

/// Unpacks a 16-bit block into the four-nibble state.
///
/// The packed layout is `[n0][n2][n1][n3]` from the high bits down: nibbles
/// 1 and 2 trade places relative to natural ordering. Every downstream
/// transform and test vector depends on this exact layout.
#[inline]
pub fn to_state(block: u16) -> State {
    [
        (block >> 12) as u8,
        (block >> 4) as u8 & 0xf,
        (block >> 8) as u8 & 0xf,
        block as u8 & 0xf,
    ]
}

/// Packs the four-nibble state back into a 16-bit block.
///
/// Exact inverse of [`to_state`] for every 16-bit value.
#[inline]
pub fn to_block(state: State) -> u16 {
    (u16::from(state[0]) << 12)
        | (u16::from(state[2]) << 8)
        | (u16::from(state[1]) << 4)
        | u16::from(state[3])
}

/// XORs two states, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut State, rhs: &State) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
