//! Reference implementation of the reduced-width AES teaching cipher.
//!
//! The cipher maps 16-bit blocks to 16-bit blocks under a 16-bit key. Its
//! internal state is a 2x2 matrix of nibbles transformed by AES-shaped
//! steps: nibble substitution, row shift, column mixing over GF(2^4), and
//! round-key addition. This crate provides:
//! - GF(2^4) arithmetic and the fixed S-box pair.
//! - The block/state codec with its exact (asymmetric) bit layout.
//! - Key schedule producing the five round keys.
//! - Single-block encryption for all round-count/variant combinations and
//!   decryption for the 2-round standard construction.
//!
//! The implementation aims for clarity and bit-exact reproducibility of the
//! lab cipher; a 16-bit block has no security margin and none is claimed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod field;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::cipher::{
    decrypt_block, encrypt_block, expand_key, CipherConfig, UnsupportedConfig, Variant,
};
pub use crate::field::gf_mul;
pub use crate::key::{MasterKey, RoundKeys};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_sub_nibbles, mix_columns, shift_row, sub_nibbles,
};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::{to_block, to_state, xor_in_place, State};
