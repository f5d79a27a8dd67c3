//! Key schedule and block encryption/decryption.

use core::fmt;

use crate::key::{MasterKey, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_sub_nibbles, mix_columns, shift_row, sub_nibbles,
};
use crate::sbox::sbox;
use crate::state::{to_block, to_state};

/// Round constants for the four key-expansion rounds.
const RCON: [u8; 4] = [0x80, 0x30, 0x60, 0xc0];

/// Substitutes both nibbles of a schedule word through the S-box and swaps
/// their positions.
fn sub2_nib(word: u8) -> u8 {
    sbox(word >> 4) | (sbox(word & 0xf) << 4)
}

/// Expands a 16-bit master key into the five round keys.
///
/// The key splits into bytes `w0`, `w1`; each expansion round k produces
/// `w[2k] = w[2k-2] ^ RCON[k-1] ^ sub2_nib(w[2k-1])` and
/// `w[2k+1] = w[2k] ^ w[2k-1]`. Round key `K_i` packs `w[2i]` over
/// `w[2i+1]`. Pure function of the key; the output is an owned value, never
/// shared schedule storage.
pub fn expand_key(key: MasterKey) -> RoundKeys {
    let mut w = [0u8; 10];
    w[0] = (key.0 >> 8) as u8;
    w[1] = key.0 as u8;
    for k in 1..=4 {
        w[2 * k] = w[2 * k - 2] ^ RCON[k - 1] ^ sub2_nib(w[2 * k - 1]);
        w[2 * k + 1] = w[2 * k] ^ w[2 * k - 1];
    }
    RoundKeys(core::array::from_fn(|i| {
        (u16::from(w[2 * i]) << 8) | u16::from(w[2 * i + 1])
    }))
}

/// Round structure applied by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Full rounds (substitute, shift, mix, add key) with a mix-free final
    /// round, as in AES.
    Standard,
    /// Every round drops ShiftRow and MixColumns but still advances through
    /// the key schedule.
    Lazy,
    /// Like `Lazy`, but every round reuses K0 instead of fresh key material.
    VeryLazy,
}

/// Round count and variant for one encryption.
///
/// `rounds` must lie in 1..=4; the schedule provides no key material beyond
/// K4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Number of rounds, 1..=4.
    pub rounds: u8,
    /// Which round structure to apply.
    pub variant: Variant,
}

impl CipherConfig {
    /// Standard construction with the given round count.
    pub const fn standard(rounds: u8) -> Self {
        Self {
            rounds,
            variant: Variant::Standard,
        }
    }

    /// Lazy construction with the given round count.
    pub const fn lazy(rounds: u8) -> Self {
        Self {
            rounds,
            variant: Variant::Lazy,
        }
    }

    /// Very-lazy construction with the given round count.
    pub const fn very_lazy(rounds: u8) -> Self {
        Self {
            rounds,
            variant: Variant::VeryLazy,
        }
    }
}

/// Error returned when decryption is requested for a configuration it is
/// not defined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedConfig(pub CipherConfig);

impl fmt::Display for UnsupportedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decryption is only defined for the 2-round standard cipher, got {:?}",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedConfig {}

/// Encrypts a single 16-bit block with pre-expanded round keys.
pub fn encrypt_block(plaintext: u16, round_keys: &RoundKeys, config: CipherConfig) -> u16 {
    let rounds = usize::from(config.rounds);
    debug_assert!((1..=4).contains(&rounds), "round count out of range");

    let mut state = to_state(plaintext);
    add_round_key(&mut state, round_keys.get(0));

    match config.variant {
        Variant::Standard => {
            for round in 1..rounds {
                sub_nibbles(&mut state);
                shift_row(&mut state);
                mix_columns(&mut state);
                add_round_key(&mut state, round_keys.get(round));
            }
            // Final round has no MixColumns.
            sub_nibbles(&mut state);
            shift_row(&mut state);
            add_round_key(&mut state, round_keys.get(rounds));
        }
        Variant::Lazy => {
            for round in 1..=rounds {
                sub_nibbles(&mut state);
                add_round_key(&mut state, round_keys.get(round));
            }
        }
        Variant::VeryLazy => {
            for _ in 1..=rounds {
                sub_nibbles(&mut state);
                add_round_key(&mut state, round_keys.get(0));
            }
        }
    }

    to_block(state)
}

/// Decrypts a single 16-bit block.
///
/// Only the 2-round standard construction has an inverse here; every other
/// configuration is rejected rather than silently producing wrong output.
pub fn decrypt_block(
    ciphertext: u16,
    round_keys: &RoundKeys,
    config: CipherConfig,
) -> Result<u16, UnsupportedConfig> {
    if config != CipherConfig::standard(2) {
        return Err(UnsupportedConfig(config));
    }

    let mut state = to_state(ciphertext);
    // Invert the final round: add key, shift, inverse substitute.
    add_round_key(&mut state, round_keys.get(2));
    shift_row(&mut state);
    inv_sub_nibbles(&mut state);
    // Invert the full round.
    add_round_key(&mut state, round_keys.get(1));
    inv_mix_columns(&mut state);
    shift_row(&mut state);
    inv_sub_nibbles(&mut state);
    // Invert the initial key addition.
    add_round_key(&mut state, round_keys.get(0));

    Ok(to_block(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Test vectors from "Simplified AES" (Steven Gordon), 2-round standard.
    const GORDON_KEY: u16 = 0b0100_1010_1111_0101;
    const GORDON_PLAIN: u16 = 0b1101_0111_0010_1000;
    const GORDON_CIPHER: u16 = 0b0010_0100_1110_1100;

    #[test]
    fn encrypt_matches_published_vector() {
        let round_keys = expand_key(MasterKey(GORDON_KEY));
        let ct = encrypt_block(GORDON_PLAIN, &round_keys, CipherConfig::standard(2));
        assert_eq!(ct, GORDON_CIPHER);
    }

    #[test]
    fn decrypt_matches_published_vector() {
        let round_keys = expand_key(MasterKey(GORDON_KEY));
        let pt = decrypt_block(GORDON_CIPHER, &round_keys, CipherConfig::standard(2))
            .expect("supported config");
        assert_eq!(pt, GORDON_PLAIN);
    }

    #[test]
    fn schedule_is_deterministic() {
        let a = expand_key(MasterKey(0xabcd));
        let b = expand_key(MasterKey(0xabcd));
        assert_eq!(a, b);
        assert_ne!(a, expand_key(MasterKey(0xabce)));
    }

    #[test]
    fn schedule_starts_from_master_key() {
        let round_keys = expand_key(MasterKey(0x1234));
        assert_eq!(round_keys.get(0), 0x1234);
    }

    #[test]
    fn round_trip_exhaustive_plaintexts() {
        let round_keys = expand_key(MasterKey(0x4af5));
        let config = CipherConfig::standard(2);
        for pt in 0..=u16::MAX {
            let ct = encrypt_block(pt, &round_keys, config);
            let back = decrypt_block(ct, &round_keys, config).expect("supported config");
            assert_eq!(back, pt);
        }
    }

    #[test]
    fn round_trip_random_keys() {
        let mut rng = rand::thread_rng();
        let config = CipherConfig::standard(2);
        for _ in 0..200 {
            let round_keys = expand_key(MasterKey(rng.gen()));
            let pt: u16 = rng.gen();
            let ct = encrypt_block(pt, &round_keys, config);
            let back = decrypt_block(ct, &round_keys, config).expect("supported config");
            assert_eq!(back, pt);
        }
    }

    #[test]
    fn zero_key_zero_plaintext_round_trip() {
        let round_keys = expand_key(MasterKey(0));
        let config = CipherConfig::standard(2);
        let ct = encrypt_block(0, &round_keys, config);
        let pt = decrypt_block(ct, &round_keys, config).expect("supported config");
        assert_eq!(pt, 0);
    }

    #[test]
    fn decrypt_rejects_other_configs() {
        let round_keys = expand_key(MasterKey(0x4af5));
        for config in [
            CipherConfig::standard(3),
            CipherConfig::standard(4),
            CipherConfig::lazy(4),
            CipherConfig::very_lazy(4),
        ] {
            let err = decrypt_block(0x1234, &round_keys, config).unwrap_err();
            assert_eq!(err, UnsupportedConfig(config));
        }
    }

    #[test]
    fn variants_diverge_from_standard() {
        let round_keys = expand_key(MasterKey(0x3a94));
        let ct_standard = encrypt_block(0x6b5c, &round_keys, CipherConfig::standard(4));
        let ct_lazy = encrypt_block(0x6b5c, &round_keys, CipherConfig::lazy(4));
        let ct_very_lazy = encrypt_block(0x6b5c, &round_keys, CipherConfig::very_lazy(4));
        assert_ne!(ct_standard, ct_lazy);
        assert_ne!(ct_lazy, ct_very_lazy);
    }
}
