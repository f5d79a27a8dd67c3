//! Statistical and algebraic analysis of the reduced-width AES cipher.
//!
//! Two tools live here:
//! - the diffusion harness, which measures the avalanche effect of each
//!   cipher variant over large batches of single-bit perturbations, and
//! - the known-plaintext key recovery against the weakened one-round
//!   construction, which breaks it exactly from a single pair.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod diffusion;
mod recovery;

pub use diffusion::{
    config_label, hamming, key_avalanche, plaintext_avalanche, run, standard_roster,
    DiffusionReport, VariantMean, DEFAULT_TRIALS,
};
pub use recovery::{
    decrypt_one_round, encrypt_one_round, extract_blocks, recover_key, recover_message,
};
