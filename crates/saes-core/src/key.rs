//! Key types for the reduced-width cipher.

/// 16-bit master key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterKey(pub u16);

impl From<u16> for MasterKey {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Expanded round keys K0..K4.
///
/// Produced once by the key schedule and read-only afterwards; a plain
/// `Copy` value so encrypting under two keys at once can never alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u16; 5]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=4).
    #[inline]
    pub fn get(&self, round: usize) -> u16 {
        self.0[round]
    }
}
