//! Fixed 4-bit substitution tables.

const SBOX: [u8; 16] = [
    0x9, 0x4, 0xa, 0xb, 0xd, 0x1, 0x8, 0x5, 0x6, 0x2, 0x0, 0x3, 0xc, 0xe, 0xf, 0x7,
];

const INV_SBOX: [u8; 16] = [
    0xa, 0x5, 0x9, 0xb, 0x1, 0x7, 0x8, 0xf, 0x6, 0x0, 0x2, 0x3, 0xc, 0x4, 0xd, 0xe,
];

/// Substitutes a nibble through the S-box.
#[inline]
pub fn sbox(nibble: u8) -> u8 {
    SBOX[usize::from(nibble & 0xf)]
}

/// Substitutes a nibble through the inverse S-box.
#[inline]
pub fn inv_sbox(nibble: u8) -> u8 {
    INV_SBOX[usize::from(nibble & 0xf)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_mutual_inverses() {
        for n in 0u8..16 {
            assert_eq!(inv_sbox(sbox(n)), n);
            assert_eq!(sbox(inv_sbox(n)), n);
        }
    }

    #[test]
    fn sbox_is_a_permutation() {
        let mut seen = [false; 16];
        for n in 0u8..16 {
            seen[usize::from(sbox(n))] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
