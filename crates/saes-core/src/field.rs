//! Arithmetic in GF(2^4), polynomials over GF(2) modulo x^4 + x + 1.

/// Multiplies two nibbles in GF(2^4).
///
/// Carry-less shift-and-add: whenever the current low bit of `b` is set,
/// the running multiple of `a` is XORed into the product. After each step
/// `a` is multiplied by x; an overflow into bit 4 is reduced against x + 1,
/// with the leftover degree-4 term cancelled by the final mask.
///
/// Inputs above 15 are a caller contract violation; callers are internal
/// and always pass valid nibbles.
#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x10 != 0 {
            a ^= 0b11;
        }
        b >>= 1;
    }
    product & 0xf
}
