//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reducing polynomial 0x11B.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. by 2) in GF(2^8).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
///
/// Walks the bits of `b` from least to most significant, accumulating `a`
/// whenever a bit is set and doubling `a` after each step.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
