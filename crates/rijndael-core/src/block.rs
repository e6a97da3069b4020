//! Block and state representation helpers.
//!
//! The state is kept as a flat 16-byte array in FIPS-197 column-major order:
//! the byte at row `r`, column `c` lives at index `r + 4 * c`. Because that is
//! also the order of the input and output bytes, loading and storing the
//! state is a plain copy.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Index of the state byte at `row`, `col`.
#[inline]
pub(crate) const fn idx(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub(crate) fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
