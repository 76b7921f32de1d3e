//! Bit-reversal permutation applied ahead of the iterative butterfly passes.
//!
//! Reordering the input so that index `i` holds the sample originally at
//! the bit-reversal of `i` linearizes the access pattern of the recursive
//! even/odd decomposition: after the permutation, every butterfly stage
//! operates on contiguous blocks.

use num_complex::Complex64;

/// Returns the integer formed by reading the low `width` bits of `x` in
/// reverse order.
///
/// Total over `[0, 2^width)` and an involution:
/// `reverse_bits(reverse_bits(x, w), w) == x`.
pub fn reverse_bits(x: usize, width: u32) -> usize {
    if width == 0 {
        return x;
    }
    x.reverse_bits() >> (usize::BITS - width)
}

/// Swaps every sample with the one at its bit-reversed index.
///
/// Since the permutation is an involution, swapping each pair once (the
/// `i < j` guard) is equivalent to writing a reordered copy, without the
/// extra allocation.
pub(crate) fn bit_reverse_permute(signal: &mut [Complex64]) {
    let width = signal.len().ilog2();

    for i in 0..signal.len() {
        let j = reverse_bits(i, width);
        if i < j {
            signal.swap(i, j);
        }
    }
}
