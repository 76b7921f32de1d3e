//! Iterative in-place Cooley-Tukey transform.
//!
//! One bit-reversal permutation up front, then `log2(n)` butterfly passes
//! over contiguous blocks of doubling size. No per-level allocation: the
//! only scratch is the per-stage twiddle table, which is what the
//! benchmark harness measures this engine against the recursive one for.

use num_complex::Complex64;

use crate::bit_rev::bit_reverse_permute;
use crate::twiddles::generate_twiddles;

/// Transforms `signal` in place.
///
/// Callers must have validated the length already. A length-1 signal is
/// already its own transform and no pass runs.
pub(crate) fn transform_in_place(signal: &mut [Complex64]) {
    let n = signal.len();

    bit_reverse_permute(signal);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let twiddles = generate_twiddles(half);

        signal.chunks_exact_mut(len).for_each(|block| {
            let (evens, odds) = block.split_at_mut(half);

            evens
                .iter_mut()
                .zip(odds.iter_mut())
                .zip(twiddles.iter())
                .for_each(|((even, odd), w)| {
                    let u = *even;
                    let v = *odd * w;
                    *even = u + v;
                    *odd = u - v;
                });
        });

        len <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn single_sample_is_identity() {
        let mut signal = vec![Complex64::new(3.0, -4.0)];
        transform_in_place(&mut signal);
        assert_eq!(signal, vec![Complex64::new(3.0, -4.0)]);
    }

    #[test]
    fn constant_four() {
        let mut signal = vec![Complex64::new(1.0, 0.0); 4];
        transform_in_place(&mut signal);

        assert_float_closeness(signal[0].re, 4.0, 1e-12);
        assert_float_closeness(signal[0].im, 0.0, 1e-12);
        for z in &signal[1..] {
            assert_float_closeness(z.re, 0.0, 1e-12);
            assert_float_closeness(z.im, 0.0, 1e-12);
        }
    }

    #[test]
    fn impulse_is_all_ones() {
        let n = 8;
        let mut signal = vec![Complex64::new(0.0, 0.0); n];
        signal[0] = Complex64::new(1.0, 0.0);

        transform_in_place(&mut signal);

        for z in &signal {
            assert_float_closeness(z.re, 1.0, 1e-12);
            assert_float_closeness(z.im, 0.0, 1e-12);
        }
    }
}
