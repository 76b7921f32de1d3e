//! Naive recursive Cooley-Tukey transform.
//!
//! Every recursion level copies the even- and odd-indexed samples into
//! freshly allocated halves, giving O(n log n) auxiliary space on top of
//! the O(n log n) running time. The allocation pattern is kept on purpose:
//! it is the baseline the benchmark harness compares the in-place engine
//! against.

use num_complex::Complex64;
use num_traits::Zero;

use crate::twiddles::generate_twiddles;

/// Transforms `signal` recursively, returning a freshly allocated result.
///
/// Callers must have validated the length already; halving a power of two
/// yields a power of two down to the base case, so no level re-checks it.
pub(crate) fn transform(signal: &[Complex64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 1 {
        return signal.to_vec();
    }

    let (even, odd): (Vec<_>, Vec<_>) =
        signal.chunks_exact(2).map(|c| (c[0], c[1])).unzip();

    let even = transform(&even);
    let odd = transform(&odd);

    let half = n / 2;
    let twiddles = generate_twiddles(half);
    let mut result = vec![Complex64::zero(); n];

    for (i, w) in twiddles.iter().enumerate() {
        let v = w * odd[i];
        result[i] = even[i] + v;
        result[i + half] = even[i] - v;
    }

    result
}
