//! Twiddle factor generation.
//!
//! Both engines combine butterflies with the forward-DFT convention,
//! `w_k = e^{-2πik/N}`. A table of `N/2` factors covers one block of size
//! `N`, since the second half of each butterfly reuses the same factor
//! with a flipped sign.

use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::{One, Zero};

/// Generates the `dist` twiddle factors for butterflies over blocks of
/// size `2 * dist`, i.e. `w_k = e^{-iπk/dist}` for `k` in `[0, dist)`.
///
/// Successive factors differ by a constant rotation, so the table is
/// filled with a single complex multiply per entry instead of a sin/cos
/// pair per entry.
pub(crate) fn generate_twiddles(dist: usize) -> Vec<Complex64> {
    let mut twiddles = vec![Complex64::zero(); dist];
    twiddles[0] = Complex64::one();

    let angle = -PI / dist as f64;
    let (st, ct) = angle.sin_cos();
    let step = Complex64::new(ct, st);

    let mut w = Complex64::one();
    for twiddle in twiddles.iter_mut().skip(1) {
        w *= step;
        *twiddle = w;
    }

    twiddles
}
