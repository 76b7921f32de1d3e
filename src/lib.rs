//! Two Cooley-Tukey FFT engines, benchmarked side by side.
//!
//! Both engines compute the forward DFT of a complex signal whose length
//! is a power of two, with the `e^{-2πik/N}` twiddle convention:
//!
//! - [`fft_recursive`] splits the signal into even/odd halves and
//!   allocates fresh buffers at every recursion level. Simple, and a
//!   useful baseline for how much those allocations cost.
//! - [`fft_in_place`] permutes the buffer once into bit-reversed order
//!   and then runs `log2(n)` butterfly passes over contiguous blocks,
//!   mutating the caller's buffer directly.
//!
//! The two are numerically equivalent; the `twinfft` binary times them
//! against each other on random signals.
//!
//! Neither engine holds state between calls, so concurrent transforms on
//! disjoint buffers are safe. Inverse transforms, non-power-of-two sizes,
//! SIMD, and plan reuse are out of scope.

pub use num_complex::Complex64;

pub use crate::bit_rev::reverse_bits;
pub use crate::error::InvalidLengthError;

use crate::error::validate_length;

pub mod bit_rev;
mod error;
mod iterative;
mod recursive;
mod twiddles;

/// Computes the forward DFT with the recursive engine, returning a new
/// buffer and leaving `signal` untouched.
///
/// # Errors
///
/// Returns [`InvalidLengthError`] if `signal.len()` is zero or not a
/// power of two. The length is checked once here; recursion levels rely
/// on the invariant being preserved by halving.
pub fn fft_recursive(signal: &[Complex64]) -> Result<Vec<Complex64>, InvalidLengthError> {
    validate_length(signal.len())?;
    Ok(recursive::transform(signal))
}

/// Computes the forward DFT with the iterative engine, overwriting
/// `signal` with its spectrum.
///
/// # Errors
///
/// Returns [`InvalidLengthError`] if `signal.len()` is zero or not a
/// power of two, in which case the buffer is left unmodified.
pub fn fft_in_place(signal: &mut [Complex64]) -> Result<(), InvalidLengthError> {
    validate_length(signal.len())?;
    iterative::transform_in_place(signal);
    Ok(())
}
