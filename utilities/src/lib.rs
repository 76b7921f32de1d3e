pub extern crate rustfft;

// export rustfft to twinfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffer
pub fn gen_random_signal(signal: &mut [Complex64]) {
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(-1.0, 1.0);
    for z in signal.iter_mut() {
        *z = Complex64::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng));
    }
}
