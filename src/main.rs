//! Benchmark harness: times the recursive engine against the in-place
//! engine on identical random signals and reports the relative
//! improvement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::{distributions::Uniform, prelude::*};
use twinfft::{fft_in_place, fft_recursive, Complex64};

mod options;

/// Fills `signal` with uniform samples in [-1, 1), deterministically per
/// trial so both engines see identical inputs.
fn gen_trial_signal(signal: &mut [Complex64], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform_dist = Uniform::new(-1.0, 1.0);

    for z in signal.iter_mut() {
        *z = Complex64::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng));
    }
}

fn main() {
    let options = options::parse_args(std::env::args().skip(1));

    let size_log2: u32 = options
        .get("size-log2")
        .map(|s| s.parse().expect("--size-log2 must be an integer"))
        .unwrap_or(16);
    let trials: u64 = options
        .get("trials")
        .map(|s| s.parse().expect("--trials must be an integer"))
        .unwrap_or(256);

    let n = 1usize << size_log2;
    let mut signal = vec![Complex64::new(0.0, 0.0); n];

    let mut elapsed_recursive = Duration::ZERO;
    for trial in 0..trials {
        gen_trial_signal(&mut signal, trial);

        let now = Instant::now();
        let spectrum = fft_recursive(&signal).expect("size is a power of two");
        elapsed_recursive += now.elapsed();
        black_box(spectrum);
    }
    println!(
        "Ran {trials} recursive FFTs of size {n} in {} ms",
        elapsed_recursive.as_millis()
    );

    let mut elapsed_in_place = Duration::ZERO;
    for trial in 0..trials {
        gen_trial_signal(&mut signal, trial);

        let now = Instant::now();
        fft_in_place(&mut signal).expect("size is a power of two");
        elapsed_in_place += now.elapsed();
        black_box(&mut signal);
    }
    println!(
        "Ran {trials} in-place FFTs of size {n} in {} ms",
        elapsed_in_place.as_millis()
    );

    let improvement =
        (1.0 - elapsed_in_place.as_secs_f64() / elapsed_recursive.as_secs_f64()) * 100.0;
    println!("That's a {improvement:.2}% improvement!");
}
