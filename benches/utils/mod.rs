pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

//// Utility functions

#[allow(dead_code)]
pub(crate) fn get_random_ints(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(-1_000_000, 1_000_000));
    }

    results
}

#[allow(dead_code)]
pub(crate) fn get_random_floats(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(-1000., 1000.));
    }

    results
}
