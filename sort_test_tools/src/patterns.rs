use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

fn get_or_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(get_or_init_seed())
}

/// Returns the process-wide seed, initializing it if necessary. Print it when a test fails, then
/// re-run with `OVERRIDE_SEED=<seed>` to reproduce the exact inputs.
pub fn random_init_seed() -> u64 {
    get_or_init_seed()
}

/// Pins the process-wide seed. Returns `false` if a seed was already in use, in which case the
/// existing seed is kept.
pub fn set_seed(seed: u64) -> bool {
    SEED.set(seed).is_ok()
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values in `0..len/8`, so every value repeats about eight times.
pub fn random_duplicates(len: usize) -> Vec<i32> {
    let upper = (len / 8).clamp(1, i32::MAX as usize) as i32;
    random_uniform(len, 0..upper)
}

/// Zipf distributed values in `1..=len`, few values dominate.
///
/// # Panics
///
/// Panics if `exponent` is not strictly positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Non-negative random values, sorted in about `saw_count` ascending runs.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_uniform(len, 0..i32::MAX);
    let chunk_size = len / saw_count.max(1);
    for chunk in vals.chunks_mut(chunk_size.max(1)) {
        chunk.sort();
    }

    vals
}
