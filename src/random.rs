//! Random number generator construction.
//!
//! Every run owns exactly one generator. Seeding it makes a run fully
//! reproducible; there is no process-wide random state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed from
/// the operating system when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
