//! Balanced number pairing.
//!
//! Given an even-length number set, find an ordering whose consecutive
//! pairs `(0, 1)`, `(2, 3)`, … each sum as close as possible to the target
//! average `total / (len / 2)`. The search is Harmony Search over
//! permutations of the set ([`crate::hs`]).
//!
//! # Key Types
//!
//! - [`PairingSolver`]: validated, seeded entry point with full statistics
//! - [`run_harmony_search`]: plain `(best, fitness)` entry point
//! - [`PairingProblem`]: the [`HsProblem`](crate::hs::HsProblem) implementation
//! - [`evaluate`]: the fitness function

mod error;
mod fitness;
mod problem;
mod solver;

pub use error::PairingError;
pub use fitness::{decode_pairs, evaluate, evaluate_pairs, target_average, PairReport};
pub use problem::PairingProblem;
pub use solver::{run_harmony_search, PairingSolution, PairingSolver};
