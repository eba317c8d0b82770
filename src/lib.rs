//! Harmony Search over permutations, applied to balanced number pairing.
//!
//! - **Harmony Search (HS)**: generic population-based search with a
//!   fitness-sorted harmony memory, memory consideration (HMCR) and pitch
//!   adjustment (PAR), for any permutation-encoded problem.
//! - **Pairing**: splits an even-length number set into consecutive pairs
//!   whose sums approach the common target average `total / (len / 2)`.
//!
//! # Example
//!
//! ```
//! use u_harmony::hs::HsConfig;
//! use u_harmony::pairing::PairingSolver;
//!
//! let numbers = [1.0, 9.0, 2.0, 8.0, 3.0, 7.0];
//! let config = HsConfig::default().with_max_iterations(2_000).with_seed(42);
//! let solution = PairingSolver::solve(&numbers, &config).unwrap();
//! assert_eq!(solution.target_average, 10.0);
//! assert_eq!(solution.pairs.len(), 3);
//! ```
//!
//! # Features
//!
//! - `parallel`: score the initial harmony memory with rayon
//! - `serde`: serialize configurations and solutions
//! - `wasm`: JavaScript bindings via wasm-bindgen
//! - `cli`: the `pair-numbers` command-line driver

pub mod hs;
pub mod pairing;
pub mod random;

#[cfg(feature = "wasm")]
pub mod wasm;
