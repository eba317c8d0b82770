//! Harmony Search (HS) over permutations.
//!
//! A population-based metaheuristic modelled on musicians improvising
//! together. A fixed-size *harmony memory* holds the best candidates seen
//! so far. Each iteration improvises one new candidate, either by copying a
//! random memory member (optionally perturbed by *pitch adjustment*) or by
//! drawing a fresh random one, and replaces the worst member when the new
//! candidate is strictly better.
//!
//! The continuous-variable formulation nudges each decision variable by a
//! bandwidth. For permutation-encoded problems that would break the
//! permutation, so pitch adjustment here is a problem-defined local move
//! (a two-position swap for the built-in operators).
//!
//! # Key Types
//!
//! - [`HsProblem`]: problem definition (random harmony, fitness, pitch adjustment)
//! - [`HsConfig`]: memory size, HMCR, PAR, iteration budget, seed
//! - [`HarmonyMemory`]: fitness-sorted population of [`HarmonyRecord`]s
//! - [`HsRunner`]: executes the improvisation loop
//!
//! # References
//!
//! - Geem, Kim & Loganathan (2001), "A New Heuristic Optimization Algorithm: Harmony Search"
//! - Lee & Geem (2005), "A new meta-heuristic algorithm for continuous engineering optimization"

mod config;
mod memory;
pub mod operators;
mod runner;
mod types;

pub use config::HsConfig;
pub use memory::{HarmonyMemory, HarmonyRecord};
pub use runner::{HsResult, HsRunner};
pub use types::HsProblem;
