//! Number pairing as a Harmony Search problem.

use super::error::PairingError;
use super::fitness::{evaluate_pairs, target_average};
use crate::hs::operators::{random_permutation, swap_adjustment};
use crate::hs::HsProblem;
use rand::Rng;

/// A validated number set to be split into balanced pairs.
///
/// Harmonies are permutations of the number set; random harmonies are
/// uniform shuffles and pitch adjustment swaps two distinct positions.
#[derive(Debug, Clone)]
pub struct PairingProblem {
    numbers: Vec<f64>,
    pair_count: usize,
    target_average: f64,
}

impl PairingProblem {
    /// Validates the number set and precomputes the target average.
    ///
    /// # Errors
    /// - [`PairingError::Empty`] for an empty set.
    /// - [`PairingError::OddLength`] when the length is odd.
    pub fn new(numbers: Vec<f64>) -> Result<Self, PairingError> {
        if numbers.is_empty() {
            return Err(PairingError::Empty);
        }
        if !numbers.len().is_multiple_of(2) {
            return Err(PairingError::OddLength(numbers.len()));
        }

        let target_average = target_average(&numbers);
        Ok(Self {
            pair_count: numbers.len() / 2,
            target_average,
            numbers,
        })
    }

    /// The input number set, in its original order.
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// Number of pairs (`len / 2`).
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Sum of all numbers.
    pub fn total(&self) -> f64 {
        self.numbers.iter().sum()
    }

    /// The sum every pair ideally reaches.
    pub fn target_average(&self) -> f64 {
        self.target_average
    }
}

impl HsProblem for PairingProblem {
    type Harmony = Vec<f64>;

    fn random_harmony<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        random_permutation(&self.numbers, rng)
    }

    fn fitness(&self, harmony: &Vec<f64>) -> f64 {
        evaluate_pairs(harmony, self.pair_count, self.target_average)
    }

    fn adjust_pitch<R: Rng>(&self, harmony: &mut Vec<f64>, rng: &mut R) {
        swap_adjustment(harmony, rng);
    }
}
