//! Pairing solver: validation, search and decoding of the best harmony.

use super::error::PairingError;
use super::fitness::{decode_pairs, PairReport};
use super::problem::PairingProblem;
use crate::hs::{HsConfig, HsRunner};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Best pairing found by a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingSolution {
    /// Best permutation of the number set; pairs are `(0, 1)`, `(2, 3)`, …
    pub permutation: Vec<f64>,

    /// Total absolute deviation of the pair sums from the target average.
    pub fitness: f64,

    /// The sum every pair ideally reaches.
    pub target_average: f64,

    /// Decoded pairs of `permutation`.
    pub pairs: Vec<PairReport>,

    /// Number of improvisations performed.
    pub iterations: usize,

    /// Number of improvisations accepted into memory.
    pub replacements: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness sampled over the run (see [`HsResult`](crate::hs::HsResult)).
    pub fitness_history: Vec<f64>,
}

impl PairingSolution {
    /// The trivial solution of an empty number set.
    fn empty() -> Self {
        Self {
            permutation: Vec::new(),
            fitness: 0.0,
            target_average: 0.0,
            pairs: Vec::new(),
            iterations: 0,
            replacements: 0,
            stagnated: false,
            cancelled: false,
            fitness_history: Vec::new(),
        }
    }
}

/// Splits a number set into pairs whose sums approach the target average.
///
/// # Examples
///
/// ```
/// use u_harmony::hs::HsConfig;
/// use u_harmony::pairing::PairingSolver;
///
/// let config = HsConfig::default()
///     .with_memory_size(10)
///     .with_max_iterations(500)
///     .with_seed(42);
/// let solution = PairingSolver::solve(&[1.0, 2.0, 3.0, 4.0], &config).unwrap();
/// assert_eq!(solution.fitness, 0.0);
/// assert!(solution.pairs.iter().all(|p| p.sum == 5.0));
/// ```
pub struct PairingSolver;

impl PairingSolver {
    /// Runs the search on `numbers`.
    ///
    /// An empty set returns an empty solution with fitness 0 without
    /// searching.
    ///
    /// # Errors
    /// - [`PairingError::OddLength`] when `numbers` has odd length.
    /// - [`PairingError::InvalidConfig`] when `config` fails validation.
    pub fn solve(numbers: &[f64], config: &HsConfig) -> Result<PairingSolution, PairingError> {
        Self::solve_with_observer(numbers, config, None, |_, _| {})
    }

    /// Runs the search with an optional cancellation token and a progress
    /// observer receiving `(iteration, best_fitness)` every
    /// `config.progress_interval` iterations.
    pub fn solve_with_observer<F>(
        numbers: &[f64],
        config: &HsConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: F,
    ) -> Result<PairingSolution, PairingError>
    where
        F: FnMut(usize, f64),
    {
        if !numbers.len().is_multiple_of(2) {
            tracing::warn!(len = numbers.len(), "cannot pair an odd number of elements");
            return Err(PairingError::OddLength(numbers.len()));
        }
        if numbers.is_empty() {
            tracing::info!("empty number set, nothing to pair");
            return Ok(PairingSolution::empty());
        }
        if let Err(reason) = config.validate() {
            tracing::warn!(%reason, "rejected harmony search configuration");
            return Err(PairingError::InvalidConfig(reason));
        }

        let problem = PairingProblem::new(numbers.to_vec())?;
        tracing::info!(
            elements = numbers.len(),
            pairs = problem.pair_count(),
            total = problem.total(),
            target_average = problem.target_average(),
            "starting harmony search pairing"
        );

        let result = HsRunner::run_with_observer(&problem, config, cancel, observer);

        tracing::info!(
            iterations = result.iterations,
            replacements = result.replacements,
            best_fitness = result.best_fitness,
            "harmony search finished"
        );

        Ok(PairingSolution {
            pairs: decode_pairs(&result.best, problem.target_average()),
            permutation: result.best,
            fitness: result.best_fitness,
            target_average: problem.target_average(),
            iterations: result.iterations,
            replacements: result.replacements,
            stagnated: result.stagnated,
            cancelled: result.cancelled,
            fitness_history: result.fitness_history,
        })
    }
}

/// Runs Harmony Search pairing with the classic parameter set.
///
/// Returns the best permutation and its fitness. An odd-length input (or
/// unusable parameters) yields `(None, +inf)`; an empty input yields
/// `(Some(vec![]), 0.0)`. Use [`PairingSolver`] for seeding, cancellation
/// and typed errors.
///
/// # Examples
///
/// ```
/// use u_harmony::pairing::run_harmony_search;
///
/// let (best, fitness) = run_harmony_search(&[1.0, 2.0, 3.0], 10, 0.9, 0.3, 200);
/// assert!(best.is_none());
/// assert_eq!(fitness, f64::INFINITY);
/// ```
pub fn run_harmony_search(
    numbers: &[f64],
    hms: usize,
    hmcr: f64,
    par: f64,
    iterations: usize,
) -> (Option<Vec<f64>>, f64) {
    let config = HsConfig {
        memory_size: hms,
        hmcr,
        par,
        max_iterations: iterations,
        ..HsConfig::default()
    };

    match PairingSolver::solve(numbers, &config) {
        Ok(solution) => (Some(solution.permutation), solution.fitness),
        Err(_) => (None, f64::INFINITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::evaluate;
    use crate::random::create_rng;
    use rand::seq::index;

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut v = values.to_vec();
        v.sort_by(f64::total_cmp);
        v
    }

    fn config(seed: u64) -> HsConfig {
        HsConfig::default()
            .with_memory_size(10)
            .with_hmcr(0.9)
            .with_par(0.3)
            .with_max_iterations(200)
            .with_seed(seed)
    }

    #[test]
    fn test_empty_input_skips_search() {
        let mut calls = 0;
        let solution =
            PairingSolver::solve_with_observer(&[], &config(42), None, |_, _| calls += 1).unwrap();

        assert!(solution.permutation.is_empty());
        assert_eq!(solution.fitness, 0.0);
        assert_eq!(solution.iterations, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_odd_input_is_rejected() {
        let err = PairingSolver::solve(&[1.0, 2.0, 3.0], &config(42)).unwrap_err();
        assert_eq!(err, PairingError::OddLength(3));
    }

    #[test]
    fn test_odd_input_rejected_before_search_setup() {
        // The config is unusable too; the length check must win, so nothing
        // downstream of input validation (config check, memory) is reached.
        let bad = config(42).with_memory_size(0);
        let err = PairingSolver::solve(&[1.0, 2.0, 3.0], &bad).unwrap_err();
        assert_eq!(err, PairingError::OddLength(3));
    }

    #[test]
    fn test_huge_iteration_budget_does_not_preallocate() {
        let cfg = config(42)
            .with_max_iterations(usize::MAX)
            .with_stagnation_limit(500);

        let solution = PairingSolver::solve(&[1.0, 2.0, 3.0, 4.0], &cfg).unwrap();

        assert!(solution.stagnated);
        assert_eq!(solution.fitness, 0.0);
        assert!(solution.fitness_history.len() <= 2);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let bad = config(42).with_memory_size(0);
        let err = PairingSolver::solve(&[1.0, 2.0], &bad).unwrap_err();
        assert!(matches!(err, PairingError::InvalidConfig(_)));
    }

    #[test]
    fn test_perfect_pairing_found() {
        let solution = PairingSolver::solve(&[1.0, 2.0, 3.0, 4.0], &config(42)).unwrap();

        assert_eq!(solution.fitness, 0.0);
        assert_eq!(solution.target_average, 5.0);
        assert_eq!(solution.pairs.len(), 2);
        assert!(solution.pairs.iter().all(|p| p.sum == 5.0 && p.deviation == 0.0));
    }

    #[test]
    fn test_solution_is_permutation_of_input() {
        let numbers = [12.0, 3.0, 7.0, 7.0, 1.0, 20.0, 9.0, 5.0, 14.0, 2.0];
        let solution = PairingSolver::solve(&numbers, &config(7)).unwrap();

        assert_eq!(sorted(&solution.permutation), sorted(&numbers));
        assert_eq!(
            solution.fitness,
            evaluate(&solution.permutation, solution.target_average)
        );
    }

    #[test]
    fn test_history_monotonic_on_larger_instance() {
        let mut rng = create_rng(2024);
        let numbers: Vec<f64> = index::sample(&mut rng, 1000, 40)
            .into_iter()
            .map(|i| (i + 1) as f64)
            .collect();
        let cfg = HsConfig::default()
            .with_memory_size(20)
            .with_max_iterations(5_000)
            .with_seed(5);

        let solution = PairingSolver::solve(&numbers, &cfg).unwrap();

        assert_eq!(solution.iterations, 5_000);
        assert!(solution.fitness < solution.fitness_history[0]);
        for window in solution.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_observer_receives_best_fitness() {
        let cfg = config(42).with_progress_interval(20);
        let mut seen = Vec::new();
        let solution = PairingSolver::solve_with_observer(
            &[4.0, 8.0, 1.0, 6.0, 3.0, 2.0],
            &cfg,
            None,
            |i, f| seen.push((i, f)),
        )
        .unwrap();

        assert_eq!(seen.len(), 10);
        assert_eq!(seen.last().map(|&(i, _)| i), Some(200));
        assert_eq!(seen.last().map(|&(_, f)| f), Some(solution.fitness));
    }

    #[test]
    fn test_cancelled_run_still_returns_best() {
        let cancel = Arc::new(AtomicBool::new(true));

        let solution = PairingSolver::solve_with_observer(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &config(42),
            Some(cancel),
            |_, _| {},
        )
        .unwrap();

        assert!(solution.cancelled);
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.permutation.len(), 6);
    }

    #[test]
    fn test_run_harmony_search_contract() {
        assert_eq!(
            run_harmony_search(&[], 10, 0.9, 0.3, 200),
            (Some(Vec::new()), 0.0)
        );
        assert_eq!(
            run_harmony_search(&[1.0, 2.0, 3.0], 10, 0.9, 0.3, 200),
            (None, f64::INFINITY)
        );
        assert_eq!(
            run_harmony_search(&[1.0, 2.0], 0, 0.9, 0.3, 200),
            (None, f64::INFINITY)
        );

        let (best, fitness) = run_harmony_search(&[1.0, 2.0, 3.0, 4.0], 10, 0.9, 0.3, 200);
        let best = best.unwrap();
        assert_eq!(fitness, 0.0);
        assert_eq!(evaluate(&best, 5.0), 0.0);
    }
}
