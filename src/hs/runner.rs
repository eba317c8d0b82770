//! HS improvisation loop.
//!
//! [`HsRunner`] orchestrates the complete search:
//! memory initialization → improvise → evaluate → replace worst → repeat.

use super::config::HsConfig;
use super::memory::{HarmonyMemory, HarmonyRecord};
use super::types::HsProblem;
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Upper bound on evenly spaced samples kept in the fitness history.
const HISTORY_SAMPLES: usize = 1000;

/// Result of a Harmony Search run.
#[derive(Debug, Clone)]
pub struct HsResult<S: Clone> {
    /// The best harmony in memory at termination.
    pub best: S,

    /// Fitness of the best harmony.
    pub best_fitness: f64,

    /// Number of improvisations performed.
    pub iterations: usize,

    /// Number of improvisations that replaced the worst memory record.
    pub replacements: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness sampled after initialization, every
    /// `max(max_iterations / 1000, 1)` iterations, and at termination.
    pub fitness_history: Vec<f64>,

    /// Final harmony memory, best first.
    pub memory: HarmonyMemory<S>,
}

/// Executes the Harmony Search loop.
///
/// # Usage
///
/// ```ignore
/// let config = HsConfig::default().with_seed(42);
/// let result = HsRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct HsRunner;

impl HsRunner {
    /// Runs HS optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`HsConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: HsProblem>(problem: &P, config: &HsConfig) -> HsResult<P::Harmony> {
        Self::run_with_observer(problem, config, None, |_, _| {})
    }

    /// Runs HS with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the loop stops before the next
    /// improvisation and returns the current memory.
    pub fn run_with_cancel<P: HsProblem>(
        problem: &P,
        config: &HsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HsResult<P::Harmony> {
        Self::run_with_observer(problem, config, cancel, |_, _| {})
    }

    /// Runs HS, reporting progress to `observer`.
    ///
    /// `observer` receives `(iteration, best_fitness)` every
    /// `config.progress_interval` iterations, where `iteration` counts
    /// completed improvisations starting at 1.
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &HsConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> HsResult<P::Harmony>
    where
        P: HsProblem,
        F: FnMut(usize, f64),
    {
        config.validate().expect("invalid HsConfig");

        let mut rng = rng_from_seed(config.seed);

        // 1. Initialize memory
        let mut memory = initialize_memory(problem, config, &mut rng);
        let mut best_fitness = best_fitness_of(&memory);

        // Best fitness history: sample at a fixed interval
        let history_interval = (config.max_iterations / HISTORY_SAMPLES).max(1);
        let mut fitness_history = Vec::new();
        fitness_history.push(best_fitness);

        let log_interval = (config.max_iterations / 10).max(1);
        let mut iterations = 0usize;
        let mut replacements = 0usize;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 2. Improvisation loop
        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = improvise(problem, config, &memory, &mut rng);
            let fitness = problem.fitness(&candidate);

            if memory.try_replace_worst(HarmonyRecord::new(candidate, fitness)) {
                replacements += 1;
            }

            iterations = iteration + 1;

            let current_best = best_fitness_of(&memory);
            if current_best < best_fitness {
                best_fitness = current_best;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            if iterations.is_multiple_of(history_interval) {
                fitness_history.push(best_fitness);
            }

            if iterations.is_multiple_of(config.progress_interval) {
                observer(iterations, best_fitness);
            }
            if iterations.is_multiple_of(log_interval) {
                tracing::debug!(
                    iteration = iterations,
                    total = config.max_iterations,
                    best_fitness,
                    "harmony search progress"
                );
            }

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        // Final history entry for runs ending between samples
        if !iterations.is_multiple_of(history_interval) {
            fitness_history.push(best_fitness);
        }

        let best = memory
            .best()
            .expect("memory must not be empty")
            .harmony
            .clone();

        HsResult {
            best,
            best_fitness,
            iterations,
            replacements,
            stagnated,
            cancelled,
            fitness_history,
            memory,
        }
    }
}

/// Improvise one new harmony from memory or at random.
fn improvise<P: HsProblem, R: Rng>(
    problem: &P,
    config: &HsConfig,
    memory: &HarmonyMemory<P::Harmony>,
    rng: &mut R,
) -> P::Harmony {
    if rng.random::<f64>() < config.hmcr {
        // Memory consideration: uniform over the whole memory, not fitness-weighted
        let idx = rng.random_range(0..memory.len());
        let mut harmony = memory.records()[idx].harmony.clone();

        if rng.random::<f64>() < config.par {
            problem.adjust_pitch(&mut harmony, rng);
        }
        harmony
    } else {
        problem.random_harmony(rng)
    }
}

/// Fill the memory with `memory_size` scored random harmonies.
///
/// Harmonies are always generated serially from the single generator so a
/// seeded run produces the same memory with or without parallel scoring.
fn initialize_memory<P: HsProblem, R: Rng>(
    problem: &P,
    config: &HsConfig,
    rng: &mut R,
) -> HarmonyMemory<P::Harmony> {
    let harmonies: Vec<P::Harmony> = (0..config.memory_size)
        .map(|_| problem.random_harmony(rng))
        .collect();

    HarmonyMemory::from_records(score_harmonies(problem, harmonies, config.parallel))
}

#[cfg(feature = "parallel")]
fn score_harmonies<P: HsProblem>(
    problem: &P,
    harmonies: Vec<P::Harmony>,
    parallel: bool,
) -> Vec<HarmonyRecord<P::Harmony>> {
    use rayon::prelude::*;

    if parallel {
        harmonies
            .into_par_iter()
            .map(|h| {
                let f = problem.fitness(&h);
                HarmonyRecord::new(h, f)
            })
            .collect()
    } else {
        score_sequential(problem, harmonies)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_harmonies<P: HsProblem>(
    problem: &P,
    harmonies: Vec<P::Harmony>,
    _parallel: bool,
) -> Vec<HarmonyRecord<P::Harmony>> {
    score_sequential(problem, harmonies)
}

fn score_sequential<P: HsProblem>(
    problem: &P,
    harmonies: Vec<P::Harmony>,
) -> Vec<HarmonyRecord<P::Harmony>> {
    harmonies
        .into_iter()
        .map(|h| {
            let f = problem.fitness(&h);
            HarmonyRecord::new(h, f)
        })
        .collect()
}

fn best_fitness_of<S>(memory: &HarmonyMemory<S>) -> f64 {
    memory.best().map_or(f64::INFINITY, |r| r.fitness)
}

// ============================================================================
// Tests
// ============================================================================
