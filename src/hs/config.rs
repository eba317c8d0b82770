//! HS configuration.
//!
//! [`HsConfig`] holds all parameters that control the improvisation loop.

/// Configuration for Harmony Search.
///
/// # Defaults
///
/// ```
/// use u_harmony::hs::HsConfig;
///
/// let config = HsConfig::default();
/// assert_eq!(config.memory_size, 20);
/// assert_eq!(config.max_iterations, 50_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_harmony::hs::HsConfig;
///
/// let config = HsConfig::default()
///     .with_memory_size(10)
///     .with_hmcr(0.95)
///     .with_par(0.25)
///     .with_max_iterations(1_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsConfig {
    /// Harmony memory size (HMS): number of records kept in memory.
    ///
    /// Typical range: 5–50.
    pub memory_size: usize,

    /// Harmony memory considering rate (HMCR), in [0, 1].
    ///
    /// Probability that a new candidate is derived from a memory member
    /// rather than generated at random. Typical range: 0.7–0.99.
    pub hmcr: f64,

    /// Pitch adjusting rate (PAR), in [0, 1].
    ///
    /// Probability that a memory-derived candidate is perturbed.
    /// Typical range: 0.1–0.5.
    pub par: f64,

    /// Number of improvisations (NI).
    pub max_iterations: usize,

    /// Consecutive iterations without a new best before stopping early.
    ///
    /// Set to 0 to always run the full `max_iterations` (the default).
    pub stagnation_limit: usize,

    /// Observer cadence: the observer passed to
    /// [`HsRunner::run_with_observer`](super::HsRunner::run_with_observer)
    /// is called every `progress_interval` iterations.
    pub progress_interval: usize,

    /// Whether to score the initial memory in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HsConfig {
    fn default() -> Self {
        Self {
            memory_size: 20,
            hmcr: 0.9,
            par: 0.3,
            max_iterations: 50_000,
            stagnation_limit: 0,
            progress_interval: 1,
            parallel: false,
            seed: None,
        }
    }
}

impl HsConfig {
    /// Sets the harmony memory size.
    pub fn with_memory_size(mut self, n: usize) -> Self {
        self.memory_size = n;
        self
    }

    /// Sets the harmony memory considering rate.
    pub fn with_hmcr(mut self, rate: f64) -> Self {
        self.hmcr = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the pitch adjusting rate.
    pub fn with_par(mut self, rate: f64) -> Self {
        self.par = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of improvisations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the observer cadence.
    pub fn with_progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }

    /// Enables or disables parallel scoring of the initial memory.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_size == 0 {
            return Err("memory_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.hmcr) {
            return Err(format!("hmcr must be in [0, 1], got {}", self.hmcr));
        }
        if !(0.0..=1.0).contains(&self.par) {
            return Err(format!("par must be in [0, 1], got {}", self.par));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.progress_interval == 0 {
            return Err("progress_interval must be at least 1".into());
        }
        Ok(())
    }
}
