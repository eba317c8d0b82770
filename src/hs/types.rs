//! Core trait for Harmony Search.

use rand::Rng;

/// Defines a Harmony Search problem.
///
/// The user implements random harmony generation, fitness evaluation and
/// the pitch adjustment move. The HS framework handles the harmony memory,
/// the HMCR/PAR decisions and replacement of the worst member.
///
/// # Minimization
///
/// HS minimizes fitness. For maximization, negate it.
///
/// # Examples
///
/// ```ignore
/// struct SortProblem { n: usize }
///
/// impl HsProblem for SortProblem {
///     type Harmony = Vec<usize>;
///
///     fn random_harmony<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         let identity: Vec<usize> = (0..self.n).collect();
///         operators::random_permutation(&identity, rng)
///     }
///
///     fn fitness(&self, perm: &Vec<usize>) -> f64 {
///         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
///
///     fn adjust_pitch<R: Rng>(&self, perm: &mut Vec<usize>, rng: &mut R) {
///         operators::swap_adjustment(perm, rng);
///     }
/// }
/// ```
pub trait HsProblem: Send + Sync {
    /// The harmony (candidate solution) representation.
    type Harmony: Clone + Send;

    /// Creates a uniformly random harmony.
    ///
    /// Used to fill the initial memory and for the random-selection branch
    /// of improvisation.
    fn random_harmony<R: Rng>(&self, rng: &mut R) -> Self::Harmony;

    /// Computes the fitness of a harmony. Lower is better.
    ///
    /// Must be pure: the same harmony always yields the same fitness.
    fn fitness(&self, harmony: &Self::Harmony) -> f64;

    /// Applies a small local perturbation to a harmony in place.
    ///
    /// Called on a copy of a memory member with probability PAR. The move
    /// must keep the harmony valid (e.g. a permutation stays a permutation).
    fn adjust_pitch<R: Rng>(&self, harmony: &mut Self::Harmony, rng: &mut R);
}
