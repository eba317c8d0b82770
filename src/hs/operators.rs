//! Permutation operators for Harmony Search.
//!
//! These operate on plain slices and are domain-agnostic: any problem
//! encoded as an ordering of a fixed multiset can use them.
//!
//! - [`random_permutation`]: uniform shuffle of a copy (random selection)
//! - [`swap_adjustment`]: exchange two distinct positions (pitch adjustment)

use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Returns a uniformly random permutation of `items`.
///
/// Uses a Fisher–Yates shuffle on a copy; `items` is left untouched.
///
/// # Complexity
/// O(n)
pub fn random_permutation<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut harmony = items.to_vec();
    harmony.shuffle(rng);
    harmony
}

/// Swap pitch adjustment: exchange the contents of two distinct positions.
///
/// The positions are drawn uniformly without replacement, so for
/// `len >= 2` exactly two positions change (unless they hold equal
/// values). Harmonies with fewer than two elements are left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_adjustment<T, R: Rng>(harmony: &mut [T], rng: &mut R) {
    let n = harmony.len();
    if n < 2 {
        return;
    }
    let picked = index::sample(rng, n, 2);
    harmony.swap(picked.index(0), picked.index(1));
}
