//! Pair-balance fitness and decoding.
//!
//! A harmony is read positionally: elements `(0, 1)`, `(2, 3)`, … form the
//! pairs. Fitness is the total absolute deviation of the pair sums from the
//! target average.

/// One decoded pair of a harmony.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairReport {
    /// Element at the even position.
    pub first: f64,
    /// Element at the following odd position.
    pub second: f64,
    /// `first + second`.
    pub sum: f64,
    /// `|sum - target_average|`.
    pub deviation: f64,
}

/// Target sum for every pair: total of `numbers` divided by the pair count.
///
/// Only meaningful for a non-empty, even-length number set; an empty set
/// yields `NaN`.
pub fn target_average(numbers: &[f64]) -> f64 {
    let pair_count = numbers.len() / 2;
    numbers.iter().sum::<f64>() / pair_count as f64
}

/// Fitness of a harmony scored over its own `len / 2` pairs.
///
/// An empty harmony scores `+inf`. A trailing element of an odd-length
/// harmony belongs to no pair and is ignored; use [`evaluate_pairs`] with
/// the number set's pair count to penalize malformed harmonies instead.
///
/// # Examples
///
/// ```
/// use u_harmony::pairing::evaluate;
///
/// // (1, 9) and (2, 8) both sum to 10, each 5 away from the target.
/// assert_eq!(evaluate(&[1.0, 9.0, 2.0, 8.0], 5.0), 10.0);
/// ```
pub fn evaluate(harmony: &[f64], target_average: f64) -> f64 {
    evaluate_pairs(harmony, harmony.len() / 2, target_average)
}

/// Fitness of a harmony scored over `pair_count` pairs of the number set.
///
/// A pair whose positions fall outside `harmony` adds
/// `+inf / pair_count` instead of failing; a permutation of the number
/// set never hits that branch.
pub fn evaluate_pairs(harmony: &[f64], pair_count: usize, target_average: f64) -> f64 {
    if harmony.is_empty() {
        return f64::INFINITY;
    }

    (0..pair_count)
        .map(|i| match (harmony.get(2 * i), harmony.get(2 * i + 1)) {
            (Some(a), Some(b)) => (a + b - target_average).abs(),
            _ => f64::INFINITY / pair_count as f64,
        })
        .sum()
}

/// Decodes a harmony into its positional pairs.
///
/// A trailing unpaired element is ignored.
pub fn decode_pairs(harmony: &[f64], target_average: f64) -> Vec<PairReport> {
    harmony
        .chunks_exact(2)
        .map(|pair| {
            let sum = pair[0] + pair[1];
            PairReport {
                first: pair[0],
                second: pair[1],
                sum,
                deviation: (sum - target_average).abs(),
            }
        })
        .collect()
}
