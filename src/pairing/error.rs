/// Errors reported by the pairing solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    /// The number set has an odd number of elements and cannot be paired.
    #[error("number set must have an even number of elements, got {0}")]
    OddLength(usize),

    /// The number set is empty.
    ///
    /// [`PairingSolver`](super::PairingSolver) treats this as a trivial
    /// success; only [`PairingProblem::new`](super::PairingProblem::new)
    /// reports it.
    #[error("number set is empty")]
    Empty,

    /// The search configuration failed validation.
    #[error("invalid harmony search configuration: {0}")]
    InvalidConfig(String),
}
