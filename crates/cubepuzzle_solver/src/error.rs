use cubepuzzle_core::InvalidMove;

use crate::PhaseKind;

/// Error produced by the solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The cube is in a state that no sequence of legal moves can reach, or
    /// that the solver's invariants rule out.
    #[error("unreachable cube state: {0}")]
    UnreachableState(String),
    /// A phase handler produced no moves.
    #[error("no progress in {0} phase")]
    NoProgress(PhaseKind),
    /// The cube was not solved within the round limit.
    #[error("cube not solved after {0} rounds")]
    RoundLimit(usize),
}
impl SolverError {
    pub(crate) fn unreachable(reason: impl ToString) -> Self {
        Self::UnreachableState(reason.to_string())
    }
}
impl From<InvalidMove> for SolverError {
    fn from(value: InvalidMove) -> Self {
        Self::unreachable(value)
    }
}
