use cubepuzzle_core::{CubeState, Move};
use serde::{Deserialize, Serialize};

use crate::{Phase, PhaseKind, SolverError, moves_for_phase, next_phase};

/// Default limit on solver rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 1000;

/// One round of the solver: a phase and the moves emitted for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    /// Phase detected before the moves.
    pub phase: Phase,
    /// Moves emitted for the phase.
    pub moves: Vec<Move>,
}

/// Complete solution for a cube state.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Rounds of the solver, in order.
    pub steps: Vec<SolveStep>,
}
impl Solution {
    /// Returns all moves of the solution, in order.
    pub fn moves(&self) -> impl '_ + Iterator<Item = Move> {
        self.steps.iter().flat_map(|step| &step.moves).copied()
    }
    /// Returns the total number of moves.
    pub fn move_count(&self) -> usize {
        self.steps.iter().map(|step| step.moves.len()).sum()
    }
}

/// Solves a cube by repeatedly detecting the next phase and applying its
/// moves, for at most `max_rounds` rounds.
pub fn solve(state: &CubeState, max_rounds: usize) -> Result<Solution, SolverError> {
    let mut state = state.clone();
    let mut solution = Solution::default();
    for _ in 0..max_rounds {
        let phase = next_phase(&state);
        log::debug!("phase: {phase}");
        if phase.kind() == PhaseKind::Complete {
            log::info!(
                "solved in {} moves over {} rounds",
                solution.move_count(),
                solution.steps.len(),
            );
            return Ok(solution);
        }
        let moves = moves_for_phase(&state, &phase)?;
        state.apply_moves(moves.iter().copied());
        solution.steps.push(SolveStep { phase, moves });
    }
    Err(SolverError::RoundLimit(max_rounds))
}
