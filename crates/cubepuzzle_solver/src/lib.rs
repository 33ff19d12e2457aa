//! Layer-by-layer solver for the 3x3x3 cube.
//!
//! The solver is a loop over a fixed sequence of phases: white cross, white
//! corners, second layer, yellow cross, yellow edges, yellow corner
//! positions, and yellow corner twist. [`next_phase()`] finds the first unmet
//! phase and [`moves_for_phase()`] emits a short fixed algorithm that makes
//! progress on it. There is no search.

#[macro_use]
extern crate lazy_static;

mod algorithms;
mod error;
mod frame;
mod handlers;
mod phase;
mod solve;

pub use error::SolverError;
pub use frame::Frame;
pub use handlers::moves_for_phase;
pub use phase::{
    Phase, PhaseKind, SECOND_LAYER, WHITE_CORNERS, WHITE_CROSS, YELLOW_CORNERS, YELLOW_EDGES,
    next_phase,
};
pub use solve::{DEFAULT_MAX_ROUNDS, Solution, SolveStep, solve};
