//! Cube simulation driver: owns the cube, the move queue, and the animation
//! of the move in flight, so that every frontend feels the same.

mod animation;
mod shared;
mod simulation;

pub use animation::TwistAnimation;
pub use shared::SharedCubeSimulation;
pub use simulation::{CubeSimulation, DriverState, MoveStartedHook, RunMode};
