//! 3x3x3 cube simulation backend.
//!
//! [`CubeState`] tracks the position, orientation, and sticker directions of
//! all 26 visible pieces. [`Move`] is a quarter turn of one outer layer.

pub use cubemath;

mod color;
mod input;
mod notation;
mod piece;
mod scramble;
mod state;
mod twist;

pub use color::{FaceColor, PerColor};
pub use input::InputCommand;
pub use notation::{FaceName, FaceTwist, NotationError, parse_moves, parse_notation};
pub use piece::{Orientation, Piece, PieceType};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, ScrambleParams};
pub use state::{CubeState, PIECE_COUNT};
pub use twist::{InvalidMove, Move};

/// Prelude of common imports.
pub mod prelude {
    pub use cubemath::prelude::*;

    pub use crate::{CubeState, FaceColor, FaceName, FaceTwist, Move, Piece, ScrambleParams};
}

/// Formats a move sequence as space-separated notation.
pub fn moves_to_string(moves: &[Move]) -> String {
    itertools::Itertools::join(&mut moves.iter(), " ")
}
