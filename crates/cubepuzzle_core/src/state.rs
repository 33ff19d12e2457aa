use cubemath::{GridVector, Sign};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{FaceColor, Move, Piece};

/// Number of visible pieces on a 3x3x3 cube.
pub const PIECE_COUNT: usize = 26;

/// Position and orientation of all 26 pieces of a 3x3x3 cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    /// Pieces ordered by solved position, X-major, skipping the core.
    pieces: Vec<Piece>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let pieces = itertools::iproduct!(Sign::iter(), Sign::iter(), Sign::iter())
            .map(|(x, y, z)| GridVector::new(x, y, z))
            .filter(|pos| !pos.is_zero())
            .map(Piece::new_solved)
            .collect();
        Self { pieces }
    }

    fn index_of(solved_position: GridVector) -> Option<usize> {
        if solved_position.is_zero() {
            return None;
        }
        let [x, y, z] = solved_position.ints().map(|i| (i + 1) as usize);
        let i = x * 9 + y * 3 + z;
        // Skip the core, which would be index 13.
        Some(if i > 13 { i - 1 } else { i })
    }

    /// Returns all pieces.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns the piece that belongs at `solved_position` on a solved cube,
    /// or `None` for the core.
    pub fn piece(&self, solved_position: GridVector) -> Option<&Piece> {
        self.pieces.get(Self::index_of(solved_position)?)
    }
    /// Returns the piece currently at `position`, or `None` for the core.
    pub fn piece_at(&self, position: GridVector) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == position)
    }

    /// Applies a single move.
    pub fn apply_move(&mut self, m: Move) {
        let moved = self
            .pieces
            .iter_mut()
            .map(|piece| piece.apply_move(m))
            .filter(|&moved| moved)
            .count();
        log::trace!("applied {m} to {moved} pieces");
    }
    /// Applies a sequence of moves in order.
    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for m in moves {
            self.apply_move(m);
        }
    }
    /// Returns a copy of the cube with `moves` applied.
    #[must_use]
    pub fn with_moves(&self, moves: impl IntoIterator<Item = Move>) -> Self {
        let mut ret = self.clone();
        ret.apply_moves(moves);
        ret
    }

    /// Returns whether every face shows a single color.
    ///
    /// This only compares sticker directions, so it does not require face
    /// centers to be at their home positions.
    pub fn is_solved(&self) -> bool {
        FaceColor::iter().all(|color| {
            self.pieces
                .iter()
                .filter_map(|piece| piece.face_normal(color))
                .all_equal()
        })
    }
}
