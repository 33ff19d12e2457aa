use cubemath::GridVector;
use serde::{Deserialize, Serialize};

use crate::{FaceColor, Move, PerColor};

/// Kind of piece, determined by how many stickers it has.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PieceType {
    /// Face center, with one sticker.
    Center,
    /// Edge, with two stickers.
    Edge,
    /// Corner, with three stickers.
    Corner,
}

/// Local axes of a piece, expressed in world directions.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Local +X axis.
    pub right: GridVector,
    /// Local +Y axis.
    pub up: GridVector,
    /// Local +Z axis.
    pub front: GridVector,
}
impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl Orientation {
    /// Orientation of every piece on a solved cube.
    pub const IDENTITY: Self = Self {
        right: GridVector::RIGHT,
        up: GridVector::UP,
        front: GridVector::FRONT,
    };

    fn rotated_by(self, m: Move) -> Self {
        Self {
            right: m.rotate(self.right),
            up: m.rotate(self.up),
            front: m.rotate(self.front),
        }
    }
}

/// One of the 26 visible sub-cubes.
///
/// A piece is identified by the position where it belongs on a solved cube,
/// which never changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    solved_position: GridVector,
    position: GridVector,
    orientation: Orientation,
    face_normals: PerColor<Option<GridVector>>,
}
impl Piece {
    /// Constructs a piece in its solved state.
    pub(crate) fn new_solved(solved_position: GridVector) -> Self {
        let face_normals = PerColor::from_fn(|color| {
            let normal = color.home_normal();
            (normal.dot(solved_position) == 1).then_some(normal)
        });
        Self {
            solved_position,
            position: solved_position,
            orientation: Orientation::IDENTITY,
            face_normals,
        }
    }

    /// Returns the position where the piece belongs on a solved cube. This
    /// identifies the piece.
    pub fn solved_position(&self) -> GridVector {
        self.solved_position
    }
    /// Returns the current position of the piece.
    pub fn position(&self) -> GridVector {
        self.position
    }
    /// Returns the current orientation of the piece.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns the direction that the sticker of color `color` faces, or
    /// `None` if the piece has no sticker of that color.
    pub fn face_normal(&self, color: FaceColor) -> Option<GridVector> {
        self.face_normals[color]
    }
    /// Returns an iterator over the stickers of the piece and the directions
    /// they face.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (FaceColor, GridVector)> {
        self.face_normals
            .iter()
            .filter_map(|(color, normal)| Some((color, (*normal)?)))
    }
    /// Returns the color of the sticker facing `direction`, if any.
    pub fn color_facing(&self, direction: GridVector) -> Option<FaceColor> {
        self.stickers()
            .find(|&(_, normal)| normal == direction)
            .map(|(color, _)| color)
    }

    /// Returns the kind of piece.
    pub fn piece_type(&self) -> PieceType {
        match self.solved_position.nonzero_count() {
            1 => PieceType::Center,
            2 => PieceType::Edge,
            _ => PieceType::Corner,
        }
    }

    /// Returns whether the piece is at its solved position with its solved
    /// orientation.
    pub fn is_in_place(&self) -> bool {
        self.is_positioned() && self.orientation == Orientation::IDENTITY
    }
    /// Returns whether the piece is at its solved position, ignoring
    /// orientation.
    pub fn is_positioned(&self) -> bool {
        self.position == self.solved_position
    }

    /// Applies a move to the piece if the move affects it. Returns whether the
    /// piece moved.
    pub(crate) fn apply_move(&mut self, m: Move) -> bool {
        if !m.affects(self.position) {
            return false;
        }
        self.position = m.rotate(self.position);
        self.orientation = self.orientation.rotated_by(m);
        for (_color, normal) in self.face_normals.iter_mut() {
            if let Some(n) = normal {
                *n = m.rotate(*n);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use cubemath::Axis;
    use pretty_assertions::assert_eq;

    use super::*;

    fn v(x: i32, y: i32, z: i32) -> GridVector {
        GridVector::from_ints(x, y, z).expect("in range")
    }

    #[test]
    fn test_solved_stickers() {
        let corner = Piece::new_solved(v(-1, 1, 1));
        assert_eq!(corner.piece_type(), PieceType::Corner);
        assert_eq!(
            corner.stickers().collect::<Vec<_>>(),
            vec![
                (FaceColor::Red, GridVector::FRONT),
                (FaceColor::Green, GridVector::LEFT),
                (FaceColor::White, GridVector::UP),
            ],
        );

        let center = Piece::new_solved(GridVector::DOWN);
        assert_eq!(center.piece_type(), PieceType::Center);
        assert_eq!(
            center.face_normal(FaceColor::Yellow),
            Some(GridVector::DOWN),
        );
        assert_eq!(center.face_normal(FaceColor::White), None);
    }

    #[test]
    fn test_twisted_piece_is_positioned_but_not_in_place() {
        let mut edge = Piece::new_solved(v(1, 0, 1));
        let r = Move::new(Axis::X, 1, 1);
        assert!(edge.apply_move(r));
        assert_eq!(edge.position(), v(1, 1, 0));
        assert_eq!(edge.color_facing(GridVector::UP), Some(FaceColor::Red));
        assert!(!edge.apply_move(Move::new(Axis::Y, -1, 1)));
        assert!(!edge.is_positioned());
        assert!(edge.apply_move(r.inverse()));
        assert!(edge.is_in_place());

        let mut center = Piece::new_solved(GridVector::UP);
        assert!(center.apply_move(Move::new(Axis::Y, 1, 1)));
        assert!(center.is_positioned());
        assert!(!center.is_in_place());
        assert_eq!(center.orientation().front, GridVector::LEFT);
    }

    #[test]
    fn test_in_place_after_full_rotation() {
        let mut corner = Piece::new_solved(v(1, 1, 1));
        let u = Move::new(Axis::Y, 1, 1);
        for i in 0..4 {
            assert_eq!(corner.is_in_place(), i == 0);
            corner.apply_move(u);
        }
        assert!(corner.is_in_place());
    }
}
