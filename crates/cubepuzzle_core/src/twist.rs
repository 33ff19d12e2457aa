use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, GridVector, Sign};
use serde::{Deserialize, Serialize};

use crate::notation::{FaceName, FaceTwist, NotationError, parse_notation};

/// Error produced when constructing an invalid [`Move`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    /// Offset is not +1 or -1
    #[error("move offset must be +1 or -1, not {0}")]
    BadOffset(i32),
    /// Direction is not +1 or -1
    #[error("move direction must be +1 or -1, not {0}")]
    BadDirection(i32),
    /// Vector is not the normal of a face
    #[error("{0} is not a face normal")]
    NotAFaceNormal(GridVector),
}

/// Quarter turn of one outer layer of the cube.
///
/// A move turns every piece whose coordinate along `axis` equals `offset`. The
/// turn is clockwise as viewed from the positive end of the axis when
/// `direction` is positive.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Axis,
    offset: Sign,
    direction: Sign,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = FaceName::from_normal(self.face()).ok_or(fmt::Error)?;
        write!(f, "{face}")?;
        if !self.is_clockwise() {
            write!(f, "'")?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = NotationError;

    /// Parses a single quarter turn such as `R` or `U'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_notation(s)?.as_slice() {
            [FaceTwist { face, turns }] if turns.abs() == 1 => Ok(face.quarter_turn(*turns > 0)),
            _ => Err(NotationError::NotAQuarterTurn(s.to_owned())),
        }
    }
}

impl Move {
    /// All 12 quarter turns: 3 axes × 2 offsets × 2 directions.
    pub const ALL: [Move; 12] = [
        Move::from_signs(Axis::X, Sign::Neg, Sign::Neg),
        Move::from_signs(Axis::X, Sign::Neg, Sign::Pos),
        Move::from_signs(Axis::X, Sign::Pos, Sign::Neg),
        Move::from_signs(Axis::X, Sign::Pos, Sign::Pos),
        Move::from_signs(Axis::Y, Sign::Neg, Sign::Neg),
        Move::from_signs(Axis::Y, Sign::Neg, Sign::Pos),
        Move::from_signs(Axis::Y, Sign::Pos, Sign::Neg),
        Move::from_signs(Axis::Y, Sign::Pos, Sign::Pos),
        Move::from_signs(Axis::Z, Sign::Neg, Sign::Neg),
        Move::from_signs(Axis::Z, Sign::Neg, Sign::Pos),
        Move::from_signs(Axis::Z, Sign::Pos, Sign::Neg),
        Move::from_signs(Axis::Z, Sign::Pos, Sign::Pos),
    ];

    pub(crate) const fn from_signs(axis: Axis, offset: Sign, direction: Sign) -> Self {
        Self {
            axis,
            offset,
            direction,
        }
    }

    /// Constructs a move.
    ///
    /// # Panics
    ///
    /// Panics if `offset` or `direction` is not +1 or -1.
    #[track_caller]
    pub fn new(axis: Axis, offset: i32, direction: i32) -> Self {
        match Self::try_new(axis, offset, direction) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
    /// Constructs a move, or returns an error if `offset` or `direction` is
    /// not +1 or -1.
    pub fn try_new(axis: Axis, offset: i32, direction: i32) -> Result<Self, InvalidMove> {
        let offset = match Sign::try_from(offset) {
            Ok(s) if s.is_nonzero() => s,
            _ => return Err(InvalidMove::BadOffset(offset)),
        };
        let direction = match Sign::try_from(direction) {
            Ok(s) if s.is_nonzero() => s,
            _ => return Err(InvalidMove::BadDirection(direction)),
        };
        Ok(Self::from_signs(axis, offset, direction))
    }
    /// Constructs a quarter turn of the face with outward normal `normal`,
    /// clockwise or counterclockwise as seen looking at that face.
    pub fn face_turn(normal: GridVector, clockwise: bool) -> Result<Self, InvalidMove> {
        let (axis, offset) = normal
            .unit_axis()
            .ok_or(InvalidMove::NotAFaceNormal(normal))?;
        let direction = if clockwise { offset } else { -offset };
        Ok(Self::from_signs(axis, offset, direction))
    }

    /// Returns the axis of rotation.
    pub fn axis(self) -> Axis {
        self.axis
    }
    /// Returns which outer layer is turned: +1 or -1 along the axis.
    pub fn offset(self) -> i32 {
        self.offset.int() as i32
    }
    /// Returns +1 for clockwise or -1 for counterclockwise, as seen from the
    /// positive end of the axis.
    pub fn direction(self) -> i32 {
        self.direction.int() as i32
    }
    /// Returns the outward normal of the turned face.
    pub fn face(self) -> GridVector {
        self.axis.vector(self.offset)
    }
    /// Returns whether the move is clockwise as seen looking at the turned
    /// face.
    pub fn is_clockwise(self) -> bool {
        self.offset == self.direction
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }

    /// Returns whether the move turns a piece at `position`.
    pub fn affects(self, position: GridVector) -> bool {
        position[self.axis] == self.offset
    }
    /// Returns `vector` rotated by this move, regardless of whether a piece
    /// there would be affected.
    pub fn rotate(self, vector: GridVector) -> GridVector {
        // Clockwise seen from the positive end is a negative angle.
        vector.rotated(self.axis, -self.direction())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn v(x: i32, y: i32, z: i32) -> GridVector {
        GridVector::from_ints(x, y, z).expect("in range")
    }

    #[test]
    fn test_standard_quarter_turns() {
        let p = v(1, 1, 1);
        assert_eq!(Move::new(Axis::X, 1, 1).rotate(p), v(1, 1, -1)); // R
        assert_eq!(Move::new(Axis::Y, 1, 1).rotate(p), v(-1, 1, 1)); // U
        assert_eq!(Move::new(Axis::Z, 1, 1).rotate(p), v(1, -1, 1)); // F
        assert_eq!(Move::new(Axis::X, -1, 1).rotate(v(-1, 1, 1)), v(-1, 1, -1)); // L'
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Axis::X, 1, 1).to_string(), "R");
        assert_eq!(Move::new(Axis::X, -1, 1).to_string(), "L'");
        assert_eq!(Move::new(Axis::X, -1, -1).to_string(), "L");
        assert_eq!(Move::new(Axis::Y, -1, -1).to_string(), "D");
        assert_eq!(Move::new(Axis::Z, -1, 1).to_string(), "B'");
        assert_eq!(Move::new(Axis::Z, 1, -1).to_string(), "F'");
    }

    #[test]
    fn test_move_from_str() {
        assert_eq!("U'".parse::<Move>(), Ok(Move::new(Axis::Y, 1, -1)));
        assert_eq!(" B ".parse::<Move>(), Ok(Move::new(Axis::Z, -1, -1)));
        assert!("R2".parse::<Move>().is_err());
        assert!("R U".parse::<Move>().is_err());
    }

    #[test]
    fn test_face_turn() {
        assert_eq!(
            Move::face_turn(GridVector::LEFT, true),
            Ok(Move::new(Axis::X, -1, -1)),
        );
        assert_eq!(
            Move::face_turn(GridVector::UP, false),
            Ok(Move::new(Axis::Y, 1, -1)),
        );
        assert_eq!(
            Move::face_turn(v(1, 1, 0), true),
            Err(InvalidMove::NotAFaceNormal(v(1, 1, 0))),
        );
    }

    #[test]
    fn test_invalid_moves() {
        assert_eq!(Move::try_new(Axis::X, 0, 1), Err(InvalidMove::BadOffset(0)));
        assert_eq!(
            Move::try_new(Axis::X, 1, 2),
            Err(InvalidMove::BadDirection(2)),
        );
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_bad_offset() {
        Move::new(Axis::Y, 2, 1);
    }

    proptest! {
        #[test]
        fn proptest_move_inverse(i in 0..12_usize, x in -1..=1_i32, y in -1..=1_i32, z in -1..=1_i32) {
            let m = Move::ALL[i];
            let p = v(x, y, z);
            prop_assert_eq!(m.inverse().rotate(m.rotate(p)), p);
            prop_assert_eq!(m.inverse().inverse(), m);
            prop_assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }
}
