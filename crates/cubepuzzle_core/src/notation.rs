//! Standard face-turn notation, such as `R U R' U' F2`.
//!
//! Only the six outer faces are supported. Whitespace between twists is
//! optional.

use std::fmt;

use cubemath::{Axis, GridVector, Sign};
use nom::Parser;
use nom::branch::alt;
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, opt, value};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::{InvalidMove, Move};

/// Error produced when parsing notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Unexpected character
    #[error("unexpected {ch:?} at index {index}")]
    UnexpectedChar {
        /// Character that could not be parsed.
        ch: char,
        /// Byte index of the character in the input string.
        index: usize,
    },
    /// Unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Expected exactly one quarter turn
    #[error("expected a single quarter turn, got {0:?}")]
    NotAQuarterTurn(String),
}

/// Name of one of the six faces, relative to whoever is holding the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(missing_docs)]
pub enum FaceName {
    R,
    L,
    U,
    D,
    F,
    B,
}
impl FaceName {
    /// Returns the outward normal of the face when the cube is held in the
    /// standard orientation.
    pub const fn normal(self) -> GridVector {
        match self {
            FaceName::R => GridVector::RIGHT,
            FaceName::L => GridVector::LEFT,
            FaceName::U => GridVector::UP,
            FaceName::D => GridVector::DOWN,
            FaceName::F => GridVector::FRONT,
            FaceName::B => GridVector::BACK,
        }
    }
    /// Returns the face with outward normal `normal` in the standard
    /// orientation.
    pub fn from_normal(normal: GridVector) -> Option<Self> {
        match normal.unit_axis()? {
            (Axis::X, Sign::Pos) => Some(FaceName::R),
            (Axis::X, _) => Some(FaceName::L),
            (Axis::Y, Sign::Pos) => Some(FaceName::U),
            (Axis::Y, _) => Some(FaceName::D),
            (Axis::Z, Sign::Pos) => Some(FaceName::F),
            (Axis::Z, _) => Some(FaceName::B),
        }
    }

    /// Returns a quarter turn of this face in the standard orientation.
    pub fn quarter_turn(self, clockwise: bool) -> Move {
        let (axis, offset) = match self {
            FaceName::R => (Axis::X, Sign::Pos),
            FaceName::L => (Axis::X, Sign::Neg),
            FaceName::U => (Axis::Y, Sign::Pos),
            FaceName::D => (Axis::Y, Sign::Neg),
            FaceName::F => (Axis::Z, Sign::Pos),
            FaceName::B => (Axis::Z, Sign::Neg),
        };
        let direction = if clockwise { offset } else { -offset };
        Move::from_signs(axis, offset, direction)
    }
}

/// Single token of face-turn notation, such as `R`, `U'`, or `F2`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceTwist {
    /// Face to turn.
    pub face: FaceName,
    /// Number of clockwise quarter turns: 1, -1, or 2.
    pub turns: i8,
}
impl fmt::Display for FaceTwist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turns {
            1 => write!(f, "{}", self.face),
            -1 => write!(f, "{}'", self.face),
            n => write!(f, "{}{}", self.face, n.unsigned_abs()),
        }
    }
}
impl FaceTwist {
    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turns: if self.turns == 2 { 2 } else { -self.turns },
        }
    }

    /// Returns the quarter turns that make up this twist in the standard
    /// orientation. Half turns become two clockwise quarter turns.
    pub fn moves(self) -> SmallVec<[Move; 2]> {
        let quarter = self.face.quarter_turn(self.turns > 0);
        smallvec![quarter; self.turns.unsigned_abs() as usize]
    }
    /// Returns the quarter turns that make up this twist when applied to the
    /// face whose outward normal is `normal`, ignoring this twist's own face.
    pub fn moves_on_face(self, normal: GridVector) -> Result<SmallVec<[Move; 2]>, InvalidMove> {
        let quarter = Move::face_turn(normal, self.turns > 0)?;
        Ok(smallvec![quarter; self.turns.unsigned_abs() as usize])
    }
}

/// Parses a sequence of face twists.
pub fn parse_notation(s: &str) -> Result<Vec<FaceTwist>, NotationError> {
    let mut parser = all_consuming(terminated(
        many0(preceded(multispace0, face_twist)),
        multispace0,
    ));
    match parser.parse_complete(s) {
        Ok((_remaining_input, twists)) => Ok(twists),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let index = s.len() - e.input.len();
            Err(match e.input.chars().next() {
                Some(ch) => NotationError::UnexpectedChar { ch, index },
                None => NotationError::UnexpectedEnd,
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(NotationError::UnexpectedEnd),
    }
}

/// Parses a sequence of face twists and expands it into quarter turns in the
/// standard orientation.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, NotationError> {
    Ok(parse_notation(s)?
        .into_iter()
        .flat_map(FaceTwist::moves)
        .collect())
}

fn face_twist(s: &str) -> nom::IResult<&str, FaceTwist> {
    let suffix = alt((value(-1, char('\'')), value(2, char('2'))));
    (face_name, opt(suffix))
        .map(|(face, turns)| FaceTwist {
            face,
            turns: turns.unwrap_or(1),
        })
        .parse(s)
}

fn face_name(s: &str) -> nom::IResult<&str, FaceName> {
    alt((
        value(FaceName::R, char('R')),
        value(FaceName::L, char('L')),
        value(FaceName::U, char('U')),
        value(FaceName::D, char('D')),
        value(FaceName::F, char('F')),
        value(FaceName::B, char('B')),
    ))
    .parse(s)
}
