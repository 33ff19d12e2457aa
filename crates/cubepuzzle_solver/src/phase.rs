use std::fmt;

use cubepuzzle_core::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

const fn pos(x: i8, y: i8, z: i8) -> GridVector {
    const fn sign(i: i8) -> Sign {
        match i {
            ..0 => Sign::Neg,
            0 => Sign::Zero,
            _ => Sign::Pos,
        }
    }
    GridVector::new(sign(x), sign(y), sign(z))
}

/// White-cross edges, in solving order.
pub const WHITE_CROSS: [GridVector; 4] = [pos(0, 1, 1), pos(0, 1, -1), pos(-1, 1, 0), pos(1, 1, 0)];
/// White corners, in solving order.
pub const WHITE_CORNERS: [GridVector; 4] =
    [pos(-1, 1, 1), pos(1, 1, 1), pos(-1, 1, -1), pos(1, 1, -1)];
/// Middle-layer edges, in solving order.
pub const SECOND_LAYER: [GridVector; 4] =
    [pos(1, 0, 1), pos(-1, 0, 1), pos(1, 0, -1), pos(-1, 0, -1)];
/// Yellow edges, in solving order.
pub const YELLOW_EDGES: [GridVector; 4] =
    [pos(0, -1, 1), pos(0, -1, -1), pos(-1, -1, 0), pos(1, -1, 0)];
/// Yellow corners.
pub const YELLOW_CORNERS: [GridVector; 4] = [
    pos(-1, -1, 1),
    pos(1, -1, 1),
    pos(-1, -1, -1),
    pos(1, -1, -1),
];

/// Solving phase tag.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PhaseKind {
    /// One white-cross edge is not in place.
    WhiteCross,
    /// One white corner is not in place.
    WhiteCorners,
    /// One middle-layer edge is not in place.
    SecondLayer,
    /// No two yellow edges form a line or an L on the bottom face.
    YellowCrossNone,
    /// Two adjacent yellow edges face down.
    YellowCrossL,
    /// Two opposite yellow edges face down.
    YellowCrossLine,
    /// The yellow cross is complete but one yellow edge is not in place.
    YellowEdges,
    /// No yellow corner is at its solved position.
    YellowCornersNone,
    /// Some but not all yellow corners are at their solved positions.
    YellowCornersSome,
    /// Every piece is at its solved position but some corners are twisted.
    CornerTwist,
    /// The cube is solved.
    Complete,
}

/// Shape formed by the yellow edges whose yellow sticker faces down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum YellowCrossShape {
    Cross,
    Line,
    L,
    Other,
}

/// Phase of the solve, along with the piece that triggered it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Phase {
    kind: PhaseKind,
    piece: Option<GridVector>,
    rank: u32,
}
impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(piece) = self.piece {
            write!(f, " {piece}")?;
        }
        Ok(())
    }
}
impl Phase {
    /// Phase of a solved cube.
    pub const COMPLETE: Self = Self {
        kind: PhaseKind::Complete,
        piece: None,
        rank: 17,
    };

    fn piece_phase(kind: PhaseKind, order: &[GridVector; 4], index: usize, base_rank: u32) -> Self {
        Self {
            kind,
            piece: Some(order[index]),
            rank: base_rank + index as u32,
        }
    }
    fn whole_cube(kind: PhaseKind, rank: u32) -> Self {
        Self {
            kind,
            piece: None,
            rank,
        }
    }

    /// Returns the phase tag.
    pub fn kind(&self) -> PhaseKind {
        self.kind
    }
    /// Returns the solved position of the piece that triggered the phase, if
    /// the phase is about a single piece.
    pub fn piece(&self) -> Option<GridVector> {
        self.piece
    }
    /// Returns a coarse measure of progress. This never decreases while the
    /// solver runs.
    pub fn rank(&self) -> u32 {
        self.rank
    }
}

/// Returns the first unmet solving condition.
pub fn next_phase(state: &CubeState) -> Phase {
    if state.is_solved() {
        return Phase::COMPLETE;
    }

    let in_place = |solved_position| state.piece(solved_position).is_some_and(Piece::is_in_place);
    let first_unsolved = |order: &[GridVector; 4]| order.iter().position(|&p| !in_place(p));

    if let Some(i) = first_unsolved(&WHITE_CROSS) {
        return Phase::piece_phase(PhaseKind::WhiteCross, &WHITE_CROSS, i, 0);
    }
    if let Some(i) = first_unsolved(&WHITE_CORNERS) {
        return Phase::piece_phase(PhaseKind::WhiteCorners, &WHITE_CORNERS, i, 4);
    }
    if let Some(i) = first_unsolved(&SECOND_LAYER) {
        return Phase::piece_phase(PhaseKind::SecondLayer, &SECOND_LAYER, i, 8);
    }

    match yellow_cross_shape(state) {
        YellowCrossShape::Cross => (),
        YellowCrossShape::Line => return Phase::whole_cube(PhaseKind::YellowCrossLine, 12),
        YellowCrossShape::L => return Phase::whole_cube(PhaseKind::YellowCrossL, 12),
        YellowCrossShape::Other => return Phase::whole_cube(PhaseKind::YellowCrossNone, 12),
    }

    if let Some(i) = first_unsolved(&YELLOW_EDGES) {
        // Positioning yellow edges may displace earlier ones, so they share a rank.
        return Phase {
            kind: PhaseKind::YellowEdges,
            piece: Some(YELLOW_EDGES[i]),
            rank: 13,
        };
    }

    match positioned_yellow_corners(state).len() {
        0 => Phase::whole_cube(PhaseKind::YellowCornersNone, 14),
        4 => Phase::whole_cube(PhaseKind::CornerTwist, 16),
        _ => Phase::whole_cube(PhaseKind::YellowCornersSome, 15),
    }
}

pub(crate) fn yellow_edge_faces_down(state: &CubeState, position: GridVector) -> bool {
    state
        .piece_at(position)
        .is_some_and(|p| p.face_normal(FaceColor::Yellow) == Some(GridVector::DOWN))
}

/// Returns the positions on the bottom layer that hold an edge with its
/// yellow sticker facing down.
pub(crate) fn yellow_edges_facing_down(state: &CubeState) -> Vec<GridVector> {
    YELLOW_EDGES
        .into_iter()
        .filter(|&p| yellow_edge_faces_down(state, p))
        .collect()
}

pub(crate) fn yellow_cross_shape(state: &CubeState) -> YellowCrossShape {
    match yellow_edges_facing_down(state).as_slice() {
        [_, _, _, _] => YellowCrossShape::Cross,
        &[a, b] if are_opposite(a, b) => YellowCrossShape::Line,
        [_, _] => YellowCrossShape::L,
        _ => YellowCrossShape::Other,
    }
}

/// Returns the solved positions of the yellow corners that are at their
/// solved positions, ignoring twist.
pub(crate) fn positioned_yellow_corners(state: &CubeState) -> Vec<GridVector> {
    YELLOW_CORNERS
        .into_iter()
        .filter(|&p| state.piece(p).is_some_and(Piece::is_positioned))
        .collect()
}

/// Returns whether two positions on the same horizontal layer are on opposite
/// sides of the cube.
pub(crate) fn are_opposite(a: GridVector, b: GridVector) -> bool {
    a.x() == -b.x() && a.z() == -b.z()
}
