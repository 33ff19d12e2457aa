//! Phase handlers. Each one maps the current cube state to a short list of
//! moves that makes progress on its phase without disturbing earlier phases.

use cubepuzzle_core::prelude::*;

use crate::algorithms::*;
use crate::phase::{
    YELLOW_EDGES, are_opposite, positioned_yellow_corners, yellow_edge_faces_down,
    yellow_edges_facing_down,
};
use crate::{Frame, Phase, PhaseKind, SolverError};

type PhaseHandler = fn(&CubeState, &Phase) -> Result<Vec<Move>, SolverError>;

// Frame-relative positions.
const UB: GridVector = GridVector::new(Sign::Zero, Sign::Pos, Sign::Neg);
const UL: GridVector = GridVector::new(Sign::Neg, Sign::Pos, Sign::Zero);
const UR: GridVector = GridVector::new(Sign::Pos, Sign::Pos, Sign::Zero);
const UFR: GridVector = GridVector::new(Sign::Pos, Sign::Pos, Sign::Pos);
const FR: GridVector = GridVector::new(Sign::Pos, Sign::Zero, Sign::Pos);
const DF: GridVector = GridVector::new(Sign::Zero, Sign::Neg, Sign::Pos);
const DFR: GridVector = GridVector::new(Sign::Pos, Sign::Neg, Sign::Pos);

/// Returns the moves for one round of the given phase.
///
/// Returns [`SolverError::NoProgress`] if the handler produces no moves for
/// an unsolved cube.
pub fn moves_for_phase(state: &CubeState, phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let kind = phase.kind();
    let moves = handler(kind)(state, phase)?;
    if moves.is_empty() && kind != PhaseKind::Complete {
        return Err(SolverError::NoProgress(kind));
    }
    Ok(moves)
}

fn handler(kind: PhaseKind) -> PhaseHandler {
    match kind {
        PhaseKind::WhiteCross => white_cross_edge,
        PhaseKind::WhiteCorners => white_corner,
        PhaseKind::SecondLayer => second_layer_edge,
        PhaseKind::YellowCrossNone => yellow_cross_none,
        PhaseKind::YellowCrossL => yellow_cross_l,
        PhaseKind::YellowCrossLine => yellow_cross_line,
        PhaseKind::YellowEdges => yellow_edges,
        PhaseKind::YellowCornersNone => yellow_corners_none,
        PhaseKind::YellowCornersSome => yellow_corners_some,
        PhaseKind::CornerTwist => corner_twist,
        PhaseKind::Complete => |_, _| Ok(vec![]),
    }
}

fn phase_piece<'a>(state: &'a CubeState, phase: &Phase) -> Result<&'a Piece, SolverError> {
    phase
        .piece()
        .and_then(|solved_position| state.piece(solved_position))
        .ok_or_else(|| SolverError::unreachable(format!("{phase} phase has no piece")))
}

fn position_of(state: &CubeState, solved_position: GridVector) -> Option<GridVector> {
    Some(state.piece(solved_position)?.position())
}

/// Returns the fewest repetitions of `turn` (up to 3) after which `test`
/// passes.
fn repeat_until(
    state: &CubeState,
    turn: &[Move],
    mut test: impl FnMut(&CubeState) -> bool,
) -> Result<Vec<Move>, SolverError> {
    let mut sim = state.clone();
    let mut moves = vec![];
    for _ in 0..4 {
        if test(&sim) {
            return Ok(moves);
        }
        sim.apply_moves(turn.iter().copied());
        moves.extend_from_slice(turn);
    }
    Err(SolverError::unreachable("no turn satisfies the condition"))
}

fn white_cross_edge(state: &CubeState, phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let piece = phase_piece(state, phase)?;
    let solved_position = piece.solved_position();
    let position = piece.position();
    let side_color = piece
        .stickers()
        .map(|(color, _)| color)
        .find(|&color| color != FaceColor::White)
        .ok_or_else(|| SolverError::unreachable("white cross edge has no side sticker"))?;
    let frame = Frame::new(GridVector::UP, side_color.home_normal())?;

    match position.y() {
        // Top layer, but in the wrong slot or flipped. Send it down.
        Sign::Pos => {
            let side = GridVector::new(position.x(), Sign::Zero, position.z());
            let face = FaceName::from_normal(side)
                .ok_or_else(|| SolverError::unreachable(format!("{side} is not a face")))?;
            Frame::STANDARD.twist(face, 2)
        }

        // Middle layer. Turn one of its faces to bring it down, move it
        // aside, and restore the face.
        Sign::Zero => {
            let side = GridVector::new(position.x(), Sign::Zero, Sign::Zero);
            for clockwise in [true, false] {
                let turn = Move::face_turn(side, clockwise)?;
                let sim = state.with_moves([turn]);
                if position_of(&sim, solved_position).is_some_and(|p| p.y() == Sign::Neg) {
                    let d = Move::face_turn(GridVector::DOWN, true)?;
                    return Ok(vec![turn, d, turn.inverse()]);
                }
            }
            Err(SolverError::unreachable("middle edge cannot reach the bottom layer"))
        }

        // Bottom layer. Bring it under its slot and lift it in.
        Sign::Neg => {
            let target = frame.world(DF);
            let mut moves = repeat_until(state, &frame.twist(FaceName::D, 1)?, |sim| {
                position_of(sim, solved_position) == Some(target)
            })?;
            let sim = state.with_moves(moves.iter().copied());
            let white_down = sim
                .piece(solved_position)
                .and_then(|p| p.face_normal(FaceColor::White))
                == Some(GridVector::DOWN);
            if white_down {
                moves.extend(frame.alg(&CROSS_DROP_IN)?);
            } else {
                moves.extend(frame.alg(&CROSS_FLIP_IN)?);
            }
            Ok(moves)
        }
    }
}

fn white_corner(state: &CubeState, phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let piece = phase_piece(state, phase)?;
    let solved_position = piece.solved_position();
    let position = piece.position();
    let frame = Frame::find_around(GridVector::UP, UFR, solved_position)?;

    if position.y() == Sign::Neg {
        let target = frame.world(DFR);
        let mut moves = repeat_until(state, &frame.twist(FaceName::D, 1)?, |sim| {
            position_of(sim, solved_position) == Some(target)
        })?;
        moves.extend(frame.alg(&CORNER_INSERT)?);
        Ok(moves)
    } else if position == solved_position {
        // Twisted in its own slot.
        frame.alg(&CORNER_INSERT)
    } else {
        // In another top slot. Drop it into the bottom layer.
        Frame::find_around(GridVector::UP, UFR, position)?.alg(&CORNER_INSERT)
    }
}

fn second_layer_edge(state: &CubeState, phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let piece = phase_piece(state, phase)?;
    let solved_position = piece.solved_position();
    let position = piece.position();
    // Hold the cube upside down so that the last layer is on top.
    let frame = Frame::find_around(GridVector::DOWN, FR, solved_position)?;

    match position.y() {
        Sign::Neg => {
            let side = GridVector::new(position.x(), Sign::Zero, position.z());
            let side_color = piece
                .color_facing(side)
                .ok_or_else(|| SolverError::unreachable("edge has no side sticker"))?;
            let home = side_color.home_normal();
            let (target, alg) = if home == frame.front() {
                (frame.front(), &*EDGE_INSERT_FROM_FRONT)
            } else if home == frame.right() {
                (frame.right(), &*EDGE_INSERT_FROM_RIGHT)
            } else {
                return Err(SolverError::unreachable(format!(
                    "{side_color} sticker does not belong to slot {solved_position}"
                )));
            };
            let mut moves = repeat_until(state, &frame.twist(FaceName::U, 1)?, |sim| {
                let edge = sim.piece(solved_position);
                edge.and_then(|p| p.face_normal(side_color)) == Some(target)
            })?;
            moves.extend(frame.alg(alg)?);
            Ok(moves)
        }
        Sign::Zero => {
            // Wrong slot or flipped. Pop it out into the last layer.
            Frame::find_around(GridVector::DOWN, FR, position)?.alg(&EDGE_INSERT_FROM_FRONT)
        }
        Sign::Pos => Err(SolverError::unreachable(format!(
            "middle edge {solved_position} is in the white layer"
        ))),
    }
}

fn last_layer_frame(state: &CubeState, oriented: [GridVector; 2]) -> Result<Frame, SolverError> {
    Frame::around(GridVector::DOWN)
        .find(|frame| {
            oriented
                .iter()
                .all(|&local| yellow_edge_faces_down(state, frame.world(local)))
        })
        .ok_or_else(|| SolverError::unreachable("yellow edges do not match any frame"))
}

fn yellow_cross_none(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let count = yellow_edges_facing_down(state).len();
    if count % 2 != 0 {
        return Err(SolverError::unreachable(format!("{count} yellow edges face down")));
    }
    // Turns a dot into an L.
    Frame::new(GridVector::DOWN, GridVector::FRONT)?.alg(&TOP_LINE_TO_CROSS)
}

fn yellow_cross_l(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    last_layer_frame(state, [UB, UL])?.alg(&TOP_L_TO_CROSS)
}

fn yellow_cross_line(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    last_layer_frame(state, [UL, UR])?.alg(&TOP_LINE_TO_CROSS)
}

fn yellow_edges(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let frame = Frame::new(GridVector::DOWN, GridVector::FRONT)?;
    let u = frame.twist(FaceName::U, 1)?;

    let mut sim = state.clone();
    let mut prefix = vec![];
    let mut opposite_pair = None;
    for _ in 0..4 {
        let correct = YELLOW_EDGES
            .into_iter()
            .filter(|&p| sim.piece(p).is_some_and(Piece::is_positioned))
            .collect::<Vec<_>>();
        match correct.as_slice() {
            [_, _, _, _] => return Ok(prefix),
            &[a, b] if !are_opposite(a, b) => {
                let swap_frame = Frame::around(GridVector::DOWN)
                    .find(|f| correct.contains(&f.world(UB)) && correct.contains(&f.world(UR)))
                    .ok_or_else(|| SolverError::unreachable("no frame for adjacent edges"))?;
                prefix.extend(swap_frame.alg(&SUNE_SWAP_EDGES)?);
                return Ok(prefix);
            }
            [_, _] if opposite_pair.is_none() => opposite_pair = Some(prefix.clone()),
            _ => (),
        }
        sim.apply_moves(u.iter().copied());
        prefix.extend_from_slice(&u);
    }

    // Only opposite pairs. Swapping one adjacent pair of edges leaves an
    // adjacent pair correct for the next round.
    let mut moves = opposite_pair
        .ok_or_else(|| SolverError::unreachable("no two yellow edges can be aligned"))?;
    moves.extend(frame.alg(&SUNE_SWAP_EDGES)?);
    Ok(moves)
}

fn yellow_corners_none(_state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    Frame::new(GridVector::DOWN, GridVector::FRONT)?.alg(&CYCLE_TOP_CORNERS)
}

fn yellow_corners_some(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    match positioned_yellow_corners(state).as_slice() {
        &[corner] => Frame::find_around(GridVector::DOWN, UFR, corner)?.alg(&CYCLE_TOP_CORNERS),
        other => Err(SolverError::unreachable(format!(
            "{} yellow corners are positioned",
            other.len()
        ))),
    }
}

/// Twists each yellow corner in turn at UFR. The lower layers are scrambled
/// until the last corner is done, so the whole phase is emitted at once.
fn corner_twist(state: &CubeState, _phase: &Phase) -> Result<Vec<Move>, SolverError> {
    let frame = Frame::new(GridVector::DOWN, GridVector::FRONT)?;
    let u = frame.twist(FaceName::U, 1)?;
    let slot = frame.world(UFR);

    let mut sim = state.clone();
    let mut moves = vec![];
    for _ in 0..4 {
        let yellow = sim
            .piece_at(slot)
            .and_then(|p| p.face_normal(FaceColor::Yellow));
        let repetitions = if yellow == Some(frame.right()) {
            2
        } else if yellow == Some(frame.front()) {
            4
        } else if yellow == Some(frame.up()) {
            0
        } else {
            return Err(SolverError::unreachable(format!("corner {slot} has no yellow sticker")));
        };
        let mut corner_moves = vec![];
        for _ in 0..repetitions {
            corner_moves.extend(frame.alg(&CORNER_INSERT)?);
        }
        corner_moves.extend_from_slice(&u);
        sim.apply_moves(corner_moves.iter().copied());
        moves.extend(corner_moves);
    }

    if !sim.is_solved() {
        return Err(SolverError::unreachable("corner twists do not cancel"));
    }
    Ok(moves)
}
