use cubepuzzle_core::prelude::*;

use crate::SolverError;

/// Whole-cube orientation naming which world directions act as up, front,
/// and right.
///
/// Algorithms are written in face notation relative to a frame, so the same
/// algorithm serves every slot of a layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    right: GridVector,
    up: GridVector,
    front: GridVector,
}
impl Default for Frame {
    fn default() -> Self {
        Self::STANDARD
    }
}
impl Frame {
    /// Frame in which every face name means what it says.
    pub const STANDARD: Self = Self {
        right: GridVector::RIGHT,
        up: GridVector::UP,
        front: GridVector::FRONT,
    };

    /// Constructs a frame from perpendicular up and front directions.
    pub fn new(up: GridVector, front: GridVector) -> Result<Self, SolverError> {
        if up.unit_axis().is_none() || front.unit_axis().is_none() || up.dot(front) != 0 {
            return Err(SolverError::unreachable(format!(
                "no frame with up {up} and front {front}"
            )));
        }
        let right = up
            .cross(front)
            .map_err(|e| SolverError::unreachable(e.to_string()))?;
        Ok(Self { right, up, front })
    }
    /// Returns the four frames with the given up direction.
    pub fn around(up: GridVector) -> impl Iterator<Item = Frame> {
        GridVector::UNITS
            .into_iter()
            .filter_map(move |front| Frame::new(up, front).ok())
    }
    /// Returns the first frame with the given up direction in which `local`
    /// names `world`.
    pub fn find_around(
        up: GridVector,
        local: GridVector,
        world: GridVector,
    ) -> Result<Self, SolverError> {
        Self::around(up)
            .find(|frame| frame.world(local) == world)
            .ok_or_else(|| {
                SolverError::unreachable(format!("no frame with up {up} puts {local} at {world}"))
            })
    }

    /// Returns the world direction of the frame's right face.
    pub fn right(&self) -> GridVector {
        self.right
    }
    /// Returns the world direction of the frame's up face.
    pub fn up(&self) -> GridVector {
        self.up
    }
    /// Returns the world direction of the frame's front face.
    pub fn front(&self) -> GridVector {
        self.front
    }

    /// Converts a vector from frame coordinates to world coordinates.
    pub fn world(&self, local: GridVector) -> GridVector {
        let mut ret = GridVector::ZERO;
        for (axis, sign) in local.iter_nonzero() {
            let basis = match axis {
                Axis::X => self.right,
                Axis::Y => self.up,
                Axis::Z => self.front,
            };
            // Basis vectors are units along distinct axes.
            for (world_axis, world_sign) in basis.scale(sign).iter_nonzero() {
                ret[world_axis] = world_sign;
            }
        }
        ret
    }

    /// Returns the world moves for a single twist in this frame.
    pub fn twist(&self, face: FaceName, turns: i8) -> Result<Vec<Move>, SolverError> {
        let normal = self.world(face.normal());
        Ok(FaceTwist { face, turns }.moves_on_face(normal)?.to_vec())
    }
    /// Returns the world moves for an algorithm in this frame.
    pub fn alg(&self, twists: &[FaceTwist]) -> Result<Vec<Move>, SolverError> {
        let mut ret = vec![];
        for twist in twists {
            ret.extend(self.twist(twist.face, twist.turns)?);
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle_core::parse_notation;
    use pretty_assertions::assert_eq;

    use super::*;

    fn v(x: i32, y: i32, z: i32) -> GridVector {
        GridVector::from_ints(x, y, z).expect("in range")
    }

    #[test]
    fn test_standard_frame_is_identity() {
        let twists = parse_notation("R U2 F' L D B'").expect("valid notation");
        let expected = cubepuzzle_core::parse_moves("R U2 F' L D B'").expect("valid notation");
        assert_eq!(Frame::STANDARD.alg(&twists), Ok(expected));
        assert_eq!(
            Frame::new(GridVector::UP, GridVector::FRONT),
            Ok(Frame::STANDARD),
        );
    }

    #[test]
    fn test_upside_down_frame() {
        let frame = Frame::new(GridVector::DOWN, GridVector::FRONT).expect("valid frame");
        assert_eq!(frame.right(), GridVector::LEFT);
        assert_eq!(frame.world(v(1, 1, 1)), v(-1, -1, 1));
        assert_eq!(frame.world(v(0, 1, -1)), v(0, -1, -1));
        assert_eq!(
            frame.twist(FaceName::U, 1),
            Ok(vec![Move::face_turn(GridVector::DOWN, true).expect("face")]),
        );
    }

    #[test]
    fn test_frames_around() {
        let frames = Frame::around(GridVector::UP).collect::<Vec<_>>();
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_eq!(frame.up(), GridVector::UP);
            assert_eq!(frame.right().dot(frame.front()), 0);
        }
        assert_eq!(
            Frame::find_around(GridVector::UP, v(1, 1, 1), v(-1, 1, 1)).map(|f| f.front()),
            Ok(GridVector::LEFT),
        );
        assert!(Frame::new(GridVector::UP, GridVector::DOWN).is_err());
    }

    #[test]
    fn test_conjugated_algorithm_has_same_effect() {
        // Rotating the whole cube before and after an algorithm is the same
        // as running the algorithm in the rotated frame.
        let twists = parse_notation("R U R' U'").expect("valid notation");
        let moved = |s: &CubeState| s.pieces().iter().filter(|p| !p.is_in_place()).count();
        for frame in Frame::around(GridVector::DOWN) {
            let mut state = CubeState::new();
            state.apply_moves(frame.alg(&twists).expect("valid frame"));
            let mut standard = CubeState::new();
            standard.apply_moves(Frame::STANDARD.alg(&twists).expect("valid frame"));
            assert_eq!(moved(&state), moved(&standard));
            let corner = state.piece_at(frame.world(v(1, 1, 1)));
            assert!(corner.is_some_and(|p| !p.is_in_place()));
        }
    }
}
