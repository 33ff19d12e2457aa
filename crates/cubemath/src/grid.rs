//! Integer grid vectors.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use crate::{Axis, Float, Sign};

/// Error returned when an integer component does not fit in `-1..=1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutOfRange(pub i32);
impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid component {} out of range -1..=1", self.0)
    }
}
impl std::error::Error for OutOfRange {}

/// Vector on the integer lattice `{-1, 0, 1}³`.
///
/// Used both for piece positions and for the directions that stickers face.
/// Equality is exact.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridVector(pub [Sign; 3]);

impl GridVector {
    /// Zero vector, which is the position of the hidden core.
    pub const ZERO: Self = Self([Sign::Zero, Sign::Zero, Sign::Zero]);
    /// +X
    pub const RIGHT: Self = Self([Sign::Pos, Sign::Zero, Sign::Zero]);
    /// -X
    pub const LEFT: Self = Self([Sign::Neg, Sign::Zero, Sign::Zero]);
    /// +Y
    pub const UP: Self = Self([Sign::Zero, Sign::Pos, Sign::Zero]);
    /// -Y
    pub const DOWN: Self = Self([Sign::Zero, Sign::Neg, Sign::Zero]);
    /// +Z
    pub const FRONT: Self = Self([Sign::Zero, Sign::Zero, Sign::Pos]);
    /// -Z
    pub const BACK: Self = Self([Sign::Zero, Sign::Zero, Sign::Neg]);

    /// The six unit vectors, which are also the six face normals.
    pub const UNITS: [Self; 6] = [
        Self::RIGHT,
        Self::LEFT,
        Self::UP,
        Self::DOWN,
        Self::FRONT,
        Self::BACK,
    ];

    /// Constructs a vector from its components.
    pub const fn new(x: Sign, y: Sign, z: Sign) -> Self {
        Self([x, y, z])
    }
    /// Constructs a vector from integer components, each of which must be in
    /// `-1..=1`.
    pub fn from_ints(x: i32, y: i32, z: i32) -> Result<Self, OutOfRange> {
        Ok(Self([
            Sign::try_from(x).map_err(OutOfRange)?,
            Sign::try_from(y).map_err(OutOfRange)?,
            Sign::try_from(z).map_err(OutOfRange)?,
        ]))
    }

    /// Returns the X component.
    pub const fn x(self) -> Sign {
        self.0[0]
    }
    /// Returns the Y component.
    pub const fn y(self) -> Sign {
        self.0[1]
    }
    /// Returns the Z component.
    pub const fn z(self) -> Sign {
        self.0[2]
    }

    /// Returns the components as integers.
    pub fn ints(self) -> [i32; 3] {
        self.0.map(|s| s.int() as i32)
    }
    /// Returns the components as floats.
    pub fn floats(self) -> [Float; 3] {
        self.0.map(Sign::float)
    }

    /// Returns whether every component is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
    /// Returns the number of nonzero components. For a piece position this is
    /// the number of stickers on the piece.
    pub fn nonzero_count(self) -> usize {
        self.0.iter().filter(|s| s.is_nonzero()).count()
    }
    /// Returns an iterator over the nonzero components along with their axes.
    pub fn iter_nonzero(self) -> impl Iterator<Item = (Axis, Sign)> {
        Axis::iter()
            .map(move |axis| (axis, self[axis]))
            .filter(|(_, sign)| sign.is_nonzero())
    }
    /// Returns the only nonzero component if this is a unit vector.
    pub fn unit_axis(self) -> Option<(Axis, Sign)> {
        let mut nonzero = self.iter_nonzero();
        let ret = nonzero.next();
        match nonzero.next() {
            Some(_) => None,
            None => ret,
        }
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Self) -> i32 {
        std::iter::zip(self.ints(), rhs.ints())
            .map(|(l, r)| l * r)
            .sum()
    }
    /// Returns the cross product of this vector with another, or an error if
    /// the result leaves the lattice.
    pub fn cross(self, rhs: Self) -> Result<Self, OutOfRange> {
        let [ax, ay, az] = self.ints();
        let [bx, by, bz] = rhs.ints();
        Self::from_ints(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(self, sign: Sign) -> Self {
        Self(self.0.map(|s| s * sign))
    }

    /// Returns a copy of the vector rotated about `axis` by `quarter_turns`
    /// multiples of 90 degrees, counterclockwise when viewed from the positive
    /// end of the axis.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Self {
        rotate(self, axis, quarter_turns)
    }
}

impl Index<Axis> for GridVector {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for GridVector {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl Neg for GridVector {
    type Output = GridVector;
    fn neg(self) -> Self {
        Self(self.0.map(|s| -s))
    }
}
impl fmt::Display for GridVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

/// Rotates `vector` about `axis` by `quarter_turns` multiples of 90 degrees
/// (counterclockwise when viewed from the positive end of the axis), then
/// snaps each component to the nearest lattice point.
///
/// The cube's rotations form a finite group, so snapping after every rotation
/// is exact.
pub fn rotate(vector: GridVector, axis: Axis, quarter_turns: i32) -> GridVector {
    let angle = quarter_turns.rem_euclid(4) as Float * std::f64::consts::FRAC_PI_2;
    let (sin, cos) = angle.sin_cos();

    // Rodrigues' rotation formula
    let e = axis.unit().floats();
    let p = vector.floats();
    let e_dot_p: Float = std::iter::zip(e, p).map(|(l, r)| l * r).sum();
    let e_cross_p = [
        e[1] * p[2] - e[2] * p[1],
        e[2] * p[0] - e[0] * p[2],
        e[0] * p[1] - e[1] * p[0],
    ];
    let rotated: [Float; 3] =
        std::array::from_fn(|i| p[i] * cos + e_cross_p[i] * sin + e[i] * e_dot_p * (1.0 - cos));

    GridVector(rotated.map(Sign::from_float_rounded))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn any_grid_vector() -> impl Strategy<Value = GridVector> {
        (-1..=1_i32, -1..=1_i32, -1..=1_i32)
            .prop_map(|(x, y, z)| GridVector::from_ints(x, y, z).expect("in range"))
    }

    fn any_axis() -> impl Strategy<Value = Axis> {
        (0..3_usize).prop_map(|i| Axis::from_int(i).expect("in range"))
    }

    #[test]
    fn test_quarter_turns_follow_right_hand_rule() {
        // Counterclockwise about +X takes +Y to +Z.
        assert_eq!(GridVector::UP.rotated(Axis::X, 1), GridVector::FRONT);
        // Clockwise about +X takes +Y to -Z.
        assert_eq!(GridVector::UP.rotated(Axis::X, -1), GridVector::BACK);
        // Counterclockwise about +Y takes +Z to +X.
        assert_eq!(GridVector::FRONT.rotated(Axis::Y, 1), GridVector::RIGHT);
        // Counterclockwise about +Z takes +X to +Y.
        assert_eq!(GridVector::RIGHT.rotated(Axis::Z, 1), GridVector::UP);
        assert_eq!(GridVector::RIGHT.rotated(Axis::Z, 2), GridVector::LEFT);
    }

    #[test]
    fn test_rotation_keeps_axis_component() {
        let corner = GridVector::from_ints(1, 1, 1).expect("in range");
        assert_eq!(
            corner.rotated(Axis::X, -1),
            GridVector::from_ints(1, 1, -1).expect("in range"),
        );
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(
            GridVector::UP.cross(GridVector::FRONT),
            Ok(GridVector::RIGHT),
        );
        assert_eq!(
            GridVector::DOWN.cross(GridVector::FRONT),
            Ok(GridVector::LEFT),
        );
        let a = GridVector::from_ints(1, 1, 0).expect("in range");
        let b = GridVector::from_ints(-1, 1, 0).expect("in range");
        assert_eq!(a.cross(b), Err(OutOfRange(2)));
    }

    #[test]
    fn test_unit_axis() {
        assert_eq!(GridVector::BACK.unit_axis(), Some((Axis::Z, Sign::Neg)));
        assert_eq!(GridVector::ZERO.unit_axis(), None);
        let edge = GridVector::from_ints(0, 1, 1).expect("in range");
        assert_eq!(edge.unit_axis(), None);
        assert_eq!(edge.nonzero_count(), 2);
    }

    proptest! {
        #[test]
        fn proptest_four_quarter_turns_are_identity(v in any_grid_vector(), axis in any_axis()) {
            let mut w = v;
            for _ in 0..4 {
                w = w.rotated(axis, 1);
            }
            prop_assert_eq!(w, v);
        }

        #[test]
        fn proptest_rotation_inverse(v in any_grid_vector(), axis in any_axis(), turns in -3..=3_i32) {
            prop_assert_eq!(v.rotated(axis, turns).rotated(axis, -turns), v);
        }

        #[test]
        fn proptest_rotation_preserves_dot_product(
            a in any_grid_vector(),
            b in any_grid_vector(),
            axis in any_axis(),
            turns in -3..=3_i32,
        ) {
            prop_assert_eq!(a.rotated(axis, turns).dot(b.rotated(axis, turns)), a.dot(b));
        }
    }
}
