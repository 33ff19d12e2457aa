use std::fmt;

use crate::{AXIS_NAMES, GridVector, Sign};

/// A 3-dimensional axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.int();
        write!(f, "{}", &AXIS_NAMES[i..=i])
    }
}
impl Axis {
    /// All three axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
    /// Returns the axis with the given index, or `None` if it is out of range.
    pub const fn from_int(i: usize) -> Option<Self> {
        match i {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns the unit vector along the positive end of this axis.
    pub fn unit(self) -> GridVector {
        self.vector(Sign::Pos)
    }
    /// Returns the unit vector along this axis with the given sign.
    pub fn vector(self, sign: Sign) -> GridVector {
        let mut ret = GridVector::ZERO;
        ret[self] = sign;
        ret
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        Self::ALL.into_iter()
    }
}
