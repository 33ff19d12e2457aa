//! Sign enum.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::{EPSILON, Float};

/// Positive, negative, or zero.
///
/// This is the type of each component of a [`crate::GridVector`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.int())
    }
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl TryFrom<i32> for Sign {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sign::Neg),
            0 => Ok(Sign::Zero),
            1 => Ok(Sign::Pos),
            _ => Err(value),
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> Float {
        self.int() as Float
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Rounds a floating-point number to the nearest sign.
    ///
    /// Values that round outside of `-1..=1` are clamped. That never happens
    /// for a rotated grid vector, so it is reported as a bug.
    pub fn from_float_rounded(x: Float) -> Sign {
        let rounded = x.round();
        if (x - rounded).abs() > EPSILON {
            log::trace!("snapping {x} to lattice point {rounded}");
        }
        match rounded as i32 {
            0 => Sign::Zero,
            i if i < 0 => {
                if i < -1 {
                    debug_panic!("component {x} out of range for grid vector");
                }
                Sign::Neg
            }
            i => {
                if i > 1 {
                    debug_panic!("component {x} out of range for grid vector");
                }
                Sign::Pos
            }
        }
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_rounding() {
        assert_eq!(Sign::from_float_rounded(0.9999999), Sign::Pos);
        assert_eq!(Sign::from_float_rounded(-1.0000001), Sign::Neg);
        assert_eq!(Sign::from_float_rounded(6.123233995736766e-17), Sign::Zero);
        assert_eq!(Sign::from_float_rounded(-0.4), Sign::Zero);
    }

    #[test]
    fn test_sign_arithmetic() {
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Zero, Sign::Zero);
        assert_eq!(-Sign::Pos, Sign::Neg);
        assert_eq!(Sign::try_from(2), Err(2));
        assert_eq!(Sign::try_from(-1), Ok(Sign::Neg));
    }
}
