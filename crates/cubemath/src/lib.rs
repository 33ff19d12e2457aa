//! Integer grid vectors and quarter-turn rotations for a 3x3x3 cube.
//!
//! Every piece position and sticker normal on the cube lives on the integer
//! lattice `{-1, 0, 1}³`. Rotations are computed in floating point and then
//! snapped back onto the lattice, so repeated composition never accumulates
//! error.

/// Floating-point type used for rotation math.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod axis;
mod grid;
mod sign;

pub use axis::Axis;
pub use grid::{GridVector, OutOfRange, rotate};
pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::{AXIS_NAMES, Axis, EPSILON, Float, GridVector, Sign, rotate};
}
