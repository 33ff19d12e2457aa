use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Twist animation preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Whether to speed up twists exponentially when many are queued.
    pub dynamic_twist_speed: bool,
    /// Duration of one quarter turn, in seconds.
    pub twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            dynamic_twist_speed: false,
            twist_duration: 0.125,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        EnumIter,
        Display,
        EnumString,
    )]
    #[serde(rename_all = "snake_case")]
    #[strum(serialize_all = "snake_case")]
    pub enum InterpolateFn {
        Linear,
        #[default]
        Cosine,
        Cubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match self {
                Self::Linear => t,
                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
                Self::Cubic => (3.0 - 2.0 * t) * t * t,
            }
        }
    }

}
