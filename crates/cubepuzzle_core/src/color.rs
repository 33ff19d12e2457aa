use std::fmt;
use std::ops::{Index, IndexMut};

use cubemath::GridVector;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Color of a sticker, named after the face where it belongs on a solved cube.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    strum::Display,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaceColor {
    /// Front face.
    Red,
    /// Back face.
    Orange,
    /// Left face.
    Green,
    /// Right face.
    Blue,
    /// Top face.
    White,
    /// Bottom face.
    Yellow,
}
impl FaceColor {
    /// All colors, in declaration order.
    pub const ALL: [FaceColor; FaceColor::COUNT] = [
        FaceColor::Red,
        FaceColor::Orange,
        FaceColor::Green,
        FaceColor::Blue,
        FaceColor::White,
        FaceColor::Yellow,
    ];

    /// Returns the direction that stickers of this color face on a solved
    /// cube.
    pub const fn home_normal(self) -> GridVector {
        match self {
            FaceColor::Red => GridVector::FRONT,
            FaceColor::Orange => GridVector::BACK,
            FaceColor::Green => GridVector::LEFT,
            FaceColor::Blue => GridVector::RIGHT,
            FaceColor::White => GridVector::UP,
            FaceColor::Yellow => GridVector::DOWN,
        }
    }
    /// Returns the color whose home direction is `normal`, or `None` if
    /// `normal` is not a face normal.
    pub fn from_home_normal(normal: GridVector) -> Option<Self> {
        Self::iter().find(|color| color.home_normal() == normal)
    }

    /// Returns an iterator over all colors.
    pub fn iter() -> FaceColorIter {
        <Self as IntoEnumIterator>::iter()
    }
}

/// Fixed-size map from [`FaceColor`] to `T`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerColor<T>([T; FaceColor::COUNT]);
impl<T> PerColor<T> {
    /// Constructs a map by calling `f` for each color.
    pub fn from_fn(mut f: impl FnMut(FaceColor) -> T) -> Self {
        Self(FaceColor::ALL.map(&mut f))
    }

    /// Returns an iterator over colors and their values.
    pub fn iter(&self) -> impl Iterator<Item = (FaceColor, &T)> {
        FaceColor::iter().zip(&self.0)
    }
    /// Returns an iterator over colors and mutable references to their values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FaceColor, &mut T)> {
        FaceColor::iter().zip(&mut self.0)
    }
}
impl<T> Index<FaceColor> for PerColor<T> {
    type Output = T;

    fn index(&self, color: FaceColor) -> &T {
        &self.0[color as usize]
    }
}
impl<T> IndexMut<FaceColor> for PerColor<T> {
    fn index_mut(&mut self, color: FaceColor) -> &mut T {
        &mut self.0[color as usize]
    }
}
impl<T: fmt::Display> fmt::Display for PerColor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (color, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{color}: {value}")?;
        }
        Ok(())
    }
}
