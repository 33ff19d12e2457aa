use cubemath::Axis;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::Move;

/// On-screen button that turns one face.
///
/// Button names are relative to the positive end of the axis, not to the face
/// itself, so `left_cw` turns the left face counterclockwise as seen looking
/// at the left face.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum InputCommand {
    RightCw,
    RightCcw,
    LeftCw,
    LeftCcw,
    TopCw,
    TopCcw,
    BottomCw,
    BottomCcw,
    FrontCw,
    FrontCcw,
    BackCw,
    BackCcw,
}
impl InputCommand {
    /// Returns the button's `(axis, offset, direction)`.
    pub fn axis_offset_direction(self) -> (Axis, i32, i32) {
        use InputCommand::*;

        match self {
            RightCw => (Axis::X, 1, 1),
            RightCcw => (Axis::X, 1, -1),
            LeftCw => (Axis::X, -1, 1),
            LeftCcw => (Axis::X, -1, -1),
            TopCw => (Axis::Y, 1, 1),
            TopCcw => (Axis::Y, 1, -1),
            BottomCw => (Axis::Y, -1, 1),
            BottomCcw => (Axis::Y, -1, -1),
            FrontCw => (Axis::Z, 1, 1),
            FrontCcw => (Axis::Z, 1, -1),
            BackCw => (Axis::Z, -1, 1),
            BackCcw => (Axis::Z, -1, -1),
        }
    }

    /// Returns the move for the button.
    pub fn to_move(self) -> Move {
        let (axis, offset, direction) = self.axis_offset_direction();
        Move::new(axis, offset, direction)
    }

    /// Returns the name of the button, such as `left_cw`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_button_names() {
        assert_eq!("left_cw".parse(), Ok(InputCommand::LeftCw));
        assert_eq!(InputCommand::LeftCw.to_move().to_string(), "L'");
        assert_eq!(InputCommand::BottomCcw.to_move().to_string(), "D");
        assert!("sideways_cw".parse::<InputCommand>().is_err());
        for cmd in InputCommand::iter() {
            assert_eq!(cmd.name().parse(), Ok(cmd));
        }
    }

    #[test]
    fn test_buttons_cover_every_move() {
        let mut moves: Vec<_> = InputCommand::iter().map(InputCommand::to_move).collect();
        moves.sort_by_key(|m| (m.axis(), m.offset(), m.direction()));
        let mut all = Move::ALL.to_vec();
        all.sort_by_key(|m| (m.axis(), m.offset(), m.direction()));
        assert_eq!(moves, all);
    }
}
