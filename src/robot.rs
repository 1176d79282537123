//! Robot state and orientation arithmetic.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The four cardinal directions a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// All facings in clockwise order starting from north.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// One step counter-clockwise (90 degrees left).
    pub fn rotate_left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// One step clockwise (90 degrees right).
    pub fn rotate_right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Unit step on the table for one forward move. North is `+y`, east is `+x`.
    pub fn delta(self) -> IVec2 {
        match self {
            Facing::North => IVec2::Y,
            Facing::South => IVec2::NEG_Y,
            Facing::East => IVec2::X,
            Facing::West => IVec2::NEG_X,
        }
    }

    /// The instruction keyword for this facing.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::South => "SOUTH",
            Facing::East => "EAST",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four facing keywords.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown facing `{0}`")]
pub struct UnknownFacing(pub String);

impl FromStr for Facing {
    type Err = UnknownFacing;

    /// Only the exact uppercase keywords are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Facing::North),
            "SOUTH" => Ok(Facing::South),
            "EAST" => Ok(Facing::East),
            "WEST" => Ok(Facing::West),
            other => Err(UnknownFacing(other.to_string())),
        }
    }
}

/// Where a robot stands and which way it faces.
///
/// Positions are plain values: every move produces a new `Position`, and none
/// of the operations here look at table bounds. Bounds checking happens in
/// [`SquareTable::place`](crate::table::SquareTable::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Table cell as `(x, y)`.
    pub cell: IVec2,
    pub facing: Facing,
}

impl Position {
    pub fn new(x: i32, y: i32, facing: Facing) -> Self {
        Self {
            cell: IVec2::new(x, y),
            facing,
        }
    }

    pub fn x(&self) -> i32 {
        self.cell.x
    }

    pub fn y(&self) -> i32 {
        self.cell.y
    }

    /// Same cell, facing rotated left.
    pub fn rotate_left(self) -> Self {
        Self {
            facing: self.facing.rotate_left(),
            ..self
        }
    }

    /// Same cell, facing rotated right.
    pub fn rotate_right(self) -> Self {
        Self {
            facing: self.facing.rotate_right(),
            ..self
        }
    }

    /// One cell forward along the current facing. Saturates instead of
    /// overflowing, so the result is still rejected by any table.
    pub fn advance(self) -> Self {
        Self {
            cell: self.cell.saturating_add(self.facing.delta()),
            ..self
        }
    }

    /// Renders as `"{x},{y} {FACING}"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}", self.cell.x, self.cell.y, self.facing)
    }
}

/// Opaque identity of a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotId(pub Uuid);

impl RobotId {
    /// A fresh random (v4) id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RobotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The toy robot.
///
/// `position` is `None` until the first PLACE is accepted by the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub position: Option<Position>,
}

impl Robot {
    /// A new robot with a fresh id and no position.
    pub fn new() -> Self {
        Self {
            id: RobotId::new(),
            position: None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_cycle() {
        assert_eq!(Facing::North.rotate_left(), Facing::West);
        assert_eq!(Facing::West.rotate_left(), Facing::South);
        assert_eq!(Facing::South.rotate_left(), Facing::East);
        assert_eq!(Facing::East.rotate_left(), Facing::North);
    }

    #[test]
    fn right_cycle() {
        assert_eq!(Facing::North.rotate_right(), Facing::East);
        assert_eq!(Facing::East.rotate_right(), Facing::South);
        assert_eq!(Facing::South.rotate_right(), Facing::West);
        assert_eq!(Facing::West.rotate_right(), Facing::North);
    }

    #[test]
    fn advance_changes_one_axis() {
        let p = Position::new(2, 2, Facing::North);
        assert_eq!(p.advance(), Position::new(2, 3, Facing::North));
        assert_eq!(p.rotate_right().advance(), Position::new(3, 2, Facing::East));
        assert_eq!(
            Position::new(2, 2, Facing::South).advance(),
            Position::new(2, 1, Facing::South)
        );
        assert_eq!(
            Position::new(2, 2, Facing::West).advance(),
            Position::new(1, 2, Facing::West)
        );
    }

    #[test]
    fn advance_does_not_check_bounds() {
        let p = Position::new(0, 0, Facing::West).advance();
        assert_eq!(p.x(), -1);
        assert_eq!(p.y(), 0);
    }

    #[test]
    fn render_format() {
        assert_eq!(Position::new(3, 2, Facing::North).render(), "3,2 NORTH");
        assert_eq!(Position::new(0, 0, Facing::West).to_string(), "0,0 WEST");
    }

    #[test]
    fn facing_parse_is_case_sensitive() {
        assert_eq!("EAST".parse::<Facing>(), Ok(Facing::East));
        assert!("east".parse::<Facing>().is_err());
        assert!("NORTH ".parse::<Facing>().is_err());
    }

    #[test]
    fn new_robot_is_unplaced() {
        let a = Robot::new();
        let b = Robot::new();
        assert!(!a.is_placed());
        assert_ne!(a.id, b.id);
    }
}
