use crate::error::{Result, RobotError};
use crate::robot::{Position, Robot, RobotId};
use std::collections::BTreeSet;

/// A square table of `dimension x dimension` cells.
///
/// Valid coordinates are `0..dimension` on both axes. The table keeps a
/// registry of the robots that have been placed on it; the robots themselves
/// are owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareTable {
    dimension: u32,

    /// Ids of robots that have been placed on the table.
    placed: BTreeSet<RobotId>,
}

impl SquareTable {
    /// Coordinates are `i32`, so the side length is capped at `i32::MAX`.
    pub fn new(dimension: u32) -> Result<Self> {
        if dimension == 0 || i32::try_from(dimension).is_err() {
            return Err(RobotError::InvalidDimension(dimension));
        }
        Ok(Self {
            dimension,
            placed: BTreeSet::new(),
        })
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// True iff `position` lies on the table. Pure predicate.
    pub fn can_place(&self, position: &Position) -> bool {
        let limit = i64::from(self.dimension);
        let in_range = |v: i32| (0..limit).contains(&i64::from(v));
        in_range(position.x()) && in_range(position.y())
    }

    /// The single gate every move passes through.
    ///
    /// Rejects positions off the table without touching any state. Accepted
    /// positions register the robot (a no-op if it is already registered) and
    /// are handed back for the caller to commit.
    pub fn place(&mut self, robot: &Robot, position: Position) -> Result<Position> {
        if !self.can_place(&position) {
            return Err(RobotError::OutOfBounds {
                position,
                dimension: self.dimension,
            });
        }
        self.placed.insert(robot.id);
        Ok(position)
    }

    pub fn is_placed(&self, id: &RobotId) -> bool {
        self.placed.contains(id)
    }

    pub fn placed(&self) -> impl Iterator<Item = &RobotId> {
        self.placed.iter()
    }
}
