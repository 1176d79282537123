//! The five robot operations and the kind-indexed table that dispatches them.
//!
//! Every operation reads the robot and the table and returns a candidate
//! [`Outcome`]; none of them touches the robot directly. Movement goes through
//! [`SquareTable::place`], so a rejected move leaves everything as it was.

use crate::error::{Result, RobotError};
use crate::parser::parse_place;
use crate::robot::{Position, Robot};
use crate::table::SquareTable;
use std::fmt;

/// Recognized instruction kinds, in recognition priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl InstructionKind {
    pub fn keyword(self) -> &'static str {
        match self {
            InstructionKind::Place => "PLACE",
            InstructionKind::Move => "MOVE",
            InstructionKind::Left => "LEFT",
            InstructionKind::Right => "RIGHT",
            InstructionKind::Report => "REPORT",
        }
    }

    /// The operation registered for this kind.
    pub fn action(self) -> Action {
        ACTIONS[self as usize]
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What an accepted operation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A validated position for the caller to commit.
    Moved(Position),
    /// Text for the output channel.
    Report(String),
    /// Nothing to commit or print.
    Nothing,
}

/// Signature shared by every operation: raw instruction text, current robot,
/// and the table used for validation.
pub type Action = fn(&str, &Robot, &mut SquareTable) -> Result<Outcome>;

/// Indexed by `InstructionKind as usize`.
const ACTIONS: [Action; 5] = [place_at, move_forward, move_left, move_right, report];

fn current(robot: &Robot) -> Result<Position> {
    robot.position.ok_or(RobotError::NotPlaced)
}

/// PLACE x,y,F: validates the literal requested position.
pub fn place_at(raw: &str, robot: &Robot, table: &mut SquareTable) -> Result<Outcome> {
    let target = parse_place(raw)?;
    table.place(robot, target).map(Outcome::Moved)
}

/// MOVE: one cell forward, unless that would leave the table.
pub fn move_forward(_raw: &str, robot: &Robot, table: &mut SquareTable) -> Result<Outcome> {
    let target = current(robot)?.advance();
    table.place(robot, target).map(Outcome::Moved)
}

/// LEFT: rotate 90 degrees counter-clockwise in place.
pub fn move_left(_raw: &str, robot: &Robot, table: &mut SquareTable) -> Result<Outcome> {
    let target = current(robot)?.rotate_left();
    table.place(robot, target).map(Outcome::Moved)
}

/// RIGHT: rotate 90 degrees clockwise in place.
pub fn move_right(_raw: &str, robot: &Robot, table: &mut SquareTable) -> Result<Outcome> {
    let target = current(robot)?.rotate_right();
    table.place(robot, target).map(Outcome::Moved)
}

/// REPORT: renders the current position, or nothing if the robot is unplaced.
pub fn report(_raw: &str, robot: &Robot, _table: &mut SquareTable) -> Result<Outcome> {
    Ok(robot
        .position
        .map_or(Outcome::Nothing, |p| Outcome::Report(p.render())))
}
