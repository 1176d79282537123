//! Turns raw instruction lines into recognized [`Instruction`]s.
//!
//! Each line is tried against the recognizers in a fixed order (PLACE, MOVE,
//! LEFT, RIGHT, REPORT). Lines that match none are dropped.

use crate::action::{Action, InstructionKind};
use crate::error::{Result, RobotError};
use crate::robot::{Facing, Position};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PLACE ([0-9]+),([0-9]+),(NORTH|SOUTH|EAST|WEST)$").expect("valid PLACE regex")
});

/// A recognized instruction: the original text and its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub raw: String,
    pub kind: InstructionKind,
}

impl Instruction {
    /// The operation that executes this instruction.
    pub fn action(&self) -> Action {
        self.kind.action()
    }
}

type Recognizer = fn(&str) -> bool;

/// Recognizers in priority order.
const RECOGNIZERS: [(InstructionKind, Recognizer); 5] = [
    (InstructionKind::Place, is_place),
    (InstructionKind::Move, is_move),
    (InstructionKind::Left, is_left),
    (InstructionKind::Right, is_right),
    (InstructionKind::Report, is_report),
];

fn is_place(line: &str) -> bool {
    PLACE_RE.is_match(line)
}

// Bare keywords only; no arguments or trailing text.
fn is_move(line: &str) -> bool {
    line == "MOVE"
}

fn is_left(line: &str) -> bool {
    line == "LEFT"
}

fn is_right(line: &str) -> bool {
    line == "RIGHT"
}

fn is_report(line: &str) -> bool {
    line == "REPORT"
}

/// Classifies a single line, or `None` if no recognizer accepts it.
pub fn recognize(line: &str) -> Option<InstructionKind> {
    RECOGNIZERS
        .iter()
        .find(|(_, matches)| matches(line))
        .map(|(kind, _)| *kind)
}

/// Extracts the target position from a PLACE instruction.
///
/// Fails with [`RobotError::MalformedPlace`] when the text does not match the
/// PLACE grammar or a coordinate does not fit in an `i32`.
pub fn parse_place(raw: &str) -> Result<Position> {
    let malformed = || RobotError::MalformedPlace(raw.to_string());
    let caps = PLACE_RE.captures(raw).ok_or_else(malformed)?;
    let x = caps[1].parse::<i32>().map_err(|_| malformed())?;
    let y = caps[2].parse::<i32>().map_err(|_| malformed())?;
    let facing = caps[3].parse::<Facing>().map_err(|_| malformed())?;
    Ok(Position::new(x, y, facing))
}

/// Parses an ordered sequence of instruction lines.
#[derive(Clone, Debug, Default)]
pub struct InstructionParser {
    lines: Vec<String>,
}

impl InstructionParser {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the recognized instructions in input order. Unrecognized lines
    /// are skipped; duplicates are kept.
    pub fn construct(&self) -> Vec<Instruction> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| match recognize(line) {
                Some(kind) => Some(Instruction {
                    raw: line.clone(),
                    kind,
                }),
                None => {
                    debug!(line = idx + 1, text = %line, "dropping unrecognized instruction");
                    None
                }
            })
            .collect()
    }
}
