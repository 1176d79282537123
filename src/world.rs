//! Sequencer that runs parsed instructions against one robot on one table.
//!
//! The entry point is [`World`]. Build it from a [`WorldConfig`], then call
//! [`World::process`] with the output of
//! [`InstructionParser::construct`](crate::parser::InstructionParser::construct).

use crate::action::{InstructionKind, Outcome};
use crate::error::Result;
use crate::parser::Instruction;
use crate::robot::{Position, Robot};
use crate::table::SquareTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, trace};

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square table. Default: 5.
    pub dimension: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { dimension: 5 }
    }
}

impl WorldConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Sequencer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequencerState {
    /// Only PLACE instructions are attempted.
    #[default]
    AwaitingPlace,
    /// Every instruction is attempted.
    Active,
}

/// Serializable view of a world after a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub dimension: u32,
    pub state: SequencerState,
    pub robot: Option<Robot>,
}

/// One robot on one table, driven instruction by instruction.
#[derive(Debug)]
pub struct World {
    table: SquareTable,
    robot: Option<Robot>,
    state: SequencerState,
}

impl World {
    /// Creates a world with an empty table. Fails if the dimension is zero or
    /// wider than `i32::MAX`.
    pub fn new(config: &WorldConfig) -> Result<Self> {
        Ok(Self::with_table(SquareTable::new(config.dimension)?))
    }

    pub fn with_table(table: SquareTable) -> Self {
        Self {
            table,
            robot: None,
            state: SequencerState::AwaitingPlace,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The robot, once a PLACE has been attempted.
    pub fn robot(&self) -> Option<&Robot> {
        self.robot.as_ref()
    }

    pub fn position(&self) -> Option<Position> {
        self.robot.as_ref().and_then(|r| r.position)
    }

    pub fn table(&self) -> &SquareTable {
        &self.table
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            dimension: self.table.dimension(),
            state: self.state,
            robot: self.robot.clone(),
        }
    }

    /// Runs every instruction in order and returns the reports produced.
    pub fn process<'a, I>(&mut self, instructions: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        let mut reports = Vec::new();
        let mut seen = 0usize;
        for instruction in instructions {
            seen += 1;
            if let Some(report) = self.step(instruction) {
                reports.push(report);
            }
        }
        info!(
            instructions = seen,
            reports = reports.len(),
            state = ?self.state,
            "run finished"
        );
        reports
    }

    /// Applies a single instruction. Returns the report text if it was a
    /// REPORT that produced output.
    pub fn step(&mut self, instruction: &Instruction) -> Option<String> {
        if self.state == SequencerState::AwaitingPlace {
            if instruction.kind != InstructionKind::Place {
                debug!(instruction = %instruction.raw, "skipped before first valid PLACE");
                return None;
            }
            trace!("AWAITING_PLACE -> ACTIVE");
            self.state = SequencerState::Active;
        }

        let robot = self.robot.get_or_insert_with(|| {
            let robot = Robot::new();
            debug!(id = %robot.id, "robot created");
            robot
        });

        let mut report = None;
        match (instruction.action())(&instruction.raw, robot, &mut self.table) {
            Ok(Outcome::Moved(position)) => {
                trace!(%position, "committed");
                robot.position = Some(position);
            }
            Ok(Outcome::Report(text)) => report = Some(text),
            Ok(Outcome::Nothing) => {}
            Err(err) => debug!(instruction = %instruction.raw, error = %err, "rejected"),
        }

        if robot.position.is_none() {
            trace!("ACTIVE -> AWAITING_PLACE");
            self.state = SequencerState::AwaitingPlace;
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::InstructionParser;
    use crate::robot::Facing;

    fn run(lines: &[&str]) -> (World, Vec<String>) {
        let instructions = InstructionParser::new(lines.iter().copied()).construct();
        let mut world = World::new(&WorldConfig::default()).unwrap();
        let reports = world.process(&instructions);
        (world, reports)
    }

    #[test]
    fn rejected_first_place_rearms() {
        let (world, reports) = run(&["PLACE 1,10,EAST", "MOVE", "REPORT"]);
        assert!(reports.is_empty());
        assert_eq!(world.state(), SequencerState::AwaitingPlace);
        // The robot exists but was never placed.
        let robot = world.robot().unwrap();
        assert_eq!(robot.position, None);
        assert!(!world.table().is_placed(&robot.id));
    }

    #[test]
    fn recovers_after_rejected_place() {
        let (world, reports) = run(&[
            "PLACE 1,10,EAST",
            "PLACE 1,2,EAST",
            "MOVE",
            "MOVES",
            "LEFT",
            "REPORT",
        ]);
        assert_eq!(reports, ["2,2 NORTH"]);
        assert_eq!(world.position(), Some(Position::new(2, 2, Facing::North)));
        assert_eq!(world.state(), SequencerState::Active);
    }

    #[test]
    fn config_from_yaml() {
        let config = WorldConfig::from_yaml_str("dimension: 8\n").unwrap();
        assert_eq!(config.dimension, 8);
        assert_eq!(WorldConfig::from_yaml_str("{}").unwrap(), WorldConfig::default());
        assert!(WorldConfig::from_yaml_str("dimension: -1").is_err());
    }

    #[test]
    fn zero_dimension_world_fails() {
        assert!(World::new(&WorldConfig { dimension: 0 }).is_err());
    }

    #[test]
    fn oversized_dimension_world_fails() {
        // Wider than any i32 coordinate; in-bounds PLACEs could not be parsed.
        assert!(World::new(&WorldConfig { dimension: u32::MAX }).is_err());

        let instructions =
            InstructionParser::new(["PLACE 2147483645,0,EAST", "MOVE", "MOVE", "REPORT"])
                .construct();
        let mut world = World::new(&WorldConfig {
            dimension: i32::MAX as u32,
        })
        .unwrap();
        assert_eq!(world.process(&instructions), ["2147483646,0 EAST"]);
    }
}
