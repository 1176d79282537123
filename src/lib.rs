//! # toy-robot
//!
//! Simulates a toy robot on a square table, driven by text instructions:
//! `PLACE x,y,F`, `MOVE`, `LEFT`, `RIGHT` and `REPORT`.
//!
//! Raw lines go through the [`InstructionParser`], which drops anything it
//! does not recognize. A [`World`] then runs the instructions in order,
//! ignoring everything until the first valid PLACE and refusing any move that
//! would take the robot off the table.
//!
//! ```
//! use toy_robot::{InstructionParser, World, WorldConfig};
//!
//! let instructions =
//!     InstructionParser::new(["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "REPORT"]).construct();
//! let mut world = World::new(&WorldConfig::default()).unwrap();
//! assert_eq!(world.process(&instructions), ["3,2 NORTH"]);
//! ```

pub mod action;
pub mod error;
pub mod input;
pub mod parser;
pub mod robot;
pub mod table;
pub mod world;

pub use action::*;
pub use error::*;
pub use input::*;
pub use parser::*;
pub use robot::*;
pub use table::*;
pub use world::*;
