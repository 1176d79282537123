//! Sources of raw instruction lines.

use crate::error::Result;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

/// Anything that can hand over an ordered list of instruction lines.
pub trait InstructionSource {
    /// Reads every line, trimmed of surrounding whitespace.
    fn read(&self) -> Result<Vec<String>>;
}

fn read_lines(reader: impl Read) -> Result<Vec<String>> {
    BufReader::new(reader)
        .lines()
        .map(|line| Ok(line?.trim().to_string()))
        .collect()
}

/// Lines from a file on disk.
#[derive(Clone, Debug)]
pub struct FileInput {
    pub path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InstructionSource for FileInput {
    fn read(&self) -> Result<Vec<String>> {
        read_lines(std::fs::File::open(&self.path)?)
    }
}

/// Lines from standard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinInput;

impl InstructionSource for StdinInput {
    fn read(&self) -> Result<Vec<String>> {
        read_lines(std::io::stdin().lock())
    }
}

/// Lines held in memory.
#[derive(Clone, Debug, Default)]
pub struct VecInput(pub Vec<String>);

impl InstructionSource for VecInput {
    fn read(&self) -> Result<Vec<String>> {
        Ok(self.0.iter().map(|line| line.trim().to_string()).collect())
    }
}
