//! # toy-robot CLI
//!
//! Reads instructions from a file (or stdin) and prints every REPORT.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use toy_robot::{
    FileInput, InstructionParser, InstructionSource, StdinInput, World, WorldConfig,
};

#[derive(Parser)]
#[command(name = "toy-robot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Instruction file, one instruction per line (`-` for stdin)
    #[arg(default_value = "instructions.txt")]
    input: PathBuf,

    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Table side length (overrides the configuration file)
    #[arg(long, env = "TOY_ROBOT_DIMENSION")]
    dimension: Option<u32>,

    /// Print the final world state as JSON after the reports
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => WorldConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WorldConfig::default(),
    };
    if let Some(dimension) = cli.dimension {
        config.dimension = dimension;
    }

    let lines = if cli.input.as_os_str() == "-" {
        StdinInput.read()?
    } else {
        FileInput::new(&cli.input)
            .read()
            .with_context(|| format!("reading {}", cli.input.display()))?
    };

    let instructions = InstructionParser::new(lines).construct();
    let mut world = World::new(&config)?;
    for report in world.process(&instructions) {
        println!("{report}");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    }

    Ok(())
}
