//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Classroom seating solver
#[derive(Parser, Debug)]
#[command(name = "seatforge", version)]
#[command(about = "Assigns students to classroom seats under placement rules", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a classroom problem file and print the seating
    Solve(SolveArgs),

    /// Validate a classroom problem file and list its rules
    Check {
        /// Problem file (.toml, .yaml, .yml or .json)
        problem: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Problem file (.toml, .yaml, .yml or .json)
    pub problem: PathBuf,

    /// Solver configuration file (.toml, .yaml or .yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed for a reproducible seating
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up after this many tentative placements
    #[arg(long)]
    pub node_limit: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print search statistics after the seating
    #[arg(long)]
    pub stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}
