//! `seatforge` command-line tool.

mod cli;
mod error;
mod output;
mod problem_file;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use seatforge::{SeatingSolver, SolverConfig};

use cli::{Cli, Command, Format, SolveArgs};
use error::CliError;
use problem_file::ProblemFile;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "seatforge_solver=info",
        1 => "seatforge_solver=debug",
        _ => "seatforge_solver=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Solve(args) => solve(args),
        Command::Check { problem } => {
            let problem = ProblemFile::load(&problem)?.into_problem()?;
            problem.validate()?;
            print!("{}", output::render_summary(&problem));
            Ok(())
        }
    }
}

fn solve(args: SolveArgs) -> Result<(), CliError> {
    let problem = ProblemFile::load(&args.problem)?.into_problem()?;

    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(limit) = args.node_limit {
        config = config.with_node_limit(limit);
    }
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }
    config.validate()?;

    let report = SeatingSolver::new().with_config(config).solve_with_stats(&problem);

    match args.format {
        Format::Json => println!("{}", output::render_json(&report.result)?),
        Format::Text => {
            if let Ok(seating) = &report.result {
                print!("{}", output::render_seating(seating));
            }
        }
    }
    if args.stats {
        eprintln!("{}", output::render_stats(&report.stats));
    }

    report.result.map(|_| ()).map_err(CliError::from)
}
