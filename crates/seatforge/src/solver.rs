//! Solver entry point that hides all configuration wiring.

use seatforge_config::SolverConfig;
use seatforge_core::Problem;
use seatforge_solver::{SeatingSolver, SolveReport};

/// Config file picked up by [`run_solver`] from the working directory.
pub const CONFIG_FILE: &str = "seatforge.toml";

/// Solves a problem with the configuration in `seatforge.toml`, falling
/// back to defaults when the file is missing or unreadable.
///
/// With the `console` feature, solver events are printed to stdout.
pub fn run_solver(problem: &Problem) -> SolveReport {
    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    run_solver_with_config(problem, config)
}

/// Solves a problem with an explicit configuration.
pub fn run_solver_with_config(problem: &Problem, config: SolverConfig) -> SolveReport {
    #[cfg(feature = "console")]
    crate::console::init();

    SeatingSolver::new().with_config(config).solve_with_stats(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::{Constraint, SolveError};

    #[test]
    fn test_run_solver_with_config() {
        let problem = Problem::builder(2, 2)
            .students(["Alice", "Bob"])
            .constraint(Constraint::must_be_in_row("Bob", 1))
            .build()
            .unwrap();
        let report = run_solver_with_config(&problem, SolverConfig::new().with_random_seed(1));
        let seating = report.result.unwrap();
        assert_eq!(seating.position_of("Bob").unwrap().row, 1);
    }

    #[test]
    fn test_run_solver_without_config_file() {
        let problem = Problem::builder(1, 1)
            .students(["Alice", "Bob"])
            .build()
            .unwrap();
        assert!(matches!(
            run_solver(&problem).result,
            Err(SolveError::InsufficientSeats { .. })
        ));
    }
}
