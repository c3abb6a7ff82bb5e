//! Solver entry points.
//!
//! Logging levels:
//! - **INFO**: Solve start/end
//! - **WARN**: Capacity rejection, exhausted search budget
//! - **DEBUG**: Student selected at each search level
//! - **TRACE**: Every placement and backtrack

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use seatforge_config::SolverConfig;
use seatforge_core::{
    Constraint, Problem, SeatLayout, SeatRestriction, Seating, SolveError, SolveResult, Student,
};

use crate::scope::SolverScope;
use crate::search::{BacktrackingSearch, SearchOutcome};
use crate::stats::SearchStats;
use crate::termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};

/// Result of a solve together with its search statistics.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub result: SolveResult,
    pub stats: SearchStats,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> SolveResult {
        self.result
    }
}

/// Seating solver.
///
/// Holds the configuration and an optional extra termination. A solver
/// can be reused for any number of problems; [`terminate_early`] cancels
/// the solve currently running on another thread.
///
/// [`terminate_early`]: SeatingSolver::terminate_early
///
/// # Example
///
/// ```
/// use seatforge_core::{Constraint, Problem};
/// use seatforge_config::SolverConfig;
/// use seatforge_solver::SeatingSolver;
///
/// let problem = Problem::builder(2, 3)
///     .students(["Alice", "Bob", "Cara"])
///     .constraint(Constraint::together("Alice", "Bob"))
///     .constraint(Constraint::must_be_in_row("Cara", 1))
///     .build()
///     .unwrap();
///
/// let solver = SeatingSolver::new().with_config(SolverConfig::new().with_random_seed(7));
/// let seating = solver.solve(&problem).unwrap();
///
/// let alice = seating.position_of("Alice").unwrap();
/// let bob = seating.position_of("Bob").unwrap();
/// assert!(alice.is_horizontally_adjacent(&bob));
/// assert_eq!(seating.position_of("Cara").unwrap().row, 1);
/// ```
#[derive(Debug)]
pub struct SeatingSolver<T = NoTermination> {
    config: SolverConfig,
    termination: T,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
}

impl SeatingSolver<NoTermination> {
    /// Creates a solver with the default configuration: no search budget,
    /// input validation on, fresh randomness per solve.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            termination: NoTermination,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SeatingSolver<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Termination + Sync> SeatingSolver<T> {
    /// Adds a termination checked alongside the configured budgets.
    pub fn with_termination<U: Termination + Sync>(self, termination: U) -> SeatingSolver<U> {
        SeatingSolver {
            config: self.config,
            termination,
            terminate_early_flag: self.terminate_early_flag,
            solving: self.solving,
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Requests early termination of the running solve.
    ///
    /// Thread-safe. Returns false if no solve is running.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Solves a problem, returning the first valid seating found.
    pub fn solve(&self, problem: &Problem) -> SolveResult {
        self.solve_with_stats(problem).result
    }

    /// Solves a problem, seeding the search from the configured random seed
    /// or from fresh thread-local randomness.
    pub fn solve_with_stats(&self, problem: &Problem) -> SolveReport {
        match self.config.random_seed {
            Some(seed) => self.solve_with_rng(problem, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.solve_with_rng(problem, &mut rand::rng()),
        }
    }

    /// Solves a problem drawing within-row seat order from `rng`.
    ///
    /// A seeded generator makes the result reproducible.
    pub fn solve_with_rng<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> SolveReport {
        self.terminate_early_flag.store(false, Ordering::SeqCst);
        self.solving.store(true, Ordering::SeqCst);

        let mut scope = SolverScope::new();
        scope.start_solving();

        info!(
            event = "solve_start",
            students = problem.students.len(),
            constraints = problem.constraints.len(),
            rows = problem.rows(),
            cols = problem.cols(),
            available_seats = problem.layout.available_count(),
        );

        let result = self.run(problem, &mut scope, rng);
        let stats = scope.finish();
        self.solving.store(false, Ordering::SeqCst);

        let duration_ms = stats.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(
                event = "solve_end",
                outcome = "solved",
                nodes = stats.nodes_visited,
                backtracks = stats.backtracks,
                duration_ms,
            ),
            Err(err) => info!(
                event = "solve_end",
                outcome = "failed",
                reason = %err,
                nodes = stats.nodes_visited,
                backtracks = stats.backtracks,
                duration_ms,
            ),
        }

        SolveReport { result, stats }
    }

    fn run<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        scope: &mut SolverScope,
        rng: &mut R,
    ) -> SolveResult {
        if self.config.validate_input {
            problem.validate()?;
        }

        let students = problem.students.len();
        let seats = problem.layout.available_count();
        if students > seats {
            warn!(event = "capacity_rejected", students, seats);
            return Err(SolveError::InsufficientSeats { students, seats });
        }
        if students == 0 {
            return Ok(Seating::new(problem.rows(), problem.cols()));
        }

        let termination = OrTermination((
            ExternalTermination::new(self.terminate_early_flag.clone()),
            &self.termination,
            budget(&self.config),
        ));
        let mut search = BacktrackingSearch::new(problem, &termination)?;
        match search.run(scope, rng) {
            SearchOutcome::Solved(seating) => Ok(seating),
            SearchOutcome::Exhausted => Err(SolveError::Unsatisfiable),
            SearchOutcome::Terminated if termination.is_cancelled(scope) => {
                Err(SolveError::Cancelled)
            }
            SearchOutcome::Terminated => {
                let nodes = scope.node_count();
                warn!(
                    event = "limit_reached",
                    nodes,
                    elapsed_ms = scope.elapsed().as_millis() as u64,
                );
                Err(SolveError::SearchLimitReached { nodes })
            }
        }
    }
}

type Budget = OrTermination<(Option<NodeCountTermination>, Option<TimeTermination>)>;

fn budget(config: &SolverConfig) -> Budget {
    OrTermination((
        config.node_limit().map(NodeCountTermination::new),
        config.time_limit().map(TimeTermination::new),
    ))
}

/// Solves a seating problem given as loose parts.
///
/// `availability` and `seat_genders` default to all-available and
/// unrestricted when absent. Uses the default solver configuration.
///
/// # Example
///
/// ```
/// use seatforge_core::{Constraint, Student};
///
/// let students = [Student::new("Alice"), Student::new("Bob")];
/// let constraints = [Constraint::absolute("Alice", 1, 1)];
///
/// let seating = seatforge_solver::solve(&students, &constraints, 2, 2, None, None).unwrap();
/// assert_eq!(seating.get((1, 1).into()), Some("Alice"));
/// ```
pub fn solve(
    students: &[Student],
    constraints: &[Constraint],
    rows: usize,
    cols: usize,
    availability: Option<&[Vec<bool>]>,
    seat_genders: Option<&[Vec<SeatRestriction>]>,
) -> SolveResult {
    let layout = SeatLayout::from_grids(rows, cols, availability, seat_genders)?;
    let problem = Problem::new(students.to_vec(), constraints.to_vec(), layout);
    solve_problem(&problem)
}

/// Solves a problem with the default solver configuration.
pub fn solve_problem(problem: &Problem) -> SolveResult {
    SeatingSolver::new().solve(problem)
}

/// Solves a problem drawing randomness from `rng`.
pub fn solve_with_rng<R: Rng + ?Sized>(problem: &Problem, rng: &mut R) -> SolveResult {
    SeatingSolver::new().solve_with_rng(problem, rng).result
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
