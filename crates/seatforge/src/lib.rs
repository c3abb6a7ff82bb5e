//! SeatForge - A Classroom Seating Solver in Rust
//!
//! Describe the roster, the rules and the room, then solve.
//!
//! # Example
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let problem = Problem::builder(3, 4)
//!     .students(["Alice", "Bob", "Cara", "Dan", "Eve"])
//!     .constraint(Constraint::together("Alice", "Bob"))
//!     .constraint(Constraint::not_together("Cara", "Dan"))
//!     .constraint(Constraint::must_be_in_row("Eve", 2))
//!     .build()
//!     .unwrap();
//!
//! let seating = SeatingSolver::new().solve(&problem).unwrap();
//! assert_eq!(seating.position_of("Eve").unwrap().row, 2);
//! println!("{seating}");
//! ```

// Domain types
pub use seatforge_core::{
    Constraint, ConstraintKind, Gender, InputError, Position, Problem, ProblemBuilder,
    SeatLayout, SeatRestriction, Seating, SolveError, SolveOutcome, SolveResult, Student,
};

// Configuration
pub use seatforge_config::{ConfigError, SolverConfig, TerminationConfig};

// Solver
pub use seatforge_solver::{
    solve, solve_problem, solve_with_rng, SearchStats, SeatingSolver, SolveReport,
};

// Terminations
pub use seatforge_solver::termination;

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{run_solver, run_solver_with_config};

pub mod prelude {
    pub use super::{
        Constraint, Gender, Position, Problem, SeatRestriction, Seating, SolveError, Student,
    };
    pub use super::{SeatingSolver, SolverConfig};
}
