//! SeatForge Solver Engine
//!
//! This crate provides the seating solver:
//! - Backtracking search with constraint-driven variable ordering
//! - Front-to-back seat ordering with randomised tie-breaking
//! - Termination conditions (node budget, time budget, cancellation)
//! - Search statistics
//!
//! # Example
//!
//! ```
//! use seatforge_core::{Constraint, Problem};
//!
//! let problem = Problem::builder(3, 4)
//!     .students(["Alice", "Bob", "Cara", "Dan"])
//!     .constraint(Constraint::not_together("Alice", "Bob"))
//!     .constraint(Constraint::far_apart("Cara", "Dan", 2.0))
//!     .build()
//!     .unwrap();
//!
//! let seating = seatforge_solver::solve_problem(&problem).unwrap();
//! assert_eq!(seating.occupied_count(), 4);
//! ```

pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;
pub mod termination;

pub use scope::SolverScope;
pub use search::{BacktrackingSearch, SearchOutcome};
pub use solver::{solve, solve_problem, solve_with_rng, SeatingSolver, SolveReport};
pub use stats::SearchStats;
pub use termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
