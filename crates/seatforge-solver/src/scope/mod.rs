//! Scope for solver execution.
//!
//! [`SolverScope`] holds the statistics shared between the search and its
//! termination conditions for the duration of one solve.

mod solver;

pub use solver::SolverScope;
