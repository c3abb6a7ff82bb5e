//! SeatForge Core - Core types for classroom seating
//!
//! This crate provides the fundamental abstractions for SeatForge:
//! - Domain types for students, seats and the seating chart
//! - Constraint types describing placement rules
//! - Error and result types shared by the solver and its callers

pub mod constraint;
pub mod domain;
pub mod error;
pub mod outcome;

#[cfg(test)]
mod constraint_tests;

pub use constraint::{Constraint, ConstraintKind};
pub use domain::{
    Gender, Position, Problem, ProblemBuilder, SeatLayout, SeatRestriction, Seating, Student,
};
pub use error::{InputError, SolveError};
pub use outcome::{SolveOutcome, SolveResult};
