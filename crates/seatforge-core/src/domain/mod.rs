//! Domain model for classroom seating.
//!
//! This module contains:
//! - [`Student`] and [`Gender`]: who is being seated
//! - [`Position`], [`SeatRestriction`] and [`SeatLayout`]: where they can sit
//! - [`Problem`]: one solve's complete input
//! - [`Seating`]: the resulting chart

mod problem;
mod seat;
mod seating;
mod student;

pub use problem::{Problem, ProblemBuilder};
pub use seat::{Position, SeatLayout, SeatRestriction};
pub use seating::Seating;
pub use student::{Gender, Student};
