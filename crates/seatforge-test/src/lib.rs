//! Shared test fixtures for SeatForge crates.
//!
//! This crate provides data and pure checking functions for testing.
//! It does NOT depend on `seatforge-solver`, so the solver can use it as a
//! dev-dependency.
//!
//! - [`roster`] - Student rosters
//! - [`layout`] - Classroom layouts used across the test suites
//! - [`check`] - Independent verification of a seating against a problem
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! seatforge-test = { workspace = true }
//! ```
//!
//! ```
//! use seatforge_test::{check::violations, roster::roster};
//! use seatforge_core::{Problem, Seating};
//!
//! let problem = Problem::builder(1, 2).students(roster(1)).build().unwrap();
//! let mut seating = Seating::new(1, 2);
//! seating.place((0, 0).into(), "Student 1");
//! assert!(violations(&problem, &seating).is_empty());
//! ```

pub mod check;
pub mod layout;
pub mod roster;

pub use check::{assert_valid_seating, violations};
pub use roster::{letters, mixed_roster, roster};
