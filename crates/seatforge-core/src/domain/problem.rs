//! A complete seating problem: roster, rules and layout.

use std::collections::HashSet;

use super::seat::{Position, SeatLayout, SeatRestriction};
use super::student::Student;
use crate::constraint::Constraint;
use crate::error::InputError;

/// Input of one solve. Owned by the caller; the solver only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub students: Vec<Student>,
    pub constraints: Vec<Constraint>,
    pub layout: SeatLayout,
}

impl Problem {
    pub fn new(students: Vec<Student>, constraints: Vec<Constraint>, layout: SeatLayout) -> Self {
        Self {
            students,
            constraints,
            layout,
        }
    }

    /// Starts building a problem on a `rows x cols` grid.
    ///
    /// # Example
    ///
    /// ```
    /// use seatforge_core::{Constraint, Problem, SeatRestriction, Student};
    ///
    /// let problem = Problem::builder(2, 3)
    ///     .students(["Alice", "Bob"])
    ///     .student(Student::male("Carl"))
    ///     .constraint(Constraint::together("Alice", "Bob"))
    ///     .unavailable(1, 2)
    ///     .restrict(0, 0, SeatRestriction::Female)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(problem.students.len(), 3);
    /// assert_eq!(problem.layout.available_count(), 5);
    /// ```
    pub fn builder(rows: usize, cols: usize) -> ProblemBuilder {
        ProblemBuilder::new(rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    pub fn student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    /// Checks roster and constraints against each other and the grid.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an empty or duplicate name, a
    /// constraint naming an unknown student or pairing a student with
    /// itself, a seat or row outside the grid, or an invalid distance.
    pub fn validate(&self) -> Result<(), InputError> {
        let mut names = HashSet::with_capacity(self.students.len());
        for student in &self.students {
            if student.name().is_empty() {
                return Err(InputError::EmptyStudentName);
            }
            if !names.insert(student.name()) {
                return Err(InputError::DuplicateStudent(student.name().to_string()));
            }
        }

        let rows = self.rows();
        let cols = self.cols();
        for constraint in &self.constraints {
            for name in constraint.students() {
                if !names.contains(name) {
                    return Err(InputError::UnknownStudent(name.to_string()));
                }
            }
            if constraint.secondary() == Some(constraint.primary()) {
                return Err(InputError::SelfPair(constraint.primary().to_string()));
            }
            match constraint {
                Constraint::Absolute { row, col, .. } => {
                    if !self.layout.contains(Position::new(*row, *col)) {
                        return Err(InputError::PositionOutOfBounds {
                            row: *row,
                            col: *col,
                            rows,
                            cols,
                        });
                    }
                }
                Constraint::MustBeInRow { row, .. } => {
                    if *row >= rows {
                        return Err(InputError::RowOutOfBounds { row: *row, rows });
                    }
                }
                Constraint::FarApart { min_distance, .. } => {
                    if !min_distance.is_finite() || *min_distance < 0.0 {
                        return Err(InputError::InvalidDistance(*min_distance));
                    }
                }
                Constraint::Together { .. } | Constraint::NotTogether { .. } => {}
            }
        }
        Ok(())
    }
}

/// Builder for [`Problem`].
///
/// Seat edits (`unavailable`, `restrict`) are applied after any full grids,
/// so they can punch holes into a supplied availability grid.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    rows: usize,
    cols: usize,
    students: Vec<Student>,
    constraints: Vec<Constraint>,
    availability: Option<Vec<Vec<bool>>>,
    seat_genders: Option<Vec<Vec<SeatRestriction>>>,
    unavailable: Vec<Position>,
    restricted: Vec<(Position, SeatRestriction)>,
}

impl ProblemBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    pub fn student(mut self, student: impl Into<Student>) -> Self {
        self.students.push(student.into());
        self
    }

    pub fn students<I>(mut self, students: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Student>,
    {
        self.students.extend(students.into_iter().map(Into::into));
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Sets the full availability grid (`true` = usable seat).
    pub fn availability(mut self, grid: Vec<Vec<bool>>) -> Self {
        self.availability = Some(grid);
        self
    }

    /// Sets the full seat gender restriction grid.
    pub fn seat_genders(mut self, grid: Vec<Vec<SeatRestriction>>) -> Self {
        self.seat_genders = Some(grid);
        self
    }

    /// Marks one seat as unusable.
    pub fn unavailable(mut self, row: usize, col: usize) -> Self {
        self.unavailable.push(Position::new(row, col));
        self
    }

    /// Restricts one seat to a gender.
    pub fn restrict(mut self, row: usize, col: usize, restriction: SeatRestriction) -> Self {
        self.restricted.push((Position::new(row, col), restriction));
        self
    }

    /// Assembles the problem.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DimensionMismatch`] if a supplied grid does not
    /// match the builder's dimensions. Roster and constraint checks are left
    /// to [`Problem::validate`].
    pub fn build(self) -> Result<Problem, InputError> {
        let mut layout = SeatLayout::from_grids(
            self.rows,
            self.cols,
            self.availability.as_deref(),
            self.seat_genders.as_deref(),
        )?;
        for pos in self.unavailable {
            layout.set_available(pos, false);
        }
        for (pos, restriction) in self.restricted {
            layout.set_restriction(pos, restriction);
        }
        Ok(Problem::new(self.students, self.constraints, layout))
    }
}
