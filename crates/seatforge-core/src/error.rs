//! Error types for SeatForge

use thiserror::Error;

/// Reason a solve produced no seating.
///
/// Every failure is reported to the caller as a value; a solve never
/// returns a partially filled seating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// More students than available seats. Detected before any search.
    #[error("Not enough available seats for all students")]
    InsufficientSeats {
        /// Number of students in the roster.
        students: usize,
        /// Number of available seats in the layout.
        seats: usize,
    },

    /// The search space was exhausted without a complete assignment.
    #[error("No valid seating arrangement found. Try relaxing some constraints.")]
    Unsatisfiable,

    /// A configured node or time budget ran out before a solution was found.
    #[error("Search limit reached before a seating arrangement was found. Try relaxing some constraints.")]
    SearchLimitReached {
        /// Search nodes visited when the limit was hit.
        nodes: u64,
    },

    /// Solving was cancelled through the solver's termination flag.
    #[error("Solving was cancelled")]
    Cancelled,

    /// The problem failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl SolveError {
    /// Returns the human-readable message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if relaxing constraints could turn this into a success.
    pub fn is_constraint_failure(&self) -> bool {
        matches!(
            self,
            SolveError::Unsatisfiable | SolveError::SearchLimitReached { .. }
        )
    }
}

/// Malformed problem input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("student name must not be empty")]
    EmptyStudentName,

    #[error("duplicate student name '{0}'")]
    DuplicateStudent(String),

    #[error("constraint references unknown student '{0}'")]
    UnknownStudent(String),

    #[error("constraint pairs '{0}' with itself")]
    SelfPair(String),

    #[error("seat ({row}, {col}) is outside the {rows}x{cols} grid")]
    PositionOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} is outside a grid with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("minimum distance {0} must be a finite, non-negative number")]
    InvalidDistance(f64),

    #[error("{grid} grid is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        grid: &'static str,
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// Result type alias for SeatForge operations.
pub type Result<T> = std::result::Result<T, SolveError>;
