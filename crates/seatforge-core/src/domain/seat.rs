//! Seat positions, seat restrictions and the classroom layout.

use std::fmt;

use super::student::Gender;
use crate::error::InputError;

/// A seat's position in the classroom grid. Row 0 is the front row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both seats are in the same row with column distance
    /// exactly 1. Vertical and diagonal neighbours are not adjacent.
    ///
    /// ```
    /// use seatforge_core::Position;
    ///
    /// let seat = Position::new(1, 1);
    /// assert!(seat.is_horizontally_adjacent(&Position::new(1, 2)));
    /// assert!(!seat.is_horizontally_adjacent(&Position::new(0, 1)));
    /// assert!(!seat.is_horizontally_adjacent(&Position::new(1, 3)));
    /// ```
    pub fn is_horizontally_adjacent(&self, other: &Position) -> bool {
        self.row == other.row && self.col.abs_diff(other.col) == 1
    }

    /// Euclidean distance between two seats in grid units.
    pub fn distance(&self, other: &Position) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// The seat to the left, if any.
    pub fn left(&self) -> Option<Position> {
        self.col.checked_sub(1).map(|col| Position::new(self.row, col))
    }

    /// The seat to the right, if it lies inside a grid of `cols` columns.
    pub fn right(&self, cols: usize) -> Option<Position> {
        let col = self.col + 1;
        (col < cols).then(|| Position::new(self.row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// Gender restriction carried by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeatRestriction {
    #[default]
    Any,
    Male,
    Female,
}

impl SeatRestriction {
    /// Returns true if a student with the given declared gender may sit here.
    ///
    /// An undeclared gender is a wildcard and is admitted by every seat.
    ///
    /// ```
    /// use seatforge_core::{Gender, SeatRestriction};
    ///
    /// assert!(SeatRestriction::Any.admits(Some(Gender::Female)));
    /// assert!(SeatRestriction::Male.admits(Some(Gender::Male)));
    /// assert!(!SeatRestriction::Male.admits(Some(Gender::Female)));
    /// assert!(SeatRestriction::Female.admits(None));
    /// ```
    pub fn admits(self, gender: Option<Gender>) -> bool {
        match (self, gender) {
            (SeatRestriction::Any, _) | (_, None) => true,
            (SeatRestriction::Male, Some(g)) => g == Gender::Male,
            (SeatRestriction::Female, Some(g)) => g == Gender::Female,
        }
    }
}

impl fmt::Display for SeatRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatRestriction::Any => write!(f, "any"),
            SeatRestriction::Male => write!(f, "male"),
            SeatRestriction::Female => write!(f, "female"),
        }
    }
}

impl From<Gender> for SeatRestriction {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => SeatRestriction::Male,
            Gender::Female => SeatRestriction::Female,
        }
    }
}

/// A `rows x cols` classroom grid with per-seat availability and gender
/// restriction. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    rows: usize,
    cols: usize,
    available: Vec<bool>,
    restrictions: Vec<SeatRestriction>,
}

impl SeatLayout {
    /// Creates a layout where every seat is available to anyone.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            available: vec![true; rows * cols],
            restrictions: vec![SeatRestriction::Any; rows * cols],
        }
    }

    /// Builds a layout from optional caller-supplied grids.
    ///
    /// A missing availability grid means every seat is available; a missing
    /// gender grid means every seat accepts anyone.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DimensionMismatch`] if a supplied grid is not
    /// exactly `rows x cols`.
    pub fn from_grids(
        rows: usize,
        cols: usize,
        availability: Option<&[Vec<bool>]>,
        seat_genders: Option<&[Vec<SeatRestriction>]>,
    ) -> Result<Self, InputError> {
        let mut layout = Self::new(rows, cols);
        if let Some(grid) = availability {
            check_shape("availability", grid, rows, cols)?;
            layout.available = grid.iter().flatten().copied().collect();
        }
        if let Some(grid) = seat_genders {
            check_shape("seat gender", grid, rows, cols)?;
            layout.restrictions = grid.iter().flatten().copied().collect();
        }
        Ok(layout)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of grid cells, available or not.
    pub fn seat_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn available_count(&self) -> usize {
        self.available.iter().filter(|&&a| a).count()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major cell index of an in-bounds position.
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Position of a row-major cell index.
    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Returns false for unavailable or out-of-bounds seats.
    pub fn is_available(&self, pos: Position) -> bool {
        self.contains(pos) && self.available[self.index(pos)]
    }

    /// Restriction of a seat; out-of-bounds positions report `Any`.
    pub fn restriction(&self, pos: Position) -> SeatRestriction {
        if self.contains(pos) {
            self.restrictions[self.index(pos)]
        } else {
            SeatRestriction::Any
        }
    }

    /// Returns true if the seat is available and admits the gender.
    pub fn admits(&self, pos: Position, gender: Option<Gender>) -> bool {
        self.is_available(pos) && self.restriction(pos).admits(gender)
    }

    /// Positions outside the grid are ignored.
    pub fn set_available(&mut self, pos: Position, available: bool) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.available[idx] = available;
        }
    }

    /// Positions outside the grid are ignored.
    pub fn set_restriction(&mut self, pos: Position, restriction: SeatRestriction) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.restrictions[idx] = restriction;
        }
    }

    /// All positions in row-major order (front row first).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.seat_count()).map(|i| self.position(i))
    }

    /// Positions of one row, left to right. Empty for an out-of-range row.
    pub fn row_positions(&self, row: usize) -> impl Iterator<Item = Position> {
        let cols = if row < self.rows { self.cols } else { 0 };
        (0..cols).map(move |col| Position::new(row, col))
    }

    pub fn availability_grid(&self) -> Vec<Vec<bool>> {
        to_rows(&self.available, self.rows, self.cols)
    }

    pub fn restriction_grid(&self) -> Vec<Vec<SeatRestriction>> {
        to_rows(&self.restrictions, self.rows, self.cols)
    }
}

fn to_rows<T: Clone>(cells: &[T], rows: usize, cols: usize) -> Vec<Vec<T>> {
    (0..rows)
        .map(|r| cells[r * cols..(r + 1) * cols].to_vec())
        .collect()
}

fn check_shape<T>(
    grid_name: &'static str,
    grid: &[Vec<T>],
    rows: usize,
    cols: usize,
) -> Result<(), InputError> {
    let bad_row = grid.iter().find(|r| r.len() != cols);
    if grid.len() != rows || bad_row.is_some() {
        return Err(InputError::DimensionMismatch {
            grid: grid_name,
            rows,
            cols,
            actual_rows: grid.len(),
            actual_cols: bad_row.or(grid.first()).map_or(0, Vec::len),
        });
    }
    Ok(())
}
