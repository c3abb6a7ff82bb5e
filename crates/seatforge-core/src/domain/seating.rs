//! The seating chart produced by a solve.

use std::fmt;

use super::seat::Position;

/// Grid of student names, `rows x cols`, front row first.
///
/// Serializes as a nested array where empty seats are `null`, matching the
/// shape presentation layers render.
///
/// # Example
///
/// ```
/// use seatforge_core::{Position, Seating};
///
/// let mut seating = Seating::new(2, 3);
/// seating.place(Position::new(0, 1), "Alice");
///
/// assert_eq!(seating.get(Position::new(0, 1)), Some("Alice"));
/// assert_eq!(seating.position_of("Alice"), Some(Position::new(0, 1)));
/// assert_eq!(seating.occupied_count(), 1);
/// assert_eq!(seating.row_occupancy(1), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Vec<Option<String>>>", from = "Vec<Vec<Option<String>>>")
)]
pub struct Seating {
    rows: usize,
    cols: usize,
    cells: Vec<Option<String>>,
}

impl Seating {
    /// Creates an all-empty seating.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Builds a seating from row-major cells. Returns `None` if the cell
    /// count does not match `rows x cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<String>>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Name of the student at a seat, if any.
    pub fn get(&self, pos: Position) -> Option<&str> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells[pos.row * self.cols + pos.col].as_deref()
    }

    /// Seats a student, replacing any previous occupant. Positions outside
    /// the grid are ignored.
    pub fn place(&mut self, pos: Position, name: impl Into<String>) {
        if pos.row < self.rows && pos.col < self.cols {
            self.cells[pos.row * self.cols + pos.col] = Some(name.into());
        }
    }

    /// Finds the seat of a student by name.
    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.cells
            .iter()
            .position(|c| c.as_deref() == Some(name))
            .map(|i| Position::new(i / self.cols, i % self.cols))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of occupied seats in a row.
    pub fn row_occupancy(&self, row: usize) -> usize {
        self.row(row).iter().filter(|c| c.is_some()).count()
    }

    /// One row of the chart, left to right. Empty for an out-of-range row.
    pub fn row(&self, row: usize) -> &[Option<String>] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates occupied seats in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.as_deref()
                .map(|name| (Position::new(i / self.cols, i % self.cols), name))
        })
    }

    /// Copies the chart into a nested grid.
    pub fn to_grid(&self) -> Vec<Vec<Option<String>>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}

impl From<Seating> for Vec<Vec<Option<String>>> {
    fn from(seating: Seating) -> Self {
        seating.to_grid()
    }
}

impl From<Vec<Vec<Option<String>>>> for Seating {
    /// Short rows are padded with empty seats.
    fn from(grid: Vec<Vec<Option<String>>>) -> Self {
        let rows = grid.len();
        let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows * cols);
        for mut row in grid {
            row.resize(cols, None);
            cells.extend(row);
        }
        Self { rows, cols, cells }
    }
}

impl fmt::Display for Seating {
    /// Renders one line per row, front row first, with `--` for empty seats.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);
        for r in 0..self.rows {
            let line = self
                .row(r)
                .iter()
                .map(|c| format!("{:<width$}", c.as_deref().unwrap_or("--")))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
