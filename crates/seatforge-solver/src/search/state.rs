//! Mutable seat assignment explored by the search.

use seatforge_core::{Position, SeatLayout, Seating};

use super::model::SearchModel;

/// Grid of roster indices plus the reverse student-to-seat map.
///
/// Placements are applied and undone in place as the search descends and
/// backtracks.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
    positions: Vec<Option<Position>>,
    placed: usize,
}

impl SearchState {
    pub(crate) fn new(layout: &SeatLayout, students: usize) -> Self {
        Self {
            rows: layout.rows(),
            cols: layout.cols(),
            cells: vec![None; layout.seat_count()],
            positions: vec![None; students],
            placed: 0,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Returns false for occupied or out-of-bounds cells.
    pub(crate) fn is_free(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_none())
    }

    pub(crate) fn position(&self, student: usize) -> Option<Position> {
        self.positions[student]
    }

    pub(crate) fn is_placed(&self, student: usize) -> bool {
        self.positions[student].is_some()
    }

    pub(crate) fn placed_count(&self) -> usize {
        self.placed
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.placed == self.positions.len()
    }

    /// Seats a student. The cell must be free and in bounds.
    pub(crate) fn place(&mut self, student: usize, pos: Position) {
        if let Some(i) = self.index(pos) {
            debug_assert!(self.cells[i].is_none());
            debug_assert!(self.positions[student].is_none());
            self.cells[i] = Some(student);
            self.positions[student] = Some(pos);
            self.placed += 1;
        }
    }

    pub(crate) fn unplace(&mut self, student: usize) {
        if let Some(pos) = self.positions[student].take() {
            if let Some(i) = self.index(pos) {
                self.cells[i] = None;
            }
            self.placed -= 1;
        }
    }

    /// Copies the assignment out as a seating of student names.
    pub(crate) fn to_seating(&self, model: &SearchModel<'_>) -> Seating {
        let mut seating = Seating::new(self.rows, self.cols);
        for (student, pos) in self.positions.iter().enumerate() {
            if let Some(pos) = pos {
                seating.place(*pos, model.name(student));
            }
        }
        seating
    }
}
