//! Candidate seats for a student and their exploration order.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use seatforge_core::Position;

use super::model::{Rule, SearchModel};
use super::state::SearchState;

pub(crate) type Candidates = SmallVec<[Position; 16]>;

/// Seats the student may take next.
///
/// Only free seats that admit the student's gender are returned. The
/// domain narrows by the strongest rule the student has: an Absolute seat,
/// then the neighbours of a seated Together partner, then a required row.
/// Without any of those every seat of the layout is a candidate.
pub(crate) fn candidates(
    model: &SearchModel<'_>,
    state: &SearchState,
    student: usize,
) -> Candidates {
    let layout = model.layout();
    let gender = model.gender(student);
    let usable = |pos: &Position| layout.admits(*pos, gender) && state.is_free(*pos);

    if let Some(seat) = model.target(student) {
        return std::iter::once(seat).filter(usable).collect();
    }

    let seated_partner = model
        .rules_of(student)
        .iter()
        .map(|&r| model.rule(r))
        .filter(|rule| matches!(rule, Rule::Together(..)))
        .find_map(|rule| rule.partner_of(student).and_then(|p| state.position(p)));
    if let Some(partner) = seated_partner {
        return [partner.left(), partner.right(layout.cols())]
            .into_iter()
            .flatten()
            .filter(usable)
            .collect();
    }

    let row = model.rules_of(student).iter().find_map(|&r| match *model.rule(r) {
        Rule::MustBeInRow { row, .. } => Some(row),
        _ => None,
    });
    match row {
        Some(row) => layout.row_positions(row).filter(usable).collect(),
        None => layout.positions().filter(usable).collect(),
    }
}

/// Orders candidates front row first, shuffling seats within each row.
///
/// Filling rows from the front keeps the seating compact; the shuffle
/// gives different arrangements across solves.
pub(crate) fn order_front_to_back<R: Rng + ?Sized>(candidates: &mut [Position], rng: &mut R) {
    candidates.sort_by_key(|pos| pos.row);
    for row in candidates.chunk_by_mut(|a, b| a.row == b.row) {
        row.shuffle(rng);
    }
}
