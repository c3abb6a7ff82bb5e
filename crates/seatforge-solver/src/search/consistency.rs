//! Consistency of a tentative placement.

use seatforge_core::Position;

use super::model::{Rule, SearchModel};
use super::state::SearchState;

/// Checks the rules mentioning `student` after it was placed at `pos`.
///
/// A seat reserved by another student's Absolute rule is never valid.
/// Two-student rules whose partner is not seated yet hold trivially, except
/// Together, which needs a free neighbouring seat left for the partner.
pub(crate) fn is_consistent(
    model: &SearchModel<'_>,
    state: &SearchState,
    student: usize,
    pos: Position,
) -> bool {
    if model.reserved_by(pos).is_some_and(|owner| owner != student) {
        return false;
    }
    model
        .rules_of(student)
        .iter()
        .all(|&r| rule_holds(model, state, model.rule(r), student, pos))
}

fn rule_holds(
    model: &SearchModel<'_>,
    state: &SearchState,
    rule: &Rule,
    student: usize,
    pos: Position,
) -> bool {
    let partner_seat = || rule.partner_of(student).and_then(|p| state.position(p));

    match *rule {
        Rule::Absolute { seat, .. } => pos == seat,
        Rule::MustBeInRow { row, .. } => pos.row == row,
        Rule::Together(..) => match partner_seat() {
            Some(other) => pos.is_horizontally_adjacent(&other),
            None => has_free_neighbour(model, state, pos),
        },
        Rule::NotTogether(..) => {
            partner_seat().map_or(true, |other| !pos.is_horizontally_adjacent(&other))
        }
        Rule::FarApart(_, _, min_distance) => {
            partner_seat().map_or(true, |other| pos.distance(&other) >= min_distance)
        }
    }
}

/// Gender is ignored here; the partner's own domain filters it later.
fn has_free_neighbour(model: &SearchModel<'_>, state: &SearchState, pos: Position) -> bool {
    let layout = model.layout();
    [pos.left(), pos.right(layout.cols())]
        .into_iter()
        .flatten()
        .any(|n| layout.is_available(n) && state.is_free(n))
}
