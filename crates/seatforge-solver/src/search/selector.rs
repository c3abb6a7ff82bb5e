//! Variable selection: which student to seat next.

use super::model::{Rule, SearchModel};
use super::state::SearchState;

/// Picks the next unseated student.
///
/// Students with an Absolute seat come first. Next is any student whose
/// Together partner is already seated, so the pair lands side by side
/// while a neighbouring seat is still free. Otherwise the student named by
/// the most constraints is chosen, ties going to roster order.
pub(crate) fn select_student(model: &SearchModel<'_>, state: &SearchState) -> Option<usize> {
    let unplaced = || (0..model.student_count()).filter(|&s| !state.is_placed(s));

    if let Some(student) = unplaced().find(|&s| model.target(s).is_some()) {
        return Some(student);
    }

    for rule in model.rules() {
        if let Rule::Together(a, b) = *rule {
            match (state.is_placed(a), state.is_placed(b)) {
                (true, false) => return Some(b),
                (false, true) => return Some(a),
                _ => {}
            }
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for student in unplaced() {
        let refs = model.rules_of(student).len();
        if best.map_or(true, |(_, most)| refs > most) {
            best = Some((student, refs));
        }
    }
    best.map(|(student, _)| student)
}
