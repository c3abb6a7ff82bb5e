//! Tests for the backtracking search internals.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seatforge_core::{Constraint, Position, Problem, SeatRestriction, Student};

use super::consistency::is_consistent;
use super::domain::{candidates, order_front_to_back};
use super::model::SearchModel;
use super::selector::select_student;
use super::state::SearchState;
use super::{BacktrackingSearch, SearchOutcome};
use crate::scope::SolverScope;
use crate::termination::{NoTermination, NodeCountTermination};

fn problem(rows: usize, cols: usize, names: &[&str], constraints: Vec<Constraint>) -> Problem {
    Problem::builder(rows, cols)
        .students(names.iter().copied())
        .constraints(constraints)
        .build()
        .unwrap()
}

fn fresh(model: &SearchModel<'_>) -> SearchState {
    SearchState::new(model.layout(), model.student_count())
}

#[test]
fn test_compile_rejects_unknown_student() {
    let p = Problem::new(
        vec![Student::new("Alice")],
        vec![Constraint::together("Alice", "Zed")],
        seatforge_core::SeatLayout::new(1, 2),
    );
    assert!(SearchModel::compile(&p).is_err());
}

#[test]
fn test_absolute_students_selected_first() {
    let p = problem(
        2,
        3,
        &["Alice", "Bob", "Cara"],
        vec![
            Constraint::together("Alice", "Bob"),
            Constraint::not_together("Alice", "Bob"),
            Constraint::absolute("Cara", 1, 1),
        ],
    );
    let model = SearchModel::compile(&p).unwrap();
    assert_eq!(select_student(&model, &fresh(&model)), Some(2));
}

#[test]
fn test_together_partner_selected_next() {
    let p = problem(
        2,
        3,
        &["Alice", "Bob", "Cara", "Dan"],
        vec![
            Constraint::together("Dan", "Bob"),
            Constraint::not_together("Alice", "Cara"),
            Constraint::far_apart("Alice", "Cara", 2.0),
        ],
    );
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);

    // Alice is the most referenced student.
    assert_eq!(select_student(&model, &state), Some(0));

    // Bob is the second member of the pair, yet placing him pulls Dan in.
    state.place(1, Position::new(0, 0));
    assert_eq!(select_student(&model, &state), Some(3));
}

#[test]
fn test_ties_broken_by_roster_order() {
    let p = problem(1, 4, &["Alice", "Bob", "Cara"], vec![]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);
    assert_eq!(select_student(&model, &state), Some(0));
    state.place(0, Position::new(0, 0));
    assert_eq!(select_student(&model, &state), Some(1));
}

#[test]
fn test_absolute_domain_is_single_seat() {
    let p = problem(2, 2, &["Alice"], vec![Constraint::absolute("Alice", 1, 0)]);
    let model = SearchModel::compile(&p).unwrap();
    let domain = candidates(&model, &fresh(&model), 0);
    assert_eq!(domain.as_slice(), &[Position::new(1, 0)]);
}

#[test]
fn test_absolute_domain_empty_when_seat_unavailable() {
    let p = Problem::builder(2, 2)
        .student("Alice")
        .constraint(Constraint::absolute("Alice", 1, 0))
        .unavailable(1, 0)
        .build()
        .unwrap();
    let model = SearchModel::compile(&p).unwrap();
    assert!(candidates(&model, &fresh(&model), 0).is_empty());
}

#[test]
fn test_together_domain_is_partner_neighbours() {
    let p = problem(2, 4, &["Alice", "Bob"], vec![Constraint::together("Alice", "Bob")]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);
    state.place(0, Position::new(1, 2));

    let mut domain = candidates(&model, &state, 1).to_vec();
    domain.sort();
    assert_eq!(domain, vec![Position::new(1, 1), Position::new(1, 3)]);
}

#[test]
fn test_row_domain() {
    let p = problem(3, 2, &["Alice"], vec![Constraint::must_be_in_row("Alice", 2)]);
    let model = SearchModel::compile(&p).unwrap();
    let domain = candidates(&model, &fresh(&model), 0);
    assert!(domain.iter().all(|pos| pos.row == 2));
    assert_eq!(domain.len(), 2);
}

#[test]
fn test_domain_respects_gender_and_occupancy() {
    let p = Problem::builder(1, 3)
        .students([Student::male("Max"), Student::female("Fay")])
        .restrict(0, 0, SeatRestriction::Female)
        .build()
        .unwrap();
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);
    state.place(1, Position::new(0, 1));

    let domain = candidates(&model, &state, 0);
    assert_eq!(domain.as_slice(), &[Position::new(0, 2)]);
}

#[test]
fn test_order_front_to_back() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seats: Vec<Position> = (0..3)
        .rev()
        .flat_map(|row| (0..4).map(move |col| Position::new(row, col)))
        .collect();
    order_front_to_back(&mut seats, &mut rng);

    assert!(seats.windows(2).all(|w| w[0].row <= w[1].row));
    assert_eq!(seats.len(), 12);
}

#[test]
fn test_reserved_seat_rejected_for_other_students() {
    let p = problem(1, 2, &["Alice", "Bob"], vec![Constraint::absolute("Alice", 0, 0)]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);

    let seat = Position::new(0, 0);
    state.place(1, seat);
    assert!(!is_consistent(&model, &state, 1, seat));
    state.unplace(1);

    state.place(0, seat);
    assert!(is_consistent(&model, &state, 0, seat));
}

#[test]
fn test_together_needs_free_neighbour() {
    let p = Problem::builder(1, 3)
        .students(["Alice", "Bob"])
        .constraint(Constraint::together("Alice", "Bob"))
        .unavailable(0, 1)
        .build()
        .unwrap();
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);

    let seat = Position::new(0, 0);
    state.place(0, seat);
    assert!(!is_consistent(&model, &state, 0, seat));
}

#[test]
fn test_not_together_allows_vertical_neighbours() {
    let p = problem(2, 1, &["Alice", "Bob"], vec![Constraint::not_together("Alice", "Bob")]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);

    state.place(0, Position::new(0, 0));
    state.place(1, Position::new(1, 0));
    assert!(is_consistent(&model, &state, 1, Position::new(1, 0)));
}

#[test]
fn test_far_apart_distance() {
    let p = problem(3, 3, &["Alice", "Bob"], vec![Constraint::far_apart("Alice", "Bob", 2.5)]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);
    state.place(0, Position::new(0, 0));

    state.place(1, Position::new(2, 0));
    assert!(!is_consistent(&model, &state, 1, Position::new(2, 0)));
    state.unplace(1);

    state.place(1, Position::new(2, 2));
    assert!(is_consistent(&model, &state, 1, Position::new(2, 2)));
}

#[test]
fn test_far_apart_exact_distance_is_consistent() {
    let p = problem(1, 3, &["Alice", "Bob"], vec![Constraint::far_apart("Alice", "Bob", 2.0)]);
    let model = SearchModel::compile(&p).unwrap();
    let mut state = fresh(&model);
    state.place(0, Position::new(0, 0));

    state.place(1, Position::new(0, 2));
    assert!(is_consistent(&model, &state, 1, Position::new(0, 2)));
    state.unplace(1);

    state.place(1, Position::new(0, 1));
    assert!(!is_consistent(&model, &state, 1, Position::new(0, 1)));
}

#[test]
fn test_run_solves_and_copies_grid() {
    let p = problem(2, 2, &["Alice", "Bob", "Cara"], vec![Constraint::together("Alice", "Bob")]);
    let mut search = BacktrackingSearch::new(&p, NoTermination).unwrap();
    let mut scope = SolverScope::new();
    scope.start_solving();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let SearchOutcome::Solved(seating) = search.run(&mut scope, &mut rng) else {
        panic!("expected a seating");
    };
    assert_eq!(seating.occupied_count(), 3);
    let a = seating.position_of("Alice").unwrap();
    let b = seating.position_of("Bob").unwrap();
    assert!(a.is_horizontally_adjacent(&b));
    assert!(scope.node_count() >= 3);
}

#[test]
fn test_run_exhausts_conflicting_rules() {
    let p = problem(
        1,
        3,
        &["Alice", "Bob"],
        vec![
            Constraint::together("Alice", "Bob"),
            Constraint::not_together("Alice", "Bob"),
        ],
    );
    let mut search = BacktrackingSearch::new(&p, NoTermination).unwrap();
    let mut scope = SolverScope::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(search.run(&mut scope, &mut rng), SearchOutcome::Exhausted);
}

#[test]
fn test_run_stops_at_node_limit() {
    let p = problem(
        1,
        3,
        &["Alice", "Bob"],
        vec![
            Constraint::together("Alice", "Bob"),
            Constraint::not_together("Alice", "Bob"),
        ],
    );
    let mut search = BacktrackingSearch::new(&p, NodeCountTermination::new(2)).unwrap();
    let mut scope = SolverScope::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(search.run(&mut scope, &mut rng), SearchOutcome::Terminated);
    assert_eq!(scope.node_count(), 2);
}
