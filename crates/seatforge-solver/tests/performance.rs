//! Solve times for realistic classroom sizes.

use std::time::{Duration, Instant};

use seatforge_core::{Constraint, Position, Problem};
use seatforge_solver::{solve_problem, SeatingSolver};
use seatforge_test::layout::{aisled_room_5x8, count_available};
use seatforge_test::{assert_valid_seating, letters, roster};

/// 26 students in a 27-seat room: a single spare seat.
fn aisled_room_problem() -> Problem {
    Problem::builder(5, 8)
        .students(letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ"))
        .availability(aisled_room_5x8())
        .constraint(Constraint::absolute("A", 0, 0))
        .constraint(Constraint::together("A", "B"))
        .constraint(Constraint::far_apart("A", "V", 5.0))
        .constraint(Constraint::must_be_in_row("D", 0))
        .constraint(Constraint::together("N", "W"))
        .constraint(Constraint::must_be_in_row("Z", 1))
        .build()
        .unwrap()
}

#[test]
fn test_twenty_six_students_in_aisled_room() {
    let problem = aisled_room_problem();
    assert_eq!(count_available(&aisled_room_5x8()), 27);
    assert_eq!(problem.layout.available_count(), 27);
    let start = Instant::now();
    let seating = solve_problem(&problem).unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));

    assert_valid_seating(&problem, &seating);
    assert_eq!(seating.get(Position::new(0, 0)), Some("A"));
    // The aisle at column 2 leaves (0, 1) as A's only neighbour.
    assert_eq!(seating.get(Position::new(0, 1)), Some("B"));
    assert_eq!(seating.position_of("D").unwrap().row, 0);
    assert_eq!(seating.position_of("Z").unwrap().row, 1);
    assert_eq!(seating.occupied_count(), 26);
}

#[test]
fn test_aisled_room_needs_little_backtracking() {
    let report = SeatingSolver::new().solve_with_stats(&aisled_room_problem());
    assert!(report.is_solved());
    assert!(report.stats.nodes_visited < 1_000);
    assert_eq!(report.stats.max_depth, 26);
}

#[test]
fn test_fifty_students_in_large_room() {
    let problem = Problem::builder(10, 10).students(roster(50)).build().unwrap();
    let start = Instant::now();
    let seating = solve_problem(&problem).unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));

    assert_valid_seating(&problem, &seating);
    assert!((0..5).all(|row| seating.row_occupancy(row) == 10));
}
