//! Independent verification of a seating against its problem.
//!
//! The checks here read only the public problem and seating types, so they
//! catch solver bugs rather than share them.

use std::collections::HashMap;

use seatforge_core::{Constraint, Position, Problem, Seating};

/// Lists every way `seating` falls short of `problem`.
///
/// An empty list means the seating is a complete valid assignment: every
/// student sits exactly once, on an available seat that admits their
/// gender, and every constraint holds.
pub fn violations(problem: &Problem, seating: &Seating) -> Vec<String> {
    let mut found = Vec::new();

    if (seating.rows(), seating.cols()) != (problem.rows(), problem.cols()) {
        found.push(format!(
            "seating is {}x{}, layout is {}x{}",
            seating.rows(),
            seating.cols(),
            problem.rows(),
            problem.cols()
        ));
        return found;
    }

    let mut seats: HashMap<&str, Vec<Position>> = HashMap::new();
    for (pos, name) in seating.occupied() {
        seats.entry(name).or_default().push(pos);
    }

    for student in &problem.students {
        match seats.get(student.name()).map(Vec::as_slice) {
            None | Some([]) => found.push(format!("{} is not seated", student.name())),
            Some([pos]) => {
                if !problem.layout.is_available(*pos) {
                    found.push(format!("{} sits on unavailable seat {pos}", student.name()));
                } else if !problem.layout.admits(*pos, student.gender()) {
                    found.push(format!(
                        "{} sits on seat {pos} restricted to {}",
                        student.name(),
                        problem.layout.restriction(*pos)
                    ));
                }
            }
            Some(many) => found.push(format!("{} is seated {} times", student.name(), many.len())),
        }
    }
    for name in seats.keys() {
        if problem.student(name).is_none() {
            found.push(format!("{name} is not on the roster"));
        }
    }

    let seat_of = |name: &str| seats.get(name).and_then(|p| p.first().copied());
    for constraint in &problem.constraints {
        if !constraint_holds(constraint, seat_of) {
            found.push(format!("violated: {constraint}"));
        }
    }

    found
}

fn constraint_holds(constraint: &Constraint, seat_of: impl Fn(&str) -> Option<Position>) -> bool {
    match constraint {
        Constraint::Absolute { student, row, col } => {
            seat_of(student) == Some(Position::new(*row, *col))
        }
        Constraint::MustBeInRow { student, row } => {
            seat_of(student).is_some_and(|p| p.row == *row)
        }
        Constraint::Together { first, second } => match (seat_of(first), seat_of(second)) {
            (Some(a), Some(b)) => a.is_horizontally_adjacent(&b),
            _ => false,
        },
        Constraint::NotTogether { first, second } => match (seat_of(first), seat_of(second)) {
            (Some(a), Some(b)) => !a.is_horizontally_adjacent(&b),
            _ => false,
        },
        Constraint::FarApart {
            first,
            second,
            min_distance,
        } => match (seat_of(first), seat_of(second)) {
            (Some(a), Some(b)) => a.distance(&b) >= *min_distance,
            _ => false,
        },
    }
}

/// Panics with every violation if the seating is not valid for the problem.
#[track_caller]
pub fn assert_valid_seating(problem: &Problem, seating: &Seating) {
    let found = violations(problem, seating);
    assert!(
        found.is_empty(),
        "invalid seating:\n{seating}\nviolations:\n  {}",
        found.join("\n  ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::{SeatRestriction, Student};

    fn pair() -> Problem {
        Problem::builder(2, 2)
            .students(["Alice", "Bob"])
            .constraint(Constraint::together("Alice", "Bob"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_seating_has_no_violations() {
        let mut seating = Seating::new(2, 2);
        seating.place(Position::new(0, 0), "Alice");
        seating.place(Position::new(0, 1), "Bob");
        assert_valid_seating(&pair(), &seating);
    }

    #[test]
    fn test_detects_missing_student_and_broken_pair() {
        let mut seating = Seating::new(2, 2);
        seating.place(Position::new(0, 0), "Alice");
        let found = violations(&pair(), &seating);
        assert_eq!(found.len(), 2);
        assert!(found[0].contains("Bob is not seated"));
        assert!(found[1].starts_with("violated:"));
    }

    #[test]
    fn test_detects_vertical_pair() {
        let mut seating = Seating::new(2, 2);
        seating.place(Position::new(0, 0), "Alice");
        seating.place(Position::new(1, 0), "Bob");
        assert_eq!(violations(&pair(), &seating).len(), 1);
    }

    #[test]
    fn test_detects_gender_and_availability() {
        let problem = Problem::builder(1, 3)
            .students([Student::female("Fay"), Student::new("Sam")])
            .restrict(0, 0, SeatRestriction::Male)
            .unavailable(0, 2)
            .build()
            .unwrap();
        let mut seating = Seating::new(1, 3);
        seating.place(Position::new(0, 0), "Fay");
        seating.place(Position::new(0, 2), "Sam");

        let found = violations(&problem, &seating);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_detects_dimension_mismatch() {
        assert_eq!(violations(&pair(), &Seating::new(3, 3)).len(), 1);
    }
}
