//! Rendering of solve results.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use seatforge::{Problem, SearchStats, Seating, SolveOutcome, SolveResult};

/// Seating grid with a front-of-room marker, one row per line.
pub fn render_seating(seating: &Seating) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "front of room".bright_black());
    for (row, line) in seating.to_string().lines().enumerate() {
        let _ = writeln!(out, "{:>3}  {}", row.to_string().bright_black(), line);
    }
    out
}

/// The `{ success, seating | message }` snapshot as pretty JSON.
pub fn render_json(result: &SolveResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SolveOutcome::from(result))
}

pub fn render_stats(stats: &SearchStats) -> String {
    format!(
        "{} placements, {} rejected, {} backtracks, max depth {}, {:.1}ms",
        stats.nodes_visited,
        stats.placements_rejected,
        stats.backtracks,
        stats.max_depth,
        stats.elapsed().as_secs_f64() * 1000.0,
    )
}

/// Roster and rule summary printed by `seatforge check`.
pub fn render_summary(problem: &Problem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} students, {}x{} room, {} available seats",
        problem.students.len(),
        problem.rows(),
        problem.cols(),
        problem.layout.available_count()
    );
    if problem.constraints.is_empty() {
        let _ = writeln!(out, "no rules");
    }
    for (i, constraint) in problem.constraints.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. [{}] {}", i + 1, constraint.kind(), constraint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge::{Constraint, Position, SolveError};

    #[test]
    fn test_json_failure() {
        let json = render_json(&Err(SolveError::Unsatisfiable)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("seating").is_none());
    }

    #[test]
    fn test_json_success() {
        let mut seating = Seating::new(1, 2);
        seating.place(Position::new(0, 1), "Ann");
        let json = render_json(&Ok(seating)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seating"], serde_json::json!([[null, "Ann"]]));
    }

    #[test]
    fn test_summary_lists_rules() {
        let problem = Problem::builder(2, 2)
            .students(["Ann", "Ben"])
            .constraint(Constraint::together("Ann", "Ben"))
            .build()
            .unwrap();
        let summary = render_summary(&problem);
        assert!(summary.starts_with("2 students, 2x2 room, 4 available seats"));
        assert!(summary.contains("Ann and Ben sit next to each other"));
    }
}
