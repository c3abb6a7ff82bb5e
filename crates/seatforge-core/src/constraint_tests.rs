//! Tests for constraint descriptions and wire format

use super::constraint::*;

#[test]
fn test_constraint_descriptions() {
    assert_eq!(
        Constraint::absolute("Alice", 0, 3).to_string(),
        "Alice sits at row 0, column 3"
    );
    assert_eq!(
        Constraint::not_together("Alice", "Bob").to_string(),
        "Alice and Bob do not sit next to each other"
    );
    assert_eq!(
        Constraint::must_be_in_row("Eve", 1).to_string(),
        "Eve sits in row 1"
    );
    assert_eq!(
        Constraint::far_apart("A", "V", 5.0).to_string(),
        "A and V sit at least 5 seats apart"
    );
}

#[test]
fn test_kind_display_matches_wire_tag() {
    assert_eq!(ConstraintKind::NotTogether.to_string(), "not_together");
    assert_eq!(ConstraintKind::MustBeInRow.to_string(), "must_be_in_row");
}

#[cfg(feature = "serde")]
#[test]
fn test_constraint_wire_format() {
    let c: Constraint = serde_json::from_str(
        r#"{"type": "far_apart", "student1": "A", "student2": "V", "minDistance": 5}"#,
    )
    .unwrap();
    assert_eq!(c, Constraint::far_apart("A", "V", 5.0));

    let json = serde_json::to_value(Constraint::absolute("Alice", 1, 2)).unwrap();
    assert_eq!(json["type"], "absolute");
    assert_eq!(json["student1"], "Alice");
    assert_eq!(json["row"], 1);
}
