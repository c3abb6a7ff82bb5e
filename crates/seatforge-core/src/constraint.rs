//! Placement rules between students and seats.
//!
//! Constraints serialize with a `type` tag (`absolute`, `together`,
//! `not_together`, `must_be_in_row`, `far_apart`). Pair members are named
//! `student1`/`student2` on the wire.

use std::fmt;

use crate::domain::Position;

/// A placement rule.
///
/// # Example
///
/// ```
/// use seatforge_core::Constraint;
///
/// let c = Constraint::together("Alice", "Bob");
/// assert!(c.involves("Bob"));
/// assert_eq!(c.partner_of("Alice"), Some("Bob"));
/// assert_eq!(c.to_string(), "Alice and Bob sit next to each other");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Constraint {
    /// The student occupies exactly this seat.
    Absolute {
        #[cfg_attr(feature = "serde", serde(rename = "student1", alias = "student"))]
        student: String,
        row: usize,
        col: usize,
    },

    /// Both students sit in the same row, in neighbouring columns.
    Together {
        #[cfg_attr(feature = "serde", serde(rename = "student1"))]
        first: String,
        #[cfg_attr(feature = "serde", serde(rename = "student2"))]
        second: String,
    },

    /// The students never sit in the same row in neighbouring columns.
    /// Vertical and diagonal neighbours are allowed.
    NotTogether {
        #[cfg_attr(feature = "serde", serde(rename = "student1"))]
        first: String,
        #[cfg_attr(feature = "serde", serde(rename = "student2"))]
        second: String,
    },

    /// The student sits somewhere in the given row.
    MustBeInRow {
        #[cfg_attr(feature = "serde", serde(rename = "student1", alias = "student"))]
        student: String,
        row: usize,
    },

    /// Euclidean seat distance between the students is at least
    /// `min_distance`.
    FarApart {
        #[cfg_attr(feature = "serde", serde(rename = "student1"))]
        first: String,
        #[cfg_attr(feature = "serde", serde(rename = "student2"))]
        second: String,
        #[cfg_attr(feature = "serde", serde(alias = "minDistance"))]
        min_distance: f64,
    },
}

/// Discriminant of a [`Constraint`], used for logging and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Absolute,
    Together,
    NotTogether,
    MustBeInRow,
    FarApart,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Absolute => write!(f, "absolute"),
            ConstraintKind::Together => write!(f, "together"),
            ConstraintKind::NotTogether => write!(f, "not_together"),
            ConstraintKind::MustBeInRow => write!(f, "must_be_in_row"),
            ConstraintKind::FarApart => write!(f, "far_apart"),
        }
    }
}

impl Constraint {
    pub fn absolute(student: impl Into<String>, row: usize, col: usize) -> Self {
        Constraint::Absolute {
            student: student.into(),
            row,
            col,
        }
    }

    pub fn together(first: impl Into<String>, second: impl Into<String>) -> Self {
        Constraint::Together {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn not_together(first: impl Into<String>, second: impl Into<String>) -> Self {
        Constraint::NotTogether {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn must_be_in_row(student: impl Into<String>, row: usize) -> Self {
        Constraint::MustBeInRow {
            student: student.into(),
            row,
        }
    }

    pub fn far_apart(
        first: impl Into<String>,
        second: impl Into<String>,
        min_distance: f64,
    ) -> Self {
        Constraint::FarApart {
            first: first.into(),
            second: second.into(),
            min_distance,
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Absolute { .. } => ConstraintKind::Absolute,
            Constraint::Together { .. } => ConstraintKind::Together,
            Constraint::NotTogether { .. } => ConstraintKind::NotTogether,
            Constraint::MustBeInRow { .. } => ConstraintKind::MustBeInRow,
            Constraint::FarApart { .. } => ConstraintKind::FarApart,
        }
    }

    /// The first (or only) student named by this constraint.
    pub fn primary(&self) -> &str {
        match self {
            Constraint::Absolute { student, .. } | Constraint::MustBeInRow { student, .. } => {
                student
            }
            Constraint::Together { first, .. }
            | Constraint::NotTogether { first, .. }
            | Constraint::FarApart { first, .. } => first,
        }
    }

    /// The second student of a pair constraint.
    pub fn secondary(&self) -> Option<&str> {
        match self {
            Constraint::Absolute { .. } | Constraint::MustBeInRow { .. } => None,
            Constraint::Together { second, .. }
            | Constraint::NotTogether { second, .. }
            | Constraint::FarApart { second, .. } => Some(second),
        }
    }

    /// Students named by this constraint, in declaration order.
    pub fn students(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary()).chain(self.secondary())
    }

    pub fn involves(&self, name: &str) -> bool {
        self.students().any(|s| s == name)
    }

    /// The other member of a pair constraint, if `name` is one of them.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        let second = self.secondary()?;
        if self.primary() == name {
            Some(second)
        } else if second == name {
            Some(self.primary())
        } else {
            None
        }
    }

    /// The pinned seat of an `Absolute` constraint.
    pub fn target_seat(&self) -> Option<Position> {
        match self {
            Constraint::Absolute { row, col, .. } => Some(Position::new(*row, *col)),
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Absolute { student, row, col } => {
                write!(f, "{student} sits at row {row}, column {col}")
            }
            Constraint::Together { first, second } => {
                write!(f, "{first} and {second} sit next to each other")
            }
            Constraint::NotTogether { first, second } => {
                write!(f, "{first} and {second} do not sit next to each other")
            }
            Constraint::MustBeInRow { student, row } => write!(f, "{student} sits in row {row}"),
            Constraint::FarApart {
                first,
                second,
                min_distance,
            } => write!(
                f,
                "{first} and {second} sit at least {min_distance} seats apart"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_students_of_single_constraint() {
        let c = Constraint::must_be_in_row("Eve", 2);
        assert_eq!(c.students().collect::<Vec<_>>(), vec!["Eve"]);
        assert_eq!(c.partner_of("Eve"), None);
        assert_eq!(c.kind(), ConstraintKind::MustBeInRow);
    }

    #[test]
    fn test_partner_lookup_is_symmetric() {
        let c = Constraint::far_apart("Alice", "Bob", 3.0);
        assert_eq!(c.partner_of("Alice"), Some("Bob"));
        assert_eq!(c.partner_of("Bob"), Some("Alice"));
        assert_eq!(c.partner_of("Carol"), None);
    }

    #[test]
    fn test_target_seat() {
        assert_eq!(
            Constraint::absolute("Alice", 1, 2).target_seat(),
            Some(Position::new(1, 2))
        );
        assert_eq!(Constraint::together("A", "B").target_seat(), None);
    }
}
