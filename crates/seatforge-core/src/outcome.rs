//! Solve results and their serializable snapshot.

use crate::domain::Seating;
use crate::error::SolveError;

/// Result of one solve: a complete seating or the reason there is none.
pub type SolveResult = Result<Seating, SolveError>;

/// Flat snapshot of a [`SolveResult`] as presentation and persistence
/// layers store it: `{ success, seating }` or `{ success, message }`.
///
/// # Example
///
/// ```
/// use seatforge_core::{SolveError, SolveOutcome, SolveResult};
///
/// let result: SolveResult = Err(SolveError::Unsatisfiable);
/// let outcome = SolveOutcome::from(&result);
/// assert!(!outcome.success);
/// assert!(outcome.seating.is_none());
/// assert_eq!(
///     outcome.message.as_deref(),
///     Some("No valid seating arrangement found. Try relaxing some constraints.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOutcome {
    pub success: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub seating: Option<Seating>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub message: Option<String>,
}

impl SolveOutcome {
    pub fn solved(seating: Seating) -> Self {
        Self {
            success: true,
            seating: Some(seating),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            seating: None,
            message: Some(message.into()),
        }
    }
}

impl From<&SolveResult> for SolveOutcome {
    fn from(result: &SolveResult) -> Self {
        match result {
            Ok(seating) => SolveOutcome::solved(seating.clone()),
            Err(err) => SolveOutcome::failed(err.message()),
        }
    }
}

impl From<SolveResult> for SolveOutcome {
    fn from(result: SolveResult) -> Self {
        match result {
            Ok(seating) => SolveOutcome::solved(seating),
            Err(err) => SolveOutcome::failed(err.message()),
        }
    }
}
