//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a time limit.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use seatforge_solver::termination::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(5));
/// let term = TimeTermination::millis(500);
/// let term = TimeTermination::seconds(2);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
