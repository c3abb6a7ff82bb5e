//! Node count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once a number of tentative placements have been tried.
///
/// # Example
///
/// ```
/// use seatforge_solver::termination::NodeCountTermination;
///
/// let termination = NodeCountTermination::new(100_000);
/// assert_eq!(termination.limit(), 100_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.node_count() >= self.limit
    }
}
