//! Termination conditions for the backtracking search.
//!
//! A termination is polled before every tentative placement. When it fires,
//! the search unwinds and the solve reports
//! [`SolveError::SearchLimitReached`](seatforge_core::SolveError::SearchLimitReached),
//! or [`SolveError::Cancelled`](seatforge_core::SolveError::Cancelled) when
//! the termination that fired reports [`Termination::is_cancelled`].

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;

    /// Returns true if the search was stopped on request rather than by
    /// running out of budget.
    fn is_cancelled(&self, _solver_scope: &SolverScope) -> bool {
        false
    }
}

/// Never terminates. The search runs until it succeeds or exhausts the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(solver_scope))
    }

    fn is_cancelled(&self, solver_scope: &SolverScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_cancelled(solver_scope))
    }
}

impl<T: Termination + Sync + ?Sized> Termination for &T {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }

    fn is_cancelled(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_cancelled(solver_scope)
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }

    fn is_cancelled(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_cancelled(solver_scope)
    }
}

#[cfg(test)]
mod tests;
