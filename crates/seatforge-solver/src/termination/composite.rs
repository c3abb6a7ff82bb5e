//! Composite termination (OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use std::fmt::Debug;

use super::Termination;
use crate::scope::SolverScope;

/// Combines multiple terminations with OR logic (any may terminate).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use seatforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Stop after 2 seconds or one million placements, whichever comes first
/// let termination = OrTermination((
///     TimeTermination::new(Duration::from_secs(2)),
///     NodeCountTermination::new(1_000_000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))||+
            }

            fn is_cancelled(&self, solver_scope: &SolverScope) -> bool {
                $((self.0).$idx.is_cancelled(solver_scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
