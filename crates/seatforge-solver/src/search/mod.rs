//! Depth-first backtracking search over seat assignments.
//!
//! One student is seated per level. At each level the search
//!
//! 1. selects the next student ([`selector`]),
//! 2. computes the seats that student may take ([`domain`]),
//! 3. tries them front row first, in shuffled order within a row,
//! 4. keeps a placement only if every rule mentioning the student still
//!    holds ([`consistency`]), and
//! 5. undoes it and tries the next seat when the subtree below fails.
//!
//! The first complete assignment wins. No score is optimised.

mod consistency;
mod domain;
mod model;
mod selector;
mod state;

use rand::Rng;
use tracing::{debug, trace};

use seatforge_core::{InputError, Problem, Seating};

use crate::scope::SolverScope;
use crate::termination::Termination;

use model::SearchModel;
use state::SearchState;

/// How a search run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Every student was seated.
    Solved(Seating),
    /// The whole tree was explored without a complete assignment.
    Exhausted,
    /// A termination fired before the search finished.
    Terminated,
}

enum Step {
    Solved,
    Exhausted,
    Terminated,
}

/// Backtracking search for one problem.
///
/// The caller is responsible for the capacity pre-check; the search itself
/// only fails by exhausting the tree or being terminated.
#[derive(Debug)]
pub struct BacktrackingSearch<'p, T> {
    model: SearchModel<'p>,
    state: SearchState,
    termination: T,
}

impl<'p, T: Termination> BacktrackingSearch<'p, T> {
    /// Compiles the problem. Fails only on constraints naming students
    /// absent from the roster.
    pub fn new(problem: &'p Problem, termination: T) -> Result<Self, InputError> {
        let model = SearchModel::compile(problem)?;
        let state = SearchState::new(model.layout(), model.student_count());
        Ok(Self {
            model,
            state,
            termination,
        })
    }

    /// Runs the search to its first solution.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        scope: &mut SolverScope,
        rng: &mut R,
    ) -> SearchOutcome {
        match self.backtrack(scope, rng) {
            Step::Solved => SearchOutcome::Solved(self.state.to_seating(&self.model)),
            Step::Exhausted => SearchOutcome::Exhausted,
            Step::Terminated => SearchOutcome::Terminated,
        }
    }

    fn backtrack<R: Rng + ?Sized>(&mut self, scope: &mut SolverScope, rng: &mut R) -> Step {
        if self.state.is_complete() {
            return Step::Solved;
        }
        let Some(student) = selector::select_student(&self.model, &self.state) else {
            return Step::Exhausted;
        };
        let depth = self.state.placed_count() + 1;

        let mut candidates = domain::candidates(&self.model, &self.state, student);
        domain::order_front_to_back(&mut candidates, rng);
        debug!(
            event = "variable_selected",
            student = self.model.name(student),
            depth,
            candidates = candidates.len(),
        );

        for pos in candidates {
            if self.termination.is_terminated(scope) {
                return Step::Terminated;
            }
            scope.record_node(depth);

            self.state.place(student, pos);
            trace!(
                event = "place",
                student = self.model.name(student),
                row = pos.row,
                col = pos.col,
            );

            if consistency::is_consistent(&self.model, &self.state, student, pos) {
                match self.backtrack(scope, rng) {
                    Step::Solved => return Step::Solved,
                    Step::Terminated => return Step::Terminated,
                    Step::Exhausted => {}
                }
            } else {
                scope.record_rejection();
            }

            self.state.unplace(student);
            scope.record_backtrack();
            trace!(
                event = "backtrack",
                student = self.model.name(student),
                row = pos.row,
                col = pos.col,
            );
        }
        Step::Exhausted
    }
}

#[cfg(test)]
mod tests;
