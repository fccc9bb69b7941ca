//! Composite terminations.

use std::fmt::Debug;

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when any of its children does.
pub struct OrTermination<S: PlanningSolution, D: ScoreDirector<S>> {
    children: Vec<Box<dyn Termination<S, D>>>,
}

impl<S: PlanningSolution, D: ScoreDirector<S>> OrTermination<S, D> {
    /// Creates a composite over the given children.
    pub fn new(children: Vec<Box<dyn Termination<S, D>>>) -> Self {
        Self { children }
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Debug for OrTermination<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrTermination")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for OrTermination<S, D> {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        self.children.iter().any(|t| t.is_terminated(solver_scope))
    }
}
