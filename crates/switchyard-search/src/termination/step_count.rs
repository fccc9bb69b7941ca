//! Step-count termination.

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a total number of committed steps.
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    step_limit: u64,
}

impl StepCountTermination {
    /// Creates a termination with the given step limit.
    pub fn new(step_limit: u64) -> Self {
        Self { step_limit }
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.total_step_count() >= self.step_limit
    }
}
