//! Unimproved-step-count termination.

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when the best solution has not improved for a number of
/// steps.
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    unimproved_step_limit: u64,
}

impl UnimprovedStepCountTermination {
    /// Creates a termination with the given unimproved-step limit.
    pub fn new(unimproved_step_limit: u64) -> Self {
        Self {
            unimproved_step_limit,
        }
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D>
    for UnimprovedStepCountTermination
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        let since_improvement =
            solver_scope.total_step_count() - solver_scope.last_improvement_step();
        since_improvement >= self.unimproved_step_limit
    }
}
