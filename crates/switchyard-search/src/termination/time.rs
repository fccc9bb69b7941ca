//! Time-based termination.

use std::time::Duration;

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a time limit.
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    /// Creates a termination with the given time limit.
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// Terminate after the given number of milliseconds.
    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Terminate after the given number of seconds.
    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.elapsed().is_some_and(|e| e >= self.limit)
    }
}
