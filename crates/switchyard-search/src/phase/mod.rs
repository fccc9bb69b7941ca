//! Solver phases.

pub mod localsearch;

use switchyard_core::domain::PlanningSolution;
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use crate::scope::SolverScope;

/// A phase of the solving process.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `D` - The score director type
pub trait Phase<S: PlanningSolution, D: ScoreDirector<S>>: Send {
    /// Runs this phase against the solver scope's working solution.
    ///
    /// Returns `Err` only on hard failures (configuration defects,
    /// protocol violations); running out of candidate moves is normal
    /// termination.
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) -> Result<()>;

    /// Returns the phase type name for logging.
    fn phase_type_name(&self) -> &'static str;
}
