//! Termination conditions for the search loop.
//!
//! Terminations are registered on the [`SolverScope`] and consulted
//! between steps only; a running step always completes its apply/undo
//! pairs first.

mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Trait for determining when to stop solving.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `D` - The score director type
pub trait Termination<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool;
}
