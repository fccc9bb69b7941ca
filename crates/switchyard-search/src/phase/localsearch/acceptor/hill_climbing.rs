//! Hill climbing acceptor.

use switchyard_core::domain::PlanningSolution;

use super::Acceptor;

/// Hill climbing acceptor - accepts only strictly improving moves.
///
/// This is the simplest acceptor. It only accepts moves that result in a
/// strictly better score than the last step, so it can get stuck in local
/// optima.
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> Acceptor<S> for HillClimbingAcceptor {
    fn is_accepted(&mut self, last_step_score: &S::Score, move_score: &S::Score) -> bool {
        move_score > last_step_score
    }
}
