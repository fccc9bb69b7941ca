//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether an evaluated move survives its step, given the
//! previous step's score. This is the minimal accept/continue contract the
//! loop needs; each strategy escapes local optima its own way.

mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;

use std::fmt::Debug;

use switchyard_core::domain::PlanningSolution;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor<S: PlanningSolution>: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be
    /// accepted, given the previous step's score.
    fn is_accepted(&mut self, last_step_score: &S::Score, move_score: &S::Score) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: &S::Score) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step ends with a committed move.
    fn step_ended(&mut self, _step_score: &S::Score) {}
}

/// Closed-set dispatch over the shipped acceptor strategies.
///
/// Built by [`LocalSearchConfig`](crate::config::LocalSearchConfig) so a
/// configured phase does not need a type parameter per strategy.
pub enum AnyAcceptor<S: PlanningSolution> {
    /// Accept only strictly improving moves.
    HillClimbing(HillClimbingAcceptor),
    /// Accept moves that beat a score from N steps ago.
    LateAcceptance(LateAcceptanceAcceptor<S>),
    /// Accept worsening moves with temperature-based probability.
    SimulatedAnnealing(SimulatedAnnealingAcceptor),
}

impl<S: PlanningSolution> Debug for AnyAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyAcceptor::HillClimbing(a) => a.fmt(f),
            AnyAcceptor::LateAcceptance(a) => a.fmt(f),
            AnyAcceptor::SimulatedAnnealing(a) => a.fmt(f),
        }
    }
}

impl<S: PlanningSolution> Acceptor<S> for AnyAcceptor<S> {
    fn is_accepted(&mut self, last_step_score: &S::Score, move_score: &S::Score) -> bool {
        match self {
            AnyAcceptor::HillClimbing(a) => {
                Acceptor::<S>::is_accepted(a, last_step_score, move_score)
            }
            AnyAcceptor::LateAcceptance(a) => a.is_accepted(last_step_score, move_score),
            AnyAcceptor::SimulatedAnnealing(a) => {
                Acceptor::<S>::is_accepted(a, last_step_score, move_score)
            }
        }
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        match self {
            AnyAcceptor::HillClimbing(a) => Acceptor::<S>::phase_started(a, initial_score),
            AnyAcceptor::LateAcceptance(a) => a.phase_started(initial_score),
            AnyAcceptor::SimulatedAnnealing(a) => Acceptor::<S>::phase_started(a, initial_score),
        }
    }

    fn phase_ended(&mut self) {
        match self {
            AnyAcceptor::HillClimbing(a) => Acceptor::<S>::phase_ended(a),
            AnyAcceptor::LateAcceptance(a) => Acceptor::<S>::phase_ended(a),
            AnyAcceptor::SimulatedAnnealing(a) => Acceptor::<S>::phase_ended(a),
        }
    }

    fn step_ended(&mut self, step_score: &S::Score) {
        match self {
            AnyAcceptor::HillClimbing(a) => Acceptor::<S>::step_ended(a, step_score),
            AnyAcceptor::LateAcceptance(a) => a.step_ended(step_score),
            AnyAcceptor::SimulatedAnnealing(a) => Acceptor::<S>::step_ended(a, step_score),
        }
    }
}
