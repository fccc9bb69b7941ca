//! Local search phase
//!
//! Improves an existing solution by iteratively applying moves that are
//! accepted according to an acceptance criterion. Each step speculatively
//! applies candidate moves, scores them, undoes every candidate, and then
//! commits the step's winner.

mod acceptor;
mod decider;
mod forager;
mod phase;


pub use acceptor::{
    Acceptor, AnyAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor,
};
pub use decider::LocalSearchDecider;
pub use forager::{AcceptedCountForager, BestScoreForager, LocalSearchForager};
pub use phase::LocalSearchPhase;
