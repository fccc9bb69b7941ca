//! Switchyard Search - move framework and local-search loop
//!
//! This crate provides the search half of the engine:
//! - The [`Move`](heuristic::moves::Move) capability set and the concrete
//!   move kinds (change, swap, pillar swap, composite)
//! - Selectors that enumerate candidate moves from the working solution
//! - The local-search decider and phase (speculative apply, conditional
//!   undo, acceptor/forager selection)
//! - Scope hierarchy, termination conditions and configuration wiring

pub mod config;
pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod termination;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{AcceptorConfig, LocalSearchConfig, TerminationConfig};
pub use heuristic::{
    moves::{ChangeMove, CompositeMove, Move, PillarSwapMove, SwapMove},
    selector::{
        ChangeMoveSelector, DefaultPillarSelector, EntitySelector, FromSolutionEntitySelector,
        MoveSelector, Pillar, PillarSwapMoveSelector, ShuffledSelectionLimit, SwapMoveSelector,
    },
};
pub use phase::{
    localsearch::{
        AcceptedCountForager, Acceptor, AnyAcceptor, BestScoreForager, HillClimbingAcceptor,
        LateAcceptanceAcceptor, LocalSearchDecider, LocalSearchForager, LocalSearchPhase,
        SimulatedAnnealingAcceptor,
    },
    Phase,
};
pub use scope::{PhaseScope, SolverScope, StepScope};
pub use termination::{
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};
