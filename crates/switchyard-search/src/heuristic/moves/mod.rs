//! Move system for modifying planning solutions.
//!
//! Moves are the fundamental operations that modify planning variables
//! during solving. The search loop explores the solution space by applying
//! candidate moves speculatively, scoring the result, and undoing every
//! move that does not win its step.
//!
//! # Architecture
//!
//! All moves are fully typed with inline data - no boxing, no downcasting:
//! - `ChangeMove<S, V>` - assigns a value to one entity's variable
//! - `SwapMove<S, V>` - exchanges variable values between two entities
//! - `PillarSwapMove<S, V>` - exchanges values between two pillars
//! - `CompositeMove<M1, M2>` - applies two moves in sequence
//!
//! Every move can construct its own exact inverse via `create_undo_move`;
//! the decider relies on this to restore the working solution after each
//! speculative application.

mod change;
mod composite;
mod pillar_swap;
mod swap;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use switchyard_core::domain::{EntityRef, PlanningSolution};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

pub use change::ChangeMove;
pub use composite::CompositeMove;
pub use pillar_swap::PillarSwapMove;
pub use swap::SwapMove;

/// A reversible, self-describing unit of change to the working solution.
///
/// Moves are immutable command objects: they hold the variable handles and
/// entity indices they will touch, never solution-wide state. All solution
/// access goes through the score director at evaluation time.
///
/// # Lifecycle
///
/// `Constructed -> (is_doable? checked) -> applied -> undo constructed ->
/// undo applied`. A move may be checked any number of times before being
/// applied at most once; applying a move twice without an intervening undo
/// is caller error.
///
/// # Type Parameters
/// * `S` - The planning solution type
pub trait Move<S: PlanningSolution>: Send + Sync + Debug + Clone {
    /// Returns true if this move can change the current solution.
    ///
    /// A move is not doable when applying it would provably produce no
    /// different solution (all affected values already equal) or when a
    /// value it would assign falls outside an entity's legal range. Both
    /// are expected control-flow outcomes, not errors; the method performs
    /// no mutation either way.
    ///
    /// Returns `Err` only for hard failures such as a value-range provider
    /// that cannot produce a range (a domain-configuration defect).
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> Result<bool>;

    /// Executes this move, modifying the working solution.
    ///
    /// Every individual variable write is bracketed by the director's
    /// before/after notifications. Doability is the caller's
    /// responsibility: check `is_doable` first.
    fn apply<D: ScoreDirector<S>>(&self, score_director: &mut D);

    /// Constructs the exact inverse of this move.
    ///
    /// This is pure construction - it performs no mutation and may be
    /// called either before or after `apply`. Applying the returned move
    /// after this move restores every affected variable to its prior
    /// value.
    fn create_undo_move<D: ScoreDirector<S>>(&self, score_director: &D) -> Self;

    /// Returns the entities this move touches, for diagnostics and
    /// conflict detection by outer layers.
    fn planning_entities(&self) -> Vec<EntityRef>;

    /// Returns, per affected variable, the values as they stand before
    /// mutation, rendered for trace logs.
    fn planning_values<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<String>;

    /// A human-readable move-type description, e.g. `PillarSwapMove(day)`.
    fn describe(&self) -> String;

    /// A deterministic rendering of this move showing the affected
    /// entities and the values being exchanged, for trace logs and for
    /// reproducing reported search steps.
    fn render<D: ScoreDirector<S>>(&self, score_director: &D) -> String;
}
