//! The local search decider: speculative apply, conditional undo.
//!
//! For every candidate move the decider checks doability, applies the move
//! through the score director, scores the result, asks the acceptor for a
//! verdict, and then undoes the move via its inverse before evaluating the
//! next candidate. The step's winner is the one move the phase re-applies
//! afterwards; every other applied move has been undone by then, which is
//! why move undoability is load-bearing rather than a convenience.

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::trace;

use switchyard_core::domain::PlanningSolution;
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use crate::heuristic::moves::Move;

use super::acceptor::Acceptor;
use super::forager::LocalSearchForager;

/// Drives one step of local search over a batch of candidate moves.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `A` - The acceptor type
/// * `Fo` - The forager type
pub struct LocalSearchDecider<S, A, Fo> {
    acceptor: A,
    forager: Fo,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, A, Fo> Debug for LocalSearchDecider<S, A, Fo>
where
    A: Debug,
    Fo: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchDecider")
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .finish()
    }
}

impl<S, A, Fo> LocalSearchDecider<S, A, Fo>
where
    S: PlanningSolution,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    /// Creates a new decider.
    pub fn new(acceptor: A, forager: Fo) -> Self {
        Self {
            acceptor,
            forager,
            _phantom: PhantomData,
        }
    }

    /// Returns the acceptor for lifecycle notifications.
    pub fn acceptor_mut(&mut self) -> &mut A {
        &mut self.acceptor
    }

    /// Evaluates the step's candidates and picks a winner.
    ///
    /// Each doable candidate is applied speculatively, scored, and undone
    /// again before the next candidate is touched, so the working solution
    /// leaves this method in its pre-step state regardless of outcome. The
    /// returned index identifies the winning candidate, which the caller
    /// commits by applying it once more.
    ///
    /// Candidates that are not doable are skipped silently; a hard failure
    /// from a doability check aborts the step with all applied moves
    /// already undone.
    pub fn decide<M, D>(
        &mut self,
        score_director: &mut D,
        candidates: &[M],
        last_step_score: S::Score,
    ) -> Result<Option<(usize, S::Score)>>
    where
        M: Move<S>,
        D: ScoreDirector<S>,
    {
        self.forager.step_started();

        for (move_index, candidate) in candidates.iter().enumerate() {
            if !candidate.is_doable(score_director)? {
                continue;
            }

            // The undo move is constructed before mutation; applying it
            // right after scoring keeps the pending-undo set at most one
            // deep, so no exit path can leave a speculative change behind.
            let undo_move = candidate.create_undo_move(score_director);
            candidate.apply(score_director);
            let move_score = score_director.calculate_score();
            undo_move.apply(score_director);

            debug_assert_eq!(
                score_director.calculate_score(),
                last_step_score,
                "undo move failed to restore the pre-step score"
            );

            let accepted = self.acceptor.is_accepted(&last_step_score, &move_score);
            trace!(
                move_index,
                score = %move_score,
                accepted,
                kind = %candidate.describe(),
                "evaluated candidate"
            );

            if accepted {
                self.forager.add_move(move_index, move_score);
            }
            if self.forager.is_quit_early() {
                break;
            }
        }

        Ok(self.forager.pick_move())
    }
}
