//! Local search phase implementation.

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::{debug, info};

use switchyard_core::domain::PlanningSolution;
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use crate::heuristic::moves::Move;
use crate::heuristic::selector::MoveSelector;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope, StepScope};

use super::acceptor::Acceptor;
use super::decider::LocalSearchDecider;
use super::forager::LocalSearchForager;

/// Local search phase that improves an existing solution.
///
/// Each step:
/// 1. Pulls a batch of candidate moves from the selector
/// 2. Lets the decider evaluate them (speculative apply, score, accept,
///    undo)
/// 3. Commits the winning move by applying it again
/// 4. Updates the best-solution snapshot when the step improved it
///
/// Termination and cancellation are checked between steps only, so a
/// move's apply/undo pair always completes atomically with respect to
/// cancellation.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `M` - The move type
/// * `MS` - The move selector type
/// * `A` - The acceptor type
/// * `Fo` - The forager type
pub struct LocalSearchPhase<S, M, MS, A, Fo> {
    move_selector: MS,
    decider: LocalSearchDecider<S, A, Fo>,
    step_limit: Option<u64>,
    _phantom: PhantomData<fn() -> M>,
}

impl<S, M, MS, A, Fo> LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    /// Creates a new local search phase.
    pub fn new(move_selector: MS, acceptor: A, forager: Fo, step_limit: Option<u64>) -> Self {
        Self {
            move_selector,
            decider: LocalSearchDecider::new(acceptor, forager),
            step_limit,
            _phantom: PhantomData,
        }
    }
}

impl<S, M, MS, A, Fo> Debug for LocalSearchPhase<S, M, MS, A, Fo>
where
    MS: Debug,
    A: Debug,
    Fo: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("decider", &self.decider)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}

impl<S, D, M, MS, A, Fo> Phase<S, D> for LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) -> Result<()> {
        let mut phase_scope = PhaseScope::new(solver_scope, 0);

        let mut last_step_score = phase_scope.calculate_score();
        self.decider.acceptor_mut().phase_started(&last_step_score);
        info!(score = %last_step_score, "local search started");

        loop {
            // Cancellation and termination are coarse-grained: checked
            // between steps, never mid-move.
            if phase_scope.solver_scope().should_terminate() {
                debug!("termination requested");
                break;
            }
            if let Some(limit) = self.step_limit {
                if phase_scope.step_count() >= limit {
                    debug!(limit, "step limit reached");
                    break;
                }
            }

            let mut step_scope = StepScope::new(&mut phase_scope);

            let candidates: Vec<M> = self
                .move_selector
                .iter_moves(step_scope.score_director())
                .collect::<Result<_>>()?;
            if candidates.is_empty() {
                // Selector exhaustion is normal termination, not a failure.
                debug!("no further candidates");
                break;
            }

            let winner = self.decider.decide(
                step_scope.score_director_mut(),
                &candidates,
                last_step_score,
            )?;

            match winner {
                Some((move_index, step_score)) => {
                    let winning_move = &candidates[move_index];
                    let rendered = winning_move.render(step_scope.score_director());
                    winning_move.apply(step_scope.score_director_mut());

                    debug!(
                        step = step_scope.step_index(),
                        score = %step_score,
                        winner = %rendered,
                        "step committed"
                    );

                    step_scope.set_step_score(step_score);
                    last_step_score = step_score;
                    self.decider.acceptor_mut().step_ended(&step_score);
                    step_scope.phase_scope_mut().update_best_solution();
                    step_scope.complete();
                }
                None => {
                    // No accepted candidate: the working solution is back
                    // in its pre-step state and the phase is stuck.
                    debug!("no accepted move");
                    break;
                }
            }
        }

        self.decider.acceptor_mut().phase_ended();
        info!(
            steps = phase_scope.step_count(),
            score = %last_step_score,
            "local search ended"
        );
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
