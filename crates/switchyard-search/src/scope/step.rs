//! Step-level scope.

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use super::PhaseScope;

/// Scope for a single step within a phase.
pub struct StepScope<'a, 'b, S: PlanningSolution, D: ScoreDirector<S>> {
    phase_scope: &'a mut PhaseScope<'b, S, D>,
    step_index: u64,
    step_score: Option<S::Score>,
}

impl<'a, 'b, S: PlanningSolution, D: ScoreDirector<S>> StepScope<'a, 'b, S, D> {
    /// Creates a new step scope.
    pub fn new(phase_scope: &'a mut PhaseScope<'b, S, D>) -> Self {
        let step_index = phase_scope.step_count();
        Self {
            phase_scope,
            step_index,
            step_score: None,
        }
    }

    /// Returns the step index within the phase.
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    /// Returns the step score, if set.
    pub fn step_score(&self) -> Option<&S::Score> {
        self.step_score.as_ref()
    }

    /// Sets the step score.
    pub fn set_step_score(&mut self, score: S::Score) {
        self.step_score = Some(score);
    }

    /// Marks this step as complete and increments counters.
    pub fn complete(&mut self) {
        self.phase_scope.increment_step_count();
    }

    /// Returns a mutable reference to the phase scope.
    pub fn phase_scope_mut(&mut self) -> &mut PhaseScope<'b, S, D> {
        self.phase_scope
    }

    /// Convenience: returns the score director.
    pub fn score_director(&self) -> &D {
        self.phase_scope.score_director()
    }

    /// Convenience: returns a mutable score director.
    pub fn score_director_mut(&mut self) -> &mut D {
        self.phase_scope.score_director_mut()
    }
}
