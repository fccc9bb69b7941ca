//! Simple score director with full recalculation.

use switchyard_core::domain::{PlanningSolution, SolutionDescriptor};

use super::traits::ScoreDirector;

/// A score director that recalculates the full score each time.
///
/// The calculator is stored as a concrete generic type parameter, not as a
/// boxed closure. Recalculation cost is proportional to the whole solution,
/// so this director suits tests and small problems; use
/// [`IncrementalScoreDirector`](super::IncrementalScoreDirector) when
/// scoring cost matters.
pub struct SimpleScoreDirector<S: PlanningSolution, C> {
    working_solution: S,
    solution_descriptor: SolutionDescriptor<S>,
    score_calculator: C,
    score_dirty: bool,
    cached_score: Option<S::Score>,
    bracket_depth: usize,
}

impl<S, C> SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    /// Creates a new SimpleScoreDirector.
    pub fn new(
        solution: S,
        solution_descriptor: SolutionDescriptor<S>,
        score_calculator: C,
    ) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            solution_descriptor,
            score_calculator,
            score_dirty: true,
            cached_score: None,
            bracket_depth: 0,
        }
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl<S, C> ScoreDirector<S> for SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.mark_dirty();
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        debug_assert_eq!(
            self.bracket_depth, 0,
            "calculate_score inside an open notification bracket"
        );

        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = (self.score_calculator)(&self.working_solution);
        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn solution_descriptor(&self) -> &SolutionDescriptor<S> {
        &self.solution_descriptor
    }

    fn clone_working_solution(&self) -> S {
        self.working_solution.clone()
    }

    fn before_variable_changed(
        &mut self,
        _descriptor_index: usize,
        _entity_index: usize,
        _variable_name: &str,
    ) {
        self.bracket_depth += 1;
        self.mark_dirty();
    }

    fn after_variable_changed(
        &mut self,
        _descriptor_index: usize,
        _entity_index: usize,
        _variable_name: &str,
    ) {
        debug_assert!(
            self.bracket_depth > 0,
            "after_variable_changed without a matching before_variable_changed"
        );
        self.bracket_depth = self.bracket_depth.saturating_sub(1);
    }

    fn entity_count(&self, descriptor_index: usize) -> Option<usize> {
        self.solution_descriptor
            .entity_count(&self.working_solution, descriptor_index)
    }

    fn is_incremental(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.mark_dirty();
        self.cached_score = None;
        self.bracket_depth = 0;
    }
}
