//! Incremental score director with per-entity contribution caching.

use switchyard_core::domain::{PlanningSolution, SolutionDescriptor};
use switchyard_core::score::Score;

use super::traits::ScoreDirector;

/// A score director that keeps one cached score contribution per entity.
///
/// The calculator maps `(solution, descriptor_index, entity_index)` to that
/// entity's contribution; the total score is the sum over all entities.
/// `before_variable_changed` retracts the touched entity's cached
/// contribution, `after_variable_changed` recomputes and re-inserts it, so
/// `calculate_score` runs in time proportional to the entities touched
/// since the last call rather than the whole solution.
///
/// # Protocol
///
/// Every variable write must be bracketed, and the write must target the
/// entity named in the bracket. A mutation outside a bracket corrupts the
/// cached total; debug builds assert on the mismatch, release builds do
/// not attempt repair.
pub struct IncrementalScoreDirector<S: PlanningSolution, C> {
    working_solution: S,
    solution_descriptor: SolutionDescriptor<S>,
    contribution: C,
    contributions: Vec<Vec<S::Score>>,
    total: S::Score,
    initialized: bool,
    open_brackets: Vec<(usize, usize)>,
}

impl<S, C> IncrementalScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S, usize, usize) -> S::Score + Send + Sync,
{
    /// Creates a new incremental director.
    pub fn new(solution: S, solution_descriptor: SolutionDescriptor<S>, contribution: C) -> Self {
        IncrementalScoreDirector {
            working_solution: solution,
            solution_descriptor,
            contribution,
            contributions: Vec::new(),
            total: S::Score::zero(),
            initialized: false,
            open_brackets: Vec::new(),
        }
    }

    /// Returns the cached contribution of one entity.
    ///
    /// Only meaningful outside an open bracket.
    pub fn entity_contribution(&self, descriptor_index: usize, entity_index: usize) -> S::Score {
        self.contributions
            .get(descriptor_index)
            .and_then(|c| c.get(entity_index))
            .copied()
            .unwrap_or_else(S::Score::zero)
    }

    fn ensure_initialized(&mut self) {
        if self.initialized {
            return;
        }
        let mut total = S::Score::zero();
        let mut contributions = Vec::with_capacity(self.solution_descriptor.entity_descriptors.len());
        for (descriptor_index, entity_descriptor) in
            self.solution_descriptor.entity_descriptors.iter().enumerate()
        {
            let count = entity_descriptor.entity_count(&self.working_solution);
            let mut per_entity = Vec::with_capacity(count);
            for entity_index in 0..count {
                let c = (self.contribution)(&self.working_solution, descriptor_index, entity_index);
                total = total + c;
                per_entity.push(c);
            }
            contributions.push(per_entity);
        }
        self.contributions = contributions;
        self.total = total;
        self.initialized = true;
    }
}

impl<S, C> ScoreDirector<S> for IncrementalScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S, usize, usize) -> S::Score + Send + Sync,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        debug_assert!(
            !self.initialized || !self.open_brackets.is_empty(),
            "variable mutation outside a before/after notification bracket"
        );
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        debug_assert!(
            self.open_brackets.is_empty(),
            "calculate_score inside an open notification bracket"
        );
        self.ensure_initialized();
        let score = self.total;
        self.working_solution.set_score(Some(score));
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
        descriptor_index: usize,
        entity_index: usize,
        _variable_name: &str,
    ) {
        self.ensure_initialized();
        self.open_brackets.push((descriptor_index, entity_index));
        self.total = self.total - self.entity_contribution(descriptor_index, entity_index);
    }

    fn after_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        _variable_name: &str,
    ) {
        let key = (descriptor_index, entity_index);
        let position = self.open_brackets.iter().rposition(|&k| k == key);
        debug_assert!(
            position.is_some(),
            "after_variable_changed for {key:?} without a matching before_variable_changed"
        );
        if let Some(position) = position {
            self.open_brackets.remove(position);
        }

        let c = (self.contribution)(&self.working_solution, descriptor_index, entity_index);
        if let Some(slot) = self
            .contributions
            .get_mut(descriptor_index)
            .and_then(|per_entity| per_entity.get_mut(entity_index))
        {
            *slot = c;
        }
        self.total = self.total + c;
    }

    fn entity_count(&self, descriptor_index: usize) -> Option<usize> {
        self.solution_descriptor
            .entity_count(&self.working_solution, descriptor_index)
    }

    fn is_incremental(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.initialized = false;
        self.contributions.clear();
        self.total = S::Score::zero();
        self.open_brackets.clear();
    }
}
