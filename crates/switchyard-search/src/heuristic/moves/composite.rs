//! CompositeMove - applies two moves in sequence.

use std::fmt::Debug;

use switchyard_core::domain::{EntityRef, PlanningSolution};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use super::Move;

/// A move that applies two moves in sequence.
///
/// The parts must affect disjoint variables: the composite's undo move is
/// built from the two parts' undo moves, which is exact only when neither
/// part overwrites state the other reads. Selectors that pair moves across
/// different variables satisfy this by construction.
///
/// # Type Parameters
/// * `M1` - The first move type
/// * `M2` - The second move type
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompositeMove<M1, M2> {
    first: M1,
    second: M2,
}

impl<M1: Debug, M2: Debug> Debug for CompositeMove<M1, M2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMove")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<M1, M2> CompositeMove<M1, M2> {
    /// Creates a new composite move from two parts.
    pub fn new(first: M1, second: M2) -> Self {
        Self { first, second }
    }

    /// Returns the first part.
    pub fn first(&self) -> &M1 {
        &self.first
    }

    /// Returns the second part.
    pub fn second(&self) -> &M2 {
        &self.second
    }
}

impl<S, M1, M2> Move<S> for CompositeMove<M1, M2>
where
    S: PlanningSolution,
    M1: Move<S>,
    M2: Move<S>,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> Result<bool> {
        // Both parts are applied unconditionally, so both must be doable.
        Ok(self.first.is_doable(score_director)? && self.second.is_doable(score_director)?)
    }

    fn apply<D: ScoreDirector<S>>(&self, score_director: &mut D) {
        self.first.apply(score_director);
        self.second.apply(score_director);
    }

    fn create_undo_move<D: ScoreDirector<S>>(&self, score_director: &D) -> Self {
        Self {
            first: self.first.create_undo_move(score_director),
            second: self.second.create_undo_move(score_director),
        }
    }

    fn planning_entities(&self) -> Vec<EntityRef> {
        let mut entities = self.first.planning_entities();
        entities.extend(self.second.planning_entities());
        entities
    }

    fn planning_values<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<String> {
        let mut values = self.first.planning_values(score_director);
        values.extend(self.second.planning_values(score_director));
        values
    }

    fn describe(&self) -> String {
        format!(
            "CompositeMove({}, {})",
            self.first.describe(),
            self.second.describe()
        )
    }

    fn render<D: ScoreDirector<S>>(&self, score_director: &D) -> String {
        format!(
            "{} + {}",
            self.first.render(score_director),
            self.second.render(score_director)
        )
    }
}
