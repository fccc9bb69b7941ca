//! Entity selectors for iterating over planning entities

use std::fmt::Debug;

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

/// Trait for selecting entities from a planning solution.
///
/// Entity selectors provide an iteration order over the entities of one
/// entity type; yielded items are entity indices within that type's
/// collection.
pub trait EntitySelector<S: PlanningSolution>: Send + Debug {
    /// Returns an iterator over entity indices.
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = usize> + 'a>;

    /// Returns the number of entities this selector yields.
    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize;

    /// Returns the entity descriptor index this selector operates on.
    fn descriptor_index(&self) -> usize;
}

/// An entity selector that iterates over all entities of one descriptor,
/// in index order.
#[derive(Debug, Clone)]
pub struct FromSolutionEntitySelector {
    descriptor_index: usize,
}

impl FromSolutionEntitySelector {
    /// Creates a new entity selector for the given descriptor index.
    pub fn new(descriptor_index: usize) -> Self {
        Self { descriptor_index }
    }
}

impl<S: PlanningSolution> EntitySelector<S> for FromSolutionEntitySelector {
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        let count = score_director
            .entity_count(self.descriptor_index)
            .unwrap_or(0);
        Box::new(0..count)
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        score_director
            .entity_count(self.descriptor_index)
            .unwrap_or(0)
    }

    fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }
}
