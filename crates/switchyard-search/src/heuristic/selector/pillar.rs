//! Pillar selection: grouping entities that share identical variable values.
//!
//! A pillar is a non-empty ordered group of entities that currently share
//! identical values for a tracked set of variables. Pillars are derived,
//! never persisted: the selector recomputes them from the working solution
//! every time it is asked.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;
use switchyard_core::domain::{PlanningSolution, VariableHandle};
use switchyard_scoring::ScoreDirector;

use super::entity::EntitySelector;

/// A non-empty ordered group of entity indices sharing identical values
/// for a tracked variable set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pillar {
    entities: Vec<usize>,
}

impl Pillar {
    /// Creates a new pillar from the given entity indices.
    pub fn new(entities: Vec<usize>) -> Self {
        debug_assert!(!entities.is_empty(), "a pillar is never empty");
        Self { entities }
    }

    /// Returns the representative entity: the pillar's first member.
    ///
    /// All members share the same tracked values, so any member could
    /// stand in; index 0 keeps reads deterministic.
    pub fn representative(&self) -> usize {
        self.entities[0]
    }

    /// Returns the number of entities in this pillar.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if this pillar has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the entity indices.
    pub fn entities(&self) -> &[usize] {
        &self.entities
    }

    /// Returns an iterator over the entity indices.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.entities.iter()
    }
}

/// Groups entities into pillars by their current value tuple across a
/// variable set.
///
/// Emitted pillars are canonically ordered: entities ascend within each
/// pillar (the entity selector's index order) and pillars are sorted by
/// their first member. Move equality built on these pillars is therefore
/// stable across runs.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The variable value type
/// * `ES` - The entity selector type
pub struct DefaultPillarSelector<S, V, ES> {
    entity_selector: ES,
    variables: SmallVec<[VariableHandle<S, V>; 2]>,
    minimum_pillar_size: usize,
}

impl<S, V: Debug, ES: Debug> Debug for DefaultPillarSelector<S, V, ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPillarSelector")
            .field("entity_selector", &self.entity_selector)
            .field(
                "variables",
                &self.variables.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .field("minimum_pillar_size", &self.minimum_pillar_size)
            .finish()
    }
}

impl<S, V, ES> DefaultPillarSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + 'static,
    ES: EntitySelector<S>,
{
    /// Creates a new pillar selector grouping by the given variables.
    pub fn new(entity_selector: ES, variables: SmallVec<[VariableHandle<S, V>; 2]>) -> Self {
        Self {
            entity_selector,
            variables,
            minimum_pillar_size: 1,
        }
    }

    /// Drops pillars smaller than `size` from the selection.
    pub fn with_minimum_size(mut self, size: usize) -> Self {
        self.minimum_pillar_size = size.max(1);
        self
    }

    /// Returns the tracked variable handles.
    pub fn variables(&self) -> &SmallVec<[VariableHandle<S, V>; 2]> {
        &self.variables
    }

    /// Returns the entity descriptor index this selector operates on.
    pub fn descriptor_index(&self) -> usize {
        self.entity_selector.descriptor_index()
    }

    /// Builds the pillar list from the current solution state.
    pub fn build_pillars<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<Pillar> {
        let solution = score_director.working_solution();

        let mut value_to_entities: HashMap<Vec<Option<V>>, Vec<usize>> = HashMap::new();
        for entity_index in self.entity_selector.iter(score_director) {
            let key: Vec<Option<V>> = self
                .variables
                .iter()
                .map(|variable| variable.value(solution, entity_index))
                .collect();
            value_to_entities.entry(key).or_default().push(entity_index);
        }

        let mut pillars: Vec<Pillar> = value_to_entities
            .into_values()
            .filter(|entities| entities.len() >= self.minimum_pillar_size)
            .map(Pillar::new)
            .collect();
        // canonical order: by first member (members already ascend)
        pillars.sort_by_key(Pillar::representative);
        pillars
    }
}
