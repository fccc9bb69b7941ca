//! ChangeMove - assigns a value to one entity's variable.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use switchyard_core::domain::{EntityRef, PlanningSolution, VariableHandle};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use super::Move;

/// A move that assigns a new value to a single entity's planning variable.
///
/// Selectors draw the target value from the variable's extracted value
/// range, so `is_doable` only has to rule out the no-op case.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The variable value type
pub struct ChangeMove<S, V> {
    entity_index: usize,
    descriptor_index: usize,
    variable: VariableHandle<S, V>,
    to_value: Option<V>,
}

impl<S, V: Clone> Clone for ChangeMove<S, V> {
    fn clone(&self) -> Self {
        Self {
            entity_index: self.entity_index,
            descriptor_index: self.descriptor_index,
            variable: self.variable,
            to_value: self.to_value.clone(),
        }
    }
}

impl<S, V: Debug> Debug for ChangeMove<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMove")
            .field("entity_index", &self.entity_index)
            .field("descriptor_index", &self.descriptor_index)
            .field("variable", &self.variable.name())
            .field("to_value", &self.to_value)
            .finish()
    }
}

impl<S, V: PartialEq> PartialEq for ChangeMove<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entity_index == other.entity_index
            && self.descriptor_index == other.descriptor_index
            && self.variable == other.variable
            && self.to_value == other.to_value
    }
}

impl<S, V: Eq> Eq for ChangeMove<S, V> {}

impl<S, V: Hash> Hash for ChangeMove<S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity_index.hash(state);
        self.descriptor_index.hash(state);
        self.variable.hash(state);
        self.to_value.hash(state);
    }
}

impl<S, V: Clone> ChangeMove<S, V> {
    /// Creates a new change move.
    pub fn new(
        entity_index: usize,
        descriptor_index: usize,
        variable: VariableHandle<S, V>,
        to_value: Option<V>,
    ) -> Self {
        Self {
            entity_index,
            descriptor_index,
            variable,
            to_value,
        }
    }

    /// Returns the index of the entity this move changes.
    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    /// Returns the value this move assigns.
    pub fn to_value(&self) -> Option<&V> {
        self.to_value.as_ref()
    }
}

impl<S, V> Move<S> for ChangeMove<S, V>
where
    S: PlanningSolution,
    V: Clone + PartialEq + Send + Sync + Debug + 'static,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> Result<bool> {
        let count = score_director.entity_count(self.descriptor_index).unwrap_or(0);
        if self.entity_index >= count {
            return Ok(false);
        }
        let current = self
            .variable
            .value(score_director.working_solution(), self.entity_index);
        Ok(current != self.to_value)
    }

    fn apply<D: ScoreDirector<S>>(&self, score_director: &mut D) {
        score_director.before_variable_changed(
            self.descriptor_index,
            self.entity_index,
            self.variable.name(),
        );
        self.variable.set_value(
            score_director.working_solution_mut(),
            self.entity_index,
            self.to_value.clone(),
        );
        score_director.after_variable_changed(
            self.descriptor_index,
            self.entity_index,
            self.variable.name(),
        );
    }

    fn create_undo_move<D: ScoreDirector<S>>(&self, score_director: &D) -> Self {
        let old_value = self
            .variable
            .value(score_director.working_solution(), self.entity_index);
        Self {
            entity_index: self.entity_index,
            descriptor_index: self.descriptor_index,
            variable: self.variable,
            to_value: old_value,
        }
    }

    fn planning_entities(&self) -> Vec<EntityRef> {
        vec![EntityRef::new(self.descriptor_index, self.entity_index)]
    }

    fn planning_values<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<String> {
        let old_value = self
            .variable
            .value(score_director.working_solution(), self.entity_index);
        vec![format!("{:?} -> {:?}", old_value, self.to_value)]
    }

    fn describe(&self) -> String {
        format!("ChangeMove({})", self.variable.name())
    }

    fn render<D: ScoreDirector<S>>(&self, score_director: &D) -> String {
        let old_value = self
            .variable
            .value(score_director.working_solution(), self.entity_index);
        format!(
            "[{}] {{{:?} -> {:?}}}",
            self.entity_index, old_value, self.to_value
        )
    }
}
