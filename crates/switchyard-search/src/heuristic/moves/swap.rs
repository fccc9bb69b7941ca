//! SwapMove - exchanges variable values between two entities.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use switchyard_core::domain::{EntityRef, PlanningSolution, VariableHandle};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use super::Move;

/// A move that exchanges the values of one or more planning variables
/// between two entities.
///
/// For variables whose value range is entity-dependent, doability requires
/// that each entity accepts the other's current value.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The variable value type
pub struct SwapMove<S, V> {
    left_entity_index: usize,
    right_entity_index: usize,
    descriptor_index: usize,
    variables: SmallVec<[VariableHandle<S, V>; 2]>,
}

impl<S, V> Clone for SwapMove<S, V> {
    fn clone(&self) -> Self {
        Self {
            left_entity_index: self.left_entity_index,
            right_entity_index: self.right_entity_index,
            descriptor_index: self.descriptor_index,
            variables: self.variables.clone(),
        }
    }
}

impl<S, V: Debug> Debug for SwapMove<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapMove")
            .field("left_entity_index", &self.left_entity_index)
            .field("right_entity_index", &self.right_entity_index)
            .field("descriptor_index", &self.descriptor_index)
            .field(
                "variables",
                &self.variables.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<S, V> PartialEq for SwapMove<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.left_entity_index == other.left_entity_index
            && self.right_entity_index == other.right_entity_index
            && self.descriptor_index == other.descriptor_index
            && self.variables == other.variables
    }
}

impl<S, V> Eq for SwapMove<S, V> {}

impl<S, V> Hash for SwapMove<S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.left_entity_index.hash(state);
        self.right_entity_index.hash(state);
        self.descriptor_index.hash(state);
        self.variables.hash(state);
    }
}

impl<S, V: Clone> SwapMove<S, V> {
    /// Creates a new swap move.
    pub fn new(
        left_entity_index: usize,
        right_entity_index: usize,
        descriptor_index: usize,
        variables: SmallVec<[VariableHandle<S, V>; 2]>,
    ) -> Self {
        Self {
            left_entity_index,
            right_entity_index,
            descriptor_index,
            variables,
        }
    }

    /// Returns the left entity index.
    pub fn left_entity_index(&self) -> usize {
        self.left_entity_index
    }

    /// Returns the right entity index.
    pub fn right_entity_index(&self) -> usize {
        self.right_entity_index
    }
}

impl<S, V> Move<S> for SwapMove<S, V>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> Result<bool> {
        if self.left_entity_index == self.right_entity_index {
            return Ok(false);
        }
        let count = score_director.entity_count(self.descriptor_index).unwrap_or(0);
        if self.left_entity_index >= count || self.right_entity_index >= count {
            return Ok(false);
        }

        let solution = score_director.working_solution();
        let mut movable = false;
        for variable in &self.variables {
            let left_value = variable.value(solution, self.left_entity_index);
            let right_value = variable.value(solution, self.right_entity_index);
            if left_value == right_value {
                continue;
            }
            movable = true;
            if !variable.is_value_range_entity_independent() {
                let right_range =
                    variable.extract_value_range(solution, self.right_entity_index)?;
                if !right_range.contains_opt(left_value.as_ref()) {
                    return Ok(false);
                }
                let left_range = variable.extract_value_range(solution, self.left_entity_index)?;
                if !left_range.contains_opt(right_value.as_ref()) {
                    return Ok(false);
                }
            }
        }
        Ok(movable)
    }

    fn apply<D: ScoreDirector<S>>(&self, score_director: &mut D) {
        for variable in &self.variables {
            let solution = score_director.working_solution();
            let left_value = variable.value(solution, self.left_entity_index);
            let right_value = variable.value(solution, self.right_entity_index);
            if left_value == right_value {
                continue;
            }

            score_director.before_variable_changed(
                self.descriptor_index,
                self.left_entity_index,
                variable.name(),
            );
            variable.set_value(
                score_director.working_solution_mut(),
                self.left_entity_index,
                right_value,
            );
            score_director.after_variable_changed(
                self.descriptor_index,
                self.left_entity_index,
                variable.name(),
            );

            score_director.before_variable_changed(
                self.descriptor_index,
                self.right_entity_index,
                variable.name(),
            );
            variable.set_value(
                score_director.working_solution_mut(),
                self.right_entity_index,
                left_value,
            );
            score_director.after_variable_changed(
                self.descriptor_index,
                self.right_entity_index,
                variable.name(),
            );
        }
    }

    fn create_undo_move<D: ScoreDirector<S>>(&self, _score_director: &D) -> Self {
        Self {
            left_entity_index: self.right_entity_index,
            right_entity_index: self.left_entity_index,
            descriptor_index: self.descriptor_index,
            variables: self.variables.clone(),
        }
    }

    fn planning_entities(&self) -> Vec<EntityRef> {
        vec![
            EntityRef::new(self.descriptor_index, self.left_entity_index),
            EntityRef::new(self.descriptor_index, self.right_entity_index),
        ]
    }

    fn planning_values<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<String> {
        let solution = score_director.working_solution();
        self.variables
            .iter()
            .flat_map(|variable| {
                [
                    format!("{:?}", variable.value(solution, self.left_entity_index)),
                    format!("{:?}", variable.value(solution, self.right_entity_index)),
                ]
            })
            .collect()
    }

    fn describe(&self) -> String {
        let names: Vec<_> = self.variables.iter().map(|v| v.name()).collect();
        format!("SwapMove({})", names.join(", "))
    }

    fn render<D: ScoreDirector<S>>(&self, score_director: &D) -> String {
        let solution = score_director.working_solution();
        let left: Vec<String> = self
            .variables
            .iter()
            .map(|v| format!("{:?}", v.value(solution, self.left_entity_index)))
            .collect();
        let right: Vec<String> = self
            .variables
            .iter()
            .map(|v| format!("{:?}", v.value(solution, self.right_entity_index)))
            .collect();
        format!(
            "[{}] {{{}}} <-> [{}] {{{}}}",
            self.left_entity_index,
            left.join(", "),
            self.right_entity_index,
            right.join(", ")
        )
    }
}
