//! PillarSwapMove - exchanges values between two pillars.
//!
//! A pillar is a group of entities that currently share the same values
//! for a tracked set of variables. This move swaps those values between
//! two pillars atomically: every left-pillar entity receives the right
//! pillar's value and vice versa, variable by variable.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use switchyard_core::domain::{EntityRef, PlanningSolution, VariableHandle};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use crate::heuristic::selector::Pillar;

use super::Move;

/// A move that swaps the values of a variable set between two pillars.
///
/// The representative value of a pillar is always read from its first
/// entity before any mutation begins, so every member of a pillar receives
/// the identical target value even though members are written one at a
/// time. Variables whose representative values are already equal on both
/// pillars are left untouched and their entities are not notified.
///
/// # Equality
///
/// Two pillar swap moves are equal iff their variable handle lists and
/// their left/right pillars are equal as ordered sequences. Swapping left
/// and right produces a different move unless both pillars are identical.
/// Selectors emit canonically ordered pillars, which makes this equality
/// stable across runs.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The variable value type
pub struct PillarSwapMove<S, V> {
    variables: SmallVec<[VariableHandle<S, V>; 2]>,
    descriptor_index: usize,
    left_pillar: Pillar,
    right_pillar: Pillar,
}

impl<S, V> Clone for PillarSwapMove<S, V> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            descriptor_index: self.descriptor_index,
            left_pillar: self.left_pillar.clone(),
            right_pillar: self.right_pillar.clone(),
        }
    }
}

impl<S, V: Debug> Debug for PillarSwapMove<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PillarSwapMove")
            .field(
                "variables",
                &self.variables.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .field("descriptor_index", &self.descriptor_index)
            .field("left_pillar", &self.left_pillar)
            .field("right_pillar", &self.right_pillar)
            .finish()
    }
}

impl<S, V> PartialEq for PillarSwapMove<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
            && self.descriptor_index == other.descriptor_index
            && self.left_pillar == other.left_pillar
            && self.right_pillar == other.right_pillar
    }
}

impl<S, V> Eq for PillarSwapMove<S, V> {}

impl<S, V> Hash for PillarSwapMove<S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variables.hash(state);
        self.descriptor_index.hash(state);
        self.left_pillar.hash(state);
        self.right_pillar.hash(state);
    }
}

impl<S, V: Clone> PillarSwapMove<S, V> {
    /// Creates a new pillar swap move.
    ///
    /// Both pillars must be non-empty and belong to the entity type at
    /// `descriptor_index`.
    pub fn new(
        variables: SmallVec<[VariableHandle<S, V>; 2]>,
        descriptor_index: usize,
        left_pillar: Pillar,
        right_pillar: Pillar,
    ) -> Self {
        debug_assert!(!left_pillar.is_empty() && !right_pillar.is_empty());
        Self {
            variables,
            descriptor_index,
            left_pillar,
            right_pillar,
        }
    }

    /// Returns the left pillar.
    pub fn left_pillar(&self) -> &Pillar {
        &self.left_pillar
    }

    /// Returns the right pillar.
    pub fn right_pillar(&self) -> &Pillar {
        &self.right_pillar
    }

    /// Returns the affected variable handles.
    pub fn variables(&self) -> &[VariableHandle<S, V>] {
        &self.variables
    }

    fn render_pillar(&self, solution: &S, pillar: &Pillar) -> String
    where
        V: Debug,
    {
        let values: Vec<String> = self
            .variables
            .iter()
            .map(|v| format!("{:?}", v.value(solution, pillar.representative())))
            .collect();
        format!("{:?} {{{}}}", pillar.entities(), values.join(", "))
    }
}

impl<S, V> Move<S> for PillarSwapMove<S, V>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> Result<bool> {
        let solution = score_director.working_solution();
        let mut movable = false;
        for variable in &self.variables {
            let left_value = variable.value(solution, self.left_pillar.representative());
            let right_value = variable.value(solution, self.right_pillar.representative());
            if left_value == right_value {
                continue;
            }
            movable = true;
            if !variable.is_value_range_entity_independent() {
                // Every entity must accept the other pillar's value; the
                // check is conjunctive across all entities and variables.
                for &right_entity in self.right_pillar.iter() {
                    let range = variable.extract_value_range(solution, right_entity)?;
                    if !range.contains_opt(left_value.as_ref()) {
                        return Ok(false);
                    }
                }
                for &left_entity in self.left_pillar.iter() {
                    let range = variable.extract_value_range(solution, left_entity)?;
                    if !range.contains_opt(right_value.as_ref()) {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(movable)
    }

    fn apply<D: ScoreDirector<S>>(&self, score_director: &mut D) {
        for variable in &self.variables {
            // Representative values are read before any mutation of this
            // variable so all pillar members receive the same target.
            let solution = score_director.working_solution();
            let old_left_value = variable.value(solution, self.left_pillar.representative());
            let old_right_value = variable.value(solution, self.right_pillar.representative());
            if old_left_value == old_right_value {
                continue;
            }

            for &left_entity in self.left_pillar.iter() {
                score_director.before_variable_changed(
                    self.descriptor_index,
                    left_entity,
                    variable.name(),
                );
                variable.set_value(
                    score_director.working_solution_mut(),
                    left_entity,
                    old_right_value.clone(),
                );
                score_director.after_variable_changed(
                    self.descriptor_index,
                    left_entity,
                    variable.name(),
                );
            }
            for &right_entity in self.right_pillar.iter() {
                score_director.before_variable_changed(
                    self.descriptor_index,
                    right_entity,
                    variable.name(),
                );
                variable.set_value(
                    score_director.working_solution_mut(),
                    right_entity,
                    old_left_value.clone(),
                );
                score_director.after_variable_changed(
                    self.descriptor_index,
                    right_entity,
                    variable.name(),
                );
            }
        }
    }

    fn create_undo_move<D: ScoreDirector<S>>(&self, _score_director: &D) -> Self {
        // Swap is self-inverse on representative values: exchanging the
        // pillars reverses the move exactly.
        Self {
            variables: self.variables.clone(),
            descriptor_index: self.descriptor_index,
            left_pillar: self.right_pillar.clone(),
            right_pillar: self.left_pillar.clone(),
        }
    }

    fn planning_entities(&self) -> Vec<EntityRef> {
        self.left_pillar
            .iter()
            .chain(self.right_pillar.iter())
            .map(|&entity_index| EntityRef::new(self.descriptor_index, entity_index))
            .collect()
    }

    fn planning_values<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<String> {
        let solution = score_director.working_solution();
        self.variables
            .iter()
            .flat_map(|variable| {
                [
                    format!(
                        "{:?}",
                        variable.value(solution, self.left_pillar.representative())
                    ),
                    format!(
                        "{:?}",
                        variable.value(solution, self.right_pillar.representative())
                    ),
                ]
            })
            .collect()
    }

    fn describe(&self) -> String {
        let names: Vec<_> = self.variables.iter().map(|v| v.name()).collect();
        format!("PillarSwapMove({})", names.join(", "))
    }

    fn render<D: ScoreDirector<S>>(&self, score_director: &D) -> String {
        let solution = score_director.working_solution();
        format!(
            "{} <-> {}",
            self.render_pillar(solution, &self.left_pillar),
            self.render_pillar(solution, &self.right_pillar)
        )
    }
}
