//! Shared test fixtures: a tiny shift-rostering domain.
//!
//! Tasks carry one planning variable, `day`. The solution-wide range is
//! the roster's day list; the restricted variant draws from each task's
//! own candidate list instead.

use smallvec::{smallvec, SmallVec};
use switchyard_core::domain::{
    EntityDescriptor, PlanningSolution, SolutionDescriptor, ValueRange, ValueRangeSource,
    VariableDescriptor, VariableHandle,
};
use switchyard_core::score::SimpleScore;
use switchyard_scoring::{IncrementalScoreDirector, SimpleScoreDirector};

#[derive(Clone, Debug)]
pub struct Task {
    pub day: Option<u32>,
    pub candidate_days: Vec<u32>,
}

#[derive(Clone, Debug)]
pub struct Roster {
    pub tasks: Vec<Task>,
    pub days: Vec<u32>,
    pub score: Option<SimpleScore>,
}

impl Roster {
    /// Builds a roster with the given assignments; every task may take any
    /// of `days`.
    pub fn new(assigned: &[Option<u32>], days: Vec<u32>) -> Self {
        Self {
            tasks: assigned
                .iter()
                .map(|day| Task {
                    day: *day,
                    candidate_days: days.clone(),
                })
                .collect(),
            days,
            score: None,
        }
    }

    pub fn assigned_days(&self) -> Vec<Option<u32>> {
        self.tasks.iter().map(|t| t.day).collect()
    }
}

impl PlanningSolution for Roster {
    type Score = SimpleScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

pub fn get_day(s: &Roster, idx: usize) -> Option<u32> {
    s.tasks.get(idx).and_then(|t| t.day)
}

pub fn set_day(s: &mut Roster, idx: usize, v: Option<u32>) {
    if let Some(t) = s.tasks.get_mut(idx) {
        t.day = v;
    }
}

fn all_days(s: &Roster) -> Option<ValueRange<u32>> {
    Some(ValueRange::from_values(s.days.iter().copied()))
}

fn candidate_days(s: &Roster, idx: usize) -> Option<ValueRange<u32>> {
    s.tasks
        .get(idx)
        .map(|t| ValueRange::from_values(t.candidate_days.iter().copied()))
}

/// The `day` variable with a solution-wide (entity-independent) range.
pub fn day_handle() -> VariableHandle<Roster, u32> {
    VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::SolutionWide(all_days),
    )
}

/// The `day` variable restricted to each task's own candidate list.
pub fn restricted_day_handle() -> VariableHandle<Roster, u32> {
    VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::PerEntity(candidate_days),
    )
}

pub fn day_variables() -> SmallVec<[VariableHandle<Roster, u32>; 2]> {
    smallvec![day_handle()]
}

pub fn restricted_day_variables() -> SmallVec<[VariableHandle<Roster, u32>; 2]> {
    smallvec![restricted_day_handle()]
}

fn task_count(s: &Roster) -> usize {
    s.tasks.len()
}

pub fn descriptor() -> SolutionDescriptor<Roster> {
    SolutionDescriptor::new("Roster").with_entity(
        EntityDescriptor::new("Task", "tasks", task_count).with_variable(
            VariableDescriptor::genuine("day").with_allows_unassigned(true),
        ),
    )
}

/// Full-recalculation score: -1 per pair of tasks sharing a day, -10 per
/// unassigned task.
pub fn conflict_score(s: &Roster) -> SimpleScore {
    let mut penalty = 0i64;
    for (i, left) in s.tasks.iter().enumerate() {
        match left.day {
            None => penalty -= 10,
            Some(day) => {
                for right in &s.tasks[i + 1..] {
                    if right.day == Some(day) {
                        penalty -= 1;
                    }
                }
            }
        }
    }
    SimpleScore::of(penalty)
}

/// Per-entity contribution for the incremental director: each task scores
/// the negated day value, -10 when unassigned.
pub fn day_cost(s: &Roster, _descriptor_index: usize, entity_index: usize) -> SimpleScore {
    SimpleScore::of(s.tasks[entity_index].day.map_or(-10, |d| -(d as i64)))
}

pub type RosterDirector = SimpleScoreDirector<Roster, fn(&Roster) -> SimpleScore>;

pub fn director(roster: Roster) -> RosterDirector {
    SimpleScoreDirector::new(roster, descriptor(), conflict_score as fn(&Roster) -> SimpleScore)
}

pub type IncrementalRosterDirector =
    IncrementalScoreDirector<Roster, fn(&Roster, usize, usize) -> SimpleScore>;

pub fn incremental_director(roster: Roster) -> IncrementalRosterDirector {
    IncrementalScoreDirector::new(
        roster,
        descriptor(),
        day_cost as fn(&Roster, usize, usize) -> SimpleScore,
    )
}
