use crate::score::SimpleScore;

use super::*;

#[derive(Clone, Debug)]
struct Task {
    day: Option<i32>,
    candidate_days: Vec<i32>,
}

#[derive(Clone, Debug)]
struct Roster {
    tasks: Vec<Task>,
    days: Vec<i32>,
    score: Option<SimpleScore>,
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

fn get_day(s: &Roster, idx: usize) -> Option<i32> {
    s.tasks.get(idx).and_then(|t| t.day)
}

fn set_day(s: &mut Roster, idx: usize, v: Option<i32>) {
    if let Some(t) = s.tasks.get_mut(idx) {
        t.day = v;
    }
}

fn all_days(s: &Roster) -> Option<ValueRange<i32>> {
    Some(ValueRange::from_values(s.days.iter().copied()))
}

fn candidate_days(s: &Roster, idx: usize) -> Option<ValueRange<i32>> {
    s.tasks
        .get(idx)
        .map(|t| ValueRange::from_values(t.candidate_days.iter().copied()))
}

fn broken_provider(_s: &Roster, _idx: usize) -> Option<ValueRange<i32>> {
    None
}

fn roster(days: &[Option<i32>]) -> Roster {
    Roster {
        tasks: days
            .iter()
            .map(|d| Task {
                day: *d,
                candidate_days: vec![1, 2],
            })
            .collect(),
        days: vec![1, 2, 3],
        score: None,
    }
}

#[test]
fn value_range_membership() {
    let range = ValueRange::from_values([3, 1, 2, 1]);
    assert!(range.contains(&1));
    assert!(!range.contains(&4));
    assert_eq!(range.len(), 3);
    // first-occurrence order is preserved
    let ordered: Vec<_> = range.iter().copied().collect();
    assert_eq!(ordered, vec![3, 1, 2]);
}

#[test]
fn value_range_unassigned() {
    let range = ValueRange::from_values([1, 2]);
    assert!(!range.contains_opt(None));
    let range = range.with_unassigned();
    assert!(range.contains_opt(None));
    assert!(range.contains_opt(Some(&1)));
    assert!(!range.contains_opt(Some(&9)));
}

#[test]
fn handle_reads_and_writes() {
    let mut solution = roster(&[Some(1), None]);
    let handle = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::SolutionWide(all_days),
    );

    assert_eq!(handle.value(&solution, 0), Some(1));
    assert_eq!(handle.value(&solution, 1), None);

    handle.set_value(&mut solution, 1, Some(3));
    assert_eq!(handle.value(&solution, 1), Some(3));
}

#[test]
fn solution_wide_range_is_entity_independent() {
    let solution = roster(&[Some(1)]);
    let handle = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::SolutionWide(all_days),
    );

    assert!(handle.is_value_range_entity_independent());
    let range = handle.extract_value_range(&solution, 0).unwrap();
    assert!(range.contains(&3));
}

#[test]
fn per_entity_range_varies() {
    let mut solution = roster(&[Some(1), Some(2)]);
    solution.tasks[1].candidate_days = vec![2];
    let handle = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::PerEntity(candidate_days),
    );

    assert!(!handle.is_value_range_entity_independent());
    assert!(handle.extract_value_range(&solution, 0).unwrap().contains(&1));
    assert!(!handle.extract_value_range(&solution, 1).unwrap().contains(&1));
}

#[test]
fn range_extraction_failure_is_hard_error() {
    let solution = roster(&[Some(1)]);
    let handle = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::PerEntity(broken_provider),
    );

    let err = handle.extract_value_range(&solution, 0).unwrap_err();
    assert!(matches!(
        err,
        crate::error::EngineError::RangeExtraction {
            variable: "day",
            entity_index: 0
        }
    ));
}

#[test]
fn handle_equality_is_structural() {
    let a = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::SolutionWide(all_days),
    );
    let b = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::SolutionWide(all_days),
    );
    let c = VariableHandle::new(
        "day",
        get_day,
        set_day,
        ValueRangeSource::PerEntity(candidate_days),
    );

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn descriptors_report_counts() {
    fn task_count(s: &Roster) -> usize {
        s.tasks.len()
    }

    let descriptor = SolutionDescriptor::new("Roster").with_entity(
        EntityDescriptor::new("Task", "tasks", task_count)
            .with_variable(VariableDescriptor::genuine("day").with_allows_unassigned(true)),
    );

    let solution = roster(&[Some(1), Some(2), None]);
    assert_eq!(descriptor.entity_count(&solution, 0), Some(3));
    assert_eq!(descriptor.entity_count(&solution, 1), None);
    assert_eq!(descriptor.total_entity_count(&solution), 3);

    let entity = descriptor.find_entity_descriptor("Task").unwrap();
    let var = entity.find_variable("day").unwrap();
    assert!(var.allows_unassigned);
    assert!(!var.entity_dependent_range);
}
