use switchyard_core::domain::{ValueRange, ValueRangeSource, VariableHandle};
use switchyard_core::EngineError;
use switchyard_scoring::ScoreDirector;

use crate::heuristic::moves::{Move, PillarSwapMove};
use crate::heuristic::selector::Pillar;
use crate::test_utils::{
    day_variables, director, get_day, restricted_day_variables, set_day, Roster,
};

use super::hash_of;

fn pillar(entities: &[usize]) -> Pillar {
    Pillar::new(entities.to_vec())
}

fn swap_move(left: &[usize], right: &[usize]) -> PillarSwapMove<Roster, u32> {
    PillarSwapMove::new(day_variables(), 0, pillar(left), pillar(right))
}

#[test]
fn swaps_representative_values_across_pillars() {
    // pillar A = {task0, task1} on day 1, pillar B = {task2} on day 2
    let mut director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]));
    let m = swap_move(&[0, 1], &[2]);

    assert!(m.is_doable(&director).unwrap());

    m.apply(&mut director);
    assert_eq!(
        director.working_solution().assigned_days(),
        vec![Some(2), Some(2), Some(1)]
    );
}

#[test]
fn undo_restores_exact_assignments() {
    let mut director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2, 3]));
    let original = director.working_solution().assigned_days();
    let m = swap_move(&[0, 1], &[2]);

    // pure construction: callable before apply
    let undo = m.create_undo_move(&director);
    m.apply(&mut director);
    undo.apply(&mut director);

    assert_eq!(director.working_solution().assigned_days(), original);
}

#[test]
fn equal_pillars_are_not_doable() {
    let mut director = director(Roster::new(&[Some(1), Some(1)], vec![1, 2]));
    let m = swap_move(&[0], &[1]);

    assert!(!m.is_doable(&director).unwrap());

    // erroneous apply must be a provable no-op: representatives are equal,
    // so no entity is written or notified
    let before = director.working_solution().assigned_days();
    m.apply(&mut director);
    assert_eq!(director.working_solution().assigned_days(), before);
}

#[test]
fn unassigned_pillar_swaps_with_assigned() {
    let mut director = director(Roster::new(&[None, Some(2)], vec![1, 2]));
    let m = swap_move(&[0], &[1]);

    assert!(m.is_doable(&director).unwrap());
    m.apply(&mut director);
    assert_eq!(
        director.working_solution().assigned_days(),
        vec![Some(2), None]
    );
}

#[test]
fn entity_dependent_range_rejects_uncontained_value() {
    // task2 may only take day 2, but would receive day 1 from the left
    // pillar, so the whole move is rejected.
    let mut roster = Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2]);
    roster.tasks[2].candidate_days = vec![2];
    let director = director(roster);

    let m = PillarSwapMove::new(restricted_day_variables(), 0, pillar(&[0, 1]), pillar(&[2]));
    assert!(!m.is_doable(&director).unwrap());
}

#[test]
fn entity_dependent_range_accepts_contained_values() {
    let director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2]));
    let m = PillarSwapMove::new(restricted_day_variables(), 0, pillar(&[0, 1]), pillar(&[2]));
    assert!(m.is_doable(&director).unwrap());
}

#[test]
fn range_extraction_failure_surfaces_as_error() {
    fn broken(_s: &Roster, _idx: usize) -> Option<ValueRange<u32>> {
        None
    }
    let variable =
        VariableHandle::new("day", get_day, set_day, ValueRangeSource::PerEntity(broken));
    let director = director(Roster::new(&[Some(1), Some(2)], vec![1, 2]));

    let m = PillarSwapMove::new(smallvec::smallvec![variable], 0, pillar(&[0]), pillar(&[1]));
    let err = m.is_doable(&director).unwrap_err();
    assert!(matches!(err, EngineError::RangeExtraction { .. }));
}

#[test]
fn equality_and_hash_are_structural() {
    let a = swap_move(&[0, 1], &[2]);
    let b = swap_move(&[0, 1], &[2]);
    let reversed = swap_move(&[2], &[0, 1]);
    let other_pillar = swap_move(&[0], &[2]);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    // swapping left and right produces a different move
    assert_ne!(a, reversed);
    assert_ne!(a, other_pillar);
}

#[test]
fn undo_of_undo_is_the_original_move() {
    let director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2]));
    let m = swap_move(&[0, 1], &[2]);
    let undo = m.create_undo_move(&director);
    assert_eq!(undo.create_undo_move(&director), m);
}

#[test]
fn introspection_reports_entities_and_values() {
    let director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2]));
    let m = swap_move(&[0, 1], &[2]);

    let entities: Vec<_> = m
        .planning_entities()
        .into_iter()
        .map(|e| e.entity_index)
        .collect();
    assert_eq!(entities, vec![0, 1, 2]);

    // left value first, then right value, as they stand before mutation
    assert_eq!(m.planning_values(&director), vec!["Some(1)", "Some(2)"]);
    assert_eq!(m.describe(), "PillarSwapMove(day)");
}

#[test]
fn render_shows_pillars_and_values() {
    let director = director(Roster::new(&[Some(1), Some(1), Some(2)], vec![1, 2]));
    let m = swap_move(&[0, 1], &[2]);
    assert_eq!(
        m.render(&director),
        "[0, 1] {Some(1)} <-> [2] {Some(2)}"
    );
}
