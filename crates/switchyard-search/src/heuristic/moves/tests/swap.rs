use switchyard_scoring::ScoreDirector;

use crate::heuristic::moves::{Move, SwapMove};
use crate::test_utils::{day_variables, director, restricted_day_variables, Roster};

use super::hash_of;

fn swap(left: usize, right: usize) -> SwapMove<Roster, u32> {
    SwapMove::new(left, right, 0, day_variables())
}

#[test]
fn swaps_values_between_entities() {
    let mut director = director(Roster::new(&[Some(1), Some(3)], vec![1, 2, 3]));
    let m = swap(0, 1);

    assert!(m.is_doable(&director).unwrap());
    m.apply(&mut director);
    assert_eq!(
        director.working_solution().assigned_days(),
        vec![Some(3), Some(1)]
    );
}

#[test]
fn same_entity_is_not_doable() {
    let director = director(Roster::new(&[Some(1), Some(3)], vec![1, 2, 3]));
    assert!(!swap(0, 0).is_doable(&director).unwrap());
}

#[test]
fn equal_values_are_not_doable() {
    let director = director(Roster::new(&[Some(2), Some(2)], vec![1, 2]));
    assert!(!swap(0, 1).is_doable(&director).unwrap());
}

#[test]
fn out_of_bounds_entity_is_not_doable() {
    let director = director(Roster::new(&[Some(1)], vec![1, 2]));
    assert!(!swap(0, 5).is_doable(&director).unwrap());
}

#[test]
fn undo_restores_exact_assignments() {
    let mut director = director(Roster::new(&[Some(1), None], vec![1, 2]));
    let original = director.working_solution().assigned_days();
    let m = swap(0, 1);

    let undo = m.create_undo_move(&director);
    m.apply(&mut director);
    assert_eq!(
        director.working_solution().assigned_days(),
        vec![None, Some(1)]
    );
    undo.apply(&mut director);
    assert_eq!(director.working_solution().assigned_days(), original);
}

#[test]
fn entity_dependent_range_rejects_uncontained_value() {
    let mut roster = Roster::new(&[Some(1), Some(2)], vec![1, 2]);
    roster.tasks[1].candidate_days = vec![2];
    let director = director(roster);

    let m = SwapMove::new(0, 1, 0, restricted_day_variables());
    // task1 cannot take day 1
    assert!(!m.is_doable(&director).unwrap());
}

#[test]
fn equality_and_hash_are_structural() {
    let a = swap(0, 1);
    let b = swap(0, 1);
    let reversed = swap(1, 0);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, reversed);
}

#[test]
fn render_shows_both_entities() {
    let director = director(Roster::new(&[Some(1), Some(3)], vec![1, 2, 3]));
    assert_eq!(
        swap(0, 1).render(&director),
        "[0] {Some(1)} <-> [1] {Some(3)}"
    );
}
