use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use switchyard_core::score::SimpleScore;
use switchyard_scoring::ScoreDirector;

use crate::termination::StepCountTermination;
use crate::test_utils::{director, set_day, Roster};

use super::*;

#[test]
fn best_solution_tracks_improvements() {
    let mut scope = SolverScope::new(director(Roster::new(&[Some(1), Some(1)], vec![1, 2])));
    assert!(scope.best_solution().is_none());

    scope.update_best_solution();
    assert_eq!(scope.best_score(), Some(&SimpleScore::of(-1)));

    // resolve the conflict through a notification bracket
    let director = scope.score_director_mut();
    director.before_variable_changed(0, 1, "day");
    set_day(director.working_solution_mut(), 1, Some(2));
    director.after_variable_changed(0, 1, "day");

    scope.increment_step_count();
    scope.update_best_solution();
    assert_eq!(scope.best_score(), Some(&SimpleScore::of(0)));
    assert_eq!(scope.last_improvement_step(), 1);

    let best = scope.best_solution().unwrap();
    assert_eq!(best.assigned_days(), vec![Some(1), Some(2)]);
}

#[test]
fn best_solution_ignores_regressions() {
    let mut scope = SolverScope::new(director(Roster::new(&[Some(1), Some(2)], vec![1, 2])));
    scope.update_best_solution();
    assert_eq!(scope.best_score(), Some(&SimpleScore::of(0)));

    let director = scope.score_director_mut();
    director.before_variable_changed(0, 1, "day");
    set_day(director.working_solution_mut(), 1, Some(1));
    director.after_variable_changed(0, 1, "day");

    scope.update_best_solution();
    // the snapshot keeps the better solution
    assert_eq!(scope.best_score(), Some(&SimpleScore::of(0)));
    assert_eq!(
        scope.best_solution().unwrap().assigned_days(),
        vec![Some(1), Some(2)]
    );
}

#[test]
fn terminate_early_flag_is_honored() {
    let mut scope = SolverScope::new(director(Roster::new(&[Some(1)], vec![1, 2])));
    assert!(!scope.should_terminate());

    let flag = Arc::new(AtomicBool::new(false));
    scope.set_terminate_early_flag(flag.clone());
    assert!(!scope.should_terminate());

    flag.store(true, Ordering::SeqCst);
    assert!(scope.should_terminate());
}

#[test]
fn registered_terminations_are_consulted() {
    let mut scope = SolverScope::new(director(Roster::new(&[Some(1)], vec![1, 2])));
    scope.add_termination(Box::new(StepCountTermination::new(2)));

    assert!(!scope.should_terminate());
    scope.increment_step_count();
    assert!(!scope.should_terminate());
    scope.increment_step_count();
    assert!(scope.should_terminate());
}

#[test]
fn take_best_or_working_falls_back() {
    let scope = SolverScope::new(director(Roster::new(&[Some(2)], vec![1, 2])));
    // no snapshot yet: the working solution comes back
    let solution = scope.take_best_or_working_solution();
    assert_eq!(solution.assigned_days(), vec![Some(2)]);
}

#[test]
fn step_scope_counts_through_phase_scope() {
    let mut scope = SolverScope::new(director(Roster::new(&[Some(1)], vec![1, 2])));
    let mut phase_scope = PhaseScope::new(&mut scope, 0);
    assert_eq!(phase_scope.phase_index(), 0);

    {
        let mut step_scope = StepScope::new(&mut phase_scope);
        assert_eq!(step_scope.step_index(), 0);
        step_scope.set_step_score(SimpleScore::of(-1));
        assert_eq!(step_scope.step_score(), Some(&SimpleScore::of(-1)));
        step_scope.complete();
    }

    assert_eq!(phase_scope.step_count(), 1);
    assert_eq!(phase_scope.solver_scope().total_step_count(), 1);
}

#[test]
fn seeded_scopes_share_rng_sequences() {
    use rand::Rng;

    let mut a = SolverScope::with_seed(director(Roster::new(&[Some(1)], vec![1, 2])), 11);
    let mut b = SolverScope::with_seed(director(Roster::new(&[Some(1)], vec![1, 2])), 11);

    let draw_a: u64 = a.rng().random();
    let draw_b: u64 = b.rng().random();
    assert_eq!(draw_a, draw_b);
}
