//! Solver-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use switchyard_core::domain::PlanningSolution;
use switchyard_scoring::ScoreDirector;

use crate::termination::Termination;

/// Top-level scope for the entire solving process.
///
/// Owns the score director (and through it the working solution) plus the
/// best-solution snapshot, the rng, and the termination state. Termination
/// conditions and the external terminate-early flag are only consulted
/// between steps.
///
/// Generic over `D: ScoreDirector<S>` for zero type erasure.
pub struct SolverScope<S: PlanningSolution, D: ScoreDirector<S>> {
    score_director: D,
    best_solution: Option<S>,
    best_score: Option<S::Score>,
    rng: StdRng,
    start_time: Option<Instant>,
    total_step_count: u64,
    last_improvement_step: u64,
    terminations: Vec<Box<dyn Termination<S, D>>>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

impl<S: PlanningSolution, D: ScoreDirector<S>> SolverScope<S, D> {
    /// Creates a new solver scope around a score director.
    pub fn new(score_director: D) -> Self {
        Self {
            score_director,
            best_solution: None,
            best_score: None,
            rng: StdRng::from_os_rng(),
            start_time: Some(Instant::now()),
            total_step_count: 0,
            last_improvement_step: 0,
            terminations: Vec::new(),
            terminate_early_flag: None,
        }
    }

    /// Creates a solver scope with a fixed rng seed, for reproducible runs.
    pub fn with_seed(score_director: D, seed: u64) -> Self {
        let mut scope = Self::new(score_director);
        scope.rng = StdRng::seed_from_u64(seed);
        scope
    }

    /// Adds a termination condition, checked between steps.
    pub fn add_termination(&mut self, termination: Box<dyn Termination<S, D>>) {
        self.terminations.push(termination);
    }

    /// Installs an external terminate-early flag.
    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    /// Returns true if solving should stop before the next step.
    pub fn should_terminate(&self) -> bool {
        if self
            .terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
        {
            return true;
        }
        self.terminations.iter().any(|t| t.is_terminated(self))
    }

    /// Restarts the solve clock and step counters.
    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.last_improvement_step = 0;
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    /// Returns a reference to the score director.
    pub fn score_director(&self) -> &D {
        &self.score_director
    }

    /// Returns a mutable reference to the score director.
    pub fn score_director_mut(&mut self) -> &mut D {
        &mut self.score_director
    }

    /// Returns a reference to the working solution.
    pub fn working_solution(&self) -> &S {
        self.score_director.working_solution()
    }

    /// Calculates the current score.
    pub fn calculate_score(&mut self) -> S::Score {
        self.score_director.calculate_score()
    }

    /// Returns the best solution snapshot, if any.
    pub fn best_solution(&self) -> Option<&S> {
        self.best_solution.as_ref()
    }

    /// Returns the best score seen so far, if any.
    pub fn best_score(&self) -> Option<&S::Score> {
        self.best_score.as_ref()
    }

    /// Snapshots the working solution as the new best if it improved.
    pub fn update_best_solution(&mut self) {
        let current_score = self.score_director.calculate_score();
        let is_better = match &self.best_score {
            None => true,
            Some(best) => current_score > *best,
        };

        if is_better {
            self.best_solution = Some(self.score_director.clone_working_solution());
            self.best_score = Some(current_score);
            self.last_improvement_step = self.total_step_count;
        }
    }

    /// Returns the rng for stochastic strategies.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Increments the global step counter.
    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.total_step_count
    }

    /// Returns the number of committed steps across all phases.
    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    /// Returns the step count at the last best-solution improvement.
    pub fn last_improvement_step(&self) -> u64 {
        self.last_improvement_step
    }

    /// Consumes the scope, returning the best solution if one was
    /// snapshotted, otherwise the working solution.
    pub fn take_best_or_working_solution(self) -> S {
        self.best_solution
            .unwrap_or_else(|| self.score_director.clone_working_solution())
    }
}
