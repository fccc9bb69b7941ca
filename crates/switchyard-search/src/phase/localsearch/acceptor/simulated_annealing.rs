//! Simulated annealing acceptor.

use std::fmt::Debug;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use switchyard_core::domain::PlanningSolution;
use switchyard_core::score::Score;

use super::Acceptor;

/// Simulated annealing acceptor - accepts worsening moves with
/// temperature-based probability.
///
/// Improving moves are always accepted. A worsening move is accepted with
/// probability `exp(-delta / temperature)`, where delta is the summed
/// level difference between the last step score and the move score. The
/// temperature decays multiplicatively after each committed step, so the
/// search explores early and converges late.
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    decay_rate: f64,
    rng: ChaCha8Rng,
}

impl Debug for SimulatedAnnealingAcceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedAnnealingAcceptor")
            .field("starting_temperature", &self.starting_temperature)
            .field("current_temperature", &self.current_temperature)
            .field("decay_rate", &self.decay_rate)
            .finish()
    }
}

impl SimulatedAnnealingAcceptor {
    /// Creates a new simulated annealing acceptor.
    ///
    /// # Arguments
    /// * `starting_temperature` - Initial temperature (higher = more exploration)
    /// * `decay_rate` - Multiplicative decay per step (e.g. 0.99)
    pub fn new(starting_temperature: f64, decay_rate: f64) -> Self {
        Self::with_seed(starting_temperature, decay_rate, rand::random())
    }

    /// Creates an acceptor with a fixed rng seed, for reproducible runs.
    pub fn with_seed(starting_temperature: f64, decay_rate: f64, seed: u64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            decay_rate,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current temperature.
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(1.0, 0.99)
    }
}

impl<S: PlanningSolution> Acceptor<S> for SimulatedAnnealingAcceptor {
    fn is_accepted(&mut self, last_step_score: &S::Score, move_score: &S::Score) -> bool {
        if move_score > last_step_score {
            return true;
        }
        if self.current_temperature <= 0.0 {
            return false;
        }

        let delta: i64 = (*last_step_score - *move_score)
            .to_level_numbers()
            .into_iter()
            .sum();
        let acceptance_probability = (-(delta as f64) / self.current_temperature).exp();
        self.rng.random::<f64>() < acceptance_probability
    }

    fn phase_started(&mut self, _initial_score: &S::Score) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_ended(&mut self, _step_score: &S::Score) {
        self.current_temperature *= self.decay_rate;
    }
}
