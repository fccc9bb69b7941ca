//! Configuration wiring for the local search phase.
//!
//! Config structs are plain serde types with a TOML entry point, so a host
//! can describe a search setup in a file and build the runtime strategies
//! from it:
//!
//! ```
//! use switchyard_search::config::LocalSearchConfig;
//!
//! let config = LocalSearchConfig::from_toml_str(
//!     r#"
//!     step_limit = 500
//!     accepted_count_limit = 4
//!
//!     [acceptor]
//!     type = "late_acceptance"
//!     late_acceptance_size = 100
//!
//!     [termination]
//!     seconds_limit = 30
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.step_limit, Some(500));
//! ```

use serde::{Deserialize, Serialize};

use switchyard_core::domain::PlanningSolution;
use switchyard_core::{EngineError, Result};
use switchyard_scoring::ScoreDirector;

use crate::phase::localsearch::{
    AnyAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
use crate::termination::{
    StepCountTermination, Termination, TimeTermination, UnimprovedStepCountTermination,
};

/// Local search phase configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalSearchConfig {
    /// Maximum number of steps for the phase (None = unlimited).
    pub step_limit: Option<u64>,
    /// Accepted candidates to collect before a step quits early.
    pub accepted_count_limit: usize,
    /// The acceptance strategy.
    pub acceptor: AcceptorConfig,
    /// Solver-level termination conditions.
    pub termination: TerminationConfig,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            step_limit: Some(1000),
            accepted_count_limit: 1,
            acceptor: AcceptorConfig::HillClimbing,
            termination: TerminationConfig::default(),
        }
    }
}

impl LocalSearchConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Builds the configured acceptor.
    pub fn build_acceptor<S: PlanningSolution>(&self) -> AnyAcceptor<S> {
        match &self.acceptor {
            AcceptorConfig::HillClimbing => AnyAcceptor::HillClimbing(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance {
                late_acceptance_size,
            } => AnyAcceptor::LateAcceptance(LateAcceptanceAcceptor::new(*late_acceptance_size)),
            AcceptorConfig::SimulatedAnnealing {
                starting_temperature,
                decay_rate,
            } => AnyAcceptor::SimulatedAnnealing(SimulatedAnnealingAcceptor::new(
                *starting_temperature,
                *decay_rate,
            )),
        }
    }
}

/// The acceptance strategy to use in local search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Accept only strictly improving moves.
    HillClimbing,
    /// Accept moves that beat the step score from N steps ago.
    LateAcceptance {
        /// Number of historical step scores to keep.
        late_acceptance_size: usize,
    },
    /// Accept worsening moves with temperature-based probability.
    SimulatedAnnealing {
        /// Initial temperature.
        starting_temperature: f64,
        /// Multiplicative decay per step.
        decay_rate: f64,
    },
}

/// Solver-level termination configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminationConfig {
    /// Stop after this many seconds.
    pub seconds_limit: Option<u64>,
    /// Stop after this many committed steps.
    pub step_limit: Option<u64>,
    /// Stop after this many steps without best-solution improvement.
    pub unimproved_step_limit: Option<u64>,
}

impl TerminationConfig {
    /// Builds the configured termination conditions.
    pub fn build<S, D>(&self) -> Vec<Box<dyn Termination<S, D>>>
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        let mut terminations: Vec<Box<dyn Termination<S, D>>> = Vec::new();
        if let Some(seconds) = self.seconds_limit {
            terminations.push(Box::new(TimeTermination::seconds(seconds)));
        }
        if let Some(steps) = self.step_limit {
            terminations.push(Box::new(StepCountTermination::new(steps)));
        }
        if let Some(unimproved) = self.unimproved_step_limit {
            terminations.push(Box::new(UnimprovedStepCountTermination::new(unimproved)));
        }
        terminations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LocalSearchConfig::default();
        assert!(matches!(config.acceptor, AcceptorConfig::HillClimbing));
        assert_eq!(config.step_limit, Some(1000));
        assert_eq!(config.accepted_count_limit, 1);
    }

    #[test]
    fn parses_full_toml() {
        let config = LocalSearchConfig::from_toml_str(
            r#"
            step_limit = 250
            accepted_count_limit = 8

            [acceptor]
            type = "simulated_annealing"
            starting_temperature = 2.5
            decay_rate = 0.98

            [termination]
            seconds_limit = 10
            unimproved_step_limit = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.step_limit, Some(250));
        assert_eq!(config.accepted_count_limit, 8);
        assert!(matches!(
            config.acceptor,
            AcceptorConfig::SimulatedAnnealing { .. }
        ));
        assert_eq!(config.termination.seconds_limit, Some(10));
        assert_eq!(config.termination.unimproved_step_limit, Some(50));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = LocalSearchConfig::from_toml_str("").unwrap();
        assert!(matches!(config.acceptor, AcceptorConfig::HillClimbing));
    }

    #[test]
    fn unknown_field_is_a_config_error() {
        let err = LocalSearchConfig::from_toml_str("bogus_knob = 3").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = LocalSearchConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let reparsed = LocalSearchConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(reparsed.step_limit, config.step_limit);
    }
}
