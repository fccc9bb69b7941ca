//! Switchyard Core - Core types and traits for local-search optimization
//!
//! This crate provides the fundamental abstractions for switchyard:
//! - Score types for representing solution quality
//! - Domain traits for defining planning problems
//! - Variable and value-range metadata consumed by moves and selectors
//! - The engine error taxonomy

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{EntityRef, PlanningSolution};
pub use error::{EngineError, Result};
pub use score::{
    HardMediumSoftScore, HardSoftScore, ParseableScore, Score, ScoreLevel, ScoreParseError,
    SimpleScore,
};
