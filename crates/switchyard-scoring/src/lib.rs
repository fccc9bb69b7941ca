//! Switchyard Scoring - score directors for the working solution
//!
//! A score director owns the working solution during a solve: it is the
//! sole mutator of entity state and the sole authority for the current
//! score. Moves never touch the solution except through a director, and
//! every variable write is bracketed by the director's before/after
//! notifications.

pub mod director;

pub use director::{IncrementalScoreDirector, ScoreDirector, SimpleScoreDirector};
