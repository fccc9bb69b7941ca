//! Error types for switchyard

use thiserror::Error;

/// Hard failures raised by the engine.
///
/// Expected control-flow outcomes are never represented here: a move that is
/// not doable is a plain `false`, and a selector that runs dry is a normal
/// end-of-iteration signal.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A variable mutation happened outside a before/after notification
    /// bracket, or a move was applied against its documented protocol.
    ///
    /// The working solution's score cache can no longer be trusted, so the
    /// current solving run must be abandoned rather than repaired.
    #[error("notification protocol violated: {0}")]
    ProtocolViolation(String),

    /// A value-range provider could not produce a range for an entity.
    ///
    /// This indicates a static domain-configuration defect, not a transient
    /// condition; it is never retried.
    #[error("no value range for variable `{variable}` on entity {entity_index}")]
    RangeExtraction {
        /// Name of the variable whose range could not be extracted.
        variable: &'static str,
        /// Index of the entity the extraction was attempted for.
        entity_index: usize,
    },

    /// Error in solver configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid operation for the current solver state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for switchyard operations
pub type Result<T> = std::result::Result<T, EngineError>;
