//! Error types for the network and living-graph engines.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Bad layer sizes or hyperparameters at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input vector width does not match the input layer
    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Backward pass requested without a preceding forward pass
    #[error("Stale state: backward called without a preceding forward pass")]
    StaleState,

    /// Graph operation referencing a neuron that is not in the collection
    #[error("Unknown neuron: {0}")]
    UnknownNeuron(Uuid),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
