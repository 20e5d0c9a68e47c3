//! Completion engine error types

use thiserror::Error;

/// Errors that can occur inside a completion engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine failed while generating a completion
    #[error("{engine} generation failed: {message}")]
    Generation { engine: String, message: String },

    /// The model is not loaded or otherwise unavailable
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Request was cancelled
    #[error("request cancelled")]
    Cancelled,

    /// The engine produced output the adapter could not decode
    #[error("invalid engine output: {0}")]
    InvalidOutput(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Create a generation error
    pub fn generation(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            engine: engine.into(),
            message: message.into(),
        }
    }

    /// Create a model-unavailable error
    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::ModelUnavailable(message.into())
    }

    /// Create an invalid-output error
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
