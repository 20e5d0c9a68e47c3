//! Completion engine abstractions
//!
//! The engine is the black-box inference primitive the orchestrator drives:
//! given a conversation and an optional tool catalog, produce a completion
//! that may include zero or more proposed tool calls. Model loading,
//! tokenization, and decoding all live behind this seam.
//!
//! `MockEngine` is kept for testing purposes.

mod error;
mod mock;
mod traits;

pub use error::{EngineError, EngineResult};
pub use mock::{MockEngine, MockMode, RecordedCall};
pub use traits::{CompletionEngine, CompletionOptions};
