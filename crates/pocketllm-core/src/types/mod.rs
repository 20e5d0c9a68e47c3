//! Core types for tool-calling orchestration
//!
//! This module contains the shared types used across the registry,
//! the completion engine seam, and the orchestrator loop.

mod cancellation;
mod completion;
mod message;
mod tool;

pub use cancellation::CancellationToken;
pub use completion::{CompletionResult, TokenCallback};
pub use message::{ChatMessage, MessageRole};
pub use tool::{
    FunctionSchema, ParametersSchema, ToolCall, ToolChoice, ToolParam, ToolSchema, ToolSpec,
};
