//! PocketLLM Core
//!
//! Runtime-agnostic tool-calling orchestration for on-device language
//! models. This crate provides the core functionality that can be used
//! from any host environment (mobile app bindings, native CLI, tests).
//!
//! ## Tool Orchestration
//!
//! The `tools` module manages callable tools; the `orchestrator` module
//! drives the completion engine through a bounded auto-recursive
//! tool-call loop:
//!
//! ```rust,ignore
//! use pocketllm_core::tools::{handler_fn, ToolRegistry};
//! use pocketllm_core::orchestrator::ToolLoop;
//! use pocketllm_core::types::{CancellationToken, ChatMessage, ToolParam, ToolSpec};
//!
//! let registry = Arc::new(ToolRegistry::new(logger.clone()));
//! registry.register(
//!     ToolSpec::new("add_numbers", "Add two numbers")
//!         .with_param(ToolParam::number("a", "First addend").required())
//!         .with_param(ToolParam::number("b", "Second addend").required()),
//!     handler_fn(|args| async move { /* ... */ }),
//! );
//!
//! let orchestrator = ToolLoop::new(engine, registry, logger);
//! let result = orchestrator
//!     .complete_with_tools(&conversation, None, CancellationToken::new())
//!     .await?;
//! ```

pub mod engine;
pub mod logging;
pub mod orchestrator;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{
    CancellationToken, ChatMessage, CompletionResult, MessageRole, TokenCallback, ToolCall,
    ToolChoice, ToolParam, ToolSchema, ToolSpec,
};

pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};

pub use engine::{CompletionEngine, CompletionOptions, EngineError, EngineResult};

pub use tools::{
    handler_fn, shared_registry, sync_handler_fn, HandlerError, HandlerResult, ToolError,
    ToolHandler, ToolRegistry,
};

pub use orchestrator::{
    ToolLoop, ToolLoopConfig, ToolLoopError, ToolLoopResult, DEFAULT_RECURSION_LIMIT,
};
