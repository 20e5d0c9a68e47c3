//! Tool management module
//!
//! This module provides tool declaration, the schema catalog, and tool
//! execution for on-device tool calling.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToolRegistry                               │
//! │                                             │
//! │  - Holds ToolSpec + ToolHandler pairs       │
//! │  - Builds the schema catalog for the model  │
//! │  - Adapts named args to positional calls    │
//! │  - Executes tools, surfaces failures        │
//! └─────────────────────────────────────────────┘
//!           │
//!           │ schema catalog / execute
//!           ▼
//! ┌─────────────────────────────────────────────┐
//! │  ToolLoop (orchestrator module)             │
//! │                                             │
//! │  Drives the completion engine and feeds     │
//! │  tool results back into the conversation    │
//! └─────────────────────────────────────────────┘
//! ```

mod handler;
mod registry;

pub use handler::{handler_fn, sync_handler_fn, HandlerError, HandlerResult, ToolHandler};
pub use registry::{shared_registry, ToolError, ToolRegistry};
