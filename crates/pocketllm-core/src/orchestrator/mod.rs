//! Orchestration of completion + tool execution

mod tool_loop;

pub use tool_loop::{
    ToolLoop, ToolLoopConfig, ToolLoopError, ToolLoopResult, DEFAULT_RECURSION_LIMIT,
};
