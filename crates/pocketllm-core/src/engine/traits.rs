//! Completion engine trait definition

use async_trait::async_trait;

use super::error::EngineResult;
use crate::types::{
    CancellationToken, ChatMessage, CompletionResult, TokenCallback, ToolChoice, ToolSchema,
};

/// Options for completion requests
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Stop sequences
    pub stop: Option<Vec<String>>,
    /// Schema catalog of tools available to the model
    pub tools: Option<Vec<ToolSchema>>,
    /// Tool choice behavior
    pub tool_choice: Option<ToolChoice>,
}

impl CompletionOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set stop sequences
    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Attach a tool schema catalog
    pub fn with_tools(mut self, tools: Vec<ToolSchema>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Set tool choice
    pub fn with_tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }

    /// Whether a tool catalog is attached
    pub fn has_tools(&self) -> bool {
        self.tools.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// The single-shot completion primitive
///
/// Implemented by on-device inference backends (and `MockEngine` for
/// tests); consumed by the orchestrator. Given a conversation and an
/// optional tool catalog, produce a completion that may include zero or
/// more proposed tool calls.
///
/// `on_token` may be invoked with incremental output as generation
/// proceeds; it is an observation channel only. The `cancel_token` is
/// supplied by the caller; engines that support interruption should check
/// it between decode steps.
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// Get the engine name (e.g., "llama-rn", "mock")
    fn name(&self) -> &str;

    /// Produce one completion for the given conversation
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
        on_token: Option<TokenCallback>,
        cancel_token: CancellationToken,
    ) -> EngineResult<CompletionResult>;
}
