//! Auto-recursive tool-call loop
//!
//! Wraps the single-shot completion primitive in a bounded loop: the model
//! proposes a tool call, the registry executes it, the call and its result
//! are appended to the conversation, and the model is invoked again —
//! until no further call is proposed or the recursion limit is hit.
//!
//! Local models can loop indefinitely proposing tool calls (a tool whose
//! output triggers the same tool again), so the loop is bounded at
//! `recursion_limit + 1` engine calls regardless of model behavior.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::engine::{CompletionEngine, CompletionOptions, EngineError};
use crate::logging::Logger;
use crate::tools::{ToolError, ToolRegistry};
use crate::types::{CancellationToken, ChatMessage, CompletionResult, TokenCallback};

/// Default maximum number of model↔tool round-trips per invocation
pub const DEFAULT_RECURSION_LIMIT: u32 = 5;

/// Errors that can occur during an orchestrated completion
#[derive(Error, Debug)]
pub enum ToolLoopError {
    /// The completion engine failed; propagated without retry
    #[error("completion engine error: {0}")]
    Engine(#[from] EngineError),

    /// A tool failed or was missing; fatal to this call chain
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),
}

pub type ToolLoopResult<T> = Result<T, ToolLoopError>;

/// Configuration for the tool-call loop
#[derive(Debug, Clone)]
pub struct ToolLoopConfig {
    /// Maximum number of tool rounds before the final forced completion
    pub recursion_limit: u32,
    /// Base completion options for every round
    ///
    /// Any tool catalog set here is replaced per round with the registry's
    /// current catalog.
    pub completion: CompletionOptions,
}

impl Default for ToolLoopConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            completion: CompletionOptions::default(),
        }
    }
}

impl ToolLoopConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Set the base completion options
    pub fn with_completion(mut self, options: CompletionOptions) -> Self {
        self.completion = options;
        self
    }
}

/// Orchestrator for auto-recursive tool calling
///
/// Holds the completion engine and the tool registry as explicit fields;
/// one `ToolLoop` can serve many `complete_with_tools` calls, and multiple
/// independent calls may run concurrently against the same registry.
pub struct ToolLoop {
    engine: Arc<dyn CompletionEngine>,
    registry: Arc<ToolRegistry>,
    config: ToolLoopConfig,
    logger: Arc<dyn Logger>,
}

impl ToolLoop {
    /// Create a new tool loop with default configuration
    pub fn new(
        engine: Arc<dyn CompletionEngine>,
        registry: Arc<ToolRegistry>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            engine,
            registry,
            config: ToolLoopConfig::default(),
            logger,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ToolLoopConfig) -> Self {
        self.config = config;
        self
    }

    /// Run a completion, auto-executing proposed tool calls
    ///
    /// The caller's conversation is never mutated; tool rounds extend a
    /// working copy. Termination:
    /// - the model proposes no tool call (normal), or
    /// - the recursion limit is reached — one final completion is made
    ///   with the catalog still attached, and any tool calls in that
    ///   response are returned unexecuted.
    ///
    /// Malformed tool-call arguments degrade gracefully: the call is
    /// logged and skipped, and the model's response is returned as-is.
    /// Tool execution failures (including unknown tool names) propagate.
    ///
    /// `on_token` and `cancel_token` are forwarded verbatim to every
    /// engine call.
    pub async fn complete_with_tools(
        &self,
        conversation: &[ChatMessage],
        on_token: Option<TokenCallback>,
        cancel_token: CancellationToken,
    ) -> ToolLoopResult<CompletionResult> {
        // Fast path: nothing to orchestrate, one plain completion with no
        // catalog attached.
        if conversation.is_empty() || self.registry.is_empty() {
            self.logger
                .debug("[ToolLoop] No messages or no tools, plain completion");
            let mut options = self.config.completion.clone();
            options.tools = None;
            let result = self
                .engine
                .complete(conversation.to_vec(), options, on_token, cancel_token)
                .await?;
            return Ok(result);
        }

        let catalog = self.registry.schema_catalog();
        let mut messages = conversation.to_vec();
        let mut depth: u32 = 0;

        loop {
            let options = self.config.completion.clone().with_tools(catalog.clone());
            let result = self
                .engine
                .complete(
                    messages.clone(),
                    options,
                    on_token.clone(),
                    cancel_token.clone(),
                )
                .await?;

            // Boundary round: the catalog was attached so the model still
            // knew its tools, but no further call is processed.
            if depth >= self.config.recursion_limit {
                if result.has_tool_calls() {
                    self.logger.warn(&format!(
                        "[ToolLoop] Recursion limit {} reached, returning without executing tools",
                        self.config.recursion_limit
                    ));
                }
                return Ok(result);
            }

            if !result.has_tool_calls() {
                return Ok(result);
            }

            if result.tool_calls.len() > 1 {
                self.logger.debug(&format!(
                    "[ToolLoop] {} tool calls proposed, executing only the first",
                    result.tool_calls.len()
                ));
            }
            let call = result.tool_calls[0].clone();

            let args = match call.parse_arguments() {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    self.logger.warn(&format!(
                        "[ToolLoop] Tool call '{}' arguments are not an object, returning response unmodified",
                        call.name
                    ));
                    return Ok(result);
                }
                Err(err) => {
                    self.logger.warn(&format!(
                        "[ToolLoop] Tool call '{}' has malformed arguments ({}), returning response unmodified",
                        call.name, err
                    ));
                    return Ok(result);
                }
            };

            let output = self.registry.execute(&call.name, &args).await?;

            self.logger.debug(&format!(
                "[ToolLoop] Tool '{}' round {} complete",
                call.name,
                depth + 1
            ));

            messages.push(ChatMessage::assistant_with_calls(
                result.content.clone(),
                result.tool_calls.clone(),
            ));
            messages.push(ChatMessage::tool(output.to_string(), call.id.clone()));

            depth += 1;
        }
    }
}
