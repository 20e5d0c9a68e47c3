//! Mock completion engine for testing
//!
//! Provides deterministic, configurable completions without a model.
//! Useful for testing the orchestrator loop, streaming callbacks, and
//! host integrations.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{EngineError, EngineResult};
use super::traits::{CompletionEngine, CompletionOptions};
use crate::types::{CancellationToken, ChatMessage, CompletionResult, TokenCallback};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the same result on every call
    Fixed(CompletionResult),
    /// Return scripted results in order; fails once exhausted
    Script(Vec<CompletionResult>),
    /// Fail every call with this message
    Error(String),
}

/// One recorded `complete` invocation
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The conversation the engine was handed
    pub messages: Vec<ChatMessage>,
    /// Whether a tool catalog was attached to the request
    pub had_tools: bool,
}

/// Mock completion engine
pub struct MockEngine {
    mode: MockMode,
    script_cursor: AtomicUsize,
    calls: Mutex<Vec<RecordedCall>>,
    chunk_size: usize,
}

impl MockEngine {
    /// Create an engine with the given mode
    pub fn with_mode(mode: MockMode) -> Self {
        Self {
            mode,
            script_cursor: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            chunk_size: 10,
        }
    }

    /// Create an engine that always returns the same text
    pub fn fixed(content: impl Into<String>) -> Self {
        Self::with_mode(MockMode::Fixed(CompletionResult::new(content)))
    }

    /// Create an engine that always returns the same result
    pub fn fixed_result(result: CompletionResult) -> Self {
        Self::with_mode(MockMode::Fixed(result))
    }

    /// Create an engine that plays back scripted results in order
    pub fn script(results: Vec<CompletionResult>) -> Self {
        Self::with_mode(MockMode::Script(results))
    }

    /// Create an engine that fails every call
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_mode(MockMode::Error(message.into()))
    }

    /// Set the chunk size used when emitting token callbacks
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Number of `complete` calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// All recorded calls, in order
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// The most recent recorded call
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().last().cloned()
    }

    /// Split text into token-callback chunks
    fn split_into_chunks(&self, text: &str) -> Vec<String> {
        if self.chunk_size == 0 || text.is_empty() {
            return vec![text.to_string()];
        }

        text.chars()
            .collect::<Vec<_>>()
            .chunks(self.chunk_size)
            .map(|c| c.iter().collect())
            .collect()
    }
}

#[async_trait]
impl CompletionEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
        on_token: Option<TokenCallback>,
        cancel_token: CancellationToken,
    ) -> EngineResult<CompletionResult> {
        if cancel_token.is_cancelled() {
            return Err(EngineError::Cancelled);
        }

        self.calls.lock().push(RecordedCall {
            messages,
            had_tools: options.has_tools(),
        });

        let result = match &self.mode {
            MockMode::Fixed(result) => result.clone(),
            MockMode::Script(results) => {
                let index = self.script_cursor.fetch_add(1, Ordering::SeqCst);
                results.get(index).cloned().ok_or_else(|| {
                    EngineError::Other(format!(
                        "mock script exhausted after {} calls",
                        results.len()
                    ))
                })?
            }
            MockMode::Error(message) => {
                return Err(EngineError::generation("mock", message));
            }
        };

        if let Some(on_token) = on_token {
            for chunk in self.split_into_chunks(&result.content) {
                if cancel_token.is_cancelled() {
                    return Err(EngineError::Cancelled);
                }
                on_token(&chunk);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolCall;
    use std::sync::Arc;

    fn user_messages(content: &str) -> Vec<ChatMessage> {
        vec![ChatMessage::user(content)]
    }

    #[tokio::test]
    async fn test_fixed_mode() {
        let engine = MockEngine::fixed("canned answer");

        let result = engine
            .complete(
                user_messages("anything"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await
            .expect("completion should succeed");

        assert_eq!(result.content, "canned answer");
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_script_mode_plays_in_order() {
        let engine = MockEngine::script(vec![
            CompletionResult::new("").with_tool_calls(vec![ToolCall::new("c1", "t", "{}")]),
            CompletionResult::new("done"),
        ]);

        let first = engine
            .complete(
                user_messages("go"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await
            .unwrap();
        assert!(first.has_tool_calls());

        let second = engine
            .complete(
                user_messages("go"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(second.content, "done");

        // Third call runs off the end of the script
        let third = engine
            .complete(
                user_messages("go"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await;
        assert!(third.is_err());
    }

    #[tokio::test]
    async fn test_error_mode() {
        let engine = MockEngine::error("backend on fire");

        let result = engine
            .complete(
                user_messages("anything"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(EngineError::Generation { .. })));
    }

    #[tokio::test]
    async fn test_token_callback_sees_full_content() {
        let engine = MockEngine::fixed("Hello, world!").with_chunk_size(5);

        let seen = Arc::new(Mutex::new(String::new()));
        let seen_clone = Arc::clone(&seen);
        let on_token: TokenCallback = Arc::new(move |chunk| {
            seen_clone.lock().push_str(chunk);
        });

        let result = engine
            .complete(
                user_messages("hi"),
                CompletionOptions::default(),
                Some(on_token),
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(result.content, "Hello, world!");
        assert_eq!(*seen.lock(), "Hello, world!");
    }

    #[tokio::test]
    async fn test_cancellation_mid_generation() {
        let engine = MockEngine::fixed("a response long enough for chunks").with_chunk_size(4);

        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();
        // Cancel from inside the first token callback
        let on_token: TokenCallback = Arc::new(move |_chunk| {
            cancel_clone.cancel();
        });

        let result = engine
            .complete(
                user_messages("hi"),
                CompletionOptions::default(),
                Some(on_token),
                cancel,
            )
            .await;

        assert!(matches!(result, Err(EngineError::Cancelled)));
    }

    #[tokio::test]
    async fn test_records_tool_catalog_presence() {
        let engine = MockEngine::fixed("ok");

        engine
            .complete(
                user_messages("no tools"),
                CompletionOptions::default(),
                None,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        let spec = crate::types::ToolSpec::new("noop", "Does nothing");
        engine
            .complete(
                user_messages("with tools"),
                CompletionOptions::default().with_tools(vec![spec.schema()]),
                None,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        let calls = engine.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert!(!calls[0].had_tools);
        assert!(calls[1].had_tools);
    }
}
