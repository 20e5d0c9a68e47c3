//! Completion result types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::tool::ToolCall;

/// Observer for incremental token output during generation.
///
/// Purely an observation channel: implementations must not assume the
/// callback sees anything the final result doesn't contain, and engines
/// must not let it affect control flow or result content.
pub type TokenCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Output of one completion engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Generated text content
    pub content: String,
    /// Tool calls proposed by the model, possibly empty
    #[serde(rename = "toolCalls", default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

impl CompletionResult {
    /// Create a text-only result
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Attach proposed tool calls
    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }

    /// Whether the model proposed any tool calls
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// The first proposed tool call, if any
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.tool_calls.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only_result() {
        let result = CompletionResult::new("The answer is 5");
        assert!(!result.has_tool_calls());
        assert!(result.first_tool_call().is_none());
    }

    #[test]
    fn test_result_with_calls() {
        let result = CompletionResult::new("").with_tool_calls(vec![
            ToolCall::new("c1", "add_numbers", r#"{"a":2,"b":3}"#),
            ToolCall::new("c2", "add_numbers", r#"{"a":4,"b":5}"#),
        ]);

        assert!(result.has_tool_calls());
        assert_eq!(result.first_tool_call().unwrap().id, "c1");
    }

    #[test]
    fn test_result_serialization() {
        let plain = CompletionResult::new("hello");
        let json = serde_json::to_string(&plain).unwrap();
        // Empty call list is omitted from the wire form
        assert!(!json.contains("toolCalls"));

        let with_calls =
            CompletionResult::new("").with_tool_calls(vec![ToolCall::new("c1", "t", "{}")]);
        let json = serde_json::to_string(&with_calls).unwrap();
        assert!(json.contains("\"toolCalls\""));

        let back: CompletionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_calls);
    }
}
