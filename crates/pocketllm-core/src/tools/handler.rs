//! Tool handler trait and closure adapters

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Error type produced by tool handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result type produced by tool handlers
pub type HandlerResult = Result<Value, HandlerError>;

/// A callable tool implementation
///
/// Handlers receive their arguments positionally, in the parameter
/// declaration order of the owning [`ToolSpec`](crate::types::ToolSpec):
/// the registry adapts the model's named-argument map to a positional
/// call, substituting JSON `null` for missing keys and dropping extras.
///
/// Known sharp edge: renaming or reordering declared parameters silently
/// shifts which value lands in which position. Keep declarations and
/// handler bodies in sync.
///
/// Return values must be JSON-serializable; they are serialized into the
/// tool-result message fed back to the model.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Invoke the handler with positional arguments
    async fn call(&self, args: Vec<Value>) -> HandlerResult;
}

/// Adapter for async closures
struct FnHandler<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> ToolHandler for FnHandler<F>
where
    F: Fn(Vec<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn call(&self, args: Vec<Value>) -> HandlerResult {
        (self.f)(args).await
    }
}

/// Adapter for synchronous closures
struct SyncFnHandler<F> {
    f: F,
}

#[async_trait]
impl<F> ToolHandler for SyncFnHandler<F>
where
    F: Fn(Vec<Value>) -> HandlerResult + Send + Sync,
{
    async fn call(&self, args: Vec<Value>) -> HandlerResult {
        (self.f)(args)
    }
}

/// Wrap an async closure as a registrable tool handler
///
/// ```rust,ignore
/// let handler = handler_fn(|args| async move {
///     Ok(serde_json::json!(args.len()))
/// });
/// registry.register(spec, handler);
/// ```
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn ToolHandler>
where
    F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnHandler { f })
}

/// Wrap a synchronous closure as a registrable tool handler
pub fn sync_handler_fn<F>(f: F) -> Arc<dyn ToolHandler>
where
    F: Fn(Vec<Value>) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(SyncFnHandler { f })
}
