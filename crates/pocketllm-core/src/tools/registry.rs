//! Tool registry for on-device tool calling
//!
//! The ToolRegistry is the central component for:
//! - Declaring callable tools with typed parameter schemas
//! - Producing the schema catalog sent alongside completion requests
//! - Executing a named tool against a model-supplied argument map

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use thiserror::Error;

use super::handler::{HandlerError, ToolHandler};
use crate::logging::{Logger, NoOpLogger};
use crate::types::{ToolSchema, ToolSpec};

/// Errors that can occur during tool execution
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool is registered under the requested name
    #[error("tool not found: {0}")]
    NotFound(String),

    /// The tool's handler returned an error
    #[error("tool '{name}' failed: {source}")]
    ExecutionFailed {
        name: String,
        #[source]
        source: HandlerError,
    },
}

/// A registered tool: its declaration plus its handler
struct RegisteredTool {
    spec: ToolSpec,
    handler: Arc<dyn ToolHandler>,
}

/// Registry of callable tools
///
/// Tools are kept in registration order, which is also catalog order.
/// Reads (`schema_catalog`, `execute` lookups) are safe under concurrent
/// access; re-registering a tool while an `execute` of the same name is in
/// flight is unspecified — the in-flight call keeps whichever handler it
/// resolved at lookup time.
pub struct ToolRegistry {
    tools: RwLock<Vec<RegisteredTool>>,
    logger: Arc<dyn Logger>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
            logger,
        }
    }

    /// Register a tool, overwriting any existing tool with the same name
    ///
    /// Overwriting is silent (last write wins) and keeps the tool's
    /// original position in catalog order. Handler arity is not validated
    /// against the declared parameters; a mismatch surfaces at execute
    /// time.
    pub fn register(&self, spec: ToolSpec, handler: Arc<dyn ToolHandler>) {
        let mut tools = self.tools.write();
        let entry = RegisteredTool { spec, handler };

        match tools.iter().position(|t| t.spec.name == entry.spec.name) {
            Some(index) => {
                self.logger.debug(&format!(
                    "[ToolRegistry] Overwriting tool: {}",
                    entry.spec.name
                ));
                tools[index] = entry;
            }
            None => {
                self.logger
                    .debug(&format!("[ToolRegistry] Registered tool: {}", entry.spec.name));
                tools.push(entry);
            }
        }
    }

    /// Check whether a tool is registered under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.tools.read().iter().any(|t| t.spec.name == name)
    }

    /// Number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.read().len()
    }

    /// Whether the registry has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }

    /// Names of all registered tools, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.read().iter().map(|t| t.spec.name.clone()).collect()
    }

    /// Build the schema catalog for all registered tools
    ///
    /// Pure function of current registrations: the same registration
    /// sequence always yields an identical catalog document, in
    /// registration order.
    pub fn schema_catalog(&self) -> Vec<ToolSchema> {
        self.tools.read().iter().map(|t| t.spec.schema()).collect()
    }

    /// Execute a registered tool against a named-argument map
    ///
    /// Arguments are adapted to a positional call in parameter declaration
    /// order: missing keys become JSON `null`, extra keys are ignored.
    pub async fn execute(&self, name: &str, args: &Map<String, Value>) -> Result<Value, ToolError> {
        // Resolve under the read lock, call outside it
        let (handler, param_names) = {
            let tools = self.tools.read();
            let tool = tools
                .iter()
                .find(|t| t.spec.name == name)
                .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
            let names: Vec<String> = tool.spec.params.iter().map(|p| p.name.clone()).collect();
            (Arc::clone(&tool.handler), names)
        };

        let positional: Vec<Value> = param_names
            .iter()
            .map(|p| args.get(p).cloned().unwrap_or(Value::Null))
            .collect();

        self.logger
            .info(&format!("[ToolRegistry] Executing tool: {}", name));

        handler
            .call(positional)
            .await
            .map_err(|source| ToolError::ExecutionFailed {
                name: name.to_string(),
                source,
            })
    }
}

/// Process-wide shared registry
///
/// Registries are usually created per orchestration session; hosts that
/// want one registry for the whole process can use this instance instead.
static SHARED_REGISTRY: Lazy<Arc<ToolRegistry>> =
    Lazy::new(|| Arc::new(ToolRegistry::new(Arc::new(NoOpLogger::new()))));

/// Get the process-wide shared registry
pub fn shared_registry() -> Arc<ToolRegistry> {
    Arc::clone(&SHARED_REGISTRY)
}
