//! Tool/function calling types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single declared tool parameter
///
/// Declaration order matters twice: it is the property order in the schema
/// catalog, and it is the positional order in which argument values are
/// handed to the tool handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParam {
    /// Parameter name (the key the model supplies arguments under)
    pub name: String,
    /// JSON Schema primitive type name ("string", "number", "boolean", ...)
    #[serde(rename = "type")]
    pub param_type: String,
    /// Description surfaced to the model
    pub description: String,
    /// Whether the model must supply this parameter
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Allowed values, if the parameter is an enumeration
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ToolParam {
    /// Create a new parameter declaration
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            description: description.into(),
            required: false,
            enum_values: None,
        }
    }

    /// Create a string parameter
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, "string", description)
    }

    /// Create a number parameter
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, "number", description)
    }

    /// Create a boolean parameter
    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, "boolean", description)
    }

    /// Mark this parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict this parameter to an enumeration of values
    pub fn with_enum(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// The property document for this parameter: `{type, description, required?, enum?}`
    fn property(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), Value::String(self.param_type.clone()));
        prop.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        if self.required {
            prop.insert("required".to_string(), Value::Bool(true));
        }
        if let Some(values) = &self.enum_values {
            prop.insert(
                "enum".to_string(),
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(prop)
    }
}

/// Declaration of a callable tool: name, description, ordered parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name (registry key, unique within one registry)
    pub name: String,
    /// Description of what the tool does, surfaced for tool selection
    pub description: String,
    /// Parameter declarations in positional order
    #[serde(default)]
    pub params: Vec<ToolParam>,
}

impl ToolSpec {
    /// Create a new tool declaration with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter declaration
    pub fn with_param(mut self, param: ToolParam) -> Self {
        self.params.push(param);
        self
    }

    /// Names of all parameters marked required, in declaration order
    pub fn required_params(&self) -> Vec<String> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Build the catalog entry for this tool
    pub fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        for param in &self.params {
            properties.insert(param.name.clone(), param.property());
        }

        ToolSchema {
            schema_type: "function".to_string(),
            function: FunctionSchema {
                name: self.name.clone(),
                description: self.description.clone(),
                parameters: ParametersSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required: self.required_params(),
                },
            },
        }
    }
}

/// One catalog entry: `{type: "function", function: {...}}`
///
/// This is the OpenAI-style function-calling document and is a wire-format
/// contract for completion engines that interoperate with existing stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub function: FunctionSchema,
}

/// The `function` body of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: ParametersSchema,
}

/// The `parameters` object schema of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property documents keyed by parameter name, in declaration order
    pub properties: Map<String, Value>,
    /// Names of required parameters
    pub required: Vec<String>,
}

/// Tool call proposed by the completion engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Engine-assigned identifier, opaque to the orchestrator
    pub id: String,
    /// Name of the tool being called
    pub name: String,
    /// JSON-encoded arguments payload
    pub arguments: String,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Parse the arguments payload as JSON
    pub fn parse_arguments(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.arguments)
    }
}

/// Tool choice option for completion requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    /// Let the model decide whether to use tools
    Auto,
    /// Don't use tools
    None,
    /// Force tool use
    Required,
}

impl Default for ToolChoice {
    fn default() -> Self {
        ToolChoice::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_creation() {
        let spec = ToolSpec::new("get_weather", "Get the current weather")
            .with_param(ToolParam::string("city", "City name").required())
            .with_param(
                ToolParam::string("units", "Temperature units").with_enum(["celsius", "fahrenheit"]),
            );

        assert_eq!(spec.name, "get_weather");
        assert_eq!(spec.params.len(), 2);
        assert_eq!(spec.required_params(), vec!["city".to_string()]);
    }

    #[test]
    fn test_schema_document_shape() {
        let spec = ToolSpec::new("add_numbers", "Add two numbers")
            .with_param(ToolParam::number("a", "First addend").required())
            .with_param(ToolParam::number("b", "Second addend").required());

        let schema = serde_json::to_value(spec.schema()).unwrap();
        assert_eq!(
            schema,
            json!({
                "type": "function",
                "function": {
                    "name": "add_numbers",
                    "description": "Add two numbers",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "a": { "type": "number", "description": "First addend", "required": true },
                            "b": { "type": "number", "description": "Second addend", "required": true }
                        },
                        "required": ["a", "b"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_schema_property_order() {
        let spec = ToolSpec::new("book_hotel", "Book a hotel room")
            .with_param(ToolParam::string("city", "Destination city").required())
            .with_param(ToolParam::string("checkin", "Check-in date").required())
            .with_param(ToolParam::number("nights", "Number of nights"));

        let schema = spec.schema();
        let keys: Vec<_> = schema.function.parameters.properties.keys().collect();
        assert_eq!(keys, vec!["city", "checkin", "nights"]);
    }

    #[test]
    fn test_tool_call_arguments() {
        let call = ToolCall::new("call_123", "get_weather", r#"{"city":"Porto"}"#);
        let args = call.parse_arguments().unwrap();
        assert_eq!(args["city"], "Porto");

        let bad = ToolCall::new("call_456", "get_weather", "{not json");
        assert!(bad.parse_arguments().is_err());
    }

    #[test]
    fn test_enum_property() {
        let param = ToolParam::string("units", "Temperature units")
            .with_enum(["celsius", "fahrenheit"]);
        let prop = param.property();
        assert_eq!(prop["enum"], json!(["celsius", "fahrenheit"]));
        // Optional parameters don't serialize a required flag
        assert!(prop.get("required").is_none());
    }
}
