//! Tool trait definition and parameter schema model.

use async_trait::async_trait;
use convoke_protocol::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Type tag for a declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Any JSON number.
    Number,
    /// Whole number; whole-valued floats are accepted and coerced.
    Integer,
    /// JSON string.
    String,
    /// JSON boolean.
    Boolean,
}

impl ParamKind {
    /// JSON Schema type name for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Number => "number",
            ParamKind::Integer => "integer",
            ParamKind::String => "string",
            ParamKind::Boolean => "boolean",
        }
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Human-readable description, surfaced in the exported schema.
    pub description: String,
    /// Declared type tag.
    pub kind: ParamKind,
    /// Whether the parameter must be supplied by the caller.
    pub required: bool,
    /// Default substituted when an optional parameter is absent.
    pub default: Option<Value>,
}

impl ParamSpec {
    /// Declare a required parameter.
    pub fn required(name: &str, kind: ParamKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: true,
            default: None,
        }
    }

    /// Declare an optional parameter with a default value.
    pub fn optional(name: &str, kind: ParamKind, description: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            default: Some(default),
        }
    }
}

/// Tool metadata spec for discovery and schema export.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// Declared parameters, in declaration order.
    pub parameters: Vec<ParamSpec>,
}

/// Interface for invocable tools.
///
/// Implementations receive a parameter mapping the dispatcher has already
/// resolved against [`Tool::parameters`]: required parameters are present,
/// defaults are substituted, and every value matches its declared kind.
#[async_trait]
pub trait Tool: Send + Sync + Debug {
    /// Return the tool name.
    fn name(&self) -> &str;
    /// Return the tool description.
    fn description(&self) -> &str;
    /// Return the declared parameters in declaration order.
    fn parameters(&self) -> Vec<ParamSpec>;

    /// Invoke the tool with a resolved parameter mapping.
    ///
    /// Domain failures (divide by zero and friends) are returned as
    /// [`ToolError::ExecutionError`], never unwound.
    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError>;

    /// Build a [`ToolSpec`] describing this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}
