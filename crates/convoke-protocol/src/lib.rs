//! Wire types shared across Convoke crates: tool-call requests and errors.

mod tool;

pub use tool::ToolError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A request to invoke a tool by name with a parameter mapping.
///
/// Produced either directly by a caller or by extracting a `tool_call`
/// directive from model output. Ephemeral: it exists only for the duration
/// of one dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the tool to invoke.
    pub name: String,
    /// Parameter mapping; empty when the directive supplies none.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl ToolCallRequest {
    /// Build a request for a tool with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Map::new(),
        }
    }

    /// Build a request with a parameter mapping.
    pub fn with_parameters(name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}
