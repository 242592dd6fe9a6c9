//! JSON Schema export for tool specs.
//!
//! The exported schema is the contract handed to the model so it knows
//! what it may call: `{ name, description, parameters }` where
//! `parameters` is an object-type JSON Schema fragment.

use crate::tool::{ParamSpec, ToolSpec};
use serde_json::{Map, Value, json};

impl ParamSpec {
    /// JSON Schema property fragment for this parameter.
    pub fn property(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".to_string(), json!(self.kind.as_str()));
        property.insert("description".to_string(), json!(self.description));
        if let Some(default) = &self.default {
            property.insert("default".to_string(), default.clone());
        }
        Value::Object(property)
    }
}

impl ToolSpec {
    /// Object-type JSON Schema fragment for the declared parameters.
    ///
    /// `required` lists exactly the parameters declared without a default.
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.parameters {
            properties.insert(param.name.clone(), param.property());
        }
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.as_str())
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Full schema object: `{ name, description, parameters }`.
    pub fn schema(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters_schema(),
        })
    }

    /// Function-declaration wrapper used by OpenAI-compatible chat APIs.
    pub fn function_declaration(&self) -> Value {
        json!({
            "type": "function",
            "function": self.schema(),
        })
    }
}
