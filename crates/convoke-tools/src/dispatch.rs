//! Dispatch pipeline: resolve a tool call against the registry, validate
//! parameters, and invoke the tool.

use crate::registry::ToolRegistry;
use crate::tool::ParamSpec;
use convoke_protocol::{ToolCallRequest, ToolError};
use log::{debug, warn};
use serde_json::{Map, Value, json};

/// Single entry point turning a tool-call request into a result.
///
/// Each dispatch is independent and stateless: one request yields exactly
/// one result, with no retries and no partial completion. Failures cross
/// the boundary as [`ToolError`] values, never as panics.
#[derive(Clone)]
pub struct ToolDispatcher {
    /// Registry consulted for tool lookup.
    registry: ToolRegistry,
}

impl ToolDispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch a tool call by name with a parameter mapping.
    ///
    /// Pipeline: registry lookup, parameter resolution against the tool's
    /// declared schema (defaults substituted, types checked), then
    /// invocation with the fully resolved mapping.
    pub async fn dispatch(
        &self,
        name: &str,
        parameters: Map<String, Value>,
    ) -> Result<Value, ToolError> {
        let Some(tool) = self.registry.get(name) else {
            debug!("dispatch rejected, unknown tool (name={})", name);
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        let resolved = resolve_parameters(&tool.parameters(), parameters)?;
        debug!(
            "dispatching tool (name={}, param_count={})",
            name,
            resolved.len()
        );

        match tool.call(&resolved).await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("tool execution failed (name={}): {}", name, err);
                Err(err)
            }
        }
    }

    /// Dispatch a [`ToolCallRequest`], e.g. one extracted from model output.
    pub async fn dispatch_request(&self, request: &ToolCallRequest) -> Result<Value, ToolError> {
        self.dispatch(&request.name, request.parameters.clone())
            .await
    }
}

/// Resolve supplied parameters against the declared specs.
///
/// Parameters are visited in declaration order; the first missing required
/// parameter fails the whole call. Undeclared keys are dropped so they can
/// never reach a tool body.
fn resolve_parameters(
    specs: &[ParamSpec],
    mut supplied: Map<String, Value>,
) -> Result<Map<String, Value>, ToolError> {
    let mut resolved = Map::new();
    for spec in specs {
        match supplied.remove(&spec.name) {
            Some(value) => {
                resolved.insert(spec.name.clone(), check_kind(spec, value)?);
            }
            None => {
                if let Some(default) = &spec.default {
                    resolved.insert(spec.name.clone(), default.clone());
                } else if spec.required {
                    debug!("dispatch rejected, missing parameter (name={})", spec.name);
                    return Err(ToolError::MissingParameter(spec.name.clone()));
                }
            }
        }
    }
    Ok(resolved)
}

/// Validate a supplied value against a declared kind.
///
/// Whole-valued floats coerce to integers; everything else must match the
/// declared tag exactly.
fn check_kind(spec: &ParamSpec, value: Value) -> Result<Value, ToolError> {
    use crate::tool::ParamKind;

    let matches = match spec.kind {
        ParamKind::String => value.is_string(),
        ParamKind::Boolean => value.is_boolean(),
        ParamKind::Number => value.is_number(),
        ParamKind::Integer => {
            if value.is_i64() || value.is_u64() {
                true
            } else if let Some(float) = value.as_f64() {
                if float.fract() == 0.0 && float.is_finite() {
                    return Ok(json!(float as i64));
                }
                false
            } else {
                false
            }
        }
    };

    if matches {
        Ok(value)
    } else {
        Err(ToolError::InvalidParameterType {
            parameter: spec.name.clone(),
            expected: spec.kind.as_str().to_string(),
            actual: json_type_name(&value).to_string(),
        })
    }
}

/// JSON type name used in type-mismatch errors.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
