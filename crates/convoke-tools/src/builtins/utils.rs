//! Helpers shared by built-in tools.

use convoke_protocol::ToolError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse a resolved parameter mapping into a typed args struct.
///
/// The dispatcher has already enforced presence and kinds, so a failure
/// here means the tool's declared parameters disagree with its args struct.
pub(super) fn parse_args<T: DeserializeOwned>(args: &Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|err| ToolError::ExecutionError(err.to_string()))
}
