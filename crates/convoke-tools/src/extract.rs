//! Extraction of tool-call directives from free-form model output.

use convoke_protocol::ToolCallRequest;
use log::debug;
use serde_json::Value;

/// Extract a `tool_call` directive from unstructured model text.
///
/// The candidate span runs from the first `{` to the last `}` in the text,
/// which tolerates prose before and after the JSON fragment. This is a
/// deliberately permissive heuristic, preserved for compatibility: a
/// response containing multiple independent JSON objects yields one span
/// covering all of them, which then usually fails to parse.
///
/// Absence is the common case, not an error: `None` means "the model did
/// not invoke a tool". That covers missing braces, unparseable JSON, a
/// missing `tool_call` key, and a malformed directive (non-object value or
/// missing `name`). A directive without a `parameters` field yields an
/// empty parameter mapping.
pub fn extract_tool_call(text: &str) -> Option<ToolCallRequest> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    let parsed: Value = serde_json::from_str(&text[start..=end]).ok()?;
    let call = parsed.get("tool_call")?;
    let request: ToolCallRequest = serde_json::from_value(call.clone()).ok()?;
    debug!("extracted tool call (name={})", request.name);
    Some(request)
}
