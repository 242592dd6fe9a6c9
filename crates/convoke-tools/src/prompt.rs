//! Prompt-side rendering of the tool-call contract.

use crate::tool::ToolSpec;
use std::fmt::Write;

/// Render system-prompt instructions describing the available tools and
/// the `tool_call` JSON shape the model must emit to invoke one.
///
/// The surrounding conversation scaffolding (user message, transport) is
/// the caller's concern.
pub fn tool_call_instructions(specs: &[ToolSpec]) -> String {
    let mut listing = String::new();
    for spec in specs {
        let _ = writeln!(listing, "- {}: {}", spec.name, spec.description);
    }

    format!(
        r#"You are an AI assistant with access to the following tools:

{listing}
When you need to use a tool, respond with a JSON object in this format:
{{
    "tool_call": {{
        "name": "tool_name",
        "parameters": {{
            "param1": "value1",
            "param2": "value2"
        }}
    }}
}}

If you don't need to use any tools, respond normally."#
    )
}

#[cfg(test)]
mod tests {
    use super::tool_call_instructions;
    use crate::tool::{ParamKind, ParamSpec, ToolSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn instructions_list_every_tool() {
        let specs = vec![
            ToolSpec {
                name: "calculator_add".to_string(),
                description: "Add two numbers together".to_string(),
                parameters: vec![
                    ParamSpec::required("a", ParamKind::Number, "First number"),
                    ParamSpec::required("b", ParamKind::Number, "Second number"),
                ],
            },
            ToolSpec {
                name: "get_weather".to_string(),
                description: "Get current weather information for a city".to_string(),
                parameters: Vec::new(),
            },
        ];

        let prompt = tool_call_instructions(&specs);
        assert!(prompt.contains("- calculator_add: Add two numbers together"));
        assert!(prompt.contains("- get_weather: Get current weather information for a city"));
        assert!(prompt.contains(r#""tool_call""#));
    }

    #[test]
    fn empty_spec_list_still_renders_contract() {
        let prompt = tool_call_instructions(&[]);
        assert_eq!(prompt.contains("- "), false);
        assert!(prompt.contains("respond normally"));
    }
}
