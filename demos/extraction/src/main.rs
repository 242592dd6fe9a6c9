//! Extract-then-dispatch loop over canned model responses.
//!
//! Stands in for the conversation side of a model integration: the
//! instructions block is what a caller would place in the system prompt,
//! and the canned responses are what a model might send back.

use anyhow::Result;
use convoke::init_logging;
use convoke::tools::{ToolDispatcher, builtin_tool_registry, extract_tool_call, tool_call_instructions};

const RESPONSES: [&str; 4] = [
    r#"Let me add those for you. {"tool_call": {"name": "calculator_add", "parameters": {"a": 125, "b": 67}}}"#,
    r#"Checking the forecast: {"tool_call": {"name": "get_weather", "parameters": {"city": "Lisbon", "country": "PT"}}} back shortly."#,
    r#"{"tool_call": {"name": "open_pod_bay_doors", "parameters": {}}}"#,
    "The capital of Portugal is Lisbon.",
];

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let registry = builtin_tool_registry()?;
    let dispatcher = ToolDispatcher::new(registry.clone());

    println!("--- system prompt block ---");
    println!("{}", tool_call_instructions(&registry.specs()));
    println!();

    for response in RESPONSES {
        println!("model: {response}");
        match extract_tool_call(response) {
            Some(request) => match dispatcher.dispatch_request(&request).await {
                Ok(result) => println!("  -> {} returned {result}", request.name),
                Err(err) => println!("  -> {} failed: {err}", request.name),
            },
            None => println!("  -> no tool call, reply passes through"),
        }
        println!();
    }

    Ok(())
}
