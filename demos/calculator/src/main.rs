//! Direct-dispatch walkthrough over the calculator tools.

use anyhow::Result;
use convoke::init_logging;
use convoke::tools::{ToolDispatcher, builtin_tool_registry};
use serde_json::{Map, Value, json};

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let dispatcher = ToolDispatcher::new(builtin_tool_registry()?);

    let calls = [
        ("Addition", "calculator_add", json!({ "a": 125, "b": 67 })),
        (
            "Multiplication",
            "calculator_multiply",
            json!({ "a": 15, "b": 8 }),
        ),
        (
            "Power",
            "calculator_power",
            json!({ "base": 2, "exponent": 10 }),
        ),
        (
            "Square Root",
            "calculator_square_root",
            json!({ "number": 144 }),
        ),
        (
            "Division by zero",
            "calculator_divide",
            json!({ "a": 5, "b": 0 }),
        ),
    ];

    for (label, name, arguments) in calls {
        match dispatcher.dispatch(name, params(arguments.clone())).await {
            Ok(result) => println!("{label}: {arguments} = {result}"),
            Err(err) => println!("{label}: {arguments} -> {err}"),
        }
    }

    Ok(())
}
