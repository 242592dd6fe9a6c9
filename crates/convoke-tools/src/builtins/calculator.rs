//! Built-in arithmetic tools.

use crate::builtins::utils::parse_args;
use crate::tool::{ParamKind, ParamSpec, Tool};
use async_trait::async_trait;
use convoke_protocol::ToolError;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Arguments for the binary arithmetic tools.
#[derive(Debug, Deserialize)]
struct BinaryArgs {
    a: f64,
    b: f64,
}

/// Arguments for PowerTool.
#[derive(Debug, Deserialize)]
struct PowerArgs {
    base: f64,
    exponent: f64,
}

/// Arguments for SquareRootTool.
#[derive(Debug, Deserialize)]
struct SquareRootArgs {
    number: f64,
}

/// Declare the `a`/`b` operand pair shared by the binary tools.
fn binary_params() -> Vec<ParamSpec> {
    vec![
        ParamSpec::required("a", ParamKind::Number, "First number"),
        ParamSpec::required("b", ParamKind::Number, "Second number"),
    ]
}

/// Wrap an arithmetic result, rejecting values JSON cannot represent.
///
/// serde_json serializes non-finite floats as null, which would silently
/// corrupt the result, so overflow to infinity is a domain error.
fn number(value: f64) -> Result<Value, ToolError> {
    if value.is_finite() {
        Ok(json!(value))
    } else {
        Err(ToolError::ExecutionError(
            "result is not a finite number".to_string(),
        ))
    }
}

/// Tool adding two numbers.
#[derive(Debug, Default)]
pub struct AddTool;

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &str {
        "calculator_add"
    }

    fn description(&self) -> &str {
        "Add two numbers together"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        binary_params()
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: BinaryArgs = parse_args(args)?;
        number(input.a + input.b)
    }
}

/// Tool subtracting the second number from the first.
#[derive(Debug, Default)]
pub struct SubtractTool;

#[async_trait]
impl Tool for SubtractTool {
    fn name(&self) -> &str {
        "calculator_subtract"
    }

    fn description(&self) -> &str {
        "Subtract the second number from the first"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        binary_params()
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: BinaryArgs = parse_args(args)?;
        number(input.a - input.b)
    }
}

/// Tool multiplying two numbers.
#[derive(Debug, Default)]
pub struct MultiplyTool;

#[async_trait]
impl Tool for MultiplyTool {
    fn name(&self) -> &str {
        "calculator_multiply"
    }

    fn description(&self) -> &str {
        "Multiply two numbers"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        binary_params()
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: BinaryArgs = parse_args(args)?;
        number(input.a * input.b)
    }
}

/// Tool dividing the first number by the second.
#[derive(Debug, Default)]
pub struct DivideTool;

#[async_trait]
impl Tool for DivideTool {
    fn name(&self) -> &str {
        "calculator_divide"
    }

    fn description(&self) -> &str {
        "Divide the first number by the second"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        binary_params()
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: BinaryArgs = parse_args(args)?;
        if input.b == 0.0 {
            return Err(ToolError::ExecutionError(
                "cannot divide by zero".to_string(),
            ));
        }
        number(input.a / input.b)
    }
}

/// Tool raising a base to an exponent.
#[derive(Debug, Default)]
pub struct PowerTool;

#[async_trait]
impl Tool for PowerTool {
    fn name(&self) -> &str {
        "calculator_power"
    }

    fn description(&self) -> &str {
        "Raise a base to the power of an exponent"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("base", ParamKind::Number, "Base value"),
            ParamSpec::required("exponent", ParamKind::Number, "Exponent value"),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: PowerArgs = parse_args(args)?;
        number(input.base.powf(input.exponent))
    }
}

/// Tool computing a square root.
#[derive(Debug, Default)]
pub struct SquareRootTool;

#[async_trait]
impl Tool for SquareRootTool {
    fn name(&self) -> &str {
        "calculator_square_root"
    }

    fn description(&self) -> &str {
        "Calculate the square root of a number"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::required(
            "number",
            ParamKind::Number,
            "Number to take the square root of",
        )]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: SquareRootArgs = parse_args(args)?;
        if input.number < 0.0 {
            return Err(ToolError::ExecutionError(
                "cannot take the square root of a negative number".to_string(),
            ));
        }
        number(input.number.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddTool, DivideTool, MultiplyTool, PowerTool, SquareRootTool, SubtractTool};
    use crate::tool::Tool;
    use convoke_protocol::ToolError;
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[tokio::test]
    async fn add_and_subtract() {
        let sum = AddTool
            .call(&params(json!({ "a": 125.0, "b": 67.0 })))
            .await
            .expect("add");
        assert_eq!(sum, json!(192.0));

        let difference = SubtractTool
            .call(&params(json!({ "a": 10.0, "b": 4.5 })))
            .await
            .expect("subtract");
        assert_eq!(difference, json!(5.5));
    }

    #[tokio::test]
    async fn multiply_and_power() {
        let product = MultiplyTool
            .call(&params(json!({ "a": 15.0, "b": 8.0 })))
            .await
            .expect("multiply");
        assert_eq!(product, json!(120.0));

        let power = PowerTool
            .call(&params(json!({ "base": 2.0, "exponent": 10.0 })))
            .await
            .expect("power");
        assert_eq!(power, json!(1024.0));
    }

    #[tokio::test]
    async fn divide_rejects_zero_divisor() {
        let err = DivideTool
            .call(&params(json!({ "a": 5.0, "b": 0.0 })))
            .await
            .expect_err("divide by zero");
        match err {
            ToolError::ExecutionError(message) => assert_eq!(message, "cannot divide by zero"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn square_root_rejects_negative_input() {
        let err = SquareRootTool
            .call(&params(json!({ "number": -1.0 })))
            .await
            .expect_err("negative");
        match err {
            ToolError::ExecutionError(message) => {
                assert_eq!(message, "cannot take the square root of a negative number");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let root = SquareRootTool
            .call(&params(json!({ "number": 144.0 })))
            .await
            .expect("sqrt");
        assert_eq!(root, json!(12.0));
    }

    #[tokio::test]
    async fn overflow_to_infinity_is_a_domain_error() {
        let err = PowerTool
            .call(&params(json!({ "base": 1e308, "exponent": 2.0 })))
            .await
            .expect_err("overflow");
        match err {
            ToolError::ExecutionError(message) => {
                assert_eq!(message, "result is not a finite number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
