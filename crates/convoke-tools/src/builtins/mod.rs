//! Built-in tools bundled with Convoke.

mod calculator;
mod text;
mod utils;
mod weather;

use crate::ToolRegistry;
use convoke_protocol::ToolError;
use log::info;
use std::sync::Arc;

pub use calculator::{AddTool, DivideTool, MultiplyTool, PowerTool, SquareRootTool, SubtractTool};
pub use text::{AnalyzeTextTool, CountCharactersTool, CountWordsTool, ExtractKeywordsTool};
pub use weather::{CurrentWeatherTool, ForecastTool};

/// Register all built-in tools with the provided registry.
pub fn register_builtin_tools(registry: &ToolRegistry) -> Result<(), ToolError> {
    registry.register(Arc::new(AddTool))?;
    registry.register(Arc::new(SubtractTool))?;
    registry.register(Arc::new(MultiplyTool))?;
    registry.register(Arc::new(DivideTool))?;
    registry.register(Arc::new(PowerTool))?;
    registry.register(Arc::new(SquareRootTool))?;
    registry.register(Arc::new(CurrentWeatherTool))?;
    registry.register(Arc::new(ForecastTool))?;
    registry.register(Arc::new(CountWordsTool))?;
    registry.register(Arc::new(CountCharactersTool))?;
    registry.register(Arc::new(ExtractKeywordsTool))?;
    registry.register(Arc::new(AnalyzeTextTool))?;
    info!("registered built-in tools");
    Ok(())
}

/// Build a registry pre-populated with built-in tools.
pub fn builtin_tool_registry() -> Result<ToolRegistry, ToolError> {
    let registry = ToolRegistry::new();
    register_builtin_tools(&registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::builtin_tool_registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_registry_contains_every_tool() {
        let registry = builtin_tool_registry().expect("registry");
        let mut names = registry.list();
        names.sort();
        assert_eq!(
            names,
            vec![
                "analyze_text",
                "calculator_add",
                "calculator_divide",
                "calculator_multiply",
                "calculator_power",
                "calculator_square_root",
                "calculator_subtract",
                "count_characters",
                "count_words",
                "extract_keywords",
                "get_weather",
                "get_weather_forecast",
            ]
        );
    }
}
