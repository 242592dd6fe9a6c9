//! Built-in weather tools backed by canned data.
//!
//! These are stub implementations behind the real [`Tool`] interface: the
//! responses are fixed, not fetched. A tool backed by an actual weather
//! API can replace them without touching the dispatcher contract.

use crate::builtins::utils::parse_args;
use crate::tool::{ParamKind, ParamSpec, Tool};
use async_trait::async_trait;
use chrono::Utc;
use convoke_protocol::ToolError;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Default country code when none is supplied.
const DEFAULT_COUNTRY: &str = "US";
/// Default forecast length in days.
const DEFAULT_FORECAST_DAYS: i64 = 5;
/// Upper bound on the forecast window.
const MAX_FORECAST_DAYS: i64 = 14;

/// Condition cycle used by the canned forecast.
const CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Partly Cloudy"];

/// Arguments for CurrentWeatherTool.
#[derive(Debug, Deserialize)]
struct CurrentWeatherArgs {
    city: String,
    country: String,
}

/// Arguments for ForecastTool.
#[derive(Debug, Deserialize)]
struct ForecastArgs {
    city: String,
    days: i64,
}

/// Tool returning canned current-weather data for a city.
#[derive(Debug, Default)]
pub struct CurrentWeatherTool;

#[async_trait]
impl Tool for CurrentWeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get current weather information for a city"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("city", ParamKind::String, "City name"),
            ParamSpec::optional(
                "country",
                ParamKind::String,
                "Country code (optional)",
                json!(DEFAULT_COUNTRY),
            ),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: CurrentWeatherArgs = parse_args(args)?;
        Ok(json!({
            "city": input.city,
            "country": input.country,
            "temperature": 22,
            "condition": "Sunny",
            "humidity": 60,
            "wind_speed": 10,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

/// Tool returning a canned multi-day forecast for a city.
#[derive(Debug, Default)]
pub struct ForecastTool;

#[async_trait]
impl Tool for ForecastTool {
    fn name(&self) -> &str {
        "get_weather_forecast"
    }

    fn description(&self) -> &str {
        "Get a multi-day weather forecast for a city"
    }

    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::required("city", ParamKind::String, "City name"),
            ParamSpec::optional(
                "days",
                ParamKind::Integer,
                "Number of days to forecast",
                json!(DEFAULT_FORECAST_DAYS),
            ),
        ]
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let input: ForecastArgs = parse_args(args)?;
        if input.days < 1 {
            return Err(ToolError::ExecutionError(
                "forecast window must be at least one day".to_string(),
            ));
        }
        if input.days > MAX_FORECAST_DAYS {
            return Err(ToolError::ExecutionError(format!(
                "forecast window is limited to {MAX_FORECAST_DAYS} days"
            )));
        }

        let forecast: Vec<Value> = (0..input.days)
            .map(|day| {
                json!({
                    "day": day + 1,
                    "city": input.city,
                    "temperature_high": 25 + day,
                    "temperature_low": 15 + day,
                    "condition": CONDITIONS[(day % 4) as usize],
                    "precipitation_chance": (day * 20) % 100,
                })
            })
            .collect();
        Ok(json!(forecast))
    }
}
