//! Pull the handful of display fields out of the raw API payloads.
//!
//! The payloads are untyped nested maps by design; everything here is
//! best-effort field extraction with a placeholder for anything absent.

use serde_json::Value;
use wunder_core::Report;

const UNKNOWN: &str = "n/a";

/// Render the short human-readable summary: city, weather, temperature,
/// humidity, and the first two forecast entries.
pub fn summary(report: &Report) -> String {
    let mut lines = Vec::new();

    let city = text_at(&report.conditions, "/current_observation/display_location/full");
    let weather = text_at(&report.conditions, "/current_observation/weather");
    let temp = text_at(&report.conditions, "/current_observation/temp_c");
    let humidity = text_at(&report.conditions, "/current_observation/relative_humidity");

    lines.push(format!("{city}: {weather}, {temp}°C, humidity {humidity}"));
    lines.push(format!("fetched {}", report.datetime.format("%Y-%m-%d %H:%M UTC")));

    let days = report
        .forecast
        .pointer("/forecast/simpleforecast/forecastday")
        .and_then(Value::as_array);

    if let Some(days) = days {
        for day in days.iter().take(2) {
            let name = text_at(day, "/date/weekday");
            let conditions = text_at(day, "/conditions");
            let high = text_at(day, "/high/celsius");
            let low = text_at(day, "/low/celsius");
            lines.push(format!("{name}: {conditions}, high {high}°C, low {low}°C"));
        }
    }

    lines.join("\n")
}

/// The value at a JSON pointer, rendered as text. Strings come back
/// unquoted; anything else uses its JSON rendering.
fn text_at(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN.to_string(),
    }
}
