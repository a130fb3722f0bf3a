//! Human-readable rendering of report values.

use std::{convert::TryFrom, fmt};

use crate::model::WeatherReport;

pub const NOT_AVAILABLE: &str = "N/A";

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Kelvin, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    /// Convert a Kelvin reading into this unit, rounded to two decimals.
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => round_2(kelvin),
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
            TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: kelvin, celsius, fahrenheit."
            )),
        }
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    round_2(kelvin - KELVIN_OFFSET)
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    round_2((kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0)
}

/// Half-up rounding to two decimals; non-finite input gives NaN.
fn round_2(value: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    (value * 100.0).round() / 100.0
}

pub fn format_temperature(report: &WeatherReport, unit: TemperatureUnit) -> String {
    match report.main().temperature() {
        Some(kelvin) => format!("{} {}", unit.from_kelvin(kelvin), unit.symbol()),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_humidity(report: &WeatherReport) -> String {
    match report.main().humidity() {
        Some(value) => format!("{value} %"),
        None => NOT_AVAILABLE.to_string(),
    }
}
