use serde::Serialize;

use super::{finite, within};

/// Temperatures (Kelvin), relative humidity (%) and pressure (hPa) from `main`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MainMeasurements {
    temperature: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
}

impl MainMeasurements {
    pub fn new(
        temperature: Option<f64>,
        humidity: Option<f64>,
        pressure: Option<f64>,
        temp_min: Option<f64>,
        temp_max: Option<f64>,
    ) -> Self {
        Self {
            temperature: finite("temperature", temperature),
            humidity: within("humidity", humidity, 0.0..=f64::MAX),
            pressure: within("pressure", pressure, 0.0..=f64::MAX),
            temp_min: finite("temp_min", temp_min),
            temp_max: finite("temp_max", temp_max),
        }
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn humidity(&self) -> Option<f64> {
        self.humidity
    }

    pub fn pressure(&self) -> Option<f64> {
        self.pressure
    }

    pub fn temp_min(&self) -> Option<f64> {
        self.temp_min
    }

    pub fn temp_max(&self) -> Option<f64> {
        self.temp_max
    }
}
