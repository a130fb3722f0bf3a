use serde::Serialize;

use super::{finite, within};

/// Wind speed (m/s) and meteorological direction (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Wind {
    speed: Option<f64>,
    direction: Option<f64>,
}

impl Wind {
    pub fn new(speed: Option<f64>, direction: Option<f64>) -> Self {
        Self {
            speed: within("wind_speed", speed, 0.0..=f64::MAX),
            direction: finite("wind_direction", direction),
        }
    }

    pub fn speed(&self) -> Option<f64> {
        self.speed
    }

    pub fn direction(&self) -> Option<f64> {
        self.direction
    }
}
