use serde::Serialize;

use super::within;

pub const MIN_COVERAGE: f64 = 0.0;
pub const MAX_COVERAGE: f64 = 100.0;

/// Cloud coverage in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Clouds {
    coverage: Option<f64>,
}

impl Clouds {
    pub fn new(coverage: Option<f64>) -> Self {
        Self { coverage: within("cloud_coverage", coverage, MIN_COVERAGE..=MAX_COVERAGE) }
    }

    pub fn coverage(&self) -> Option<f64> {
        self.coverage
    }
}
