use chrono::{DateTime, Utc};
use serde::Serialize;

use super::non_negative;

pub const DEFAULT_COUNTRY: &str = "";
pub const DEFAULT_SUNRISE: u64 = 0;
pub const DEFAULT_SUNSET: u64 = 0;

/// Country code and sun times (`sys`). Times are unix seconds, 0 when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SystemInfo {
    country: String,
    sunrise: u64,
    sunset: u64,
}

impl SystemInfo {
    pub fn new(country: Option<String>, sunrise: i64, sunset: i64) -> Self {
        Self {
            country: country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            sunrise: non_negative("sunrise", sunrise, DEFAULT_SUNRISE),
            sunset: non_negative("sunset", sunset, DEFAULT_SUNSET),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn sunrise(&self) -> u64 {
        self.sunrise
    }

    pub fn sunset(&self) -> u64 {
        self.sunset
    }

    pub fn sunrise_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.sunrise)
    }

    pub fn sunset_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.sunset)
    }
}

fn epoch_to_utc(secs: u64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    i64::try_from(secs).ok().and_then(|s| DateTime::from_timestamp(s, 0))
}
