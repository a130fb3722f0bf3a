//! Immutable value records for a current-weather report.
//!
//! Every record validates its inputs in `new` and replaces values outside the
//! documented bounds with that field's default. Numeric fields whose default is
//! "unknown" are `Option<f64>` and default to `None`.

use std::ops::RangeInclusive;

use tracing::warn;

mod clouds;
mod condition;
mod coordinates;
mod measurements;
mod rain;
mod report;
mod system;
mod wind;

pub use clouds::Clouds;
pub use condition::ConditionItem;
pub use coordinates::Coordinates;
pub use measurements::MainMeasurements;
pub use rain::Rain;
pub use report::{DEFAULT_CITY_ID, DEFAULT_CITY_NAME, DEFAULT_STATUS_CODE, WeatherReport};
pub use system::SystemInfo;
pub use wind::Wind;

/// Keep `value` only when it is a finite number.
fn finite(field: &'static str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if !v.is_finite() => {
            warn!(field, value = v, "Value is not a finite number, reset to default");
            None
        }
        other => other,
    }
}

/// Keep `value` only when it lies inside `bounds` (inclusive).
fn within(field: &'static str, value: Option<f64>, bounds: RangeInclusive<f64>) -> Option<f64> {
    match value {
        Some(v) if !bounds.contains(&v) => {
            warn!(
                field,
                value = v,
                min = *bounds.start(),
                max = *bounds.end(),
                "Value is out of bounds, reset to default"
            );
            None
        }
        other => other,
    }
}

/// Convert a signed wire value into unsigned storage, falling back to `default`
/// for negative or oversized values.
fn non_negative<T>(field: &'static str, value: i64, default: T) -> T
where
    T: TryFrom<i64>,
{
    T::try_from(value).unwrap_or_else(|_| {
        warn!(field, value, "Value is negative or too large, reset to default");
        default
    })
}
