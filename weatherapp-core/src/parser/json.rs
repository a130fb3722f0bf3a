use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::{
    error::FieldError,
    model::{
        Clouds, ConditionItem, Coordinates, DEFAULT_CITY_ID, DEFAULT_CITY_NAME,
        DEFAULT_STATUS_CODE, MainMeasurements, Rain, SystemInfo, Wind,
    },
};

use super::DataParser;

const KEY_COORD: &str = "coord";
const KEY_LON: &str = "lon";
const KEY_LAT: &str = "lat";
const KEY_SYS: &str = "sys";
const KEY_COUNTRY: &str = "country";
const KEY_SUNRISE: &str = "sunrise";
const KEY_SUNSET: &str = "sunset";
const KEY_WEATHER: &str = "weather";
const KEY_MAIN: &str = "main";
const KEY_TEMP: &str = "temp";
const KEY_HUMIDITY: &str = "humidity";
const KEY_PRESSURE: &str = "pressure";
const KEY_TEMP_MIN: &str = "temp_min";
const KEY_TEMP_MAX: &str = "temp_max";
const KEY_DESCRIPTION: &str = "description";
const KEY_ICON: &str = "icon";
const KEY_WIND: &str = "wind";
const KEY_SPEED: &str = "speed";
const KEY_DEG: &str = "deg";
const KEY_RAIN: &str = "rain";
const KEY_3H: &str = "3h";
const KEY_CLOUDS: &str = "clouds";
const KEY_ALL: &str = "all";
const KEY_DT: &str = "dt";
const KEY_ID: &str = "id";
const KEY_NAME: &str = "name";
const KEY_COD: &str = "cod";

type Object = Map<String, Value>;

/// [`DataParser`] for the OpenWeatherMap "current weather" JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDataParser;

impl JsonDataParser {
    pub fn new() -> Self {
        Self
    }

    /// Top-level object of the payload.
    fn document(raw: Option<&str>) -> Option<Object> {
        let Some(raw) = raw else {
            warn!("Can not convert raw data to JSON, raw data is absent");
            return None;
        };

        if raw.is_empty() {
            warn!("Can not convert raw data to JSON, raw data is empty");
            return None;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(document)) => Some(document),
            Ok(other) => {
                error!(found = kind(&other), "Raw data is not a JSON object");
                None
            }
            Err(e) => {
                error!(error = %e, "Can not convert raw data to JSON");
                None
            }
        }
    }

    /// Nested object stored under `key` in the top-level document.
    fn section(raw: Option<&str>, key: &'static str) -> Option<Object> {
        match Self::document(raw)?.remove(key)? {
            Value::Object(section) => Some(section),
            Value::Null => None,
            other => {
                error!(key, found = kind(&other), "Section is not a JSON object");
                None
            }
        }
    }
}

impl DataParser for JsonDataParser {
    fn parse_coordinates(&self, raw: Option<&str>) -> Coordinates {
        Self::section(raw, KEY_COORD)
            .map(|coord| or_default(KEY_COORD, coordinates(&coord)))
            .unwrap_or_default()
    }

    fn parse_system_info(&self, raw: Option<&str>) -> SystemInfo {
        Self::section(raw, KEY_SYS)
            .map(|sys| or_default(KEY_SYS, system_info(&sys)))
            .unwrap_or_default()
    }

    fn parse_conditions(&self, raw: Option<&str>) -> Vec<ConditionItem> {
        let Some(mut document) = Self::document(raw) else {
            return Vec::new();
        };

        let entries = match document.remove(KEY_WEATHER) {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                error!(key = KEY_WEATHER, found = kind(&other), "Weather conditions are not an array");
                return Vec::new();
            }
        };

        let parsed = entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Object(item) => Some(condition(item)),
                other => {
                    warn!(found = kind(other), "Skipping weather condition that is not an object");
                    None
                }
            })
            .collect::<Result<Vec<_>, _>>();

        or_default(KEY_WEATHER, parsed)
    }

    fn parse_main(&self, raw: Option<&str>) -> MainMeasurements {
        Self::section(raw, KEY_MAIN)
            .map(|main| or_default(KEY_MAIN, main_measurements(&main)))
            .unwrap_or_default()
    }

    fn parse_wind(&self, raw: Option<&str>) -> Wind {
        Self::section(raw, KEY_WIND)
            .map(|wind| or_default(KEY_WIND, wind_info(&wind)))
            .unwrap_or_default()
    }

    fn parse_rain(&self, raw: Option<&str>) -> Rain {
        Self::section(raw, KEY_RAIN)
            .map(|rain| or_default(KEY_RAIN, rain_info(&rain)))
            .unwrap_or_default()
    }

    fn parse_clouds(&self, raw: Option<&str>) -> Clouds {
        Self::section(raw, KEY_CLOUDS)
            .map(|clouds| or_default(KEY_CLOUDS, clouds_info(&clouds)))
            .unwrap_or_default()
    }

    fn parse_received_at(&self, raw: Option<&str>) -> Option<f64> {
        Self::document(raw).and_then(|document| or_default(KEY_DT, number(&document, KEY_DT)))
    }

    fn parse_city_id(&self, raw: Option<&str>) -> i64 {
        Self::document(raw)
            .and_then(|document| or_default(KEY_ID, integer(&document, KEY_ID)))
            .unwrap_or(i64::from(DEFAULT_CITY_ID))
    }

    fn parse_city_name(&self, raw: Option<&str>) -> String {
        Self::document(raw)
            .and_then(|document| or_default(KEY_NAME, string(&document, KEY_NAME)))
            .unwrap_or_else(|| DEFAULT_CITY_NAME.to_string())
    }

    fn parse_status_code(&self, raw: Option<&str>) -> i64 {
        Self::document(raw)
            .and_then(|document| or_default(KEY_COD, integer(&document, KEY_COD)))
            .unwrap_or(i64::from(DEFAULT_STATUS_CODE))
    }
}

fn coordinates(coord: &Object) -> Result<Coordinates, FieldError> {
    Ok(Coordinates::new(number(coord, KEY_LAT)?, number(coord, KEY_LON)?))
}

fn system_info(sys: &Object) -> Result<SystemInfo, FieldError> {
    Ok(SystemInfo::new(
        string(sys, KEY_COUNTRY)?,
        integer(sys, KEY_SUNRISE)?.unwrap_or_default(),
        integer(sys, KEY_SUNSET)?.unwrap_or_default(),
    ))
}

fn condition(item: &Object) -> Result<ConditionItem, FieldError> {
    Ok(ConditionItem::new(
        integer(item, KEY_ID)?.unwrap_or_default(),
        string(item, KEY_MAIN)?,
        string(item, KEY_DESCRIPTION)?,
        string(item, KEY_ICON)?,
    ))
}

fn main_measurements(main: &Object) -> Result<MainMeasurements, FieldError> {
    Ok(MainMeasurements::new(
        number(main, KEY_TEMP)?,
        number(main, KEY_HUMIDITY)?,
        number(main, KEY_PRESSURE)?,
        number(main, KEY_TEMP_MIN)?,
        number(main, KEY_TEMP_MAX)?,
    ))
}

fn wind_info(wind: &Object) -> Result<Wind, FieldError> {
    Ok(Wind::new(number(wind, KEY_SPEED)?, number(wind, KEY_DEG)?))
}

fn rain_info(rain: &Object) -> Result<Rain, FieldError> {
    Ok(Rain::new(integer(rain, KEY_3H)?.unwrap_or_default()))
}

fn clouds_info(clouds: &Object) -> Result<Clouds, FieldError> {
    Ok(Clouds::new(number(clouds, KEY_ALL)?))
}

/// Log a discarded section and fall back to its default.
fn or_default<T: Default>(key: &'static str, parsed: Result<T, FieldError>) -> T {
    parsed.unwrap_or_else(|e| {
        error!(key, error = %e, "Malformed value, falling back to default");
        T::default()
    })
}

fn number(object: &Object, key: &'static str) -> Result<Option<f64>, FieldError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => Err(mismatch(key, "a number", other)),
    }
}

/// Integral value of a JSON number; fractions are truncated toward zero.
fn integer(object: &Object, key: &'static str) -> Result<Option<i64>, FieldError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))),
        Some(other) => Err(mismatch(key, "an integer", other)),
    }
}

fn string(object: &Object, key: &'static str) -> Result<Option<String>, FieldError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(key, "a string", other)),
    }
}

fn mismatch(key: &'static str, expected: &'static str, found: &Value) -> FieldError {
    FieldError { key, expected, found: kind(found) }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
