use serde::Serialize;

use super::{
    Clouds, ConditionItem, Coordinates, MainMeasurements, Rain, SystemInfo, Wind, non_negative,
    within,
};

pub const DEFAULT_CITY_ID: u32 = 0;
pub const DEFAULT_CITY_NAME: &str = "";
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Aggregate current-weather report for one city.
///
/// A fresh report carries the default instance of every sub-record, so all
/// getters can be rendered without further checks. Setters are used by the
/// assembler while the report is being built and apply the same bounds as the
/// record constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    coordinates: Coordinates,
    system: SystemInfo,
    conditions: Vec<ConditionItem>,
    main: MainMeasurements,
    wind: Wind,
    rain: Rain,
    clouds: Clouds,
    received_at: Option<f64>,
    city_id: u32,
    city_name: String,
    status_code: u16,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            coordinates: Coordinates::default(),
            system: SystemInfo::default(),
            conditions: Vec::new(),
            main: MainMeasurements::default(),
            wind: Wind::default(),
            rain: Rain::default(),
            clouds: Clouds::default(),
            received_at: None,
            city_id: DEFAULT_CITY_ID,
            city_name: DEFAULT_CITY_NAME.to_string(),
            status_code: DEFAULT_STATUS_CODE,
        }
    }
}

impl WeatherReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn set_coordinates(&mut self, value: Coordinates) {
        self.coordinates = value;
    }

    pub fn system_info(&self) -> &SystemInfo {
        &self.system
    }

    pub fn set_system_info(&mut self, value: SystemInfo) {
        self.system = value;
    }

    pub fn conditions(&self) -> &[ConditionItem] {
        &self.conditions
    }

    /// Condition at `index`, or the default item when the index is out of range.
    pub fn condition_at(&self, index: usize) -> ConditionItem {
        self.conditions.get(index).cloned().unwrap_or_default()
    }

    pub fn conditions_len(&self) -> usize {
        self.conditions.len()
    }

    pub fn add_condition(&mut self, item: ConditionItem) {
        self.conditions.push(item);
    }

    pub fn main(&self) -> &MainMeasurements {
        &self.main
    }

    pub fn set_main(&mut self, value: MainMeasurements) {
        self.main = value;
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    pub fn set_wind(&mut self, value: Wind) {
        self.wind = value;
    }

    pub fn rain(&self) -> &Rain {
        &self.rain
    }

    pub fn set_rain(&mut self, value: Rain) {
        self.rain = value;
    }

    pub fn clouds(&self) -> &Clouds {
        &self.clouds
    }

    pub fn set_clouds(&mut self, value: Clouds) {
        self.clouds = value;
    }

    /// Time of data calculation, unix seconds.
    pub fn received_at(&self) -> Option<f64> {
        self.received_at
    }

    pub fn set_received_at(&mut self, value: Option<f64>) {
        self.received_at = within("received_at", value, 0.0..=f64::MAX);
    }

    pub fn city_id(&self) -> u32 {
        self.city_id
    }

    pub fn set_city_id(&mut self, value: i64) {
        self.city_id = non_negative("city_id", value, DEFAULT_CITY_ID);
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn set_city_name(&mut self, value: impl Into<String>) {
        self.city_name = value.into();
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Codes below 200 are not meaningful for a delivered report and reset to 200.
    pub fn set_status_code(&mut self, value: i64) {
        let code = non_negative("status_code", value, DEFAULT_STATUS_CODE);
        self.status_code = if code < DEFAULT_STATUS_CODE { DEFAULT_STATUS_CODE } else { code };
    }
}
