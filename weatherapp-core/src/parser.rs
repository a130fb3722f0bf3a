use std::fmt::Debug;

use crate::model::{Clouds, ConditionItem, Coordinates, MainMeasurements, Rain, SystemInfo, Wind};

pub mod json;

pub use json::JsonDataParser;

/// Extracts each part of a current-weather payload independently.
///
/// Every operation takes the whole raw payload (`None` when there is none) and
/// always produces a value: absent data yields the documented default, and a
/// malformed section yields the default for that section only. Range checks are
/// left to the model constructors.
pub trait DataParser: Send + Sync + Debug {
    fn parse_coordinates(&self, raw: Option<&str>) -> Coordinates;

    fn parse_system_info(&self, raw: Option<&str>) -> SystemInfo;

    /// Condition entries in payload order; empty when there are none.
    fn parse_conditions(&self, raw: Option<&str>) -> Vec<ConditionItem>;

    fn parse_main(&self, raw: Option<&str>) -> MainMeasurements;

    fn parse_wind(&self, raw: Option<&str>) -> Wind;

    fn parse_rain(&self, raw: Option<&str>) -> Rain;

    fn parse_clouds(&self, raw: Option<&str>) -> Clouds;

    /// Time of data calculation (`dt`), unix seconds.
    fn parse_received_at(&self, raw: Option<&str>) -> Option<f64>;

    fn parse_city_id(&self, raw: Option<&str>) -> i64;

    fn parse_city_name(&self, raw: Option<&str>) -> String;

    /// Response code (`cod`) as delivered; the report applies its own floor.
    fn parse_status_code(&self, raw: Option<&str>) -> i64;
}
