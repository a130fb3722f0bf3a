//! Core library for the `weatherapp` CLI.
//!
//! This crate defines:
//! - Validated value records for an OpenWeatherMap current-weather report
//! - A lenient JSON field parser that falls back to defaults instead of failing
//! - Report assembly and icon download on top of pluggable downloaders and sinks
//! - Request URL building, display helpers and configuration
//!
//! It is used by `weatherapp-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod config;
pub mod display;
pub mod downloader;
pub mod error;
pub mod model;
pub mod parser;
pub mod request;
pub mod sink;

pub use api::ApiService;
pub use config::Config;
pub use display::TemperatureUnit;
pub use downloader::{Downloader, FileDownloader, HttpDownloader};
pub use error::IconError;
pub use model::{
    Clouds, ConditionItem, Coordinates, MainMeasurements, Rain, SystemInfo, WeatherReport, Wind,
};
pub use parser::{DataParser, JsonDataParser};
pub use reqwest::Url;
pub use request::{UrlBuilder, UrlRequestParameters};
pub use sink::{IconSink, TempDirSink};
