use anyhow::{Context, Result};
use reqwest::Url;
use tracing::warn;

use crate::config::Config;

pub const WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
pub const WEATHER_ICON_URL: &str = "http://openweathermap.org/img/w/";

const KEY_CITY: &str = "q";
const KEY_API_KEY: &str = "appid";

/// What to ask the current-weather endpoint for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRequestParameters {
    pub city: String,
    /// ISO 3166 country code, e.g. "JP".
    pub country: Option<String>,
}

impl UrlRequestParameters {
    pub fn new(city: impl Into<String>, country: Option<String>) -> Self {
        Self { city: city.into(), country }
    }

    fn query(&self) -> Option<String> {
        let city = self.city.trim();
        if city.is_empty() {
            return None;
        }

        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => Some(format!("{city},{country}")),
            _ => Some(city.to_string()),
        }
    }
}

/// Builds request URLs for the weather and icon endpoints.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    weather_url: Url,
    icon_url: Url,
    api_key: Option<String>,
}

impl UrlBuilder {
    pub fn new(weather_url: Url, icon_url: Url, api_key: Option<String>) -> Self {
        Self { weather_url, icon_url, api_key }
    }

    /// Endpoints from `config`, falling back to the public OpenWeatherMap URLs.
    pub fn from_config(config: &Config) -> Result<Self> {
        let weather = config.weather_url.as_deref().unwrap_or(WEATHER_URL);
        let icon = config.icon_url.as_deref().unwrap_or(WEATHER_ICON_URL);

        let weather_url = Url::parse(weather)
            .with_context(|| format!("Invalid weather endpoint URL: {weather}"))?;
        let icon_url =
            Url::parse(icon).with_context(|| format!("Invalid icon base URL: {icon}"))?;

        Ok(Self::new(weather_url, icon_url, config.api_key()))
    }

    /// Current-weather URL for a city. Without a city the bare endpoint is
    /// returned.
    pub fn weather_by_city(&self, params: &UrlRequestParameters) -> Url {
        let mut url = self.weather_url.clone();

        let Some(query) = params.query() else {
            return url;
        };

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(KEY_CITY, &query);
            if let Some(key) = &self.api_key {
                pairs.append_pair(KEY_API_KEY, key);
            }
        }

        url
    }

    /// `<icon base>/<code>.png`. Without a code the icon base is returned.
    pub fn weather_icon(&self, icon_code: &str) -> Url {
        let mut url = self.icon_url.clone();

        let code = icon_code.trim();
        if code.is_empty() {
            return url;
        }

        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(&format!("{code}.png"));
            }
            Err(()) => warn!(base = %self.icon_url, "Icon base URL can not take path segments"),
        }

        url
    }
}
