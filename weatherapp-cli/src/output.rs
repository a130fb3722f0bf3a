use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use weatherapp_core::{
    TemperatureUnit, WeatherReport,
    display::{self, NOT_AVAILABLE},
};

use crate::cli::OutputArgs;

pub fn print(report: &WeatherReport, args: &OutputArgs, icon: Option<&Path>) -> Result<()> {
    if args.json {
        let mut value = serde_json::to_value(report).context("Failed to serialize report")?;
        if let Some(path) = icon {
            value["icon_path"] = serde_json::Value::String(path.display().to_string());
        }
        let text = serde_json::to_string_pretty(&value).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        println!("{}", render(report, args.units, icon));
    }

    Ok(())
}

fn render(report: &WeatherReport, unit: TemperatureUnit, icon: Option<&Path>) -> String {
    let main = report.main();
    let sys = report.system_info();
    let condition = report.condition_at(0);

    let location = match (report.city_name(), sys.country()) {
        ("", "") => NOT_AVAILABLE.to_string(),
        (name, "") => name.to_string(),
        ("", country) => country.to_string(),
        (name, country) => format!("{name}, {country}"),
    };

    let condition_text = if condition.description().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{} ({})", condition.description(), condition.main())
    };

    let temperature = format!(
        "{} (min {}, max {})",
        display::format_temperature(report, unit),
        temperature(main.temp_min(), unit),
        temperature(main.temp_max(), unit),
    );

    let coordinates = report.coordinates();
    let wind = report.wind();

    let mut lines = vec![
        ("Location", location),
        (
            "Coordinates",
            format!(
                "{}, {}",
                value(coordinates.latitude(), ""),
                value(coordinates.longitude(), "")
            ),
        ),
        ("Condition", condition_text),
        ("Temperature", temperature),
        ("Humidity", display::format_humidity(report)),
        ("Pressure", value(main.pressure(), " hPa")),
        ("Wind", format!("{} at {}", value(wind.speed(), " m/s"), value(wind.direction(), "°"))),
        ("Clouds", value(report.clouds().coverage(), " %")),
        ("Rain (3h)", format!("{} mm", report.rain().volume_3h())),
        ("Sunrise", timestamp(sys.sunrise_utc())),
        ("Sunset", timestamp(sys.sunset_utc())),
        (
            "Observed",
            timestamp(
                report.received_at().and_then(|secs| DateTime::from_timestamp(secs as i64, 0)),
            ),
        ),
    ];
    if let Some(path) = icon {
        lines.push(("Icon", path.display().to_string()));
    }

    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    lines
        .iter()
        .map(|(label, text)| format!("{:<width$}  {text}", format!("{label}:"), width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn value(v: Option<f64>, suffix: &str) -> String {
    v.map(|v| format!("{v}{suffix}")).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn temperature(kelvin: Option<f64>, unit: TemperatureUnit) -> String {
    kelvin
        .map(|k| format!("{} {}", unit.from_kelvin(k), unit.symbol()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherapp_core::ApiService;

    const RAW_RESPONSE: &str = r#"{"coord":{"lon":139,"lat":35},"sys":{"country":"JP","sunrise":1369769524,"sunset":1369821049},"weather":[{"id":804,"main":"clouds","description":"overcast clouds","icon":"04n"}],"main":{"temp":289.5,"humidity":89,"pressure":1013,"temp_min":287.04,"temp_max":292.04},"wind":{"speed":7.31,"deg":187.002},"rain":{"3h":0},"clouds":{"all":92},"dt":1369824698,"id":1851632,"name":"Shuzenji","cod":200}"#;

    #[test]
    fn renders_full_report() {
        let report = ApiService::new().assemble(RAW_RESPONSE);
        let text = render(&report, TemperatureUnit::Celsius, Some(Path::new("/tmp/icon")));

        assert!(text.contains("Location:     Shuzenji, JP"));
        assert!(text.contains("Coordinates:  35, 139"));
        assert!(text.contains("overcast clouds (clouds)"));
        assert!(text.contains("16.35 °C (min 13.89 °C, max 18.89 °C)"));
        assert!(text.contains("Humidity:     89 %"));
        assert!(text.contains("Sunrise:      2013-05-28 19:32:04 UTC"));
        assert!(text.contains("Icon:         /tmp/icon"));
    }

    #[test]
    fn renders_defaults_as_not_available() {
        let text = render(&WeatherReport::default(), TemperatureUnit::Kelvin, None);

        assert!(text.contains("Location:     N/A"));
        assert!(text.contains("Temperature:  N/A (min N/A, max N/A)"));
        assert!(text.contains("Rain (3h):    0 mm"));
        assert!(!text.contains("Icon:"));
    }
}
