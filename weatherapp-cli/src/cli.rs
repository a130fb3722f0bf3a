use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use weatherapp_core::{
    ApiService, Config, FileDownloader, HttpDownloader, TempDirSink, TemperatureUnit, Url,
    UrlBuilder, UrlRequestParameters, WeatherReport,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherapp", version, about = "Current weather from OpenWeatherMap")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Shuzenji".
        city: String,

        /// Optional ISO 3166 country code, e.g. "JP".
        #[arg(long)]
        country: Option<String>,

        /// Also download the condition icon and print where it was saved.
        #[arg(long)]
        icon: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a report from a saved JSON response.
    Parse {
        /// Path to a current-weather JSON document.
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Temperature unit: kelvin, celsius or fahrenheit.
    #[arg(long, value_parser = parse_unit, default_value = "celsius")]
    pub units: TemperatureUnit,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_unit(value: &str) -> Result<TemperatureUnit> {
    TemperatureUnit::try_from(value)
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, country, icon, output } => {
                show(city, country, icon, &output).await
            }
            Command::Parse { file, output } => parse(&file, &output).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    city: String,
    country: Option<String>,
    icon: bool,
    output: &OutputArgs,
) -> Result<()> {
    let config = Config::load()?;
    config.require_api_key()?;

    let urls = UrlBuilder::from_config(&config)?;
    let uri = urls.weather_by_city(&UrlRequestParameters::new(city.as_str(), country));

    let downloader = HttpDownloader::with_timeout(config.timeout());
    let api = ApiService::new();

    let report = api.current_weather(Some(&downloader), Some(&uri)).await;
    if report == WeatherReport::default() {
        bail!(
            "No weather data received for '{city}'.\n\
             Hint: check the city name and your API key (`weatherapp configure`)."
        );
    }

    let icon_path = if icon {
        let code = report.condition_at(0).icon().to_string();
        if code.is_empty() {
            None
        } else {
            let sink = TempDirSink::new(config.icon_dir());
            api.weather_icon(Some(&downloader), Some(&urls.weather_icon(&code)), &sink)
                .await
                .context("Failed to save weather icon")?
        }
    } else {
        None
    };

    output::print(&report, output, icon_path.as_deref())
}

async fn parse(file: &Path, output: &OutputArgs) -> Result<()> {
    let path = std::path::absolute(file)
        .with_context(|| format!("Failed to resolve path: {}", file.display()))?;
    let uri = Url::from_file_path(&path)
        .map_err(|()| anyhow!("Can not build file URL for {}", path.display()))?;

    let report = ApiService::new().current_weather(Some(&FileDownloader), Some(&uri)).await;

    output::print(&report, output, None)
}
