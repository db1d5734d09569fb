use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    Config, Coordinates, ForecastRequest, config::ENV_FILE, provider_from_config, run_forecast,
};
use inquire::{Password, PasswordDisplayMode};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Five-day weather forecast summary")]
pub struct Cli {
    /// Defaults to `show` with the built-in coordinates.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the env file.
    Configure {
        #[arg(long, default_value = ENV_FILE)]
        env_file: PathBuf,
    },

    /// Fetch the forecast and print the first sample of every day.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Latitude in degrees, -90..=90.
    #[arg(long, default_value_t = Coordinates::DEFAULT.lat, allow_negative_numbers = true, value_parser = parse_latitude)]
    pub lat: f64,

    /// Longitude in degrees, -180..=180.
    #[arg(long, default_value_t = Coordinates::DEFAULT.lon, allow_negative_numbers = true, value_parser = parse_longitude)]
    pub lon: f64,

    /// Env file holding OPENWEATHER_KEY.
    #[arg(long, default_value = ENV_FILE)]
    pub env_file: PathBuf,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            lat: Coordinates::DEFAULT.lat,
            lon: Coordinates::DEFAULT.lon,
            env_file: PathBuf::from(ENV_FILE),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or_else(|| Command::Show(ShowArgs::default())) {
            Command::Configure { env_file } => configure(&env_file),
            Command::Show(args) => show(args).await,
        }
    }
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let config = Config::from_env_file(&args.env_file).context("Failed to load configuration")?;
    let provider = provider_from_config(&config);

    let request = ForecastRequest {
        coordinates: Coordinates { lat: args.lat, lon: args.lon },
    };

    let summary = run_forecast(provider.as_ref(), &request)
        .await
        .context("Failed to build the forecast summary")?;

    print!("{summary}");
    Ok(())
}

fn configure(env_file: &Path) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    Config::save_api_key(env_file, &api_key)?;

    info!(path = %env_file.display(), "API key saved");
    println!("API key saved to {}", env_file.display());
    Ok(())
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 90.0)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 180.0)
}

fn parse_degrees(s: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside -{limit}..={limit}"))
    }
}
