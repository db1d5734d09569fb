use std::path::PathBuf;

use thiserror::Error;

/// Failures while resolving the API key. All of them happen before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Env file not found: {}\n\
         Hint: run `forecast configure` or create it with an OPENWEATHER_KEY=<key> line.",
        .0.display()
    )]
    MissingEnvFile(PathBuf),

    #[error("Failed to parse env file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("No API key configured: {0} is missing or empty.")]
    MissingApiKey(&'static str),

    #[error("Failed to access env file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures on the single fetch-and-reshape path.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to send request to OpenWeather (5-day forecast): {0}")]
    Request(#[source] reqwest::Error),

    #[error("OpenWeather forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read OpenWeather forecast response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Failed to parse OpenWeather forecast JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid forecast timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
