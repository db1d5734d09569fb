//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - API key resolution from a `.env` file
//! - The forecast provider abstraction and its OpenWeather implementation
//! - Grouping of forecast samples into day buckets and the printed summary
//!
//! It is used by `forecast-cli`, but the pieces are usable on their own.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{ConfigError, ForecastError};
pub use forecast::{group_by_day, render_summary, run_forecast};
pub use model::{Coordinates, DayBucket, ForecastEntry, ForecastRequest, ForecastResponse};
pub use provider::{ForecastProvider, provider_from_config};
