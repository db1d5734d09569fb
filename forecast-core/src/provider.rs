use crate::{
    Config, ForecastRequest, ForecastResponse, error::ForecastError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ForecastError>;
}

/// Construct the OpenWeather provider from a loaded config.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(OpenWeatherProvider::new(config.api_key().to_owned()))
}
