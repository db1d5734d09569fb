use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ForecastError,
    model::{ForecastEntry, ForecastRequest, ForecastResponse},
};

use super::ForecastProvider;

pub const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, FORECAST_URL)
    }

    /// Same provider, pointed at a different forecast endpoint.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self::with_http_client(api_key, base_url, Client::new())
    }

    /// Full control over the endpoint and the underlying HTTP client.
    pub fn with_http_client(api_key: String, base_url: impl Into<String>, http: Client) -> Self {
        Self { api_key, base_url: base_url.into(), http }
    }

    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<ForecastResponse, ForecastError> {
        let lat = request.coordinates.lat.to_string();
        let lon = request.coordinates.lon.to_string();

        debug!(url = %self.base_url, %lat, %lon, "requesting OpenWeather forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(ForecastError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(ForecastError::Body)?;

        debug!(%status, bytes = body.len(), "OpenWeather forecast response");

        if !status.is_success() {
            return Err(ForecastError::Status { status, body: truncate_body(&body) });
        }

        parse_forecast(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

impl From<OwForecastResponse> for ForecastResponse {
    fn from(parsed: OwForecastResponse) -> Self {
        ForecastResponse {
            city_name: parsed.city.name,
            entries: parsed
                .list
                .into_iter()
                .map(|e| ForecastEntry { timestamp: e.dt_txt, temperature: e.main.temp })
                .collect(),
        }
    }
}

/// Parse the body of a `/data/2.5/forecast` response.
pub fn parse_forecast(body: &str) -> Result<ForecastResponse, ForecastError> {
    let parsed: OwForecastResponse = serde_json::from_str(body)?;
    Ok(parsed.into())
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn get_forecast(&self, request: &ForecastRequest) -> Result<ForecastResponse, ForecastError> {
        self.fetch_forecast(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
