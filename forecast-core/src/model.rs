/// Latitude/longitude pair sent with the forecast request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Jakarta, the location the summary has always been built for.
    pub const DEFAULT: Coordinates = Coordinates { lat: -6.2182, lon: 106.858398 };
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForecastRequest {
    pub coordinates: Coordinates,
}

/// One timestamped temperature sample, as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Local wall-clock time in `YYYY-MM-DD HH:MM:SS` form.
    pub timestamp: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastResponse {
    pub city_name: String,
    pub entries: Vec<ForecastEntry>,
}

/// All samples sharing one day-of-month.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub day: u32,
    pub label: String,
    pub temperatures: Vec<f64>,
}

impl DayBucket {
    /// The sample shown in the summary. Buckets are only created together with their first sample.
    pub fn first_temperature(&self) -> Option<f64> {
        self.temperatures.first().copied()
    }
}
