//! Reshaping of a raw forecast into one summary line per day.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime};
use tracing::{debug, warn};

use crate::{
    error::ForecastError,
    model::{DayBucket, ForecastEntry, ForecastRequest},
    provider::ForecastProvider,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const SUMMARY_HEADER: &str = "Weather Forecast:";

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ForecastError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        ForecastError::Timestamp { value: value.to_string(), source }
    })
}

/// e.g. `Friday, 1 March 2024`.
pub fn day_label(at: &NaiveDateTime) -> String {
    at.format("%A, %-d %B %Y").to_string()
}

/// Groups entries by day-of-month and returns the buckets sorted by day.
///
/// The key is the day-of-month alone, so entries from the same day number in
/// different months end up in the same bucket. The bucket keeps the label of
/// the first entry that created it.
pub fn group_by_day(entries: &[ForecastEntry]) -> Result<Vec<DayBucket>, ForecastError> {
    let mut buckets: HashMap<u32, (MonthGuard, DayBucket)> = HashMap::new();

    for entry in entries {
        let at = parse_timestamp(&entry.timestamp)?;
        let day = at.day();

        let (guard, bucket) = buckets.entry(day).or_insert_with(|| {
            let bucket = DayBucket { day, label: day_label(&at), temperatures: Vec::new() };
            (MonthGuard::new(at), bucket)
        });

        if guard.first_collision(&at) {
            warn!(
                day,
                first = %guard.first_seen.date(),
                other = %at.date(),
                "forecast spans a month boundary, merging samples into one day bucket"
            );
        }

        bucket.temperatures.push(entry.temperature);
    }

    let mut sorted: Vec<DayBucket> = buckets.into_values().map(|(_, bucket)| bucket).collect();
    sorted.sort_by_key(|bucket| bucket.day);

    debug!(buckets = sorted.len(), entries = entries.len(), "grouped forecast by day");

    Ok(sorted)
}

/// Remembers the month a bucket was created in, so a merge across months is reported once.
struct MonthGuard {
    first_seen: NaiveDateTime,
    warned: bool,
}

impl MonthGuard {
    fn new(first_seen: NaiveDateTime) -> Self {
        Self { first_seen, warned: false }
    }

    /// True only for the first sample from a different month than `first_seen`.
    fn first_collision(&mut self, at: &NaiveDateTime) -> bool {
        let other_month =
            (self.first_seen.year(), self.first_seen.month()) != (at.year(), at.month());
        if other_month && !self.warned {
            self.warned = true;
            return true;
        }
        false
    }
}

/// Header line followed by `<label>: <first temperature> °C` per bucket, newline terminated.
pub fn render_summary(buckets: &[DayBucket]) -> String {
    let mut out = String::new();
    out.push_str(SUMMARY_HEADER);
    out.push('\n');

    for bucket in buckets {
        if let Some(temp) = bucket.first_temperature() {
            out.push_str(&format!("{}: {:.2} °C\n", bucket.label, temp));
        }
    }

    out
}

/// Fetches one forecast from `provider` and renders the daily summary.
pub async fn run_forecast(
    provider: &dyn ForecastProvider,
    request: &ForecastRequest,
) -> Result<String, ForecastError> {
    let response = provider.get_forecast(request).await?;

    debug!(city = %response.city_name, entries = response.entries.len(), "forecast received");

    let buckets = group_by_day(&response.entries)?;
    Ok(render_summary(&buckets))
}
