use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Number of points in every synthetic trend.
pub const TREND_LEN: usize = 6;

/// A validated city lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Trim the raw input; whitespace-only input is a validation error.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(LookupError::Validation);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// City name as shown in headings ("new york" -> "New york").
    pub fn display_name(&self) -> String {
        capitalize(&self.city)
    }
}

/// Current conditions as reported by the provider.
///
/// Every field is optional: the provider may omit any of them and the
/// presentation layer shows a placeholder instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub wind_speed_mps: Option<f64>,
    /// Short condition group, e.g. "Rain" or "Clear".
    pub condition: Option<String>,
    /// Free-text description, already capitalized.
    pub description: Option<String>,
    /// City name as echoed by the provider.
    pub location_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

/// Synthetic six-point series derived from a single reading.
///
/// This is a placeholder visualization, not a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    points: [TrendPoint; TREND_LEN],
}

impl TrendSeries {
    pub(crate) fn new(points: [TrendPoint; TREND_LEN]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter()
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
