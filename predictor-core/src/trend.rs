//! Mock short-term trend.
//!
//! The provider only reports current conditions, so the six-hour chart is
//! synthesized from that single reading by a fixed linear perturbation. The
//! output is labelled "Mock" wherever it is shown and must never be read as
//! a forecast.

use chrono::{DateTime, Duration, Utc};

use crate::model::{TREND_LEN, TrendPoint, TrendSeries, WeatherReading};

/// Used when the reading has no temperature.
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
/// Used when the reading has no humidity.
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

const TEMPERATURE_STEP_C: f64 = 0.5;
const HUMIDITY_STEP_PCT: f64 = 2.0;
/// Offset of the first point; points cover offsets -3..=2.
const FIRST_OFFSET: i64 = -3;

/// Build the six-point series centred on `now`.
///
/// Point `i` has offset `k = i - 3` and is stamped `now + k hours`, so the
/// unperturbed reading (`k = 0`) sits at `now`.
pub fn generate_trend(reading: &WeatherReading, now: DateTime<Utc>) -> TrendSeries {
    let base_temp = reading.temperature_c.unwrap_or(DEFAULT_TEMPERATURE_C);
    let base_humidity = reading.humidity_pct.unwrap_or(DEFAULT_HUMIDITY_PCT);

    let points: [TrendPoint; TREND_LEN] = std::array::from_fn(|i| {
        let offset = FIRST_OFFSET + i as i64;
        TrendPoint {
            time: now + Duration::hours(offset),
            temperature_c: base_temp + offset as f64 * TEMPERATURE_STEP_C,
            humidity_pct: base_humidity + offset as f64 * HUMIDITY_STEP_PCT,
        }
    });

    TrendSeries::new(points)
}
