use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    LookupError, Verdict, WeatherQuery, WeatherReading,
    chart::render_trend_svg,
    model::TrendSeries,
    trend::generate_trend,
    verdict::classify,
};

/// Shown for any value the provider did not send.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    fn new(label: &'static str, value: Option<f64>, unit: &str) -> Self {
        let value = match value {
            Some(v) => format!("{v}{unit}"),
            None => PLACEHOLDER.to_string(),
        };
        Self { label, value }
    }
}

/// Everything a surface needs to show one successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Queried city, capitalized.
    pub city: String,
    /// Temperature, humidity, pressure, wind speed.
    pub metrics: [Metric; 4],
    pub description: String,
    pub verdict: Verdict,
    pub trend: TrendSeries,
    pub chart_title: String,
    /// Inline SVG of the trend chart.
    pub chart_svg: String,
}

impl WeatherReport {
    pub fn assemble(
        query: &WeatherQuery,
        reading: &WeatherReading,
        now: DateTime<Utc>,
    ) -> Result<Self, LookupError> {
        let city = query.display_name();
        let trend = generate_trend(reading, now);
        let chart_title = format!("Weather Trend for {city}");
        let chart_svg = render_trend_svg(&trend, &chart_title)
            .map_err(|e| LookupError::Rendering(e.to_string()))?;

        Ok(Self {
            metrics: [
                Metric::new("Temperature", reading.temperature_c, " °C"),
                Metric::new("Humidity", reading.humidity_pct, "%"),
                Metric::new("Pressure", reading.pressure_hpa, " hPa"),
                Metric::new("Wind Speed", reading.wind_speed_mps, " m/s"),
            ],
            description: reading
                .description
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            verdict: classify(reading),
            city,
            trend,
            chart_title,
            chart_svg,
        })
    }

    pub fn heading(&self) -> String {
        format!("Weather in {}", self.city)
    }
}
