use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{FetchError, WeatherReading, model::capitalize};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap "current weather by city name" endpoint.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    /// `timeout` bounds the whole call, connect through body.
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn current_weather_url(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = self.current_weather_url();
        debug!(%url, city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(network_error)?;

        match res.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => {
                warn!(city, "OpenWeather rejected the API key");
                return Err(FetchError::InvalidCredential);
            }
            StatusCode::NOT_FOUND => {
                info!(city, "OpenWeather does not know this city");
                return Err(FetchError::CityNotFound);
            }
            other => {
                // Body is only for the log; a failed read must not mask the status.
                let body = res.text().await.unwrap_or_default();
                warn!(city, status = %other, body = %truncate_body(&body), "OpenWeather request failed");
                return Err(FetchError::ProviderError(other.as_u16()));
            }
        }

        let body = res.text().await.map_err(network_error)?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(city, error = %e, body = %truncate_body(&body), "undecodable OpenWeather body");
            FetchError::MalformedResponse(e.to_string())
        })?;

        info!(city, location = ?parsed.name, "fetched current weather");
        Ok(parsed.into_reading())
    }
}

// The provider may drop any of these; absence is kept, not defaulted.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    main: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    name: Option<String>,
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
    wind: Option<OwWind>,
}

impl OwCurrentResponse {
    fn into_reading(self) -> WeatherReading {
        let main = self.main.unwrap_or_default();
        let first = self
            .weather
            .and_then(|list| list.into_iter().next())
            .unwrap_or_default();

        WeatherReading {
            temperature_c: main.temp,
            humidity_pct: main.humidity,
            pressure_hpa: main.pressure,
            wind_speed_mps: self.wind.and_then(|w| w.speed),
            condition: first.main,
            description: first.description.map(|d| capitalize(&d)),
            location_name: self.name,
        }
    }
}

/// Transport failure; the URL is stripped because it carries the API key.
fn network_error(err: reqwest::Error) -> FetchError {
    let err = err.without_url();
    warn!(error = %err, "OpenWeather transport failure");
    FetchError::NetworkError(err.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
