//! Helpers shared by the unit tests of this crate.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use predictor_core::{FetchError, WeatherProvider, WeatherQuery, WeatherReading, WeatherReport};

/// Provider that returns a canned result and records how it was called.
#[derive(Debug)]
pub struct StubProvider {
    result: Result<WeatherReading, FetchError>,
    calls: AtomicUsize,
    last_city: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn new(result: Result<WeatherReading, FetchError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_city: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_city(&self) -> Option<String> {
        self.last_city.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_city.lock().unwrap() = Some(city.to_string());
        self.result.clone()
    }
}

pub fn rainy_reading() -> WeatherReading {
    WeatherReading {
        temperature_c: Some(15.0),
        humidity_pct: Some(80.0),
        wind_speed_mps: Some(3.1),
        condition: Some("Rain".into()),
        description: Some("Light rain".into()),
        ..Default::default()
    }
}

/// Report for London at 12:00 UTC built from [`rainy_reading`].
pub fn rainy_report() -> WeatherReport {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    WeatherReport::assemble(&WeatherQuery::parse("london").unwrap(), &rainy_reading(), now)
        .unwrap()
}
