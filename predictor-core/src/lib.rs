//! Core library for the real-time weather predictor.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeatherMap client behind the [`WeatherProvider`] trait
//! - The verdict classifier and the mock trend generator
//! - Report assembly and SVG chart rendering shared by every front end
//!
//! It is used by `predictor-cli`, but can also be reused by other binaries or services.

pub mod chart;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod report;
pub mod trend;
pub mod verdict;

pub use config::Config;
pub use error::{FetchError, LookupError};
pub use lookup::run_lookup;
pub use model::{TrendPoint, TrendSeries, WeatherQuery, WeatherReading};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use report::{Metric, WeatherReport};
pub use trend::generate_trend;
pub use verdict::{Verdict, classify};
