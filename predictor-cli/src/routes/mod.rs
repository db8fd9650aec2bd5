use std::sync::Arc;

use axum::Router;
use predictor_core::WeatherProvider;

use crate::templates::Templates;

mod health;
mod weather;

/// Shared by all handlers; holds no per-request state.
#[derive(Debug, Clone)]
pub struct AppState {
    provider: Arc<dyn WeatherProvider>,
    templates: Templates,
    default_city: String,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        templates: Templates,
        default_city: String,
    ) -> Self {
        Self {
            provider,
            templates,
            default_city,
        }
    }
}

// ---

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(weather::router())
        .merge(health::router())
        .with_state(state)
}
