use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use predictor_core::{LookupError, run_lookup};
use serde::Deserialize;
use tracing::{error, info};

use crate::templates::Section;

use super::AppState;

// ---

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/weather", get(lookup))
}

/// Query string of the city form.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    #[serde(default)]
    city: String,
}

/// `GET /`: the form only, pre-filled with the default city.
async fn index(State(state): State<AppState>) -> Response {
    page(&state, StatusCode::OK, &state.default_city, Section::Empty)
}

/// `GET /weather?city=...`: one lookup, rendered into the page.
async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Response {
    info!("GET /weather - city={:?}", params.city);

    match run_lookup(state.provider.as_ref(), &params.city, chrono::Utc::now()).await {
        Ok(report) => page(&state, StatusCode::OK, &params.city, Section::Report(&report)),
        Err(err) => {
            let status = match err {
                LookupError::Validation => StatusCode::BAD_REQUEST,
                _ => StatusCode::OK,
            };
            page(&state, status, &params.city, Section::Failed(&err))
        }
    }
}

fn page(state: &AppState, status: StatusCode, city_value: &str, section: Section<'_>) -> Response {
    match state.templates.render_page(city_value, section) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Failed to render page".to_string()),
            )
                .into_response()
        }
    }
}
