//! One user-triggered lookup, end to end.
//!
//! Validating -> Fetching -> Rendering. Each stage can end the interaction
//! with a [`LookupError`]; nothing is kept between calls.

use chrono::{DateTime, Utc};
use tracing::{debug, info_span, warn, Instrument};

use crate::{LookupError, WeatherProvider, WeatherQuery, WeatherReport};

/// Validate `raw_city`, fetch once, and assemble the report.
///
/// Blank input returns [`LookupError::Validation`] without touching the provider.
pub async fn run_lookup(
    provider: &dyn WeatherProvider,
    raw_city: &str,
    now: DateTime<Utc>,
) -> Result<WeatherReport, LookupError> {
    let query = WeatherQuery::parse(raw_city).inspect_err(|_| {
        debug!("rejected blank city input");
    })?;

    let span = info_span!("lookup", city = query.city());
    async {
        let reading = provider.fetch(query.city()).await.map_err(|err| {
            warn!(error = %err, "lookup failed");
            LookupError::from(err)
        })?;

        WeatherReport::assemble(&query, &reading, now)
    }
    .instrument(span)
    .await
}
