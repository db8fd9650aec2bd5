use thiserror::Error;

/// Where to get a working credential, shown next to credential failures.
pub const CREDENTIAL_GUIDANCE: &str = "To fix this, make sure a valid API key is configured. \
     Sign up at https://openweathermap.org/ to get a free API key, then run \
     `predictor configure` or set OPENWEATHER_API_KEY.";

/// Failure of a single provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid API key. Please check your OpenWeatherMap API key.")]
    InvalidCredential,

    #[error("City not found. Please check the city name.")]
    CityNotFound,

    /// Any non-200 status other than 401 and 404.
    #[error("Error fetching data: {0}")]
    ProviderError(u16),

    /// Timeout, DNS failure, refused connection, truncated body.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// A 200 response whose body could not be decoded.
    #[error("Malformed response from weather provider: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            FetchError::InvalidCredential => Some(CREDENTIAL_GUIDANCE),
            _ => None,
        }
    }
}

/// Everything a lookup can end with besides a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a valid city name.")]
    Validation,

    #[error(transparent)]
    Fetch(FetchError),

    #[error("Error processing weather data: {0}. Please try again or check the API response.")]
    Rendering(String),
}

impl LookupError {
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            LookupError::Fetch(err) => err.remediation(),
            _ => None,
        }
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            // A payload we cannot read is a display problem, not a transport one.
            FetchError::MalformedResponse(msg) => LookupError::Rendering(msg),
            other => LookupError::Fetch(other),
        }
    }
}
