//! Integration tests for the OpenWeather provider using wiremock
//!
//! These tests run the real HTTP client against a mock server to verify the
//! status-code mapping, payload decoding and timeout behaviour.

use std::time::Duration;

use predictor_core::{
    FetchError, OpenWeatherProvider, Verdict, WeatherProvider, classify, run_lookup,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// The body from the reference scenario.
fn light_rain_response() -> serde_json::Value {
    serde_json::json!({
        "main": {"temp": 15, "humidity": 80},
        "weather": [{"main": "Rain", "description": "light rain"}],
        "wind": {"speed": 3.1}
    })
}

fn create_provider(mock_server: &MockServer, timeout: Duration) -> OpenWeatherProvider {
    #[allow(clippy::expect_used)]
    OpenWeatherProvider::new("test_key".to_string(), mock_server.uri(), timeout)
        .expect("Failed to create provider")
}

async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn success_maps_reading_and_classifies_rainy() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(light_rain_response()),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    let reading = provider.fetch("London").await.unwrap();

    assert_eq!(reading.temperature_c, Some(15.0));
    assert_eq!(reading.humidity_pct, Some(80.0));
    assert_eq!(reading.wind_speed_mps, Some(3.1));
    assert_eq!(reading.pressure_hpa, None);
    assert_eq!(reading.description.as_deref(), Some("Light rain"));
    assert_eq!(classify(&reading), Verdict::Rainy);
}

#[tokio::test]
async fn request_carries_city_key_and_metric_units() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("appid", "test_key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    assert!(provider.fetch("São Paulo").await.is_ok());
}

#[tokio::test]
async fn sparse_body_yields_absent_fields() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "Nowhere"})),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    let reading = provider.fetch("Nowhere").await.unwrap();

    assert_eq!(reading.location_name.as_deref(), Some("Nowhere"));
    assert!(reading.temperature_c.is_none());
    assert!(reading.condition.is_none());
    assert_eq!(classify(&reading), Verdict::Unknown);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn unauthorized_is_invalid_credential() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    let err = provider.fetch("London").await.unwrap_err();
    assert_eq!(err, FetchError::InvalidCredential);
    assert!(err.remediation().is_some());
}

#[tokio::test]
async fn not_found_is_city_not_found() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    assert_eq!(provider.fetch("Atlantis").await.unwrap_err(), FetchError::CityNotFound);
}

#[tokio::test]
async fn other_statuses_carry_the_code() {
    for status in [429u16, 500, 503, 204] {
        let mock_server = MockServer::start().await;
        setup_weather_mock(&mock_server, ResponseTemplate::new(status)).await;

        let provider = create_provider(&mock_server, Duration::from_secs(5));
        let err = provider.fetch("London").await.unwrap_err();
        assert_eq!(err, FetchError::ProviderError(status), "status {status}");
    }
}

#[tokio::test]
async fn invalid_json_is_malformed_response() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    let err = provider.fetch("London").await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(light_rain_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_millis(200));
    let err = provider.fetch("London").await.unwrap_err();

    match err {
        FetchError::NetworkError(msg) => assert!(!msg.contains("test_key"), "{msg}"),
        other => panic!("expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    // Nothing listens on port 1.
    #[allow(clippy::expect_used)]
    let provider = OpenWeatherProvider::new(
        "test_key".into(),
        "http://127.0.0.1:1".into(),
        Duration::from_secs(2),
    )
    .expect("Failed to create provider");

    assert!(matches!(
        provider.fetch("London").await,
        Err(FetchError::NetworkError(_))
    ));
}

/// Serves one response whose body is cut off before its declared length.
fn serve_truncated(status_line: &'static str) -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: 1000\r\n\r\n{{\"cod\""
        );
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn status_is_mapped_even_if_body_is_cut_off() {
    let cases = [
        ("HTTP/1.1 401 Unauthorized", FetchError::InvalidCredential),
        ("HTTP/1.1 404 Not Found", FetchError::CityNotFound),
        ("HTTP/1.1 500 Internal Server Error", FetchError::ProviderError(500)),
    ];

    for (status_line, expected) in cases {
        #[allow(clippy::expect_used)]
        let provider = OpenWeatherProvider::new(
            "test_key".into(),
            serve_truncated(status_line),
            Duration::from_secs(5),
        )
        .expect("Failed to create provider");

        let err = provider.fetch("London").await.unwrap_err();
        assert_eq!(err, expected, "{status_line}");
    }
}

// ============================================================================
// Whole lookup over HTTP
// ============================================================================

#[tokio::test]
async fn lookup_renders_report_from_mocked_provider() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(light_rain_response()),
    )
    .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    let report = run_lookup(&provider, " london ", chrono::Utc::now()).await.unwrap();

    assert_eq!(report.heading(), "Weather in London");
    assert_eq!(report.verdict, Verdict::Rainy);
    assert_eq!(report.metrics[2].value, "N/A");
    assert!(report.chart_svg.contains("Weather Trend for London"));
}

#[tokio::test]
async fn blank_lookup_sends_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(light_rain_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = create_provider(&mock_server, Duration::from_secs(5));
    assert!(run_lookup(&provider, "   ", chrono::Utc::now()).await.is_err());
}
