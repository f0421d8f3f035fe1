//! Integration tests for the Open-Meteo client using wiremock
//!
//! These tests verify the client's request shape and its handling of
//! various response scenarios against a mock HTTP server.

use domain::value_objects::TemperatureUnit;
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn sample_geocoding_response() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 1_668_341,
                "name": "Taipei",
                "latitude": 25.04776,
                "longitude": 121.53185,
                "elevation": 9.0,
                "country_code": "TW",
                "country": "Taiwan",
                "admin1": "Taipei"
            },
            {
                "id": 1_665_148,
                "name": "Taipei Shih",
                "latitude": 25.05,
                "longitude": 121.53,
                "country": "Taiwan"
            }
        ],
        "generationtime_ms": 0.8
    })
}

fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 25.0,
        "longitude": 121.5,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 28800,
        "timezone": "Asia/Taipei",
        "timezone_abbreviation": "GMT+8",
        "elevation": 10.0,
        "daily_units": {
            "time": "iso8601",
            "weather_code": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C"
        },
        "daily": {
            "time": ["2026-10-18", "2026-10-19"],
            "weather_code": [3, 61],
            "temperature_2m_max": [28.4, 26.5],
            "temperature_2m_min": [22.1, 21.4]
        }
    })
}

async fn setup_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherConfig {
        forecast_base_url: mock_server.uri(),
        geocoding_base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    OpenMeteoClient::new(config).expect("Failed to create client")
}

mod search_location {
    use super::*;

    #[tokio::test]
    async fn returns_results_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", "Taipei"))
            .and(query_param("count", "5"))
            .and(query_param("language", "zh"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let results = client
            .search_location("Taipei", 5, "zh")
            .await
            .expect("search should succeed");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1_668_341);
        assert_eq!(results[0].name, "Taipei");
        assert_eq!(results[0].admin1.as_deref(), Some("Taipei"));
        assert_eq!(results[1].name, "Taipei Shih");
        assert!(results[1].admin1.is_none());
    }

    #[tokio::test]
    async fn trims_query_before_sending() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", "New York"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let results = client
            .search_location("  New York  ", 10, "en")
            .await
            .expect("search should succeed");

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn short_query_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        for query in ["", " ", "T", "  T  "] {
            let results = client
                .search_location(query, 10, "en")
                .await
                .expect("short query is not an error");
            assert!(results.is_empty());
        }
    }

    #[tokio::test]
    async fn missing_results_field_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"generationtime_ms": 0.3})),
            )
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let results = client
            .search_location("Zzyzx Nowhere", 10, "en")
            .await
            .expect("search should succeed");

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn client_error_status_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client.search_location("Taipei", 10, "en").await;

        assert!(matches!(result, Err(WeatherError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn server_error_status_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client.search_location("Taipei", 10, "en").await;

        assert!(matches!(result, Err(WeatherError::ServiceUnavailable(_))));
    }
}

mod fetch_weather {
    use super::*;

    #[tokio::test]
    async fn celsius_request_omits_unit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "25"))
            .and(query_param("longitude", "121.5"))
            .and(query_param(
                "daily",
                "weather_code,temperature_2m_max,temperature_2m_min",
            ))
            .and(query_param("timezone", "auto"))
            .and(query_param("forecast_days", "2"))
            .and(query_param_is_missing("temperature_unit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let daily = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await
            .expect("forecast should succeed");

        assert_eq!(daily.weather_code, vec![Some(3), Some(61)]);
        let tomorrow = daily.tomorrow().expect("tomorrow present");
        assert_eq!(tomorrow.weather_code, 61);
        assert!((tomorrow.temperature_max - 26.5).abs() < f64::EPSILON);
        assert!((tomorrow.temperature_min - 21.4).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn null_daily_values_are_accepted() {
        let mock_server = MockServer::start().await;

        let mut body = sample_forecast_response();
        body["daily"]["temperature_2m_min"] = serde_json::json!([22.1, null]);

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let daily = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await
            .expect("a null entry should not fail the fetch");

        assert_eq!(daily.temperature_2m_min, vec![Some(22.1), None]);
        assert!(daily.day(0).is_some());
        assert!(daily.tomorrow().is_none());
    }

    #[tokio::test]
    async fn fahrenheit_request_sets_unit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Fahrenheit)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_daily_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"latitude": 25.0, "longitude": 121.5})),
            )
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await;

        assert!(matches!(result, Err(WeatherError::ParseError(_))));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await;

        assert!(matches!(result, Err(WeatherError::ParseError(_))));
    }

    #[tokio::test]
    async fn server_error_is_service_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await;

        assert!(matches!(result, Err(WeatherError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn invalid_coordinates_make_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = setup_client(&mock_server).await;
        let result = client
            .fetch_weather(0.0, 200.0, TemperatureUnit::Celsius)
            .await;

        assert!(matches!(result, Err(WeatherError::InvalidCoordinates)));
    }

    #[tokio::test]
    async fn unreachable_server_is_request_failure() {
        let config = WeatherConfig {
            forecast_base_url: "http://127.0.0.1:1".to_string(),
            geocoding_base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
        };
        let client = OpenMeteoClient::new(config).expect("Failed to create client");

        let result = client
            .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
            .await;

        assert!(matches!(result, Err(WeatherError::RequestFailed(_))));
    }
}
