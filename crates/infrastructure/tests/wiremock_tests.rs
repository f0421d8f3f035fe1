//! Integration tests for the weather adapter against a mock Open-Meteo
//!
//! Exercises the full path from application services through the adapter
//! and the HTTP client.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{WeatherCard, WeatherPort, WidgetView};
use application::services::{WeatherService, WidgetController, WidgetPhase};
use domain::value_objects::{Location, TemperatureUnit};
use infrastructure::WeatherAdapter;
use infrastructure::config::WeatherConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn forecast_body(code: i32, max: f64, min: f64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 25.0,
        "longitude": 121.5,
        "timezone": "Asia/Taipei",
        "daily": {
            "time": ["2026-10-18", "2026-10-19"],
            "weather_code": [0, code],
            "temperature_2m_max": [20.0, max],
            "temperature_2m_min": [10.0, min]
        }
    })
}

fn adapter_for(mock_server: &MockServer) -> WeatherAdapter {
    WeatherAdapter::with_config(WeatherConfig {
        forecast_base_url: mock_server.uri(),
        geocoding_base_url: mock_server.uri(),
        timeout_secs: 5,
    })
    .expect("Failed to create adapter")
}

#[derive(Debug, Default)]
struct RecordingWidgetView {
    loading: usize,
    errors: Vec<String>,
    displayed: bool,
    cards: Vec<WeatherCard>,
}

impl WidgetView for RecordingWidgetView {
    fn show_loading(&mut self) {
        self.loading += 1;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_display(&mut self) {
        self.displayed = true;
    }

    fn render_card(&mut self, card: &WeatherCard) {
        self.cards.push(card.clone());
    }
}

#[tokio::test]
async fn search_goes_through_adapter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Taipei"))
        .and(query_param("count", "5"))
        .and(query_param("language", "zh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"id": 1, "name": "臺北市", "latitude": 25.05, "longitude": 121.53, "country": "臺灣"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = adapter_for(&mock_server);
    let results = adapter.search_location("Taipei", 5, "zh").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "臺北市");
}

#[tokio::test]
async fn search_failure_is_search_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let adapter = adapter_for(&mock_server);
    let err = adapter.search_location("Taipei", 5, "zh").await.unwrap_err();

    assert!(matches!(err, ApplicationError::Search(_)));
}

#[tokio::test]
async fn forecast_failure_is_forecast_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let adapter = adapter_for(&mock_server);
    let err = adapter
        .fetch_weather(25.0, 121.5, TemperatureUnit::Celsius)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forecast(_)));
}

#[tokio::test]
async fn batch_fetch_keeps_input_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(61, 26.5, 21.4)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "35.6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(0, 18.0, 9.0)))
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(Arc::new(adapter_for(&mock_server)));
    let locations = vec![
        Location::new("Taipei", 25.0, 121.5).unwrap(),
        Location::new("Tokyo", 35.6, 139.7).unwrap(),
    ];

    let results = service
        .fetch_weather_for_locations(&locations, TemperatureUnit::Celsius)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].location.name, "Taipei");
    assert_eq!(results[0].weather.weather_code[1], Some(61));
    assert_eq!(results[1].location.name, "Tokyo");
    assert_eq!(results[1].weather.weather_code[1], Some(0));
}

#[tokio::test]
async fn one_failing_location_fails_the_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(61, 26.5, 21.4)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "35.6"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(Arc::new(adapter_for(&mock_server)));
    let locations = vec![
        Location::new("Taipei", 25.0, 121.5).unwrap(),
        Location::new("Tokyo", 35.6, 139.7).unwrap(),
    ];

    let err = service
        .fetch_weather_for_locations(&locations, TemperatureUnit::Celsius)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::BatchFetch { ref location, .. } if location == "Tokyo"));
}

#[tokio::test]
async fn widget_renders_tomorrow_from_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(61, 26.5, 21.4)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(Arc::new(adapter_for(&mock_server)));
    let mut widget = WidgetController::new(service, RecordingWidgetView::default());

    let url = "http://localhost:8080/widget?locations=%5B%7B%22name%22%3A%22%E8%87%BA%E5%8C%97%22%2C%22lat%22%3A25%2C%22lon%22%3A121.5%7D%5D&interval=5000&unit=celsius";
    assert!(widget.init(url).await);

    assert_eq!(widget.state().phase, WidgetPhase::Display);
    let view = widget.view();
    assert_eq!(view.loading, 1);
    assert!(view.displayed);
    assert!(view.errors.is_empty());
    let card = &view.cards[0];
    assert_eq!(card.place_name, "臺北");
    assert_eq!(card.description, "下雨");
    assert_eq!(card.temperature, "27°C");
    assert_eq!(card.temperature_max, "27°C");
    assert_eq!(card.temperature_min, "21°C");
    assert_eq!(card.icon_path, "icons/weather/rain.svg");
}

#[tokio::test]
async fn widget_shows_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(Arc::new(adapter_for(&mock_server)));
    let mut widget = WidgetController::new(service, RecordingWidgetView::default());

    let url = "http://localhost:8080/widget?locations=%5B%7B%22name%22%3A%22A%22%2C%22lat%22%3A1%2C%22lon%22%3A2%7D%5D";
    assert!(!widget.init(url).await);

    assert!(matches!(widget.state().phase, WidgetPhase::Error(_)));
    assert_eq!(widget.view().errors, vec!["無法取得天氣資料".to_string()]);
}
