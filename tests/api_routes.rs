//! Router tests for the widget HTTP surface

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use nimbus::models::{CurrentSnapshot, DailySeries};
use nimbus::{NimbusError, Place, RawForecast, WeatherProvider, WeatherWidget, web};
use serde_json::Value;
use tower::ServiceExt;

/// Knows exactly one city
struct OneCityProvider;

#[async_trait]
impl WeatherProvider for OneCityProvider {
    async fn geocode(&self, query: &str) -> nimbus::Result<Vec<Place>> {
        if query.eq_ignore_ascii_case("lisbon") {
            Ok(vec![Place {
                name: "Lisbon".to_string(),
                admin1: Some("Lisbon".to_string()),
                country: Some("Portugal".to_string()),
                latitude: 38.7,
                longitude: -9.1,
                timezone: Some("Europe/Lisbon".to_string()),
            }])
        } else if query.eq_ignore_ascii_case("offline") {
            Err(NimbusError::lookup_unavailable(query, "connection refused"))
        } else {
            Ok(Vec::new())
        }
    }

    async fn forecast(&self, _place: &Place) -> nimbus::Result<RawForecast> {
        Ok(RawForecast {
            timezone: "Europe/Lisbon".to_string(),
            current: Some(CurrentSnapshot {
                temperature: 17.25,
                weather_code: 0,
            }),
            daily: DailySeries {
                time: vec![
                    "2024-06-10".to_string(),
                    "2024-06-11".to_string(),
                    "2024-06-12".to_string(),
                ],
                weather_code: vec![Some(80), Some(63), Some(2)],
                temperature_max: vec![Some(22.0), Some(19.5), Some(24.1)],
            },
        })
    }
}

fn app() -> Router {
    let widget = WeatherWidget::new(Arc::new(OneCityProvider), "Lisbon");
    web::app(widget, "does-not-exist")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_initial_snapshot_is_loading() {
    let app = app();
    let request = Request::builder()
        .uri("/api/weather")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Loading forecast…");
    assert_eq!(body["searchValue"], "Lisbon");
    assert_eq!(body["isLoading"], true);
    assert_eq!(body["temperature"], Value::Null);
    assert_eq!(body["condition"], "clear");
}

#[tokio::test]
async fn test_search_then_select() {
    let app = app();

    let (status, body) = send(&app, post_json("/api/search", serde_json::json!({ "query": "Lisbon" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Lisbon, Portugal");
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["entries"][0]["dayLabel"], "Mon");
    assert_eq!(body["entries"][0]["condition"], "clear");
    assert_eq!(body["temperature"], 17.3);
    assert_eq!(body["conditionLabel"], "Sunny");
    assert_eq!(body["dateLabel"], "Monday, June 10");
    assert_eq!(body["isLoading"], false);

    let (status, body) = send(&app, post_json("/api/select", serde_json::json!({ "index": 1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activeIndex"], 1);
    assert_eq!(body["condition"], "rainy");
    assert_eq!(body["temperature"], 19.5);
    assert_eq!(body["dateTime"], "2024-06-11");
}

#[tokio::test]
async fn test_select_out_of_range_is_bad_request() {
    let app = app();
    send(&app, post_json("/api/search", serde_json::json!({ "query": "Lisbon" }))).await;

    let (status, body) = send(&app, post_json("/api/select", serde_json::json!({ "index": 7 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("position 7"));
}

#[tokio::test]
async fn test_blank_search_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, post_json("/api/search", serde_json::json!({ "query": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input: Location cannot be empty");
}

#[tokio::test]
async fn test_failed_lookup_reports_in_snapshot() {
    let app = app();

    let (status, body) = send(&app, post_json("/api/search", serde_json::json!({ "query": "Offline" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Unable to look up that location right now.");
    assert_eq!(body["location"], "Offline");
    assert_eq!(body["isLoading"], false);

    let (_, body) = send(&app, post_json("/api/search", serde_json::json!({ "query": "Gotham" }))).await;
    assert_eq!(
        body["error"],
        "No matching location found. Try a different search term."
    );
}
