// tests/api_tests.rs
//
// Exercises the HTTP routes against an in-process actix service.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use goldbach_detector::handlers::{configure_routes, AppState};
use goldbach_detector::types::{AnalysisResult, CandleData, RangeWindowResult, Sentiment};
use serde_json::{json, Value};
use std::sync::Arc;

fn dataset(n: usize) -> Vec<CandleData> {
    (0..n)
        .map(|i| {
            let base = 4700.0 + i as f64;
            CandleData::new(i as i64 * 14_400, base, base + 5.0, base - 5.0, base + 1.0)
        })
        .collect()
}

fn state(candles: Option<Vec<CandleData>>, window: usize) -> web::Data<AppState> {
    web::Data::new(AppState {
        candles: candles.map(Arc::new),
        window,
    })
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_spin_returns_latest_window() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(dataset(50)), 30))
            .configure(configure_routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/spin").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let past = body["past_data"].as_array().unwrap();
    assert_eq!(past.len(), 30);
    assert_eq!(past[0]["time"], 20 * 14_400);
    assert_eq!(body["future_data"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_spin_random_splits_past_and_future() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(dataset(200)), 30))
            .configure(configure_routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/spin/random").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["past_data"].as_array().unwrap().len(), 100);
    assert_eq!(body["future_data"].as_array().unwrap().len(), 20);
}

#[actix_web::test]
async fn test_spin_without_data_is_server_error() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::get().uri("/spin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_spin_random_with_short_dataset() {
    let app = test::init_service(
        App::new()
            .app_data(state(Some(dataset(60)), 30))
            .configure(configure_routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/spin/random").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_analyze_route() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::post()
        .uri("/analyze")
        .set_json(json!({ "chart_data": dataset(40) }))
        .to_request();
    let result: AnalysisResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.levels.len(), 13);
    assert!(result.dealing_range.low <= result.current_status.price);
    assert!(result.current_status.price < result.dealing_range.high);
    assert_ne!(result.sentiment, Sentiment::Neutral);
}

#[actix_web::test]
async fn test_analyze_empty_chart_data() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::post()
        .uri("/analyze")
        .set_json(json!({ "chart_data": [] }))
        .to_request();
    let result: AnalysisResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert!(result.levels.is_empty());
}

#[actix_web::test]
async fn test_levels_route() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::post()
        .uri("/levels")
        .set_json(json!({ "visible_high": 1500.0, "visible_low": 1000.0, "current_price": 1200.0 }))
        .to_request();
    let result: RangeWindowResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.dealing_range.grid_size, 243);
    assert_eq!(result.dealing_range.all_ranges.len(), 3);
}

#[actix_web::test]
async fn test_levels_route_rejects_missing_fields() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::post()
        .uri("/levels")
        .set_json(json!({ "visible_high": 1500.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_levels_route_rejects_out_of_range_prices() {
    let app = test::init_service(App::new().app_data(state(None, 10)).configure(configure_routes)).await;
    let req = test::TestRequest::post()
        .uri("/levels")
        .set_json(json!({ "visible_high": 1e24, "visible_low": 0.0, "current_price": 100.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
