// src/handlers.rs - HTTP surface around the analysis engine

use crate::analysis::{analyze_range_window, analyze_series};
use crate::data::{latest_slice, random_slice};
use crate::errors::ServiceError;
use crate::types::CandleData;
use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

pub const RANDOM_PAST: usize = 100;
pub const RANDOM_FUTURE: usize = 20;
/// Prices beyond this are rejected by `/levels`; the grid tops out at 6561.
pub const MAX_PRICE_MAGNITUDE: f64 = 1e12;

pub struct AppState {
    /// `None` when the dataset failed to load at startup.
    pub candles: Option<Arc<Vec<CandleData>>>,
    pub window: usize,
}

impl AppState {
    fn candles(&self) -> Result<&[CandleData], ServiceError> {
        self.candles
            .as_deref()
            .map(|c| c.as_slice())
            .ok_or(ServiceError::DataNotLoaded)
    }
}

#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    pub chart_data: Vec<CandleData>,
}

#[derive(Deserialize, Debug)]
pub struct LevelsRequest {
    pub visible_high: f64,
    pub visible_low: f64,
    pub current_price: f64,
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub async fn spin(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let candles = state.candles()?;
    Ok(HttpResponse::Ok().json(latest_slice(candles, state.window)))
}

pub async fn spin_random(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let candles = state.candles()?;
    let spin = random_slice(candles, RANDOM_PAST, RANDOM_FUTURE, &mut rand::thread_rng())?;
    Ok(HttpResponse::Ok().json(spin))
}

pub async fn analyze(request: web::Json<AnalyzeRequest>) -> impl Responder {
    let candles = request.into_inner().chart_data;
    info!("📈 Analyze request with {} candles", candles.len());
    HttpResponse::Ok().json(analyze_series(&candles))
}

pub async fn levels(request: web::Json<LevelsRequest>) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();
    if ![request.visible_high, request.visible_low, request.current_price]
        .iter()
        .all(|v| v.is_finite() && v.abs() <= MAX_PRICE_MAGNITUDE)
    {
        return Err(ServiceError::BadRequest(format!(
            "visible_high, visible_low and current_price must be finite and within +/-{:e}",
            MAX_PRICE_MAGNITUDE
        )));
    }

    let result = analyze_range_window(
        request.visible_high,
        request.visible_low,
        request.current_price,
    );
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/spin", web::get().to(spin))
        .route("/spin/random", web::get().to(spin_random))
        .route("/analyze", web::post().to(analyze))
        .route("/levels", web::post().to(levels));
}
