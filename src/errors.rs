// src/errors.rs
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data parsing error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not enough data: need {needed} candles, have {available}")]
    NotEnoughData { needed: usize, available: usize },

    #[error("Data not loaded")]
    DataNotLoaded,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad request",
                "message": msg
            })),
            ServiceError::NotEnoughData { .. } => {
                log::warn!("{}", self);
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": "Not enough data",
                    "message": self.to_string()
                }))
            }
            ServiceError::DataNotLoaded => {
                log::error!("Request needs the candle dataset but it is not loaded");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Data not loaded"
                }))
            }
            ServiceError::Io(e) => {
                log::error!("I/O error: {}", e);
                HttpResponse::InternalServerError().body("Error reading data")
            }
            ServiceError::Csv(e) => {
                log::error!("CSV parsing error: {}", e);
                HttpResponse::InternalServerError().body("Error processing data file")
            }
            ServiceError::Parse(msg) => {
                log::error!("Data parsing error: {}", msg);
                HttpResponse::InternalServerError().body("Error processing data")
            }
            ServiceError::Config(msg) => {
                log::error!("Configuration error: {}", msg);
                HttpResponse::InternalServerError().body("Server configuration error")
            }
        }
    }
}
