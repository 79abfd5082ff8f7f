// src/config.rs
use crate::errors::ServiceError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_path: String,
    /// Candles served by `/spin`.
    pub window: usize,
    pub allowed_origin: String,
    pub log_config: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8003,
            data_path: "data/es-4h.csv".to_string(),
            window: 1000,
            allowed_origin: "http://localhost:5173".to_string(),
            log_config: "log4rs.yaml".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ServiceError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ServiceError::Config(format!("{} has invalid value '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Reads `GOLDBACH_*` variables (call `dotenv()` first to pick up `.env`).
    pub fn from_env() -> Result<Self, ServiceError> {
        let defaults = AppConfig::default();
        Ok(Self {
            host: env::var("GOLDBACH_HOST").unwrap_or(defaults.host),
            port: parse_var("GOLDBACH_PORT", defaults.port)?,
            data_path: env::var("GOLDBACH_DATA_PATH").unwrap_or(defaults.data_path),
            window: parse_var("GOLDBACH_WINDOW", defaults.window)?,
            allowed_origin: env::var("GOLDBACH_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            log_config: env::var("LOG4RS_CONFIG").unwrap_or(defaults.log_config),
        })
    }
}
