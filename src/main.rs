// src/main.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use goldbach_detector::config::AppConfig;
use goldbach_detector::data::load_csv;
use goldbach_detector::handlers::{configure_routes, AppState};
use std::path::Path;
use std::sync::Arc;

fn init_logging(log_config: &str) {
    if Path::new(log_config).exists() {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Failed to initialize log4rs from {}: {}", log_config, e),
        }
    }
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or("goldbach_detector=debug,info"),
    );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    init_logging(&config.log_config);

    let candles = match load_csv(&config.data_path) {
        Ok(candles) => Some(Arc::new(candles)),
        Err(e) => {
            log::error!("Error loading data from {}: {}", config.data_path, e);
            None
        }
    };
    let state = web::Data::new(AppState {
        candles,
        window: config.window,
    });

    log::info!("Starting server on http://{}:{}", config.host, config.port);
    log::info!("  GET  /health");
    log::info!("  GET  /spin");
    log::info!("  GET  /spin/random");
    log::info!("  POST /analyze");
    log::info!("  POST /levels");

    let allowed_origin = config.allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);
        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
