// src/lib.rs
pub mod analysis;
pub mod config;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod patterns;
pub mod types;
pub mod zones;

pub use analysis::{analyze_range_window, analyze_series};
