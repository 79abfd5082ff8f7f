// src/patterns/mod.rs
use crate::types::{CandleData, PriceLevel, Signal};

// Trait for pattern recognizers
pub trait PatternRecognizer {
    fn name(&self) -> &'static str;
    fn detect(&self, candles: &[CandleData], levels: &[PriceLevel]) -> Vec<Signal>;
}

// Declare submodules
mod hippo;
mod stop_run;

// Export recognizers
pub use hippo::{HippoRecognizer, HippoScan};
pub use stop_run::StopRunRecognizer;
