// src/patterns/stop_run.rs
// PO3 stop runs: the latest candle wicks through a level by ~3, 9 or 27 and closes back.

use crate::patterns::PatternRecognizer;
use crate::types::{CandleData, PriceLevel, Sentiment, Signal, SignalType};
use log::debug;

pub struct StopRunRecognizer {
    pub magnitudes: Vec<f64>,
    pub tolerance: f64,
}

impl Default for StopRunRecognizer {
    fn default() -> Self {
        Self {
            magnitudes: vec![3.0, 9.0, 27.0],
            tolerance: 1.0,
        }
    }
}

impl StopRunRecognizer {
    fn matching_magnitudes(&self, wick: f64) -> impl Iterator<Item = f64> + '_ {
        self.magnitudes
            .iter()
            .copied()
            .filter(move |magnitude| (wick - magnitude).abs() <= self.tolerance)
    }

    fn signal(
        side: &str,
        level: &PriceLevel,
        wick: f64,
        magnitude: f64,
        direction: Sentiment,
    ) -> Signal {
        Signal {
            signal_type: SignalType::StopRun,
            detected: true,
            details: format!(
                "PO3 stop run: {} rejection of {} at {:.2} (wick {:.2} ~{})",
                side, level.label, level.price, wick, magnitude
            ),
            direction: Some(direction),
        }
    }
}

impl PatternRecognizer for StopRunRecognizer {
    fn name(&self) -> &'static str {
        "po3_stop_run"
    }

    fn detect(&self, candles: &[CandleData], levels: &[PriceLevel]) -> Vec<Signal> {
        let Some(candle) = candles.last() else {
            return Vec::new();
        };

        let mut signals = Vec::new();
        for level in levels {
            if candle.high > level.price && candle.close < level.price {
                let wick = candle.high - level.price;
                for magnitude in self.matching_magnitudes(wick) {
                    signals.push(Self::signal("high-side", level, wick, magnitude, Sentiment::Bearish));
                }
            }
            if candle.low < level.price && candle.close > level.price {
                let wick = level.price - candle.low;
                for magnitude in self.matching_magnitudes(wick) {
                    signals.push(Self::signal("low-side", level, wick, magnitude, Sentiment::Bullish));
                }
            }
        }

        debug!(
            "[Patterns] stop-run scan over {} level(s) found {}",
            levels.len(),
            signals.len()
        );
        signals
    }
}
