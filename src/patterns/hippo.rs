// src/patterns/hippo.rs
// Island candles: a candle gapped away from both neighbours.

use crate::patterns::PatternRecognizer;
use crate::types::{CandleData, PriceLevel, Sentiment, Signal, SignalType};
use log::debug;

/// Outcome of one HIPPO scan over the recent window.
#[derive(Debug, Clone, PartialEq)]
pub enum HippoScan {
    /// Fewer candles than the lookback; nothing is reported.
    InsufficientHistory,
    Found(Vec<Signal>),
    NoneFound,
}

impl HippoScan {
    /// Flattens into the wire list. `NoneFound` becomes a single undetected entry.
    pub fn into_signals(self) -> Vec<Signal> {
        match self {
            HippoScan::InsufficientHistory => Vec::new(),
            HippoScan::Found(signals) => signals,
            HippoScan::NoneFound => vec![Signal {
                signal_type: SignalType::Hippo,
                detected: false,
                details: "No HIPPO pattern in the last candles".to_string(),
                direction: None,
            }],
        }
    }
}

pub struct HippoRecognizer {
    pub lookback: usize,
    /// Candles skipped at each end of the window.
    pub edge_margin: usize,
}

impl Default for HippoRecognizer {
    fn default() -> Self {
        Self {
            lookback: 20,
            edge_margin: 2,
        }
    }
}

impl HippoRecognizer {
    pub fn scan(&self, candles: &[CandleData]) -> HippoScan {
        if self.lookback == 0 || candles.len() < self.lookback {
            return HippoScan::InsufficientHistory;
        }

        let window = &candles[candles.len() - self.lookback..];
        let margin = self.edge_margin.max(1);
        let mut signals = Vec::new();

        for i in margin..window.len().saturating_sub(margin) {
            let prev = &window[i - 1];
            let curr = &window[i];
            let next = &window[i + 1];
            let position = window.len() - i;

            if prev.low > curr.high && next.low > curr.high {
                signals.push(Signal {
                    signal_type: SignalType::Hippo,
                    detected: true,
                    details: format!(
                        "Bullish HIPPO (island bottom) at T-{} close {:.2}",
                        position, curr.close
                    ),
                    direction: Some(Sentiment::Bullish),
                });
            } else if prev.high < curr.low && next.high < curr.low {
                signals.push(Signal {
                    signal_type: SignalType::Hippo,
                    detected: true,
                    details: format!(
                        "Bearish HIPPO (island top) at T-{} close {:.2}",
                        position, curr.close
                    ),
                    direction: Some(Sentiment::Bearish),
                });
            }
        }

        debug!("[Patterns] HIPPO scan found {} island(s)", signals.len());
        if signals.is_empty() {
            HippoScan::NoneFound
        } else {
            HippoScan::Found(signals)
        }
    }
}

impl PatternRecognizer for HippoRecognizer {
    fn name(&self) -> &'static str {
        "hippo"
    }

    fn detect(&self, candles: &[CandleData], _levels: &[PriceLevel]) -> Vec<Signal> {
        self.scan(candles).into_signals()
    }
}
