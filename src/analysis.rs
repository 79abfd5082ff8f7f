// src/analysis.rs
// Entry points of the engine: full-series analysis and range-window levels.
// Both are pure functions of their arguments.

use crate::patterns::{HippoRecognizer, PatternRecognizer, StopRunRecognizer};
use crate::types::{
    AnalysisResult, CandleData, CurrentStatus, DealingRange, PriceLevel, RangeWindowResult,
    Sentiment, Signal, SignalType, Zone,
};
use crate::zones::grid::{dealing_range, select_grid_size, DEFAULT_GRID_SIZE};
use crate::zones::levels::generate_levels;
use crate::zones::multi_zone::resolve_zones;
use log::debug;

// ==================== FULL-SERIES ANALYSIS ====================

/// Grid, levels, patterns and sentiment for an ordered candle series.
/// An empty series yields a neutral placeholder result instead of failing.
pub fn analyze_series(candles: &[CandleData]) -> AnalysisResult {
    let Some(last) = candles.last() else {
        return insufficient_data();
    };

    let current_price = last.close;
    let grid_size = select_grid_size(candles);
    let range = dealing_range(current_price, grid_size);
    let levels = generate_levels(range.low, range.high);

    // HIPPO first, then stop runs: the sentiment fold depends on this order.
    let recognizers: [&dyn PatternRecognizer; 2] =
        [&HippoRecognizer::default(), &StopRunRecognizer::default()];
    let signals: Vec<Signal> = recognizers
        .iter()
        .flat_map(|recognizer| {
            let found = recognizer.detect(candles, &levels);
            debug!("[Goldbach] {} -> {} signal(s)", recognizer.name(), found.len());
            found
        })
        .collect();

    let zone = zone_of(current_price, &range);
    let sentiment = fold_sentiment(default_sentiment(zone), &signals);
    let nearest = nearest_level(current_price, &levels).cloned();
    let narrative = compose_narrative(current_price, zone, &range, nearest.as_ref(), &signals);

    debug!(
        "[Goldbach] {} candles, price {:.2} in {:?} of {}-{}, {} signal(s) -> {:?}",
        candles.len(),
        current_price,
        zone,
        range.low,
        range.high,
        signals.len(),
        sentiment
    );

    AnalysisResult {
        sentiment,
        narrative,
        dealing_range: range,
        current_status: CurrentStatus {
            price: current_price,
            zone,
            nearest_level: nearest,
        },
        signals,
        levels,
    }
}

// ==================== RANGE-WINDOW ANALYSIS ====================

/// Levels for an explicit visible window. No patterns or sentiment on this path.
pub fn analyze_range_window(
    visible_high: f64,
    visible_low: f64,
    current_price: f64,
) -> RangeWindowResult {
    resolve_zones(visible_high, visible_low, current_price)
}

// ==================== COMPOSITION HELPERS ====================

fn insufficient_data() -> AnalysisResult {
    let range = dealing_range(0.0, DEFAULT_GRID_SIZE);
    AnalysisResult {
        sentiment: Sentiment::Neutral,
        narrative: "Insufficient data: no candles to analyze.".to_string(),
        dealing_range: range,
        current_status: CurrentStatus {
            price: 0.0,
            zone: Zone::Discount,
            nearest_level: None,
        },
        signals: Vec::new(),
        levels: Vec::new(),
    }
}

/// The exact midpoint counts as premium.
pub fn zone_of(price: f64, range: &DealingRange) -> Zone {
    if price < range.midpoint() {
        Zone::Discount
    } else {
        Zone::Premium
    }
}

pub fn default_sentiment(zone: Zone) -> Sentiment {
    match zone {
        Zone::Discount => Sentiment::Bullish,
        Zone::Premium => Sentiment::Bearish,
    }
}

/// Last-write-wins over detected signals in generation order.
pub fn fold_sentiment(initial: Sentiment, signals: &[Signal]) -> Sentiment {
    signals
        .iter()
        .filter(|signal| signal.detected)
        .filter_map(|signal| signal.direction)
        .fold(initial, |_, direction| direction)
}

/// First level at minimum distance from `price`.
pub fn nearest_level(price: f64, levels: &[PriceLevel]) -> Option<&PriceLevel> {
    let mut nearest: Option<(&PriceLevel, f64)> = None;
    for level in levels {
        let distance = (level.price - price).abs();
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((level, distance)),
        }
    }
    nearest.map(|(level, _)| level)
}

pub fn compose_narrative(
    price: f64,
    zone: Zone,
    range: &DealingRange,
    nearest: Option<&PriceLevel>,
    signals: &[Signal],
) -> String {
    let mut narrative = format!(
        "Price {:.2} is trading in {} of the {}-{} dealing range (PO3 {}).",
        price, zone, range.low, range.high, range.grid_size
    );
    match nearest {
        Some(level) => narrative.push_str(&format!(
            " Nearest Goldbach level: {} at {:.2}.",
            level.label, level.price
        )),
        None => narrative.push_str(" No Goldbach levels available."),
    }

    let stop_runs = signals
        .iter()
        .filter(|s| s.detected && s.signal_type == SignalType::StopRun)
        .count();
    if stop_runs > 0 {
        narrative.push_str(&format!(" PO3 stop run detected at {} level(s).", stop_runs));
    }
    narrative
}
