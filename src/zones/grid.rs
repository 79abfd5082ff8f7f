// src/zones/grid.rs
// Power-of-three grid selection and the dealing range that contains a price.

use crate::types::{CandleData, DealingRange};
use log::debug;

/// Candidate grid sizes, ascending. Selection ties resolve to the earlier entry.
pub const GRID_CANDIDATES: [u32; 8] = [3, 9, 27, 81, 243, 729, 2187, 6561];

/// Used when there is nothing to measure.
pub const DEFAULT_GRID_SIZE: u32 = 243;

fn nearest_candidate(target: f64) -> u32 {
    let mut best = GRID_CANDIDATES[0];
    let mut best_distance = f64::INFINITY;
    for &candidate in GRID_CANDIDATES.iter() {
        let distance = (f64::from(candidate) - target).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Picks the grid size closest to the full high/low span of the series.
pub fn select_grid_size(candles: &[CandleData]) -> u32 {
    if candles.is_empty() {
        return DEFAULT_GRID_SIZE;
    }

    let max_high = candles
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_low = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let visible_range = max_high - min_low;

    let grid_size = nearest_candidate(visible_range);
    debug!(
        "[Grid] {} candles span {:.2} -> grid size {}",
        candles.len(),
        visible_range,
        grid_size
    );
    grid_size
}

/// Zoom variant: targets half the visible span so a window shows several zones.
pub fn select_zoom_grid_size(visible_high: f64, visible_low: f64) -> u32 {
    let grid_size = nearest_candidate((visible_high - visible_low) / 2.0);
    debug!(
        "[Grid] zoom window {:.2}-{:.2} -> grid size {}",
        visible_low, visible_high, grid_size
    );
    grid_size
}

/// Lower boundary of the grid cell holding `price` (mathematical floor, also for negatives).
pub fn zone_floor(price: f64, grid_size: u32) -> f64 {
    let grid = f64::from(grid_size);
    (price / grid).floor() * grid
}

/// Dealing range of width `grid_size` containing `current_price`.
/// A zero grid size falls back to [`DEFAULT_GRID_SIZE`].
pub fn dealing_range(current_price: f64, grid_size: u32) -> DealingRange {
    let grid_size = if grid_size == 0 {
        DEFAULT_GRID_SIZE
    } else {
        grid_size
    };
    let low = zone_floor(current_price, grid_size);
    DealingRange {
        grid_size,
        low,
        high: low + f64::from(grid_size),
    }
}
