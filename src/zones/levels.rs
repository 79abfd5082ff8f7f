// src/zones/levels.rs
// Goldbach level table and the generator that maps it onto a dealing range.

use crate::types::{LevelRole, PriceLevel};

/// Fixed ratio table, ratio-ascending. Output order follows this table.
pub const GOLDBACH_RATIOS: [(f64, LevelRole); 13] = [
    (0.00, LevelRole::Boundary),
    (0.03, LevelRole::RejectionBlock),
    (0.11, LevelRole::OrderBlock),
    (0.17, LevelRole::FairValueGap),
    (0.29, LevelRole::LiquidityVoid),
    (0.41, LevelRole::Breaker),
    (0.50, LevelRole::Equilibrium),
    (0.59, LevelRole::Breaker),
    (0.71, LevelRole::LiquidityVoid),
    (0.83, LevelRole::FairValueGap),
    (0.89, LevelRole::OrderBlock),
    (0.97, LevelRole::RejectionBlock),
    (1.00, LevelRole::Boundary),
];

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps every table ratio onto `[range_low, range_high]`.
/// Returns an empty list for a zero-width (or inverted) range.
pub fn generate_levels(range_low: f64, range_high: f64) -> Vec<PriceLevel> {
    let width = range_high - range_low;
    if width.is_nan() || width <= 0.0 {
        return Vec::new();
    }

    GOLDBACH_RATIOS
        .iter()
        .map(|&(ratio, role)| PriceLevel {
            price: round2(range_low + width * ratio),
            label: format!("{} ({:.2})", role.name(), ratio),
            ratio,
            role,
            color: role.color().to_string(),
        })
        .collect()
}
