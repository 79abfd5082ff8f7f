// src/zones/multi_zone.rs
// Resolves the grid zones visible in an explicit price window (zoom path).

use crate::types::{MultiZoneRange, PriceLevel, RangeWindowResult, ZoneBounds};
use crate::zones::grid::{dealing_range, select_zoom_grid_size, zone_floor};
use crate::zones::levels::generate_levels;
use log::debug;

pub const MAX_ZONES: usize = 3;

/// Contiguous zones from the one holding `visible_low` up to the one holding
/// `visible_high` (inclusive), at most [`MAX_ZONES`].
fn visible_zones(visible_high: f64, visible_low: f64, grid_size: u32) -> Vec<ZoneBounds> {
    let grid = f64::from(grid_size);
    let start_zone_low = zone_floor(visible_low, grid_size);
    let end_zone_low = zone_floor(visible_high, grid_size);
    let steps = ((end_zone_low - start_zone_low) / grid).round();
    let num_zones = if steps.is_nan() || steps >= (MAX_ZONES - 1) as f64 {
        MAX_ZONES
    } else {
        steps.max(0.0) as usize + 1
    };

    (0..num_zones)
        .map(|i| {
            let low = start_zone_low + i as f64 * grid;
            ZoneBounds {
                low,
                high: low + grid,
            }
        })
        .collect()
}

/// Levels for every zone in the window plus the dealing range around `current_price`.
/// An inverted window is treated as its swapped counterpart.
pub fn resolve_zones(visible_high: f64, visible_low: f64, current_price: f64) -> RangeWindowResult {
    let (visible_high, visible_low) = if visible_high < visible_low {
        debug!(
            "[MultiZone] inverted window {:.2}/{:.2}, swapping",
            visible_high, visible_low
        );
        (visible_low, visible_high)
    } else {
        (visible_high, visible_low)
    };

    let grid_size = select_zoom_grid_size(visible_high, visible_low);
    let primary = dealing_range(current_price, grid_size);
    let zones = visible_zones(visible_high, visible_low, grid_size);
    let prefix_labels = zones.len() > 1;

    let mut levels: Vec<PriceLevel> = Vec::new();
    for zone in &zones {
        for mut level in generate_levels(zone.low, zone.high) {
            if levels.iter().any(|existing| existing.price == level.price) {
                continue;
            }
            if prefix_labels {
                level.label = format!("[{}-{}] {}", zone.low, zone.high, level.label);
            }
            levels.push(level);
        }
    }

    debug!(
        "[MultiZone] grid {} rendered {} zone(s), {} unique levels",
        grid_size,
        zones.len(),
        levels.len()
    );

    RangeWindowResult {
        levels,
        dealing_range: MultiZoneRange {
            grid_size,
            low: primary.low,
            high: primary.high,
            all_ranges: zones,
        },
    }
}
