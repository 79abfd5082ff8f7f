// src/zones/mod.rs
pub mod grid;
pub mod levels;
pub mod multi_zone;

pub use grid::{dealing_range, select_grid_size, select_zoom_grid_size, GRID_CANDIDATES};
pub use levels::{generate_levels, GOLDBACH_RATIOS};
pub use multi_zone::resolve_zones;
