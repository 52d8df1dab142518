//! Deterministic facility map generation split into pipeline submodules.

pub mod model;
pub mod tally;

mod assemble;
mod carve;
mod classify;
mod correct;
mod generator;
mod grid;
mod landmarks;
mod seed;

pub use model::{Cell, CellView, GeneratedMap};
pub use seed::derive_seed;
pub use tally::ZoneTallies;

use crate::types::Zone;

/// Highest addressable column; the grid spans `0..=MAP_WIDTH`.
pub const MAP_WIDTH: i32 = 18;
/// Highest addressable row; the grid spans `0..=MAP_HEIGHT`.
pub const MAP_HEIGHT: i32 = 18;

const ZONE_BANDS: i32 = 3;

/// Runs the full generation pipeline for a seed string. The result is a pure
/// function of the seed: repeated calls return identical maps.
pub fn generate_map(seed_text: &str) -> GeneratedMap {
    generator::generate(seed_text)
}

/// Zone band of a grid row. Rows split bottom-to-top into inner, middle, and
/// outer thirds; the split is the same one the carver uses to decide where
/// checkpoints go.
pub fn zone_of_row(y: i32) -> Zone {
    let band = (ZONE_BANDS * (MAP_HEIGHT - y) / MAP_HEIGHT).min(ZONE_BANDS - 1);
    match band {
        0 => Zone::Inner,
        1 => Zone::Middle,
        _ => Zone::Outer,
    }
}
