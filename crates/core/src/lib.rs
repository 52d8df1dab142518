pub mod fixture;
pub mod mapgen;
pub mod types;

pub use mapgen::{
    Cell, CellView, GeneratedMap, MAP_HEIGHT, MAP_WIDTH, ZoneTallies, generate_map, zone_of_row,
};
pub use types::*;
