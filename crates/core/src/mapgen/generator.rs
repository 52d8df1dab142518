//! Pipeline orchestration: seed, carve, classify, correct, name, assemble.

use crate::types::GenerationEvent;

use super::assemble::assemble_rooms;
use super::carve::carve_corridors;
use super::classify::classify_shapes;
use super::correct::{enforce_dead_end_quota, enforce_junction_quotas};
use super::grid::MapGrid;
use super::landmarks::build_name_table;
use super::model::GeneratedMap;
use super::seed::{Lehmer31, derive_seed};
use super::tally::ZoneTallies;
use super::{MAP_HEIGHT, MAP_WIDTH};

pub(super) fn generate(seed_text: &str) -> GeneratedMap {
    let seed = derive_seed(seed_text);
    let mut rng = Lehmer31::seeded(seed);
    let mut grid = MapGrid::new();
    let mut tallies = ZoneTallies::new();
    let mut events: Vec<GenerationEvent> = Vec::new();

    carve_corridors(&mut grid, &mut rng);
    classify_shapes(&mut grid, &mut tallies);
    debug_assert_eq!(ZoneTallies::recount(grid.cells()), tallies);

    enforce_dead_end_quota(&mut grid, &mut tallies, &mut events);
    enforce_junction_quotas(&mut grid, &mut tallies, &mut events);
    debug_assert_eq!(ZoneTallies::recount(grid.cells()), tallies);

    let names = build_name_table(&tallies, &mut events);
    assemble_rooms(&mut grid, &names, &mut tallies, &mut rng);
    debug_assert_eq!(ZoneTallies::recount(grid.cells()), tallies);

    GeneratedMap::from_parts(
        seed_text.to_string(),
        seed,
        MAP_WIDTH,
        MAP_HEIGHT,
        grid.into_cells(),
        tallies,
        events,
    )
}
