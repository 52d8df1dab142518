//! Final assembly: zone labels, rotations, room names, and the off-grid
//! special rooms.

use crate::types::{Connectivity, Rotation, Shape, Zone};

use super::grid::MapGrid;
use super::landmarks::NameTable;
use super::seed::Lehmer31;
use super::tally::ZoneTallies;
use super::{MAP_HEIGHT, MAP_WIDTH, zone_of_row};

/// Rooms that exist below or beside the visible grid. They get fixed names
/// and the `None` zone, outside every band.
const OFF_GRID_ROOMS: [(i32, i32, &str); 3] = [
    (MAP_WIDTH - 1, 1, "gatea"),
    (MAP_WIDTH - 1, MAP_HEIGHT - 1, "pocketdimension"),
    (1, 0, "dimension1499"),
];

pub(super) fn assemble_rooms(
    grid: &mut MapGrid,
    names: &NameTable,
    tallies: &mut ZoneTallies,
    rng: &mut Lehmer31,
) {
    let mut cursors = [0_usize; Shape::ALL.len()];

    for y in (1..MAP_HEIGHT).rev() {
        let zone = zone_of_row(y);
        for x in 1..=MAP_WIDTH - 2 {
            match grid.connectivity(x, y) {
                Connectivity::Empty => {}
                Connectivity::Checkpoint => {
                    // Checkpoints are named by the boundary they sit on and
                    // never consume a name slot or a random draw.
                    let name = if zone_of_row(y + 1) == Zone::Inner {
                        "checkpoint1"
                    } else {
                        "checkpoint2"
                    };
                    if let Some(cell) = grid.cell_mut(x, y) {
                        cell.zone = zone;
                        cell.rotation = Rotation::R0;
                        cell.name = name.to_string();
                    }
                }
                Connectivity::Linked(_) => {
                    let Some(shape) = grid.shape(x, y) else {
                        continue;
                    };
                    let rotation = desired_rotation(grid, shape, x, y, rng);
                    let slot = cursors[shape.slot()];
                    cursors[shape.slot()] += 1;
                    let name =
                        names.reserved(shape, slot).unwrap_or_else(|| shape.generic_name());
                    if let Some(cell) = grid.cell_mut(x, y) {
                        cell.zone = zone;
                        cell.rotation = rotation;
                        cell.name = name.to_string();
                    }
                }
            }
        }
    }

    for (x, y, name) in OFF_GRID_ROOMS {
        place_off_grid_room(grid, tallies, x, y, name);
    }
}

/// Rotation for a room given its shape and neighbor pattern. Corridors are
/// symmetric, so a coin flip picks between their two valid rotations.
fn desired_rotation(
    grid: &MapGrid,
    shape: Shape,
    x: i32,
    y: i32,
    rng: &mut Lehmer31,
) -> Rotation {
    let left = grid.occupancy(x - 1, y) > 0;
    let right = grid.occupancy(x + 1, y) > 0;
    let up = grid.occupancy(x, y - 1) > 0;
    let down = grid.occupancy(x, y + 1) > 0;

    match shape {
        Shape::DeadEnd => facing_rotation(grid, x, y),
        Shape::Corridor => {
            if left && right {
                if rng.roll(1, 2) == 1 { Rotation::R270 } else { Rotation::R90 }
            } else if up && down {
                if rng.roll(1, 2) == 1 { Rotation::R180 } else { Rotation::R0 }
            } else {
                Rotation::R0
            }
        }
        Shape::Corner => {
            if left && down {
                Rotation::R180
            } else if right && down {
                Rotation::R270
            } else if left && up {
                Rotation::R90
            } else {
                Rotation::R0
            }
        }
        Shape::ThreeWay => {
            // A three-way faces its single closed side.
            if !up {
                Rotation::R180
            } else if !left {
                Rotation::R270
            } else if !right {
                Rotation::R90
            } else {
                Rotation::R0
            }
        }
        Shape::FourWay => Rotation::R0,
    }
}

/// Dead-end rule: face the single open neighbor. Checked below, left, right;
/// an open side above (or no neighbor at all) keeps rotation zero.
fn facing_rotation(grid: &MapGrid, x: i32, y: i32) -> Rotation {
    if grid.occupancy(x, y + 1) > 0 {
        Rotation::R180
    } else if grid.occupancy(x - 1, y) > 0 {
        Rotation::R90
    } else if grid.occupancy(x + 1, y) > 0 {
        Rotation::R270
    } else {
        Rotation::R0
    }
}

fn place_off_grid_room(
    grid: &mut MapGrid,
    tallies: &mut ZoneTallies,
    x: i32,
    y: i32,
    name: &str,
) {
    let rotation = facing_rotation(grid, x, y);
    let connectivity = grid.connectivity(x, y);
    if let Some(shape) = grid.shape(x, y) {
        if let Some(cell) = grid.cell(x, y) {
            tallies.remove(cell.zone, shape);
        }
    }
    grid.set_link(x, y, connectivity, Some(Shape::DeadEnd));
    if let Some(cell) = grid.cell_mut(x, y) {
        cell.zone = Zone::None;
        cell.rotation = rotation;
        cell.name = name.to_string();
    }
}
