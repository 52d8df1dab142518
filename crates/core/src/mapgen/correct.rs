//! Best-effort deficit correction forcing rare shapes into each zone.
//!
//! All three passes are local searches with no backtracking: the first
//! matching site wins, a miss is recorded as an event, and the grid is left
//! in whatever state the scan reached. Tally updates always use the mutated
//! cell's own row band, so the counters stay exact even when a promotion
//! touches a neighbor just across a band boundary.

use std::ops::RangeInclusive;

use crate::types::{Connectivity, GenerationEvent, Shape, Zone};

use super::grid::MapGrid;
use super::tally::ZoneTallies;
use super::{MAP_HEIGHT, MAP_WIDTH, zone_of_row};

const DEAD_END_TARGET: u32 = 5;

/// Brings every zone up to at least five dead-ends by promoting a straight
/// corridor or three-way next to an empty cell and carving the empty cell
/// into a fresh dead-end.
pub(super) fn enforce_dead_end_quota(
    grid: &mut MapGrid,
    tallies: &mut ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) {
    for zone in Zone::BANDS {
        let mut missing = DEAD_END_TARGET.saturating_sub(tallies.count(zone, Shape::DeadEnd));
        if missing == 0 {
            continue;
        }
        'scan: for y in dead_end_rows(zone) {
            for x in 2..=MAP_WIDTH - 2 {
                if grid.connectivity(x, y) != Connectivity::Empty {
                    continue;
                }
                if grid.neighbor_degree(x, y) != 1 {
                    continue;
                }
                let (neighbor_x, neighbor_y) = sole_neighbor(grid, x, y);
                let promoted = match grid.connectivity(neighbor_x, neighbor_y) {
                    Connectivity::Linked(2)
                        if grid.shape(neighbor_x, neighbor_y) == Some(Shape::Corridor) =>
                    {
                        Some((3, Shape::Corridor, Shape::ThreeWay))
                    }
                    Connectivity::Linked(3) => Some((4, Shape::ThreeWay, Shape::FourWay)),
                    _ => None,
                };
                let Some((degree, old_shape, new_shape)) = promoted else {
                    continue;
                };

                grid.set_link(neighbor_x, neighbor_y, Connectivity::Linked(degree), Some(new_shape));
                tallies.shift(zone_of_row(neighbor_y), old_shape, new_shape);
                grid.set_link(x, y, Connectivity::Linked(1), Some(Shape::DeadEnd));
                tallies.add(zone, Shape::DeadEnd);

                missing -= 1;
                if missing == 0 {
                    break 'scan;
                }
            }
        }
        if missing > 0 {
            events.push(GenerationEvent::DeadEndQuotaMissed { zone, missing });
        }
    }
}

/// Forces at least one four-way and one corner pair into each zone. The two
/// searches interleave per band because a four-way fix can carve cells a
/// later corner scan must see.
pub(super) fn enforce_junction_quotas(
    grid: &mut MapGrid,
    tallies: &mut ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) {
    for zone in Zone::BANDS {
        let rows = junction_rows(zone);
        if tallies.count(zone, Shape::FourWay) < 1 && !force_four_way(grid, tallies, rows.clone()) {
            events.push(GenerationEvent::FourWayQuotaMissed { zone });
        }
        if tallies.count(zone, Shape::Corner) < 1 {
            let corner_rows = (rows.start() + 1)..=(rows.end() - 1);
            if !force_corner_pair(grid, tallies, corner_rows) {
                events.push(GenerationEvent::CornerPairQuotaMissed { zone });
            }
        }
    }
}

/// Interior rows the dead-end scan may touch for a band.
fn dead_end_rows(zone: Zone) -> RangeInclusive<i32> {
    let band = zone.band().unwrap_or(0) as i32;
    let third = MAP_HEIGHT / 3;
    third * (2 - band) + 1..=third * (3 - band) - 2
}

/// Rows the junction searches may touch for a band.
fn junction_rows(zone: Zone) -> RangeInclusive<i32> {
    let third = MAP_HEIGHT / 3;
    match zone {
        Zone::Inner => 2 * third + 1..=MAP_HEIGHT - 2,
        Zone::Middle => third + 1..=2 * third - 1,
        _ => 2..=third,
    }
}

/// The coordinates of the single occupied neighbor of an empty cell with
/// neighbor degree one. Probe order matters: right, left, below, above.
fn sole_neighbor(grid: &MapGrid, x: i32, y: i32) -> (i32, i32) {
    if grid.occupancy(x + 1, y) > 0 {
        (x + 1, y)
    } else if grid.occupancy(x - 1, y) > 0 {
        (x - 1, y)
    } else if grid.occupancy(x, y + 1) > 0 {
        (x, y + 1)
    } else {
        (x, y - 1)
    }
}

fn force_four_way(grid: &mut MapGrid, tallies: &mut ZoneTallies, rows: RangeInclusive<i32>) -> bool {
    for y in rows {
        for x in 2..=MAP_WIDTH - 2 {
            if grid.connectivity(x, y) != Connectivity::Linked(3) {
                continue;
            }
            let Some((lobe_x, lobe_y)) = open_lobe(grid, x, y) else {
                continue;
            };

            grid.set_link(lobe_x, lobe_y, Connectivity::Linked(1), Some(Shape::DeadEnd));
            tallies.add(zone_of_row(lobe_y), Shape::DeadEnd);
            grid.set_link(x, y, Connectivity::Linked(4), Some(Shape::FourWay));
            tallies.shift(zone_of_row(y), Shape::ThreeWay, Shape::FourWay);
            return true;
        }
    }
    false
}

/// First direction around a three-way whose flanking cells and the cell two
/// steps out are all unoccupied, if any. Probe order: right, left, below,
/// above.
fn open_lobe(grid: &MapGrid, x: i32, y: i32) -> Option<(i32, i32)> {
    let open = |cx: i32, cy: i32| grid.occupancy(cx, cy) == 0;
    if open(x + 1, y) && open(x + 1, y + 1) && open(x + 1, y - 1) && open(x + 2, y) {
        Some((x + 1, y))
    } else if open(x - 1, y) && open(x - 1, y + 1) && open(x - 1, y - 1) && open(x - 2, y) {
        Some((x - 1, y))
    } else if open(x, y + 1) && open(x + 1, y + 1) && open(x - 1, y + 1) && open(x, y + 2) {
        Some((x, y + 1))
    } else if open(x, y - 1) && open(x + 1, y - 1) && open(x - 1, y - 1) && open(x, y - 2) {
        Some((x, y - 1))
    } else {
        None
    }
}

fn force_corner_pair(
    grid: &mut MapGrid,
    tallies: &mut ZoneTallies,
    rows: RangeInclusive<i32>,
) -> bool {
    for y in rows {
        for x in 3..=MAP_WIDTH - 3 {
            if grid.connectivity(x, y) != Connectivity::Linked(1) {
                continue;
            }
            let Some(((partner_x, partner_y), (stub_x, stub_y))) = corner_conversion(grid, x, y)
            else {
                continue;
            };

            grid.set_link(x, y, Connectivity::Linked(2), Some(Shape::Corner));
            tallies.shift(zone_of_row(y), Shape::DeadEnd, Shape::Corner);
            grid.set_link(partner_x, partner_y, Connectivity::Linked(2), Some(Shape::Corner));
            tallies.add(zone_of_row(partner_y), Shape::Corner);
            // The replacement dead-end keeps the path count intact.
            grid.set_link(stub_x, stub_y, Connectivity::Linked(1), Some(Shape::DeadEnd));
            tallies.add(zone_of_row(stub_y), Shape::DeadEnd);
            return true;
        }
    }
    false
}

/// Tests the four orientations of a dead-end for a 2x2 clearance that fits a
/// corner pair, returning the partner cell and the replacement dead-end.
/// Each orientation tries the two diagonal sweeps in a fixed order.
fn corner_conversion(grid: &MapGrid, x: i32, y: i32) -> Option<((i32, i32), (i32, i32))> {
    let open = |cx: i32, cy: i32| grid.occupancy(cx, cy) == 0;
    if grid.occupancy(x - 1, y) > 0 {
        if open(x, y - 1) && open(x, y + 1) && open(x + 2, y) {
            if open(x + 2, y - 1) && open(x + 1, y - 1) {
                return Some(((x + 1, y), (x + 1, y - 1)));
            }
            if open(x + 1, y + 2) && open(x + 2, y + 1) && open(x + 1, y + 1) {
                return Some(((x + 1, y), (x + 1, y + 1)));
            }
        }
    } else if grid.occupancy(x + 1, y) > 0 {
        if open(x, y - 1) && open(x, y + 1) && open(x - 2, y) {
            if open(x - 1, y - 2) && open(x - 2, y - 1) && open(x - 1, y - 1) {
                return Some(((x - 1, y), (x - 1, y - 1)));
            }
            if open(x - 1, y + 2) && open(x - 2, y + 1) && open(x - 1, y + 1) {
                return Some(((x - 1, y), (x - 1, y + 1)));
            }
        }
    } else if grid.occupancy(x, y - 1) > 0 {
        if open(x - 1, y) && open(x + 1, y) && open(x, y + 2) {
            if open(x - 2, y + 1) && open(x - 1, y + 2) && open(x - 1, y + 1) {
                return Some(((x, y + 1), (x - 1, y + 1)));
            }
            if open(x + 2, y + 1) && open(x + 1, y + 2) && open(x + 1, y + 1) {
                return Some(((x, y + 1), (x + 1, y + 1)));
            }
        }
    } else if grid.occupancy(x, y + 1) > 0 {
        if open(x - 1, y) && open(x + 1, y) && open(x, y - 2) {
            if open(x - 2, y - 1) && open(x - 1, y - 2) && open(x - 1, y - 1) {
                return Some(((x, y - 1), (x - 1, y - 1)));
            }
            if open(x + 2, y - 1) && open(x + 1, y - 2) && open(x + 1, y - 1) {
                return Some(((x, y - 1), (x + 1, y - 1)));
            }
        }
    }
    None
}
