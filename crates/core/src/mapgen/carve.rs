//! Corridor carving: alternating horizontal spans and fans of vertical
//! branches that walk an anchor from the bottom of the grid to the top.
//!
//! Draw order is load-bearing. Every `roll` here feeds the same stream the
//! assembly pass later uses for rotation tie-breaks, so reordering any call
//! changes the whole map.

use crate::types::Connectivity;

use super::grid::MapGrid;
use super::seed::Lehmer31;
use super::{MAP_HEIGHT, MAP_WIDTH, zone_of_row};

pub(super) fn carve_corridors(grid: &mut MapGrid, rng: &mut Lehmer31) {
    let mut anchor_x = MAP_WIDTH / 2;
    let mut anchor_y = MAP_HEIGHT - 2;

    // Entry stub below the first span.
    for row in anchor_y..MAP_HEIGHT {
        grid.set_link(anchor_x, row, Connectivity::Linked(1), None);
    }

    let mut landing_column = 0;
    loop {
        let mut width = rng.roll(10, 15);
        if anchor_x as f32 > MAP_WIDTH as f32 * 0.6 {
            width = -width;
        } else if anchor_x as f32 > MAP_WIDTH as f32 * 0.4 {
            anchor_x -= width / 2;
        }

        // Keep the span two cells clear of both edges.
        if anchor_x + width > MAP_WIDTH - 3 {
            width = MAP_WIDTH - 3 - anchor_x;
        } else if anchor_x + width < 2 {
            width = -anchor_x + 2;
        }
        anchor_x = anchor_x.min(anchor_x + width);
        width = width.abs();

        for column in anchor_x..=anchor_x + width {
            grid.set_link(column.min(MAP_WIDTH), anchor_y, Connectivity::Linked(1), None);
        }

        let mut extent = rng.roll(3, 4);
        if anchor_y - extent < 1 {
            extent = anchor_y - 1;
        }
        let branch_count = rng.roll(4, 5);
        // A branch must not silently cross a band boundary at its top end;
        // boundary rows are handled by checkpoint cells instead.
        if zone_of_row(anchor_y - extent) != zone_of_row(anchor_y - extent + 1) {
            extent -= 1;
        }

        for branch in 1..=branch_count {
            let candidate = rng.roll(anchor_x, anchor_x + width - 1).min(MAP_WIDTH - 2);
            let mut column = candidate.max(2);
            while grid.occupancy(column, anchor_y - 1)
                + grid.occupancy(column - 1, anchor_y - 1)
                + grid.occupancy(column + 1, anchor_y - 1)
                > 0
            {
                column += 1;
            }
            if column >= anchor_x + width {
                continue;
            }

            let branch_extent = if branch == 1 {
                // The first branch always runs the full extent from one end
                // of the span.
                column = if rng.roll(1, 2) == 1 { anchor_x } else { anchor_x + width };
                extent
            } else {
                rng.roll(1, extent)
            };

            for row in (anchor_y - branch_extent)..=anchor_y {
                if zone_of_row(row) != zone_of_row(row + 1) {
                    grid.set_link(column, row, Connectivity::Checkpoint, None);
                } else {
                    grid.set_link(column, row, Connectivity::Linked(1), None);
                }
            }

            if branch_extent == extent {
                landing_column = column;
            }
        }

        anchor_x = landing_column;
        anchor_y -= extent;
        if anchor_y < 2 {
            break;
        }
    }
}
