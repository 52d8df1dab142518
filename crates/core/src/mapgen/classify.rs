//! Post-carve shape classification from neighbor occupancy.

use crate::types::{Connectivity, Shape};

use super::grid::MapGrid;
use super::tally::ZoneTallies;
use super::{MAP_HEIGHT, MAP_WIDTH, zone_of_row};

pub(super) fn classify_shapes(grid: &mut MapGrid, tallies: &mut ZoneTallies) {
    for y in 1..MAP_HEIGHT {
        let zone = zone_of_row(y);
        for x in 1..MAP_WIDTH {
            match grid.connectivity(x, y) {
                Connectivity::Empty => {}
                Connectivity::Checkpoint => {
                    // Checkpoints keep their sentinel and always read as
                    // three-way junctions regardless of computed degree.
                    grid.set_link(x, y, Connectivity::Checkpoint, Some(Shape::ThreeWay));
                    tallies.add(zone, Shape::ThreeWay);
                }
                Connectivity::Linked(_) => {
                    let degree = grid.neighbor_degree(x, y);
                    let shape = match degree {
                        0 => {
                            grid.set_link(x, y, Connectivity::Empty, None);
                            continue;
                        }
                        1 => Shape::DeadEnd,
                        2 => {
                            let horizontal =
                                grid.occupancy(x + 1, y) + grid.occupancy(x - 1, y) == 2;
                            let vertical =
                                grid.occupancy(x, y + 1) + grid.occupancy(x, y - 1) == 2;
                            if horizontal || vertical { Shape::Corridor } else { Shape::Corner }
                        }
                        3 => Shape::ThreeWay,
                        _ => Shape::FourWay,
                    };
                    grid.set_link(x, y, Connectivity::Linked(degree), Some(shape));
                    tallies.add(zone, shape);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Zone;

    fn occupy(grid: &mut MapGrid, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            grid.set_link(x, y, Connectivity::Linked(1), None);
        }
    }

    #[test]
    fn degree_two_cells_split_into_corridors_and_corners_by_axis() {
        let mut grid = MapGrid::new();
        let mut tallies = ZoneTallies::new();
        // A straight run with an L-bend at its right end, in the inner band.
        occupy(&mut grid, &[(4, 15), (5, 15), (6, 15), (6, 14)]);
        classify_shapes(&mut grid, &mut tallies);

        assert_eq!(grid.shape(5, 15), Some(Shape::Corridor));
        assert_eq!(grid.shape(6, 15), Some(Shape::Corner));
        assert_eq!(grid.shape(4, 15), Some(Shape::DeadEnd));
        assert_eq!(grid.shape(6, 14), Some(Shape::DeadEnd));
        assert_eq!(grid.connectivity(6, 15), Connectivity::Linked(2));
        assert_eq!(tallies.count(Zone::Inner, Shape::Corner), 1);
        assert_eq!(tallies.count(Zone::Inner, Shape::DeadEnd), 2);
    }

    #[test]
    fn higher_degrees_classify_as_junctions() {
        let mut grid = MapGrid::new();
        let mut tallies = ZoneTallies::new();
        occupy(&mut grid, &[(8, 9), (7, 9), (9, 9), (8, 8), (8, 10)]);
        classify_shapes(&mut grid, &mut tallies);

        assert_eq!(grid.shape(8, 9), Some(Shape::FourWay));
        assert_eq!(grid.connectivity(8, 9), Connectivity::Linked(4));
        assert_eq!(tallies.count(Zone::Middle, Shape::FourWay), 1);
    }

    #[test]
    fn checkpoints_are_forced_to_three_way_and_tallied() {
        let mut grid = MapGrid::new();
        let mut tallies = ZoneTallies::new();
        grid.set_link(5, 12, Connectivity::Checkpoint, None);
        occupy(&mut grid, &[(5, 11), (5, 13)]);
        classify_shapes(&mut grid, &mut tallies);

        assert_eq!(grid.connectivity(5, 12), Connectivity::Checkpoint);
        assert_eq!(grid.shape(5, 12), Some(Shape::ThreeWay));
        assert_eq!(tallies.count(Zone::Middle, Shape::ThreeWay), 1);
    }

    #[test]
    fn tallies_match_a_recount_after_classification() {
        let mut grid = MapGrid::new();
        let mut tallies = ZoneTallies::new();
        occupy(&mut grid, &[(4, 15), (5, 15), (6, 15), (6, 14), (8, 9), (8, 8)]);
        classify_shapes(&mut grid, &mut tallies);
        assert_eq!(ZoneTallies::recount(grid.cells()), tallies);
    }
}
