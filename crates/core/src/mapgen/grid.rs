//! Flat cell grid with checked coordinate access.
//!
//! Out-of-range reads yield `Connectivity::Empty` and out-of-range writes are
//! dropped; every pass leans on that so the carve and scan loops need no edge
//! special-casing.

use crate::types::{Connectivity, Rotation, Shape};

use super::model::Cell;
use super::{MAP_HEIGHT, MAP_WIDTH, zone_of_row};

const GRID_COLUMNS: usize = (MAP_WIDTH + 1) as usize;
const GRID_ROWS: usize = (MAP_HEIGHT + 1) as usize;

pub(super) struct MapGrid {
    cells: Vec<Cell>,
}

impl MapGrid {
    pub(super) fn new() -> Self {
        let mut cells = Vec::with_capacity(GRID_COLUMNS * GRID_ROWS);
        for y in 0..GRID_ROWS as i32 {
            for x in 0..GRID_COLUMNS as i32 {
                cells.push(Cell {
                    x,
                    y,
                    connectivity: Connectivity::Empty,
                    shape: None,
                    zone: zone_of_row(y),
                    name: String::new(),
                    rotation: Rotation::R0,
                });
            }
        }
        Self { cells }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x > MAP_WIDTH || y > MAP_HEIGHT {
            return None;
        }
        Some(y as usize * GRID_COLUMNS + x as usize)
    }

    pub(super) fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        Self::index(x, y).map(|index| &self.cells[index])
    }

    pub(super) fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        Self::index(x, y).map(|index| &mut self.cells[index])
    }

    pub(super) fn connectivity(&self, x: i32, y: i32) -> Connectivity {
        self.cell(x, y).map_or(Connectivity::Empty, |cell| cell.connectivity)
    }

    pub(super) fn shape(&self, x: i32, y: i32) -> Option<Shape> {
        self.cell(x, y).and_then(|cell| cell.shape)
    }

    /// 1 if the cell is part of the corridor network, else 0.
    pub(super) fn occupancy(&self, x: i32, y: i32) -> u8 {
        self.connectivity(x, y).occupancy()
    }

    /// Number of occupied axis-neighbors.
    pub(super) fn neighbor_degree(&self, x: i32, y: i32) -> u8 {
        self.occupancy(x + 1, y)
            + self.occupancy(x - 1, y)
            + self.occupancy(x, y + 1)
            + self.occupancy(x, y - 1)
    }

    /// The single mutator for connectivity and shape. Both change in one step
    /// so the two encodings cannot drift apart mid-pass.
    pub(super) fn set_link(
        &mut self,
        x: i32,
        y: i32,
        connectivity: Connectivity,
        shape: Option<Shape>,
    ) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.connectivity = connectivity;
            cell.shape = shape;
        }
    }

    pub(super) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(super) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
