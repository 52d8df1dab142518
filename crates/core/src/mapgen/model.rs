//! Public data model for a generated facility map.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Connectivity, GenerationEvent, Rotation, Shape, Zone};

use super::tally::ZoneTallies;

/// One grid coordinate's worth of generation output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub connectivity: Connectivity,
    pub shape: Option<Shape>,
    pub zone: Zone,
    pub name: String,
    pub rotation: Rotation,
}

/// Borrowed view of a cell as handed to spawning code. Out-of-range lookups
/// return a view of an empty cell rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView<'a> {
    pub x: i32,
    pub y: i32,
    pub connectivity: Connectivity,
    pub shape: Option<Shape>,
    pub zone: Zone,
    pub name: &'a str,
    pub rotation: Rotation,
}

/// Complete output of one generation run: the populated grid plus the shape
/// tallies and any soft-failure events the pipeline recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub seed_text: String,
    pub seed: i32,
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
    pub tallies: ZoneTallies,
    pub events: Vec<GenerationEvent>,
}

impl GeneratedMap {
    pub(super) fn from_parts(
        seed_text: String,
        seed: i32,
        width: i32,
        height: i32,
        cells: Vec<Cell>,
        tallies: ZoneTallies,
        events: Vec<GenerationEvent>,
    ) -> Self {
        Self { seed_text, seed, width, height, cells, tallies, events }
    }

    /// All cells in row-major order, `(width + 1) * (height + 1)` of them.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at (x, y). Coordinates outside `0..=width` x `0..=height` read as
    /// an empty, unnamed cell.
    pub fn cell(&self, x: i32, y: i32) -> CellView<'_> {
        let index = if x < 0 || y < 0 || x > self.width || y > self.height {
            None
        } else {
            Some(y as usize * (self.width + 1) as usize + x as usize)
        };
        match index.map(|index| &self.cells[index]) {
            Some(cell) => CellView {
                x: cell.x,
                y: cell.y,
                connectivity: cell.connectivity,
                shape: cell.shape,
                zone: cell.zone,
                name: &cell.name,
                rotation: cell.rotation,
            },
            None => CellView {
                x,
                y,
                connectivity: Connectivity::Empty,
                shape: None,
                zone: Zone::None,
                name: "",
                rotation: Rotation::R0,
            },
        }
    }

    /// Stable byte encoding of the full grid, used for fingerprinting and
    /// regression comparison.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(cell.connectivity.code());
            bytes.push(match cell.shape {
                None => 0,
                Some(shape) => shape as u8 + 1,
            });
            bytes.push(cell.zone as u8);
            bytes.push(cell.rotation as u8);
            bytes.extend((cell.name.len() as u32).to_le_bytes());
            bytes.extend(cell.name.as_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Textual grid of connectivity codes, one row per line, for eyeballing a
    /// layout in a terminal.
    pub fn connectivity_dump(&self) -> String {
        let mut dump = String::new();
        for y in 0..=self.height {
            for x in 0..=self.width {
                let code = self.cell(x, y).connectivity.code();
                dump.push_str(&format!(" {code:>3}"));
            }
            dump.push('\n');
        }
        dump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_map() -> GeneratedMap {
        let mut cells = Vec::new();
        for y in 0..=2 {
            for x in 0..=2 {
                cells.push(Cell {
                    x,
                    y,
                    connectivity: Connectivity::Empty,
                    shape: None,
                    zone: Zone::Inner,
                    name: String::new(),
                    rotation: Rotation::R0,
                });
            }
        }
        GeneratedMap::from_parts(
            "test".to_string(),
            1,
            2,
            2,
            cells,
            ZoneTallies::new(),
            Vec::new(),
        )
    }

    #[test]
    fn out_of_range_cell_reads_return_the_empty_default() {
        let map = empty_map();
        let view = map.cell(99, -4);
        assert_eq!(view.connectivity, Connectivity::Empty);
        assert_eq!(view.shape, None);
        assert_eq!(view.zone, Zone::None);
        assert_eq!(view.name, "");
    }

    #[test]
    fn connectivity_dump_emits_one_line_per_row() {
        let map = empty_map();
        assert_eq!(map.connectivity_dump().lines().count(), 3);
    }

    #[test]
    fn canonical_bytes_change_when_a_name_changes() {
        let mut map = empty_map();
        let baseline = map.canonical_bytes();
        map.cells[4].name = "start".to_string();
        assert_ne!(map.canonical_bytes(), baseline);
    }
}
