//! Per-zone shape population counters.
//!
//! Every pass that mutates a cell's shape adjusts these in the same step, so
//! the stored counts always equal the grid population they summarize. The
//! deficit correctors and the landmark table sizing both read them.

use crate::types::{Shape, Zone};

use super::model::Cell;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneTallies {
    counts: [[u32; Shape::ALL.len()]; Zone::BANDS.len()],
}

impl ZoneTallies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, zone: Zone, shape: Shape) -> u32 {
        zone.band().map_or(0, |band| self.counts[band][shape.slot()])
    }

    /// Total cells of a shape across all three bands.
    pub fn total(&self, shape: Shape) -> u32 {
        Zone::BANDS.iter().map(|zone| self.count(*zone, shape)).sum()
    }

    pub(super) fn add(&mut self, zone: Zone, shape: Shape) {
        if let Some(band) = zone.band() {
            self.counts[band][shape.slot()] += 1;
        }
    }

    pub(super) fn remove(&mut self, zone: Zone, shape: Shape) {
        if let Some(band) = zone.band() {
            let count = &mut self.counts[band][shape.slot()];
            *count = count.saturating_sub(1);
        }
    }

    pub(super) fn shift(&mut self, zone: Zone, from: Shape, to: Shape) {
        self.remove(zone, from);
        self.add(zone, to);
    }

    /// Rebuilds tallies from the grid. Generation uses this only in debug
    /// assertions; tests use it to pin the bookkeeping to the ground truth.
    pub fn recount(cells: &[Cell]) -> Self {
        let mut tallies = Self::new();
        for cell in cells {
            if let Some(shape) = cell.shape {
                tallies.add(cell.zone, shape);
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Connectivity, Rotation};

    #[test]
    fn shift_moves_one_count_between_shapes() {
        let mut tallies = ZoneTallies::new();
        tallies.add(Zone::Middle, Shape::Corridor);
        tallies.add(Zone::Middle, Shape::Corridor);
        tallies.shift(Zone::Middle, Shape::Corridor, Shape::ThreeWay);

        assert_eq!(tallies.count(Zone::Middle, Shape::Corridor), 1);
        assert_eq!(tallies.count(Zone::Middle, Shape::ThreeWay), 1);
        assert_eq!(tallies.total(Shape::Corridor), 1);
    }

    #[test]
    fn zone_none_never_accumulates_counts() {
        let mut tallies = ZoneTallies::new();
        tallies.add(Zone::None, Shape::DeadEnd);
        assert_eq!(tallies.total(Shape::DeadEnd), 0);
    }

    #[test]
    fn recount_matches_incremental_bookkeeping() {
        let cell = |zone, shape| Cell {
            x: 0,
            y: 0,
            connectivity: Connectivity::Linked(1),
            shape: Some(shape),
            zone,
            name: String::new(),
            rotation: Rotation::R0,
        };
        let cells = vec![
            cell(Zone::Inner, Shape::DeadEnd),
            cell(Zone::Inner, Shape::Corner),
            cell(Zone::Outer, Shape::DeadEnd),
        ];

        let mut expected = ZoneTallies::new();
        expected.add(Zone::Inner, Shape::DeadEnd);
        expected.add(Zone::Inner, Shape::Corner);
        expected.add(Zone::Outer, Shape::DeadEnd);

        assert_eq!(ZoneTallies::recount(&cells), expected);
    }
}
