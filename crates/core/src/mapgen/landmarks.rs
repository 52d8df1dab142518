//! Landmark room reservation: per-shape slot tables filled zone by zone.
//!
//! Each landmark lands at a fractional offset into its zone's slice of a
//! shape's slot sequence, so a change in an earlier zone's population shifts
//! later zones' landmarks deterministically. Probed placements never
//! overwrite; pinned ones may.

use crate::types::{GenerationEvent, Shape, Zone};

use super::MAP_WIDTH;
use super::tally::ZoneTallies;

pub(super) struct NameTable {
    slots: [Vec<Option<&'static str>>; Shape::ALL.len()],
}

impl NameTable {
    fn sized(slot_count: usize) -> Self {
        Self { slots: std::array::from_fn(|_| vec![None; slot_count]) }
    }

    pub(super) fn reserved(&self, shape: Shape, slot: usize) -> Option<&'static str> {
        self.slots[shape.slot()].get(slot).copied().flatten()
    }

    /// Writes a name straight into a slot, overwriting whatever was there.
    /// A slot outside the table is reported instead of written.
    fn pin(
        &mut self,
        shape: Shape,
        slot: i32,
        name: &'static str,
        events: &mut Vec<GenerationEvent>,
    ) {
        let slots = &mut self.slots[shape.slot()];
        if slot >= 0 && (slot as usize) < slots.len() {
            slots[slot as usize] = Some(name);
        } else {
            events.push(GenerationEvent::LandmarkUnplaced { name, shape });
        }
    }

    /// Linear-probe placement inside [min_pos, max_pos]: advance past taken
    /// slots, wrap once to min_pos + 1, and give up (with an event) rather
    /// than wrap twice.
    fn place(
        &mut self,
        shape: Shape,
        name: &'static str,
        target: i32,
        min_pos: i32,
        max_pos: i32,
        events: &mut Vec<GenerationEvent>,
    ) {
        if max_pos < min_pos {
            events.push(GenerationEvent::LandmarkUnplaced { name, shape });
            return;
        }
        let slots = &mut self.slots[shape.slot()];
        let mut pos = target;
        let mut wrapped = false;
        loop {
            let free = pos >= 0
                && (pos as usize) < slots.len()
                && slots[pos as usize].is_none();
            if free {
                slots[pos as usize] = Some(name);
                return;
            }
            pos += 1;
            if pos > max_pos {
                if wrapped {
                    events.push(GenerationEvent::LandmarkUnplaced { name, shape });
                    return;
                }
                pos = min_pos + 1;
                wrapped = true;
            }
        }
    }
}

/// Builds the reservation table for a run. Slot capacity scales with the map
/// width and is never smaller than any shape's population plus one.
pub(super) fn build_name_table(
    tallies: &ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) -> NameTable {
    let mut slot_count = 55 * MAP_WIDTH / 20;
    for shape in Shape::ALL {
        slot_count = slot_count.max(tallies.total(shape) as i32 + 1);
    }
    let mut table = NameTable::sized(slot_count as usize);

    reserve_inner_zone(&mut table, tallies, events);
    reserve_middle_zone(&mut table, tallies, events);
    reserve_outer_zone(&mut table, tallies, events);
    table
}

fn frac(fraction: f32, count: u32) -> i32 {
    (fraction * count as f32) as i32
}

fn reserve_inner_zone(
    table: &mut NameTable,
    tallies: &ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) {
    let dead_ends = tallies.count(Zone::Inner, Shape::DeadEnd);
    table.pin(Shape::DeadEnd, 0, "start", events);
    let (min_pos, max_pos) = (1, dead_ends as i32 - 1);
    table.place(Shape::DeadEnd, "roompj", frac(0.1, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "914", frac(0.3, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "room1archive", frac(0.5, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "room205", frac(0.6, dead_ends), min_pos, max_pos, events);

    table.pin(Shape::Corner, 0, "lockroom", events);

    let corridors = tallies.count(Zone::Inner, Shape::Corridor);
    table.pin(Shape::Corridor, 0, "room2closets", events);
    let (min_pos, max_pos) = (1, corridors as i32 - 1);
    table.place(Shape::Corridor, "room2testroom2", frac(0.1, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2scps", frac(0.2, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2storage", frac(0.3, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2gw_b", frac(0.4, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2sl", frac(0.5, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room012", frac(0.55, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2scps2", frac(0.6, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room1123", frac(0.7, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2elevator", frac(0.85, corridors), min_pos, max_pos, events);
}

fn reserve_middle_zone(
    table: &mut NameTable,
    tallies: &ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) {
    let base = tallies.count(Zone::Inner, Shape::DeadEnd) as i32;
    let dead_ends = tallies.count(Zone::Middle, Shape::DeadEnd);
    let (min_pos, max_pos) = (base, base + dead_ends as i32 - 1);
    table.place(Shape::DeadEnd, "room079", base + frac(0.15, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "room106", base + frac(0.3, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "008", base + frac(0.4, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "room035", base + frac(0.5, dead_ends), min_pos, max_pos, events);
    table.place(Shape::DeadEnd, "coffin", base + frac(0.7, dead_ends), min_pos, max_pos, events);

    let base = tallies.count(Zone::Inner, Shape::Corridor) as i32;
    let corridors = tallies.count(Zone::Middle, Shape::Corridor);
    let (min_pos, max_pos) = (base, base + corridors as i32 - 1);
    table.pin(Shape::Corridor, base + frac(0.1, corridors), "room2nuke", events);
    table.place(Shape::Corridor, "room2tunnel", base + frac(0.25, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room049", base + frac(0.4, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2shaft", base + frac(0.6, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "testroom", base + frac(0.7, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2servers", base + frac(0.9, corridors), min_pos, max_pos, events);

    let base = tallies.count(Zone::Inner, Shape::ThreeWay) as i32;
    let three_ways = tallies.count(Zone::Middle, Shape::ThreeWay);
    table.pin(Shape::ThreeWay, base + frac(0.3, three_ways), "room513", events);
    table.pin(Shape::ThreeWay, base + frac(0.6, three_ways), "room966", events);

    let base = tallies.count(Zone::Inner, Shape::Corner) as i32;
    let corners = tallies.count(Zone::Middle, Shape::Corner);
    table.pin(Shape::Corner, base + frac(0.5, corners), "room2cpit", events);
}

fn reserve_outer_zone(
    table: &mut NameTable,
    tallies: &ZoneTallies,
    events: &mut Vec<GenerationEvent>,
) {
    let inner = tallies.count(Zone::Inner, Shape::DeadEnd) as i32;
    let middle = tallies.count(Zone::Middle, Shape::DeadEnd) as i32;
    let total = tallies.total(Shape::DeadEnd) as i32;
    table.pin(Shape::DeadEnd, total - 2, "exit1", events);
    table.pin(Shape::DeadEnd, total - 1, "gateaentrance", events);
    table.pin(Shape::DeadEnd, inner + middle, "room1lifts", events);

    let base =
        (tallies.count(Zone::Inner, Shape::Corridor) + tallies.count(Zone::Middle, Shape::Corridor))
            as i32;
    let corridors = tallies.count(Zone::Outer, Shape::Corridor);
    let (min_pos, max_pos) = (base, base + corridors as i32 - 1);
    table.pin(Shape::Corridor, base + frac(0.1, corridors), "room2poffices", events);
    table.place(Shape::Corridor, "room2cafeteria", base + frac(0.2, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2sroom", base + frac(0.3, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2servers2", base + frac(0.4, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2offices", base + frac(0.45, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2offices4", base + frac(0.5, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room860", base + frac(0.6, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "medibay", base + frac(0.7, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2poffices2", base + frac(0.8, corridors), min_pos, max_pos, events);
    table.place(Shape::Corridor, "room2offices2", base + frac(0.9, corridors), min_pos, max_pos, events);

    let base =
        (tallies.count(Zone::Inner, Shape::Corner) + tallies.count(Zone::Middle, Shape::Corner))
            as i32;
    table.pin(Shape::Corner, base, "room2ccont", events);
    table.pin(Shape::Corner, base + 1, "lockroom2", events);

    let base = (tallies.count(Zone::Inner, Shape::ThreeWay)
        + tallies.count(Zone::Middle, Shape::ThreeWay)) as i32;
    let three_ways = tallies.count(Zone::Outer, Shape::ThreeWay);
    table.pin(Shape::ThreeWay, base + frac(0.3, three_ways), "room3servers", events);
    table.pin(Shape::ThreeWay, base + frac(0.7, three_ways), "room3servers2", events);
    table.pin(Shape::ThreeWay, base + frac(0.5, three_ways), "room3offices", events);
}
