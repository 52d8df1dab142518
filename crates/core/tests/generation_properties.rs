use std::collections::{HashSet, VecDeque};

use core::{
    Connectivity, GeneratedMap, GenerationEvent, MAP_HEIGHT, MAP_WIDTH, Shape, Zone, ZoneTallies,
    generate_map, zone_of_row,
};

const SEEDS: [&str; 5] = ["MyMap", "d9341", "DONTBLINK", "JORGE", "dirtymetal"];

/// Generic placeholder names may repeat freely; everything else must not.
const GENERIC_NAMES: [&str; 5] = ["room1", "room2", "room2c", "room3", "room4"];

fn occupied(map: &GeneratedMap, x: i32, y: i32) -> bool {
    map.cell(x, y).connectivity.occupancy() > 0
}

fn start_reaches_top_row(map: &GeneratedMap) -> bool {
    let start = (MAP_WIDTH / 2, MAP_HEIGHT - 2);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        if !seen.insert((x, y)) {
            continue;
        }
        if y == 1 {
            return true;
        }
        for (next_x, next_y) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if occupied(map, next_x, next_y) && !seen.contains(&(next_x, next_y)) {
                queue.push_back((next_x, next_y));
            }
        }
    }
    false
}

#[test]
fn test_carved_network_connects_the_start_to_the_top_row() {
    for seed in SEEDS {
        let map = generate_map(seed);
        assert!(occupied(&map, MAP_WIDTH / 2, MAP_HEIGHT - 2), "start cell missing for {seed}");
        assert!(start_reaches_top_row(&map), "no 4-connected path to row 1 for seed {seed}");
        for y in 1..MAP_HEIGHT {
            assert!(
                (0..=MAP_WIDTH).any(|x| occupied(&map, x, y)),
                "row {y} holds no rooms for seed {seed}"
            );
        }
    }
}

#[test]
fn test_rare_shape_quotas_are_met_or_reported() {
    for seed in SEEDS {
        let map = generate_map(seed);
        for zone in Zone::BANDS {
            let dead_end_missed = map.events.iter().any(|event| {
                matches!(
                    event,
                    GenerationEvent::DeadEndQuotaMissed { zone: missed, .. } if *missed == zone
                )
            });
            if !dead_end_missed {
                assert!(
                    map.tallies.count(zone, Shape::DeadEnd) >= 5,
                    "{zone} zone under five dead-ends without a quota event for seed {seed}"
                );
            }

            let four_way_missed =
                map.events.contains(&GenerationEvent::FourWayQuotaMissed { zone });
            if !four_way_missed {
                assert!(
                    map.tallies.count(zone, Shape::FourWay) >= 1,
                    "{zone} zone has no four-way without a quota event for seed {seed}"
                );
            }

            let corner_missed =
                map.events.contains(&GenerationEvent::CornerPairQuotaMissed { zone });
            if !corner_missed {
                assert!(
                    map.tallies.count(zone, Shape::Corner) >= 1,
                    "{zone} zone has no corner without a quota event for seed {seed}"
                );
            }
        }
    }
}

#[test]
fn test_tallies_match_a_full_recount_after_generation() {
    for seed in SEEDS {
        let map = generate_map(seed);
        assert_eq!(
            ZoneTallies::recount(map.cells()),
            map.tallies,
            "stored tallies drifted from the grid population for seed {seed}"
        );
    }
}

#[test]
fn test_landmark_names_are_assigned_at_most_once() {
    for seed in SEEDS {
        let map = generate_map(seed);
        let mut seen = HashSet::new();
        for cell in map.cells() {
            if cell.name.is_empty()
                || GENERIC_NAMES.contains(&cell.name.as_str())
                || cell.name.starts_with("checkpoint")
            {
                continue;
            }
            assert!(
                seen.insert(cell.name.clone()),
                "landmark {} placed twice for seed {seed}",
                cell.name
            );
        }
    }
}

#[test]
fn test_checkpoints_sit_on_band_boundaries_with_fixed_names() {
    for seed in SEEDS {
        let map = generate_map(seed);
        for cell in map.cells() {
            if cell.connectivity != Connectivity::Checkpoint {
                continue;
            }
            assert_ne!(
                zone_of_row(cell.y),
                zone_of_row(cell.y + 1),
                "checkpoint off a band boundary at ({}, {}) for seed {seed}",
                cell.x,
                cell.y
            );
            let expected =
                if zone_of_row(cell.y + 1) == Zone::Inner { "checkpoint1" } else { "checkpoint2" };
            assert_eq!(cell.name, expected, "checkpoint misnamed for seed {seed}");
            assert_eq!(cell.shape, Some(Shape::ThreeWay));
        }
    }
}

#[test]
fn test_off_grid_special_rooms_are_always_present() {
    for seed in SEEDS {
        let map = generate_map(seed);
        for (x, y, name) in [
            (MAP_WIDTH - 1, 1, "gatea"),
            (MAP_WIDTH - 1, MAP_HEIGHT - 1, "pocketdimension"),
            (1, 0, "dimension1499"),
        ] {
            let view = map.cell(x, y);
            assert_eq!(view.name, name, "missing special room for seed {seed}");
            assert_eq!(view.zone, Zone::None);
            assert_eq!(view.shape, Some(Shape::DeadEnd));
        }
    }
}

#[test]
fn test_boundary_reads_never_panic_and_return_defaults() {
    let map = generate_map("MyMap");

    // In range but never carved.
    for (x, y) in [(0, 0), (MAP_WIDTH, MAP_HEIGHT)] {
        let view = map.cell(x, y);
        assert_eq!(view.connectivity, Connectivity::Empty);
        assert_eq!(view.name, "");
    }

    // Far out of range.
    for (x, y) in [(-1, 5), (MAP_WIDTH + 1, 5), (5, -20), (MAP_WIDTH * 4, MAP_HEIGHT * 4)] {
        let view = map.cell(x, y);
        assert_eq!(view.connectivity, Connectivity::Empty);
        assert_eq!(view.zone, Zone::None);
        assert_eq!(view.shape, None);
        assert_eq!(view.name, "");
    }
}
