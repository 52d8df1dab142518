//! Golden-fixture records for full-grid regression comparison.
//!
//! A fixture is the JSON table of one generation run: per cell its name,
//! position, connectivity code, shape, and zone. The regression suite records
//! a fixture the first time a seed is tested and compares exactly thereafter,
//! so the files pin the generator's observable behavior, PRNG draw order
//! included.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mapgen::GeneratedMap;
use crate::types::{Shape, Zone};

/// One cell's worth of persisted generation output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CellRecord {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub connectivity: u8,
    pub shape: Option<Shape>,
    pub zone: Zone,
}

/// Full persisted dump of one generation run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MapFixture {
    pub seed: String,
    pub cells: Vec<CellRecord>,
}

impl MapFixture {
    pub fn capture(map: &GeneratedMap) -> Self {
        let cells = map
            .cells()
            .iter()
            .map(|cell| CellRecord {
                name: cell.name.clone(),
                x: cell.x,
                y: cell.y,
                connectivity: cell.connectivity.code(),
                shape: cell.shape,
                zone: cell.zone,
            })
            .collect();
        Self { seed: map.seed_text.clone(), cells }
    }

    /// First difference between this fixture and a freshly generated map,
    /// described for a test failure message; `None` when they match exactly.
    pub fn first_mismatch(&self, map: &GeneratedMap) -> Option<String> {
        let actual = Self::capture(map);
        if self.seed != actual.seed {
            return Some(format!(
                "seed text mismatch: fixture {:?}, map {:?}",
                self.seed, actual.seed
            ));
        }
        if self.cells.len() != actual.cells.len() {
            return Some(format!(
                "cell count mismatch: fixture {}, map {}",
                self.cells.len(),
                actual.cells.len()
            ));
        }
        for (expected, got) in self.cells.iter().zip(&actual.cells) {
            if expected != got {
                return Some(format!(
                    "cell ({}, {}) mismatch: fixture {expected:?}, map {got:?}",
                    expected.x, expected.y
                ));
            }
        }
        None
    }
}

/// Describes why a fixture file could not be used.
#[derive(Debug)]
pub enum FixtureError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file is not valid fixture JSON.
    InvalidJson { message: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "fixture I/O error: {e}"),
            Self::InvalidJson { message } => write!(f, "invalid fixture JSON: {message}"),
        }
    }
}

impl std::error::Error for FixtureError {}

pub fn load_fixture(path: &Path) -> Result<MapFixture, FixtureError> {
    let content = fs::read_to_string(path).map_err(FixtureError::Io)?;
    serde_json::from_str(&content)
        .map_err(|e| FixtureError::InvalidJson { message: e.to_string() })
}

pub fn write_fixture(path: &Path, fixture: &MapFixture) -> Result<(), FixtureError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(FixtureError::Io)?;
    }
    let json = serde_json::to_string_pretty(fixture)
        .map_err(|e| FixtureError::InvalidJson { message: e.to_string() })?;
    fs::write(path, json + "\n").map_err(FixtureError::Io)
}
