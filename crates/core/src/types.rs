use std::fmt;

use serde::{Deserialize, Serialize};

/// Junction shape of an occupied cell, derived from its 4-neighbor occupancy
/// degree. Corridors and corners share a degree of two and differ only by
/// whether their open sides lie on the same axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    DeadEnd,
    Corridor,
    Corner,
    ThreeWay,
    FourWay,
}

impl Shape {
    pub const ALL: [Shape; 5] =
        [Shape::DeadEnd, Shape::Corridor, Shape::Corner, Shape::ThreeWay, Shape::FourWay];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Asset name a spawner falls back to when no landmark slot is reserved
    /// for the cell.
    pub fn generic_name(self) -> &'static str {
        match self {
            Shape::DeadEnd => "room1",
            Shape::Corridor => "room2",
            Shape::Corner => "room2c",
            Shape::ThreeWay => "room3",
            Shape::FourWay => "room4",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Shape::DeadEnd => "dead-end",
            Shape::Corridor => "corridor",
            Shape::Corner => "corner",
            Shape::ThreeWay => "three-way",
            Shape::FourWay => "four-way",
        };
        f.write_str(label)
    }
}

/// Zone label of a cell. The three bands partition the grid's rows; `None` is
/// reserved for the off-grid special rooms written outside the carve region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    None,
    Outer,
    Middle,
    Inner,
}

impl Zone {
    /// Band iteration order used by the correction and naming passes: the
    /// inner zone is always handled first.
    pub const BANDS: [Zone; 3] = [Zone::Inner, Zone::Middle, Zone::Outer];

    pub(crate) fn band(self) -> Option<usize> {
        match self {
            Zone::None => None,
            Zone::Inner => Some(0),
            Zone::Middle => Some(1),
            Zone::Outer => Some(2),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Zone::None => "none",
            Zone::Outer => "outer",
            Zone::Middle => "middle",
            Zone::Inner => "inner",
        };
        f.write_str(label)
    }
}

/// Connectivity of a cell: empty, part of the corridor network with a stored
/// neighbor degree, or a checkpoint forced onto a zone-band boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Empty,
    Linked(u8),
    Checkpoint,
}

impl Connectivity {
    /// 1 if the cell participates in the corridor network, else 0.
    pub fn occupancy(self) -> u8 {
        match self {
            Connectivity::Empty => 0,
            Connectivity::Linked(_) | Connectivity::Checkpoint => 1,
        }
    }

    /// Numeric code as written to dumps and fixtures: 0 empty, 1..=4 linked
    /// degree, 255 checkpoint.
    pub fn code(self) -> u8 {
        match self {
            Connectivity::Empty => 0,
            Connectivity::Linked(degree) => degree,
            Connectivity::Checkpoint => 255,
        }
    }
}

/// Placement rotation of a room, clockwise in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

/// Soft failures surfaced by a generation run. None of these abort the run;
/// the caller always receives a fully formed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationEvent {
    DeadEndQuotaMissed { zone: Zone, missing: u32 },
    FourWayQuotaMissed { zone: Zone },
    CornerPairQuotaMissed { zone: Zone },
    LandmarkUnplaced { name: &'static str, shape: Shape },
}

impl fmt::Display for GenerationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadEndQuotaMissed { zone, missing } => {
                write!(f, "dead-end quota missed in {zone} zone ({missing} short)")
            }
            Self::FourWayQuotaMissed { zone } => {
                write!(f, "four-way quota missed in {zone} zone")
            }
            Self::CornerPairQuotaMissed { zone } => {
                write!(f, "corner-pair quota missed in {zone} zone")
            }
            Self::LandmarkUnplaced { name, shape } => {
                write!(f, "landmark {name} could not be placed ({shape})")
            }
        }
    }
}
