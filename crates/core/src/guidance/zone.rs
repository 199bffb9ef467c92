//! Landing zones
//!
//! Named target positions on the landing pad, distinct from markers. Zone
//! targets are static calibration data loaded once at startup.

use core::fmt;
use core::str::FromStr;

use heapless::Vec;

use crate::pose::{PadPosition, TableError};

/// Maximum number of zones in a target table
pub const MAX_ZONES: usize = 8;

/// Landing zone identity.
///
/// Zones are lettered positions on the pad; the set is fixed by the pad
/// layout and disjoint from marker identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneId {
    A,
    B,
    C,
    D,
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ZoneId::A => "A",
            ZoneId::B => "B",
            ZoneId::C => "C",
            ZoneId::D => "D",
        };
        f.write_str(letter)
    }
}

impl FromStr for ZoneId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(ZoneId::A),
            "B" | "b" => Ok(ZoneId::B),
            "C" | "c" => Ok(ZoneId::C),
            "D" | "d" => Ok(ZoneId::D),
            _ => Err("unknown zone letter"),
        }
    }
}

/// A single zone target entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneTarget {
    /// Zone identity
    pub zone: ZoneId,
    /// Pad-frame x of the zone center, in meters
    pub x: f32,
    /// Pad-frame y of the zone center, in meters
    pub y: f32,
}

/// Zone target table
///
/// Stores zone targets in a fixed-size array. Keys are unique; inserting a
/// duplicate is rejected rather than overwritten.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    entries: Vec<ZoneTarget, MAX_ZONES>,
}

impl ZoneTable {
    /// Create a new empty zone table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The four-zone standard pad used by the reference hardware.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(zone, x, y) in &[
            (ZoneId::A, -0.05715, 0.0),
            (ZoneId::B, 0.0, 0.0508),
            (ZoneId::C, 0.05715, 0.0),
            (ZoneId::D, 0.0, -0.0508),
        ] {
            // Cannot fail on a fresh table
            let _ = table.insert(ZoneTarget { zone, x, y });
        }
        table
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a zone target.
    ///
    /// Returns `Err` if the zone is already present or the table is full.
    pub fn insert(&mut self, entry: ZoneTarget) -> Result<(), TableError> {
        if self.entries.iter().any(|e| e.zone == entry.zone) {
            return Err(TableError::DuplicateKey);
        }
        self.entries
            .push(entry)
            .map_err(|_| TableError::TableFull)
    }

    /// Look up the target position of a zone.
    pub fn target_of(&self, zone: ZoneId) -> Option<PadPosition> {
        self.entries
            .iter()
            .find(|e| e.zone == zone)
            .map(|e| PadPosition::new(e.x, e.y))
    }
}
