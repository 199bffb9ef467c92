//! Marker offset table
//!
//! Static calibration data mapping each fiducial marker to its fixed 2D
//! offset from the landing-pad center. Loaded once at startup and immutable
//! for the life of the process.

use heapless::Vec;

use super::types::MarkerId;

/// Maximum number of markers in an offset table
pub const MAX_MARKERS: usize = 16;

/// Errors from table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// An entry with the same key is already present
    DuplicateKey,
    /// The table is at capacity
    TableFull,
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::DuplicateKey => write!(f, "duplicate table key"),
            TableError::TableFull => write!(f, "table full"),
        }
    }
}

/// A single marker calibration entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerOffset {
    /// Marker identity
    pub marker: MarkerId,
    /// Pad-frame x offset of the marker, in meters
    pub dx: f32,
    /// Pad-frame y offset of the marker, in meters
    pub dy: f32,
}

/// Marker offset table
///
/// Stores marker calibration entries in a fixed-size array. Keys are unique;
/// inserting a duplicate is rejected rather than overwritten.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    entries: Vec<MarkerOffset, MAX_MARKERS>,
}

impl MarkerTable {
    /// Create a new empty marker table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The five-marker standard pad used by the reference hardware.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(id, dx, dy) in &[
            (0, -0.05715, 0.0508),
            (1, -0.05715, -0.0508),
            (2, 0.05715, -0.0508),
            (3, 0.05715, 0.0508),
            (4, 0.0, 0.0),
        ] {
            // Cannot fail on a fresh table
            let _ = table.insert(MarkerOffset {
                marker: MarkerId(id),
                dx,
                dy,
            });
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

    /// Add a calibration entry.
    ///
    /// Returns `Err` if the marker is already present or the table is full.
    pub fn insert(&mut self, entry: MarkerOffset) -> Result<(), TableError> {
        if self.contains(entry.marker) {
            return Err(TableError::DuplicateKey);
        }
        self.entries
            .push(entry)
            .map_err(|_| TableError::TableFull)
    }

    /// Look up the pad-frame offset of a marker.
    pub fn offset_of(&self, marker: MarkerId) -> Option<(f32, f32)> {
        self.entries
            .iter()
            .find(|e| e.marker == marker)
            .map(|e| (e.dx, e.dy))
    }

    /// Check whether a marker has a calibration entry.
    pub fn contains(&self, marker: MarkerId) -> bool {
        self.entries.iter().any(|e| e.marker == marker)
    }
}
