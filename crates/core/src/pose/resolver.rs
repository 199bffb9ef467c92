//! Pose resolver
//!
//! Pure function turning a raw marker sighting into the vehicle's estimated
//! position in the landing-pad frame.

use super::table::MarkerTable;
use super::types::{MarkerId, PadPosition, RawObservation};

/// Errors from pose resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseError {
    /// The sighted marker has no calibration entry. This is a configuration
    /// error, not a transient condition: guessing an offset would silently
    /// misplace the vehicle, so resolution halts instead.
    UnknownMarker(MarkerId),
}

impl core::fmt::Display for PoseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PoseError::UnknownMarker(marker) => {
                write!(f, "no offset entry for {}", marker)
            }
        }
    }
}

/// Resolve a marker sighting into a pad-frame position.
///
/// The camera x axis is mirrored relative to the pad frame, so the x
/// component is negated before the marker offset is applied. This is a fixed
/// property of the camera mounting, not a tunable.
///
/// Pure function of its inputs; an absent observation is represented by the
/// caller holding `None` and never reaches this function.
pub fn resolve(
    observation: &RawObservation,
    markers: &MarkerTable,
) -> Result<PadPosition, PoseError> {
    let (dx, dy) = markers
        .offset_of(observation.marker)
        .ok_or(PoseError::UnknownMarker(observation.marker))?;

    Ok(PadPosition::new(
        -observation.translation.x + dx,
        observation.translation.y + dy,
    ))
}
