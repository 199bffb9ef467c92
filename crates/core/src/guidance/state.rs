//! Guidance state types
//!
//! One tagged variant per state, carrying only the data meaningful in that
//! state. The descent pass counter exists only during the X/descend cycle,
//! so an inconsistent combination (e.g. a pass count while ascending a new
//! zone) cannot be represented.

use crate::pose::PadPosition;

use super::zone::ZoneId;

/// Guidance state
///
/// Exactly one state is active at a time; transitions happen only inside
/// `GuidanceMachine::tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidanceState {
    /// Waiting for the first marker sighting
    Start,
    /// Picking the next zone from the plan
    SelectZone,
    /// Climbing until the pad is fully in view
    Ascend {
        /// Active zone
        zone: ZoneId,
        /// Pad-frame target of the active zone
        target: PadPosition,
    },
    /// Stepping the vehicle along the pad x axis
    CorrectX {
        zone: ZoneId,
        target: PadPosition,
        /// Completed descent stages since this zone was selected
        descents: u8,
    },
    /// Stepping the vehicle along the pad y axis
    CorrectY {
        zone: ZoneId,
        target: PadPosition,
        descents: u8,
    },
    /// Dropping one descent stage
    Descend {
        zone: ZoneId,
        target: PadPosition,
        descents: u8,
    },
    /// Terminal: plan exhausted
    Landed,
}

impl GuidanceState {
    /// State name for logging and telemetry
    pub fn name(&self) -> &'static str {
        match self {
            GuidanceState::Start => "Start",
            GuidanceState::SelectZone => "SelectZone",
            GuidanceState::Ascend { .. } => "Ascend",
            GuidanceState::CorrectX { .. } => "CorrectX",
            GuidanceState::CorrectY { .. } => "CorrectY",
            GuidanceState::Descend { .. } => "Descend",
            GuidanceState::Landed => "Landed",
        }
    }

    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuidanceState::Landed)
    }
}
