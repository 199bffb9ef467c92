//! Annunciator trait and guidance event types
//!
//! Defines the contract between the guidance state machine and the output
//! channel that renders cues, plus the events the machine reports back to
//! its host each tick.

use super::cue::Cue;
use super::zone::ZoneId;

/// Maximum guidance events emitted per tick.
pub const MAX_GUIDANCE_EVENTS: usize = 4;

/// Events emitted by the state machine for host-side coordination.
///
/// Events are informational (logging, telemetry, shutdown); all actuation
/// flows through [`Annunciator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuidanceEvent {
    /// The next landing zone was selected as the active target
    ZoneSelected(ZoneId),
    /// Touchdown completed on a zone
    ZoneReached(ZoneId),
    /// Plan exhausted; the host should stop the tick loop
    PlanComplete,
}

/// Announcement channel the state machine drives.
///
/// Implementations render each cue as an audible or logged phrase and may
/// block for up to about a second while the cue plays. A failed announcement
/// must never stall guidance: the machine ignores the error and the
/// implementation is expected to log it.
pub trait Annunciator {
    /// Render one cue.
    fn announce(&mut self, cue: Cue) -> Result<(), &'static str>;

    /// Scoped delay between cues of a sub-sequence (e.g. letting the vehicle
    /// drop after "Move down"). Hosts decide whether this blocks the tick
    /// thread or hands off; the machine's correctness does not depend on it.
    fn settle(&mut self, duration_ms: u32);
}
