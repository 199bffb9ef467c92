//! Guidance state machine
//!
//! Tick-driven state machine that walks the vehicle through an ordered plan
//! of landing zones using resolved marker poses, emitting coarse movement
//! cues through an [`Annunciator`].
//!
//! # Lifecycle
//!
//! 1. `Start`: wait for the first marker sighting
//! 2. `SelectZone`: pick the next zone from the plan (or finish)
//! 3. `Ascend`: climb until the pad is fully in view
//! 4. `CorrectX` / `CorrectY`: step the vehicle over the zone target
//! 5. `Descend`: drop one stage, then re-check alignment
//! 6. `Landed`: terminal, plan exhausted
//!
//! One tick processes exactly one state; the external scheduler decides the
//! tick period.

mod annunciator;
mod cue;
mod machine;
mod state;
mod zone;

pub use annunciator::{Annunciator, GuidanceEvent, MAX_GUIDANCE_EVENTS};
pub use cue::Cue;
pub use machine::{ConfigError, GuidanceMachine};
pub use state::GuidanceState;
pub use zone::{ZoneId, ZoneTable, ZoneTarget, MAX_ZONES};

/// Vertical clearance (meters) the vehicle must reach before horizontal
/// correction begins.
pub const ASCENT_CLEARANCE_M: f32 = 0.1;

/// Per-axis arrival tolerance (meters). Strict: a delta exactly at the
/// tolerance has not arrived.
pub const AXIS_TOLERANCE_M: f32 = 0.0125;

/// Settle time after commanding a descent stage, letting the vehicle drop
/// before the next cue.
pub const DESCENT_SETTLE_MS: u32 = 3000;

/// Settle time after announcing touchdown, before replanning for the next
/// zone.
pub const TOUCHDOWN_SETTLE_MS: u32 = 3000;

/// Maximum number of zones in a landing plan
pub const MAX_PLAN_ZONES: usize = 16;
