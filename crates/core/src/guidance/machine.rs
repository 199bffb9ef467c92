//! Guidance machine
//!
//! Tick-driven state machine that owns the landing plan, the current pose
//! estimate, and the descent pass counter. Each tick consumes the freshest
//! observation (or its absence), advances at most one state, and drives the
//! announcer. The machine never blocks except through
//! [`Annunciator`] calls.

use heapless::Vec;
use libm::fabsf;

use crate::pose::{resolve, MarkerTable, PadPosition, PoseError, RawObservation};

use super::annunciator::{Annunciator, GuidanceEvent, MAX_GUIDANCE_EVENTS};
use super::cue::Cue;
use super::state::GuidanceState;
use super::zone::{ZoneId, ZoneTable};
use super::{
    ASCENT_CLEARANCE_M, AXIS_TOLERANCE_M, DESCENT_SETTLE_MS, MAX_PLAN_ZONES, TOUCHDOWN_SETTLE_MS,
};

/// Errors from machine construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The marker offset table has no entries
    EmptyMarkerTable,
    /// A planned zone has no entry in the zone target table
    UnknownZone(ZoneId),
    /// The landing plan exceeds [`MAX_PLAN_ZONES`]
    PlanTooLong,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyMarkerTable => write!(f, "marker offset table is empty"),
            ConfigError::UnknownZone(zone) => {
                write!(f, "no target entry for zone {}", zone)
            }
            ConfigError::PlanTooLong => {
                write!(f, "landing plan exceeds {} zones", MAX_PLAN_ZONES)
            }
        }
    }
}

/// A plan entry with its target pre-resolved at construction.
#[derive(Debug, Clone, Copy)]
struct PlannedZone {
    id: ZoneId,
    target: PadPosition,
}

/// Guidance state machine.
///
/// Owns:
/// - the current [`GuidanceState`]
/// - the marker offset table used for pose resolution
/// - the landing plan, consumed front-to-back by a monotone index
/// - the latest resolved pose (informational; never substituted for a
///   missing observation)
///
/// Does not know about the ingestion transport, the audio backend, or the
/// tick scheduler; those are injected per tick.
pub struct GuidanceMachine {
    state: GuidanceState,
    markers: MarkerTable,
    plan: Vec<PlannedZone, MAX_PLAN_ZONES>,
    next_zone: u16,
    current: Option<PadPosition>,
    last_cue: Option<Cue>,
}

impl GuidanceMachine {
    /// Create a new machine in the `Start` state.
    ///
    /// Every planned zone is resolved against the zone table up front;
    /// an unknown zone is a configuration error here rather than a silent
    /// `(0, 0)` target later.
    pub fn new(
        markers: MarkerTable,
        zones: &ZoneTable,
        plan: &[ZoneId],
    ) -> Result<Self, ConfigError> {
        if markers.is_empty() {
            return Err(ConfigError::EmptyMarkerTable);
        }

        let mut planned: Vec<PlannedZone, MAX_PLAN_ZONES> = Vec::new();
        for &id in plan {
            let target = zones.target_of(id).ok_or(ConfigError::UnknownZone(id))?;
            planned
                .push(PlannedZone { id, target })
                .map_err(|_| ConfigError::PlanTooLong)?;
        }

        Ok(Self {
            state: GuidanceState::Start,
            markers,
            plan: planned,
            next_zone: 0,
            current: None,
            last_cue: None,
        })
    }

    /// Get the current state.
    pub fn state(&self) -> &GuidanceState {
        &self.state
    }

    /// Get the latest resolved pose, if any tick has resolved one.
    pub fn current_pose(&self) -> Option<PadPosition> {
        self.current
    }

    /// Index of the next plan entry to be selected. Monotonically
    /// non-decreasing, bounded by [`plan_len`](Self::plan_len).
    pub fn next_zone_index(&self) -> u16 {
        self.next_zone
    }

    /// Number of zones in the landing plan.
    pub fn plan_len(&self) -> u16 {
        self.plan.len() as u16
    }

    /// Main tick: advance at most one state and drive the announcer.
    ///
    /// `observation` is the freshest sighting at tick time, or `None` when
    /// no marker is in view. Absence is transient and absorbed here; the
    /// machine holds position and repeats its guidance. An unknown marker
    /// is a configuration error and aborts the tick.
    pub fn tick(
        &mut self,
        observation: Option<&RawObservation>,
        annunciator: &mut dyn Annunciator,
    ) -> Result<Vec<GuidanceEvent, MAX_GUIDANCE_EVENTS>, PoseError> {
        let mut events = Vec::new();

        match self.state {
            GuidanceState::Start => match observation {
                Some(obs) => {
                    self.current = Some(resolve(obs, &self.markers)?);
                    self.state = GuidanceState::SelectZone;
                }
                None => self.say(annunciator, Cue::NoTags),
            },

            GuidanceState::SelectZone => {
                match self.plan.get(self.next_zone as usize).copied() {
                    Some(next) => {
                        let _ = events.push(GuidanceEvent::ZoneSelected(next.id));
                        self.state = GuidanceState::Ascend {
                            zone: next.id,
                            target: next.target,
                        };
                    }
                    None => {
                        self.say(annunciator, Cue::Finished);
                        let _ = events.push(GuidanceEvent::PlanComplete);
                        self.state = GuidanceState::Landed;
                    }
                }
            }

            GuidanceState::Ascend { zone, target } => match observation {
                Some(obs) if obs.translation.z > ASCENT_CLEARANCE_M => {
                    self.state = GuidanceState::CorrectX {
                        zone,
                        target,
                        descents: 0,
                    };
                }
                _ => self.say(annunciator, Cue::MoveUp),
            },

            GuidanceState::CorrectX {
                zone,
                target,
                descents,
            } => {
                let obs = match observation {
                    Some(obs) => obs,
                    None => {
                        self.reannounce(annunciator);
                        return Ok(events);
                    }
                };
                let pose = resolve(obs, &self.markers)?;
                self.current = Some(pose);

                if descents > 0 {
                    // Second pass over the zone: land instead of correcting.
                    self.say(annunciator, Cue::MoveDown);
                    annunciator.settle(DESCENT_SETTLE_MS);
                    self.say(annunciator, Cue::Landed);
                    let _ = events.push(GuidanceEvent::ZoneReached(zone));
                    self.next_zone += 1;
                    annunciator.settle(TOUCHDOWN_SETTLE_MS);
                    self.state = GuidanceState::SelectZone;
                    return Ok(events);
                }

                // Tie goes to the negative direction
                let cue = if pose.x < target.x {
                    Cue::MoveRight
                } else {
                    Cue::MoveLeft
                };
                self.say(annunciator, cue);

                if fabsf(pose.x - target.x) < AXIS_TOLERANCE_M {
                    self.state = GuidanceState::CorrectY {
                        zone,
                        target,
                        descents,
                    };
                }
            }

            GuidanceState::CorrectY {
                zone,
                target,
                descents,
            } => {
                let obs = match observation {
                    Some(obs) => obs,
                    None => {
                        self.reannounce(annunciator);
                        return Ok(events);
                    }
                };
                let pose = resolve(obs, &self.markers)?;
                self.current = Some(pose);

                let cue = if pose.y < target.y {
                    Cue::MoveForwards
                } else {
                    Cue::MoveBackwards
                };
                self.say(annunciator, cue);

                if fabsf(pose.y - target.y) < AXIS_TOLERANCE_M {
                    self.state = GuidanceState::Descend {
                        zone,
                        target,
                        descents,
                    };
                }
            }

            GuidanceState::Descend {
                zone,
                target,
                descents,
            } => {
                self.say(annunciator, Cue::MoveDown);
                annunciator.settle(DESCENT_SETTLE_MS);
                self.say(annunciator, Cue::Stop);
                self.state = GuidanceState::CorrectX {
                    zone,
                    target,
                    descents: descents + 1,
                };
            }

            // Terminal; "Finished" was announced on entry
            GuidanceState::Landed => {}
        }

        Ok(events)
    }

    /// Announce a cue and remember it for re-announcement under pose loss.
    /// Announcer failures must not stall guidance.
    fn say(&mut self, annunciator: &mut dyn Annunciator, cue: Cue) {
        let _ = annunciator.announce(cue);
        self.last_cue = Some(cue);
    }

    /// Repeat the most recent cue while no observation is available.
    fn reannounce(&mut self, annunciator: &mut dyn Annunciator) {
        if let Some(cue) = self.last_cue {
            let _ = annunciator.announce(cue);
        }
    }
}
