//! Guidance tick loop
//!
//! The external scheduler of the guidance state machine: pulls the freshest
//! observation, ticks the machine, logs the emitted events, and paces the
//! next tick. Runs until the landing plan completes or a fatal error
//! surfaces.

use std::time::Duration;

use pad_pilot_core::guidance::{Annunciator, GuidanceEvent, GuidanceMachine};
use pad_pilot_core::traits::ObservationSource;

use crate::error::HostError;

/// Default tick period of the reference hardware.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(2);

/// Periodic driver for a [`GuidanceMachine`].
pub struct GuidanceRunner<S> {
    machine: GuidanceMachine,
    source: S,
    tick_period: Duration,
}

impl<S: ObservationSource> GuidanceRunner<S> {
    /// Create a runner with the default tick period.
    pub fn new(machine: GuidanceMachine, source: S) -> Self {
        Self::with_period(machine, source, DEFAULT_TICK_PERIOD)
    }

    /// Create a runner with a custom tick period (zero for tests).
    pub fn with_period(machine: GuidanceMachine, source: S, tick_period: Duration) -> Self {
        Self {
            machine,
            source,
            tick_period,
        }
    }

    /// Access the machine (state inspection, telemetry).
    pub fn machine(&self) -> &GuidanceMachine {
        &self.machine
    }

    /// Run the tick loop until the plan completes.
    ///
    /// Transient pose loss is absorbed by the machine; an unknown marker is
    /// fatal and aborts the loop with an error.
    pub fn run(&mut self, annunciator: &mut dyn Annunciator) -> Result<(), HostError> {
        loop {
            if self.machine.state().is_terminal() {
                return Ok(());
            }

            let observation = self.source.latest();
            log::debug!(
                "tick: state={} observation={}",
                self.machine.state().name(),
                if observation.is_some() { "fresh" } else { "none" },
            );

            let events = self
                .machine
                .tick(observation.as_ref(), annunciator)
                .map_err(HostError::Pose)?;

            for event in &events {
                match event {
                    GuidanceEvent::ZoneSelected(zone) => {
                        log::info!("navigating to zone {}", zone);
                    }
                    GuidanceEvent::ZoneReached(zone) => {
                        log::info!("zone {} reached", zone);
                    }
                    GuidanceEvent::PlanComplete => {
                        log::info!("landing plan complete");
                        return Ok(());
                    }
                }
            }

            if !self.tick_period.is_zero() {
                std::thread::sleep(self.tick_period);
            }
        }
    }
}
