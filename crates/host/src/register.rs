//! Single-slot observation register
//!
//! The concurrency boundary between the marker tracker (writer) and the
//! guidance tick (reader). Last-write-wins: the slot holds only the freshest
//! sighting, never a backlog.

use std::sync::{Arc, Mutex, PoisonError};

use pad_pilot_core::pose::RawObservation;
use pad_pilot_core::traits::ObservationSource;

/// Shared single-slot register for the latest marker sighting.
///
/// Clone handles share the same slot. Writers call [`publish`] on every
/// sighting and [`clear`] when the marker leaves view; the guidance loop
/// reads through [`ObservationSource::latest`] once per tick.
///
/// [`publish`]: Self::publish
/// [`clear`]: Self::clear
#[derive(Clone, Default)]
pub struct ObservationRegister {
    slot: Arc<Mutex<Option<RawObservation>>>,
}

impl ObservationRegister {
    /// Create a new empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with a fresh sighting.
    pub fn publish(&self, observation: RawObservation) {
        *self.lock() = Some(observation);
    }

    /// Empty the slot (no marker in view).
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<RawObservation>> {
        // The slot holds plain Copy data; a publisher that panicked mid-write
        // cannot have left it inconsistent, so a poisoned lock is recovered.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ObservationSource for ObservationRegister {
    fn latest(&self) -> Option<RawObservation> {
        *self.lock()
    }
}
