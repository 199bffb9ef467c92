//! Observation source abstraction
//!
//! The seam between the asynchronous marker tracker and the synchronous
//! guidance tick.

use crate::pose::RawObservation;

/// Single-slot pull interface for the freshest marker sighting.
///
/// The producer overwrites the slot on every sighting (last-write-wins, no
/// queuing) and clears it when the marker leaves view. The guidance loop
/// calls [`latest`](Self::latest) exactly once per tick and therefore only
/// ever sees the most recent observation, never a backlog.
pub trait ObservationSource {
    /// The freshest observation, or `None` when no marker is in view.
    fn latest(&self) -> Option<RawObservation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::MarkerId;

    struct FixedSource(Option<RawObservation>);

    impl ObservationSource for FixedSource {
        fn latest(&self) -> Option<RawObservation> {
            self.0
        }
    }

    #[test]
    fn test_source_returns_slot_contents() {
        let empty = FixedSource(None);
        assert!(empty.latest().is_none());

        let obs = RawObservation::new(MarkerId(4), 0.0, 0.0, 0.2);
        let full = FixedSource(Some(obs));
        assert_eq!(full.latest(), Some(obs));
    }
}
