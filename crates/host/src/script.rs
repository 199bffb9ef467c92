//! Scripted observation playback
//!
//! Deterministic stand-in for the live tracker: a fixed sequence of
//! per-tick frames, one consumed per `latest()` call. Used by integration
//! tests and demos to replay a flight without real hardware.

use std::cell::Cell;

use pad_pilot_core::pose::RawObservation;
use pad_pilot_core::traits::ObservationSource;

/// Observation source that replays a fixed frame sequence.
///
/// Each call to `latest()` returns the next frame; once the script is
/// exhausted the final frame repeats, matching a tracker that keeps
/// reporting the last thing it saw. `None` frames model ticks with no
/// marker in view.
pub struct ScriptedSource {
    frames: Vec<Option<RawObservation>>,
    cursor: Cell<usize>,
}

impl ScriptedSource {
    /// Create a source replaying the given frames.
    pub fn new(frames: Vec<Option<RawObservation>>) -> Self {
        Self {
            frames,
            cursor: Cell::new(0),
        }
    }

    /// Number of frames consumed so far (capped at the script length).
    pub fn consumed(&self) -> usize {
        self.cursor.get()
    }
}

impl ObservationSource for ScriptedSource {
    fn latest(&self) -> Option<RawObservation> {
        let index = self.cursor.get();
        match self.frames.get(index) {
            Some(frame) => {
                self.cursor.set(index + 1);
                *frame
            }
            // Script exhausted (or empty): hold the final frame
            None => self.frames.last().copied().flatten(),
        }
    }
}
