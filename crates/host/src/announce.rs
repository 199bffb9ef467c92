//! Console annunciator
//!
//! Renders cues as log lines. Stands in for the audio backend; the hold
//! duration models the time a spoken cue takes to play so consecutive cues
//! do not overlap.

use std::time::Duration;

use pad_pilot_core::guidance::{Annunciator, Cue};

/// Annunciator that logs each cue phrase and paces playback with sleeps.
pub struct ConsoleAnnunciator {
    /// Time to hold after each cue while it "plays" (audio backends take up
    /// to about a second per phrase)
    cue_hold: Duration,
}

impl ConsoleAnnunciator {
    /// Create an annunciator with the default 1 s cue hold.
    pub fn new() -> Self {
        Self {
            cue_hold: Duration::from_secs(1),
        }
    }

    /// Create an annunciator with a custom cue hold (zero for tests).
    pub fn with_hold(cue_hold: Duration) -> Self {
        Self { cue_hold }
    }
}

impl Default for ConsoleAnnunciator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annunciator for ConsoleAnnunciator {
    fn announce(&mut self, cue: Cue) -> Result<(), &'static str> {
        log::info!("announce: {}", cue);
        if !self.cue_hold.is_zero() {
            std::thread::sleep(self.cue_hold);
        }
        Ok(())
    }

    fn settle(&mut self, duration_ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }
}
