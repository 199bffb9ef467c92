//! Guidance cues
//!
//! The fixed set of directive phrases handed to the announcer.

use core::fmt;

/// A discrete movement directive.
///
/// Each cue maps to one spoken (or logged) phrase. The phrases are fixed;
/// the announcer decides how to render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// No marker currently in view
    NoTags,
    /// Climb until the pad is in view
    MoveUp,
    /// Step toward positive pad x
    MoveRight,
    /// Step toward negative pad x
    MoveLeft,
    /// Step toward positive pad y
    MoveForwards,
    /// Step toward negative pad y
    MoveBackwards,
    /// Drop one descent stage
    MoveDown,
    /// Hold position after a descent stage
    Stop,
    /// Touchdown on the current zone
    Landed,
    /// Plan exhausted, shut down
    Finished,
}

impl Cue {
    /// The announcer phrase for this cue.
    pub fn phrase(&self) -> &'static str {
        match self {
            Cue::NoTags => "No tags",
            Cue::MoveUp => "Move up",
            Cue::MoveRight => "Move right",
            Cue::MoveLeft => "Move left",
            Cue::MoveForwards => "Move forwards",
            Cue::MoveBackwards => "Move backwards",
            Cue::MoveDown => "Move down",
            Cue::Stop => "Stop",
            Cue::Landed => "Landed",
            Cue::Finished => "Finished",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
