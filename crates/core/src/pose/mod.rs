//! Marker observations and pose resolution
//!
//! This module contains the types flowing in from the fiducial tracker and
//! the resolver that turns a raw marker sighting into a vehicle position in
//! the landing-pad frame.
//!
//! # Frames
//!
//! - **Camera frame**: raw translation of the vehicle camera relative to the
//!   sighted marker, as delivered by the tracker
//! - **Pad frame**: 2D coordinates centered on the landing pad; every marker
//!   has a known fixed offset in this frame

mod resolver;
mod table;
mod types;

pub use resolver::{resolve, PoseError};
pub use table::{MarkerOffset, MarkerTable, TableError, MAX_MARKERS};
pub use types::{CameraTranslation, MarkerId, PadPosition, RawObservation};
