//! Platform-agnostic trait abstractions
//!
//! Services the guidance loop depends on are injected via traits so the
//! core logic can be exercised on host without the real transport.

mod observation;

pub use observation::ObservationSource;
