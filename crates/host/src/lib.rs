pub mod announce;
pub mod error;
pub mod register;
pub mod runner;
pub mod script;

pub use announce::ConsoleAnnunciator;
pub use error::HostError;
pub use register::ObservationRegister;
pub use runner::{GuidanceRunner, DEFAULT_TICK_PERIOD};
pub use script::ScriptedSource;
