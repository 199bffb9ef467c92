use pad_pilot_core::guidance::ConfigError;
use pad_pilot_core::pose::PoseError;

/// Errors that can occur while running the guidance loop on host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("guidance configuration rejected: {0}")]
    Config(ConfigError),

    #[error("pose resolution failed: {0}")]
    Pose(PoseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for HostError {
    fn from(err: ConfigError) -> Self {
        HostError::Config(err)
    }
}

impl From<PoseError> for HostError {
    fn from(err: PoseError) -> Self {
        HostError::Pose(err)
    }
}
