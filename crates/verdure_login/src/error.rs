//! Login screen error types

use std::path::PathBuf;
use thiserror::Error;
use verdure_platform::PlatformError;

/// Errors raised while configuring or mounting the login screen
///
/// Gesture and keyboard handling never fail; these cover setup only.
#[derive(Error, Debug)]
pub enum LoginError {
    /// The configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::LoginConfig`]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range
    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The animation scheduler was dropped before mount
    #[error("Animation scheduler is not running")]
    SchedulerUnavailable,

    /// Host environment error
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for login screen operations
pub type Result<T> = std::result::Result<T, LoginError>;
