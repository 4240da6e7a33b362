//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Screen dimensions must be positive and finite
    #[error("Invalid screen size: {width}x{height}")]
    InvalidScreenSize {
        /// Reported width
        width: f32,
        /// Reported height
        height: f32,
    },

    /// The event loop could not run
    #[error("Event loop failed: {0}")]
    EventLoop(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
