//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// An event kind name did not match any known interaction kind
    #[error("Unknown event kind: {0}")]
    UnknownEventKind(String),

    /// A surface name did not match any known host surface
    #[error("Unsupported surface: {0}")]
    UnsupportedSurface(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
