//! Engine error types

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error returned by caller-supplied slot callbacks
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised inside a render slot
///
/// The engine never inspects, wraps or retries it: `Display` and `source()`
/// are those of the caller's error, and `into_inner` hands it back as-is.
pub struct RenderError(BoxError);

impl RenderError {
    /// Wrap a caller error
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self(error.into())
    }

    /// Create from a message
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }

    /// Borrow the caller's error downcast to a concrete type
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Take back the caller's error
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl fmt::Debug for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for RenderError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Configuration text could not be parsed
    #[error("Invalid control configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// An explicit id is already held by a mounted instance
    #[error("Instance id already mounted: {0}")]
    DuplicateId(String),

    /// An attribute name is owned by the engine
    #[error("Attribute name is reserved: {0}")]
    ReservedAttribute(String),

    /// A typed attribute was given a value it does not accept
    #[error("Invalid value for attribute {name}: {value}")]
    InvalidAttribute { name: String, value: String },

    /// A render slot failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ComposeError>;
