//! presskit Platform Layer
//!
//! Platform-native event shapes consumed by the presskit engine.
//!
//! # Event Model
//!
//! A control can be driven from three modalities, each with its own payload:
//!
//! - [`ClickEvent`] - pointer click (desktop browser, desktop window)
//! - [`TouchEndEvent`] - finger lifted (mobile browser)
//! - [`PressEvent`] - gesture-responder press (native mobile view)
//!
//! [`InteractionEvent`] tags them with a discriminable [`EventKind`] without
//! flattening the payloads into one type. [`Surface`] describes which kinds a
//! host emits for a single tap.
//!
//! # Example
//!
//! ```rust
//! use presskit_platform::*;
//!
//! let event: InteractionEvent = ClickEvent::new(10.0, 4.0).into();
//! assert_eq!(event.kind(), EventKind::Click);
//! assert_eq!(event.kind().to_string(), "click");
//! ```

mod error;
mod event;
mod input;
mod surface;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{EventKind, InteractionEvent};
pub use input::{ClickEvent, Modifiers, MouseButton, PressEvent, TouchEndEvent, TouchPoint};
pub use surface::Surface;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{EventKind, InteractionEvent};
    pub use crate::input::{
        ClickEvent, Modifiers, MouseButton, PressEvent, TouchEndEvent, TouchPoint,
    };
    pub use crate::surface::Surface;
}
