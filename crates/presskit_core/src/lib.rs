//! # presskit core
//!
//! A headless button engine. One button definition renders the same way on
//! a pointer surface (click), a touch browser (touch end) and a native view
//! (press); all markup stays with the caller.
//!
//! ## Architecture
//!
//! - **Identity** ([`key`]): an explicit [`IdAllocator`] hands each mounted
//!   control an [`IdLease`]. The id is stable across re-renders and released
//!   on unmount.
//! - **Gating** ([`gate`]): a control is interactive only while neither
//!   disabled nor loading.
//! - **Events** ([`events`]): the caller's callbacks become gated handlers,
//!   one per subscribed kind.
//! - **Slots** ([`slots`]): icon, main and container render functions are
//!   composed into the final output, sharing one [`ChildProps`] contract.
//!
//! The output type is generic. [`tree::Node`] is a small reference tree used
//! by the test suite and by renderers that do not bring their own.
//!
//! ## Example
//!
//! ```rust
//! use presskit_core::prelude::*;
//!
//! let allocator = IdAllocator::new();
//! let button = Button::mount(&allocator);
//!
//! let out = button
//!     .render(
//!         ButtonProps::<Node>::new()
//!             .disabled(true)
//!             .button_type(ButtonType::Submit)
//!             .text("Pay")
//!             .on_click(|_| unreachable!("gated"))
//!             .render_main(|props| Element::new("button").spread(props).into()),
//!     )
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(
//!     out.to_string(),
//!     format!("<button type=\"submit\" id=\"{}\" disabled=\"true\" on_click></button>", button.id())
//! );
//! ```

pub mod attrs;
pub mod button;
pub mod config;
pub mod error;
pub mod events;
pub mod gate;
pub mod key;
pub mod props;
pub mod slots;
pub mod tree;

pub use attrs::{
    AttrValue, Attributes, ButtonShape, ButtonSize, ButtonType, ButtonVariant, RESERVED_KEYS,
};
pub use button::{Button, ButtonProps};
pub use config::ControlConfig;
pub use error::{BoxError, ComposeError, RenderError, Result};
pub use events::{adapt, DispatchOutcome, EventCallbacks, EventKinds, Handler, NormalizedHandlers};
pub use gate::{ControlState, InteractionGate};
pub use key::{IdAllocator, IdLease, IdStrategy, InstanceId};
pub use props::ChildProps;
pub use slots::RenderSlots;
pub use tree::{Element, Node};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::attrs::{
        AttrValue, Attributes, ButtonShape, ButtonSize, ButtonType, ButtonVariant,
    };
    pub use crate::button::{Button, ButtonProps};
    pub use crate::config::ControlConfig;
    pub use crate::error::{ComposeError, RenderError};
    pub use crate::events::{DispatchOutcome, EventCallbacks};
    pub use crate::gate::ControlState;
    pub use crate::key::{IdAllocator, IdStrategy, InstanceId};
    pub use crate::props::ChildProps;
    pub use crate::slots::RenderSlots;
    pub use crate::tree::{Element, Node};
}
