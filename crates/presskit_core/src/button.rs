//! Headless button control
//!
//! A `Button` owns nothing but its identity lease. Everything else arrives
//! per render through [`ButtonProps`]: state, pass-through attributes, the
//! three event callbacks and the three render slots. Each call to
//! [`Button::render`] gates, adapts and composes from scratch.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use presskit_core::prelude::*;
//! use presskit_platform::ClickEvent;
//!
//! let allocator = IdAllocator::new();
//! let button = Button::mount(&allocator);
//! let clicks = Rc::new(Cell::new(0));
//!
//! let counter = clicks.clone();
//! let tree = button
//!     .render(
//!         ButtonProps::<Node>::new()
//!             .text("Save")
//!             .on_click(move |_| counter.set(counter.get() + 1))
//!             .render_main(|props| {
//!                 Element::new("button")
//!                     .spread(props)
//!                     .child(props.attributes.text.clone().unwrap_or_default())
//!                     .into()
//!             }),
//!     )
//!     .unwrap()
//!     .unwrap();
//!
//! let element = tree.find_by_attr("id", button.id().as_str()).unwrap();
//! element.dispatch(&ClickEvent::new(4.0, 4.0).into());
//! assert_eq!(clicks.get(), 1);
//! ```

use presskit_platform::{ClickEvent, PressEvent, TouchEndEvent};

use crate::attrs::{AttrValue, Attributes, ButtonShape, ButtonSize, ButtonType, ButtonVariant};
use crate::config::{ControlConfig, DEFAULT_ID_PREFIX};
use crate::error::{RenderError, Result};
use crate::events::{adapt, EventCallbacks};
use crate::gate::ControlState;
use crate::key::{IdAllocator, IdLease, InstanceId};
use crate::props::ChildProps;
use crate::slots::RenderSlots;
use crate::tree::Node;

/// Everything a caller supplies for one render pass
#[derive(Debug)]
pub struct ButtonProps<N = Node> {
    state: ControlState,
    attributes: Attributes,
    icon: Option<N>,
    callbacks: EventCallbacks,
    slots: RenderSlots<N>,
}

impl<N> Default for ButtonProps<N> {
    fn default() -> Self {
        Self {
            state: ControlState::default(),
            attributes: Attributes::default(),
            icon: None,
            callbacks: EventCallbacks::default(),
            slots: RenderSlots::default(),
        }
    }
}

impl<N: 'static> ButtonProps<N> {
    /// Create props with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create props that fall back to a control configuration
    pub fn from_config(config: &ControlConfig) -> Self {
        Self::default().defaults(config)
    }

    /// Fill unset attributes from `config` and raise its state flags
    ///
    /// Attributes already set on these props win regardless of call order.
    pub fn defaults(mut self, config: &ControlConfig) -> Self {
        self.attributes.merge_defaults(&config.attributes);
        self.state.disabled |= config.disabled;
        self.state.loading |= config.loading;
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    /// Set the loading flag
    pub fn loading(mut self, loading: bool) -> Self {
        self.state.loading = loading;
        self
    }

    /// Set the visual variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.attributes.variant = Some(variant);
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.attributes.size = Some(size);
        self
    }

    /// Set the outline shape
    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.attributes.shape = Some(shape);
        self
    }

    /// Set the browser form behavior
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.attributes.button_type = Some(button_type);
        self
    }

    /// Set the label text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.attributes.text = Some(text.into());
        self
    }

    /// Set a pass-through attribute by its markup name
    ///
    /// Engine-owned names and invalid typed values are dropped with a warning;
    /// use [`try_attr`](Self::try_attr) to get the error instead.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        if let Err(error) = self.attributes.set(name, value) {
            tracing::warn!(%error, "ignoring attribute");
        }
        self
    }

    /// Set a pass-through attribute, failing on engine-owned names
    pub fn try_attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// Set the icon input handed to the icon slot
    pub fn icon(mut self, icon: impl Into<N>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Subscribe to pointer clicks
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ClickEvent) + 'static,
    {
        self.callbacks = self.callbacks.on_click(callback);
        self
    }

    /// Subscribe to touch ends
    pub fn on_touch_end<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TouchEndEvent) + 'static,
    {
        self.callbacks = self.callbacks.on_touch_end(callback);
        self
    }

    /// Subscribe to native presses
    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PressEvent) + 'static,
    {
        self.callbacks = self.callbacks.on_press(callback);
        self
    }

    /// Replace all callbacks at once
    pub fn callbacks(mut self, callbacks: EventCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Set the icon slot
    pub fn render_icon<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, N) -> N + 'static,
    {
        self.slots = self.slots.icon(render);
        self
    }

    /// Set a fallible icon slot
    pub fn try_render_icon<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, N) -> std::result::Result<N, RenderError> + 'static,
    {
        self.slots = self.slots.try_icon(render);
        self
    }

    /// Set the main slot
    pub fn render_main<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>) -> N + 'static,
    {
        self.slots = self.slots.main(render);
        self
    }

    /// Set a fallible main slot
    pub fn try_render_main<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>) -> std::result::Result<N, RenderError> + 'static,
    {
        self.slots = self.slots.try_main(render);
        self
    }

    /// Set the container slot
    pub fn render_container<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, Option<N>) -> N + 'static,
    {
        self.slots = self.slots.container(render);
        self
    }

    /// Set a fallible container slot
    pub fn try_render_container<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, Option<N>) -> std::result::Result<N, RenderError> + 'static,
    {
        self.slots = self.slots.try_container(render);
        self
    }

    /// Replace all slots at once
    pub fn slots(mut self, slots: RenderSlots<N>) -> Self {
        self.slots = slots;
        self
    }
}

impl<N> ButtonProps<N> {
    /// The control state for this pass
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// The pass-through attributes
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A mounted button instance
///
/// Holds its id for as long as it is mounted. Dropping the button, or
/// calling [`Button::unmount`], releases the id.
#[derive(Debug)]
pub struct Button {
    lease: IdLease,
}

impl Button {
    /// Mount a button with a freshly allocated `button-*` id
    pub fn mount(allocator: &IdAllocator) -> Self {
        let lease = allocator.allocate(DEFAULT_ID_PREFIX);
        tracing::debug!(id = %lease.id(), "mounted button");
        Self { lease }
    }

    /// Mount a button as described by `config`
    ///
    /// Claims `config.id` when set, otherwise allocates under `config.id_prefix`.
    pub fn mount_with(allocator: &IdAllocator, config: &ControlConfig) -> Result<Self> {
        let lease = match &config.id {
            Some(id) => allocator.claim(id.clone())?,
            None => allocator.allocate(&config.id_prefix),
        };
        tracing::debug!(id = %lease.id(), "mounted button");
        Ok(Self { lease })
    }

    /// The id held for the life of this mount
    pub fn id(&self) -> &InstanceId {
        self.lease.id()
    }

    /// Run one render pass
    ///
    /// The gate is evaluated from `props`' state, handlers are built for the
    /// subscribed kinds only, and the slots are composed. Returns `None` when
    /// neither a main nor a container slot produced output.
    pub fn render<N>(&self, props: ButtonProps<N>) -> std::result::Result<Option<N>, RenderError> {
        let _span = tracing::trace_span!("render", id = %self.id()).entered();

        let ButtonProps {
            state,
            attributes,
            icon,
            callbacks,
            slots,
        } = props;

        let gate = state.gate();
        let handlers = adapt(gate, &callbacks);
        tracing::trace!(
            enabled = gate.is_enabled(),
            subscribed = ?handlers.subscribed(),
            "evaluated interaction gate"
        );

        let base = ChildProps::base(self.id().clone(), state, attributes);
        slots.compose(&base, handlers, icon)
    }

    /// Unmount, releasing the id
    pub fn unmount(self) {
        tracing::debug!(id = %self.id(), "unmounting button");
    }
}
