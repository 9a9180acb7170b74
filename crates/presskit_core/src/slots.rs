//! Slot composition
//!
//! Callers supply up to three render functions. The composer runs them in a
//! fixed order:
//!
//! ```text
//! props assembly ─→ icon slot ─→ main slot ─→ container slot ─→ output
//!                  (optional)   (handlers,    (main output
//!                                icon output)  only)
//! ```
//!
//! A missing slot yields empty content. Slot errors are returned exactly as
//! the slot produced them.

use std::fmt;
use std::rc::Rc;

use crate::error::RenderError;
use crate::events::NormalizedHandlers;
use crate::props::ChildProps;

/// Renders icon content: `(props, icon input) -> icon output`
pub type IconSlot<N> = Rc<dyn Fn(&ChildProps<N>, N) -> Result<N, RenderError>>;

/// Renders the interactive element: `(props with handlers and icon) -> main output`
pub type MainSlot<N> = Rc<dyn Fn(&ChildProps<N>) -> Result<N, RenderError>>;

/// Wraps the main output: `(props, main output) -> final output`
pub type ContainerSlot<N> = Rc<dyn Fn(&ChildProps<N>, Option<N>) -> Result<N, RenderError>>;

/// The caller's three rendering slots
pub struct RenderSlots<N> {
    icon: Option<IconSlot<N>>,
    main: Option<MainSlot<N>>,
    container: Option<ContainerSlot<N>>,
}

impl<N> Default for RenderSlots<N> {
    fn default() -> Self {
        Self {
            icon: None,
            main: None,
            container: None,
        }
    }
}

impl<N> Clone for RenderSlots<N> {
    fn clone(&self) -> Self {
        Self {
            icon: self.icon.clone(),
            main: self.main.clone(),
            container: self.container.clone(),
        }
    }
}

impl<N: 'static> RenderSlots<N> {
    /// Create an empty slot set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an infallible icon slot
    pub fn icon<F>(self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, N) -> N + 'static,
    {
        self.try_icon(move |props, icon| Ok(render(props, icon)))
    }

    /// Set a fallible icon slot
    pub fn try_icon<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, N) -> Result<N, RenderError> + 'static,
    {
        self.icon = Some(Rc::new(render));
        self
    }

    /// Set an infallible main slot
    pub fn main<F>(self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>) -> N + 'static,
    {
        self.try_main(move |props| Ok(render(props)))
    }

    /// Set a fallible main slot
    pub fn try_main<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>) -> Result<N, RenderError> + 'static,
    {
        self.main = Some(Rc::new(render));
        self
    }

    /// Set an infallible container slot
    pub fn container<F>(self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, Option<N>) -> N + 'static,
    {
        self.try_container(move |props, main| Ok(render(props, main)))
    }

    /// Set a fallible container slot
    pub fn try_container<F>(mut self, render: F) -> Self
    where
        F: Fn(&ChildProps<N>, Option<N>) -> Result<N, RenderError> + 'static,
    {
        self.container = Some(Rc::new(render));
        self
    }
}

impl<N> RenderSlots<N> {
    /// Whether an icon slot is set
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Whether a main slot is set
    pub fn has_main(&self) -> bool {
        self.main.is_some()
    }

    /// Whether a container slot is set
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    /// Run the slot pipeline for one render pass
    ///
    /// `base` carries `{id, disabled, loading}` and the attributes; `handlers`
    /// reach the main slot only; `icon_input` is rendered only when an icon
    /// slot is present.
    pub fn compose(
        &self,
        base: &ChildProps<N>,
        handlers: NormalizedHandlers,
        icon_input: Option<N>,
    ) -> Result<Option<N>, RenderError> {
        let icon_output = match (icon_input, &self.icon) {
            (Some(input), Some(render)) => {
                tracing::trace!(id = %base.id, "rendering icon slot");
                Some(render(base, input)?)
            }
            _ => None,
        };

        let main_output = match &self.main {
            Some(render) => {
                tracing::trace!(id = %base.id, "rendering main slot");
                let props = base.for_main(handlers, icon_output);
                Some(render(&props)?)
            }
            None => None,
        };

        match &self.container {
            Some(render) => {
                tracing::trace!(id = %base.id, "rendering container slot");
                Ok(Some(render(base, main_output)?))
            }
            None => Ok(main_output),
        }
    }
}

impl<N> fmt::Debug for RenderSlots<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSlots")
            .field("icon", &self.has_icon())
            .field("main", &self.has_main())
            .field("container", &self.has_container())
            .finish()
    }
}
