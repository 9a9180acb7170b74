//! The props bag threaded into every render slot

use crate::attrs::{AttrValue, Attributes};
use crate::events::NormalizedHandlers;
use crate::gate::{ControlState, InteractionGate};
use crate::key::InstanceId;

/// Props handed to a slot for one render pass
///
/// All three slots see the same `id`, state and attributes. Only the main
/// slot gets `handlers` and `icon` filled in; the icon and container slots
/// are presentation-only and see an empty handler set.
#[derive(Clone, Debug)]
pub struct ChildProps<N> {
    /// The mounted instance's id
    pub id: InstanceId,
    /// Echo of the caller's `disabled`
    pub disabled: bool,
    /// Echo of the caller's `loading`
    pub loading: bool,
    /// Pass-through attributes
    pub attributes: Attributes,
    /// Gated handlers for subscribed kinds (main slot only)
    pub handlers: NormalizedHandlers,
    /// Icon slot output (main slot only)
    pub icon: Option<N>,
}

impl<N> ChildProps<N> {
    /// Base props: attributes plus `{id, disabled, loading}`
    pub(crate) fn base(id: InstanceId, state: ControlState, attributes: Attributes) -> Self {
        Self {
            id,
            disabled: state.disabled,
            loading: state.loading,
            attributes,
            handlers: NormalizedHandlers::new(),
            icon: None,
        }
    }

    /// Main-slot props: base props plus handlers and icon output
    pub(crate) fn for_main(&self, handlers: NormalizedHandlers, icon: Option<N>) -> Self {
        Self {
            id: self.id.clone(),
            disabled: self.disabled,
            loading: self.loading,
            attributes: self.attributes.clone(),
            handlers,
            icon,
        }
    }

    /// The control state echoed into these props
    pub fn state(&self) -> ControlState {
        ControlState::new(self.disabled, self.loading)
    }

    /// Whether the control currently accepts interaction
    pub fn is_interactive(&self) -> bool {
        InteractionGate::evaluate(self.disabled, self.loading)
    }

    /// Id for an external label correlated with this control
    pub fn label_id(&self) -> String {
        self.id.derive("label")
    }

    /// Look up a pass-through attribute
    pub fn attr(&self, name: &str) -> Option<AttrValue> {
        self.attributes.get(name)
    }

    /// Every key present in the bag
    ///
    /// Handler keys (`on_click`, `on_touch_end`, `on_press`) appear only for
    /// subscribed kinds.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = vec!["id", "disabled", "loading"];
        keys.extend(self.attributes.keys());
        keys.extend(self.handlers.subscribed().kinds().map(|k| k.callback_name()));
        if self.icon.is_some() {
            keys.push("icon");
        }
        keys
    }

    /// Whether `key` is present in the bag
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}
