//! Interaction gating
//!
//! A control is interactive only while it is neither disabled nor loading.
//! The gate is evaluated fresh on every render pass and captured by that
//! pass's handlers; nothing carries it over to the next pass.

use serde::{Deserialize, Serialize};

/// Per-render control state supplied by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    /// The control is disabled
    pub disabled: bool,
    /// The control is busy (e.g. submitting)
    pub loading: bool,
}

impl ControlState {
    /// Create a control state
    pub fn new(disabled: bool, loading: bool) -> Self {
        Self { disabled, loading }
    }

    /// Evaluate the interaction gate for this state
    pub fn gate(&self) -> InteractionGate {
        InteractionGate::from_state(*self)
    }
}

/// Whether user interaction is currently permitted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionGate {
    enabled: bool,
}

impl InteractionGate {
    /// `!disabled && !loading`
    pub fn evaluate(disabled: bool, loading: bool) -> bool {
        !disabled && !loading
    }

    /// Evaluate the gate for a control state
    pub fn from_state(state: ControlState) -> Self {
        Self {
            enabled: Self::evaluate(state.disabled, state.loading),
        }
    }

    /// A gate that lets interaction through
    pub fn open() -> Self {
        Self { enabled: true }
    }

    /// A gate that suppresses interaction
    pub fn closed() -> Self {
        Self { enabled: false }
    }

    /// Whether interaction is permitted
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl From<ControlState> for InteractionGate {
    fn from(state: ControlState) -> Self {
        Self::from_state(state)
    }
}
