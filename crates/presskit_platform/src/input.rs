//! Platform-native event payloads for the three interaction modalities
//!
//! Each modality keeps its own shape: a pointer click carries a button and
//! modifiers, a touch end carries the lifted touch points, and a native press
//! carries gesture coordinates and a timestamp. They are deliberately not
//! merged into one struct.

use std::cell::Cell;

// ============================================================================
// Shared pieces
// ============================================================================

/// Mouse buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Default-action flag carried by every platform event.
///
/// Only the receiving callback may set it. Interior mutability lets a
/// callback holding `&Event` call `prevent_default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct DefaultAction {
    prevented: Cell<bool>,
}

impl DefaultAction {
    fn prevent(&self) {
        self.prevented.set(true);
    }

    fn is_prevented(&self) -> bool {
        self.prevented.get()
    }
}

// ============================================================================
// Pointer click
// ============================================================================

/// A pointer click (press + release on the same element)
#[derive(Clone, Debug, PartialEq)]
pub struct ClickEvent {
    /// Which button was clicked
    pub button: MouseButton,
    /// X position in window coordinates
    pub x: f32,
    /// Y position in window coordinates
    pub y: f32,
    /// Number of consecutive clicks (2 for a double click)
    pub click_count: u32,
    /// Modifier keys held during the click
    pub modifiers: Modifiers,
    default_action: DefaultAction,
}

impl ClickEvent {
    /// Create a left click at the given position
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            button: MouseButton::Left,
            x,
            y,
            click_count: 1,
            modifiers: Modifiers::default(),
            default_action: DefaultAction::default(),
        }
    }

    /// Set the mouse button
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Set the click count
    pub fn with_click_count(mut self, count: u32) -> Self {
        self.click_count = count;
        self
    }

    /// Set modifier keys
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppress the platform's default action (form submit, focus change, ...)
    pub fn prevent_default(&self) {
        self.default_action.prevent();
    }

    /// Whether a callback suppressed the default action
    pub fn default_prevented(&self) -> bool {
        self.default_action.is_prevented()
    }
}

impl Default for ClickEvent {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ============================================================================
// Touch end
// ============================================================================

/// A single touch point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this touch
    pub id: u64,
    /// X position in window coordinates
    pub x: f32,
    /// Y position in window coordinates
    pub y: f32,
    /// Touch pressure (0.0 - 1.0)
    pub pressure: f32,
}

/// One or more fingers lifted from a touchscreen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEndEvent {
    /// Touches that ended with this event
    pub changed_touches: Vec<TouchPoint>,
    /// Touches still in contact after this event
    pub remaining_touches: Vec<TouchPoint>,
    default_action: DefaultAction,
}

impl TouchEndEvent {
    /// Create a touch end for a single lifted finger
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            changed_touches: vec![TouchPoint {
                id,
                x,
                y,
                pressure: 0.0,
            }],
            remaining_touches: Vec::new(),
            default_action: DefaultAction::default(),
        }
    }

    /// Add a touch that is still in contact
    pub fn with_remaining(mut self, touch: TouchPoint) -> Self {
        self.remaining_touches.push(touch);
        self
    }

    /// Position of the first lifted touch
    pub fn position(&self) -> Option<(f32, f32)> {
        self.changed_touches.first().map(|t| (t.x, t.y))
    }

    /// Suppress the synthesized mouse events that would follow this touch
    pub fn prevent_default(&self) {
        self.default_action.prevent();
    }

    /// Whether a callback suppressed the default action
    pub fn default_prevented(&self) -> bool {
        self.default_action.is_prevented()
    }
}

// ============================================================================
// Native press
// ============================================================================

/// A native gesture-responder press
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressEvent {
    /// X position relative to the pressed element
    pub location_x: f32,
    /// Y position relative to the pressed element
    pub location_y: f32,
    /// X position relative to the root view
    pub page_x: f32,
    /// Y position relative to the root view
    pub page_y: f32,
    /// Gesture timestamp in milliseconds
    pub timestamp: u64,
    default_action: DefaultAction,
}

impl PressEvent {
    /// Create a press at the given element-local position
    pub fn new(location_x: f32, location_y: f32) -> Self {
        Self {
            location_x,
            location_y,
            page_x: location_x,
            page_y: location_y,
            timestamp: 0,
            default_action: DefaultAction::default(),
        }
    }

    /// Set the root-view position
    pub fn with_page_pos(mut self, x: f32, y: f32) -> Self {
        self.page_x = x;
        self.page_y = y;
        self
    }

    /// Set the gesture timestamp
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Stop the gesture from being handed to an ancestor responder
    pub fn prevent_default(&self) {
        self.default_action.prevent();
    }

    /// Whether a callback suppressed the default action
    pub fn default_prevented(&self) -> bool {
        self.default_action.is_prevented()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_builder() {
        let click = ClickEvent::new(4.0, 8.0)
            .with_button(MouseButton::Right)
            .with_click_count(2);
        assert_eq!(click.button, MouseButton::Right);
        assert_eq!(click.click_count, 2);
        assert_eq!((click.x, click.y), (4.0, 8.0));
        assert!(click.modifiers.is_empty());
    }

    #[test]
    fn test_prevent_default_through_shared_ref() {
        let click = ClickEvent::default();
        let shared: &ClickEvent = &click;
        assert!(!shared.default_prevented());
        shared.prevent_default();
        assert!(click.default_prevented());
    }

    #[test]
    fn test_touch_end_position() {
        let touch = TouchEndEvent::new(7, 1.0, 2.0);
        assert_eq!(touch.position(), Some((1.0, 2.0)));
        assert_eq!(touch.changed_touches[0].id, 7);
        assert!(TouchEndEvent::default().position().is_none());
    }

    #[test]
    fn test_press_page_pos_defaults_to_location() {
        let press = PressEvent::new(3.0, 5.0);
        assert_eq!((press.page_x, press.page_y), (3.0, 5.0));
        let press = press.with_page_pos(30.0, 50.0).with_timestamp(12);
        assert_eq!((press.page_x, press.page_y), (30.0, 50.0));
        assert_eq!(press.timestamp, 12);
    }
}
