//! Interaction event kinds and the tagged event union

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::input::{ClickEvent, PressEvent, TouchEndEvent};

/// The fixed, enumerated set of interaction kinds a control can subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Pointer click
    Click,
    /// Touch end
    #[serde(rename = "touchend")]
    TouchEnd,
    /// Native gesture press
    Press,
}

impl EventKind {
    /// Every kind, in dispatch order
    pub const ALL: [EventKind; 3] = [EventKind::Click, EventKind::TouchEnd, EventKind::Press];

    /// Platform event type name (`click`, `touchend`, `press`)
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::TouchEnd => "touchend",
            EventKind::Press => "press",
        }
    }

    /// Name of the callback prop subscribing to this kind
    pub fn callback_name(self) -> &'static str {
        match self {
            EventKind::Click => "on_click",
            EventKind::TouchEnd => "on_touch_end",
            EventKind::Press => "on_press",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(EventKind::Click),
            "touchend" => Ok(EventKind::TouchEnd),
            "press" => Ok(EventKind::Press),
            other => Err(PlatformError::UnknownEventKind(other.to_string())),
        }
    }
}

/// A platform-native interaction event, tagged by kind
///
/// Each variant keeps its platform-specific payload.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// Pointer click
    Click(ClickEvent),
    /// Touch end
    TouchEnd(TouchEndEvent),
    /// Native gesture press
    Press(PressEvent),
}

impl InteractionEvent {
    /// The discriminating kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            InteractionEvent::Click(_) => EventKind::Click,
            InteractionEvent::TouchEnd(_) => EventKind::TouchEnd,
            InteractionEvent::Press(_) => EventKind::Press,
        }
    }

    /// Whether a callback suppressed the default action
    pub fn default_prevented(&self) -> bool {
        match self {
            InteractionEvent::Click(e) => e.default_prevented(),
            InteractionEvent::TouchEnd(e) => e.default_prevented(),
            InteractionEvent::Press(e) => e.default_prevented(),
        }
    }
}

impl From<ClickEvent> for InteractionEvent {
    fn from(event: ClickEvent) -> Self {
        InteractionEvent::Click(event)
    }
}

impl From<TouchEndEvent> for InteractionEvent {
    fn from(event: TouchEndEvent) -> Self {
        InteractionEvent::TouchEnd(event)
    }
}

impl From<PressEvent> for InteractionEvent {
    fn from(event: PressEvent) -> Self {
        InteractionEvent::Press(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            "mousedown".parse::<EventKind>(),
            Err(PlatformError::UnknownEventKind("mousedown".to_string()))
        );
    }

    #[test]
    fn test_event_kind_discrimination() {
        let click: InteractionEvent = ClickEvent::new(1.0, 1.0).into();
        let touch: InteractionEvent = TouchEndEvent::new(0, 1.0, 1.0).into();
        let press: InteractionEvent = PressEvent::new(1.0, 1.0).into();
        assert_eq!(click.kind(), EventKind::Click);
        assert_eq!(touch.kind(), EventKind::TouchEnd);
        assert_eq!(press.kind(), EventKind::Press);
    }

    #[test]
    fn test_callback_names() {
        assert_eq!(EventKind::Click.callback_name(), "on_click");
        assert_eq!(EventKind::TouchEnd.callback_name(), "on_touch_end");
        assert_eq!(EventKind::Press.callback_name(), "on_press");
    }
}
