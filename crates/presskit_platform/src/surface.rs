//! Host surface profiles
//!
//! A surface names the interaction kinds a host emits for one physical
//! gesture. A touch-capable browser fires `touchend` and then a synthesized
//! `click` for a single tap; no deduplication happens here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::event::{EventKind, InteractionEvent};
use crate::input::{ClickEvent, PressEvent, TouchEndEvent};

/// Where a control is being interacted with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Desktop browser or desktop window with a mouse
    #[default]
    Pointer,
    /// Mobile browser: touch end followed by a synthesized click
    TouchWeb,
    /// Native mobile view with a gesture responder
    Native,
}

impl Surface {
    /// Event kinds emitted for one tap, in emission order
    pub fn gesture_kinds(self) -> &'static [EventKind] {
        match self {
            Surface::Pointer => &[EventKind::Click],
            Surface::TouchWeb => &[EventKind::TouchEnd, EventKind::Click],
            Surface::Native => &[EventKind::Press],
        }
    }

    /// Synthesize the events one tap at `(x, y)` produces on this surface
    pub fn tap(self, x: f32, y: f32) -> Vec<InteractionEvent> {
        self.gesture_kinds()
            .iter()
            .map(|kind| match kind {
                EventKind::Click => ClickEvent::new(x, y).into(),
                EventKind::TouchEnd => TouchEndEvent::new(0, x, y).into(),
                EventKind::Press => PressEvent::new(x, y).into(),
            })
            .collect()
    }

    fn name(self) -> &'static str {
        match self {
            Surface::Pointer => "pointer",
            Surface::TouchWeb => "touch_web",
            Surface::Native => "native",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pointer" => Ok(Surface::Pointer),
            "touch_web" => Ok(Surface::TouchWeb),
            "native" => Ok(Surface::Native),
            other => Err(PlatformError::UnsupportedSurface(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_web_emits_touch_then_click() {
        let kinds: Vec<_> = Surface::TouchWeb
            .tap(2.0, 3.0)
            .iter()
            .map(InteractionEvent::kind)
            .collect();
        assert_eq!(kinds, vec![EventKind::TouchEnd, EventKind::Click]);
    }

    #[test]
    fn test_single_kind_surfaces() {
        assert_eq!(Surface::Pointer.gesture_kinds(), &[EventKind::Click]);
        assert_eq!(Surface::Native.gesture_kinds(), &[EventKind::Press]);
    }

    #[test]
    fn test_surface_parse() {
        assert_eq!("native".parse::<Surface>(), Ok(Surface::Native));
        assert_eq!(Surface::TouchWeb.to_string(), "touch_web");
        assert!(matches!(
            "watch".parse::<Surface>(),
            Err(PlatformError::UnsupportedSurface(_))
        ));
    }
}
