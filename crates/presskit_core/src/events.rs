//! Event normalization
//!
//! Wraps the caller's click, touch-end and press callbacks into gated
//! handlers for one render pass.
//!
//! # Architecture
//!
//! ```text
//! ButtonProps (.on_click / .on_touch_end / .on_press)
//!     ↓ EventCallbacks
//! adapt(gate, callbacks)            ← gate captured for this pass
//!     ↓ NormalizedHandlers          (only subscribed kinds present)
//! main slot props
//!     ↓ renderer attaches them to its element
//! Handler::call(event)              → callback, or nothing if gated
//! ```
//!
//! # Example
//!
//! ```rust
//! use presskit_core::events::{adapt, DispatchOutcome, EventCallbacks};
//! use presskit_core::gate::InteractionGate;
//! use presskit_platform::{ClickEvent, EventKind};
//!
//! let callbacks = EventCallbacks::new().on_click(|e| println!("clicked at {}", e.x));
//!
//! let handlers = adapt(InteractionGate::closed(), &callbacks);
//! assert!(handlers.has(EventKind::Click));
//! assert!(!handlers.has(EventKind::Press));
//! assert_eq!(
//!     handlers.dispatch(&ClickEvent::new(1.0, 1.0).into()),
//!     DispatchOutcome::Suppressed
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;
use presskit_platform::{ClickEvent, EventKind, InteractionEvent, PressEvent, TouchEndEvent};

use crate::gate::InteractionGate;

/// Caller callback for one platform event shape.
///
/// Uses Rc since UI is single-threaded.
pub type EventCallback<E> = Rc<dyn Fn(&E)>;

/// Pointer click callback
pub type ClickCallback = EventCallback<ClickEvent>;
/// Touch end callback
pub type TouchEndCallback = EventCallback<TouchEndEvent>;
/// Native press callback
pub type PressCallback = EventCallback<PressEvent>;

bitflags! {
    /// A set of interaction kinds
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// Pointer click
        const CLICK = 1 << 0;
        /// Touch end
        const TOUCH_END = 1 << 1;
        /// Native press
        const PRESS = 1 << 2;
    }
}

impl EventKinds {
    /// The single-kind set for `kind`
    pub fn of(kind: EventKind) -> Self {
        match kind {
            EventKind::Click => Self::CLICK,
            EventKind::TouchEnd => Self::TOUCH_END,
            EventKind::Press => Self::PRESS,
        }
    }

    /// Whether `kind` is in the set
    pub fn has(self, kind: EventKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// The kinds in the set, in dispatch order
    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        Self::of(kind)
    }
}

/// The caller's event callbacks for one render
#[derive(Clone, Default)]
pub struct EventCallbacks {
    /// Pointer click
    pub on_click: Option<ClickCallback>,
    /// Touch end
    pub on_touch_end: Option<TouchEndCallback>,
    /// Native press
    pub on_press: Option<PressCallback>,
}

impl EventCallbacks {
    /// Create an empty set of callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to pointer clicks
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ClickEvent) + 'static,
    {
        self.on_click = Some(Rc::new(callback));
        self
    }

    /// Subscribe to touch ends
    pub fn on_touch_end<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TouchEndEvent) + 'static,
    {
        self.on_touch_end = Some(Rc::new(callback));
        self
    }

    /// Subscribe to native presses
    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PressEvent) + 'static,
    {
        self.on_press = Some(Rc::new(callback));
        self
    }

    /// Kinds for which a callback was supplied
    pub fn subscribed(&self) -> EventKinds {
        let mut kinds = EventKinds::empty();
        kinds.set(EventKinds::CLICK, self.on_click.is_some());
        kinds.set(EventKinds::TOUCH_END, self.on_touch_end.is_some());
        kinds.set(EventKinds::PRESS, self.on_press.is_some());
        kinds
    }

    /// Whether no callback was supplied
    pub fn is_empty(&self) -> bool {
        self.subscribed().is_empty()
    }
}

impl fmt::Debug for EventCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCallbacks")
            .field("subscribed", &self.subscribed())
            .finish()
    }
}

/// What happened when an event reached a control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// The caller's callback ran
    Invoked,
    /// A handler exists but the gate was closed
    Suppressed,
    /// No handler for this kind
    Unsubscribed,
}

/// A gated handler for one platform event shape
pub struct Handler<E> {
    kind: EventKind,
    gate: InteractionGate,
    callback: EventCallback<E>,
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            gate: self.gate,
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<E> Handler<E> {
    fn new(kind: EventKind, gate: InteractionGate, callback: &EventCallback<E>) -> Self {
        Self {
            kind,
            gate,
            callback: Rc::clone(callback),
        }
    }

    /// The kind this handler serves
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Whether the gate captured for this render lets events through
    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Forward `event` to the caller's callback if the gate is open
    ///
    /// The event is passed through untouched.
    pub fn call(&self, event: &E) -> DispatchOutcome {
        if self.gate.is_enabled() {
            (self.callback)(event);
            DispatchOutcome::Invoked
        } else {
            tracing::trace!(kind = %self.kind, "interaction suppressed by gate");
            DispatchOutcome::Suppressed
        }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("kind", &self.kind)
            .field("enabled", &self.gate.is_enabled())
            .finish()
    }
}

/// Gated handlers for the subscribed kinds of one render pass
#[derive(Clone, Default)]
pub struct NormalizedHandlers {
    click: Option<Handler<ClickEvent>>,
    touch_end: Option<Handler<TouchEndEvent>>,
    press: Option<Handler<PressEvent>>,
}

impl NormalizedHandlers {
    /// Create an empty handler set
    pub fn new() -> Self {
        Self::default()
    }

    /// Click handler, if subscribed
    pub fn click(&self) -> Option<&Handler<ClickEvent>> {
        self.click.as_ref()
    }

    /// Touch end handler, if subscribed
    pub fn touch_end(&self) -> Option<&Handler<TouchEndEvent>> {
        self.touch_end.as_ref()
    }

    /// Press handler, if subscribed
    pub fn press(&self) -> Option<&Handler<PressEvent>> {
        self.press.as_ref()
    }

    /// Kinds with a handler
    pub fn subscribed(&self) -> EventKinds {
        let mut kinds = EventKinds::empty();
        kinds.set(EventKinds::CLICK, self.click.is_some());
        kinds.set(EventKinds::TOUCH_END, self.touch_end.is_some());
        kinds.set(EventKinds::PRESS, self.press.is_some());
        kinds
    }

    /// Check if a handler is present for a specific kind
    pub fn has(&self, kind: EventKind) -> bool {
        self.subscribed().has(kind)
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.subscribed().is_empty()
    }

    /// Route a tagged platform event to the handler for its kind
    pub fn dispatch(&self, event: &InteractionEvent) -> DispatchOutcome {
        let outcome = match event {
            InteractionEvent::Click(e) => self.click.as_ref().map(|h| h.call(e)),
            InteractionEvent::TouchEnd(e) => self.touch_end.as_ref().map(|h| h.call(e)),
            InteractionEvent::Press(e) => self.press.as_ref().map(|h| h.call(e)),
        };
        outcome.unwrap_or(DispatchOutcome::Unsubscribed)
    }
}

impl fmt::Debug for NormalizedHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedHandlers")
            .field("subscribed", &self.subscribed())
            .finish()
    }
}

/// Build this pass's gated handlers from the caller's callbacks
///
/// A handler is produced only for kinds whose callback is present; absent
/// kinds are omitted rather than given a no-op.
pub fn adapt(gate: InteractionGate, callbacks: &EventCallbacks) -> NormalizedHandlers {
    NormalizedHandlers {
        click: callbacks
            .on_click
            .as_ref()
            .map(|cb| Handler::new(EventKind::Click, gate, cb)),
        touch_end: callbacks
            .on_touch_end
            .as_ref()
            .map(|cb| Handler::new(EventKind::TouchEnd, gate, cb)),
        press: callbacks
            .on_press
            .as_ref()
            .map(|cb| Handler::new(EventKind::Press, gate, cb)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn counting_callbacks(count: &Rc<Cell<u32>>) -> EventCallbacks {
        let click = Rc::clone(count);
        let touch = Rc::clone(count);
        let press = Rc::clone(count);
        EventCallbacks::new()
            .on_click(move |_| click.set(click.get() + 1))
            .on_touch_end(move |_| touch.set(touch.get() + 1))
            .on_press(move |_| press.set(press.get() + 1))
    }

    #[test]
    fn test_enabled_click_invokes_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let callbacks = EventCallbacks::new().on_click(move |_| counter.set(counter.get() + 1));

        let handlers = adapt(InteractionGate::open(), &callbacks);
        let outcome = handlers.dispatch(&ClickEvent::new(0.0, 0.0).into());

        assert_eq!(outcome, DispatchOutcome::Invoked);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_closed_gate_suppresses_all_modalities() {
        let count = Rc::new(Cell::new(0));
        let handlers = adapt(InteractionGate::closed(), &counting_callbacks(&count));

        for event in [
            InteractionEvent::from(ClickEvent::default()),
            TouchEndEvent::new(1, 0.0, 0.0).into(),
            PressEvent::new(0.0, 0.0).into(),
        ] {
            assert_eq!(handlers.dispatch(&event), DispatchOutcome::Suppressed);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_only_subscribed_kinds_present() {
        let callbacks = EventCallbacks::new().on_click(|_| {});
        let handlers = adapt(InteractionGate::open(), &callbacks);

        assert!(handlers.click().is_some());
        assert!(handlers.touch_end().is_none());
        assert!(handlers.press().is_none());
        assert_eq!(handlers.subscribed(), EventKinds::CLICK);
        assert_eq!(
            handlers.dispatch(&PressEvent::default().into()),
            DispatchOutcome::Unsubscribed
        );
    }

    #[test]
    fn test_no_callbacks_no_handlers() {
        let handlers = adapt(InteractionGate::open(), &EventCallbacks::new());
        assert!(handlers.is_empty());
    }

    #[test]
    fn test_event_forwarded_unmodified() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let callbacks = EventCallbacks::new().on_click(move |e: &ClickEvent| {
            *sink.borrow_mut() = Some(e.clone());
        });

        let click = ClickEvent::new(12.0, 34.0).with_click_count(2);
        adapt(InteractionGate::open(), &callbacks)
            .click()
            .unwrap()
            .call(&click);

        assert_eq!(seen.borrow().as_ref(), Some(&click));
        assert!(!click.default_prevented());
    }

    #[test]
    fn test_callback_may_prevent_default() {
        let callbacks = EventCallbacks::new().on_touch_end(|e: &TouchEndEvent| e.prevent_default());
        let handlers = adapt(InteractionGate::open(), &callbacks);

        let event: InteractionEvent = TouchEndEvent::new(3, 0.0, 0.0).into();
        handlers.dispatch(&event);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_gate_captured_at_construction() {
        let count = Rc::new(Cell::new(0));
        let callbacks = counting_callbacks(&count);

        let stale = adapt(InteractionGate::closed(), &callbacks);
        let fresh = adapt(InteractionGate::open(), &callbacks);

        stale.dispatch(&PressEvent::default().into());
        assert_eq!(count.get(), 0);
        fresh.dispatch(&PressEvent::default().into());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_event_kinds_iteration_order() {
        let kinds = EventKinds::PRESS | EventKinds::CLICK;
        let listed: Vec<_> = kinds.kinds().collect();
        assert_eq!(listed, vec![EventKind::Click, EventKind::Press]);
        assert!(kinds.has(EventKind::Press));
        assert!(!kinds.has(EventKind::TouchEnd));
    }
}
