//! A minimal retained element tree
//!
//! The engine is generic over its output type. `Node` is the default output:
//! a small tagged tree that renderers, tests and snapshot tooling can inspect
//! without a real UI backend.

use std::fmt;

use indexmap::IndexMap;
use presskit_platform::InteractionEvent;

use crate::attrs::is_reserved;
use crate::events::{DispatchOutcome, NormalizedHandlers};
use crate::props::ChildProps;

/// One node of rendered output
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A tagged element with attributes, handlers and children
    Element(Element),
    /// Plain text
    Text(String),
    /// A transparent group of siblings
    Fragment(Vec<Node>),
}

impl Node {
    /// Shorthand for a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// This node as an element, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Depth-first search for the first element whose attribute `name` equals `value`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        match self {
            Node::Element(element) => {
                if element.attr(name) == Some(value) {
                    return Some(element);
                }
                element
                    .children
                    .iter()
                    .find_map(|child| child.find_by_attr(name, value))
            }
            Node::Fragment(children) => children
                .iter()
                .find_map(|child| child.find_by_attr(name, value)),
            Node::Text(_) => None,
        }
    }

    /// Every element in the subtree, depth-first
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Node::Element(element) => {
                out.push(element);
                for child in &element.children {
                    child.collect_elements(out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_elements(out);
                }
            }
            Node::Text(_) => {}
        }
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
            Node::Fragment(children) => children.iter().map(Node::text_content).collect(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Text(text) => f.write_str(text),
            Node::Fragment(children) => children
                .iter()
                .try_for_each(|child| fmt::Display::fmt(child, f)),
        }
    }
}

/// A tagged element
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: IndexMap<String, String>,
    /// Attached event handlers
    pub handlers: NormalizedHandlers,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Builder: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    /// Builder: copy a slot's props onto this element
    ///
    /// Writes every pass-through attribute, then `id` and `disabled`, then
    /// the props' handlers. Engine keys are written last and always win.
    pub fn spread<N>(mut self, props: &ChildProps<N>) -> Self {
        for (name, value) in props.attributes.iter() {
            if name == "text" || is_reserved(name) {
                continue;
            }
            self.attrs.insert(name.to_string(), value.to_string());
        }
        self.attrs.insert("id".into(), props.id.to_string());
        if props.disabled {
            self.attrs.insert("disabled".into(), "true".into());
        } else {
            self.attrs.shift_remove("disabled");
        }
        self.handlers = props.handlers.clone();
        self
    }

    /// Builder: append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a child if present
    pub fn maybe_child(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Deliver an event to this element's handlers
    pub fn dispatch(&self, event: &InteractionEvent) -> DispatchOutcome {
        self.handlers.dispatch(event)
    }

    /// Concatenated text of the element's children
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

// Handlers are closures; elements compare by the kinds they listen to.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.attrs == other.attrs
            && self.handlers.subscribed() == other.handlers.subscribed()
            && self.children == other.children
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        for kind in self.handlers.subscribed().kinds() {
            write!(f, " {}", kind.callback_name())?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{Attributes, ButtonType};
    use crate::events::{adapt, EventCallbacks};
    use crate::gate::ControlState;
    use crate::key::IdAllocator;
    use presskit_platform::{ClickEvent, PressEvent};

    fn sample() -> Node {
        Element::new("div")
            .with_attr("class", "wrap")
            .child(
                Element::new("button")
                    .with_attr("data-cy", "save")
                    .child("Save"),
            )
            .child(Node::Fragment(vec![Node::text(" "), Node::text("!")]))
            .into()
    }

    #[test]
    fn test_find_by_attr_descends() {
        let tree = sample();
        let button = tree.find_by_attr("data-cy", "save").unwrap();
        assert_eq!(button.tag, "button");
        assert_eq!(button.text_content(), "Save");
        assert!(tree.find_by_attr("data-cy", "missing").is_none());
    }

    #[test]
    fn test_text_content_and_markup() {
        let tree = sample();
        assert_eq!(tree.text_content(), "Save !");
        assert_eq!(
            tree.to_string(),
            "<div class=\"wrap\"><button data-cy=\"save\">Save</button> !</div>"
        );
        assert_eq!(tree.elements().len(), 2);
    }

    #[test]
    fn test_spread_copies_props() {
        let allocator = IdAllocator::new();
        let lease = allocator.claim("b1").unwrap();
        let attributes = Attributes {
            button_type: Some(ButtonType::Reset),
            text: Some("Go".into()),
            ..Attributes::default()
        };
        let base: ChildProps<Node> =
            ChildProps::base(lease.id().clone(), ControlState::new(true, false), attributes);
        let handlers = adapt(base.state().gate(), &EventCallbacks::new().on_click(|_| {}));
        let props = base.for_main(handlers, None);

        let element = Element::new("button").spread(&props);
        assert_eq!(element.attr("id"), Some("b1"));
        assert_eq!(element.attr("disabled"), Some("true"));
        assert_eq!(element.attr("type"), Some("reset"));
        assert_eq!(element.attr("text"), None);
        assert_eq!(
            element.to_string(),
            "<button type=\"reset\" id=\"b1\" disabled=\"true\" on_click></button>"
        );
        assert_eq!(
            element.dispatch(&ClickEvent::default().into()),
            DispatchOutcome::Suppressed
        );
        assert_eq!(
            element.dispatch(&PressEvent::default().into()),
            DispatchOutcome::Unsubscribed
        );
    }

    #[test]
    fn test_spread_engine_keys_win() {
        let allocator = IdAllocator::new();
        let lease = allocator.claim("b2").unwrap();
        let mut attributes = Attributes::new();
        attributes.extra.insert("id".into(), "hijack".into());
        attributes.extra.insert("disabled".into(), "false".into());
        attributes.extra.insert("data-cy".into(), "pay".into());
        let base: ChildProps<Node> =
            ChildProps::base(lease.id().clone(), ControlState::new(true, false), attributes);

        let element = Element::new("button").spread(&base);
        assert_eq!(
            element.to_string(),
            "<button data-cy=\"pay\" id=\"b2\" disabled=\"true\"></button>"
        );

        let enabled: ChildProps<Node> =
            ChildProps::base(lease.id().clone(), ControlState::default(), Attributes::new());
        let element = Element::new("button")
            .with_attr("id", "stale")
            .with_attr("disabled", true)
            .spread(&enabled);
        assert_eq!(element.attr("id"), Some("b2"));
        assert_eq!(element.attr("disabled"), None);
    }

    #[test]
    fn test_maybe_child() {
        let with = Element::new("span").maybe_child(Some("x"));
        let without = Element::new("span").maybe_child(None::<Node>);
        assert_eq!(with.children.len(), 1);
        assert!(without.children.is_empty());
        assert_ne!(with, without);
    }
}
