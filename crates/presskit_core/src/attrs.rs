//! Pass-through presentation attributes
//!
//! The engine never interprets these; it threads them unchanged into every
//! slot so renderers can pick a skin. Well-known presentation knobs are typed,
//! anything else goes in `extra`.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ComposeError, Result};

/// Names the engine writes into child props itself
pub const RESERVED_KEYS: [&str; 7] = [
    "id",
    "disabled",
    "loading",
    "icon",
    "on_click",
    "on_touch_end",
    "on_press",
];

/// Names backed by a typed field on [`Attributes`]
const TYPED_KEYS: [&str; 5] = ["variant", "size", "shape", "type", "text"];

/// Whether `name` belongs to the engine rather than the caller
pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action
    #[default]
    Primary,
    /// Secondary action
    Secondary,
    /// Destructive action
    Destructive,
    /// Border only
    Outline,
    /// No background
    Ghost,
    /// Rendered as a link
    Link,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Default size
    #[default]
    Medium,
    /// Large button
    Large,
    /// Icon-only button (square)
    Icon,
}

/// Button outline shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    /// Slightly rounded rectangle
    #[default]
    Square,
    /// Fully rounded ends
    Round,
    /// Circle (icon buttons)
    Circle,
}

/// Browser form behavior; ignored by non-browser renderers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    /// Plain button
    #[default]
    Button,
    /// Submits the enclosing form
    Submit,
    /// Resets the enclosing form
    Reset,
}

macro_rules! attr_names {
    ($($ty:ident { $($variant:ident => $name:literal),+ $(,)? })+) => {
        $(
            impl $ty {
                /// Attribute value as written in markup
                pub fn as_str(self) -> &'static str {
                    match self {
                        $($ty::$variant => $name),+
                    }
                }

                /// Parse the markup name back into a value
                pub fn from_name(name: &str) -> Option<Self> {
                    match name {
                        $($name => Some($ty::$variant),)+
                        _ => None,
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

attr_names! {
    ButtonVariant {
        Primary => "primary",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
        Ghost => "ghost",
        Link => "link",
    }
    ButtonSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Icon => "icon",
    }
    ButtonShape {
        Square => "square",
        Round => "round",
        Circle => "circle",
    }
    ButtonType {
        Button => "button",
        Submit => "submit",
        Reset => "reset",
    }
}

/// An untyped attribute value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

/// Caller-supplied attributes passed through to every slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Visual variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    /// Size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    /// Outline shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ButtonShape>,
    /// Browser form behavior
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Any other attribute, in insertion order
    #[serde(flatten)]
    pub extra: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute by its markup name
    ///
    /// Typed names (`variant`, `size`, `shape`, `type`, `text`) land in their
    /// typed field. Engine-owned names are rejected.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Result<()> {
        let name = name.into();
        let value = value.into();
        if is_reserved(&name) {
            return Err(ComposeError::ReservedAttribute(name));
        }

        match name.as_str() {
            "variant" => self.variant = Some(parse_typed(&name, &value, ButtonVariant::from_name)?),
            "size" => self.size = Some(parse_typed(&name, &value, ButtonSize::from_name)?),
            "shape" => self.shape = Some(parse_typed(&name, &value, ButtonShape::from_name)?),
            "type" => self.button_type = Some(parse_typed(&name, &value, ButtonType::from_name)?),
            "text" => self.text = Some(value.to_string()),
            _ => {
                self.extra.insert(name, value);
            }
        }
        Ok(())
    }

    /// Look up any attribute by its markup name
    pub fn get(&self, name: &str) -> Option<AttrValue> {
        let typed = match name {
            "variant" => self.variant.map(|v| v.as_str()),
            "size" => self.size.map(|v| v.as_str()),
            "shape" => self.shape.map(|v| v.as_str()),
            "type" => self.button_type.map(|v| v.as_str()),
            "text" => return self.text.clone().map(AttrValue::Text),
            _ if is_reserved(name) => return None,
            _ => return self.extra.get(name).cloned(),
        };
        typed.map(AttrValue::from)
    }

    /// Names of every attribute that is set
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        if self.variant.is_some() {
            keys.push("variant");
        }
        if self.size.is_some() {
            keys.push("size");
        }
        if self.shape.is_some() {
            keys.push("shape");
        }
        if self.button_type.is_some() {
            keys.push("type");
        }
        if self.text.is_some() {
            keys.push("text");
        }
        // `extra` is public, so skip anything a typed field or the engine owns
        keys.extend(
            self.extra
                .keys()
                .map(String::as_str)
                .filter(|name| !is_reserved(name) && !TYPED_KEYS.contains(name)),
        );
        keys
    }

    /// Every set attribute as a `(name, value)` pair
    pub fn iter(&self) -> impl Iterator<Item = (&str, AttrValue)> + '_ {
        self.keys()
            .into_iter()
            .filter_map(move |name| self.get(name).map(|value| (name, value)))
    }

    /// Reject engine-owned names that arrived through deserialization
    pub fn validate(&self) -> Result<()> {
        match self.extra.keys().find(|name| is_reserved(name)) {
            Some(name) => Err(ComposeError::ReservedAttribute(name.clone())),
            None => Ok(()),
        }
    }

    /// Fill unset attributes from `defaults`
    pub fn merge_defaults(&mut self, defaults: &Attributes) {
        self.variant = self.variant.or(defaults.variant);
        self.size = self.size.or(defaults.size);
        self.shape = self.shape.or(defaults.shape);
        self.button_type = self.button_type.or(defaults.button_type);
        if self.text.is_none() {
            self.text = defaults.text.clone();
        }
        for (name, value) in &defaults.extra {
            if is_reserved(name) {
                continue;
            }
            self.extra
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

fn parse_typed<T>(name: &str, value: &AttrValue, parse: fn(&str) -> Option<T>) -> Result<T> {
    let text = value.to_string();
    parse(&text).ok_or_else(|| ComposeError::InvalidAttribute {
        name: name.to_string(),
        value: text,
    })
}
