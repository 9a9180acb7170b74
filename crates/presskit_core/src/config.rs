//! Control configuration presets.

use serde::{Deserialize, Serialize};

use crate::attrs::Attributes;
use crate::error::Result;
use crate::gate::ControlState;
use crate::key::{IdAllocator, IdStrategy};

/// Default prefix for generated button ids.
pub const DEFAULT_ID_PREFIX: &str = "button";

/// Configuration for a mounted control.
///
/// Loadable from TOML:
///
/// ```toml
/// loading = true
/// id_prefix = "checkout"
/// id_strategy = "uuid"
///
/// [attributes]
/// variant = "destructive"
/// type = "submit"
/// data-cy = "pay"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Start disabled.
    pub disabled: bool,
    /// Start busy.
    pub loading: bool,
    /// Prefix for generated ids.
    pub id_prefix: String,
    /// Explicit id to claim instead of generating one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// How fresh ids are generated.
    pub id_strategy: IdStrategy,
    /// Fallback attributes for any the caller leaves unset.
    pub attributes: Attributes,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ControlConfig {
    /// Standard configuration: interactive, sequential `button-N` ids.
    pub fn standard() -> Self {
        Self {
            disabled: false,
            loading: false,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            id: None,
            id_strategy: IdStrategy::Sequential,
            attributes: Attributes::default(),
        }
    }

    /// Inert configuration: starts disabled.
    pub fn inert() -> Self {
        Self {
            disabled: true,
            ..Self::standard()
        }
    }

    /// Busy configuration: starts loading.
    pub fn busy() -> Self {
        Self {
            loading: true,
            ..Self::standard()
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing keys take their standard values. Attribute names the engine
    /// owns (`id`, `disabled`, `on_click`, ...) are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.attributes.validate()?;
        Ok(config)
    }

    /// Serialize this configuration as TOML text.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Initial control state.
    pub fn state(&self) -> ControlState {
        ControlState::new(self.disabled, self.loading)
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Claim an explicit id on mount.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the id strategy.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Set the default attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl IdAllocator {
    /// Create an allocator using the config's id strategy.
    pub fn from_config(config: &ControlConfig) -> Self {
        Self::with_strategy(config.id_strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{AttrValue, ButtonType, ButtonVariant};
    use crate::error::ComposeError;

    #[test]
    fn test_standard_defaults() {
        let config = ControlConfig::default();
        assert!(!config.disabled);
        assert!(!config.loading);
        assert_eq!(config.id_prefix, "button");
        assert_eq!(config.id, None);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.state().gate().is_enabled());
    }

    #[test]
    fn test_presets_close_the_gate() {
        assert!(!ControlConfig::inert().state().gate().is_enabled());
        assert!(!ControlConfig::busy().state().gate().is_enabled());
    }

    #[test]
    fn test_empty_toml_is_standard() {
        let config = ControlConfig::from_toml_str("").unwrap();
        assert_eq!(config, ControlConfig::standard());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            loading = true
            id_prefix = "checkout"
            id_strategy = "uuid"

            [attributes]
            variant = "destructive"
            type = "submit"
            data-cy = "pay"
            tab-index = 2
        "#;
        let config = ControlConfig::from_toml_str(text).unwrap();
        assert!(config.loading);
        assert_eq!(config.id_prefix, "checkout");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.attributes.variant, Some(ButtonVariant::Destructive));
        assert_eq!(config.attributes.button_type, Some(ButtonType::Submit));
        assert_eq!(
            config.attributes.get("data-cy"),
            Some(AttrValue::Text("pay".into()))
        );
        assert_eq!(config.attributes.get("tab-index"), Some(AttrValue::Int(2)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ControlConfig::from_toml_str("disabled = \"nope\"").unwrap_err();
        assert!(matches!(err, ComposeError::InvalidConfig(_)));
        assert!(err.to_string().starts_with("Invalid control configuration"));
    }

    #[test]
    fn test_reserved_attribute_in_toml() {
        let text = r#"
            [attributes]
            data-cy = "pay"
            on_press = true
        "#;
        let err = ControlConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ComposeError::ReservedAttribute(ref name) if name == "on_press"));
    }

    #[test]
    fn test_builders() {
        let config = ControlConfig::standard()
            .with_loading(true)
            .with_id("save")
            .with_id_prefix("cta")
            .with_id_strategy(IdStrategy::Uuid);
        assert!(config.loading);
        assert_eq!(config.id.as_deref(), Some("save"));
        assert_eq!(config.id_prefix, "cta");
        assert_eq!(IdAllocator::from_config(&config).strategy(), IdStrategy::Uuid);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ControlConfig::inert().with_id("x");
        let text = config.to_toml_string().unwrap();
        assert_eq!(ControlConfig::from_toml_str(&text).unwrap(), config);
    }
}
