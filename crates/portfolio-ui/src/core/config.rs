//! Element identifiers the picker binds to, with page-level overrides.

use serde::Deserialize;
use thiserror::Error;

/// Default id of the select/deselect-all button.
pub const DEFAULT_BUTTON_ID: &str = "select-deselect-btn";
/// Default `name` shared by the company checkboxes.
pub const DEFAULT_GROUP_NAME: &str = "companies[]";
/// Default id of the element the Yew form mounts into.
pub const DEFAULT_MOUNT_ID: &str = "root";
/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-ui-config";

/// Identifiers used to locate the toggle button, the checkbox group, and the mount point.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Button element id.
    pub button_id: String,
    /// Checkbox group name.
    pub group_name: String,
    /// Mount element id for the rendered form.
    pub mount_id: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            button_id: DEFAULT_BUTTON_ID.to_string(),
            group_name: DEFAULT_GROUP_NAME.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl ToggleConfig {
    /// Parse an override block. Blank input yields the defaults; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::EmptyField`] when an identifier is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the page override block.
    ///
    /// An absent block yields the defaults. A rejected block also yields the defaults and
    /// hands back the rejection so the caller can report it.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
        }
    }

    /// Reject blank identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("button_id", &self.button_id),
            ("group_name", &self.group_name),
            ("mount_id", &self.mount_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }
}

/// Failures raised while loading a [`ToggleConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Override block was not valid JSON for the config shape.
    #[error("invalid picker configuration: {message}")]
    Parse {
        /// Deserializer error text.
        message: String,
    },
    /// An identifier was present but blank.
    #[error("configuration field '{field}' must not be empty")]
    EmptyField {
        /// Name of the blank field.
        field: &'static str,
    },
}
