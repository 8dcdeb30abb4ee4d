//! Selector construction options.
//!
//! Options can be built in code or read from TOML:
//!
//! ```toml
//! initial-value = "account"
//! placeholder-text = "Find an icon"
//! ```

use std::path::Path;

use mdi_picker_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Placeholder shown in the search field when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Search icons...";

/// Options supplied by the host when constructing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorOptions {
    /// Icon selected at construction, if it exists in the catalog.
    pub initial_value: Option<String>,
    /// Search field placeholder. Display only.
    pub placeholder_text: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            initial_value: None,
            placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl SelectorOptions {
    /// Sets the initial value.
    pub fn with_initial_value(mut self, name: impl Into<String>) -> Self {
        self.initial_value = Some(name.into());
        self
    }

    /// Sets the placeholder text.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// The initial value, with blank strings treated as absent.
    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Parses options from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| OptionsError::io(path, e))?;
        let options = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::OPTIONS,
            path = %path.display(),
            "loaded selector options"
        );
        Ok(options)
    }

    /// Serialises the options to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
