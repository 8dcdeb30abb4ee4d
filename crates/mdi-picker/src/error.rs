//! Error types for the icon picker.

use std::path::PathBuf;

/// Errors raised while loading or validating an icon catalog.
///
/// These are fatal at construction time: a selector cannot be built on top
/// of a catalog that fails validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The dataset is not valid TOML or lacks a required key.
    #[error("Failed to parse icon catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share the same name.
    #[error("Duplicate icon name '{name}' at entries {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// A required field is missing or blank.
    #[error("Icon entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

impl CatalogError {
    /// Create a duplicate-name error.
    pub fn duplicate(name: impl Into<String>, first: usize, second: usize) -> Self {
        Self::DuplicateName {
            name: name.into(),
            first,
            second,
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }
}

/// Errors raised while loading selector options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// File I/O error.
    #[error("Failed to read options file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),
}

impl OptionsError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the component registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No factory is registered under the requested name.
    #[error("No component registered under '{0}'")]
    UnknownComponent(String),

    /// The factory failed to build the component.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
