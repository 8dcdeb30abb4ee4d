//! Component registration.
//!
//! Hosts that create components by name (from markup, config or a plugin
//! table) can keep a [`ComponentRegistry`] and [`install`](ComponentRegistry::install)
//! the icon selector into it under [`COMPONENT_NAME`]. Hosts that don't need
//! that indirection can call [`IconSelector::new`] or the builder directly.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use mdi_picker_core::logging::targets;

use crate::catalog::Catalog;
use crate::error::{CatalogError, RegistryError};
use crate::options::SelectorOptions;
use crate::selector::IconSelector;

/// The name the icon selector registers under.
pub const COMPONENT_NAME: &str = "MdiIconPicker";

/// A factory building a selector from options.
pub type ComponentFactory =
    Arc<dyn Fn(SelectorOptions) -> Result<IconSelector, CatalogError> + Send + Sync>;

/// Name → factory table.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(SelectorOptions) -> Result<IconSelector, CatalogError> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(target: targets::REGISTRY, name = %name, "component registered");
        self.factories.insert(name, Arc::new(factory));
    }

    /// Registers the icon selector over the bundled catalog under [`COMPONENT_NAME`].
    pub fn install(&mut self) {
        self.register(COMPONENT_NAME, IconSelector::with_bundled_catalog);
    }

    /// Registers the icon selector over a custom catalog under `name`.
    pub fn install_with_catalog(&mut self, name: impl Into<String>, catalog: Arc<Catalog>) {
        self.register(name, move |options| {
            Ok(IconSelector::new(Arc::clone(&catalog), options))
        });
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds the component registered under `name`.
    pub fn create(
        &self,
        name: &str,
        options: SelectorOptions,
    ) -> Result<IconSelector, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))?;
        Ok(factory(options)?)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconRecord;

    #[test]
    fn test_install_registers_component_name() {
        let mut registry = ComponentRegistry::new();
        assert!(!registry.contains(COMPONENT_NAME));

        registry.install();

        assert!(registry.contains(COMPONENT_NAME));
        let selector = registry
            .create(
                COMPONENT_NAME,
                SelectorOptions::default().with_initial_value("star"),
            )
            .unwrap();
        assert_eq!(selector.selected_name().as_deref(), Some("star"));
    }

    #[test]
    fn test_unknown_component() {
        let registry = ComponentRegistry::new();
        match registry.create("Nope", SelectorOptions::default()) {
            Err(RegistryError::UnknownComponent(name)) => assert_eq!(name, "Nope"),
            other => panic!("expected unknown component, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_catalog_install() {
        let catalog = Arc::new(
            Catalog::from_records(vec![IconRecord::new("only", Vec::<String>::new())]).unwrap(),
        );
        let mut registry = ComponentRegistry::new();
        registry.install_with_catalog("TinyPicker", catalog);
        registry.install();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![COMPONENT_NAME, "TinyPicker"]
        );
        let selector = registry
            .create("TinyPicker", SelectorOptions::default())
            .unwrap();
        assert_eq!(selector.catalog().len(), 1);
    }

    #[test]
    fn test_factory_error_propagates() {
        let mut registry = ComponentRegistry::new();
        registry.register("Broken", |_| Err(CatalogError::missing_field(0, "name")));

        assert!(matches!(
            registry.create("Broken", SelectorOptions::default()),
            Err(RegistryError::Catalog(CatalogError::MissingField { .. }))
        ));
    }
}
