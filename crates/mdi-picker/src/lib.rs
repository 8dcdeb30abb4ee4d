//! mdi-picker - a searchable Material Design Icons selector.
//!
//! The crate models the logic of an icon picker widget without tying it to a
//! rendering layer:
//!
//! - **Catalog**: the bundled, validated list of icons ([`Catalog`], [`IconRecord`])
//! - **Filter Engine**: case-insensitive substring search over names and
//!   keywords, preserving catalog order ([`filter`], [`FilteredView`])
//! - **Selection**: at most one selected icon, with change notification
//!   ([`SelectionModel`], [`Selection`])
//! - **Component**: [`IconSelector`] combining the three, driven by
//!   [`SelectorEvent`]s and configured through [`SelectorOptions`]
//! - **Registration**: [`ComponentRegistry`] for hosts that create components by name
//!
//! # Example
//!
//! ```
//! use mdi_picker::{IconSelector, SelectorOptions};
//!
//! let selector = IconSelector::with_bundled_catalog(SelectorOptions::default())?;
//!
//! selector.selection_changed().connect(|name| match name {
//!     Some(name) => println!("picked mdi-{name}"),
//!     None => println!("cleared"),
//! });
//!
//! selector.set_query("arrow");
//! for icon in selector.visible().iter() {
//!     println!("{} {:?}", icon.name(), icon.glyph());
//! }
//!
//! selector.select("arrow-up");
//! selector.clear();
//! # Ok::<(), mdi_picker::CatalogError>(())
//! ```

pub mod catalog;
mod error;
pub mod filter;
pub mod options;
pub mod registry;
pub mod selection;
pub mod selector;

pub use catalog::{CSS_CLASS_PREFIX, Catalog, IconRecord};
pub use error::{CatalogError, OptionsError, RegistryError};
pub use filter::{FilteredView, Matches, filter, normalize_query};
pub use options::{DEFAULT_PLACEHOLDER, SelectorOptions};
pub use registry::{COMPONENT_NAME, ComponentFactory, ComponentRegistry};
pub use selection::{Selection, SelectionModel};
pub use selector::{IconSelector, IconSelectorBuilder, SelectorEvent};

pub use mdi_picker_core::{ConnectionId, Property, ReadOnlyProperty, Signal};
