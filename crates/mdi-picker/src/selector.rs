//! The icon selector component.
//!
//! [`IconSelector`] ties the pieces together: a shared [`Catalog`], the
//! current query, and a [`SelectionModel`]. It is independent of any
//! rendering layer. A host feeds it user input (directly or as
//! [`SelectorEvent`]s), renders [`IconSelector::visible`], and listens to
//! [`IconSelector::selection_changed`].
//!
//! # Example
//!
//! ```
//! use mdi_picker::{IconSelector, SelectorEvent, SelectorOptions};
//!
//! let selector = IconSelector::with_bundled_catalog(
//!     SelectorOptions::default().with_initial_value("alert"),
//! )?;
//!
//! selector.selection_changed().connect(|name| {
//!     println!("host received: {name:?}");
//! });
//!
//! selector.handle_event(SelectorEvent::QueryChanged("acc".into()));
//! assert!(selector.visible().contains("account"));
//!
//! selector.handle_event(SelectorEvent::ItemActivated("account".into()));
//! assert_eq!(selector.selected_name().as_deref(), Some("account"));
//! # Ok::<(), mdi_picker::CatalogError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use mdi_picker_core::logging::targets;
use mdi_picker_core::{Property, ReadOnlyProperty, Signal};

use crate::catalog::{Catalog, IconRecord};
use crate::error::CatalogError;
use crate::filter::{FilteredView, filter};
use crate::options::SelectorOptions;
use crate::selection::{Selection, SelectionModel};

// ============================================================================
// Events
// ============================================================================

/// Inbound user events a host forwards to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// The search text changed.
    QueryChanged(String),
    /// The user activated (clicked, pressed enter on) an icon.
    ItemActivated(String),
    /// The user asked to clear the selection.
    ClearRequested,
}

// ============================================================================
// IconSelector
// ============================================================================

/// A searchable icon selector.
pub struct IconSelector {
    catalog: Arc<Catalog>,
    query: Property<String>,
    selection: SelectionModel,
    placeholder_text: String,
    query_changed: Signal<String>,
}

impl IconSelector {
    /// Creates a selector over `catalog`.
    ///
    /// Construction never notifies, even when an initial value is applied.
    pub fn new(catalog: Arc<Catalog>, options: SelectorOptions) -> Self {
        let selection = SelectionModel::new(Arc::clone(&catalog), options.initial_value());
        tracing::debug!(
            target: targets::SELECTION,
            icons = catalog.len(),
            initial = %selection.selection(),
            "icon selector created"
        );

        Self {
            catalog,
            query: Property::new(String::new()),
            selection,
            placeholder_text: options.placeholder_text,
            query_changed: Signal::new(),
        }
    }

    /// Creates a selector over the bundled catalog.
    ///
    /// Fails if the bundled dataset does not validate.
    pub fn with_bundled_catalog(options: SelectorOptions) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::bundled()?, options))
    }

    /// Returns a builder.
    pub fn builder() -> IconSelectorBuilder {
        IconSelectorBuilder::new()
    }

    /// The catalog this selector browses.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Placeholder text for the search field.
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    // ------------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------------

    /// The current query as typed.
    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Read-only access to the query property.
    pub fn query_property(&self) -> ReadOnlyProperty<'_, String> {
        ReadOnlyProperty::new(&self.query)
    }

    /// Replaces the query. Returns `true` and emits
    /// [`query_changed`](Self::query_changed) if it differs from the current one.
    pub fn set_query(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if !self.query.set(text.clone()) {
            return false;
        }
        tracing::trace!(target: targets::FILTER, query = %text, "query changed");
        self.query_changed.emit(text);
        true
    }

    /// The icons matching the current query, in catalog order.
    pub fn visible(&self) -> FilteredView<'_> {
        self.query.with(|q| filter(&self.catalog, q))
    }

    /// Names of the icons matching the current query.
    pub fn visible_names(&self) -> Vec<String> {
        self.visible().names()
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    /// The selected icon name, if any.
    pub fn selected_name(&self) -> Option<String> {
        self.selection.selected_name()
    }

    /// The selected icon record, if any.
    pub fn selected_record(&self) -> Option<&IconRecord> {
        self.selection.selected_record()
    }

    /// Selects `name`. See [`SelectionModel::select`].
    pub fn select(&self, name: &str) -> bool {
        self.selection.select(name)
    }

    /// Clears the selection. See [`SelectionModel::clear`].
    pub fn clear(&self) -> bool {
        self.selection.clear()
    }

    // ------------------------------------------------------------------------
    // Signals and events
    // ------------------------------------------------------------------------

    /// Emitted once per accepted selection change, with `None` on clear.
    pub fn selection_changed(&self) -> &Signal<Option<String>> {
        &self.selection.selection_changed
    }

    /// Emitted when the query text changes.
    pub fn query_changed(&self) -> &Signal<String> {
        &self.query_changed
    }

    /// Applies an inbound user event. Returns whether any state changed.
    pub fn handle_event(&self, event: SelectorEvent) -> bool {
        match event {
            SelectorEvent::QueryChanged(text) => self.set_query(text),
            SelectorEvent::ItemActivated(name) => self.select(&name),
            SelectorEvent::ClearRequested => self.clear(),
        }
    }
}

impl fmt::Debug for IconSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconSelector")
            .field("query", &self.query.get())
            .field("selection", &self.selection.selection())
            .field("placeholder_text", &self.placeholder_text)
            .finish()
    }
}

static_assertions::assert_impl_all!(IconSelector: Send, Sync);

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`IconSelector`].
///
/// Uses the bundled catalog unless one is supplied.
#[derive(Debug, Default)]
pub struct IconSelectorBuilder {
    catalog: Option<Arc<Catalog>>,
    options: SelectorOptions,
}

impl IconSelectorBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `catalog` instead of the bundled one.
    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replaces all options.
    pub fn options(mut self, options: SelectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the initial value.
    pub fn initial_value(mut self, name: impl Into<String>) -> Self {
        self.options.initial_value = Some(name.into());
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.options.placeholder_text = text.into();
        self
    }

    /// Builds the selector.
    pub fn build(self) -> Result<IconSelector, CatalogError> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::bundled()?,
        };
        Ok(IconSelector::new(catalog, self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn scenario_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_records(vec![
                IconRecord::new("account", ["person", "user"]),
                IconRecord::new("alert", ["warning"]),
            ])
            .unwrap(),
        )
    }

    /// Counts events logged on the signal target.
    struct SignalEvents(Arc<Mutex<usize>>);

    impl<S: tracing::Subscriber> Layer<S> for SignalEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() == targets::SIGNAL {
                *self.0.lock() += 1;
            }
        }
    }

    #[test]
    fn test_construct_with_initial_value_does_not_notify() {
        let emits = Arc::new(Mutex::new(0));
        let subscriber = tracing_subscriber::registry().with(SignalEvents(emits.clone()));

        let selector = tracing::subscriber::with_default(subscriber, || {
            IconSelector::new(
                scenario_catalog(),
                SelectorOptions::default().with_initial_value("alert"),
            )
        });
        assert_eq!(selector.selection(), Selection::Selected("alert".into()));
        assert_eq!(*emits.lock(), 0);

        let subscriber = tracing_subscriber::registry().with(SignalEvents(emits.clone()));
        assert!(tracing::subscriber::with_default(subscriber, || selector.select("account")));
        assert_eq!(*emits.lock(), 1);
    }

    #[test]
    fn test_query_drives_visible_set() {
        let selector = IconSelector::new(scenario_catalog(), SelectorOptions::default());
        assert_eq!(selector.visible_names(), vec!["account", "alert"]);

        selector.set_query("ale");
        assert_eq!(selector.visible_names(), vec!["alert"]);

        selector.set_query("zzz");
        assert!(selector.visible().is_empty());

        selector.set_query("");
        assert_eq!(selector.visible().len(), 2);
    }

    #[test]
    fn test_query_changed_only_on_change() {
        let selector = IconSelector::new(scenario_catalog(), SelectorOptions::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        selector.query_changed().connect(move |q| seen_clone.lock().push(q.clone()));

        assert!(selector.set_query("a"));
        assert!(!selector.set_query("a"));
        assert!(selector.set_query("al"));

        assert_eq!(*seen.lock(), vec!["a".to_string(), "al".to_string()]);
        assert_eq!(selector.query_property().get(), "al");
    }

    #[test]
    fn test_handle_event_dispatch() {
        let selector = IconSelector::new(scenario_catalog(), SelectorOptions::default());

        assert!(selector.handle_event(SelectorEvent::QueryChanged("acc".into())));
        assert!(selector.handle_event(SelectorEvent::ItemActivated("account".into())));
        assert!(!selector.handle_event(SelectorEvent::ItemActivated("account".into())));
        assert!(!selector.handle_event(SelectorEvent::ItemActivated("nope".into())));
        assert_eq!(selector.selected_name().as_deref(), Some("account"));

        assert!(selector.handle_event(SelectorEvent::ClearRequested));
        assert!(!selector.handle_event(SelectorEvent::ClearRequested));
        assert_eq!(selector.selection(), Selection::Unselected);
    }

    #[test]
    fn test_selection_independent_of_query() {
        let selector = IconSelector::new(scenario_catalog(), SelectorOptions::default());
        selector.set_query("warning");
        // Selecting an icon hidden by the current query is still valid.
        assert!(selector.select("account"));
    }

    #[test]
    fn test_slot_may_read_selector_state() {
        let selector = Arc::new(IconSelector::new(scenario_catalog(), SelectorOptions::default()));
        let observed = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&selector);
        let observed_clone = observed.clone();
        selector.selection_changed().connect(move |_| {
            if let Some(selector) = weak.upgrade() {
                *observed_clone.lock() = selector.selected_name();
            }
        });

        selector.select("alert");
        assert_eq!(observed.lock().as_deref(), Some("alert"));
    }

    #[test]
    fn test_builder_defaults_to_bundled_catalog() {
        let selector = IconSelector::builder()
            .initial_value("home")
            .placeholder_text("Find")
            .build()
            .unwrap();
        assert_eq!(selector.selected_name().as_deref(), Some("home"));
        assert_eq!(selector.placeholder_text(), "Find");
        assert!(Arc::ptr_eq(selector.catalog(), &Catalog::bundled().unwrap()));
    }
}
