//! Selection state for the icon selector.
//!
//! [`SelectionModel`] holds at most one selected icon name and notifies
//! listeners through [`SelectionModel::selection_changed`] whenever the
//! selection actually changes.
//!
//! # Transitions
//!
//! | From          | Operation         | To                | Notifies     |
//! |---------------|-------------------|-------------------|--------------|
//! | any           | `select(known)`   | `Selected(known)` | if different |
//! | any           | `select(unknown)` | unchanged         | no           |
//! | `Selected(_)` | `clear()`         | `Unselected`      | `None`       |
//! | `Unselected`  | `clear()`         | `Unselected`      | no           |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mdi_picker::{Catalog, IconRecord, SelectionModel};
//!
//! let catalog = Arc::new(Catalog::from_records(vec![
//!     IconRecord::new("account", ["person"]),
//! ]).unwrap());
//!
//! let selection = SelectionModel::new(catalog, None);
//! selection.selection_changed.connect(|name| println!("now: {name:?}"));
//!
//! assert!(selection.select("account"));
//! assert!(!selection.select("account"));
//! assert!(!selection.select("missing"));
//! ```

use std::fmt;
use std::sync::Arc;

use mdi_picker_core::logging::targets;
use mdi_picker_core::{Property, Signal};

use crate::catalog::{Catalog, IconRecord};

/// The current selection of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No icon is selected.
    #[default]
    Unselected,
    /// The named icon is selected. Always names a catalog entry.
    Selected(String),
}

impl Selection {
    /// The selected name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Selected(name) => Some(name),
        }
    }

    /// Whether an icon is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unselected => write!(f, "(none)"),
            Self::Selected(name) => write!(f, "{name}"),
        }
    }
}

/// Tracks the selected icon of a catalog and notifies on change.
pub struct SelectionModel {
    catalog: Arc<Catalog>,
    current: Property<Selection>,
    /// Emitted once per accepted change with the new name, or `None` on clear.
    pub selection_changed: Signal<Option<String>>,
}

impl SelectionModel {
    /// Creates a selection model.
    ///
    /// Starts as `Selected(initial)` when `initial` names a catalog entry,
    /// otherwise `Unselected`. Construction never notifies.
    pub fn new(catalog: Arc<Catalog>, initial: Option<&str>) -> Self {
        let current = match initial {
            Some(name) if catalog.contains(name) => Selection::Selected(name.to_string()),
            Some(name) => {
                tracing::warn!(
                    target: targets::SELECTION,
                    name,
                    "initial value is not in the catalog, starting unselected"
                );
                Selection::Unselected
            }
            None => Selection::Unselected,
        };

        Self {
            catalog,
            current: Property::new(current),
            selection_changed: Signal::new(),
        }
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.current.get()
    }

    /// The currently selected name, if any.
    pub fn selected_name(&self) -> Option<String> {
        self.current.with(|s| s.name().map(str::to_string))
    }

    /// The currently selected record, if any.
    pub fn selected_record(&self) -> Option<&IconRecord> {
        let name = self.selected_name()?;
        self.catalog.get(&name)
    }

    /// Whether `name` is the current selection.
    pub fn is_selected(&self, name: &str) -> bool {
        self.current.with(|s| s.name() == Some(name))
    }

    /// Selects `name`.
    ///
    /// Returns `true` and notifies if the selection changed. Unknown names
    /// and re-selecting the current name are silent no-ops.
    pub fn select(&self, name: &str) -> bool {
        if !self.catalog.contains(name) {
            tracing::debug!(target: targets::SELECTION, name, "ignoring unknown icon");
            return false;
        }

        if !self.current.set(Selection::Selected(name.to_string())) {
            return false;
        }

        tracing::debug!(target: targets::SELECTION, name, "icon selected");
        self.selection_changed.emit(Some(name.to_string()));
        true
    }

    /// Clears the selection.
    ///
    /// Returns `true` and notifies with `None` if something was selected.
    pub fn clear(&self) -> bool {
        if !self.current.set(Selection::Unselected) {
            return false;
        }

        tracing::debug!(target: targets::SELECTION, "selection cleared");
        self.selection_changed.emit(None);
        true
    }
}

impl fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("current", &self.current.get())
            .field("catalog_len", &self.catalog.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_records(vec![
                IconRecord::new("account", ["person", "user"]),
                IconRecord::new("alert", ["warning"]),
            ])
            .unwrap(),
        )
    }

    fn record(model: &SelectionModel) -> Arc<Mutex<Vec<Option<String>>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        model.selection_changed.connect(move |name| {
            log_clone.lock().push(name.clone());
        });
        log
    }

    #[test]
    fn test_initial_value_selected() {
        let model = SelectionModel::new(catalog(), Some("alert"));
        assert_eq!(model.selection(), Selection::Selected("alert".into()));
        assert_eq!(model.selected_record().map(IconRecord::name), Some("alert"));
    }

    #[test]
    fn test_unknown_initial_value_ignored() {
        let model = SelectionModel::new(catalog(), Some("nope"));
        assert_eq!(model.selection(), Selection::Unselected);
    }

    #[test]
    fn test_select_twice_notifies_once() {
        let model = SelectionModel::new(catalog(), None);
        let log = record(&model);

        assert!(model.select("account"));
        assert!(!model.select("account"));

        assert_eq!(*log.lock(), vec![Some("account".to_string())]);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let model = SelectionModel::new(catalog(), Some("alert"));
        let log = record(&model);

        assert!(!model.select("zzz"));

        assert_eq!(model.selected_name().as_deref(), Some("alert"));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_clear_twice_notifies_once() {
        let model = SelectionModel::new(catalog(), Some("alert"));
        let log = record(&model);

        assert!(model.clear());
        assert!(!model.clear());

        assert_eq!(*log.lock(), vec![None]);
        assert!(!model.selection().is_selected());
    }

    #[test]
    fn test_switching_selection() {
        let model = SelectionModel::new(catalog(), None);
        let log = record(&model);

        model.select("account");
        model.select("alert");

        assert!(model.is_selected("alert"));
        assert_eq!(
            *log.lock(),
            vec![Some("account".to_string()), Some("alert".to_string())]
        );
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(Selection::Unselected.to_string(), "(none)");
        assert_eq!(Selection::Selected("home".into()).to_string(), "home");
    }
}
