//! Core reactive primitives for mdi-picker.
//!
//! This crate provides the building blocks the icon selector is made of:
//!
//! - **Signal/Slot System**: Type-safe notification from a component to its host
//! - **Property System**: Values with change detection, so notifications only
//!   fire when something actually changed
//! - **Logging**: `tracing` targets and the `PerfSpan` guard shared by the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use mdi_picker_core::Signal;
//!
//! let icon_changed = Signal::<Option<String>>::new();
//!
//! let conn_id = icon_changed.connect(|name| {
//!     println!("Icon is now: {:?}", name);
//! });
//!
//! icon_changed.emit(Some("account".to_string()));
//! icon_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use mdi_picker_core::{Property, Signal};
//!
//! struct Query {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl Query {
//!     fn set(&self, text: &str) {
//!         if self.text.set(text.to_string()) {
//!             self.text_changed.emit(text.to_string());
//!         }
//!     }
//! }
//!
//! let query = Query { text: Property::new(String::new()), text_changed: Signal::new() };
//! query.set("arrow");
//! assert_eq!(query.text.get(), "arrow");
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
