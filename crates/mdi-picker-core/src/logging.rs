//! Logging facilities for mdi-picker.
//!
//! mdi-picker uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("mdi_picker=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "mdi_picker_core::signal";
    /// Catalog loading and validation.
    pub const CATALOG: &str = "mdi_picker::catalog";
    /// Filter engine.
    pub const FILTER: &str = "mdi_picker::filter";
    /// Selection state transitions.
    pub const SELECTION: &str = "mdi_picker::selection";
    /// Options loading.
    pub const OPTIONS: &str = "mdi_picker::options";
    /// Component registry.
    pub const REGISTRY: &str = "mdi_picker::registry";
    /// Performance spans.
    pub const PERF: &str = "mdi_picker::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of one-off operations such as catalog loading.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
