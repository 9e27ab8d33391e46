// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod actions;
pub mod api;
pub mod config;
pub mod language;
pub mod location;
pub mod pipeline;
pub mod report;
pub mod severity;
pub mod store;
pub mod summarize;
pub mod taxonomy;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::pipeline::{CallerMeta, ReportPipeline};
pub use crate::report::{DashboardSummary, EmergencyReport};
pub use crate::severity::Severity;
pub use crate::store::ReportStore;
pub use crate::summarize::Summarizer;
pub use crate::taxonomy::Category;
