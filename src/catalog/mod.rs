pub mod builtin;
pub mod fixture;

pub use fixture::FixtureCatalog;

use crate::models::{ProductResult, SummaryReport};

/// Source of the payloads revealed during a run.
///
/// The sequencer asks for results and the summary at reveal time, so an
/// implementation backed by a live search or ranking service can replace the
/// fixture without touching the run state machine.
pub trait CatalogProvider: Send + Sync {
    fn results(&self, query: &str) -> Vec<ProductResult>;

    fn summary(&self, query: &str) -> SummaryReport;

    /// Number of products a completed run reports in its notification.
    fn result_count(&self, query: &str) -> usize {
        self.results(query).len()
    }
}
