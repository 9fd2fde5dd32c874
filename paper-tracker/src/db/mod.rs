//! Storage gateway for paper records
//!
//! `PaperStore` is the seam between the repository service and the
//! relational engine. `SqlitePaperStore` is the production implementation;
//! tests substitute their own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use paper_common::db::{DomainCitationMean, DomainStageCount, NewPaper, Paper, ScatterPoint, StageCount};
use paper_common::Result;

mod sqlite;
pub use sqlite::SqlitePaperStore;

/// Row constraints for a paper listing
///
/// An empty value list places no constraint on its column. Values are
/// expected in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperFilter {
    pub domains: Vec<String>,
    pub reading_stages: Vec<String>,
    pub impact_scores: Vec<String>,
    /// Inclusive lower bound on `date_added`
    pub added_since: Option<DateTime<Utc>>,
}

impl PaperFilter {
    /// True when no constraint is set
    pub fn is_unconstrained(&self) -> bool {
        self.domains.is_empty()
            && self.reading_stages.is_empty()
            && self.impact_scores.is_empty()
            && self.added_since.is_none()
    }
}

/// Persistence and query capability for paper records
///
/// Every method is a single statement against the store; no method retries.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Persist a paper, assigning `id` and `date_added` when absent
    async fn insert(&self, paper: NewPaper) -> Result<Paper>;

    /// Papers matching `filter`, newest `date_added` first
    async fn find(&self, filter: &PaperFilter) -> Result<Vec<Paper>>;

    /// Paper count per observed reading stage
    async fn count_by_stage(&self) -> Result<Vec<StageCount>>;

    /// Citation/impact projection of every paper
    async fn scatter_points(&self) -> Result<Vec<ScatterPoint>>;

    /// Paper count per observed (domain, reading stage) pair
    async fn count_by_domain_and_stage(&self) -> Result<Vec<DomainStageCount>>;

    /// Mean citation count per observed domain
    async fn citation_means_by_domain(&self) -> Result<Vec<DomainCitationMean>>;

    /// Total paper count, optionally restricted to one reading stage
    async fn count(&self, reading_stage: Option<&str>) -> Result<i64>;

    /// Release underlying resources
    async fn close(&self) {}
}
