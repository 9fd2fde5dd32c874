//! Paper repository service
//!
//! Sits between the HTTP handlers and the storage gateway: normalizes enum
//! inputs, turns list parameters into store filters and assembles the
//! analytics view from grouped store queries.

pub mod analytics;
pub mod filter;
pub mod normalize;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use paper_common::db::{NewPaper, Paper, FULLY_READ_STAGE};
use paper_common::{time, Result};
use tracing::debug;

use crate::db::PaperStore;
pub use analytics::{Analytics, CompletionRate, DomainAverage, Summary};
pub use filter::{DateWindow, PaperQuery};
pub use normalize::normalize_enum;

/// Domain operations over a `PaperStore`
#[derive(Clone)]
pub struct PaperService {
    store: Arc<dyn PaperStore>,
}

impl PaperService {
    pub fn new(store: Arc<dyn PaperStore>) -> Self {
        Self { store }
    }

    /// Normalize enum fields and persist a new paper
    pub async fn add_paper(&self, mut input: NewPaper) -> Result<Paper> {
        input.domain = input.domain.as_deref().map(normalize_enum);
        input.reading_stage = input.reading_stage.as_deref().map(normalize_enum);
        input.impact_score = input.impact_score.as_deref().map(normalize_enum);

        self.store.insert(input).await
    }

    /// Papers matching `query`, newest first
    pub async fn fetch_papers(&self, query: &PaperQuery) -> Result<Vec<Paper>> {
        self.fetch_papers_at(query, time::now()).await
    }

    /// As `fetch_papers`, with date windows measured back from `now`
    pub async fn fetch_papers_at(&self, query: &PaperQuery, now: DateTime<Utc>) -> Result<Vec<Paper>> {
        let filter = query.to_filter(now);
        debug!("Fetching papers with {:?}", filter);

        self.store.find(&filter).await
    }

    /// Funnel, scatter, stacked-bar and summary data over all papers
    pub async fn fetch_analytics(&self) -> Result<Analytics> {
        let (funnel_data, scatter_data, stacked_bar_data, means, total_papers, fully_read) =
            tokio::try_join!(
                self.store.count_by_stage(),
                self.store.scatter_points(),
                self.store.count_by_domain_and_stage(),
                self.store.citation_means_by_domain(),
                self.store.count(None),
                self.store.count(Some(FULLY_READ_STAGE)),
            )?;

        Ok(Analytics {
            funnel_data,
            scatter_data,
            stacked_bar_data,
            summary: Summary {
                total_papers,
                completion_rate: CompletionRate::from_counts(fully_read, total_papers),
                average_citations_per_domain: analytics::domain_averages(means),
            },
        })
    }

    /// Release the store's resources
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
