//! SQLite implementation of `PaperStore`

use async_trait::async_trait;
use paper_common::db::{
    DomainCitationMean, DomainStageCount, NewPaper, Paper, PaperRow, ScatterPoint, StageCount,
};
use paper_common::{time, uuid_utils, Result};
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info};

use super::{PaperFilter, PaperStore};

const PAPER_COLUMNS: &str =
    "id, title, domain, reading_stage, impact_score, citation_count, date_added, extra";

/// `PaperStore` backed by a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqlitePaperStore {
    pool: SqlitePool,
}

impl SqlitePaperStore {
    /// Wrap a pool whose schema has already been created
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Append `AND column IN (?, ...)` when `values` is non-empty
fn push_in_clause(qb: &mut QueryBuilder<'_, Sqlite>, column: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }

    qb.push(" AND ").push(column).push(" IN (");
    let mut separated = qb.separated(", ");
    for value in values {
        separated.push_bind(value.clone());
    }
    separated.push_unseparated(")");
}

#[async_trait]
impl PaperStore for SqlitePaperStore {
    async fn insert(&self, paper: NewPaper) -> Result<Paper> {
        let id = paper.id.unwrap_or_else(uuid_utils::generate_id);
        let date_added = paper.date_added.unwrap_or_else(time::now);
        let extra = serde_json::to_string(&Value::Object(paper.extra))?;

        let sql = format!(
            "INSERT INTO papers ({PAPER_COLUMNS})
             VALUES (?, ?, ?, ?, ?, COALESCE(?, 0), ?, ?)
             RETURNING {PAPER_COLUMNS}"
        );

        let row: PaperRow = sqlx::query_as(&sql)
            .bind(&id)
            .bind(paper.title)
            .bind(paper.domain)
            .bind(paper.reading_stage)
            .bind(paper.impact_score)
            .bind(paper.citation_count)
            .bind(time::to_millis(date_added))
            .bind(extra)
            .fetch_one(&self.pool)
            .await?;

        info!("Stored paper {}", id);
        Paper::try_from(row)
    }

    async fn find(&self, filter: &PaperFilter) -> Result<Vec<Paper>> {
        let mut qb: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {PAPER_COLUMNS} FROM papers WHERE 1 = 1"));

        push_in_clause(&mut qb, "domain", &filter.domains);
        push_in_clause(&mut qb, "reading_stage", &filter.reading_stages);
        push_in_clause(&mut qb, "impact_score", &filter.impact_scores);

        if let Some(since) = filter.added_since {
            qb.push(" AND date_added >= ").push_bind(time::to_millis(since));
        }

        // rowid keeps same-millisecond inserts in reverse insertion order
        qb.push(" ORDER BY date_added DESC, rowid DESC");

        if filter.is_unconstrained() {
            debug!("Listing all papers");
        } else {
            debug!("Paper query: {}", qb.sql());
        }

        let rows = qb
            .build_query_as::<PaperRow>()
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Paper::try_from).collect()
    }

    async fn count_by_stage(&self) -> Result<Vec<StageCount>> {
        let rows = sqlx::query_as::<_, StageCount>(
            r#"
            SELECT reading_stage AS stage, COUNT(*) AS count
            FROM papers
            GROUP BY reading_stage
            ORDER BY reading_stage ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn scatter_points(&self) -> Result<Vec<ScatterPoint>> {
        let rows = sqlx::query_as::<_, ScatterPoint>(
            r#"
            SELECT id, title, citation_count, impact_score
            FROM papers
            ORDER BY date_added DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count_by_domain_and_stage(&self) -> Result<Vec<DomainStageCount>> {
        let rows = sqlx::query_as::<_, DomainStageCount>(
            r#"
            SELECT domain, reading_stage, COUNT(*) AS count
            FROM papers
            GROUP BY domain, reading_stage
            ORDER BY domain ASC, reading_stage ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn citation_means_by_domain(&self) -> Result<Vec<DomainCitationMean>> {
        let rows = sqlx::query_as::<_, DomainCitationMean>(
            r#"
            SELECT domain, AVG(citation_count) AS mean
            FROM papers
            GROUP BY domain
            ORDER BY domain ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count(&self, reading_stage: Option<&str>) -> Result<i64> {
        let count: i64 = match reading_stage {
            Some(stage) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM papers WHERE reading_stage = ?")
                    .bind(stage)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM papers")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
