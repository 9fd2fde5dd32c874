//! Database models
//!
//! Enumerated fields (`domain`, `reading_stage`, `impact_score`) are plain
//! strings held in canonical, whitespace-free form. The set of accepted
//! values is not enforced here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{time, Error, Result};

/// Canonical reading stage counted as "completed" by the summary statistics
pub const FULLY_READ_STAGE: &str = "FullyRead";

/// A persisted paper record
///
/// Fields beyond the core schema are kept in `extra` and flattened back into
/// the JSON object on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub reading_stage: String,
    pub impact_score: String,
    pub citation_count: i64,
    pub date_added: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Creation input, as received from callers
///
/// Every core field is optional at this layer: missing values travel to the
/// store, which rejects them through its `NOT NULL` constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaper {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub reading_stage: Option<String>,
    #[serde(default)]
    pub impact_score: Option<String>,
    #[serde(default)]
    pub citation_count: Option<i64>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw `papers` row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaperRow {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub reading_stage: String,
    pub impact_score: String,
    pub citation_count: i64,
    pub date_added: i64,
    pub extra: String,
}

impl TryFrom<PaperRow> for Paper {
    type Error = Error;

    fn try_from(row: PaperRow) -> Result<Self> {
        let date_added = time::from_millis(row.date_added).ok_or_else(|| {
            Error::Internal(format!(
                "date_added out of range for paper {}: {}",
                row.id, row.date_added
            ))
        })?;

        let extra = match serde_json::from_str::<Value>(&row.extra)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::Internal(format!(
                    "extra for paper {} is not a JSON object: {}",
                    row.id, other
                )))
            }
        };

        Ok(Paper {
            id: row.id,
            title: row.title,
            domain: row.domain,
            reading_stage: row.reading_stage,
            impact_score: row.impact_score,
            citation_count: row.citation_count,
            date_added,
            extra,
        })
    }
}

/// Paper count for one reading stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StageCount {
    pub stage: String,
    pub count: i64,
}

/// One citation/impact point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub id: String,
    pub title: String,
    pub citation_count: i64,
    pub impact_score: String,
}

/// Paper count for one (domain, reading stage) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DomainStageCount {
    pub domain: String,
    pub reading_stage: String,
    pub count: i64,
}

/// Unrounded mean citation count for one domain
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DomainCitationMean {
    pub domain: String,
    pub mean: f64,
}
