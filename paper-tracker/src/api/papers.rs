//! Paper endpoints
//!
//! - `POST /api/papers`: create
//! - `GET /api/papers`: list with filters
//! - `GET /api/papers/analytics`: aggregate views

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use paper_common::db::{NewPaper, Paper};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::service::{Analytics, PaperQuery};
use crate::AppState;

/// POST /api/papers
///
/// Enum fields may be sent in spaced form. A body that fails to parse is
/// reported like any other creation failure.
pub async fn create_paper(
    State(state): State<AppState>,
    payload: Result<Json<NewPaper>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Paper>)> {
    let Json(input) = payload.map_err(|e| ApiError::Create(e.body_text()))?;
    debug!("Create paper request: {:?}", input);

    let paper = state
        .service
        .add_paper(input)
        .await
        .map_err(|e| ApiError::Create(e.to_string()))?;

    info!("Created paper {} ({})", paper.id, paper.title);
    Ok((StatusCode::CREATED, Json(paper)))
}

/// GET /api/papers?domain=..&readingStage=..&impactScore=..&dateAdded=..
pub async fn get_papers(
    State(state): State<AppState>,
    query: Result<Query<PaperQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Paper>>> {
    let Query(query) = query.map_err(|e| ApiError::Fetch(e.body_text()))?;

    let papers = state
        .service
        .fetch_papers(&query)
        .await
        .map_err(|e| ApiError::Fetch(e.to_string()))?;

    debug!("Returning {} papers", papers.len());
    Ok(Json(papers))
}

/// GET /api/papers/analytics
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<Json<Analytics>> {
    let analytics = state
        .service
        .fetch_analytics()
        .await
        .map_err(|e| ApiError::Analytics(e.to_string()))?;

    Ok(Json(analytics))
}
