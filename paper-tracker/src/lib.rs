//! paper-tracker library
//!
//! Record keeping for papers being read: create, filtered listing and
//! reading-progress analytics over a SQLite store.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod db;
pub mod error;
pub mod service;

use db::{PaperStore, SqlitePaperStore};
use service::PaperService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PaperService,
}

impl AppState {
    /// Create application state over any store
    pub fn new(store: Arc<dyn PaperStore>) -> Self {
        Self {
            service: PaperService::new(store),
        }
    }

    /// Create application state over a SQLite pool with the schema in place
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SqlitePaperStore::new(pool)))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let papers = Router::new()
        .route("/api/papers", get(api::get_papers).post(api::create_paper))
        .route("/api/papers/analytics", get(api::get_analytics));

    Router::new()
        .merge(papers)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
