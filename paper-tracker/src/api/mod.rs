//! HTTP API handlers for paper-tracker

pub mod health;
pub mod papers;

pub use health::health_routes;
pub use papers::{create_paper, get_analytics, get_papers};
