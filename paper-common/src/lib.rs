//! # Paper Tracker Common Library
//!
//! Shared code for the paper tracker service:
//! - Paper models and the SQLite schema
//! - Configuration loading
//! - Error types
//! - Utility functions

pub mod config;
pub mod db;
pub mod error;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
