//! Error type for the graph generator and the output writers.
//!
//! The search core never fails: an empty open set, a missing path and a duplicate
//! insertion are ordinary results. Errors only come from user supplied parameters
//! and from writing output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaypointError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize frames: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid wiring mode: {0} (expected \"radius\" or \"random\")")]
    InvalidWiringMode(String),

    #[error("Invalid graph parameters: {0}")]
    InvalidParams(String),
}
