//! Error types for mlib-catalog
//!
//! Every failure reaching the HTTP boundary is one of four kinds, mapped to
//! 400/404/500/500 with a `{"error": "..."}` body. Internal detail is logged,
//! not returned.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::EnrichmentError;

/// Catalog operation error
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or invalid input (400)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// No song with the given id (404)
    #[error("Song not found: {0}")]
    NotFound(i64),

    /// Song info service unreachable, failed, or answered garbage (500)
    #[error("Enrichment failed: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Persistence failure (500)
    #[error("Storage failure: {0}")]
    Storage(#[from] mlib_common::Error),
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::Validation(rejection.body_text())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CatalogError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "Song not found".to_string()),
            CatalogError::Enrichment(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch song details from the song info service".to_string(),
            ),
            CatalogError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access song storage".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for catalog operations and API handlers
pub type CatalogResult<T> = Result<T, CatalogError>;
