//! HTTP error handling and response conversion.
//!
//! Errors from the domain and infrastructure layers are mapped to HTTP status
//! codes and a JSON body of the form `{"error": "..."}`. The detailed cause is
//! logged; only a user-safe message is returned.

use crate::domain::{gsdp::errors::GsdpError, shared::errors::DomainError};
use crate::infrastructure::geography::geojson_store::GeoJsonError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// GSDP source or boundary file could not be read (500).
    DataSource(String),

    /// Tag store operation failed (500).
    Database(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::DataSource(msg) => write!(f, "Data source error: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DataSource(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::DataSource(_) => "Data source unavailable".into(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InfrastructureError(msg) => AppError::Database(msg),
        }
    }
}

// === GSDP Ingestion Error Conversion ===

impl From<GsdpError> for AppError {
    fn from(err: GsdpError) -> Self {
        match err {
            GsdpError::SourceUnavailable { .. } => AppError::DataSource(err.to_string()),
            GsdpError::IngestionAborted(msg) => AppError::Internal(msg),
        }
    }
}

// === Boundary File Error Conversion ===

impl From<GeoJsonError> for AppError {
    fn from(err: GeoJsonError) -> Self {
        match err {
            GeoJsonError::Missing(path) => {
                tracing::error!(path = %path, "GeoJSON file not found");
                AppError::NotFound("GeoJSON file not found".into())
            }
            other => AppError::DataSource(other.to_string()),
        }
    }
}
