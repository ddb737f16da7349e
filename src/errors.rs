use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Authentication required but missing, invalid, or expired
    #[error("Not authenticated")]
    Unauthorized { message: Option<String> },

    /// The backing store is not configured or cannot serve the request
    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            // Reported as 500 rather than 503: clients treat demo-mode login
            // failures as a server-side configuration problem
            Error::ServiceUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Unauthorized { message } => message.clone().unwrap_or_else(|| "Authentication required".to_string()),
            Error::ServiceUnavailable { message } => message.clone(),
            Error::Database(db_err) => match db_err {
                DbError::Unavailable => "Database not configured".to_string(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(DbError::Unavailable) | Error::ServiceUnavailable { .. } => {
                tracing::warn!("Store unavailable: {}", self);
            }
            Error::Unauthorized { .. } => {
                tracing::info!("Authorization error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({ "detail": self.user_message() });

        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
