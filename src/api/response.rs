//! Response types for the Roster Generation Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("VALIDATION_ERROR", message),
            },
            EngineError::CellLocked { .. } => ApiErrorResponse {
                status: StatusCode::LOCKED,
                error: ApiError::new("CELL_LOCKED", message),
            },
            EngineError::WriteConflict { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "WRITE_CONFLICT",
                    message,
                    "The entry changed since it was read; re-fetch and retry the edit",
                ),
            },
            EngineError::AssignmentBlocked { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("ASSIGNMENT_BLOCKED", message),
            },
            EngineError::EntryNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ENTRY_NOT_FOUND", message),
            },
            EngineError::RosterNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ROSTER_NOT_FOUND", message),
            },
            EngineError::GenerationInProgress { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("GENERATION_IN_PROGRESS", message),
            },
            EngineError::UnknownShift { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("UNKNOWN_SHIFT", message),
            },
            EngineError::InvalidTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_TRANSITION", message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", message),
                }
            }
        }
    }
}
