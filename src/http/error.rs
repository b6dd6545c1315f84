//! Central translation of service and routing failures into HTTP responses.

use super::envelope::ApiResponse;
use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

/// Error taxonomy surfaced by the API, mapped to a status code once at the
/// response boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Client-supplied data failed a validation rule; the field-level
    /// message is surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    /// The referenced task does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request path matched no route; distinct from a missing task.
    #[error("Route {method} {path} not found")]
    RouteNotFound {
        /// Request method.
        method: String,
        /// Request path.
        path: String,
    },

    /// Store or unexpected failure; detail is hidden from the client
    /// outside non-production builds.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns failure detail for the response body, only in builds where
    /// exposing it is acceptable.
    fn detail(&self) -> Option<String> {
        if !cfg!(debug_assertions) {
            return None;
        }
        match self {
            Self::Internal(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(validation) => Self::Validation(validation.to_string()),
            TaskServiceError::NotFound(_) => Self::NotFound(err.to_string()),
            TaskServiceError::Repository(repository) => Self::Internal(repository.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(detail) = &self {
            error!(%status, detail, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let body = ApiResponse::failure(self.to_string(), self.detail());
        (status, Json(body)).into_response()
    }
}
