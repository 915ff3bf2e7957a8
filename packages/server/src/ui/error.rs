//! Mapping of domain errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RoomError, ValueObjectError},
    infrastructure::dto::http::ErrorResponse,
};

/// Error returned by HTTP and WebSocket handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Room(RoomError::RoomNameTaken(_)) => StatusCode::CONFLICT,
            ApiError::Room(RoomError::RoomNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Room(RoomError::WrongSecret) => StatusCode::FORBIDDEN,
            ApiError::Room(RoomError::PoolUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
