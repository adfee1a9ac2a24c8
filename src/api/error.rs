use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::models::ErrorResponse;
use super::validation::IdentifierError;
use crate::resolver::ResolveError;

/// Message returned for every internal failure; details stay in the logs
pub const INTERNAL_FAILURE_MESSAGE: &str = "Failed to load mirrors";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
    #[error("internal error: {0}")]
    Internal(#[from] ResolveError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; never includes internal detail
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidIdentifier(err) => err.to_string(),
            ApiError::Internal(_) => INTERNAL_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse::new(self.public_message());

        (status, Json(body)).into_response()
    }
}
