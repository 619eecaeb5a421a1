//! API error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use wisdomarc_core::{Error, ErrorPayload};

/// Core error rendered as `{error, message, timestamp}`
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// Status code for the wrapped error
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::InvalidQuery(_) | Error::InvalidConfig { .. } => StatusCode::BAD_REQUEST,
            Error::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorPayload::from(&self.0))).into_response()
    }
}
