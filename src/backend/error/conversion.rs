/**
 * Error Conversion
 *
 * This module converts backend errors and envelopes to HTTP responses.
 *
 * # Response Format
 *
 * Every response body is an envelope:
 * ```json
 * {
 *   "status": "fail",
 *   "message": "Unhandled Exception occurs"
 * }
 * ```
 *
 * Envelopes returned by services are always HTTP 200, including `fail`
 * ones. Only `BackendError` picks a different status code.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        fail_response(status, self.public_message())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// A `fail` envelope with an explicit status code
pub fn fail_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::fail(message))).into_response()
}
