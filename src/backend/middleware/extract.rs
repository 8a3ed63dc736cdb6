/**
 * Request Body and Query Extractors
 *
 * `ApiJson` and `ApiQuery` wrap axum's `Json` and `Query`. A body or query
 * string that does not deserialize is answered with a `fail` envelope
 * instead of axum's plain-text rejection.
 *
 * ```rust,ignore
 * pub async fn login(
 *     State(accounts): State<AccountService>,
 *     ApiJson(request): ApiJson<LoginRequest>,
 * ) -> Result<ApiResponse<LoginData>, BackendError>
 * ```
 */

use axum::extract::{FromRequest, FromRequestParts};

use crate::backend::error::BackendError;

/// JSON body whose rejection is a `BackendError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct ApiJson<T>(pub T);

/// Query string whose rejection is a `BackendError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(BackendError))]
pub struct ApiQuery<T>(pub T);
