/**
 * Signup Handler
 *
 * `POST /user/signup` - Public. Creates a `PENDING` account and mails a
 * verification link. See `AccountService::signup` for the envelope rules.
 */

use axum::extract::State;

use crate::backend::auth::accounts::AccountService;
use crate::backend::auth::handlers::types::{AuthToken, SignupRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::shared::ApiResponse;

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /user/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "status": "success",
///   "data": { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// }
/// ```
pub async fn signup(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<ApiResponse<AuthToken>, BackendError> {
    accounts.signup(request).await
}
