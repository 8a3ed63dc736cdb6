/**
 * Login Handler
 *
 * `POST /user/login` - Public. Verifies the bcrypt hash and returns the
 * profile (without password) together with a fresh session token.
 */

use axum::extract::State;

use crate::backend::auth::accounts::AccountService;
use crate::backend::auth::handlers::types::{LoginData, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::middleware::ApiJson;
use crate::shared::ApiResponse;

pub async fn login(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<ApiResponse<LoginData>, BackendError> {
    accounts.login(request).await
}
