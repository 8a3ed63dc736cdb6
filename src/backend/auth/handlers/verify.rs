/**
 * Email Verification Handlers
 *
 * - `POST /user/verify/resend/{email}` - Mail a new link
 * - `GET|POST /user/verify/{code}` - Redeem a code
 *
 * Both are public.
 */

use axum::extract::{Path, State};

use crate::backend::auth::accounts::AccountService;
use crate::backend::error::BackendError;
use crate::shared::ApiResponse;

pub async fn resend_verification(
    State(accounts): State<AccountService>,
    Path(email): Path<String>,
) -> Result<ApiResponse, BackendError> {
    accounts.resend_verification(&email).await
}

pub async fn verify(
    State(accounts): State<AccountService>,
    Path(code): Path<String>,
) -> Result<ApiResponse, BackendError> {
    accounts.verify(&code).await
}
