use axum::extract::State;

use crate::backend::error::BackendError;
use crate::backend::matching::service::MatchService;
use crate::backend::middleware::AuthUser;
use crate::shared::ApiResponse;

/// `GET /match` - The caller's daily match list
pub async fn get_matches(
    State(matches): State<MatchService>,
    AuthUser(identity): AuthUser,
) -> Result<ApiResponse<Vec<String>>, BackendError> {
    matches.get_matches(&identity).await
}
