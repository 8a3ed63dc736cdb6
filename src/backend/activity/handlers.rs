/**
 * Activity Handlers
 *
 * - `GET /activity/{activity_id}` - Offer details
 * - `PUT /activity/status/{activity_id}` - Accept the offer
 *
 * Both routes sit behind the auth middleware.
 */

use axum::extract::{Path, State};

use crate::backend::activity::service::ActivityService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{ActivityOffer, ApiResponse};

pub async fn get_activity(
    State(activities): State<ActivityService>,
    AuthUser(_identity): AuthUser,
    Path(activity_id): Path<String>,
) -> Result<ApiResponse<ActivityOffer>, BackendError> {
    activities.get_activity(&activity_id).await
}

pub async fn accept_activity(
    State(activities): State<ActivityService>,
    AuthUser(identity): AuthUser,
    Path(activity_id): Path<String>,
) -> Result<ApiResponse, BackendError> {
    activities.accept_activity(&identity, &activity_id).await
}
