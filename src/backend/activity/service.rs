/**
 * Activity Entry Points
 *
 * Wraps the offer generator into `{status, data, message}` results. Missing
 * offers and non-participants become `fail` envelopes; store failures are
 * propagated as `BackendError`.
 */

use std::sync::Arc;

use crate::backend::activity::generator::{ActivityError, ActivityOfferGenerator};
use crate::backend::auth::identity::Identity;
use crate::backend::error::BackendError;
use crate::shared::{ActivityOffer, ApiResponse};

pub const NO_SUCH_ACTIVITY: &str = "no such activity";
pub const NOT_A_PARTICIPANT: &str = "not a participant of this activity";

#[derive(Clone)]
pub struct ActivityService {
    generator: Arc<ActivityOfferGenerator>,
}

impl ActivityService {
    pub fn new(generator: Arc<ActivityOfferGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &Arc<ActivityOfferGenerator> {
        &self.generator
    }

    pub async fn get_activity(&self, activity_id: &str) -> Result<ApiResponse<ActivityOffer>, BackendError> {
        tracing::info!("get_activity {}", activity_id);
        match self.generator.get_offer(activity_id).await {
            Ok(offer) => Ok(ApiResponse::success(offer)),
            Err(ActivityError::NotFound(_)) => Ok(ApiResponse::fail(NO_SUCH_ACTIVITY)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn accept_activity(
        &self,
        identity: &Identity,
        activity_id: &str,
    ) -> Result<ApiResponse, BackendError> {
        tracing::info!("accept_activity {} by {}", activity_id, identity.email);
        match self.generator.accept(activity_id, &identity.email).await {
            Ok(_) => Ok(ApiResponse::ok()),
            Err(ActivityError::NotFound(_)) => Ok(ApiResponse::fail(NO_SUCH_ACTIVITY)),
            Err(e @ ActivityError::NotParticipant { .. }) => {
                tracing::warn!("Rejected acceptance: {}", e);
                Ok(ApiResponse::fail(NOT_A_PARTICIPANT))
            }
            Err(e) => Err(e.into()),
        }
    }
}
