/**
 * Match Entry Point
 *
 * Serves a user's daily match list from the `match` table, computing it
 * only when no record exists or the stored list is empty. A non-empty
 * list is returned as-is until it is removed from the store.
 */

use std::sync::Arc;

use crate::backend::auth::identity::Identity;
use crate::backend::error::BackendError;
use crate::backend::matching::scorer::MatchScorer;
use crate::backend::store::{self, KvStore, Table};
use crate::shared::{ApiResponse, MatchRecord};

pub const USER_DOES_NOT_EXIST: &str = "User doesn't exist";

#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn KvStore>,
    scorer: MatchScorer,
}

impl MatchService {
    pub fn new(store: Arc<dyn KvStore>, scorer: MatchScorer) -> Self {
        Self { store, scorer }
    }

    pub async fn get_matches(&self, identity: &Identity) -> Result<ApiResponse<Vec<String>>, BackendError> {
        tracing::info!("get_matches for {}", identity.email);
        let cached: Option<MatchRecord> =
            store::load(self.store.as_ref(), Table::Match, &identity.email).await?;

        if let Some(record) = cached.filter(|record| !record.today.is_empty()) {
            return Ok(ApiResponse::success(record.today));
        }

        let Some(today) = self.scorer.compute_matches(&identity.email).await? else {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        };

        let record = MatchRecord {
            email: identity.email.clone(),
            today,
            computed_at: chrono::Utc::now().to_rfc3339(),
        };
        store::save(self.store.as_ref(), Table::Match, &record.email, &record).await?;

        Ok(ApiResponse::success(record.today))
    }
}
