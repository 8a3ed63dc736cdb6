/**
 * Activity Offer Generator
 *
 * Creates one randomized activity offer per conversation and tracks both
 * participants' acceptance.
 *
 * # Identity
 *
 * An offer is stored in the `activity` table under the key of the
 * conversation it belongs to, so the offer id and the conversation key are
 * the same string.
 *
 * # At Most Once
 *
 * `generate` writes with a conditional create. When an offer already exists
 * it fails with `ActivityError::AlreadyExists` and leaves the stored offer
 * untouched, even when two sends race past the existence check.
 *
 * # Randomness
 *
 * The catalog entry is chosen uniformly from an injected `StdRng`. Seed it
 * with `with_rng` for deterministic tests.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::backend::auth::users::UserDirectory;
use crate::backend::store::{self, KvStore, StoreError, Table};
use crate::shared::messaging::{ConversationKey, Slot};
use crate::shared::{ActivityDescriptor, ActivityOffer, SharedError};

/// Activity errors
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("no such activity: {0}")]
    NotFound(String),

    #[error("activity {0} already exists")]
    AlreadyExists(ConversationKey),

    #[error("{email} is not a participant of activity {activity}")]
    NotParticipant {
        activity: ConversationKey,
        email: String,
    },

    #[error("activity catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ActivityOfferGenerator {
    store: Arc<dyn KvStore>,
    users: UserDirectory,
    catalog: Arc<[ActivityDescriptor]>,
    rng: Mutex<StdRng>,
}

impl ActivityOfferGenerator {
    pub fn new(
        store: Arc<dyn KvStore>,
        users: UserDirectory,
        catalog: Arc<[ActivityDescriptor]>,
    ) -> Self {
        Self::with_rng(store, users, catalog, StdRng::from_entropy())
    }

    pub fn with_rng(
        store: Arc<dyn KvStore>,
        users: UserDirectory,
        catalog: Arc<[ActivityDescriptor]>,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            users,
            catalog,
            rng: Mutex::new(rng),
        }
    }

    /// Whether an offer exists for the conversation
    pub async fn check_exists(&self, key: &ConversationKey) -> Result<bool, ActivityError> {
        Ok(self
            .store
            .get(Table::Activity, &key.to_string())
            .await?
            .is_some())
    }

    fn pick(&self) -> Result<ActivityDescriptor, ActivityError> {
        if self.catalog.is_empty() {
            return Err(ActivityError::EmptyCatalog);
        }
        let index = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .gen_range(0..self.catalog.len());
        Ok(self.catalog[index].clone())
    }

    /// Create the offer for the conversation between `user_a` and `user_b`
    ///
    /// # Returns
    /// The activity id, equal to the conversation key
    ///
    /// # Errors
    /// `AlreadyExists` if the conversation already has an offer
    pub async fn generate(&self, user_a: &str, user_b: &str) -> Result<ConversationKey, ActivityError> {
        let key = ConversationKey::resolve(user_a, user_b)?;
        if self.check_exists(&key).await? {
            return Err(ActivityError::AlreadyExists(key));
        }

        let activity = self.pick()?;
        let first_name = self.users.display_name(key.first()).await?;
        let second_name = self.users.display_name(key.second()).await?;
        let offer = ActivityOffer::new(key.clone(), activity, first_name, second_name);

        let created = store::create(self.store.as_ref(), Table::Activity, &key.to_string(), &offer).await?;
        if !created {
            return Err(ActivityError::AlreadyExists(key));
        }

        tracing::info!("Generated activity '{}' for {}", offer.activity.name, key);
        Ok(key)
    }

    /// Load an offer by id
    pub async fn get_offer(&self, activity_id: &str) -> Result<ActivityOffer, ActivityError> {
        let key = ConversationKey::parse(activity_id)
            .map_err(|_| ActivityError::NotFound(activity_id.to_string()))?;
        store::load(self.store.as_ref(), Table::Activity, &key.to_string())
            .await?
            .ok_or_else(|| ActivityError::NotFound(activity_id.to_string()))
    }

    /// Record that `email` accepts the offer
    ///
    /// Sets exactly the acceptance flag of the participant whose stored
    /// email matches.
    ///
    /// # Returns
    /// The slot that was accepted
    pub async fn accept(&self, activity_id: &str, email: &str) -> Result<Slot, ActivityError> {
        let mut offer = self.get_offer(activity_id).await?;
        let slot = offer
            .slot_for_email(email)
            .ok_or_else(|| ActivityError::NotParticipant {
                activity: offer.id.clone(),
                email: email.to_string(),
            })?;

        offer.accept(slot);
        store::save(self.store.as_ref(), Table::Activity, &offer.id.to_string(), &offer).await?;
        Ok(slot)
    }
}
