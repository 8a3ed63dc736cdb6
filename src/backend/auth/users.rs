/**
 * User Directory
 *
 * Reads and writes user profiles in the `user` table, keyed by email.
 */

use std::sync::Arc;

use crate::backend::store::{self, KvStore, StoreResult, Table};
use crate::shared::UserProfile;

#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn KvStore>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Get a user by email
    ///
    /// # Returns
    /// The stored profile, credentials included, or `None` if not found
    pub async fn get(&self, email: &str) -> StoreResult<Option<UserProfile>> {
        store::load(self.store.as_ref(), Table::User, email).await
    }

    /// Create or replace a profile
    pub async fn put(&self, profile: &UserProfile) -> StoreResult<()> {
        store::save(self.store.as_ref(), Table::User, &profile.email, profile).await
    }

    /// Create a profile unless the email is already registered
    ///
    /// # Returns
    /// `false` if a profile with this email already exists
    pub async fn create(&self, profile: &UserProfile) -> StoreResult<bool> {
        store::create(self.store.as_ref(), Table::User, &profile.email, profile).await
    }

    /// Every stored profile, in email order
    pub async fn all(&self) -> StoreResult<Vec<UserProfile>> {
        store::scan_as(self.store.as_ref(), Table::User).await
    }

    /// The user's display name, if they have a profile with one
    pub async fn display_name(&self, email: &str) -> StoreResult<Option<String>> {
        Ok(self.get(email).await?.and_then(|profile| profile.name))
    }
}
