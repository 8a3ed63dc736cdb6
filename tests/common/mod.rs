//! Common test utilities and helpers
//!
//! Every test server runs on the in-memory store and the logging mailer, so
//! tests need neither Postgres nor an SMTP relay.

use std::sync::Arc;

use axum_test::TestServer;
use mulberry::backend::auth::{SessionKeys, UserDirectory};
use mulberry::backend::mail::LogMailer;
use mulberry::backend::server::create_app_with;
use mulberry::backend::store::MemoryStore;
use mulberry::shared::{AppConfig, Gender, UserProfile, UserStatus};

pub const TEST_SECRET: &str = "integration-test-secret";

/// A test server plus direct handles on its store
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryStore,
    keys: SessionKeys,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(4)
            .build()
            .expect("test config is valid");
        let store = MemoryStore::new();
        let app = create_app_with(config, Arc::new(store.clone()), Arc::new(LogMailer));

        Self {
            server: TestServer::new(app).unwrap(),
            store,
            keys: SessionKeys::new(TEST_SECRET, 30),
        }
    }

    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(Arc::new(self.store.clone()))
    }

    /// Session token for `email`, valid for this app
    pub fn token(&self, email: &str) -> String {
        self.keys.issue(email).expect("token issued")
    }

    /// Store a completed profile directly
    pub async fn seed_user(
        &self,
        email: &str,
        name: &str,
        gender: Gender,
        location: &str,
        interests: &[&str],
    ) -> UserProfile {
        let mut profile = UserProfile::pending(email, "unused-hash".to_string());
        profile.name = Some(name.to_string());
        profile.gender = Some(gender);
        profile.location = Some(location.to_string());
        profile.interests = interests.iter().map(|i| i.to_string()).collect();
        profile.status = UserStatus::Active;
        self.users().put(&profile).await.expect("seed user");
        profile
    }
}
