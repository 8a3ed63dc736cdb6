/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Load the store (Postgres or in-memory)
 * 2. Load the mailer (SMTP or logging)
 * 3. Wire the services around the shared store
 * 4. Create and configure the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::activity::{default_catalog, ActivityOfferGenerator, ActivityService};
use crate::backend::auth::{AccountService, SessionKeys, UserDirectory, VerificationCodes};
use crate::backend::chat::{ChatService, ConversationLedger};
use crate::backend::mail::Mailer;
use crate::backend::matching::{MatchScorer, MatchService};
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_mailer, load_store};
use crate::backend::server::state::AppState;
use crate::backend::store::KvStore;
use crate::shared::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing Mulberry backend server");

    let store = load_store(&config).await;
    let mailer = load_mailer(&config);
    let app = create_app_with(config, store, mailer);

    tracing::info!("Router configured");
    app
}

/// Create the application over explicit backends
pub fn create_app_with(
    config: AppConfig,
    store: Arc<dyn KvStore>,
    mailer: Arc<dyn Mailer>,
) -> Router<()> {
    create_router(build_state(config, store, mailer))
}

/// Wire every service around one store
pub fn build_state(config: AppConfig, store: Arc<dyn KvStore>, mailer: Arc<dyn Mailer>) -> AppState {
    let users = UserDirectory::new(store.clone());
    let sessions = SessionKeys::new(&config.jwt_secret, config.token_ttl_minutes);
    let generator = Arc::new(ActivityOfferGenerator::new(
        store.clone(),
        users.clone(),
        default_catalog(),
    ));

    let accounts = AccountService::new(
        users.clone(),
        sessions.clone(),
        VerificationCodes::new(store.clone(), config.verification_base_url.clone()),
        mailer,
        config.bcrypt_cost,
    );
    let chat = ChatService::new(ConversationLedger::new(store.clone()), users.clone(), generator.clone());
    let activities = ActivityService::new(generator);
    let matches = MatchService::new(store, MatchScorer::new(users, config.match_limit));

    AppState {
        sessions,
        accounts,
        chat,
        activities,
        matches,
    }
}
