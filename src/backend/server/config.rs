/**
 * Service Loading
 *
 * Picks the storage and mail backends from `AppConfig`.
 *
 * # Error Handling
 *
 * Backend failures are logged but do not prevent server startup. Without
 * a reachable database the server runs on the in-memory store; without an
 * SMTP relay outgoing mail is logged instead of sent.
 */

use std::sync::Arc;

use crate::backend::mail::{LogMailer, Mailer, SmtpMailer};
use crate::backend::store::{KvStore, MemoryStore, PgStore};
use crate::shared::AppConfig;

/// Connect the configured store, falling back to memory
pub async fn load_store(config: &AppConfig) -> Arc<dyn KvStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not survive a restart.");
        return Arc::new(MemoryStore::new());
    };

    tracing::info!("Connecting to database...");
    match PgStore::connect(database_url).await {
        Ok(store) => {
            tracing::info!("Database connected and migrations applied");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            tracing::warn!("Falling back to the in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Build the configured mailer, falling back to logging
pub fn load_mailer(config: &AppConfig) -> Arc<dyn Mailer> {
    let Some(smtp) = &config.smtp else {
        tracing::warn!("SMTP_HOST not set. Verification mail will only be logged.");
        return Arc::new(LogMailer);
    };

    match SmtpMailer::new(config.mail_from.clone(), smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP relay configured: {}", smtp.host);
            Arc::new(mailer)
        }
        Err(e) => {
            tracing::error!("Failed to configure SMTP relay {}: {}", smtp.host, e);
            Arc::new(LogMailer)
        }
    }
}
