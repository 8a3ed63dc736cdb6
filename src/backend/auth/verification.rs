/**
 * Email Verification Codes
 *
 * Codes are 10 characters from `A-Z0-9`, stored in the `cache` table keyed
 * by the code itself. Redeeming a code removes every code ever issued for
 * the same email, so older links stop working too.
 */

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::store::{self, KvStore, StoreResult, Table};

const CODE_LENGTH: usize = 10;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PURPOSE: &str = "email_verification";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEntry {
    pub key: String,
    pub email: String,
    pub purpose: String,
}

#[derive(Clone)]
pub struct VerificationCodes {
    store: Arc<dyn KvStore>,
    base_url: String,
}

impl VerificationCodes {
    pub fn new(store: Arc<dyn KvStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Store a fresh code for `email` and return the verification link
    pub async fn issue_link(&self, email: &str) -> StoreResult<String> {
        let code = generate_code();
        let entry = VerificationEntry {
            key: code.clone(),
            email: email.to_string(),
            purpose: PURPOSE.to_string(),
        };
        store::save(self.store.as_ref(), Table::Cache, &code, &entry).await?;
        Ok(format!("{}/user/verify/{}", self.base_url.trim_end_matches('/'), code))
    }

    /// Consume `code`
    ///
    /// # Returns
    /// The email the code was issued for, or `None` if it is unknown
    pub async fn redeem(&self, code: &str) -> StoreResult<Option<String>> {
        let entry: Option<VerificationEntry> =
            store::load(self.store.as_ref(), Table::Cache, code).await?;
        let Some(entry) = entry else {
            return Ok(None);
        };

        let issued: Vec<VerificationEntry> = store::scan_as(self.store.as_ref(), Table::Cache).await?;
        for stale in issued
            .iter()
            .filter(|issued| issued.email == entry.email && issued.purpose == PURPOSE)
        {
            self.store.delete(Table::Cache, &stale.key).await?;
        }

        Ok(Some(entry.email))
    }
}

fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
