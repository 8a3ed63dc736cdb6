/**
 * Identity Resolution
 *
 * Turns the `Authorization` header into one of three outcomes. The routing
 * layer matches on the result to pick a 401, a 403 or the handler.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::backend::auth::sessions::SessionKeys;

/// The acting user of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Outcome of resolving a request's credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// No token was sent
    Unauthenticated,
    /// A token was sent but is malformed, forged or expired
    InvalidOrExpired,
    Authenticated(Identity),
}

/// Resolve the caller from `Authorization: <token>` or `Authorization: Bearer <token>`
pub fn authenticate(headers: &HeaderMap, keys: &SessionKeys) -> Authentication {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Authentication::Unauthenticated;
    };
    let Ok(raw) = value.to_str() else {
        return Authentication::InvalidOrExpired;
    };

    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        return Authentication::Unauthenticated;
    }

    match keys.verify(token) {
        Ok(claims) => Authentication::Authenticated(Identity { email: claims.sub }),
        Err(e) => {
            tracing::debug!("Token rejected: {}", e);
            Authentication::InvalidOrExpired
        }
    }
}
