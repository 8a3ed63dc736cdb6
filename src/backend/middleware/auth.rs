/**
 * Authentication Middleware
 *
 * Protects every non-public route. The middleware resolves the caller from
 * the `Authorization` header and attaches their `Identity` to the request
 * extensions; handlers pick it up through the `AuthUser` extractor.
 *
 * - No token: 401 `No token is present`
 * - Bad or expired token: 403 `Token is invalid or expires`
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::identity::{authenticate, Authentication, Identity};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::fail_response;

pub const NO_TOKEN: &str = "No token is present";
pub const INVALID_TOKEN: &str = "Token is invalid or expires";

pub async fn auth_middleware(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &keys) {
        Authentication::Unauthenticated => {
            tracing::warn!("Missing token for {}", request.uri().path());
            fail_response(StatusCode::UNAUTHORIZED, NO_TOKEN)
        }
        Authentication::InvalidOrExpired => {
            tracing::warn!("Invalid token for {}", request.uri().path());
            fail_response(StatusCode::FORBIDDEN, INVALID_TOKEN)
        }
        Authentication::Authenticated(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
    }
}

/// Axum extractor for the authenticated caller
///
/// Only valid on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("Identity not found in request extensions");
                fail_response(StatusCode::UNAUTHORIZED, NO_TOKEN)
            })
    }
}
