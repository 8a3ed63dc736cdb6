/**
 * Router Configuration
 *
 * Combines the public and protected route groups into one Axum router.
 * Unknown routes, and known routes called with the wrong method, get a 400
 * `fail` envelope. CORS allows any origin.
 */

use axum::{http::StatusCode, response::Response, Router};
use tower_http::cors::CorsLayer;

use crate::backend::error::fail_response;
use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

pub const NO_HANDLER: &str = "No proper handler found for the endpoint";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(&app_state))
        .fallback(no_handler)
        .method_not_allowed_fallback(no_handler)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn no_handler() -> Response {
    fail_response(StatusCode::BAD_REQUEST, NO_HANDLER)
}
