/**
 * API Routes
 *
 * # Public
 * - `POST /user/signup`
 * - `POST /user/login`
 * - `POST /user/verify/resend/{email}`
 * - `GET|POST /user/verify/{code}`
 *
 * # Protected (token required)
 * - `PUT /user/password`
 * - `GET /user?email=`, `PUT /user`
 * - `GET /user/photo?email=`
 * - `GET /chat`
 * - `GET /chat/message?target_user_email=`
 * - `POST /chat/message/{target_email}`
 * - `GET /activity/{activity_id}`
 * - `PUT /activity/status/{activity_id}`
 * - `GET /match`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::activity::handlers::{accept_activity, get_activity};
use crate::backend::auth::handlers::{
    change_password, get_photo, get_user, login, resend_verification, signup, update_user, verify,
};
use crate::backend::chat::handlers::{get_messages, list_chats, send_message};
use crate::backend::matching::handlers::get_matches;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Routes that skip the token check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user/verify/resend/{email}", post(resend_verification))
        .route("/user/verify/{code}", get(verify).post(verify))
}

/// Routes behind `auth_middleware`
pub fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/user", get(get_user).put(update_user))
        .route("/user/password", put(change_password))
        .route("/user/photo", get(get_photo))
        .route("/chat", get(list_chats))
        .route("/chat/message", get(get_messages))
        .route("/chat/message/{target_email}", post(send_message))
        .route("/activity/{activity_id}", get(get_activity))
        .route("/activity/status/{activity_id}", put(accept_activity))
        .route("/match", get(get_matches))
        .route_layer(from_fn_with_state(app_state.sessions.clone(), auth_middleware))
}
