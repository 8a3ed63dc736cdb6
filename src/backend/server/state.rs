/**
 * Application State Management
 *
 * `AppState` holds one handle per service. The `FromRef` implementations
 * let each handler extract only the service it works with, e.g.
 * `State(chat): State<ChatService>`.
 *
 * Every service is cheap to clone: they share the store and generator
 * through `Arc`.
 */

use axum::extract::FromRef;

use crate::backend::activity::ActivityService;
use crate::backend::auth::{AccountService, SessionKeys};
use crate::backend::chat::ChatService;
use crate::backend::matching::MatchService;

#[derive(Clone)]
pub struct AppState {
    /// Token keys, also handed to the auth middleware
    pub sessions: SessionKeys,
    pub accounts: AccountService,
    pub chat: ChatService,
    pub activities: ActivityService,
    pub matches: MatchService,
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for ChatService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat.clone()
    }
}

impl FromRef<AppState> for ActivityService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.activities.clone()
    }
}

impl FromRef<AppState> for MatchService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.matches.clone()
    }
}
