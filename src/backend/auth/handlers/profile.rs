/**
 * Profile Handlers
 *
 * - `PUT /user/password` - Change the caller's password
 * - `GET /user?email=` - Any user's public profile
 * - `PUT /user` - Replace the caller's profile fields
 * - `GET /user/photo?email=` - Any user's photo link
 */

use axum::extract::State;

use crate::backend::auth::accounts::AccountService;
use crate::backend::auth::handlers::types::{PasswordRequest, PhotoLink, UserQuery};
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, ApiQuery, AuthUser};
use crate::shared::{ApiResponse, ProfileUpdate, UserProfile};

pub async fn change_password(
    State(accounts): State<AccountService>,
    AuthUser(identity): AuthUser,
    ApiJson(request): ApiJson<PasswordRequest>,
) -> Result<ApiResponse, BackendError> {
    accounts.change_password(&identity, request).await
}

pub async fn get_user(
    State(accounts): State<AccountService>,
    AuthUser(_): AuthUser,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> Result<ApiResponse<UserProfile>, BackendError> {
    accounts.get_user(&query.email).await
}

pub async fn update_user(
    State(accounts): State<AccountService>,
    AuthUser(identity): AuthUser,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Result<ApiResponse, BackendError> {
    accounts.update_profile(&identity, update).await
}

pub async fn get_photo(
    State(accounts): State<AccountService>,
    AuthUser(_): AuthUser,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> Result<ApiResponse<PhotoLink>, BackendError> {
    accounts.get_photo(&query.email).await
}
