/**
 * Account Handler Types
 *
 * Request and response bodies of the `/user` endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::shared::UserProfile;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// User's email address, also their identifier
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Change password request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PasswordRequest {
    pub password: String,
}

/// Query of `GET /user` and `GET /user/photo`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserQuery {
    pub email: String,
}

/// Session token returned at signup
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

/// Login result: the profile without credentials, plus a session token
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginData {
    #[serde(flatten)]
    pub user: UserProfile,
    pub token: String,
}

/// Location of a user's photo
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoLink {
    pub link: Option<String>,
}
