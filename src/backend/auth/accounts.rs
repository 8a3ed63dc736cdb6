/**
 * Account Service
 *
 * Signup, login, password changes, email verification and profile edits.
 *
 * # Signup Process
 *
 * 1. Validate email format and password length
 * 2. Check the email is not registered yet
 * 3. Hash the password with bcrypt and store a `PENDING` profile
 * 4. Send a verification email
 * 5. Return a session token
 *
 * If the verification email can't be sent the account still exists; the
 * caller gets a success envelope carrying a note instead of a token.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - Password hashes never leave the service
 */

use std::sync::Arc;

use crate::backend::auth::handlers::types::{
    AuthToken, LoginData, LoginRequest, PasswordRequest, PhotoLink, SignupRequest,
};
use crate::backend::auth::identity::Identity;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserDirectory;
use crate::backend::auth::verification::VerificationCodes;
use crate::backend::error::BackendError;
use crate::backend::mail::Mailer;
use crate::shared::messaging::validate_user_id;
use crate::shared::{ApiResponse, ProfileUpdate, UserProfile, UserStatus};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_INTERESTS: usize = 3;

pub const EMAIL_EXISTS: &str = "email already exists";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const USER_DOES_NOT_EXIST: &str = "User doesn't exist";
pub const WRONG_PASSWORD: &str = "Wrong password";
pub const MAIL_FAILED: &str = "Failed to send verification email";
pub const ALREADY_VERIFIED: &str = "Email has been verified or user not exists!";
pub const VERIFICATION_FAILED: &str = "Either verification is expired or already verified";
pub const TOO_MANY_INTERESTS: &str = "At most 3 interests are allowed";

const VERIFICATION_SUBJECT: &str = "Welcome to Mulberry! Please verify your email!";

#[derive(Clone)]
pub struct AccountService {
    users: UserDirectory,
    sessions: SessionKeys,
    codes: VerificationCodes,
    mailer: Arc<dyn Mailer>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(
        users: UserDirectory,
        sessions: SessionKeys,
        codes: VerificationCodes,
        mailer: Arc<dyn Mailer>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            sessions,
            codes,
            mailer,
            bcrypt_cost,
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<ApiResponse<AuthToken>, BackendError> {
        tracing::info!("Signup request for: {}", request.email);

        if validate_user_id("email", &request.email).is_err() || !request.email.contains('@') {
            tracing::warn!("Invalid email format: {}", request.email);
            return Ok(ApiResponse::fail(INVALID_EMAIL));
        }
        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Ok(ApiResponse::fail(PASSWORD_TOO_SHORT));
        }
        if self.users.get(&request.email).await?.is_some() {
            tracing::warn!("Signup failed: email already exists - {}", request.email);
            return Ok(ApiResponse::fail(EMAIL_EXISTS));
        }

        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)?;
        let profile = UserProfile::pending(request.email.as_str(), password_hash);
        if !self.users.create(&profile).await? {
            return Ok(ApiResponse::fail(EMAIL_EXISTS));
        }

        if !self.send_verification(&profile.email).await? {
            return Ok(ApiResponse::ok_with_message(MAIL_FAILED));
        }

        let token = self.sessions.issue(&profile.email)?;
        tracing::info!("User created successfully: {}", profile.email);
        Ok(ApiResponse::success(AuthToken { token }))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginData>, BackendError> {
        tracing::info!("Login request for: {}", request.email);

        let Some(user) = self.users.get(&request.email).await? else {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        };
        let valid = match &user.password_hash {
            Some(hash) => bcrypt::verify(&request.password, hash)?,
            None => false,
        };
        if !valid {
            tracing::warn!("Invalid password for user: {}", request.email);
            return Ok(ApiResponse::fail(WRONG_PASSWORD));
        }

        let token = self.sessions.issue(&user.email)?;
        Ok(ApiResponse::success(LoginData {
            user: user.public(),
            token,
        }))
    }

    pub async fn change_password(
        &self,
        identity: &Identity,
        request: PasswordRequest,
    ) -> Result<ApiResponse, BackendError> {
        tracing::info!("change_password for {}", identity.email);

        let Some(mut user) = self.users.get(&identity.email).await? else {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        };
        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Ok(ApiResponse::fail(PASSWORD_TOO_SHORT));
        }

        user.password_hash = Some(bcrypt::hash(&request.password, self.bcrypt_cost)?);
        self.users.put(&user).await?;
        Ok(ApiResponse::ok())
    }

    pub async fn resend_verification(&self, email: &str) -> Result<ApiResponse, BackendError> {
        tracing::info!("resend_verification for {}", email);

        match self.users.get(email).await? {
            Some(user) if !user.email_verified => {}
            _ => {
                tracing::info!("{} is verified already or does not exist", email);
                return Ok(ApiResponse::fail(ALREADY_VERIFIED));
            }
        }

        if !self.send_verification(email).await? {
            return Ok(ApiResponse::fail(MAIL_FAILED));
        }
        Ok(ApiResponse::ok())
    }

    pub async fn verify(&self, code: &str) -> Result<ApiResponse, BackendError> {
        tracing::info!("verify");

        let Some(email) = self.codes.redeem(code).await? else {
            tracing::warn!("Verification failed: no code found for {}", code);
            return Ok(ApiResponse::fail(VERIFICATION_FAILED));
        };
        let Some(mut user) = self.users.get(&email).await? else {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        };

        user.email_verified = true;
        self.users.put(&user).await?;
        Ok(ApiResponse::ok())
    }

    pub async fn get_user(&self, email: &str) -> Result<ApiResponse<UserProfile>, BackendError> {
        tracing::info!("get_user {}", email);
        Ok(match self.users.get(email).await? {
            Some(user) => ApiResponse::success(user.public()),
            None => ApiResponse::fail(USER_DOES_NOT_EXIST),
        })
    }

    pub async fn get_photo(&self, email: &str) -> Result<ApiResponse<PhotoLink>, BackendError> {
        tracing::info!("get_photo {}", email);
        Ok(match self.users.get(email).await? {
            Some(user) => ApiResponse::success(PhotoLink { link: user.photo }),
            None => ApiResponse::fail(USER_DOES_NOT_EXIST),
        })
    }

    /// Replace the editable profile fields and activate the account
    ///
    /// Credentials, creation time and verification state are kept.
    pub async fn update_profile(
        &self,
        identity: &Identity,
        update: ProfileUpdate,
    ) -> Result<ApiResponse, BackendError> {
        tracing::info!("update_profile for {}", identity.email);

        let Some(existing) = self.users.get(&identity.email).await? else {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        };
        if update.interests.len() > MAX_INTERESTS {
            return Ok(ApiResponse::fail(TOO_MANY_INTERESTS));
        }

        let profile = UserProfile {
            name: update.name,
            gender: update.gender,
            location: update.location,
            interests: update.interests,
            photo: update.photo,
            status: UserStatus::Active,
            ..existing
        };
        self.users.put(&profile).await?;
        Ok(ApiResponse::ok())
    }

    /// Issue a code and mail the link; returns whether the mail went out
    async fn send_verification(&self, email: &str) -> Result<bool, BackendError> {
        let link = self.codes.issue_link(email).await?;
        let html = format!(
            "Hi<br><br>Welcome to Mulberry!<br><br>\
             Please click this link to verify your email: \
             <a href=\"{link}\" target=\"_blank\">{link}</a><br>\
             Your verification link will expire in 30 minutes.<br><br><br>Cheers,<br>Mulberry"
        );

        match self.mailer.send(email, VERIFICATION_SUBJECT, &html).await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::error!("Email sent to {} failed: {}", email, e);
                Ok(false)
            }
        }
    }
}
