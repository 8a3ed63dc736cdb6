//! Authentication Module
//!
//! Accounts, sessions and request identity.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - Profile storage in the `user` table
//! ├── sessions.rs      - JWT token management
//! ├── identity.rs      - Authorization header resolution
//! ├── verification.rs  - Email verification codes
//! ├── accounts.rs      - Account operations behind the `/user` endpoints
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → `PENDING` user created → verification mail sent → token returned
//! 2. **Verify**: mailed link → code redeemed → email marked verified
//! 3. **Login**: email and password → bcrypt check → profile and token returned
//! 4. **Profile**: token → profile filled in → status becomes `ACTIVE`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs whose subject is the user's email
//! - Tokens expire after 30 minutes unless configured otherwise
//! - Password hashes are stripped from every profile that leaves the backend

/// Profile storage
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Caller identity from request headers
pub mod identity;

/// Email verification codes
pub mod verification;

/// Account operations
pub mod accounts;

/// HTTP handlers for the `/user` endpoints
pub mod handlers;

pub use accounts::AccountService;
pub use identity::{authenticate, Authentication, Identity};
pub use sessions::{Claims, SessionKeys};
pub use users::UserDirectory;
pub use verification::VerificationCodes;
