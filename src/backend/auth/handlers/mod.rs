//! Account Handlers Module
//!
//! HTTP handlers for the `/user` endpoints. Each handler unpacks the request
//! and delegates to `AccountService`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Registration
//! ├── login.rs    - Authentication
//! ├── verify.rs   - Email verification and resend
//! └── profile.rs  - Password, profile and photo
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /user/signup (public)
//! - **`login`** - POST /user/login (public)
//! - **`resend_verification`** - POST /user/verify/resend/{email} (public)
//! - **`verify`** - GET|POST /user/verify/{code} (public)
//! - **`change_password`** - PUT /user/password
//! - **`get_user`** - GET /user?email=
//! - **`update_user`** - PUT /user
//! - **`get_photo`** - GET /user/photo?email=

/// Request and response types
pub mod types;

pub mod signup;
pub mod login;
pub mod verify;
pub mod profile;

pub use types::{AuthToken, LoginData, LoginRequest, PasswordRequest, PhotoLink, SignupRequest, UserQuery};

pub use signup::signup;
pub use login::login;
pub use verify::{resend_verification, verify};
pub use profile::{change_password, get_photo, get_user, update_user};
