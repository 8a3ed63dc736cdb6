//! Activity Module
//!
//! Discounted activities offered to two users once their conversation is
//! mutual.
//!
//! # Architecture
//!
//! - **`catalog`** - The fixed list of partner activities
//! - **`generator`** - Offer creation and acceptance over the store
//! - **`service`** - Envelope-returning entry points
//! - **`handlers`** - HTTP handlers
//!
//! # Lifecycle
//!
//! 1. **Generate**: both users have written → one offer stored under the conversation key
//! 2. **Announce**: the offer id is appended to the conversation as a system message
//! 3. **Accept**: each participant sets their own acceptance flag

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod service;

pub use catalog::default_catalog;
pub use generator::{ActivityError, ActivityOfferGenerator};
pub use service::ActivityService;
