//! Shared Module
//!
//! This module contains the types and data structures that describe the
//! domain: conversations, messages, activity offers, profiles and the
//! response envelope. They carry no storage or transport concerns and are
//! serialized as-is into the key-value store and onto the wire.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Response envelope
pub mod envelope;

/// Conversation and message types
pub mod messaging;

/// Activity offer types
pub mod activity;

/// User profile and match records
pub mod profile;

/// Re-export commonly used types for convenience
pub use activity::{ActivityDescriptor, ActivityOffer, OfferParticipant};
pub use config::{
    AppConfig, AppConfigBuilder, ConfigError, SmtpConfig, MAX_MATCH_LIMIT, MAX_TOKEN_TTL_MINUTES,
};
pub use envelope::{ApiResponse, Status};
pub use error::SharedError;
pub use profile::{Gender, MatchRecord, ProfileUpdate, UserProfile, UserStatus};
