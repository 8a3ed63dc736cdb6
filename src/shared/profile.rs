//! User Profile and Match Records
//!
//! Profiles are stored per email. Only the fields the chat, activity and
//! match components read are modelled explicitly.

use serde::{Deserialize, Serialize};

/// Binary gender model used by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Signed up, profile not filled in yet
    Pending,
    /// Profile completed; eligible for matching
    Active,
}

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    /// bcrypt hash; stripped before a profile leaves the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub location: Option<String>,
    /// Up to three interest tags
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub status: UserStatus,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: String,
}

impl UserProfile {
    /// A freshly signed-up account
    pub fn pending(email: impl Into<String>, password_hash: String) -> Self {
        Self {
            email: email.into(),
            password_hash: Some(password_hash),
            name: None,
            gender: None,
            location: None,
            interests: Vec::new(),
            photo: None,
            status: UserStatus::Pending,
            email_verified: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Copy without credentials
    pub fn public(&self) -> Self {
        Self {
            password_hash: None,
            ..self.clone()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Profile fields a user may edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Cached daily match list for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub email: String,
    /// Ranked candidate emails, best first
    pub today: Vec<String>,
    pub computed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_strips_password() {
        let profile = UserProfile::pending("a@x.io", "hash".to_string());
        let json = serde_json::to_value(profile.public()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["status"], "PENDING");
    }

    #[test]
    fn test_profile_defaults_when_fields_missing() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"a@x.io","status":"ACTIVE","created_at":"2023-05-01T00:00:00Z","gender":"female"}"#,
        )
        .unwrap();
        assert!(profile.is_active());
        assert_eq!(profile.gender, Some(Gender::Female));
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_opposite_gender() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
    }
}
