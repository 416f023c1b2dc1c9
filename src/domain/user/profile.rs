//! User profile - the internal record behind an external identity.
//!
//! A profile is created the first time an identity signs in and is never
//! deleted by this system. The email address is the unique external key.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedIdentity, Timestamp, UserId, ValidationError};

/// Internal user record mapping an external identity to a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    email: String,
    name: String,
    avatar_url: Option<String>,
    provider: String,
    created_at: Timestamp,
}

impl UserProfile {
    /// Creates a new profile from a verified external identity.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the identity carries an empty email
    pub fn from_identity(
        id: UserId,
        identity: &AuthenticatedIdentity,
    ) -> Result<Self, ValidationError> {
        if identity.email.is_empty() {
            return Err(ValidationError::empty("email"));
        }

        Ok(Self {
            id,
            email: identity.email.clone(),
            name: identity.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            avatar_url: identity.avatar_url.clone(),
            provider: identity.provider.clone(),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        email: String,
        name: String,
        avatar_url: Option<String>,
        provider: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            name,
            avatar_url,
            provider,
            created_at,
        }
    }

    /// Returns the internal user ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the unique email identity.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar image URL, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the auth provider tag (e.g. "google").
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns when the profile was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> AuthenticatedIdentity {
        AuthenticatedIdentity::new(
            "alice@example.com",
            Some("Alice".to_string()),
            Some("https://example.com/alice.png".to_string()),
            "google",
        )
    }

    #[test]
    fn from_identity_copies_claims() {
        let profile = UserProfile::from_identity(UserId::new(), &test_identity()).unwrap();

        assert_eq!(profile.email(), "alice@example.com");
        assert_eq!(profile.name(), "Alice");
        assert_eq!(profile.avatar_url(), Some("https://example.com/alice.png"));
        assert_eq!(profile.provider(), "google");
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let identity = AuthenticatedIdentity::new("bob@example.com", None, None, "google");
        let profile = UserProfile::from_identity(UserId::new(), &identity).unwrap();

        assert_eq!(profile.name(), "Unknown");
        assert!(profile.avatar_url().is_none());
    }

    #[test]
    fn empty_email_is_rejected() {
        let identity = AuthenticatedIdentity::new("", None, None, "google");
        let result = UserProfile::from_identity(UserId::new(), &identity);
        assert!(result.is_err());
    }
}
