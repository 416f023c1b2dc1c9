//! In-memory implementation of UserDirectory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::case::CaseError;
use crate::domain::user::UserProfile;
use crate::ports::UserDirectory;

/// In-memory user directory keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a profile, returning self for test setup chaining.
    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.users
            .write()
            .unwrap()
            .insert(profile.email().to_string(), profile);
        self
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, CaseError> {
        Ok(self.users.read().unwrap().get(email).cloned())
    }

    async fn upsert_by_email(&self, profile: &UserProfile) -> Result<UserProfile, CaseError> {
        let mut users = self.users.write().unwrap();
        let stored = users
            .entry(profile.email().to_string())
            .or_insert_with(|| profile.clone());
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthenticatedIdentity, UserId};

    fn profile(email: &str) -> UserProfile {
        let identity = AuthenticatedIdentity::new(email, None, None, "google");
        UserProfile::from_identity(UserId::new(), &identity).unwrap()
    }

    #[tokio::test]
    async fn upsert_creates_on_first_sign_in() {
        let directory = InMemoryUserDirectory::new();
        let stored = directory.upsert_by_email(&profile("a@example.com")).await.unwrap();

        assert_eq!(stored.email(), "a@example.com");
        let found = directory.find_by_email("a@example.com").await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn upsert_keeps_the_first_record() {
        let directory = InMemoryUserDirectory::new();
        let first = directory.upsert_by_email(&profile("a@example.com")).await.unwrap();
        let second = directory.upsert_by_email(&profile("a@example.com")).await.unwrap();

        // Same internal id on repeat sign-ins.
        assert_eq!(first.id(), second.id());
    }

    #[tokio::test]
    async fn find_unknown_email_is_none() {
        let directory = InMemoryUserDirectory::new();
        let found = directory.find_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }
}
