//! EnsureUserHandler - creates the user record on first sign-in.

use std::sync::Arc;

use crate::domain::case::CaseError;
use crate::domain::foundation::{AuthenticatedIdentity, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserDirectory;

/// Command carrying the freshly validated sign-in identity.
#[derive(Debug, Clone)]
pub struct EnsureUserCommand {
    pub identity: AuthenticatedIdentity,
}

/// Handler that maps an external identity to the internal user record,
/// creating it on first sign-in.
pub struct EnsureUserHandler {
    users: Arc<dyn UserDirectory>,
}

impl EnsureUserHandler {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: EnsureUserCommand) -> Result<UserProfile, CaseError> {
        let candidate = UserProfile::from_identity(UserId::new(), &cmd.identity)
            .map_err(CaseError::from)?;
        self.users.upsert_by_email(&candidate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserDirectory;

    fn identity(email: &str) -> AuthenticatedIdentity {
        AuthenticatedIdentity::new(email, Some("Alice".to_string()), None, "google")
    }

    #[tokio::test]
    async fn first_sign_in_creates_the_record() {
        let users = Arc::new(InMemoryUserDirectory::new());
        let handler = EnsureUserHandler::new(users.clone());

        let profile = handler
            .handle(EnsureUserCommand {
                identity: identity("alice@example.com"),
            })
            .await
            .unwrap();

        assert_eq!(profile.email(), "alice@example.com");
        let found = users.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found, Some(profile));
    }

    #[tokio::test]
    async fn repeat_sign_in_keeps_the_same_record() {
        let users = Arc::new(InMemoryUserDirectory::new());
        let handler = EnsureUserHandler::new(users);

        let first = handler
            .handle(EnsureUserCommand {
                identity: identity("alice@example.com"),
            })
            .await
            .unwrap();
        let second = handler
            .handle(EnsureUserCommand {
                identity: identity("alice@example.com"),
            })
            .await
            .unwrap();

        assert_eq!(first.id(), second.id());
    }

    #[tokio::test]
    async fn identity_without_email_fails_validation() {
        let handler = EnsureUserHandler::new(Arc::new(InMemoryUserDirectory::new()));

        let result = handler
            .handle(EnsureUserCommand {
                identity: AuthenticatedIdentity::new("", None, None, "google"),
            })
            .await;

        assert!(matches!(result, Err(CaseError::ValidationFailed { .. })));
    }
}
