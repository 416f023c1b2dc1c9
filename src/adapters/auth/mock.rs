//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port with a token → identity table,
//! avoiding the need for real Google tokens in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedIdentity};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to identities. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated identities
    tokens: RwLock<HashMap<String, AuthenticatedIdentity>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to an identity.
    pub fn with_identity(self, token: impl Into<String>, identity: AuthenticatedIdentity) -> Self {
        self.tokens.write().unwrap().insert(token.into(), identity);
        self
    }

    /// Adds a valid token with a simple test identity derived from an email.
    pub fn with_test_identity(self, token: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email.split('@').next().map(|s| s.to_string());
        let identity = AuthenticatedIdentity::new(email, name, None, "google");
        self.with_identity(token, identity)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().as_ref() {
            return Err(error.clone());
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
