//! Authentication types for the domain layer.
//!
//! These types represent an authenticated identity extracted from a verified
//! sign-in token. They have **no provider dependencies** - any OAuth provider
//! (Google, or a mock in tests) can populate them via the `SessionValidator`
//! port. The email address is the stable key linking the external identity to
//! the internal user directory.

use thiserror::Error;

/// Authenticated identity extracted from a validated sign-in token.
///
/// This is a **domain type** with no provider dependencies. It carries the
/// claims the user directory needs to create a record on first sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    /// The user's email address - the stable external identity.
    pub email: String,

    /// Display name if the provider supplied one.
    pub name: Option<String>,

    /// Avatar image URL if the provider supplied one.
    pub avatar_url: Option<String>,

    /// Which auth provider vouched for this identity (e.g. "google").
    pub provider: String,
}

impl AuthenticatedIdentity {
    /// Creates a new authenticated identity.
    ///
    /// Typically called by a `SessionValidator` adapter after successfully
    /// verifying a token.
    pub fn new(
        email: impl Into<String>,
        name: Option<String>,
        avatar_url: Option<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name,
            avatar_url,
            provider: provider.into(),
        }
    }

    /// Returns the display name, or the email as fallback.
    pub fn name_or_email(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token is valid but carries no usable email claim.
    #[error("Token has no email identity")]
    MissingEmail,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
