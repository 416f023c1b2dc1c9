//! Session validation port for sign-in token verification.
//!
//! Provider-agnostic: implementations exist for Google ID tokens and for
//! mock testing; any OIDC provider yielding an email identity would fit.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedIdentity};

/// Validates sign-in tokens and extracts the caller's identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token's signature, issuer, audience, and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad-signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::MissingEmail` when the token has no email claim
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a raw bearer token (without the "Bearer " prefix) and
    /// returns the authenticated identity.
    async fn validate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError>;
}
