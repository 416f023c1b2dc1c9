//! Authentication configuration (Google OAuth)

use serde::Deserialize;

use super::error::ValidationError;

/// Google sign-in configuration.
///
/// The OAuth dance itself happens in the client; the backend only verifies
/// the resulting ID tokens against Google's published keys.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// OAuth client id - the expected audience of incoming ID tokens
    pub google_client_id: String,

    /// Issuer URL for token validation
    #[serde(default = "default_issuer")]
    pub issuer_url: String,

    /// JWKS endpoint for signature verification keys
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.google_client_id.is_empty() {
            return Err(ValidationError::MissingRequired("GOOGLE_CLIENT_ID"));
        }
        if self.google_client_id.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidGoogleClientId);
        }
        Ok(())
    }
}

fn default_issuer() -> String {
    "https://accounts.google.com".to_string()
}

fn default_jwks_url() -> String {
    "https://www.googleapis.com/oauth2/v3/certs".to_string()
}
