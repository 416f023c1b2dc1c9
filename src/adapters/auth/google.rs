//! Google OIDC adapter for sign-in token validation.
//!
//! This adapter implements the `SessionValidator` port using Google as the
//! identity provider. It validates ID tokens by:
//!
//! 1. Fetching Google's JWKS from the published certs endpoint
//! 2. Validating the token signature against the matching public key
//! 3. Validating issuer, audience (our OAuth client id), and expiry claims
//! 4. Mapping claims to the domain `AuthenticatedIdentity` type
//!
//! The OAuth dance itself (consent screen, code exchange) happens in the
//! client application; the backend only ever sees the resulting ID token.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedIdentity};
use crate::ports::SessionValidator;

/// Provider tag recorded on user profiles created from these tokens.
const PROVIDER: &str = "google";

/// Configuration for the Google OIDC adapter.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// OAuth client id - the expected audience claim.
    pub client_id: String,

    /// Expected issuer. Google issues both with and without the scheme, so
    /// the bare form is accepted as well.
    pub issuer_url: String,

    /// JWKS endpoint for signature verification keys.
    pub jwks_url: String,

    /// How long to cache the JWKS before refetching. Defaults to 1 hour.
    pub jwks_cache_duration: Option<Duration>,
}

impl GoogleConfig {
    /// Creates a configuration for the given OAuth client id with Google's
    /// standard endpoints.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            issuer_url: "https://accounts.google.com".to_string(),
            jwks_url: "https://www.googleapis.com/oauth2/v3/certs".to_string(),
            jwks_cache_duration: None,
        }
    }

    /// Sets a custom issuer URL.
    pub fn with_issuer_url(mut self, url: impl Into<String>) -> Self {
        self.issuer_url = url.into();
        self
    }

    /// Sets a custom JWKS endpoint.
    pub fn with_jwks_url(mut self, url: impl Into<String>) -> Self {
        self.jwks_url = url.into();
        self
    }

    /// Sets a custom JWKS cache duration.
    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.jwks_cache_duration = Some(duration);
        self
    }

    fn cache_duration(&self) -> Duration {
        self.jwks_cache_duration
            .unwrap_or(Duration::from_secs(3600))
    }

    /// Accepted issuer values: Google emits the issuer both with and
    /// without the https scheme.
    fn accepted_issuers(&self) -> Vec<String> {
        let with_scheme = self.issuer_url.trim_end_matches('/').to_string();
        let bare = with_scheme
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string();
        vec![with_scheme, bare]
    }
}

/// ID token claims we read from Google tokens.
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    /// Subject - Google's stable account id (unused; email is our key).
    #[allow(dead_code)]
    sub: String,

    /// Email address - the identity the user directory is keyed on.
    #[serde(default)]
    email: Option<String>,

    /// Display name.
    #[serde(default)]
    name: Option<String>,

    /// Avatar image URL.
    #[serde(default)]
    picture: Option<String>,
}

/// Google session validator with a cached JWKS.
pub struct GoogleSessionValidator {
    config: GoogleConfig,
    client: reqwest::Client,
    cached_jwks: RwLock<Option<CachedJwks>>,
}

struct CachedJwks {
    keys: JwkSet,
    fetched_at: Instant,
}

impl GoogleSessionValidator {
    /// Creates a new validator. The JWKS is fetched lazily on first use.
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            cached_jwks: RwLock::new(None),
        }
    }

    /// Returns the JWKS, refetching if the cache is stale or empty.
    async fn jwks(&self) -> Result<JwkSet, AuthError> {
        {
            let cached = self.cached_jwks.read().await;
            if let Some(cached) = cached.as_ref() {
                if cached.fetched_at.elapsed() < self.config.cache_duration() {
                    return Ok(cached.keys.clone());
                }
            }
        }

        let keys: JwkSet = self
            .client
            .get(&self.config.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("JWKS fetch failed: {}", e)))?
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("JWKS parse failed: {}", e)))?;

        let mut cached = self.cached_jwks.write().await;
        *cached = Some(CachedJwks {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }
}

#[async_trait]
impl SessionValidator for GoogleSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        let kid = header.kid.ok_or(AuthError::InvalidToken)?;

        let jwks = self.jwks().await?;
        let jwk = jwks.find(&kid).ok_or(AuthError::InvalidToken)?;
        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::InvalidToken)?;

        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[&self.config.client_id]);
        validation.set_issuer(&self.config.accepted_issuers());

        let data =
            decode::<GoogleClaims>(token, &key, &validation).map_err(map_decode_error)?;

        let claims = data.claims;
        let email = match claims.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(AuthError::MissingEmail),
        };

        Ok(AuthenticatedIdentity::new(
            email,
            claims.name,
            claims.picture,
            PROVIDER,
        ))
    }
}

/// Maps jsonwebtoken failures onto the domain auth error taxonomy.
fn map_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    }
}
