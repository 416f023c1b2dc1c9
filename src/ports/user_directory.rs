//! User directory port.

use async_trait::async_trait;

use crate::domain::case::CaseError;
use crate::domain::user::UserProfile;

/// Persistence contract for the user directory.
///
/// The directory maps external identities (keyed by email) to internal user
/// records. Records are created on first sign-in and never deleted.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user record by email identity.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, CaseError>;

    /// Inserts the profile if the email is not yet known. Returns the
    /// canonical stored record either way, so concurrent first sign-ins
    /// converge on one record.
    async fn upsert_by_email(&self, profile: &UserProfile) -> Result<UserProfile, CaseError>;
}
