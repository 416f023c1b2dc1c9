//! HTTP DTOs for the session endpoint.

use serde::Serialize;

use crate::domain::user::UserProfile;

/// The caller's own profile record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            email: profile.email().to_string(),
            name: profile.name().to_string(),
            avatar_url: profile.avatar_url().map(str::to_string),
            provider: profile.provider().to_string(),
        }
    }
}
