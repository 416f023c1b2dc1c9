//! Foundation - shared value objects for the domain layer.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedIdentity};
pub use errors::ValidationError;
pub use ids::{CaseId, MessageId, UserId};
pub use timestamp::Timestamp;
