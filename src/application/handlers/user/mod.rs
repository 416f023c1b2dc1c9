//! User directory handlers.

mod ensure_user;

pub use ensure_user::{EnsureUserCommand, EnsureUserHandler};
