//! HTTP module for case CRUD endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use dto::MessageResponse;
pub use handlers::CaseHandlers;
pub use routes::case_routes;
