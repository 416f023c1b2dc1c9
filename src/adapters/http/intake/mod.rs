//! HTTP module for the AI intake endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::IntakeHandlers;
pub use routes::intake_routes;
