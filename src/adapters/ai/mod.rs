//! AI gateway adapters.

mod gemini_gateway;
mod mock_gateway;

pub use gemini_gateway::{GeminiConfig, GeminiGateway};
pub use mock_gateway::MockAiGateway;
