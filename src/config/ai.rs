//! AI provider configuration (Gemini)

use serde::Deserialize;

use super::error::ValidationError;

/// Gemini API configuration.
///
/// The request intentionally carries no crate-level timeout or retry
/// settings: generation failures surface immediately and timeout behavior
/// is whatever the HTTP transport default provides.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: String,

    /// Model to invoke
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl AiConfig {
    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gemini_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }
        if self.model.is_empty() || self.model.contains('/') {
            return Err(ValidationError::InvalidModelName);
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gemini-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
