//! AI gateway port - interface to the hosted generative-language model.
//!
//! The gateway is deliberately thin: it takes a complete transcript, performs
//! exactly one model invocation, and returns the raw text of the first
//! candidate. No streaming, no retries, no token accounting - callers treat
//! any failure as a single generic generation error.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::Transcript;

/// Port for generating a single completion from the conversation transcript.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Invokes the model once and returns the raw text of the first
    /// candidate reply.
    async fn generate(&self, transcript: &Transcript) -> Result<String, AiError>;
}

/// AI gateway errors.
///
/// These carry enough detail for logging; at the operation boundary they all
/// collapse into one generic "generation failed" condition.
#[derive(Debug, Clone, Error)]
pub enum AiError {
    /// Transport-level failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider's response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider returned a response with no candidate text.
    #[error("empty completion")]
    EmptyCompletion,
}

impl AiError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a provider error.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
