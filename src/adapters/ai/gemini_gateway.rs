//! Gemini gateway - implementation of AiGateway for Google's Generative
//! Language API.
//!
//! The transcript is flattened into a single prompt string and sent to one
//! `generateContent` call; the reply is the text of the first candidate.
//! There is deliberately no retry loop, no streaming, and no client-side
//! timeout - a failed generation surfaces immediately and timeout behavior
//! is whatever the transport default provides.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-flash-latest");
//!
//! let gateway = GeminiGateway::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::conversation::Transcript;
use crate::ports::{AiError, AiGateway};

/// Configuration for the Gemini gateway.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication (sent as a query parameter).
    api_key: Secret<String>,
    /// Model to invoke (e.g. "gemini-flash-latest").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-flash-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Exposes the API key (for building the request URL).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API gateway implementation.
pub struct GeminiGateway {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGateway {
    /// Creates a new Gemini gateway with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key()
        )
    }
}

/// Flattens a transcript into the single prompt string the model receives.
///
/// The system instruction comes first (if non-empty), then each entry as
/// `"<Role label>: <content>"` separated by blank lines, then a trailing
/// `"Assistant:"` cue inviting the model's continuation. Entry order is
/// preserved verbatim.
pub fn assemble_prompt(transcript: &Transcript) -> String {
    let mut prompt = String::new();

    if !transcript.system().is_empty() {
        prompt.push_str("System Instruction:\n");
        prompt.push_str(transcript.system());
        prompt.push_str("\n\n");
    }

    let history = transcript
        .entries()
        .iter()
        .map(|entry| format!("{}: {}", entry.role.label(), entry.content))
        .collect::<Vec<_>>()
        .join("\n\n");
    prompt.push_str(&history);

    prompt.push_str("\n\nAssistant:");
    prompt
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn generate(&self, transcript: &Transcript) -> Result<String, AiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: assemble_prompt(transcript),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::provider(status.as_u16(), body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiError::EmptyCompletion);
        }

        Ok(text)
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
