//! Mock AI gateway for testing.
//!
//! Configurable to return queued replies or inject errors, and records every
//! transcript it receives so tests can assert on what was sent.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockAiGateway::new()
//!     .with_reply("Which state are you in?")
//!     .with_reply("READY_FOR_SOLUTION");
//!
//! let text = gateway.generate(&transcript).await?;
//! assert_eq!(text, "Which state are you in?");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::conversation::Transcript;
use crate::ports::{AiError, AiGateway};

/// Reply returned when the queue is empty.
const DEFAULT_REPLY: &str = "Could you tell me more about your situation?";

/// Mock AI gateway with queued replies and call capture.
#[derive(Debug, Clone, Default)]
pub struct MockAiGateway {
    /// Pre-configured replies, consumed in order.
    replies: Arc<Mutex<VecDeque<Result<String, AiError>>>>,
    /// Every transcript passed to `generate`, in call order.
    calls: Arc<Mutex<Vec<Transcript>>>,
}

impl MockAiGateway {
    /// Creates a new mock gateway with no queued replies.
    ///
    /// With an empty queue, `generate` returns a fixed placeholder question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns every transcript received so far.
    pub fn calls(&self) -> Vec<Transcript> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiGateway for MockAiGateway {
    async fn generate(&self, transcript: &Transcript) -> Result<String, AiError> {
        self.calls.lock().unwrap().push(transcript.clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Ok(DEFAULT_REPLY.to_string()),
        }
    }
}
