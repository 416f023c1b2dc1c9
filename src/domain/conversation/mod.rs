//! Conversation module - immutable message records and transcripts.

mod message;
mod transcript;

pub use message::{Message, MessageRole};
pub use transcript::{ChatEntry, Transcript};
