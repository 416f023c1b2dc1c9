//! Intake module - the conversation orchestration rules.
//!
//! This module owns the prompt constants and the interpretation of the AI's
//! follow-up replies (the readiness sentinel). The surrounding state machine
//! (active → completed) lives on the [`Case`](crate::domain::case::Case)
//! aggregate; the per-request flow is driven by the application handlers.

mod prompts;
mod reply;

pub use prompts::{FOLLOWUP_SYSTEM_PROMPT, READY_NOTICE, READY_SENTINEL, SOLUTION_SYSTEM_PROMPT};
pub use reply::FollowUpReply;
